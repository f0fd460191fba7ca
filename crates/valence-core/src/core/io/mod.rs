use crate::core::models::term::{TermError, TopologyError};
use thiserror::Error;

pub mod frames;
pub mod table;

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Invalid term {index} in '{path}': {source}")]
    Term {
        path: String,
        index: usize,
        source: TermError,
    },
    #[error("Inconsistent table '{path}': {source}")]
    Topology {
        path: String,
        source: TopologyError,
    },
}
