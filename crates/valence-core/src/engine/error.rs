use thiserror::Error;

use super::config::ConfigError;

pub use crate::core::models::term::TopologyError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid topology: {0}")]
    Topology(#[from] TopologyError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(
        "Frame {frame} holds {found} value(s), but the table has {expected} internal coordinate(s)"
    )]
    FrameSize {
        frame: usize,
        expected: usize,
        found: usize,
    },
}
