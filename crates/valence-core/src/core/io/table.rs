use super::TableLoadError;
use crate::core::models::coordinate::InternalCoordinate;
use crate::core::models::term::{TermKind, ValenceTerm};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    #[serde(default)]
    coordinates: Vec<InternalCoordinate>,
    #[serde(default)]
    terms: Vec<RawTerm>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTerm {
    kind: String,
    ics: Vec<usize>,
    pars: Vec<f64>,
}

/// A snapshot of both stores: coordinate values and the term table referencing them.
#[derive(Debug, Clone, PartialEq)]
pub struct ValenceTable {
    pub coordinates: Vec<InternalCoordinate>,
    pub terms: Vec<ValenceTerm>,
}

impl ValenceTable {
    pub fn load(path: &Path) -> Result<Self, TableLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TableLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    /// Parses a snapshot; `origin` only labels errors.
    pub fn parse(content: &str, origin: &str) -> Result<Self, TableLoadError> {
        let raw: RawTable = toml::from_str(content).map_err(|e| TableLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        let num_coordinates = raw.coordinates.len();
        let mut terms = Vec::with_capacity(raw.terms.len());
        for (index, term) in raw.terms.into_iter().enumerate() {
            let built = term
                .kind
                .parse::<TermKind>()
                .and_then(|kind| ValenceTerm::from_parts(kind, &term.ics, &term.pars))
                .map_err(|source| TableLoadError::Term {
                    path: origin.to_string(),
                    index,
                    source,
                })?;
            built
                .check_coordinates(index, num_coordinates)
                .map_err(|source| TableLoadError::Topology {
                    path: origin.to_string(),
                    source,
                })?;
            terms.push(built);
        }

        Ok(Self {
            coordinates: raw.coordinates,
            terms,
        })
    }
}
