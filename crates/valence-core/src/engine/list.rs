use super::backward::accumulate_gradients;
use super::error::TopologyError;
use super::forward::evaluate_energy;
use crate::core::forcefield::term::KindEnergies;
use crate::core::models::coordinate::InternalCoordinate;
use crate::core::models::term::ValenceTerm;

/// The term table of one topology.
///
/// Built once by the setup layer, then evaluated against changing coordinate values on
/// every step. Only the per-term energies change after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValenceList {
    terms: Vec<ValenceTerm>,
}

impl ValenceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: Vec::with_capacity(capacity),
        }
    }

    /// Appends a term and returns its index in the table.
    pub fn add_term(&mut self, term: ValenceTerm) -> usize {
        self.terms.push(term);
        self.terms.len() - 1
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[ValenceTerm] {
        &self.terms
    }

    pub fn terms_mut(&mut self) -> &mut [ValenceTerm] {
        &mut self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValenceTerm> {
        self.terms.iter()
    }

    /// Checks every coordinate reference against a table of `num_coordinates` entries.
    ///
    /// Meant to run once per topology; the evaluation passes themselves do not check.
    pub fn validate(&self, num_coordinates: usize) -> Result<(), TopologyError> {
        self.terms
            .iter()
            .enumerate()
            .try_for_each(|(i, term)| term.check_coordinates(i, num_coordinates))
    }

    /// Serial forward pass; see [`evaluate_energy`].
    pub fn forward(&mut self, coords: &[InternalCoordinate]) -> f64 {
        evaluate_energy(coords, &mut self.terms)
    }

    /// Serial backward pass; see [`accumulate_gradients`].
    pub fn back(&self, coords: &mut [InternalCoordinate]) {
        accumulate_gradients(coords, &self.terms)
    }

    /// Energy per functional form, as stored by the last forward pass.
    pub fn energies_by_kind(&self) -> KindEnergies {
        KindEnergies::from_terms(&self.terms)
    }
}

impl From<Vec<ValenceTerm>> for ValenceList {
    fn from(terms: Vec<ValenceTerm>) -> Self {
        Self { terms }
    }
}

impl FromIterator<ValenceTerm> for ValenceList {
    fn from_iter<I: IntoIterator<Item = ValenceTerm>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ValenceList {
    type Item = &'a ValenceTerm;
    type IntoIter = std::slice::Iter<'a, ValenceTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
