use crate::core::forcefield::dispatch;
use crate::core::models::coordinate::InternalCoordinate;
use crate::core::models::term::ValenceTerm;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes every term's energy, stores it on the term and returns the total.
///
/// Terms are visited in index order. `coords` is only read.
pub fn evaluate_energy(coords: &[InternalCoordinate], terms: &mut [ValenceTerm]) -> f64 {
    let mut total = 0.0;
    for term in terms.iter_mut() {
        debug_assert!(term.coordinates().all(|ic| ic < coords.len()));
        term.energy = dispatch::energy(term, coords);
        total += term.energy;
    }
    total
}

/// Parallel forward pass.
///
/// Per-term energies are computed concurrently, then summed serially in index order,
/// so the result is bit-identical to [`evaluate_energy`].
#[cfg(feature = "parallel")]
pub fn par_evaluate_energy(coords: &[InternalCoordinate], terms: &mut [ValenceTerm]) -> f64 {
    terms.par_iter_mut().for_each(|term| {
        debug_assert!(term.coordinates().all(|ic| ic < coords.len()));
        term.energy = dispatch::energy(term, coords);
    });
    terms.iter().fold(0.0, |total, term| total + term.energy)
}
