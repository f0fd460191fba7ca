use crate::core::forcefield::dispatch;
use crate::core::models::coordinate::InternalCoordinate;
use crate::core::models::term::ValenceTerm;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Adds every term's partial derivatives into the `grad` field of the coordinates it
/// references.
///
/// Accumulators are never cleared here; zero them first for a fresh gradient. Term
/// energies are neither read nor written.
pub fn accumulate_gradients(coords: &mut [InternalCoordinate], terms: &[ValenceTerm]) {
    for term in terms {
        debug_assert!(term.coordinates().all(|ic| ic < coords.len()));
        dispatch::accumulate_gradient(term, coords);
    }
}

/// Parallel backward pass.
///
/// Partial derivatives are evaluated concurrently into a scratch buffer and then
/// scattered serially in term order. Two terms sharing a coordinate therefore never
/// race, and the accumulators end up bit-identical to [`accumulate_gradients`].
#[cfg(feature = "parallel")]
pub fn par_accumulate_gradients(coords: &mut [InternalCoordinate], terms: &[ValenceTerm]) {
    let values: &[InternalCoordinate] = coords;
    let partials: Vec<(f64, f64)> = terms
        .par_iter()
        .map(|term| {
            debug_assert!(term.coordinates().all(|ic| ic < values.len()));
            dispatch::derivatives(term, values)
        })
        .collect();

    for (term, partial) in terms.iter().zip(partials) {
        dispatch::scatter(term, partial, coords);
    }
}
