use super::potentials;
use crate::core::models::coordinate::InternalCoordinate;
use crate::core::models::term::{TermKind, ValenceTerm};

/// Energy of a single term for the current coordinate values.
#[inline]
pub(crate) fn energy(term: &ValenceTerm, coords: &[InternalCoordinate]) -> f64 {
    let x = coords[term.ic0].value;
    let p = &term.pars;
    match term.kind {
        TermKind::Harmonic => potentials::harmonic(x, p[0], p[1]),
        TermKind::PolyFour => potentials::polyfour(x, p),
        TermKind::Fues => potentials::fues(x, p[0], p[1]),
        TermKind::Cross => potentials::cross(x, coords[term.ic1].value, p[0], p[1], p[2]),
        TermKind::Cosine => potentials::cosine(x, p[0], p[1], p[2]),
        TermKind::Chebychev1 => potentials::chebychev1(x, p[0]),
        TermKind::Chebychev2 => potentials::chebychev2(x, p[0]),
    }
}

/// Partial derivatives of a single term, as `(∂E/∂ic0, ∂E/∂ic1)`.
///
/// The second component is only meaningful for two-coordinate kinds and is zero for
/// every other kind.
#[inline]
pub(crate) fn derivatives(term: &ValenceTerm, coords: &[InternalCoordinate]) -> (f64, f64) {
    let x = coords[term.ic0].value;
    let p = &term.pars;
    match term.kind {
        TermKind::Harmonic => (potentials::harmonic_derivative(x, p[0], p[1]), 0.0),
        TermKind::PolyFour => (potentials::polyfour_derivative(x, p), 0.0),
        TermKind::Fues => (potentials::fues_derivative(x, p[0], p[1]), 0.0),
        TermKind::Cross => {
            potentials::cross_derivative(x, coords[term.ic1].value, p[0], p[1], p[2])
        }
        TermKind::Cosine => (potentials::cosine_derivative(x, p[0], p[1], p[2]), 0.0),
        TermKind::Chebychev1 => (potentials::chebychev1_derivative(x, p[0]), 0.0),
        TermKind::Chebychev2 => (potentials::chebychev2_derivative(x, p[0]), 0.0),
    }
}

/// Adds precomputed partial derivatives of `term` into the accumulators it references.
#[inline]
pub(crate) fn scatter(
    term: &ValenceTerm,
    (d0, d1): (f64, f64),
    coords: &mut [InternalCoordinate],
) {
    coords[term.ic0].grad += d0;
    if term.kind == TermKind::Cross {
        coords[term.ic1].grad += d1;
    }
}

#[inline]
pub(crate) fn accumulate_gradient(term: &ValenceTerm, coords: &mut [InternalCoordinate]) {
    let partials = derivatives(term, coords);
    scatter(term, partials, coords);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn coords(values: &[f64]) -> Vec<InternalCoordinate> {
        values.iter().copied().map(InternalCoordinate::new).collect()
    }

    #[test]
    fn harmonic_term_reads_its_own_coordinate() {
        let ics = coords(&[9.0, 2.0]);
        let term = ValenceTerm::harmonic(1, 2.0, 1.5);
        assert!(f64_approx_equal(energy(&term, &ics), 0.25));
    }

    #[test]
    fn cosine_term_uses_multiplicity_amplitude_and_phase_slots() {
        let ics = coords(&[PI / 4.0]);
        let term = ValenceTerm::cosine(0, 2.0, 4.0, 0.0);
        assert!(f64_approx_equal(energy(&term, &ics), 2.0));
        assert!(f64_approx_equal(derivatives(&term, &ics).0, 4.0));
    }

    #[test]
    fn cross_term_writes_both_accumulators() {
        let mut ics = coords(&[3.0, 4.0]);
        let term = ValenceTerm::cross(0, 1, 1.0, 0.0, 0.0);
        assert!(f64_approx_equal(energy(&term, &ics), 12.0));
        accumulate_gradient(&term, &mut ics);
        assert!(f64_approx_equal(ics[0].grad, 4.0));
        assert!(f64_approx_equal(ics[1].grad, 3.0));
    }

    #[test]
    fn single_coordinate_term_ignores_ic1() {
        let mut ics = coords(&[0.5, 0.0]);
        let mut term = ValenceTerm::chebychev2(0, 3.0);
        term.ic1 = 1;
        accumulate_gradient(&term, &mut ics);
        assert!(f64_approx_equal(ics[0].grad, -3.0));
        assert_eq!(ics[1].grad, 0.0);
    }

    #[test]
    fn accumulate_gradient_adds_to_existing_value() {
        let mut ics = vec![InternalCoordinate {
            value: 2.0,
            grad: 10.0,
        }];
        accumulate_gradient(&ValenceTerm::harmonic(0, 2.0, 1.5), &mut ics);
        assert!(f64_approx_equal(ics[0].grad, 11.0));
    }

    #[test]
    fn every_kind_dispatches_to_its_own_pair() {
        let ics = coords(&[0.8, 1.3]);
        let cases = [
            (ValenceTerm::harmonic(0, 1.0, 0.5), potentials::harmonic(0.8, 1.0, 0.5)),
            (
                ValenceTerm::polyfour(0, [1.0, 2.0, 3.0, 4.0]),
                potentials::polyfour(0.8, &[1.0, 2.0, 3.0, 4.0]),
            ),
            (ValenceTerm::fues(0, 1.0, 0.5), potentials::fues(0.8, 1.0, 0.5)),
            (
                ValenceTerm::cross(0, 1, 1.0, 0.5, 0.2),
                potentials::cross(0.8, 1.3, 1.0, 0.5, 0.2),
            ),
            (
                ValenceTerm::cosine(0, 3.0, 1.0, 0.1),
                potentials::cosine(0.8, 3.0, 1.0, 0.1),
            ),
            (ValenceTerm::chebychev1(0, 2.0), potentials::chebychev1(0.8, 2.0)),
            (ValenceTerm::chebychev2(0, 2.0), potentials::chebychev2(0.8, 2.0)),
        ];
        for (term, expected) in cases {
            assert_eq!(energy(&term, &ics), expected, "kind {}", term.kind);
        }
    }
}
