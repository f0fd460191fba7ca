use crate::core::forcefield::dispatch;
use crate::core::models::coordinate::InternalCoordinate;
use crate::core::models::term::{TermKind, ValenceTerm};
use crate::engine::config::GradientCheckConfig;
use crate::engine::error::EngineError;
use crate::engine::list::ValenceList;
use tracing::{debug, info, instrument, warn};

/// Analytic versus numeric derivative of one term along one of its coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TermDeviation {
    pub term: usize,
    pub kind: TermKind,
    pub coordinate: usize,
    pub analytic: f64,
    pub numeric: f64,
    pub relative_error: f64,
}

impl TermDeviation {
    /// NaN errors, as produced at a singularity, never pass.
    pub fn passes(&self, tolerance: f64) -> bool {
        self.relative_error <= tolerance
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientCheckReport {
    pub tolerance: f64,
    pub deviations: Vec<TermDeviation>,
}

impl GradientCheckReport {
    pub fn failures(&self) -> impl Iterator<Item = &TermDeviation> {
        self.deviations
            .iter()
            .filter(|d| !d.passes(self.tolerance))
    }

    pub fn passed(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn max_relative_error(&self) -> Option<f64> {
        self.deviations
            .iter()
            .map(|d| d.relative_error)
            .reduce(f64::max)
    }
}

/// Analytic derivative of `term` along each distinct coordinate it references, in
/// reference order. A cross term on a single coordinate yields the sum of both partials.
fn partials_by_coordinate(
    term: &ValenceTerm,
    coords: &[InternalCoordinate],
) -> Vec<(usize, f64)> {
    let (d0, d1) = dispatch::derivatives(term, coords);
    let mut partials: Vec<(usize, f64)> = Vec::with_capacity(2);
    for (ic, partial) in term.coordinates().zip([d0, d1]) {
        match partials.iter_mut().find(|(seen, _)| *seen == ic) {
            Some((_, total)) => *total += partial,
            None => partials.push((ic, partial)),
        }
    }
    partials
}

/// Compares every term's analytic derivatives with central finite differences of its
/// energy, one term and one coordinate at a time.
#[instrument(skip_all, name = "gradient_check", fields(terms = list.len()))]
pub fn run(
    list: &ValenceList,
    coords: &[InternalCoordinate],
    config: &GradientCheckConfig,
) -> Result<GradientCheckReport, EngineError> {
    list.validate(coords.len())?;

    let mut scratch = coords.to_vec();
    let h = config.step;
    let mut deviations = Vec::new();

    for (index, term) in list.iter().enumerate() {
        for (ic, analytic) in partials_by_coordinate(term, coords) {
            let original = scratch[ic].value;

            scratch[ic].value = original + h;
            let e_plus = dispatch::energy(term, &scratch);
            scratch[ic].value = original - h;
            let e_minus = dispatch::energy(term, &scratch);
            scratch[ic].value = original;

            let numeric = (e_plus - e_minus) / (2.0 * h);
            let scale = analytic.abs().max(numeric.abs()).max(1.0);
            let deviation = TermDeviation {
                term: index,
                kind: term.kind,
                coordinate: ic,
                analytic,
                numeric,
                relative_error: (analytic - numeric).abs() / scale,
            };

            if !deviation.passes(config.tolerance) {
                warn!(
                    "Term {} ({}) disagrees along coordinate {}: analytic {:.6e}, numeric {:.6e}",
                    index, term.kind, ic, analytic, numeric
                );
            } else {
                debug!(
                    "Term {} ({}) coordinate {}: relative error {:.3e}",
                    index, term.kind, ic, deviation.relative_error
                );
            }
            deviations.push(deviation);
        }
    }

    let report = GradientCheckReport {
        tolerance: config.tolerance,
        deviations,
    };
    info!(
        "Gradient check finished: {} comparison(s), {} failure(s).",
        report.deviations.len(),
        report.failures().count()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(values: &[f64]) -> Vec<InternalCoordinate> {
        values.iter().copied().map(InternalCoordinate::new).collect()
    }

    fn every_kind() -> ValenceList {
        vec![
            ValenceTerm::harmonic(0, 2.0, 1.5),
            ValenceTerm::polyfour(1, [0.5, -0.2, 0.1, 0.05]),
            ValenceTerm::fues(0, 3.0, 1.1),
            ValenceTerm::cross(0, 1, 0.7, 1.0, 0.3),
            ValenceTerm::cosine(2, 3.0, 1.5, 0.2),
            ValenceTerm::chebychev1(2, 2.0),
            ValenceTerm::chebychev2(2, 2.0),
        ]
        .into()
    }

    #[test]
    fn every_kind_passes_with_default_config() {
        let report = run(
            &every_kind(),
            &coords(&[1.4, 0.8, 0.35]),
            &GradientCheckConfig::default(),
        )
        .unwrap();

        // One comparison per referenced coordinate; cross contributes two.
        assert_eq!(report.deviations.len(), 8);
        assert!(report.passed(), "failures: {:?}", report.failures().collect::<Vec<_>>());
        assert!(report.max_relative_error().unwrap() < 1e-6);
    }

    #[test]
    fn cross_term_is_checked_along_both_coordinates() {
        let list: ValenceList = vec![ValenceTerm::cross(0, 1, 1.0, 0.0, 0.0)].into();
        let report = run(&list, &coords(&[3.0, 4.0]), &GradientCheckConfig::default()).unwrap();

        let along: Vec<_> = report.deviations.iter().map(|d| d.coordinate).collect();
        assert_eq!(along, vec![0, 1]);
        assert!((report.deviations[0].analytic - 4.0).abs() < 1e-12);
        assert!((report.deviations[1].analytic - 3.0).abs() < 1e-12);
    }

    #[test]
    fn cross_term_on_one_coordinate_is_checked_once_with_both_partials() {
        let list: ValenceList = vec![ValenceTerm::cross(0, 0, 1.0, 0.5, -0.5)].into();
        let input = coords(&[2.0]);
        let report = run(&list, &input, &GradientCheckConfig::default()).unwrap();

        assert_eq!(report.deviations.len(), 1);
        assert_eq!(report.deviations[0].coordinate, 0);
        assert!((report.deviations[0].analytic - 4.0).abs() < 1e-12);
        assert!(report.passed(), "failures: {:?}", report.failures().collect::<Vec<_>>());

        let mut backward = input.clone();
        list.back(&mut backward);
        assert!((backward[0].grad - report.deviations[0].analytic).abs() < 1e-12);
    }

    #[test]
    fn fues_at_the_singularity_fails_instead_of_panicking() {
        let list: ValenceList = vec![ValenceTerm::fues(0, 1.0, 1.0)].into();
        let report = run(&list, &coords(&[0.0]), &GradientCheckConfig::default()).unwrap();
        assert!(!report.passed());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn empty_list_passes_trivially() {
        let report = run(&ValenceList::new(), &[], &GradientCheckConfig::default()).unwrap();
        assert!(report.passed());
        assert_eq!(report.max_relative_error(), None);
    }

    #[test]
    fn out_of_range_reference_is_reported_as_topology_error() {
        let list: ValenceList = vec![ValenceTerm::harmonic(3, 1.0, 1.0)].into();
        let result = run(&list, &coords(&[1.0]), &GradientCheckConfig::default());
        assert!(matches!(result, Err(EngineError::Topology(_))));
    }

    #[test]
    fn input_coordinates_are_not_modified() {
        let input = coords(&[1.4, 0.8, 0.35]);
        let before = input.clone();
        run(&every_kind(), &input, &GradientCheckConfig::default()).unwrap();
        assert_eq!(input, before);
    }
}
