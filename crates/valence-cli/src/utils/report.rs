use std::fmt::Write;
use valence::core::forcefield::term::KindEnergies;
use valence::workflows::gradient_check::GradientCheckReport;

/// Energy breakdown and gradient of a single evaluation, as printed by `eval`.
pub fn format_evaluation(
    energy: f64,
    by_kind: &KindEnergies,
    term_counts: &[usize],
    gradient: &[f64],
    precision: usize,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total valence energy: {:.*}", precision, energy);
    for (kind, kind_energy) in by_kind.iter() {
        let count = term_counts[kind.index()];
        if count > 0 {
            let _ = writeln!(
                out,
                "  {:<12} {:>6} term(s) {:>20.*}",
                kind.name(),
                count,
                precision,
                kind_energy
            );
        }
    }
    let _ = writeln!(out, "Gradient (dE/dq):");
    for (ic, grad) in gradient.iter().enumerate() {
        let _ = writeln!(out, "  ic {:>6} {:>20.*}", ic, precision, grad);
    }
    out
}

pub fn format_check(report: &GradientCheckReport) -> String {
    let mut out = String::new();
    let failures: Vec<_> = report.failures().collect();
    let _ = writeln!(
        out,
        "Checked {} derivative(s), tolerance {:e}: {} failure(s).",
        report.deviations.len(),
        report.tolerance,
        failures.len()
    );
    if let Some(max) = report.max_relative_error() {
        let _ = writeln!(out, "Largest relative error: {:e}", max);
    }
    for d in failures {
        let _ = writeln!(
            out,
            "  term {} ({}) along ic {}: analytic {:e}, numeric {:e}",
            d.term, d.kind, d.coordinate, d.analytic, d.numeric
        );
    }
    out
}
