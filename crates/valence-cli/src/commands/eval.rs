use crate::cli::EvalArgs;
use crate::config::{EvalSettings, PartialConfig};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use crate::utils::report;
use std::path::Path;
use tracing::info;
use valence::core::io::frames;
use valence::core::io::table::ValenceTable;
use valence::core::models::coordinate;
use valence::engine::evaluator::Evaluator;
use valence::engine::progress::ProgressReporter;
use valence::workflows::frames::{self as frames_workflow, FrameResult};
use valence::{TermKind, ValenceList};

pub fn run(args: EvalArgs) -> Result<()> {
    let settings = PartialConfig::from_optional_file(args.config.as_deref())?.merge_eval(&args);
    info!("Evaluation settings: {:?}", settings);

    info!("Loading table snapshot from {:?}", &args.table);
    let table = ValenceTable::load(&args.table)?;
    let num_coordinates = table.coordinates.len();
    let term_counts = count_terms(&table);
    let mut list = ValenceList::from(table.terms);
    let evaluator = Evaluator::new(settings.evaluation.clone());

    let results = match &args.frames {
        Some(path) => {
            info!("Loading coordinate frames from {:?}", path);
            let frames = frames::read_frames(path)?;

            let progress_handler = CliProgressHandler::new();
            let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
            let results =
                frames_workflow::run(&mut list, num_coordinates, &frames, &evaluator, &reporter)?;
            for (i, result) in results.iter().enumerate() {
                println!("frame {:>6}  {:.*}", i, settings.precision, result.energy);
            }
            results
        }
        None => {
            let mut coords = table.coordinates;
            coordinate::reset_gradients(&mut coords);
            let energy = evaluator.forward(&mut list, &coords);
            evaluator.backward(&list, &mut coords);

            let result = FrameResult {
                energy,
                by_kind: list.energies_by_kind(),
                gradient: coordinate::gradients(&coords),
            };
            print!(
                "{}",
                report::format_evaluation(
                    result.energy,
                    &result.by_kind,
                    &term_counts,
                    &result.gradient,
                    settings.precision,
                )
            );
            vec![result]
        }
    };

    if let Some(output) = &args.output {
        write_results(output, num_coordinates, &results, &settings)?;
        println!("Wrote {} row(s) to {}", results.len(), output.display());
    }

    Ok(())
}

fn count_terms(table: &ValenceTable) -> [usize; TermKind::COUNT] {
    let mut counts = [0; TermKind::COUNT];
    for term in &table.terms {
        counts[term.kind.index()] += 1;
    }
    counts
}

fn write_results(
    path: &Path,
    num_coordinates: usize,
    results: &[FrameResult],
    settings: &EvalSettings,
) -> Result<()> {
    info!(
        "Writing {} result row(s) to {:?} (display precision {})",
        results.len(),
        path,
        settings.precision
    );
    let columns: Vec<String> = std::iter::once("energy".to_string())
        .chain((0..num_coordinates).map(|ic| format!("grad_{ic}")))
        .collect();
    let rows: Vec<Vec<f64>> = results
        .iter()
        .map(|r| std::iter::once(r.energy).chain(r.gradient.iter().copied()).collect())
        .collect();

    let file = std::fs::File::create(path)?;
    frames::write_frames(file, &columns, &rows, &path.to_string_lossy())?;
    Ok(())
}
