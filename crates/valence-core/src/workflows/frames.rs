use crate::core::forcefield::term::KindEnergies;
use crate::core::models::coordinate::{self, InternalCoordinate};
use crate::engine::error::EngineError;
use crate::engine::evaluator::Evaluator;
use crate::engine::list::ValenceList;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub energy: f64,
    pub by_kind: KindEnergies,
    /// `∂E/∂value` per internal coordinate, from zeroed accumulators.
    pub gradient: Vec<f64>,
}

/// Evaluates energy and gradient for every frame of coordinate values.
///
/// Each frame must hold exactly `num_coordinates` values. Accumulators are reset before
/// each frame, so every result holds the valence gradient alone.
#[instrument(skip_all, name = "frames_workflow", fields(frames = frames.len()))]
pub fn run(
    list: &mut ValenceList,
    num_coordinates: usize,
    frames: &[Vec<f64>],
    evaluator: &Evaluator,
    reporter: &ProgressReporter,
) -> Result<Vec<FrameResult>, EngineError> {
    list.validate(num_coordinates)?;
    if let Some((frame, values)) = frames
        .iter()
        .enumerate()
        .find(|(_, values)| values.len() != num_coordinates)
    {
        return Err(EngineError::FrameSize {
            frame,
            expected: num_coordinates,
            found: values.len(),
        });
    }

    info!(
        "Evaluating {} term(s) over {} frame(s).",
        list.len(),
        frames.len()
    );
    reporter.report(Progress::FramesStart {
        total: frames.len() as u64,
    });

    let mut coords = vec![InternalCoordinate::default(); num_coordinates];
    let mut results = Vec::with_capacity(frames.len());

    for (index, values) in frames.iter().enumerate() {
        coordinate::assign_values(&mut coords, values);
        coordinate::reset_gradients(&mut coords);

        let energy = evaluator.forward(list, &coords);
        evaluator.backward(list, &mut coords);

        debug!("Frame {}: energy {:.6}", index, energy);
        reporter.report(Progress::FrameDone { index, energy });

        results.push(FrameResult {
            energy,
            by_kind: list.energies_by_kind(),
            gradient: coordinate::gradients(&coords),
        });
    }

    reporter.report(Progress::FramesFinish);
    Ok(results)
}
