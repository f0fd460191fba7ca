use super::backward;
use super::config::EvaluationConfig;
use super::forward;
use super::list::ValenceList;
use crate::core::models::coordinate::InternalCoordinate;

/// Runs the forward and backward passes with the strategy chosen by its config.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluationConfig,
}

impl Evaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn forward(&self, list: &mut ValenceList, coords: &[InternalCoordinate]) -> f64 {
        #[cfg(feature = "parallel")]
        {
            if self.config.runs_parallel(list.len()) {
                return forward::par_evaluate_energy(coords, list.terms_mut());
            }
        }
        forward::evaluate_energy(coords, list.terms_mut())
    }

    pub fn backward(&self, list: &ValenceList, coords: &mut [InternalCoordinate]) {
        #[cfg(feature = "parallel")]
        {
            if self.config.runs_parallel(list.len()) {
                backward::par_accumulate_gradients(coords, list.terms());
                return;
            }
        }
        backward::accumulate_gradients(coords, list.terms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::term::ValenceTerm;
    use crate::engine::config::{EvaluationConfigBuilder, Strategy};

    fn sample() -> (ValenceList, Vec<InternalCoordinate>) {
        let coords: Vec<_> = (0..8)
            .map(|i| InternalCoordinate::new(0.9 + 0.1 * i as f64))
            .collect();
        let list = (0..64)
            .map(|i| match i % 3 {
                0 => ValenceTerm::harmonic(i % 8, 2.0, 1.0),
                1 => ValenceTerm::cross(i % 8, (i + 3) % 8, 0.5, 1.0, 1.2),
                _ => ValenceTerm::cosine(i % 8, 2.0, 1.0, 0.0),
            })
            .collect();
        (list, coords)
    }

    #[test]
    fn strategies_agree_bit_for_bit() {
        let (mut serial_list, mut serial_coords) = sample();
        let (mut parallel_list, mut parallel_coords) = sample();

        let serial = Evaluator::new(EvaluationConfig::serial());
        let parallel = Evaluator::new(
            EvaluationConfigBuilder::new()
                .strategy(Strategy::Parallel)
                .parallel_threshold(1)
                .build(),
        );

        let e_serial = serial.forward(&mut serial_list, &serial_coords);
        let e_parallel = parallel.forward(&mut parallel_list, &parallel_coords);
        serial.backward(&serial_list, &mut serial_coords);
        parallel.backward(&parallel_list, &mut parallel_coords);

        assert_eq!(e_serial.to_bits(), e_parallel.to_bits());
        assert_eq!(serial_list, parallel_list);
        assert_eq!(serial_coords, parallel_coords);
    }

    #[test]
    fn default_evaluator_uses_default_config() {
        assert_eq!(Evaluator::default().config(), &EvaluationConfig::default());
    }
}
