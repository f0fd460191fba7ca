use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value {value} for '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    Serial,
    #[default]
    Parallel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationConfig {
    pub strategy: Strategy,
    /// Tables with fewer terms than this are always evaluated serially.
    pub parallel_threshold: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            parallel_threshold: 4096,
        }
    }
}

impl EvaluationConfig {
    pub fn serial() -> Self {
        Self {
            strategy: Strategy::Serial,
            ..Self::default()
        }
    }

    /// Whether a table of `num_terms` terms takes the parallel path.
    pub fn runs_parallel(&self, num_terms: usize) -> bool {
        cfg!(feature = "parallel")
            && self.strategy == Strategy::Parallel
            && num_terms >= self.parallel_threshold
    }
}

#[derive(Default)]
pub struct EvaluationConfigBuilder {
    strategy: Option<Strategy>,
    parallel_threshold: Option<usize>,
}

impl EvaluationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> EvaluationConfig {
        let defaults = EvaluationConfig::default();
        EvaluationConfig {
            strategy: self.strategy.unwrap_or(defaults.strategy),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientCheckConfig {
    /// Half-width of the central difference stencil.
    pub step: f64,
    /// Largest accepted `|analytic − numeric| / max(|analytic|, |numeric|, 1)`.
    pub tolerance: f64,
}

impl Default for GradientCheckConfig {
    fn default() -> Self {
        Self {
            step: 1e-5,
            tolerance: 1e-6,
        }
    }
}

#[derive(Default)]
pub struct GradientCheckConfigBuilder {
    step: Option<f64>,
    tolerance: Option<f64>,
}

impl GradientCheckConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn build(self) -> Result<GradientCheckConfig, ConfigError> {
        let defaults = GradientCheckConfig::default();
        let step = self.step.unwrap_or(defaults.step);
        let tolerance = self.tolerance.unwrap_or(defaults.tolerance);

        if !(step.is_finite() && step > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "step",
                value: step,
                reason: "must be a positive finite number",
            });
        }
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "tolerance",
                value: tolerance,
                reason: "must be a positive finite number",
            });
        }

        Ok(GradientCheckConfig { step, tolerance })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_builder_falls_back_to_defaults() {
        let config = EvaluationConfigBuilder::new().build();
        assert_eq!(config, EvaluationConfig::default());
        assert_eq!(config.strategy, Strategy::Parallel);
        assert_eq!(config.parallel_threshold, 4096);
    }

    #[test]
    fn evaluation_builder_applies_every_setter() {
        let config = EvaluationConfigBuilder::new()
            .strategy(Strategy::Serial)
            .parallel_threshold(10)
            .build();
        assert_eq!(config.strategy, Strategy::Serial);
        assert_eq!(config.parallel_threshold, 10);
    }

    #[test]
    fn serial_strategy_never_runs_parallel() {
        let config = EvaluationConfig::serial();
        assert!(!config.runs_parallel(usize::MAX));
    }

    #[test]
    fn small_tables_stay_serial_below_threshold() {
        let config = EvaluationConfigBuilder::new().parallel_threshold(100).build();
        assert!(!config.runs_parallel(99));
        assert_eq!(config.runs_parallel(100), cfg!(feature = "parallel"));
    }

    #[test]
    fn gradient_check_builder_accepts_positive_values() {
        let config = GradientCheckConfigBuilder::new()
            .step(1e-4)
            .tolerance(1e-5)
            .build()
            .unwrap();
        assert_eq!(config.step, 1e-4);
        assert_eq!(config.tolerance, 1e-5);
    }

    #[test]
    fn gradient_check_builder_rejects_non_positive_step() {
        let result = GradientCheckConfigBuilder::new().step(0.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "step", .. })
        ));
    }

    #[test]
    fn gradient_check_builder_rejects_nan_tolerance() {
        let result = GradientCheckConfigBuilder::new().tolerance(f64::NAN).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "tolerance",
                ..
            })
        ));
    }
}
