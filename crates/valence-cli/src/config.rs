use crate::cli::{CheckArgs, EvalArgs};
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use valence::engine::config::{
    EvaluationConfig, EvaluationConfigBuilder, GradientCheckConfig, GradientCheckConfigBuilder,
    Strategy,
};

const DEFAULT_PRECISION: usize = 6;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum FileStrategy {
    Serial,
    Parallel,
}

impl From<FileStrategy> for Strategy {
    fn from(s: FileStrategy) -> Self {
        match s {
            FileStrategy::Serial => Strategy::Serial,
            FileStrategy::Parallel => Strategy::Parallel,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialEvaluationConfig {
    strategy: Option<FileStrategy>,
    #[serde(rename = "parallel-threshold")]
    parallel_threshold: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialCheckConfig {
    step: Option<f64>,
    tolerance: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    precision: Option<usize>,
}

/// Settings read from a configuration file; every field is optional and CLI flags win.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    evaluation: Option<PartialEvaluationConfig>,
    check: Option<PartialCheckConfig>,
    output: Option<PartialOutputConfig>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvalSettings {
    pub evaluation: EvaluationConfig,
    pub precision: usize,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file when one is given, otherwise starts from an empty config.
    pub fn from_optional_file(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    pub fn merge_eval(self, args: &EvalArgs) -> EvalSettings {
        let file_eval = self.evaluation.unwrap_or_default();
        let file_output = self.output.unwrap_or_default();

        let mut builder = EvaluationConfigBuilder::new();
        if args.serial {
            builder = builder.strategy(Strategy::Serial);
        } else if let Some(strategy) = file_eval.strategy {
            builder = builder.strategy(strategy.into());
        }
        if let Some(threshold) = args.parallel_threshold.or(file_eval.parallel_threshold) {
            builder = builder.parallel_threshold(threshold);
        }

        EvalSettings {
            evaluation: builder.build(),
            precision: args
                .precision
                .or(file_output.precision)
                .unwrap_or(DEFAULT_PRECISION),
        }
    }

    pub fn merge_check(self, args: &CheckArgs) -> Result<GradientCheckConfig> {
        let file_check = self.check.unwrap_or_default();

        let mut builder = GradientCheckConfigBuilder::new();
        if let Some(step) = args.step.or(file_check.step) {
            builder = builder.step(step);
        }
        if let Some(tolerance) = args.tolerance.or(file_check.tolerance) {
            builder = builder.tolerance(tolerance);
        }
        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }
}
