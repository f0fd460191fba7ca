use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "valence - evaluate bonded force-field energies and internal-coordinate gradients from a table snapshot.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for the parallel passes.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the valence energy and its gradient with respect to each internal coordinate.
    Eval(EvalArgs),
    /// Verify analytic derivatives of every term against central finite differences.
    Check(CheckArgs),
}

/// Arguments for the `eval` subcommand.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Path to the table snapshot (TOML) with coordinates and terms.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub table: PathBuf,

    /// Optional CSV file of coordinate frames; overrides the snapshot's values.
    #[arg(short, long, value_name = "PATH")]
    pub frames: Option<PathBuf>,

    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write energies and gradients as CSV (one row per frame) to this file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Force the serial evaluation passes.
    #[arg(long)]
    pub serial: bool,

    /// Minimum number of terms for which the parallel passes are used.
    #[arg(long, value_name = "NUM")]
    pub parallel_threshold: Option<usize>,

    /// Number of decimals in printed values.
    #[arg(long, value_name = "NUM")]
    pub precision: Option<usize>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the table snapshot (TOML) with coordinates and terms.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub table: PathBuf,

    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Finite-difference step.
    #[arg(long, value_name = "FLOAT")]
    pub step: Option<f64>,

    /// Largest accepted relative deviation.
    #[arg(long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_parses_all_options() {
        let cli = Cli::parse_from([
            "valence",
            "-vv",
            "eval",
            "-t",
            "table.toml",
            "--frames",
            "frames.csv",
            "--serial",
            "--precision",
            "3",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Eval(args) => {
                assert_eq!(args.table, PathBuf::from("table.toml"));
                assert_eq!(args.frames, Some(PathBuf::from("frames.csv")));
                assert!(args.serial);
                assert_eq!(args.precision, Some(3));
                assert!(args.output.is_none());
            }
            other => panic!("expected eval, got {other:?}"),
        }
    }

    #[test]
    fn check_parses_step_and_tolerance() {
        let cli = Cli::parse_from([
            "valence",
            "check",
            "--table",
            "t.toml",
            "--step",
            "1e-4",
            "--tolerance",
            "1e-5",
        ]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.step, Some(1e-4));
                assert_eq!(args.tolerance, Some(1e-5));
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn table_is_required() {
        assert!(Cli::try_parse_from(["valence", "eval"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["valence", "-q", "-v", "check", "-t", "t.toml"]).is_err());
    }
}
