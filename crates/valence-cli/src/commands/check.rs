use crate::cli::CheckArgs;
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use crate::utils::report;
use tracing::info;
use valence::ValenceList;
use valence::core::io::table::ValenceTable;
use valence::workflows::gradient_check;

pub fn run(args: CheckArgs) -> Result<()> {
    let config = PartialConfig::from_optional_file(args.config.as_deref())?.merge_check(&args)?;

    info!("Loading table snapshot from {:?}", &args.table);
    let table = ValenceTable::load(&args.table)?;
    let list = ValenceList::from(table.terms);

    let check = gradient_check::run(&list, &table.coordinates, &config)?;
    print!("{}", report::format_check(&check));

    if check.passed() {
        Ok(())
    } else {
        Err(CliError::GradientCheck {
            failures: check.failures().count(),
            comparisons: check.deviations.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn parse_check(table: &std::path::Path) -> CheckArgs {
        match Cli::parse_from(["valence", "check", "-t", table.to_str().unwrap()]).command {
            Commands::Check(args) => args,
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn well_behaved_table_passes() {
        let dir = tempdir().unwrap();
        let table = dir.path().join("table.toml");
        fs::write(
            &table,
            r#"
            [[coordinates]]
            value = 1.2
            [[coordinates]]
            value = -0.4

            [[terms]]
            kind = "fues"
            ics = [0]
            pars = [3.0, 1.1]

            [[terms]]
            kind = "chebychev2"
            ics = [1]
            pars = [1.5]
            "#,
        )
        .unwrap();

        assert!(run(parse_check(&table)).is_ok());
    }

    #[test]
    fn singular_fues_term_fails_the_check() {
        let dir = tempdir().unwrap();
        let table = dir.path().join("table.toml");
        fs::write(
            &table,
            r#"
            [[coordinates]]
            value = 0.0

            [[terms]]
            kind = "fues"
            ics = [0]
            pars = [1.0, 1.0]
            "#,
        )
        .unwrap();

        let result = run(parse_check(&table));
        assert!(matches!(
            result,
            Err(CliError::GradientCheck {
                failures: 1,
                comparisons: 1
            })
        ));
    }
}
