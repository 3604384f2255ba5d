//! VAULTSHIFT command-line entry point — thin shell over `vaultshift-convert`.
//!
//! Loads the run configuration, installs logging on stderr, runs the
//! migration and echoes the rewritten document on stdout.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vaultshift_convert::{MigrateError, MigrationConfig, DEFAULT_CONFIG_FILE};

/// Migrate an Enpass JSON export into a 1Password `export.data` document.
#[derive(Debug, Parser)]
#[command(name = "vaultshift", version, about, long_about = None)]
struct Cli {
    /// Configuration file naming `sourceFile` and `targetFile`.
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match migrate(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("migration failed: {e}");
            eprintln!("vaultshift: {e}");
            ExitCode::FAILURE
        }
    }
}

fn migrate(cli: &Cli) -> Result<(), MigrateError> {
    let config = MigrationConfig::load(&cli.config)?;
    tracing::info!(
        config = %cli.config.display(),
        source = %config.source_file.display(),
        target = %config.target_file.display(),
        "starting migration"
    );

    let mut stdout = std::io::stdout().lock();
    let outcome = vaultshift_convert::run(&config, &mut stdout)?;

    tracing::info!(
        translated = outcome.report.translated(),
        skipped = outcome.report.skipped,
        replaced = outcome.replaced,
        "migration complete"
    );
    Ok(())
}

/// Log to stderr; stdout carries the migrated document.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vaultshift=info,vaultshift_convert=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_defaults_to_working_directory_file() {
        let cli = Cli::try_parse_from(["vaultshift"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("vaultshift.json"));
    }

    #[test]
    fn config_path_is_positional() {
        let cli = Cli::try_parse_from(["vaultshift", "/etc/vaultshift/run.json"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/vaultshift/run.json"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["vaultshift", "--dry-run"]).is_err());
    }
}
