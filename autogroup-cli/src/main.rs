//! autogroup CLI
//!
//! Command-line interface for grouping catalog entries into franchises.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands};
use settings::Settings;

pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logger(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Commands::ConfigPath = cli.command {
        return run_config_path();
    }

    let settings = Settings::load();
    let db_path = settings::resolve_db_path(cli.db, &settings);
    log::debug!("Using catalog database {}", db_path.display());

    match cli.command {
        Commands::Groups {
            all,
            eager,
            prefer_type,
        } => commands::groups::run_groups(
            &db_path,
            all,
            eager || settings.grouping.eager,
            prefer_type.or_else(|| settings.preferred_type()),
        ),
        Commands::Lookup { ids, prefer_type } => commands::lookup::run_lookup(
            &db_path,
            &ids,
            prefer_type.or_else(|| settings.preferred_type()),
        ),
        Commands::Import {
            entries,
            relations,
            series,
        } => commands::import::run_import(&db_path, entries, relations, series),
        Commands::Stats => commands::stats::run_stats(&db_path),
        Commands::ConfigPath => run_config_path(),
    }
}

/// Print the settings file path.
fn run_config_path() -> Result<(), CliError> {
    let path = settings::settings_path()
        .ok_or_else(|| CliError::config("Could not determine config directory"))?;
    log::info!("{}", path.display());
    Ok(())
}
