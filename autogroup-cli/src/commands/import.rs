use std::path::{Path, PathBuf};

use autogroup_import::{CsvSources, LogProgress};

use crate::CliError;

/// Import CSV dumps into the catalog database, creating it if needed.
pub(crate) fn run_import(
    db_path: &Path,
    entries: PathBuf,
    relations: Option<PathBuf>,
    series: Option<PathBuf>,
) -> Result<(), CliError> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let conn = autogroup_db::open_database(db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open catalog database at {}: {}",
            db_path.display(),
            e
        ))
    })?;
    log::debug!("Importing into {}", db_path.display());

    let sources = CsvSources {
        entries,
        relations,
        series,
    };
    let stats = autogroup_import::import_csv_files(&conn, &sources, &LogProgress)
        .map_err(|e| CliError::import(e.to_string()))?;

    if stats.skipped > 0 {
        log::warn!(
            "{} rows were skipped; rerun with --verbose for details",
            stats.skipped
        );
    }
    Ok(())
}
