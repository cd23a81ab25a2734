//! Import CSV dumps of entries, relations and series into the catalog database.
//!
//! Expected headers:
//! - entries: `entry_id,entry_type,main_title`
//! - relations: `entry_id,related_entry_id,relation_type`
//! - series: `entry_id`
//!
//! Malformed rows are logged and skipped; they never abort an import.

use std::io::Read;
use std::path::{Path, PathBuf};

use autogroup_core::{EntryId, EntryType};
use autogroup_db::operations::{self, OperationError};
use rusqlite::Connection;
use serde::Deserialize;
use thiserror::Error;

use crate::progress::ImportProgress;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
    #[error("{path} is missing columns: {}", .missing.join(", "))]
    MissingColumns { path: String, missing: Vec<String> },
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Row counts from one import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    pub entries: u64,
    pub relations_created: u64,
    pub relations_existing: u64,
    pub series_created: u64,
    pub series_existing: u64,
    pub skipped: u64,
}

/// CSV files to import. Only `entries` is required.
#[derive(Debug, Clone)]
pub struct CsvSources {
    pub entries: PathBuf,
    pub relations: Option<PathBuf>,
    pub series: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct EntryRow {
    entry_id: u32,
    entry_type: String,
    main_title: String,
}

#[derive(Debug, Deserialize)]
struct RelationRow {
    entry_id: u32,
    related_entry_id: u32,
    relation_type: String,
}

#[derive(Debug, Deserialize)]
struct SeriesRow {
    entry_id: u32,
}

/// Import all configured CSV files in a single transaction.
///
/// Entries are imported first so relations and series can reference them.
pub fn import_csv_files(
    conn: &Connection,
    sources: &CsvSources,
    progress: &dyn ImportProgress,
) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats::default();
    let tx = conn.unchecked_transaction()?;

    progress.on_phase(&format!("Importing entries from {}", sources.entries.display()));
    import_entries(&tx, open_csv(&sources.entries)?, &mut stats, progress)
        .map_err(|e| with_path(e, &sources.entries))?;

    if let Some(path) = &sources.relations {
        progress.on_phase(&format!("Importing relations from {}", path.display()));
        import_relations(&tx, open_csv(path)?, &mut stats, progress)
            .map_err(|e| with_path(e, path))?;
    }

    if let Some(path) = &sources.series {
        progress.on_phase(&format!("Importing series from {}", path.display()));
        import_series(&tx, open_csv(path)?, &mut stats, progress)
            .map_err(|e| with_path(e, path))?;
    }

    tx.commit()?;
    progress.on_complete(&format!(
        "Imported {} entries, {} relations ({} already present), {} series ({} already present); skipped {} rows",
        stats.entries,
        stats.relations_created,
        stats.relations_existing,
        stats.series_created,
        stats.series_existing,
        stats.skipped,
    ));
    Ok(stats)
}

fn open_csv(path: &Path) -> Result<std::fs::File, ImportError> {
    std::fs::File::open(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn with_path(error: ImportError, path: &Path) -> ImportError {
    match error {
        ImportError::Csv { source, .. } => ImportError::Csv {
            path: path.display().to_string(),
            source,
        },
        ImportError::MissingColumns { missing, .. } => ImportError::MissingColumns {
            path: path.display().to_string(),
            missing,
        },
        other => other,
    }
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Import entry rows. Unknown type names are stored as [`EntryType::Other`].
pub fn import_entries<R: Read>(
    conn: &Connection,
    input: R,
    stats: &mut ImportStats,
    progress: &dyn ImportProgress,
) -> Result<(), ImportError> {
    let mut reader = csv_reader(input);
    check_headers(&mut reader, &["entry_id", "entry_type", "main_title"])?;

    for (i, result) in reader.deserialize::<EntryRow>().enumerate() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed entry row: {e}");
                stats.skipped += 1;
                continue;
            }
        };

        let entry_type = row.entry_type.parse::<EntryType>().unwrap_or_else(|e| {
            log::warn!("Entry {}: {}, storing as Other", row.entry_id, e);
            EntryType::Other
        });
        operations::upsert_entry(conn, EntryId(row.entry_id), entry_type, &row.main_title)?;
        stats.entries += 1;
        progress.on_row(i + 1, "entries");
    }
    Ok(())
}

/// Import relation rows. Rows naming an unknown entry are skipped.
pub fn import_relations<R: Read>(
    conn: &Connection,
    input: R,
    stats: &mut ImportStats,
    progress: &dyn ImportProgress,
) -> Result<(), ImportError> {
    let mut reader = csv_reader(input);
    check_headers(&mut reader, &["entry_id", "related_entry_id", "relation_type"])?;

    for (i, result) in reader.deserialize::<RelationRow>().enumerate() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed relation row: {e}");
                stats.skipped += 1;
                continue;
            }
        };

        match operations::insert_relation(
            conn,
            EntryId(row.entry_id),
            EntryId(row.related_entry_id),
            &row.relation_type,
        ) {
            Ok(true) => stats.relations_created += 1,
            Ok(false) => stats.relations_existing += 1,
            Err(OperationError::NotFound { id, .. }) => {
                log::warn!(
                    "Skipping relation {} -> {}: unknown entry {}",
                    row.entry_id,
                    row.related_entry_id,
                    id
                );
                stats.skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
        progress.on_row(i + 1, "relations");
    }
    Ok(())
}

/// Import series rows. Rows naming an unknown entry are skipped.
pub fn import_series<R: Read>(
    conn: &Connection,
    input: R,
    stats: &mut ImportStats,
    progress: &dyn ImportProgress,
) -> Result<(), ImportError> {
    let mut reader = csv_reader(input);
    check_headers(&mut reader, &["entry_id"])?;

    for (i, result) in reader.deserialize::<SeriesRow>().enumerate() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed series row: {e}");
                stats.skipped += 1;
                continue;
            }
        };

        match operations::insert_series(conn, EntryId(row.entry_id)) {
            Ok(true) => stats.series_created += 1,
            Ok(false) => stats.series_existing += 1,
            Err(OperationError::NotFound { .. }) => {
                log::warn!("Skipping series for unknown entry {}", row.entry_id);
                stats.skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
        progress.on_row(i + 1, "series");
    }
    Ok(())
}

/// Fail early on an unreadable header or a missing column instead of
/// skipping every row. Extra columns are allowed.
fn check_headers<R: Read>(
    reader: &mut csv::Reader<R>,
    expected: &[&str],
) -> Result<(), ImportError> {
    let headers = reader.headers().map_err(|source| ImportError::Csv {
        path: "<input>".to_string(),
        source,
    })?;
    let missing: Vec<String> = expected
        .iter()
        .filter(|&&column| !headers.iter().any(|h| h == column))
        .map(|column| column.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImportError::MissingColumns {
            path: "<input>".to_string(),
            missing,
        })
    }
}
