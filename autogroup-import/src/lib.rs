//! Import catalog data into the database.
//!
//! Reads CSV dumps of entries, relations and series and writes them through
//! `autogroup-db`. Relation labels are stored as given; mapping them to
//! relation kinds happens when they are loaded for grouping.

pub mod csv_import;
pub mod progress;

pub use csv_import::{
    import_csv_files, import_entries, import_relations, import_series, CsvSources, ImportError,
    ImportStats,
};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
