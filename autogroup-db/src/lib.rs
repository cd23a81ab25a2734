//! SQLite persistence for catalog entries, their relations and the user's
//! series.
//!
//! Loading here is the one blocking batch step before grouping: the
//! queries produce the [`autogroup_core::RelationMap`] and title map the
//! grouping engine and report consume.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    insert_relation, insert_relation_kind, insert_series, upsert_entry, OperationError,
};
pub use queries::{
    database_stats, load_all_entry_ids, load_main_titles, load_relations, load_series_entry_ids,
    DatabaseStats,
};
pub use schema::{open_database, open_memory, SchemaError};

pub use rusqlite::Connection;
