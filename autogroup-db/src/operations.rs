//! Write operations for entries, relations and series.

use autogroup_core::{EntryId, EntryType, RelationKind};
use rusqlite::{params, Connection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

// ── Entry Operations ────────────────────────────────────────────────────────

/// Insert or update a catalog entry.
pub fn upsert_entry(
    conn: &Connection,
    id: EntryId,
    entry_type: EntryType,
    main_title: &str,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO entries (entry_id, entry_type, main_title)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(entry_id) DO UPDATE SET
             entry_type = excluded.entry_type,
             main_title = excluded.main_title",
        params![id.get(), entry_type.code(), main_title],
    )?;
    Ok(())
}

// ── Relation Operations ─────────────────────────────────────────────────────

/// Record a relation with its raw label, as received from the data source.
///
/// Labels are stored verbatim and mapped to a [`RelationKind`] only when
/// loaded. Returns `false` if the exact relation was already present.
pub fn insert_relation(
    conn: &Connection,
    from: EntryId,
    to: EntryId,
    label: &str,
) -> Result<bool, OperationError> {
    require_entry(conn, from)?;
    require_entry(conn, to)?;
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO entry_relations (entry_id, related_entry_id, relation_type)
         VALUES (?1, ?2, ?3)",
        params![from.get(), to.get(), label],
    )?;
    Ok(inserted > 0)
}

/// Record a relation using a kind's canonical label.
pub fn insert_relation_kind(
    conn: &Connection,
    from: EntryId,
    to: EntryId,
    kind: RelationKind,
) -> Result<bool, OperationError> {
    insert_relation(conn, from, to, kind.label())
}

// ── Series Operations ───────────────────────────────────────────────────────

/// Mark an entry as part of the user's collection. Idempotent.
///
/// Returns `true` if the entry was not already in the collection.
pub fn insert_series(conn: &Connection, entry_id: EntryId) -> Result<bool, OperationError> {
    require_entry(conn, entry_id)?;
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO series (entry_id) VALUES (?1)",
        params![entry_id.get()],
    )?;
    Ok(inserted > 0)
}

fn require_entry(conn: &Connection, id: EntryId) -> Result<(), OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM entries WHERE entry_id = ?1)",
        params![id.get()],
        |row| row.get(0),
    )?;
    if exists {
        Ok(())
    } else {
        Err(OperationError::NotFound {
            entity_type: "entry".to_string(),
            id: id.to_string(),
        })
    }
}
