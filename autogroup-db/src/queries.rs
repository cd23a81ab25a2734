//! Read queries that feed the grouping engine and the group report.

use std::collections::HashMap;

use autogroup_core::{EntryId, EntryType, Relation, RelationKind, RelationMap};
use rusqlite::Connection;

use crate::operations::OperationError;

// ── Relations ───────────────────────────────────────────────────────────────

/// Load every relation, joined to both entries' types.
///
/// Relation labels are mapped through [`RelationKind::from_label`], so
/// unrecognized labels load as [`RelationKind::Other`].
pub fn load_relations(conn: &Connection) -> Result<RelationMap, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT rel.entry_id, rel.related_entry_id, from_entry.entry_type,
                to_entry.entry_type, rel.relation_type
         FROM entry_relations rel
             INNER JOIN entries from_entry ON from_entry.entry_id = rel.entry_id
             INNER JOIN entries to_entry ON to_entry.entry_id = rel.related_entry_id
         ORDER BY rel.entry_id, rel.rowid",
    )?;
    let rows = stmt.query_map([], |row| {
        let label: String = row.get(4)?;
        Ok(Relation::new(
            EntryId(row.get(0)?),
            EntryId(row.get(1)?),
            EntryType::from_code(row.get(2)?),
            EntryType::from_code(row.get(3)?),
            RelationKind::from_label(&label),
        ))
    })?;
    let relations = rows.collect::<Result<Vec<_>, _>>()?;
    log::debug!("Loaded {} relations", relations.len());
    Ok(RelationMap::from_relations(relations))
}

// ── Titles and Ids ──────────────────────────────────────────────────────────

/// Main title of every entry.
pub fn load_main_titles(conn: &Connection) -> Result<HashMap<EntryId, String>, OperationError> {
    let mut stmt = conn.prepare("SELECT entry_id, main_title FROM entries")?;
    let rows = stmt.query_map([], |row| Ok((EntryId(row.get(0)?), row.get(1)?)))?;
    rows.collect::<Result<HashMap<_, _>, _>>().map_err(Into::into)
}

/// Every entry id, ordered by main title.
pub fn load_all_entry_ids(conn: &Connection) -> Result<Vec<EntryId>, OperationError> {
    let mut stmt =
        conn.prepare("SELECT entry_id FROM entries ORDER BY main_title, entry_id")?;
    let rows = stmt.query_map([], |row| Ok(EntryId(row.get(0)?)))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Ids of entries that are in the user's collection, in the order they were added.
pub fn load_series_entry_ids(conn: &Connection) -> Result<Vec<EntryId>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT entry.entry_id
         FROM series
             INNER JOIN entries entry ON entry.entry_id = series.entry_id
         ORDER BY series.series_id",
    )?;
    let rows = stmt.query_map([], |row| Ok(EntryId(row.get(0)?)))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Row counts for the catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseStats {
    pub entries: i64,
    pub relations: i64,
    pub series: i64,
}

pub fn database_stats(conn: &Connection) -> Result<DatabaseStats, OperationError> {
    let entries: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |r| r.get(0))?;
    let relations: i64 =
        conn.query_row("SELECT COUNT(*) FROM entry_relations", [], |r| r.get(0))?;
    let series: i64 = conn.query_row("SELECT COUNT(*) FROM series", [], |r| r.get(0))?;
    Ok(DatabaseStats {
        entries,
        relations,
        series,
    })
}
