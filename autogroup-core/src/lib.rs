//! Data model for franchise grouping: entry ids and types, relation kinds
//! and their strength, and the relation multimap consumed by the grouping
//! engine.
//!
//! This crate has no I/O. Loaders (see `autogroup-db`) produce a
//! [`RelationMap`]; `autogroup-calc` consumes it.

pub mod entry;
pub mod relation;
pub mod relation_map;

pub use entry::{EntryId, EntryType, EntryTypeParseError};
pub use relation::{Relation, RelationKind, RelationStrength};
pub use relation_map::RelationMap;
