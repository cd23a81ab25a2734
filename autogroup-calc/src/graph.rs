//! Undirected adjacency of strong relations.
//!
//! Built once from a [`RelationMap`]. Weak relations are kept on the side
//! for callers that want to display them but never enter the adjacency.

use std::collections::{BTreeSet, HashMap};

use autogroup_core::{EntryId, EntryType, Relation, RelationMap, RelationStrength};

/// Counters collected while building a [`RelationGraph`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Strong relations added to the adjacency (parallel edges counted once each).
    pub strong_edges: usize,
    /// Weak relations kept out of the adjacency.
    pub weak_edges: usize,
    /// Relations dropped because both ends were the same entry.
    pub self_references: usize,
}

/// Strong-relation adjacency over every entry that appears in any relation.
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    adjacency: HashMap<EntryId, BTreeSet<EntryId>>,
    types: HashMap<EntryId, BTreeSet<EntryType>>,
    weak: Vec<Relation>,
    stats: BuildStats,
}

impl RelationGraph {
    pub fn build(relations: &RelationMap) -> Self {
        let mut graph = Self::default();

        for relation in relations.iter() {
            if relation.is_self_referential() {
                log::warn!(
                    "Dropping self-referential '{}' relation on entry {}",
                    relation.kind,
                    relation.from
                );
                graph.stats.self_references += 1;
                continue;
            }

            graph.record_type(relation.from, relation.from_type);
            graph.record_type(relation.to, relation.to_type);

            match relation.kind.strength() {
                RelationStrength::Strong => {
                    graph
                        .adjacency
                        .entry(relation.from)
                        .or_default()
                        .insert(relation.to);
                    graph
                        .adjacency
                        .entry(relation.to)
                        .or_default()
                        .insert(relation.from);
                    graph.stats.strong_edges += 1;
                }
                RelationStrength::Weak => {
                    graph.adjacency.entry(relation.from).or_default();
                    graph.adjacency.entry(relation.to).or_default();
                    graph.weak.push(*relation);
                    graph.stats.weak_edges += 1;
                }
            }
        }

        log::debug!(
            "Built relation graph: {} entries, {} strong, {} weak, {} self-referential dropped",
            graph.adjacency.len(),
            graph.stats.strong_edges,
            graph.stats.weak_edges,
            graph.stats.self_references,
        );

        graph
    }

    fn record_type(&mut self, id: EntryId, entry_type: EntryType) {
        let types = self.types.entry(id).or_default();
        if types.insert(entry_type) && types.len() > 1 {
            log::debug!("Entry {} reported with {} different types", id, types.len());
        }
    }

    /// Strong neighbors of `id`, or `None` if the entry never appeared in a relation.
    pub fn neighbors(&self, id: EntryId) -> Option<&BTreeSet<EntryId>> {
        self.adjacency.get(&id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// The type reported for `id`. When relations disagree, the type with
    /// the lowest code is returned regardless of relation order.
    pub fn entry_type(&self, id: EntryId) -> Option<EntryType> {
        self.types.get(&id)?.first().copied()
    }

    /// Whether any relation reported `id` as `entry_type`.
    pub fn has_type(&self, id: EntryId, entry_type: EntryType) -> bool {
        self.types
            .get(&id)
            .is_some_and(|types| types.contains(&entry_type))
    }

    /// Every known entry, in no particular order.
    pub fn entry_ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn entry_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn weak_relations(&self) -> &[Relation] {
        &self.weak
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }
}
