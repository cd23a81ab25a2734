use std::collections::BTreeMap;

use crate::entry::EntryId;
use crate::relation::Relation;

/// Relations grouped by their source entry.
///
/// Each source keeps its relations in the order they were supplied. The map
/// is built once and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct RelationMap {
    by_source: BTreeMap<EntryId, Vec<Relation>>,
    relation_count: usize,
}

impl RelationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_relations<I>(relations: I) -> Self
    where
        I: IntoIterator<Item = Relation>,
    {
        let mut by_source: BTreeMap<EntryId, Vec<Relation>> = BTreeMap::new();
        let mut relation_count = 0;
        for relation in relations {
            by_source.entry(relation.from).or_default().push(relation);
            relation_count += 1;
        }
        Self {
            by_source,
            relation_count,
        }
    }

    /// Relations whose source is `id`, in supply order. Empty if none.
    pub fn relations_from(&self, id: EntryId) -> &[Relation] {
        self.by_source.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every relation, grouped by ascending source id.
    pub fn iter(&self) -> impl Iterator<Item = &Relation> {
        self.by_source.values().flatten()
    }

    pub fn source_count(&self) -> usize {
        self.by_source.len()
    }

    pub fn relation_count(&self) -> usize {
        self.relation_count
    }

    pub fn is_empty(&self) -> bool {
        self.relation_count == 0
    }
}

impl FromIterator<Relation> for RelationMap {
    fn from_iter<I: IntoIterator<Item = Relation>>(iter: I) -> Self {
        Self::from_relations(iter)
    }
}
