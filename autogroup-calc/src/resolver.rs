//! Connected-component resolution over the strong-relation graph.

use std::collections::{BTreeSet, HashSet, VecDeque};

use autogroup_core::EntryId;

use crate::graph::RelationGraph;

/// A maximal set of entries connected through strong relations.
///
/// Members are kept sorted, so two components with the same members are
/// equal regardless of how they were discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    members: BTreeSet<EntryId>,
    min: EntryId,
}

impl Component {
    pub fn singleton(id: EntryId) -> Self {
        Self {
            members: BTreeSet::from([id]),
            min: id,
        }
    }

    pub fn members(&self) -> &BTreeSet<EntryId> {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.members.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; a component has at least one member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.members.contains(&id)
    }

    pub fn min_member(&self) -> EntryId {
        self.min
    }
}

/// Collect every entry reachable from `start` through strong relations.
///
/// Breadth-first with an explicit queue and visited set, so cycles and
/// very long chains are handled without recursion. Entries the graph has
/// never seen resolve to a singleton.
pub fn resolve_component(graph: &RelationGraph, start: EntryId) -> Component {
    if !graph.contains(start) {
        return Component::singleton(start);
    }

    let mut visited: HashSet<EntryId> = HashSet::from([start]);
    let mut frontier: VecDeque<EntryId> = VecDeque::from([start]);

    while let Some(current) = frontier.pop_front() {
        let Some(neighbors) = graph.neighbors(current) else {
            continue;
        };
        for &next in neighbors {
            if visited.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    let min = visited.iter().copied().fold(start, EntryId::min);
    Component {
        members: visited.into_iter().collect(),
        min,
    }
}

/// Partition every entry in the graph into components.
///
/// Components are returned ordered by their smallest member.
pub fn resolve_all(graph: &RelationGraph) -> Vec<Component> {
    let mut ids: Vec<EntryId> = graph.entry_ids().collect();
    ids.sort_unstable();

    let mut seen: HashSet<EntryId> = HashSet::with_capacity(ids.len());
    let mut components = Vec::new();
    for id in ids {
        if seen.contains(&id) {
            continue;
        }
        let component = resolve_component(graph, id);
        seen.extend(component.iter());
        components.push(component);
    }
    components
}
