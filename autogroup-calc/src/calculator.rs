//! Point queries for franchise group ids, memoized per component.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};

use autogroup_core::{EntryId, RelationMap};

use crate::graph::RelationGraph;
use crate::resolver::{resolve_all, resolve_component, Component};
use crate::selector::{GroupIdSelector, MinimumId};

/// When components are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// Resolve a component the first time one of its members is queried.
    #[default]
    Lazy,
    /// Resolve every component while constructing the calculator.
    Eager,
}

/// Assigns every entry to a franchise group.
///
/// The relation graph is built once and never changes. Queries take
/// `&self` and may be issued from several threads; the first query for a
/// component resolves it and caches the group id for every member, so
/// later queries for any member of that franchise are a map lookup.
///
/// # Example
///
/// ```
/// use autogroup_calc::GroupCalculator;
/// use autogroup_core::{EntryId, Relation, RelationKind, RelationMap};
///
/// let relations = RelationMap::from_relations([
///     Relation::untyped(1, 2, RelationKind::Sequel),
///     Relation::untyped(2, 3, RelationKind::Sequel),
/// ]);
/// let calc = GroupCalculator::new(&relations);
/// assert_eq!(calc.get_group(EntryId(3)), EntryId(1));
/// ```
pub struct GroupCalculator<S: GroupIdSelector = MinimumId> {
    graph: RelationGraph,
    selector: S,
    groups: RwLock<HashMap<EntryId, EntryId>>,
}

impl GroupCalculator<MinimumId> {
    /// Lazy calculator that picks the smallest id of each component.
    pub fn new(relations: &RelationMap) -> Self {
        Self::with_options(relations, MinimumId, Resolution::Lazy)
    }
}

impl<S: GroupIdSelector> GroupCalculator<S> {
    pub fn with_options(relations: &RelationMap, selector: S, resolution: Resolution) -> Self {
        Self::from_graph(RelationGraph::build(relations), selector, resolution)
    }

    pub fn from_graph(graph: RelationGraph, selector: S, resolution: Resolution) -> Self {
        let calc = Self {
            graph,
            selector,
            groups: RwLock::new(HashMap::new()),
        };
        if resolution == Resolution::Eager {
            calc.resolve_everything();
        }
        calc
    }

    fn resolve_everything(&self) {
        let components = resolve_all(&self.graph);
        let mut groups = self.groups.write().unwrap_or_else(PoisonError::into_inner);
        groups.reserve(self.graph.entry_count());
        for component in &components {
            let group_id = self.selector.select(component, &self.graph);
            groups.extend(component.iter().map(|member| (member, group_id)));
        }
        log::debug!(
            "Eagerly resolved {} components covering {} entries",
            components.len(),
            groups.len()
        );
    }

    /// The group id of `id`.
    ///
    /// Entries that never appear in any relation are their own group.
    pub fn get_group(&self, id: EntryId) -> EntryId {
        if let Some(&group_id) = self
            .groups
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            return group_id;
        }

        if !self.graph.contains(id) {
            return id;
        }

        let mut groups = self.groups.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have resolved this component while we waited.
        if let Some(&group_id) = groups.get(&id) {
            return group_id;
        }

        let component = resolve_component(&self.graph, id);
        let group_id = self.selector.select(&component, &self.graph);
        groups.extend(component.iter().map(|member| (member, group_id)));
        log::trace!(
            "Resolved group {} with {} members (queried {})",
            group_id,
            component.len(),
            id
        );
        group_id
    }

    /// Every entry in the same group as `id`, including `id` itself.
    pub fn group_members(&self, id: EntryId) -> Component {
        resolve_component(&self.graph, id)
    }

    /// Bucket `ids` by group id.
    ///
    /// Within a bucket, ids keep the order they had in `ids`.
    pub fn group_all<I>(&self, ids: I) -> BTreeMap<EntryId, Vec<EntryId>>
    where
        I: IntoIterator<Item = EntryId>,
    {
        let mut buckets: BTreeMap<EntryId, Vec<EntryId>> = BTreeMap::new();
        for id in ids {
            buckets.entry(self.get_group(id)).or_default().push(id);
        }
        buckets
    }

    pub fn graph(&self) -> &RelationGraph {
        &self.graph
    }

    /// Number of entries whose group id has been computed so far.
    pub fn cached_count(&self) -> usize {
        self.groups
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
