//! Representative selection for a resolved component.

use autogroup_core::{EntryId, EntryType};

use crate::graph::RelationGraph;
use crate::resolver::Component;

/// Picks the group id shared by every member of a component.
///
/// Implementations must depend only on the member set and the members'
/// recorded types, never on traversal or insertion order, so the same
/// component always yields the same representative.
pub trait GroupIdSelector: Send + Sync {
    fn select(&self, component: &Component, graph: &RelationGraph) -> EntryId;
}

/// The numerically smallest member.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumId;

impl GroupIdSelector for MinimumId {
    fn select(&self, component: &Component, _graph: &RelationGraph) -> EntryId {
        component.min_member()
    }
}

/// The smallest member reported with a preferred type, or the smallest
/// member overall when no member has that type.
#[derive(Debug, Clone, Copy)]
pub struct PreferType(pub EntryType);

impl GroupIdSelector for PreferType {
    fn select(&self, component: &Component, graph: &RelationGraph) -> EntryId {
        component
            .iter()
            .find(|&id| graph.has_type(id, self.0))
            .unwrap_or_else(|| component.min_member())
    }
}

impl<S: GroupIdSelector + ?Sized> GroupIdSelector for Box<S> {
    fn select(&self, component: &Component, graph: &RelationGraph) -> EntryId {
        (**self).select(component, graph)
    }
}
