use autogroup_calc::RelationGraph;
use autogroup_core::{EntryId, EntryType, Relation, RelationKind, RelationMap};

fn ids(raw: &[u32]) -> Vec<EntryId> {
    raw.iter().copied().map(EntryId).collect()
}

fn neighbors(graph: &RelationGraph, id: u32) -> Vec<EntryId> {
    graph
        .neighbors(EntryId(id))
        .unwrap()
        .iter()
        .copied()
        .collect()
}

#[test]
fn strong_relations_are_undirected() {
    let map = RelationMap::from_relations([Relation::untyped(1, 2, RelationKind::Sequel)]);
    let graph = RelationGraph::build(&map);

    assert_eq!(neighbors(&graph, 1), ids(&[2]));
    assert_eq!(neighbors(&graph, 2), ids(&[1]));
    assert_eq!(graph.stats().strong_edges, 1);
}

#[test]
fn weak_relations_register_entries_without_edges() {
    let map = RelationMap::from_relations([Relation::untyped(5, 6, RelationKind::Character)]);
    let graph = RelationGraph::build(&map);

    assert!(graph.contains(EntryId(5)));
    assert!(graph.contains(EntryId(6)));
    assert!(neighbors(&graph, 5).is_empty());
    assert!(neighbors(&graph, 6).is_empty());
    assert_eq!(graph.weak_relations().len(), 1);
    assert_eq!(graph.stats().weak_edges, 1);
}

#[test]
fn self_references_are_dropped() {
    let map = RelationMap::from_relations([
        Relation::untyped(7, 7, RelationKind::Sequel),
        Relation::untyped(8, 8, RelationKind::Summary),
    ]);
    let graph = RelationGraph::build(&map);

    assert_eq!(graph.entry_count(), 0);
    assert!(!graph.contains(EntryId(7)));
    assert_eq!(graph.stats().self_references, 2);
    assert_eq!(graph.stats().strong_edges, 0);
}

#[test]
fn parallel_edges_collapse_in_adjacency() {
    let map = RelationMap::from_relations([
        Relation::untyped(1, 2, RelationKind::Sequel),
        Relation::untyped(2, 1, RelationKind::Prequel),
        Relation::untyped(1, 2, RelationKind::SameSetting),
    ]);
    let graph = RelationGraph::build(&map);

    assert_eq!(neighbors(&graph, 1), ids(&[2]));
    assert_eq!(neighbors(&graph, 2), ids(&[1]));
    assert_eq!(graph.stats().strong_edges, 2);
    assert_eq!(graph.stats().weak_edges, 1);
}

#[test]
fn targets_appear_even_without_outgoing_relations() {
    let map = RelationMap::from_relations([Relation::untyped(1, 9, RelationKind::SideStory)]);
    let graph = RelationGraph::build(&map);

    assert!(graph.contains(EntryId(9)));
    assert!(map.relations_from(EntryId(9)).is_empty());
    assert_eq!(graph.entry_count(), 2);
}

#[test]
fn entry_types_recorded_from_both_ends() {
    let map = RelationMap::from_relations([
        Relation::new(1, 2, EntryType::TvSeries, EntryType::Movie, RelationKind::Sequel),
        Relation::new(2, 3, EntryType::Ova, EntryType::TvSpecial, RelationKind::Sequel),
    ]);
    let graph = RelationGraph::build(&map);

    assert_eq!(graph.entry_type(EntryId(1)), Some(EntryType::TvSeries));
    assert_eq!(graph.entry_type(EntryId(2)), Some(EntryType::Movie));
    assert_eq!(graph.entry_type(EntryId(3)), Some(EntryType::TvSpecial));
    assert_eq!(graph.entry_type(EntryId(4)), None);
}

#[test]
fn conflicting_types_resolve_independent_of_order() {
    let forward = [
        Relation::new(1, 2, EntryType::Other, EntryType::TvSeries, RelationKind::Sequel),
        Relation::new(3, 2, EntryType::Other, EntryType::Movie, RelationKind::SideStory),
    ];
    let mut backward = forward;
    backward.reverse();

    for relations in [forward, backward] {
        let graph = RelationGraph::build(&RelationMap::from_relations(relations));
        assert_eq!(graph.entry_type(EntryId(2)), Some(EntryType::Movie));
        assert!(graph.has_type(EntryId(2), EntryType::TvSeries));
        assert!(graph.has_type(EntryId(2), EntryType::Movie));
        assert!(!graph.has_type(EntryId(2), EntryType::Ova));
        assert!(!graph.has_type(EntryId(9), EntryType::Other));
    }
}

#[test]
fn empty_input_builds_empty_graph() {
    let graph = RelationGraph::build(&RelationMap::new());
    assert_eq!(graph.entry_count(), 0);
    assert!(graph.neighbors(EntryId(1)).is_none());
}
