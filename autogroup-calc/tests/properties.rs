use std::collections::{HashMap, HashSet};

use autogroup_calc::GroupCalculator;
use autogroup_core::{EntryId, Relation, RelationKind, RelationMap};
use proptest::prelude::*;

fn relation_strategy() -> impl Strategy<Value = Relation> {
    (1u32..40, 1u32..40, prop::sample::select(RelationKind::all()))
        .prop_map(|(from, to, kind)| Relation::untyped(from, to, kind))
}

/// Reference connectivity: repeatedly merge labels until nothing changes.
fn naive_labels(relations: &[Relation]) -> HashMap<EntryId, EntryId> {
    let mut label: HashMap<EntryId, EntryId> = HashMap::new();
    for r in relations.iter().filter(|r| !r.is_self_referential()) {
        label.insert(r.from, r.from);
        label.insert(r.to, r.to);
    }
    loop {
        let mut changed = false;
        for r in relations
            .iter()
            .filter(|r| r.kind.is_strong() && !r.is_self_referential())
        {
            let (a, b) = (label[&r.from], label[&r.to]);
            if a != b {
                let low = a.min(b);
                for value in label.values_mut() {
                    if *value == a || *value == b {
                        *value = low;
                    }
                }
                changed = true;
            }
        }
        if !changed {
            return label;
        }
    }
}

proptest! {
    #[test]
    fn groups_match_naive_connectivity(relations in prop::collection::vec(relation_strategy(), 0..60)) {
        let map = RelationMap::from_relations(relations.iter().copied());
        let calc = GroupCalculator::new(&map);
        let expected = naive_labels(&relations);

        for id in (0u32..45).map(EntryId) {
            let want = expected.get(&id).copied().unwrap_or(id);
            prop_assert_eq!(calc.get_group(id), want);
        }
    }

    #[test]
    fn group_of_group_is_stable(relations in prop::collection::vec(relation_strategy(), 0..60)) {
        let map = RelationMap::from_relations(relations);
        let calc = GroupCalculator::new(&map);
        for id in (0u32..45).map(EntryId) {
            let g = calc.get_group(id);
            prop_assert_eq!(calc.get_group(g), g);
            prop_assert!(calc.group_members(id).contains(g));
        }
    }

    #[test]
    fn members_agree_with_group_ids(relations in prop::collection::vec(relation_strategy(), 0..60)) {
        let map = RelationMap::from_relations(relations);
        let calc = GroupCalculator::new(&map);
        for id in (0u32..45).map(EntryId) {
            let members: HashSet<EntryId> = calc.group_members(id).iter().collect();
            for other in (0u32..45).map(EntryId) {
                let same_group = calc.get_group(id) == calc.get_group(other);
                prop_assert_eq!(same_group, members.contains(&other));
            }
        }
    }
}
