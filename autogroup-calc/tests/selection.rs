use autogroup_calc::{GroupCalculator, GroupIdSelector, MinimumId, PreferType, Resolution};
use autogroup_core::{EntryId, EntryType, Relation, RelationKind, RelationMap};

fn franchise() -> RelationMap {
    // 12 (movie) <- 3 (OVA) -> 8 (TV) -> 5 (TV), plus an unrelated TV pair.
    RelationMap::from_relations([
        Relation::new(3, 12, EntryType::Ova, EntryType::Movie, RelationKind::SideStory),
        Relation::new(3, 8, EntryType::Ova, EntryType::TvSeries, RelationKind::ParentStory),
        Relation::new(8, 5, EntryType::TvSeries, EntryType::TvSeries, RelationKind::Sequel),
        Relation::new(20, 21, EntryType::TvSeries, EntryType::Web, RelationKind::Sequel),
    ])
}

fn groups<S: GroupIdSelector>(calc: &GroupCalculator<S>, ids: &[u32]) -> Vec<u32> {
    ids.iter().map(|&id| calc.get_group(EntryId(id)).get()).collect()
}

#[test]
fn minimum_id_is_default() {
    let calc = GroupCalculator::new(&franchise());
    assert_eq!(groups(&calc, &[3, 5, 8, 12]), vec![3, 3, 3, 3]);
}

#[test]
fn prefer_type_picks_smallest_of_type() {
    let calc = GroupCalculator::with_options(
        &franchise(),
        PreferType(EntryType::TvSeries),
        Resolution::Lazy,
    );
    assert_eq!(groups(&calc, &[3, 5, 8, 12]), vec![5, 5, 5, 5]);
    assert_eq!(groups(&calc, &[20, 21]), vec![20, 20]);
}

#[test]
fn prefer_type_falls_back_to_minimum_id() {
    let calc = GroupCalculator::with_options(
        &franchise(),
        PreferType(EntryType::TvSpecial),
        Resolution::Lazy,
    );
    assert_eq!(groups(&calc, &[12, 8, 5, 3]), vec![3, 3, 3, 3]);
}

#[test]
fn prefer_type_result_is_still_idempotent() {
    let calc = GroupCalculator::with_options(
        &franchise(),
        PreferType(EntryType::Movie),
        Resolution::Lazy,
    );
    let g = calc.get_group(EntryId(5));
    assert_eq!(g, EntryId(12));
    assert_eq!(calc.get_group(g), g);
}

#[test]
fn boxed_selector_behaves_like_inner() {
    let selector: Box<dyn GroupIdSelector> = Box::new(PreferType(EntryType::Movie));
    let calc = GroupCalculator::with_options(&franchise(), selector, Resolution::Lazy);
    assert_eq!(groups(&calc, &[3, 5]), vec![12, 12]);
}

#[test]
fn eager_resolution_caches_everything_up_front() {
    let calc = GroupCalculator::with_options(&franchise(), MinimumId, Resolution::Eager);
    assert_eq!(calc.cached_count(), 6);
    assert_eq!(groups(&calc, &[12, 21, 99]), vec![3, 20, 99]);
}

#[test]
fn eager_and_lazy_agree() {
    let map = franchise();
    let lazy = GroupCalculator::new(&map);
    let eager = GroupCalculator::with_options(&map, MinimumId, Resolution::Eager);
    let ids = [3, 5, 8, 12, 20, 21, 42];
    assert_eq!(groups(&lazy, &ids), groups(&eager, &ids));
}

#[test]
fn prefer_type_ignores_relation_order() {
    let forward = vec![
        Relation::new(1, 2, EntryType::TvSeries, EntryType::Movie, RelationKind::Sequel),
        Relation::new(1, 2, EntryType::TvSeries, EntryType::TvSeries, RelationKind::SideStory),
    ];
    let backward: Vec<Relation> = forward.iter().rev().copied().collect();

    let pick = |relations: Vec<Relation>, preferred: EntryType| {
        let calc = GroupCalculator::with_options(
            &RelationMap::from_relations(relations),
            PreferType(preferred),
            Resolution::Lazy,
        );
        calc.get_group(EntryId(1))
    };

    assert_eq!(pick(forward.clone(), EntryType::Movie), EntryId(2));
    assert_eq!(pick(backward.clone(), EntryType::Movie), EntryId(2));
    assert_eq!(pick(forward, EntryType::TvSeries), EntryId(1));
    assert_eq!(pick(backward, EntryType::TvSeries), EntryId(1));
}
