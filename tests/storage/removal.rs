//! Integration tests for the removal engine

use istsim_foundation::{Amount, Catalog, ItemStack, StackMetaPatch};
use istsim_storage::{RemoveOptions, SlotsCore, find_matches, remove};
use proptest::prelude::*;

fn catalog() -> Catalog {
    Catalog::from_names(&["MaterialA", "MaterialB", "ArrowA", "Weapon1", "FoodA"])
}

fn stack(catalog: &Catalog, name: &str, count: u32) -> ItemStack {
    catalog
        .get(name)
        .expect("test item")
        .create_default_stack()
        .with_count(count)
}

fn units_of(core: &SlotsCore, id: &str) -> u32 {
    core.iter()
        .filter(|s| s.item.id == id)
        .map(|s| s.count)
        .sum()
}

// =============================================================================
// Tier Precedence
// =============================================================================

#[test]
fn exact_match_drains_before_earlier_loose_match() {
    let c = catalog();
    let pattern = stack(&c, "weapon1", 1);
    let loose = pattern.modify(StackMetaPatch::new().life(5).equip(true));
    let mut core = SlotsCore::new(vec![loose.clone(), pattern.clone()]);

    assert!(remove(&mut core, &pattern, Amount::Count(1), RemoveOptions::new()));
    assert_eq!(core.len(), 1);
    assert_eq!(core.get(0), Some(&loose));
}

#[test]
fn tiers_concatenate_in_order() {
    let c = catalog();
    let pattern = stack(&c, "weapon1", 1);
    let worn = pattern.modify(StackMetaPatch::new().life(5));
    let core = SlotsCore::new(vec![worn, stack(&c, "materiala", 1), pattern.clone()]);

    // tier 1 finds slot 2; tiers 2 to 4 find both weapons
    assert_eq!(find_matches(&core, &pattern, 0), vec![2, 0, 2, 0, 2, 0, 2]);
}

#[test]
fn scan_wraps_from_start_slot() {
    let c = catalog();
    let mut core = SlotsCore::new(vec![
        stack(&c, "materiala", 2),
        stack(&c, "materialb", 1),
        stack(&c, "materiala", 2),
    ]);
    let options = RemoveOptions::new().with_start_slot(2);

    assert!(remove(&mut core, &stack(&c, "materiala", 1), Amount::Count(3), options));
    assert_eq!(core.len(), 2);
    assert_eq!(core.get(0).map(|s| s.count), Some(1));
    assert_eq!(core.get(1).map(|s| s.item.id.as_str()), Some("materialb"));
}

// =============================================================================
// Cleanup
// =============================================================================

#[test]
fn emptied_arrow_slot_survives_without_force_delete() {
    let c = catalog();
    let mut core = SlotsCore::new(vec![stack(&c, "arrowa", 3), stack(&c, "materiala", 1)]);

    assert!(remove(&mut core, &stack(&c, "arrowa", 1), Amount::All, RemoveOptions::new()));
    assert_eq!(core.len(), 2);
    assert_eq!(core.get(0).map(|s| s.count), Some(0));
}

#[test]
fn force_delete_removes_emptied_arrow_slot() {
    let c = catalog();
    let mut core = SlotsCore::new(vec![stack(&c, "arrowa", 3), stack(&c, "materiala", 1)]);
    let options = RemoveOptions::new().with_delete_zero_slot();

    assert!(remove(&mut core, &stack(&c, "arrowa", 1), Amount::All, options));
    assert_eq!(core.len(), 1);
    assert_eq!(core.get(0).map(|s| s.item.id.as_str()), Some("materiala"));
}

#[test]
fn food_is_bulk_removable_only_when_forced() {
    let c = catalog();
    let food = stack(&c, "fooda", 1);
    let store = || SlotsCore::new(vec![food.clone(), food.clone(), food.clone()]);

    let mut plain = store();
    assert!(remove(&mut plain, &food, Amount::Count(2), RemoveOptions::new()));
    assert_eq!(plain.len(), 1);

    let mut forced = store();
    let options = RemoveOptions::new().with_stackable_food();
    assert!(remove(&mut forced, &food, Amount::Count(2), options));
    assert_eq!(forced.len(), 1);
}

// =============================================================================
// Properties
// =============================================================================

fn store_strategy() -> impl Strategy<Value = Vec<(bool, u32)>> {
    prop::collection::vec((any::<bool>(), 1u32..20), 0..8)
}

fn build(c: &Catalog, layout: &[(bool, u32)]) -> SlotsCore {
    layout
        .iter()
        .map(|&(is_a, count)| stack(c, if is_a { "materiala" } else { "materialb" }, count))
        .collect()
}

fn options(start_slot: usize, force_delete: bool) -> RemoveOptions {
    let options = RemoveOptions::new().with_start_slot(start_slot);
    if force_delete {
        options.with_delete_zero_slot()
    } else {
        options
    }
}

proptest! {
    #[test]
    fn over_request_exhausts_and_fails(
        layout in store_strategy(),
        extra in 1u32..10,
        start in 0usize..10,
        force_delete in any::<bool>(),
    ) {
        let c = catalog();
        let mut core = build(&c, &layout);
        let available = units_of(&core, "materiala");
        let others = units_of(&core, "materialb");

        let ok = remove(
            &mut core,
            &stack(&c, "materiala", 1),
            Amount::Count(available + extra),
            options(start, force_delete),
        );

        prop_assert!(!ok);
        prop_assert_eq!(units_of(&core, "materiala"), 0);
        prop_assert_eq!(units_of(&core, "materialb"), others);
    }

    #[test]
    fn exact_request_succeeds(
        layout in store_strategy(),
        start in 0usize..10,
        force_delete in any::<bool>(),
    ) {
        let c = catalog();
        let mut core = build(&c, &layout);
        let available = units_of(&core, "materiala");

        let ok = remove(
            &mut core,
            &stack(&c, "materiala", 1),
            Amount::Count(available),
            options(start, force_delete),
        );

        prop_assert!(ok);
        prop_assert_eq!(units_of(&core, "materiala"), 0);
    }

    #[test]
    fn partial_request_removes_exactly(
        layout in store_strategy(),
        start in 0usize..10,
    ) {
        let c = catalog();
        let mut core = build(&c, &layout);
        let available = units_of(&core, "materiala");
        let request = available / 2;

        let ok = remove(
            &mut core,
            &stack(&c, "materiala", 1),
            Amount::Count(request),
            options(start, false),
        );

        prop_assert!(ok);
        prop_assert_eq!(units_of(&core, "materiala"), available - request);
    }

    #[test]
    fn all_always_succeeds_and_empties(
        layout in store_strategy(),
        start in 0usize..10,
        force_delete in any::<bool>(),
    ) {
        let c = catalog();
        let mut core = build(&c, &layout);
        let others = layout.iter().filter(|(is_a, _)| !is_a).count();

        let ok = remove(
            &mut core,
            &stack(&c, "materiala", 1),
            Amount::All,
            options(start, force_delete),
        );

        prop_assert!(ok);
        prop_assert_eq!(units_of(&core, "materiala"), 0);
        prop_assert_eq!(core.len(), others);
    }
}
