//! Integration tests for the resident and visible inventories

use istsim_foundation::{Amount, Catalog, ItemStack};
use istsim_storage::{FlagValue, GameData, GameFlags, RemoveOptions, SlotsCore, VisibleInventory};

fn catalog() -> Catalog {
    Catalog::from_names(&["MaterialA", "MaterialB", "Weapon1"])
}

fn stack(catalog: &Catalog, name: &str, count: u32) -> ItemStack {
    catalog
        .get(name)
        .expect("test item")
        .create_default_stack()
        .with_count(count)
}

// =============================================================================
// Sync
// =============================================================================

#[test]
fn non_positive_count_nukes_resident() {
    let c = catalog();
    let mut pouch = VisibleInventory::from_stacks(vec![stack(&c, "materiala", 3)]);
    let mut resident = GameData::default();
    resident.sync_with(&pouch);
    assert!(resident.is_synced_with(&pouch));

    pouch.break_slots(1);
    assert_eq!(pouch.m_count(), 0);
    resident.sync_with(&pouch);

    assert!(resident.slots().is_empty());
    assert_eq!(pouch.slots().len(), 1);
    assert!(!resident.is_synced_with(&pouch));

    pouch.break_slots(3);
    resident.sync_with(&pouch);
    assert!(resident.slots().is_empty());
}

#[test]
fn positive_count_copies_independently() {
    let c = catalog();
    let mut pouch = VisibleInventory::from_stacks(vec![
        stack(&c, "materiala", 3),
        stack(&c, "materialb", 1),
    ]);
    let mut resident = GameData::default();
    resident.sync_with(&pouch);
    assert!(resident.is_synced_with(&pouch));

    assert!(pouch.remove(&stack(&c, "materiala", 1), Amount::Count(1), RemoveOptions::new()));
    assert!(!resident.is_synced_with(&pouch));
    assert_eq!(resident.slots().get(0).map(|s| s.count), Some(3));
}

#[test]
fn sync_ignores_flags() {
    let c = catalog();
    let pouch = VisibleInventory::from_stacks(vec![stack(&c, "materiala", 1)]);
    let mut flags = GameFlags::new();
    flags.set("hasDLC", FlagValue::Bool(true));
    let mut resident = GameData::new(SlotsCore::default(), flags);

    resident.sync_with(&pouch);
    assert!(resident.is_synced_with(&pouch));
    assert_eq!(resident.get_flag("hasDLC"), Some(FlagValue::Bool(true)));
}

// =============================================================================
// Flags
// =============================================================================

#[test]
fn named_tab_flags_map_to_fields() {
    let mut flags = GameFlags::new();
    flags.set("weaponSlots", FlagValue::Int(12));
    assert_eq!(flags.weapon_slots, 12);
    assert_eq!(flags.get("weaponSlots"), Some(FlagValue::Int(12)));

    flags.set("bowSlots", FlagValue::Int(-1));
    assert_eq!(flags.bow_slots, 5);
    assert_eq!(flags.extra().count(), 1);
}

// =============================================================================
// Reload
// =============================================================================

#[test]
fn reload_refills_from_resident() {
    let c = catalog();
    let resident = GameData::new(
        SlotsCore::new(vec![stack(&c, "weapon1", 1), stack(&c, "materiala", 2)]),
        GameFlags::new(),
    );
    let mut pouch = VisibleInventory::from_stacks(vec![stack(&c, "materialb", 9)]);

    pouch.clear_for_reload();
    resident.add_all_to_pouch_on_reload(&mut pouch);

    assert!(resident.is_synced_with(&pouch));
    assert_eq!(pouch.m_count(), 2);
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn deep_clone_is_independent() {
    let c = catalog();
    let original = VisibleInventory::from_stacks(vec![stack(&c, "materiala", 2)]);
    let mut copy = original.deep_clone();
    assert!(copy.equals(&original));

    copy.add(&stack(&c, "materialb", 1));
    assert!(!copy.equals(&original));
    assert_eq!(original.slots().len(), 1);
}

#[test]
fn displayed_slots_are_fresh_projections() {
    let c = catalog();
    let mut pouch = VisibleInventory::from_stacks(vec![stack(&c, "materiala", 2)]);
    let before = pouch.get_displayed_slots(true);

    pouch.add(&stack(&c, "materiala", 1));
    assert_eq!(before[0].count, Some(2));
    assert!(before[0].animated);
    assert_eq!(before[0].to_string(), "MaterialA x2");
    assert_eq!(pouch.get_displayed_slots(false)[0].count, Some(3));
}
