//! Integration tests for command execution against the simulation state

use istsim_engine::{CmdErr, SimulationState, parse_command};
use istsim_foundation::Catalog;
use proptest::prelude::*;

fn catalog() -> Catalog {
    Catalog::from_names(&["MaterialA", "MaterialB", "Weapon1", "FoodA", "ArrowA"])
}

/// Runs each line, returning whether the last one was applied.
fn run(state: &mut SimulationState, catalog: &Catalog, lines: &[&str]) -> bool {
    let mut applied = false;
    for line in lines {
        applied = parse_command(line, catalog).execute(state);
    }
    applied
}

fn count_of(state: &SimulationState, id: &str) -> u32 {
    state
        .pouch()
        .slots()
        .iter()
        .filter(|s| s.item.id == id)
        .map(|s| s.count)
        .sum()
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn removal_is_all_or_nothing() {
    let c = catalog();
    let mut state = SimulationState::new();
    run(&mut state, &c, &["initialize 1 materiala 1 materialb"]);
    let before = state.deep_clone();

    let mut command = parse_command("remove 1 materiala 5 materialb", &c);
    assert!(!command.execute(&mut state));
    assert_eq!(command.cmd_err(), Some(CmdErr::Execute));
    assert_eq!(command.errors(), ["not enough MaterialB to remove 5".to_string()]);
    assert!(state.equals(&before));
}

#[test]
fn eat_treats_food_as_stackable() {
    let c = catalog();
    let mut state = SimulationState::new();
    assert!(run(&mut state, &c, &["initialize 3 fooda", "eat 2 fooda"]));
    assert_eq!(state.pouch().slots().len(), 1);
    assert_eq!(state.inventory_m_count(), 1);
    assert!(state.is_synced());
}

#[test]
fn drop_keeps_empty_arrow_slot_but_sell_deletes_it() {
    let c = catalog();

    let mut dropped = SimulationState::new();
    assert!(run(&mut dropped, &c, &["initialize 3 arrowa", "drop all arrowa"]));
    assert_eq!(dropped.pouch().slots().len(), 1);
    assert_eq!(count_of(&dropped, "arrowa"), 0);
    assert_eq!(dropped.inventory_m_count(), 1);

    let mut sold = SimulationState::new();
    assert!(run(&mut sold, &c, &["initialize 3 arrowa", "sell all arrowa"]));
    assert!(sold.pouch().slots().is_empty());
    assert_eq!(sold.inventory_m_count(), 0);
    assert!(sold.game_data().slots().is_empty());
}

// =============================================================================
// Equipment
// =============================================================================

#[test]
fn equip_and_unequip() {
    let c = catalog();
    let mut state = SimulationState::new();
    assert!(run(&mut state, &c, &["initialize 2 weapon1", "equip weapon1"]));
    let equipped: Vec<_> = state.pouch().slots().iter().map(|s| s.meta.equip).collect();
    assert_eq!(equipped, vec![true, false]);
    assert!(state.is_synced());

    assert!(run(&mut state, &c, &["unequip weapon1"]));
    assert!(state.pouch().slots().iter().all(|s| !s.meta.equip));

    let mut command = parse_command("equip materiala", &c);
    assert!(!command.execute(&mut state));
    assert_eq!(command.errors(), ["no MaterialA to equip".to_string()]);
}

// =============================================================================
// Save, Break, Reload
// =============================================================================

#[test]
fn reload_without_save_fails() {
    let c = catalog();
    let mut state = SimulationState::new();
    let mut command = parse_command("reload", &c);
    assert!(!command.execute(&mut state));
    assert_eq!(command.errors(), ["no save to reload".to_string()]);
}

#[test]
fn broken_slot_duplicates_on_reload() {
    let c = catalog();
    let mut state = SimulationState::new();
    assert!(run(
        &mut state,
        &c,
        &["initialize 1 materiala 1 materialb", "save", "break 1 slots", "reload"]
    ));

    assert_eq!(count_of(&state, "materialb"), 2);
    assert_eq!(count_of(&state, "materiala"), 1);
    assert_eq!(state.inventory_m_count(), 1);
    assert!(!state.is_synced());
}

#[test]
fn breaking_every_slot_nukes_on_next_sync() {
    let c = catalog();
    let mut state = SimulationState::new();
    assert!(run(&mut state, &c, &["initialize 2 materiala", "break 1 slots"]));
    assert!(state.is_synced());

    assert!(run(&mut state, &c, &["sync"]));
    assert!(state.game_data().slots().is_empty());
    assert_eq!(state.pouch().slots().len(), 1);
}

// =============================================================================
// Crash
// =============================================================================

#[test]
fn out_of_range_life_crashes_and_blocks_commands() {
    let c = catalog();
    let mut state = SimulationState::new();
    assert!(run(&mut state, &c, &["initialize 1 weapon1", "set life 5 slot 0"]));
    assert_eq!(
        state.game_data().slots().get(0).and_then(|s| s.meta.life),
        Some(5)
    );
    assert!(!state.is_crashed());

    assert!(run(&mut state, &c, &["set life 5 slot 3"]));
    assert!(state.is_crashed());

    let mut command = parse_command("sync", &c);
    assert!(!command.execute(&mut state));
    assert_eq!(command.cmd_err(), Some(CmdErr::Execute));
    assert_eq!(command.errors(), ["the game has crashed".to_string()]);
}

// =============================================================================
// Snapshots
// =============================================================================

const SCRIPT: [&str; 12] = [
    "get 1 materiala",
    "get 2 materialb",
    "get 1 weapon1",
    "get 1 fooda",
    "remove 1 materiala",
    "drop 1 materialb",
    "eat 1 fooda",
    "equip weapon1",
    "break 1 slots",
    "save",
    "reload",
    "sync",
];

proptest! {
    #[test]
    fn clones_are_equal_and_independent(steps in prop::collection::vec(0usize..SCRIPT.len(), 0..25)) {
        let c = catalog();
        let mut state = SimulationState::new();
        for &i in &steps {
            run(&mut state, &c, &[SCRIPT[i]]);
        }

        let snapshot = state.deep_clone();
        let mut clone = state.deep_clone();
        prop_assert!(clone.equals(&state));

        run(&mut clone, &c, &["get 3 materiala", "break 2 slots", "sync"]);
        prop_assert!(!clone.equals(&state));
        prop_assert!(state.equals(&snapshot));
    }
}
