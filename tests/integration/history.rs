//! Undo/redo integration tests

use std::sync::Arc;

use istsim_debug::{History, StepSummary};
use istsim_engine::SimulationState;
use istsim_foundation::Catalog;
use istsim_runtime::{Simulator, SimulatorConfig};

fn simulator(history_size: usize) -> Simulator {
    Simulator::new(
        SimulatorConfig::batch().with_history_size(history_size),
        Arc::new(Catalog::from_names(&["MaterialA", "MaterialB"])),
    )
}

#[test]
fn undo_restores_exact_states() {
    let mut sim = simulator(10);
    sim.run_line("initialize 3 materiala");
    let after_init = sim.state().deep_clone();
    sim.run_line("remove 1 materiala");
    sim.run_line("break 1 slots");

    assert!(sim.undo());
    assert!(sim.undo());
    assert!(sim.state().equals(&after_init));

    assert!(sim.redo());
    assert!(sim.redo());
    assert!(!sim.redo());
    assert_eq!(sim.state().inventory_m_count(), 0);
}

#[test]
fn new_command_after_undo_discards_redo() {
    let mut sim = simulator(10);
    sim.run_line("initialize 1 materiala");
    sim.run_line("get 1 materialb");
    assert!(sim.undo());

    sim.run_line("get 5 materiala");
    assert!(!sim.redo());
    assert_eq!(sim.state().pouch().slots().len(), 1);
}

#[test]
fn history_is_bounded() {
    let mut sim = simulator(3);
    for _ in 0..10 {
        sim.run_line("get 1 materiala");
    }
    assert_eq!(sim.history().len(), 3);
    assert!(sim.undo());
    assert!(sim.undo());
    assert!(!sim.undo());
}

#[test]
fn undo_leaves_crash() {
    let mut sim = simulator(10);
    sim.run_line("initialize 1 materiala");
    sim.run_line("set life 9 slot 4");
    assert!(sim.state().is_crashed());

    assert!(sim.undo());
    assert!(!sim.state().is_crashed());
    assert!(sim.run_line("sync").applied);
}

#[test]
fn history_snapshots_are_isolated() {
    let mut history = History::new(4);
    let mut state = SimulationState::new();
    history.record(&state, StepSummary::from_state("(start)", true, &state));

    state.pouch_mut().break_slots(2);
    let recorded = history.current().map(|s| s.state().inventory_m_count());
    assert_eq!(recorded, Some(0));
    assert_eq!(state.inventory_m_count(), -2);
}
