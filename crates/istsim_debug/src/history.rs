//! History buffer for simulation snapshots.
//!
//! A bounded ring of deep-cloned states with a cursor. Undo and redo move
//! the cursor; recording a new step discards everything after it.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use istsim_engine::SimulationState;
use tracing::trace;

// =============================================================================
// Step Summary
// =============================================================================

/// Summary of the state after one step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// The command text that produced this state.
    pub command: String,
    /// Whether the command was applied.
    pub applied: bool,
    /// Number of pouch slots.
    pub pouch_slots: usize,
    /// The pouch's running count.
    pub m_count: i32,
    /// Number of resident slots.
    pub resident_slots: usize,
    /// Whether resident and pouch slots match.
    pub synced: bool,
    /// Whether the game has crashed.
    pub crashed: bool,
}

impl StepSummary {
    /// Summarizes `state` after running `command`.
    #[must_use]
    pub fn from_state(command: impl Into<String>, applied: bool, state: &SimulationState) -> Self {
        Self {
            command: command.into(),
            applied,
            pouch_slots: state.pouch().slots().len(),
            m_count: state.inventory_m_count(),
            resident_slots: state.game_data().slots().len(),
            synced: state.is_synced(),
            crashed: state.is_crashed(),
        }
    }
}

impl fmt::Display for StepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.crashed {
            "CRASHED"
        } else if self.applied {
            "OK"
        } else {
            "FAILED"
        };
        write!(
            f,
            "{}: {} | pouch {} (m_count {}), resident {}, {}",
            status,
            self.command,
            self.pouch_slots,
            self.m_count,
            self.resident_slots,
            if self.synced { "synced" } else { "desynced" }
        )
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// A recorded state.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Step number, increasing across the whole session.
    step: u64,
    /// The state (shared via Arc; never mutated after recording).
    state: Arc<SimulationState>,
    /// What produced it.
    summary: StepSummary,
}

impl Snapshot {
    /// Returns the step number.
    #[must_use]
    pub const fn step(&self) -> u64 {
        self.step
    }

    /// Returns the recorded state.
    #[must_use]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Returns the summary.
    #[must_use]
    pub fn summary(&self) -> &StepSummary {
        &self.summary
    }
}

// =============================================================================
// History
// =============================================================================

/// Bounded undo/redo history.
#[derive(Clone, Debug)]
pub struct History {
    /// Snapshots in chronological order.
    snapshots: VecDeque<Snapshot>,
    /// Maximum number of snapshots to retain.
    capacity: usize,
    /// Index of the current snapshot.
    cursor: usize,
    /// Step number for the next recording.
    next_step: u64,
}

impl History {
    /// Creates an empty history. A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            cursor: 0,
            next_step: 0,
        }
    }

    /// Returns the capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of snapshots held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Records a state as the new current step.
    ///
    /// Steps after the cursor are discarded. The oldest step is evicted
    /// at capacity.
    pub fn record(&mut self, state: &SimulationState, summary: StepSummary) {
        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.cursor + 1);
        }
        if self.snapshots.len() >= self.capacity {
            self.snapshots.pop_front();
        }
        trace!(step = self.next_step, %summary, "record");
        self.snapshots.push_back(Snapshot {
            step: self.next_step,
            state: Arc::new(state.deep_clone()),
            summary,
        });
        self.next_step += 1;
        self.cursor = self.snapshots.len() - 1;
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.cursor)
    }

    /// Returns true if there is an earlier step.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns true if there is a later step.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Moves back one step and returns a copy of its state.
    pub fn undo(&mut self) -> Option<SimulationState> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.current().map(|s| s.state.deep_clone())
    }

    /// Moves forward one step and returns a copy of its state.
    pub fn redo(&mut self) -> Option<SimulationState> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.current().map(|s| s.state.deep_clone())
    }

    /// Returns an iterator over snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    /// Gets the N most recent snapshots, oldest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &Snapshot> {
        let skip = self.snapshots.len().saturating_sub(count);
        self.snapshots.iter().skip(skip)
    }

    /// Returns the step number of the current snapshot.
    #[must_use]
    pub fn current_step(&self) -> Option<u64> {
        self.current().map(Snapshot::step)
    }

    /// Clears everything. Step numbers keep increasing.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(100)
    }
}

// =============================================================================
// Tests
// =============================================================================
