//! The resident inventory.
//!
//! `GameData` is the game's memory copy of the inventory. It follows the
//! pouch only when synced, and syncing is one-directional: pouch to
//! resident, never the reverse.

use istsim_foundation::Result;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::display::SlotDisplay;
use crate::flags::{FlagValue, GameFlags};
use crate::slots::SlotsCore;
use crate::visible::VisibleInventory;

/// The resident ("memory") inventory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameData {
    slots: SlotsCore,
    flags: GameFlags,
}

impl GameData {
    /// Creates resident data from slots and flags.
    #[must_use]
    pub fn new(slots: SlotsCore, flags: GameFlags) -> Self {
        Self { slots, flags }
    }

    /// Returns the slot store.
    #[must_use]
    pub fn slots(&self) -> &SlotsCore {
        &self.slots
    }

    /// Returns the flags.
    #[must_use]
    pub fn flags(&self) -> &GameFlags {
        &self.flags
    }

    /// Returns a flag by name.
    #[must_use]
    pub fn get_flag(&self, name: &str) -> Option<FlagValue> {
        self.flags.get(name)
    }

    /// Sets a flag by name.
    pub fn set_flag(&mut self, name: &str, value: FlagValue) {
        self.flags.set(name, value);
    }

    /// Replaces the slots with a copy of the pouch's.
    ///
    /// When the pouch's running count is zero or below, the resident copy
    /// is wiped instead, even if the pouch still holds slots.
    pub fn sync_with(&mut self, pouch: &VisibleInventory) {
        if pouch.m_count() <= 0 {
            debug!(
                m_count = pouch.m_count(),
                pouch_slots = pouch.slots().len(),
                "inventory nuked on sync"
            );
            self.slots = SlotsCore::default();
        } else {
            self.slots = pouch.slots().deep_clone();
        }
    }

    /// Returns true if the slots equal the pouch's. Flags are not compared.
    #[must_use]
    pub fn is_synced_with(&self, pouch: &VisibleInventory) -> bool {
        self.slots.equals(pouch.slots())
    }

    /// Sets durability of the stack in `slot`.
    ///
    /// # Errors
    ///
    /// Returns `SlotOutOfRange` if there is no such slot.
    pub fn update_life(&mut self, life: u32, slot: usize) -> Result<()> {
        self.slots.update_life(life, slot)
    }

    /// Loads every resident stack into a pouch that was cleared for reload.
    pub fn add_all_to_pouch_on_reload(&self, pouch: &mut VisibleInventory) {
        for stack in self.slots.iter() {
            pouch.add_when_reload(stack, &self.flags);
        }
    }

    /// Returns a fully independent copy, flags included.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }

    /// Structural equality of slots. Flags are not compared.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.slots.equals(&other.slots)
    }

    /// Projects every slot for rendering.
    #[must_use]
    pub fn get_displayed_slots(&self, animated: bool) -> Vec<SlotDisplay> {
        self.slots
            .iter()
            .map(|stack| SlotDisplay::from_stack(stack, false, animated))
            .collect()
    }
}
