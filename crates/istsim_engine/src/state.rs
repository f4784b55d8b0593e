//! The simulation state aggregate.
//!
//! `SimulationState` owns both inventory copies by value, so `clone` is a
//! full independent snapshot. Commands are the only mutators outside tests.

use istsim_foundation::{Error, ErrorKind, ItemStack, Result};
use istsim_storage::{GameData, GameFlags, SlotDisplay, SlotsCore, VisibleInventory};
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Resident and visible inventories, the save slot, and the crash flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SimulationState {
    game_data: GameData,
    pouch: VisibleInventory,
    save: Option<GameData>,
    crashed: bool,
}

impl SimulationState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty state whose resident inventory uses `flags`.
    #[must_use]
    pub fn with_flags(flags: GameFlags) -> Self {
        Self {
            game_data: GameData::new(SlotsCore::default(), flags),
            ..Self::default()
        }
    }

    /// Returns the resident inventory.
    #[must_use]
    pub fn game_data(&self) -> &GameData {
        &self.game_data
    }

    /// Returns the visible inventory.
    #[must_use]
    pub fn pouch(&self) -> &VisibleInventory {
        &self.pouch
    }

    /// Returns a mutable handle to the visible inventory.
    pub fn pouch_mut(&mut self) -> &mut VisibleInventory {
        &mut self.pouch
    }

    /// Replaces the visible inventory.
    pub fn set_pouch(&mut self, pouch: VisibleInventory) {
        self.pouch = pouch;
    }

    /// Returns the saved resident inventory, if any.
    #[must_use]
    pub fn save_data(&self) -> Option<&GameData> {
        self.save.as_ref()
    }

    /// Resets the inventory to exactly `stacks`, independent of prior state.
    ///
    /// The pouch takes the stacks with its counter equal to their number,
    /// then the resident copy syncs. Flags, the save and the crash flag
    /// are left alone.
    pub fn initialize(&mut self, stacks: Vec<ItemStack>) {
        debug!(slots = stacks.len(), "initialize");
        self.pouch = VisibleInventory::from_stacks(stacks);
        self.sync();
    }

    /// Sets durability of a resident slot.
    ///
    /// # Errors
    ///
    /// Returns `SlotOutOfRange` if the resident inventory has no such slot.
    pub fn update_life(&mut self, life: u32, slot: usize) -> Result<()> {
        self.game_data.update_life(life, slot)
    }

    /// Copies the pouch into the resident inventory (or nukes it).
    pub fn sync(&mut self) {
        self.game_data.sync_with(&self.pouch);
    }

    /// Returns true if resident slots equal the pouch's.
    #[must_use]
    pub fn is_synced(&self) -> bool {
        self.game_data.is_synced_with(&self.pouch)
    }

    /// Stores a copy of the resident inventory as the save.
    pub fn save(&mut self) {
        self.save = Some(self.game_data.deep_clone());
    }

    /// Restores the save into the resident inventory and rebuilds the pouch
    /// from it the way the game does on load.
    ///
    /// # Errors
    ///
    /// Returns `NoSave` if nothing has been saved.
    pub fn reload(&mut self) -> Result<()> {
        let Some(save) = &self.save else {
            return Err(Error::new(ErrorKind::NoSave));
        };
        self.game_data = save.deep_clone();
        self.pouch.clear_for_reload();
        self.game_data.add_all_to_pouch_on_reload(&mut self.pouch);
        debug!(
            pouch_slots = self.pouch.slots().len(),
            m_count = self.pouch.m_count(),
            "reload"
        );
        Ok(())
    }

    /// Marks the game as crashed.
    pub fn crash(&mut self) {
        if !self.crashed {
            warn!("game crashed");
        }
        self.crashed = true;
    }

    /// Returns true once the game has crashed.
    #[must_use]
    pub const fn is_crashed(&self) -> bool {
        self.crashed
    }

    /// Returns the pouch's running count.
    #[must_use]
    pub const fn inventory_m_count(&self) -> i32 {
        self.pouch.m_count()
    }

    /// Returns a fully independent copy.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }

    /// Structural equality of both inventories, the save and the crash flag.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.game_data.equals(&other.game_data)
            && self.pouch.equals(&other.pouch)
            && self.crashed == other.crashed
            && match (&self.save, &other.save) {
                (Some(a), Some(b)) => a.equals(b),
                (None, None) => true,
                _ => false,
            }
    }

    /// Projects the resident inventory for rendering.
    #[must_use]
    pub fn displayable_game_data(&self, animated: bool) -> Vec<SlotDisplay> {
        self.game_data.get_displayed_slots(animated)
    }

    /// Projects the pouch for rendering.
    #[must_use]
    pub fn displayable_pouch(&self, animated: bool) -> Vec<SlotDisplay> {
        self.pouch.get_displayed_slots(animated)
    }
}
