//! The visible inventory (pouch).
//!
//! The pouch owns its own slot store and a running counter, `m_count`,
//! that the game uses as the list size. Broken slots are slots past the
//! counter: they still hold items but the game no longer counts them.

use istsim_foundation::{Amount, ItemStack, ItemType, StackMetaPatch};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::display::SlotDisplay;
use crate::flags::GameFlags;
use crate::remove::{RemoveOptions, find_matches, remove};
use crate::slots::SlotsCore;

/// The player-facing inventory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VisibleInventory {
    slots: SlotsCore,
    m_count: i32,
}

impl VisibleInventory {
    /// Creates a pouch with explicit slots and counter.
    #[must_use]
    pub fn new(slots: SlotsCore, m_count: i32) -> Self {
        Self { slots, m_count }
    }

    /// Creates a pouch whose counter matches its slot count.
    #[must_use]
    pub fn from_stacks(stacks: Vec<ItemStack>) -> Self {
        let slots = SlotsCore::new(stacks);
        let m_count = count_of(slots.len());
        Self { slots, m_count }
    }

    /// Returns the slot store.
    #[must_use]
    pub fn slots(&self) -> &SlotsCore {
        &self.slots
    }

    /// Returns the running count.
    #[must_use]
    pub const fn m_count(&self) -> i32 {
        self.m_count
    }

    /// Adds a stack the way picking it up does.
    ///
    /// Stackable items merge into the first slot of the same item.
    /// Unstackable items take one new slot per unit.
    pub fn add(&mut self, stack: &ItemStack) {
        if stack.item.stackable {
            if let Some(slot) = self.first_slot_of(stack) {
                self.grow_slot(slot, stack.count);
                return;
            }
            self.insert_sorted(stack.clone());
            return;
        }
        for _ in 0..stack.count {
            self.insert_sorted(stack.with_count(1));
        }
    }

    /// Removes units through the removal engine, keeping the counter in
    /// step with the number of slots that disappeared.
    pub fn remove(&mut self, stack: &ItemStack, count: Amount, options: RemoveOptions) -> bool {
        let before = self.slots.len();
        let satisfied = remove(&mut self.slots, stack, count, options);
        self.m_count = self.m_count.saturating_sub(count_of(before - self.slots.len()));
        satisfied
    }

    /// Equips or unequips the best match for `stack`.
    ///
    /// Equipping unequips the other slots of the same type. Returns false
    /// if nothing matches.
    pub fn set_equip(&mut self, stack: &ItemStack, equip: bool) -> bool {
        // prefer slots currently in the opposite state
        let pattern = stack.modify(StackMetaPatch::new().equip(!equip));
        let Some(target) = find_matches(&self.slots, &pattern, 0)
            .into_iter()
            .find(|&i| self.slots.get(i).is_some_and(|s| !s.is_empty()))
        else {
            return false;
        };

        let item_type = stack.item_type();
        let stacks = self.slots.stacks_mut();
        for (i, slot) in stacks.iter_mut().enumerate() {
            if i == target {
                *slot = slot.modify(StackMetaPatch::new().equip(equip));
            } else if equip && slot.meta.equip && slot.item_type() == item_type {
                *slot = slot.modify(StackMetaPatch::new().equip(false));
            }
        }
        true
    }

    /// Lowers the counter without touching slots. The counter saturates
    /// at `i32::MIN`.
    pub fn break_slots(&mut self, n: u32) {
        self.m_count = self
            .m_count
            .saturating_sub(i32::try_from(n).unwrap_or(i32::MAX));
        debug!(m_count = self.m_count, broken = n, "break slots");
    }

    /// Empties the pouch the way reloading a save does: the game removes
    /// `m_count` slots from the front, so slots past the counter survive.
    pub fn clear_for_reload(&mut self) {
        let removed = usize::try_from(self.m_count.max(0))
            .unwrap_or(0)
            .min(self.slots.len());
        self.slots.stacks_mut().drain(..removed);
        debug!(
            removed,
            surviving = self.slots.len(),
            "clear pouch for reload"
        );
        self.m_count = 0;
    }

    /// Adds a stack loaded from the resident inventory during reload.
    ///
    /// Stackable items merge into any surviving slot of the same item.
    /// Equipment beyond the tab size in `flags` is dropped.
    pub fn add_when_reload(&mut self, stack: &ItemStack, flags: &GameFlags) {
        if stack.item.stackable {
            if let Some(slot) = self.first_slot_of(stack) {
                self.grow_slot(slot, stack.count);
                return;
            }
        }

        let limit = match stack.item_type() {
            ItemType::Weapon => Some(flags.weapon_slots),
            ItemType::Bow => Some(flags.bow_slots),
            ItemType::Shield => Some(flags.shield_slots),
            _ => None,
        };
        if let Some(limit) = limit {
            let used = self
                .slots
                .iter()
                .filter(|s| s.item_type() == stack.item_type())
                .count();
            if used >= limit as usize {
                debug!(item = %stack.item.id, limit, "tab full on reload");
                return;
            }
        }
        self.insert_sorted(stack.clone());
    }

    /// Projects every slot for rendering.
    #[must_use]
    pub fn get_displayed_slots(&self, animated: bool) -> Vec<SlotDisplay> {
        let counted = usize::try_from(self.m_count.max(0)).unwrap_or(0);
        self.slots
            .iter()
            .enumerate()
            .map(|(i, stack)| SlotDisplay::from_stack(stack, i >= counted, animated))
            .collect()
    }

    /// Returns a fully independent copy.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }

    /// Structural equality of slots and counter.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn first_slot_of(&self, stack: &ItemStack) -> Option<usize> {
        self.slots.iter().position(|s| s.is_same_item(stack))
    }

    fn grow_slot(&mut self, slot: usize, by: u32) {
        let stacks = self.slots.stacks_mut();
        let grown = stacks[slot].with_count(stacks[slot].count.saturating_add(by));
        stacks[slot] = grown;
    }

    /// Inserts after the last slot whose type sorts at or before the new one.
    fn insert_sorted(&mut self, stack: ItemStack) {
        let item_type = stack.item_type();
        let stacks = self.slots.stacks_mut();
        let index = stacks
            .iter()
            .position(|s| s.item_type() > item_type)
            .unwrap_or(stacks.len());
        stacks.insert(index, stack);
        self.m_count = self.m_count.saturating_add(1);
    }
}

fn count_of(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
