//! The slot store.
//!
//! A [`SlotsCore`] is an ordered sequence of stacks. Index order matters
//! to both rendering and matching. Mutation always replaces a slot's value;
//! stacks are never shared between stores.

use istsim_foundation::{Error, ItemStack, ItemType, Result, StackMetaPatch};

#[cfg(feature = "serde")]
use serde::Serialize;

/// An ordered, index-mutable sequence of stacks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SlotsCore {
    stacks: Vec<ItemStack>,
}

impl SlotsCore {
    /// Creates a store holding exactly the given stacks.
    #[must_use]
    pub fn new(stacks: Vec<ItemStack>) -> Self {
        Self { stacks }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Returns true if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Returns the stack in `slot`.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&ItemStack> {
        self.stacks.get(slot)
    }

    /// Iterates stacks in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        self.stacks.iter()
    }

    /// Read-only view of every slot.
    #[must_use]
    pub fn view(&self) -> &[ItemStack] {
        &self.stacks
    }

    /// Mutable access for the removal engine and inventories.
    pub(crate) fn stacks_mut(&mut self) -> &mut Vec<ItemStack> {
        &mut self.stacks
    }

    /// Appends a slot.
    pub fn push(&mut self, stack: ItemStack) {
        self.stacks.push(stack);
    }

    /// Inserts a slot at `index`, shifting later slots.
    ///
    /// # Errors
    ///
    /// Returns `SlotOutOfRange` if `index > len`.
    pub fn insert(&mut self, index: usize, stack: ItemStack) -> Result<()> {
        if index > self.stacks.len() {
            return Err(Error::slot_out_of_range(index, self.stacks.len()));
        }
        self.stacks.insert(index, stack);
        Ok(())
    }

    /// Replaces the stack in `slot`.
    ///
    /// # Errors
    ///
    /// Returns `SlotOutOfRange` if there is no such slot.
    pub fn replace(&mut self, slot: usize, stack: ItemStack) -> Result<()> {
        let length = self.stacks.len();
        let target = self
            .stacks
            .get_mut(slot)
            .ok_or_else(|| Error::slot_out_of_range(slot, length))?;
        *target = stack;
        Ok(())
    }

    /// Sets the durability of the stack in `slot`.
    ///
    /// # Errors
    ///
    /// Returns `SlotOutOfRange` if there is no such slot.
    pub fn update_life(&mut self, life: u32, slot: usize) -> Result<()> {
        let length = self.stacks.len();
        let target = self
            .stacks
            .get_mut(slot)
            .ok_or_else(|| Error::slot_out_of_range(slot, length))?;
        *target = target.modify(StackMetaPatch::new().life(life));
        Ok(())
    }

    /// Removes every empty slot except arrow slots, which may sit at zero.
    pub fn remove_zero_stack_except_arrows(&mut self) {
        self.stacks
            .retain(|stack| stack.count > 0 || stack.item_type() == ItemType::Arrow);
    }

    /// Removes the slots at the given sorted, deduplicated indices,
    /// preserving the relative order of the rest.
    pub(crate) fn remove_indices(&mut self, sorted: &[usize]) {
        let mut doomed = sorted.iter().peekable();
        let mut index = 0;
        self.stacks.retain(|_| {
            let keep = if doomed.peek() == Some(&&index) {
                doomed.next();
                false
            } else {
                true
            };
            index += 1;
            keep
        });
    }

    /// Slot indices starting at `start` and wrapping around once.
    pub fn circular_indices(&self, start: usize) -> impl Iterator<Item = usize> + use<> {
        let len = self.stacks.len();
        (0..len).map(move |k| (start + k) % len)
    }

    /// Returns a fully independent copy.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }

    /// Structural equality of every slot, in order.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl FromIterator<ItemStack> for SlotsCore {
    fn from_iter<I: IntoIterator<Item = ItemStack>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
