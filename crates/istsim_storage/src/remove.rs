//! The removal engine.
//!
//! Removes units of a stack pattern from a slot store using a tiered
//! fuzzy match. Candidate slots are collected in four tiers, loosest last:
//!
//! 1. Every field matches
//! 2. Everything but durability matches
//! 3. Everything but durability and the equipped flag matches
//! 4. Only the item matches
//!
//! Each tier scans the whole store circularly from `start_slot`. The tiers
//! are concatenated, so a slot can appear several times; the consumption
//! loop skips slots that an earlier visit already emptied.

use istsim_foundation::{Amount, ItemStack, ItemType, StackField};
use tracing::{debug, trace};

use crate::slots::SlotsCore;

/// Fields ignored by the structural tiers, strictest first.
const RELAXED_TIERS: [&[StackField]; 3] = [
    &[],
    &[StackField::Life],
    &[StackField::Life, StackField::Equip],
];

/// Options for [`remove`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Slot where every tier's scan begins; scans wrap to the front.
    pub start_slot: usize,
    /// Treat food as stackable regardless of its catalog flag.
    pub force_stackable_food: bool,
    /// Physically delete slots emptied by this call, arrows included.
    pub force_delete_zero_slot: bool,
}

impl RemoveOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the starting slot.
    #[must_use]
    pub const fn with_start_slot(mut self, slot: usize) -> Self {
        self.start_slot = slot;
        self
    }

    /// Treats food as stackable.
    #[must_use]
    pub const fn with_stackable_food(mut self) -> Self {
        self.force_stackable_food = true;
        self
    }

    /// Deletes emptied slots.
    #[must_use]
    pub const fn with_delete_zero_slot(mut self) -> Self {
        self.force_delete_zero_slot = true;
        self
    }

    fn is_stackable(self, stack: &ItemStack) -> bool {
        if self.force_stackable_food && stack.item_type() == ItemType::Food {
            return true;
        }
        stack.item.stackable
    }
}

/// Returns candidate slot indices for `pattern` in consumption order.
///
/// Duplicates across tiers are expected.
#[must_use]
pub fn find_matches(core: &SlotsCore, pattern: &ItemStack, start_slot: usize) -> Vec<usize> {
    let slots = core.view();
    let mut matches = Vec::new();

    for (tier, ignored) in RELAXED_TIERS.iter().enumerate() {
        let before = matches.len();
        matches.extend(
            core.circular_indices(start_slot)
                .filter(|&i| slots[i].equals_except(pattern, ignored)),
        );
        trace!(tier = tier + 1, found = matches.len() - before, "match tier");
    }

    let before = matches.len();
    matches.extend(
        core.circular_indices(start_slot)
            .filter(|&i| slots[i].is_same_item(pattern)),
    );
    trace!(tier = 4, found = matches.len() - before, "match tier");

    matches
}

/// Removes `count` units matching `stack_to_remove` from `core`.
///
/// Stackable slots give up to their whole count; unstackable slots count
/// as one unit each and are always emptied. After consumption, slots
/// emptied by this call are deleted when `force_delete_zero_slot` is set,
/// then every empty non-arrow slot is deleted.
///
/// Returns false if a finite count could not be fully satisfied. The store
/// is still drained of every match in that case.
pub fn remove(
    core: &mut SlotsCore,
    stack_to_remove: &ItemStack,
    count: Amount,
    options: RemoveOptions,
) -> bool {
    let candidates = find_matches(core, stack_to_remove, options.start_slot);
    let mut left = count;
    let mut emptied = Vec::new();

    {
        let stacks = core.stacks_mut();
        for i in candidates {
            if left.is_satisfied() {
                break;
            }
            let current = &stacks[i];
            if current.is_empty() {
                continue;
            }

            let (remaining, updated) = if !options.is_stackable(current) {
                // one slot is one unit
                let remaining = match left {
                    Amount::Count(n) => Amount::Count(n - 1),
                    Amount::All => Amount::All,
                };
                (remaining, current.with_count(0))
            } else {
                match left {
                    Amount::Count(n) if current.count > n => {
                        (Amount::Count(0), current.with_count(current.count - n))
                    }
                    Amount::Count(n) => (Amount::Count(n - current.count), current.with_count(0)),
                    Amount::All => (Amount::All, current.with_count(0)),
                }
            };

            if updated.is_empty() {
                emptied.push(i);
            }
            stacks[i] = updated;
            left = remaining;
        }
    }

    if options.force_delete_zero_slot && !emptied.is_empty() {
        emptied.sort_unstable();
        emptied.dedup();
        core.remove_indices(&emptied);
    }
    core.remove_zero_stack_except_arrows();

    let satisfied = matches!(left, Amount::All | Amount::Count(0));
    debug!(
        item = %stack_to_remove.item.id,
        requested = %count,
        remaining = %left,
        satisfied,
        "remove"
    );
    satisfied
}
