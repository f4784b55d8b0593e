//! Resolved item arguments.

use std::fmt;

use istsim_foundation::{Amount, ItemStack};

/// A resolved stack plus the amount the command asked for.
///
/// Two arguments naming the same item stay separate; nothing merges them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStackArg {
    /// The stack, with any metadata block applied.
    pub stack: ItemStack,
    /// The requested amount.
    pub amount: Amount,
}

impl ItemStackArg {
    /// Creates an argument.
    #[must_use]
    pub fn new(stack: ItemStack, amount: impl Into<Amount>) -> Self {
        Self {
            stack,
            amount: amount.into(),
        }
    }
}

impl fmt::Display for ItemStackArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.stack.item.name)
    }
}

/// The most units of an unstackable item one argument may name. Each
/// unit takes a slot of its own.
pub const MAX_UNSTACKABLE_COUNT: u32 = 1000;

/// Expands arguments into physical stacks.
///
/// A stackable item becomes one stack holding the whole amount. An
/// unstackable item becomes one stack of 1 per unit, capped at
/// [`MAX_UNSTACKABLE_COUNT`]. `All` has no finite size and expands to
/// nothing.
#[must_use]
pub fn process_wrappers(args: &[ItemStackArg]) -> Vec<ItemStack> {
    let mut stacks = Vec::new();
    for arg in args {
        let Some(count) = arg.amount.count() else {
            continue;
        };
        if arg.stack.item.stackable {
            stacks.push(arg.stack.with_count(count));
        } else {
            stacks.extend(
                (0..count.min(MAX_UNSTACKABLE_COUNT)).map(|_| arg.stack.with_count(1)),
            );
        }
    }
    stacks
}
