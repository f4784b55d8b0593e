//! Read-only slot projections for rendering.

use std::fmt;

use istsim_foundation::{ItemStack, ItemType};

#[cfg(feature = "serde")]
use serde::Serialize;

/// What a renderer needs to draw one slot.
///
/// Built fresh from a store on every call; holds no reference into it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SlotDisplay {
    /// Item display name.
    pub name: String,
    /// Item category.
    pub item_type: ItemType,
    /// Count shown on the icon; only stackable items show one.
    pub count: Option<u32>,
    /// Durability, if any.
    pub life: Option<u32>,
    /// Whether the slot is equipped.
    pub equipped: bool,
    /// Whether the slot lies past the pouch's running count.
    pub is_broken: bool,
    /// Whether the icon should be animated.
    pub animated: bool,
}

impl SlotDisplay {
    /// Projects a stack.
    #[must_use]
    pub fn from_stack(stack: &ItemStack, is_broken: bool, animated: bool) -> Self {
        Self {
            name: stack.item.name.clone(),
            item_type: stack.item_type(),
            count: stack.item.stackable.then_some(stack.count),
            life: stack.meta.life,
            equipped: stack.meta.equip,
            is_broken,
            animated,
        }
    }
}

impl fmt::Display for SlotDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(count) = self.count {
            write!(f, " x{count}")?;
        }
        if let Some(life) = self.life {
            write!(f, " ({life})")?;
        }
        if self.equipped {
            f.write_str(" [E]")?;
        }
        if self.is_broken {
            f.write_str(" *")?;
        }
        Ok(())
    }
}
