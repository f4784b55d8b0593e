//! Catalog items.
//!
//! An [`Item`] is created once when the catalog is built and never
//! mutated. Stacks refer to items through an `Arc`.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::stack::{ItemStack, StackMeta};

/// Item category.
///
/// Declaration order is the pouch tab order: slots are kept grouped by
/// type in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ItemType {
    /// Melee weapons
    Weapon,
    /// Bows
    Bow,
    /// Arrows (may sit in a slot at zero count)
    Arrow,
    /// Shields
    Shield,
    /// Armor pieces
    Armor,
    /// Crafting materials
    Material,
    /// Cooked food and elixirs
    Food,
    /// Key items
    Key,
}

impl ItemType {
    /// Returns true for equipment that occupies a limited tab.
    #[must_use]
    pub const fn is_equipment(self) -> bool {
        matches!(self, Self::Weapon | Self::Bow | Self::Shield)
    }

    /// Returns a lowercase name for this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Bow => "bow",
            Self::Arrow => "arrow",
            Self::Shield => "shield",
            Self::Armor => "armor",
            Self::Material => "material",
            Self::Food => "food",
            Self::Key => "key",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Item {
    /// Unique identifier, e.g. `materiala`.
    pub id: String,
    /// Display name, e.g. `Material A`.
    pub name: String,
    /// Category.
    pub item_type: ItemType,
    /// Whether several units share one slot.
    pub stackable: bool,
    /// Starting durability for equipment.
    pub default_life: Option<u32>,
}

impl Item {
    /// Creates a new item.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        item_type: ItemType,
        stackable: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_type,
            stackable,
            default_life: None,
        }
    }

    /// Sets the default durability.
    #[must_use]
    pub const fn with_default_life(mut self, life: u32) -> Self {
        self.default_life = Some(life);
        self
    }

    /// Creates a stack of one unit with default metadata.
    #[must_use]
    pub fn create_default_stack(self: &Arc<Self>) -> ItemStack {
        ItemStack::new(
            Arc::clone(self),
            1,
            StackMeta {
                equip: false,
                life: self.default_life,
            },
        )
    }

    /// Returns true if both refer to the same catalog entry.
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
