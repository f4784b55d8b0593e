//! Item stacks.
//!
//! An [`ItemStack`] is an immutable value: a catalog item, a count, and
//! metadata. Changes produce new stacks through [`ItemStack::modify`].

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{Error, Result};
use crate::item::{Item, ItemType};

/// Per-stack metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StackMeta {
    /// Whether the stack is equipped.
    pub equip: bool,
    /// Durability, for items that have one.
    pub life: Option<u32>,
}

/// A field that [`ItemStack::equals_except`] may ignore.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackField {
    /// The unit count.
    Count,
    /// Durability.
    Life,
    /// Equipped flag.
    Equip,
}

/// A partial update for [`ItemStack::modify`]. `None` keeps the old value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StackMetaPatch {
    /// New count.
    pub count: Option<u32>,
    /// New durability.
    pub life: Option<u32>,
    /// New equipped flag.
    pub equip: Option<bool>,
}

impl StackMetaPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the count.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets durability.
    #[must_use]
    pub const fn life(mut self, life: u32) -> Self {
        self.life = Some(life);
        self
    }

    /// Sets the equipped flag.
    #[must_use]
    pub const fn equip(mut self, equip: bool) -> Self {
        self.equip = Some(equip);
        self
    }

    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count.is_none() && self.life.is_none() && self.equip.is_none()
    }
}

/// A quantity of one item plus metadata.
///
/// Equality is structural. Items compare by catalog id.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ItemStack {
    /// The catalog item.
    pub item: Arc<Item>,
    /// Number of units. Zero means the slot is empty.
    pub count: u32,
    /// Metadata.
    pub meta: StackMeta,
}

impl ItemStack {
    /// Creates a new stack.
    #[must_use]
    pub fn new(item: Arc<Item>, count: u32, meta: StackMeta) -> Self {
        Self { item, count, meta }
    }

    /// Returns the item's category.
    #[must_use]
    pub fn item_type(&self) -> ItemType {
        self.item.item_type
    }

    /// Returns true if the count is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if this stack holds the same catalog item as `other`.
    #[must_use]
    pub fn is_same_item(&self, other: &Self) -> bool {
        self.item.is_same(&other.item)
    }

    /// Full structural equality.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.equals_except(other, &[])
    }

    /// Structural equality ignoring the named fields.
    #[must_use]
    pub fn equals_except(&self, other: &Self, ignored: &[StackField]) -> bool {
        if !self.is_same_item(other) {
            return false;
        }
        if !ignored.contains(&StackField::Count) && self.count != other.count {
            return false;
        }
        if !ignored.contains(&StackField::Life) && self.meta.life != other.meta.life {
            return false;
        }
        if !ignored.contains(&StackField::Equip) && self.meta.equip != other.meta.equip {
            return false;
        }
        true
    }

    /// Returns a new stack with the patched fields overridden.
    #[must_use]
    pub fn modify(&self, patch: StackMetaPatch) -> Self {
        Self {
            item: Arc::clone(&self.item),
            count: patch.count.unwrap_or(self.count),
            meta: StackMeta {
                equip: patch.equip.unwrap_or(self.meta.equip),
                life: patch.life.or(self.meta.life),
            },
        }
    }

    /// Returns a new stack with a different count.
    #[must_use]
    pub fn with_count(&self, count: u32) -> Self {
        self.modify(StackMetaPatch::new().count(count))
    }

    /// Applies one `key` or `key=value` entry of a metadata block.
    ///
    /// Recognized keys are `equip` (bare, `true` or `false`) and
    /// `life` (a number).
    ///
    /// # Errors
    ///
    /// Returns `InvalidMeta` for unknown keys or values that do not fit
    /// the key.
    pub fn modify_meta(&self, key: &str, value: Option<&str>) -> Result<Self> {
        let patch = match key.to_ascii_lowercase().as_str() {
            "equip" => match value.map(str::to_ascii_lowercase).as_deref() {
                None | Some("true") => StackMetaPatch::new().equip(true),
                Some("false") => StackMetaPatch::new().equip(false),
                Some(other) => {
                    return Err(Error::invalid_meta(
                        key,
                        format!("expected true or false, got {other}"),
                    ));
                }
            },
            "life" => {
                let Some(value) = value else {
                    return Err(Error::invalid_meta(key, "missing value"));
                };
                let life = value
                    .parse::<u32>()
                    .map_err(|_| Error::invalid_meta(key, format!("not a number: {value}")))?;
                StackMetaPatch::new().life(life)
            }
            _ => return Err(Error::invalid_meta(key, "unknown key")),
        };
        Ok(self.modify(patch))
    }
}

impl PartialEq for ItemStack {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for ItemStack {}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.item.name, self.count)?;
        if self.meta.equip {
            write!(f, " [equip]")?;
        }
        if let Some(life) = self.meta.life {
            write!(f, " (life {life})")?;
        }
        Ok(())
    }
}
