//! Scalar game flags held by the resident inventory.

use std::fmt;

use im::OrdMap;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A flag value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FlagValue {
    /// Integer flag
    Int(i64),
    /// Boolean flag
    Bool(bool),
    /// Text flag
    Text(String),
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Game flags: equipment tab sizes plus arbitrary named extension flags.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameFlags {
    /// Number of weapon slots.
    pub weapon_slots: u32,
    /// Number of bow slots.
    pub bow_slots: u32,
    /// Number of shield slots.
    pub shield_slots: u32,
    /// Extension flags by name.
    extra: OrdMap<String, FlagValue>,
}

impl Default for GameFlags {
    fn default() -> Self {
        Self {
            weapon_slots: 8,
            bow_slots: 5,
            shield_slots: 4,
            extra: OrdMap::new(),
        }
    }
}

impl GameFlags {
    /// Creates default flags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a flag by name. The three slot counts are readable by
    /// `weaponSlots`, `bowSlots` and `shieldSlots`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<FlagValue> {
        match name {
            "weaponSlots" => Some(FlagValue::Int(i64::from(self.weapon_slots))),
            "bowSlots" => Some(FlagValue::Int(i64::from(self.bow_slots))),
            "shieldSlots" => Some(FlagValue::Int(i64::from(self.shield_slots))),
            _ => self.extra.get(name).cloned(),
        }
    }

    /// Sets a flag by name. Slot counts only accept non-negative integers;
    /// other values for them are stored as extension flags.
    pub fn set(&mut self, name: &str, value: FlagValue) {
        let slot = match name {
            "weaponSlots" => Some(&mut self.weapon_slots),
            "bowSlots" => Some(&mut self.bow_slots),
            "shieldSlots" => Some(&mut self.shield_slots),
            _ => None,
        };
        if let (Some(slot), FlagValue::Int(n)) = (slot, &value) {
            if let Ok(n) = u32::try_from(*n) {
                *slot = n;
                return;
            }
        }
        self.extra.insert(name.to_string(), value);
    }

    /// Iterates extension flags in name order.
    pub fn extra(&self) -> impl Iterator<Item = (&String, &FlagValue)> {
        self.extra.iter()
    }
}
