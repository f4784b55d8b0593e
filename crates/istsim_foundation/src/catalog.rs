//! Item lookup by name or alias.
//!
//! Lookups are case- and spacing-insensitive: `Material A`, `material a`
//! and `materiala` all find the same item.

use std::collections::HashMap;
use std::sync::Arc;

use crate::item::{Item, ItemType};

/// Resolves a typed name to a catalog item.
pub trait ItemSearch {
    /// Returns the item for `name`, or `None` if nothing matches.
    fn search_item(&self, name: &str) -> Option<Arc<Item>>;
}

/// Normalizes a name for lookup: lowercase, alphanumerics only.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// An in-memory item catalog.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Items by id, in registration order
    items: Vec<Arc<Item>>,
    /// Normalized name or alias -> index into `items`
    lookup: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an item under its id and display name.
    pub fn register(&mut self, item: Item) -> Arc<Item> {
        let item = Arc::new(item);
        let index = self.items.len();
        self.lookup.insert(normalize_name(&item.id), index);
        self.lookup.insert(normalize_name(&item.name), index);
        self.items.push(Arc::clone(&item));
        item
    }

    /// Registers an extra alias for an already registered item.
    ///
    /// Returns false if `id` is unknown.
    pub fn register_alias(&mut self, id: &str, alias: &str) -> bool {
        let Some(&index) = self.lookup.get(&normalize_name(id)) else {
            return false;
        };
        self.lookup.insert(normalize_name(alias), index);
        true
    }

    /// Returns the item with the given id or alias.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Item>> {
        self.lookup
            .get(&normalize_name(name))
            .and_then(|&i| self.items.get(i))
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Item>> {
        self.items.iter()
    }

    /// Builds a catalog from bare names, guessing the type from the prefix.
    ///
    /// `weapon*`, `bow*` and `shield*` become unstackable equipment with 30
    /// durability, `arrow*` stackable arrows, `food*` unstackable food,
    /// `key*` stackable key items. Everything else is a stackable material.
    #[must_use]
    pub fn from_names(names: &[&str]) -> Self {
        let mut catalog = Self::new();
        for name in names {
            let id = normalize_name(name);
            let item = if id.starts_with("weapon") {
                Item::new(&id, *name, ItemType::Weapon, false).with_default_life(30)
            } else if id.starts_with("bow") {
                Item::new(&id, *name, ItemType::Bow, false).with_default_life(30)
            } else if id.starts_with("shield") {
                Item::new(&id, *name, ItemType::Shield, false).with_default_life(30)
            } else if id.starts_with("arrow") {
                Item::new(&id, *name, ItemType::Arrow, true)
            } else if id.starts_with("food") {
                Item::new(&id, *name, ItemType::Food, false)
            } else if id.starts_with("key") {
                Item::new(&id, *name, ItemType::Key, true)
            } else {
                Item::new(&id, *name, ItemType::Material, true)
            };
            catalog.register(item);
        }
        catalog
    }

    /// A small catalog of real item names, used by the command-line tool.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        let weapons = [
            ("travelersword", "Traveler's Sword", 22),
            ("royalclaymore", "Royal Claymore", 40),
            ("treebranch", "Tree Branch", 4),
        ];
        for (id, name, life) in weapons {
            catalog.register(Item::new(id, name, ItemType::Weapon, false).with_default_life(life));
        }
        catalog.register(
            Item::new("travelerbow", "Traveler's Bow", ItemType::Bow, false).with_default_life(20),
        );
        catalog.register(Item::new("normalarrow", "Normal Arrow", ItemType::Arrow, true));
        catalog.register(Item::new("firearrow", "Fire Arrow", ItemType::Arrow, true));
        catalog.register(
            Item::new("potlid", "Pot Lid", ItemType::Shield, false).with_default_life(10),
        );
        catalog.register(Item::new("hylianhood", "Hylian Hood", ItemType::Armor, false));
        for (id, name) in [
            ("apple", "Apple"),
            ("diamond", "Diamond"),
            ("hylianshroom", "Hylian Shroom"),
            ("hyruleherb", "Hyrule Herb"),
        ] {
            catalog.register(Item::new(id, name, ItemType::Material, true));
        }
        catalog.register(Item::new(
            "mushroomskewer",
            "Mushroom Skewer",
            ItemType::Food,
            false,
        ));
        catalog.register(Item::new(
            "friedwildgreens",
            "Fried Wild Greens",
            ItemType::Food,
            false,
        ));
        catalog.register(Item::new("spiritorb", "Spirit Orb", ItemType::Key, true));
        catalog.register_alias("travelersword", "sword");
        catalog.register_alias("travelerbow", "bow");
        catalog.register_alias("normalarrow", "arrow");
        catalog.register_alias("hylianshroom", "shroom");
        catalog.register_alias("spiritorb", "orb");
        catalog
    }
}

impl ItemSearch for Catalog {
    fn search_item(&self, name: &str) -> Option<Arc<Item>> {
        self.get(name).cloned()
    }
}
