//! Integration tests for item lookup

use istsim_foundation::{Catalog, ItemSearch, ItemType, normalize_name};

#[test]
fn lookup_ignores_case_and_spacing() {
    let catalog = Catalog::from_names(&["Material A"]);
    let by_name = catalog.search_item("Material A").expect("display name");
    let by_id = catalog.search_item("materiala").expect("id");
    let shouty = catalog.search_item("MATERIAL a").expect("shouty");

    assert!(by_name.is_same(&by_id));
    assert!(by_id.is_same(&shouty));
    assert_eq!(by_name.name, "Material A");
}

#[test]
fn unknown_names_miss() {
    let catalog = Catalog::from_names(&["MaterialA"]);
    assert!(catalog.search_item("materialb").is_none());
    assert!(catalog.search_item("").is_none());
}

#[test]
fn prefixes_pick_types() {
    let catalog = Catalog::from_names(&["Weapon1", "ArrowA", "FoodA", "MaterialA"]);

    let weapon = catalog.get("weapon1").expect("weapon");
    assert_eq!(weapon.item_type, ItemType::Weapon);
    assert!(!weapon.stackable);
    assert_eq!(weapon.default_life, Some(30));

    assert_eq!(catalog.get("arrowa").map(|i| i.item_type), Some(ItemType::Arrow));
    assert_eq!(catalog.get("fooda").map(|i| i.stackable), Some(false));
    assert_eq!(catalog.get("materiala").map(|i| i.stackable), Some(true));
}

#[test]
fn standard_catalog_has_aliases() {
    let catalog = Catalog::standard();
    let sword = catalog.search_item("sword").expect("alias");
    assert_eq!(sword.id, "travelersword");
    assert!(catalog.search_item("Traveler's Sword").is_some());
}

#[test]
fn normalize_strips_punctuation() {
    assert_eq!(normalize_name("Traveler's Sword"), "travelerssword");
    assert_eq!(normalize_name("  Material-A "), "materiala");
}
