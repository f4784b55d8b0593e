//! Integration tests for item stacks

use istsim_foundation::{Catalog, ItemStack, StackField, StackMetaPatch};

fn weapon() -> ItemStack {
    Catalog::from_names(&["Weapon1"])
        .get("weapon1")
        .expect("test item")
        .create_default_stack()
}

#[test]
fn default_stack() {
    let stack = weapon();
    assert_eq!(stack.count, 1);
    assert_eq!(stack.meta.life, Some(30));
    assert!(!stack.meta.equip);
}

#[test]
fn modify_returns_new_value() {
    let stack = weapon();
    let worn = stack.modify(StackMetaPatch::new().life(3).equip(true));

    assert_eq!(stack.meta.life, Some(30));
    assert_eq!(worn.meta.life, Some(3));
    assert!(worn.meta.equip);
    assert_eq!(worn.count, 1);
}

#[test]
fn equals_except_relaxes_fields() {
    let stack = weapon();
    let worn = stack.modify(StackMetaPatch::new().life(3).equip(true));

    assert!(!stack.equals(&worn));
    assert!(!stack.equals_except(&worn, &[StackField::Life]));
    assert!(stack.equals_except(&worn, &[StackField::Life, StackField::Equip]));
    assert!(stack.is_same_item(&worn));
}

#[test]
fn count_is_part_of_equality() {
    let stack = weapon();
    assert_ne!(stack, stack.with_count(2));
    assert!(stack.equals_except(&stack.with_count(2), &[StackField::Count]));
}

#[test]
fn modify_meta_entries() {
    let stack = weapon();
    assert!(stack.modify_meta("equip", None).expect("bare equip").meta.equip);
    assert!(
        !stack
            .modify_meta("equip", Some("false"))
            .expect("equip=false")
            .meta
            .equip
    );
    assert_eq!(
        stack.modify_meta("life", Some("300")).expect("life").meta.life,
        Some(300)
    );
    assert!(stack.modify_meta("life", None).is_err());
    assert!(stack.modify_meta("colour", Some("red")).is_err());
}
