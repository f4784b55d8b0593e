//! Integration tests for text to command delegation

use istsim_engine::{
    CmdErr, CodeBlock, CodeBlockKind, CommandAction, ItemStackArg, SimulationState,
    parse_command, process_wrappers,
};
use istsim_foundation::{Amount, Catalog, ItemStack, Span};
use proptest::prelude::*;

fn catalog() -> Catalog {
    Catalog::from_names(&["MaterialA", "MaterialB", "Weapon1", "FoodA"])
}

fn default_stack(catalog: &Catalog, name: &str) -> ItemStack {
    catalog
        .get(name)
        .expect("test item")
        .create_default_stack()
}

#[test]
fn bare_initialize_has_no_items_and_no_errors() {
    let c = catalog();
    let command = parse_command("initialize", &c);
    assert_eq!(command.action(), &CommandAction::Initialize(Vec::new()));
    assert!(!command.is_error());
    assert!(command.errors().is_empty());
}

#[test]
fn unrecognized_input_is_ast_error() {
    let c = catalog();
    for source in ["initialize ???", "juggle", "", "get"] {
        let command = parse_command(source, &c);
        assert_eq!(command.cmd_err(), Some(CmdErr::Ast), "{source:?}");
        assert_eq!(command.action(), &CommandAction::Error);
        assert_eq!(command.error_lines()[0], "Unrecognized command");
    }
}

#[test]
fn repeated_item_makes_independent_slots() {
    let c = catalog();
    let command = parse_command("initialize 2 materialb 2 materialb", &c);
    let CommandAction::Initialize(args) = command.action() else {
        panic!("expected initialize");
    };
    assert_eq!(args.len(), 2);

    let stacks = process_wrappers(args);
    assert_eq!(stacks.len(), 2);
    assert!(stacks.iter().all(|s| s.count == 2));

    let mut state = SimulationState::new();
    let mut command = command;
    assert!(command.execute(&mut state));
    assert_eq!(state.pouch().slots().len(), 2);
}

#[test]
fn unknown_item_keeps_valid_prefix() {
    let c = catalog();
    let command = parse_command("initialize 1 materiala 1 nothing 1 materialb", &c);
    assert_eq!(command.cmd_err(), Some(CmdErr::Parse));
    assert_eq!(
        command.action(),
        &CommandAction::Initialize(vec![ItemStackArg::new(default_stack(&c, "materiala"), 1)])
    );
    assert_eq!(command.errors(), ["unknown item: nothing".to_string()]);
}

#[test]
fn parse_errors_never_execute() {
    let c = catalog();
    let mut command = parse_command("initialize 1 materiala 1 nothing", &c);
    let mut state = SimulationState::new();
    assert!(!command.execute(&mut state));
    assert!(state.equals(&SimulationState::new()));
    assert_eq!(command.cmd_err(), Some(CmdErr::Parse));
}

#[test]
fn all_is_only_for_removal() {
    let c = catalog();
    assert_eq!(parse_command("get all materiala", &c).cmd_err(), Some(CmdErr::Parse));
    assert!(!parse_command("sell all materiala", &c).is_error());
    assert!(!parse_command("eat all fooda", &c).is_error());
}

#[test]
fn meta_block_is_applied() {
    let c = catalog();
    let command = parse_command("get 1 weapon1 [equip, life=7]", &c);
    let CommandAction::Get(args) = command.action() else {
        panic!("expected get");
    };
    assert!(args[0].stack.meta.equip);
    assert_eq!(args[0].stack.meta.life, Some(7));
}

#[test]
fn code_blocks_label_each_part() {
    let c = catalog();
    let command = parse_command("get 2 materiala [equip]", &c);
    assert_eq!(
        command.code_blocks(),
        [
            CodeBlock::new(Span::new(0, 3), CodeBlockKind::Command),
            CodeBlock::new(Span::new(4, 5), CodeBlockKind::Number),
            CodeBlock::new(Span::new(6, 15), CodeBlockKind::Item),
            CodeBlock::new(Span::new(16, 23), CodeBlockKind::Meta),
        ]
    );
}

#[test]
fn command_equality_ignores_spelling() {
    let c = catalog();
    let a = parse_command("get 1 materiala", &c);
    let b = parse_command("pickup   1   Material A", &c);
    let d = parse_command("add 2 materiala", &c);
    assert_eq!(a, b);
    assert_ne!(a, d);
}

proptest! {
    #[test]
    fn distinct_items_keep_order(n1 in 0u32..500, n2 in 0u32..500) {
        let c = catalog();
        let command = parse_command(&format!("initialize {n1} MaterialA {n2} MaterialB"), &c);
        prop_assert!(!command.is_error());
        prop_assert_eq!(
            command.action(),
            &CommandAction::Initialize(vec![
                ItemStackArg::new(default_stack(&c, "materiala"), Amount::Count(n1)),
                ItemStackArg::new(default_stack(&c, "materialb"), Amount::Count(n2)),
            ])
        );
    }
}
