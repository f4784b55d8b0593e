//! Integration tests for the command grammar

use istsim_foundation::Span;
use istsim_language::{AstAmountValue, AstCommand, AstItem, parse_command};
use proptest::prelude::*;

fn initialize_items(source: &str) -> Vec<AstItem> {
    match parse_command(source) {
        AstCommand::Initialize(list) => list.items,
        other => panic!("expected initialize, got {other:?}"),
    }
}

#[test]
fn item_spans_cover_their_words() {
    let items = initialize_items("initialize 2 Material A 1 weapon1 [equip]");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].amount.map(|a| a.span), Some(Span::new(11, 12)));
    assert_eq!(items[0].name_span(), Span::new(13, 23));
    assert_eq!(items[1].name_span(), Span::new(26, 33));
    assert_eq!(items[1].meta.as_ref().map(|m| m.span), Some(Span::new(34, 41)));
}

#[test]
fn verbs_keep_their_spans() {
    let command = parse_command("  sync");
    assert_eq!(command.verb().map(|v| v.span), Some(Span::new(2, 6)));
}

#[test]
fn unknown_verb_error_spans_the_verb() {
    let AstCommand::Error(err) = parse_command("juggle 3 apples") else {
        panic!("expected error");
    };
    assert_eq!(err.span, Span::new(0, 6));
    assert!(err.message.contains("juggle"));
}

#[test]
fn trailing_tokens_are_rejected() {
    assert!(parse_command("break 2 slots please").is_error());
    assert!(parse_command("set life 3 slot 1 2").is_error());
    assert!(parse_command("reload ,").is_error());
}

proptest! {
    #[test]
    fn item_order_and_amounts_are_preserved(
        entries in prop::collection::vec((0u32..1000, "[a-z][a-z0-9]{0,8}"), 1..6)
    ) {
        let source = std::iter::once("initialize".to_string())
            .chain(entries.iter().map(|(n, name)| format!("{n} {name}")))
            .collect::<Vec<_>>()
            .join(" ");

        let items = initialize_items(&source);
        prop_assert_eq!(items.len(), entries.len());
        for (item, (n, name)) in items.iter().zip(&entries) {
            prop_assert_eq!(item.amount.map(|a| a.value), Some(AstAmountValue::Count(*n)));
            prop_assert_eq!(&item.name_text(), name);
        }
    }
}
