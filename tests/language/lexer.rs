//! Integration tests for the tokenizer

use istsim_foundation::Span;
use istsim_language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn tokenizes_an_item_with_meta() {
    assert_eq!(
        kinds("get 2 Traveler's Sword [life=5, equip]"),
        vec![
            TokenKind::Word("get".to_string()),
            TokenKind::Int(2),
            TokenKind::Word("Traveler's".to_string()),
            TokenKind::Word("Sword".to_string()),
            TokenKind::LBracket,
            TokenKind::Word("life".to_string()),
            TokenKind::Equals,
            TokenKind::Int(5),
            TokenKind::Comma,
            TokenKind::Word("equip".to_string()),
            TokenKind::RBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn spans_index_the_source() {
    let source = "drop  3 apple";
    let tokens = Lexer::tokenize_all(source);
    assert_eq!(tokens[1].span, Span::new(6, 7));
    assert_eq!(tokens[2].text(source), "apple");
    assert_eq!(tokens[3].span, Span::empty_at(source.len()));
}

#[test]
fn overflowing_number_is_an_error_token() {
    let tokens = Lexer::tokenize_all("get 99999999999 apple");
    assert!(matches!(tokens[1].kind, TokenKind::Error(_)));
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds("   "), vec![TokenKind::Eof]);
}
