//! Integration tests for Layer 2: Language
//!
//! Tests for the tokenizer and the command grammar.

mod grammar;
mod lexer;
