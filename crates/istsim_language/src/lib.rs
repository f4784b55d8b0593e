//! Tokenizer, AST, and grammar parser for the simulator command language.
//!
//! ```text
//! "initialize 2 Material A 1 weapon1 [equip]"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     LEXER       │  → [Word(initialize), Int(2), Word(Material), Word(A), ...]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    GRAMMAR      │  → AstCommand::Initialize { verb, items: [...] }
//! └─────────────────┘     or AstCommand::Error when nothing matches
//! ```
//!
//! Every AST node keeps the spans of its literal tokens so later stages
//! can build highlighted code blocks.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;


pub use ast::{
    AstAmount, AstAmountValue, AstBreakSlots, AstCommand, AstError, AstItem, AstItemList,
    AstLiteral, AstMeta, AstMetaEntry, AstMetaValue, AstNumber, AstSetLife,
};
pub use lexer::Lexer;
pub use parser::{Parser, parse_command};
pub use token::{Token, TokenKind};
