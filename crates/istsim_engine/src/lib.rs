//! Executable commands and the simulation state.
//!
//! This crate provides:
//! - [`parse_command`] - Text to [`Command`], through the AST
//! - [`Command`] - One executable unit with code blocks and diagnostics
//! - [`CmdErr`] - Which pipeline stage a command failed in
//! - [`ItemStackArg`] - A resolved stack plus its requested amount
//! - [`SimulationState`] - Resident and visible inventories plus crash state
//!
//! Errors never escape as panics or `Err`: a command that cannot be parsed
//! or applied carries its diagnostics instead.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arg;
pub mod code_block;
pub mod command;
pub mod delegate;
pub mod state;

pub use arg::{ItemStackArg, MAX_UNSTACKABLE_COUNT, process_wrappers};
pub use code_block::{CodeBlock, CodeBlockKind};
pub use command::{CmdErr, Command, CommandAction, RemoveMode};
pub use delegate::{parse_ast_command, parse_ast_items, parse_command};
pub use state::SimulationState;
