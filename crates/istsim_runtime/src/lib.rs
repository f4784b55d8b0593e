//! Simulator session, REPL, and CLI for the inventory simulator.
//!
//! This crate provides:
//! - [`Simulator`] - Runs command lines against a state with undo/redo
//! - [`SimulatorConfig`] - Settings loaded from TOML and CLI flags
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`logging::init`] - Tracing subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod logging;
pub mod repl;
pub mod simulator;

pub use config::SimulatorConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::Highlighter;
pub use repl::{EvalResult, Repl};
pub use simulator::{CommandReport, Simulator};
