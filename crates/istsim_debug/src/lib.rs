//! Undo/redo history for the inventory simulator.
//!
//! This crate provides:
//! - [`History`] - A bounded ring of state snapshots with a cursor
//! - [`Snapshot`] - One recorded state plus its summary
//! - [`StepSummary`] - What a command did, in one line

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod history;

pub use history::{History, Snapshot, StepSummary};
