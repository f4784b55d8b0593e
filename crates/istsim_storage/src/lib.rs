//! Slot stores and inventories for the simulator.
//!
//! This crate provides:
//! - [`SlotsCore`] - An ordered, index-mutable sequence of stacks
//! - [`remove`] - The tiered matching/removal engine
//! - [`GameData`] - The resident ("memory") inventory copy
//! - [`VisibleInventory`] - The player-facing pouch with its running count
//! - [`SlotDisplay`] - Read-only projections for rendering

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod display;
pub mod flags;
pub mod game_data;
pub mod remove;
pub mod slots;
pub mod visible;

pub use display::SlotDisplay;
pub use flags::{FlagValue, GameFlags};
pub use game_data::GameData;
pub use remove::{RemoveOptions, find_matches, remove};
pub use slots::SlotsCore;
pub use visible::VisibleInventory;
