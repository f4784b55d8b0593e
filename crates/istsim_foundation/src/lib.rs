//! Core types for the inventory simulator.
//!
//! This crate provides:
//! - [`Item`] and [`ItemType`] - Immutable catalog entries
//! - [`ItemStack`] - A quantity of one item plus metadata
//! - [`Amount`] - A removal count, either finite or "all"
//! - [`Span`] - Source ranges for command text
//! - [`Error`] - Rich error types
//! - [`ItemSearch`] and [`Catalog`] - Name/alias lookup of items

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod amount;
pub mod catalog;
pub mod error;
pub mod item;
pub mod span;
pub mod stack;

pub use amount::Amount;
pub use catalog::{Catalog, ItemSearch, normalize_name};
pub use error::{Error, ErrorKind, Result};
pub use item::{Item, ItemType};
pub use span::Span;
pub use stack::{ItemStack, StackField, StackMeta, StackMetaPatch};
