//! Integration tests for Layer 1: Storage
//!
//! Tests for the slot store, the removal engine, and both inventories.

mod inventories;
mod removal;
