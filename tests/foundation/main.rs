//! Integration tests for Layer 0: Foundation
//!
//! Tests for items, stacks, the catalog, and errors.

mod catalog;
mod errors;
mod stacks;
