//! Cross-layer integration tests for the simulator
//!
//! Tests that drive whole sessions through the runtime.

mod history;
