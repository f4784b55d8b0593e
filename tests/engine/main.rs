//! Integration tests for Layer 3: Engine
//!
//! Tests for AST delegation, command execution, and the simulation state.

mod delegation;
mod execution;
