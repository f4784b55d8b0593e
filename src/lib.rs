//! Inventory slot simulator
//!
//! This crate re-exports all layers of the simulator for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: istsim_runtime    - Session, config, logging, REPL, CLI
//! Layer 4: istsim_debug      - Undo/redo history of state snapshots
//! Layer 3: istsim_engine     - Commands, AST delegation, simulation state
//! Layer 2: istsim_language   - Tokenizer, AST, command grammar
//! Layer 1: istsim_storage    - Slot stores, removal engine, inventories
//! Layer 0: istsim_foundation - Items, stacks, amounts, catalog, errors
//! ```

pub use istsim_debug as debug;
pub use istsim_engine as engine;
pub use istsim_foundation as foundation;
pub use istsim_language as language;
pub use istsim_runtime as runtime;
pub use istsim_storage as storage;
