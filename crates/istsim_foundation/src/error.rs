//! Error types for the simulator.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Command-level diagnostics are plain values carried by commands; this
//! type covers Rust-level fallible calls such as slot indexing and config
//! loading.

use thiserror::Error;

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for simulator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown item error.
    #[must_use]
    pub fn unknown_item(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownItem(name.into()))
    }

    /// Creates a slot out of range error.
    #[must_use]
    pub const fn slot_out_of_range(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::SlotOutOfRange { index, length })
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidAmount(reason.into()))
    }

    /// Creates an invalid metadata error.
    #[must_use]
    pub fn invalid_meta(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidMeta {
            key: key.into(),
            reason: reason.into(),
        })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// No catalog item matches the name.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// Slot index is past the end of the store.
    #[error("slot out of range: {index} (length {length})")]
    SlotOutOfRange {
        /// The slot that was accessed.
        index: usize,
        /// The number of slots in the store.
        length: usize,
    },

    /// The amount is not valid in this position.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A metadata block entry could not be applied.
    #[error("invalid meta {key}: {reason}")]
    InvalidMeta {
        /// The metadata key.
        key: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Reload was requested before any save.
    #[error("no save to reload")]
    NoSave,

    /// The simulated game has crashed.
    #[error("the game has crashed")]
    Crashed,

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),

    /// Reading input or scripts failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
