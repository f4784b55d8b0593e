//! Configuration for the simulator.

use std::path::Path;

use istsim_foundation::{Error, Result};
use istsim_storage::GameFlags;
use serde::Deserialize;

/// Configuration for a simulator session.
///
/// Every field is optional in the TOML file; missing fields take their
/// defaults. CLI flags are applied on top with the `with_*` builders.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Number of undo steps to retain.
    pub history_size: usize,

    /// Whether slot displays request animated icons.
    pub animated_icons: bool,

    /// Whether to print the resident inventory after each command.
    pub show_game_data: bool,

    /// Whether to emit ANSI colours.
    pub color: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Weapon tab size for new sessions.
    pub weapon_slots: u32,

    /// Bow tab size for new sessions.
    pub bow_slots: u32,

    /// Shield tab size for new sessions.
    pub shield_slots: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        let flags = GameFlags::default();
        Self {
            history_size: 100,
            animated_icons: false,
            show_game_data: true,
            color: true,
            log_filter: "warn".to_string(),
            weapon_slots: flags.weapon_slots,
            bow_slots: flags.bow_slots,
            shield_slots: flags.shield_slots,
        }
    }
}

impl SimulatorConfig {
    /// Creates a configuration for scripted runs: no colour, pouch only.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            show_game_data: false,
            color: false,
            ..Self::default()
        }
    }

    /// Creates a configuration for debugging with verbose logs and a
    /// deeper history.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            history_size: 500,
            log_filter: "debug".to_string(),
            ..Self::default()
        }
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the text is not valid TOML for this type.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(e.to_string()))
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the file cannot be read, or a `Config`
    /// error if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Returns the game flags new sessions start with.
    #[must_use]
    pub fn flags(&self) -> GameFlags {
        let mut flags = GameFlags::default();
        flags.weapon_slots = self.weapon_slots;
        flags.bow_slots = self.bow_slots;
        flags.shield_slots = self.shield_slots;
        flags
    }

    /// Builder method to set history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Builder method to enable/disable animated icons.
    #[must_use]
    pub fn with_animated_icons(mut self, animated: bool) -> Self {
        self.animated_icons = animated;
        self
    }

    /// Builder method to show/hide the resident inventory.
    #[must_use]
    pub fn with_show_game_data(mut self, show: bool) -> Self {
        self.show_game_data = show;
        self
    }

    /// Builder method to enable/disable colour.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder method to set the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
