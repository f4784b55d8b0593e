//! A simulator session: state, catalog, and undo history.
//!
//! The session is the only place a `SimulationState` is mutated outside
//! tests. Every applied command is recorded so it can be undone.

use std::fmt::Write as _;
use std::sync::Arc;

use istsim_debug::{History, StepSummary};
use istsim_engine::{Command, SimulationState, parse_command};
use istsim_foundation::{Catalog, Error, ErrorKind, Result};
use istsim_storage::SlotDisplay;
use tracing::{debug, info, info_span};

use crate::config::SimulatorConfig;
use crate::highlight::Highlighter;

/// The outcome of one command line.
#[derive(Clone, Debug)]
pub struct CommandReport {
    /// The text that was run.
    pub source: String,
    /// The parsed command, with its diagnostics.
    pub command: Command,
    /// Whether the command was executed.
    pub applied: bool,
    /// Header plus diagnostics; empty on success.
    pub lines: Vec<String>,
    /// The source, coloured by its code blocks.
    pub highlighted: String,
    /// Summary of the state afterwards.
    pub summary: StepSummary,
}

impl CommandReport {
    /// Returns true if the command produced no diagnostics.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Runs command lines against a simulation state.
pub struct Simulator {
    state: SimulationState,
    history: History,
    config: SimulatorConfig,
    catalog: Arc<Catalog>,
    highlighter: Highlighter,
}

impl Simulator {
    /// Creates a session with an empty inventory.
    #[must_use]
    pub fn new(config: SimulatorConfig, catalog: Arc<Catalog>) -> Self {
        let state = SimulationState::with_flags(config.flags());
        let mut history = History::new(config.history_size);
        history.record(&state, StepSummary::from_state("(start)", true, &state));
        Self {
            highlighter: Highlighter::new(config.color),
            state,
            history,
            config,
            catalog,
        }
    }

    /// Creates a session with the default configuration and the standard
    /// catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(SimulatorConfig::default(), Arc::new(Catalog::standard()))
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Returns the item catalog.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Returns the undo history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Returns the highlighter.
    #[must_use]
    pub const fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Parses and executes one line.
    ///
    /// Only commands that were applied are recorded in the history.
    pub fn run_line(&mut self, text: &str) -> CommandReport {
        let span = info_span!("command", text);
        let _guard = span.enter();

        let mut command = parse_command(text, self.catalog.as_ref());
        let applied = command.execute(&mut self.state);

        let summary = StepSummary::from_state(text.trim(), applied, &self.state);
        if applied {
            self.history.record(&self.state, summary.clone());
        }
        let lines = command.error_lines();
        debug!(applied, errors = lines.len(), "executed");

        CommandReport {
            source: text.to_string(),
            highlighted: self
                .highlighter
                .render(text, command.code_blocks())
                .into_owned(),
            command,
            applied,
            lines,
            summary,
        }
    }

    /// Runs every line of a script, skipping blanks and `#` comments.
    pub fn run_script(&mut self, source: &str) -> Vec<CommandReport> {
        source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| self.run_line(line))
            .collect()
    }

    /// Steps back one recorded command. Returns false at the start.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }

    /// Steps forward one undone command. Returns false at the end.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }

    /// Starts over with an empty inventory and an empty history.
    pub fn reset(&mut self) {
        info!("reset");
        self.state = SimulationState::with_flags(self.config.flags());
        self.history.clear();
        self.history.record(
            &self.state,
            StepSummary::from_state("(reset)", true, &self.state),
        );
    }

    /// Projects the resident inventory.
    #[must_use]
    pub fn displayed_game_data(&self) -> Vec<SlotDisplay> {
        self.state.displayable_game_data(self.config.animated_icons)
    }

    /// Projects the pouch.
    #[must_use]
    pub fn displayed_pouch(&self) -> Vec<SlotDisplay> {
        self.state.displayable_pouch(self.config.animated_icons)
    }

    /// Renders both inventories as numbered lists.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.state.is_crashed() {
            out.push_str("!! the game has crashed\n");
        }
        if self.config.show_game_data {
            render_section(&mut out, "Game data", &self.displayed_game_data());
        }
        render_section(
            &mut out,
            &format!("Pouch (m_count {})", self.state.inventory_m_count()),
            &self.displayed_pouch(),
        );
        out
    }

    /// Serializes the state as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an `Internal` error if serialization fails.
    pub fn dump(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.state)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))
    }
}

fn render_section(out: &mut String, title: &str, slots: &[SlotDisplay]) {
    let _ = writeln!(out, "{title}:");
    if slots.is_empty() {
        out.push_str("  (empty)\n");
    }
    for (i, slot) in slots.iter().enumerate() {
        let _ = writeln!(out, "  {i:>3}  {slot}");
    }
}
