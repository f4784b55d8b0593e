//! Executable commands.
//!
//! The command set is closed, so `CommandAction` is an enum and
//! `execute` dispatches by pattern match. A `Command` wraps the action
//! with its highlighting blocks and diagnostics.

use std::fmt;

use istsim_foundation::{Error, ErrorKind, Span};
use istsim_storage::RemoveOptions;
use tracing::{debug, warn};

use crate::arg::{ItemStackArg, process_wrappers};
use crate::code_block::{CodeBlock, CodeBlockKind};
use crate::state::SimulationState;

/// The pipeline stage a command failed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CmdErr {
    /// The grammar did not recognize the text.
    Ast,
    /// The grammar matched but an item or value did not resolve.
    Parse,
    /// The command could not be applied to the current state.
    Execute,
}

impl CmdErr {
    /// Returns the header line shown above the diagnostics.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Ast => "Unrecognized command",
            Self::Parse => "Could not resolve command",
            Self::Execute => "Command failed",
        }
    }
}

impl fmt::Display for CmdErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Which removal keyword was used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RemoveMode {
    /// `remove`
    Remove,
    /// `drop`
    Drop,
    /// `sell`
    Sell,
}

impl RemoveMode {
    /// Returns the removal options this keyword implies.
    ///
    /// Dropping leaves zeroed slots to the store cleanup; removing and
    /// selling delete them outright, arrows included.
    #[must_use]
    pub fn options(self) -> RemoveOptions {
        match self {
            Self::Drop => RemoveOptions::new(),
            Self::Remove | Self::Sell => RemoveOptions::new().with_delete_zero_slot(),
        }
    }
}

/// What a command does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandAction {
    /// Reset the inventory to these items.
    Initialize(Vec<ItemStackArg>),
    /// Pick up items.
    Get(Vec<ItemStackArg>),
    /// Remove, drop or sell items.
    Remove {
        /// The items to take out.
        items: Vec<ItemStackArg>,
        /// The keyword used.
        mode: RemoveMode,
    },
    /// Eat items.
    Eat(Vec<ItemStackArg>),
    /// Equip one item.
    Equip(ItemStackArg),
    /// Unequip one item.
    Unequip(ItemStackArg),
    /// Save the resident inventory.
    Save,
    /// Reload the save.
    Reload,
    /// Sync resident with pouch.
    Sync,
    /// Lower the pouch counter.
    BreakSlots(u32),
    /// Write durability into a resident slot.
    SetLife {
        /// New durability.
        life: u32,
        /// Resident slot index.
        slot: usize,
    },
    /// Nothing to run; the command failed before execution.
    Error,
}

/// A parsed command ready to execute.
#[derive(Clone, Debug)]
pub struct Command {
    action: CommandAction,
    code_blocks: Vec<CodeBlock>,
    errors: Vec<String>,
    cmd_err: Option<CmdErr>,
}

impl Command {
    /// Creates a well-formed command.
    #[must_use]
    pub fn new(action: CommandAction, code_blocks: Vec<CodeBlock>) -> Self {
        Self {
            action,
            code_blocks,
            errors: Vec::new(),
            cmd_err: None,
        }
    }

    /// Creates the error sentinel. It never executes.
    #[must_use]
    pub fn error(cmd_err: CmdErr, code_blocks: Vec<CodeBlock>, errors: Vec<String>) -> Self {
        Self {
            action: CommandAction::Error,
            code_blocks,
            errors,
            cmd_err: Some(cmd_err),
        }
    }

    /// Creates the sentinel for text the grammar could not recognize.
    #[must_use]
    pub fn ast_error(message: impl Into<String>, span: Span) -> Self {
        Self::error(
            CmdErr::Ast,
            vec![CodeBlock::new(span, CodeBlockKind::Invalid)],
            vec![message.into()],
        )
    }

    /// Attaches parse diagnostics, keeping the action built so far.
    #[must_use]
    pub fn with_parse_errors(mut self, errors: Vec<String>) -> Self {
        if !errors.is_empty() {
            self.errors = errors;
            self.cmd_err = Some(CmdErr::Parse);
        }
        self
    }

    /// Returns what the command does.
    #[must_use]
    pub fn action(&self) -> &CommandAction {
        &self.action
    }

    /// Returns the highlighting blocks.
    #[must_use]
    pub fn code_blocks(&self) -> &[CodeBlock] {
        &self.code_blocks
    }

    /// Returns the failure stage, if any.
    #[must_use]
    pub const fn cmd_err(&self) -> Option<CmdErr> {
        self.cmd_err
    }

    /// Returns true if the command carries any error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.cmd_err.is_some()
    }

    /// Returns the diagnostic messages without the header.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns diagnostics as display lines. The first line is a header.
    #[must_use]
    pub fn error_lines(&self) -> Vec<String> {
        let Some(cmd_err) = self.cmd_err else {
            return Vec::new();
        };
        std::iter::once(cmd_err.header().to_string())
            .chain(self.errors.iter().cloned())
            .collect()
    }

    /// Compares actions only; code blocks and diagnostics are ignored.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.action == other.action
    }

    /// Applies the command to `state`.
    ///
    /// Commands that already carry an error do nothing. A command that
    /// cannot be fully applied leaves `state` untouched and records an
    /// `Execute` diagnostic. Returns true if the command was applied.
    pub fn execute(&mut self, state: &mut SimulationState) -> bool {
        if self.cmd_err.is_some() || matches!(self.action, CommandAction::Error) {
            return false;
        }
        if state.is_crashed() {
            self.fail(vec![Error::new(ErrorKind::Crashed).to_string()]);
            return false;
        }

        debug!(action = ?self.action, "execute");
        let result = run(&self.action, state);
        match result {
            Ok(()) => true,
            Err(errors) => {
                self.fail(errors);
                false
            }
        }
    }

    fn fail(&mut self, errors: Vec<String>) {
        debug!(?errors, "execute failed");
        self.errors = errors;
        self.cmd_err = Some(CmdErr::Execute);
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

fn run(action: &CommandAction, state: &mut SimulationState) -> Result<(), Vec<String>> {
    match action {
        CommandAction::Initialize(items) => {
            state.initialize(process_wrappers(items));
        }
        CommandAction::Get(items) => {
            for stack in process_wrappers(items) {
                state.pouch_mut().add(&stack);
            }
            state.sync();
        }
        CommandAction::Remove { items, mode } => {
            remove_all(state, items, mode.options(), "remove")?;
        }
        CommandAction::Eat(items) => {
            remove_all(state, items, RemoveOptions::new().with_stackable_food(), "eat")?;
        }
        CommandAction::Equip(arg) => set_equip(state, arg, true)?,
        CommandAction::Unequip(arg) => set_equip(state, arg, false)?,
        CommandAction::Save => state.save(),
        CommandAction::Reload => state.reload().map_err(|e| vec![e.to_string()])?,
        CommandAction::Sync => state.sync(),
        CommandAction::BreakSlots(n) => state.pouch_mut().break_slots(*n),
        CommandAction::SetLife { life, slot } => {
            // the game writes past the list; crashing is the modeled outcome
            if let Err(err) = state.update_life(*life, *slot) {
                warn!(%err, "set life out of range");
                state.crash();
            }
        }
        // handled by the early return in `execute`
        CommandAction::Error => {}
    }
    Ok(())
}

/// Runs every removal on a copy of the pouch and commits only if all of
/// them were satisfied.
fn remove_all(
    state: &mut SimulationState,
    items: &[ItemStackArg],
    options: RemoveOptions,
    verb: &str,
) -> Result<(), Vec<String>> {
    let mut pouch = state.pouch().deep_clone();
    let errors: Vec<String> = items
        .iter()
        .filter(|arg| !pouch.remove(&arg.stack, arg.amount, options))
        .map(|arg| format!("not enough {} to {verb} {}", arg.stack.item.name, arg.amount))
        .collect();
    if !errors.is_empty() {
        return Err(errors);
    }
    state.set_pouch(pouch);
    state.sync();
    Ok(())
}

fn set_equip(
    state: &mut SimulationState,
    arg: &ItemStackArg,
    equip: bool,
) -> Result<(), Vec<String>> {
    if !state.pouch_mut().set_equip(&arg.stack, equip) {
        let verb = if equip { "equip" } else { "unequip" };
        return Err(vec![format!("no {} to {verb}", arg.stack.item.name)]);
    }
    state.sync();
    Ok(())
}
