//! The interactive REPL.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use istsim_foundation::{Error, ErrorKind, Result};
use tracing::info;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::simulator::{CommandReport, Simulator};

const HELP: &str = "\
Commands:
    initialize <items>          Replace the inventory
    get|add|pickup <items>      Add items
    remove|drop|sell <items>    Remove items ('all' allowed)
    eat <items>                 Eat items ('all' allowed)
    equip <item>                Equip the first matching item
    unequip <item>              Unequip the first matching item
    save | reload | sync        Save, reload, or sync the game data
    break <n> slots             Break n pouch slots
    set life <n> slot <k>       Set durability of a game data slot

Items are written as [amount] name [meta], e.g. 3 apple or sword[life=5].

REPL commands:
    :help      Show this help
    :undo      Undo the last applied command
    :redo      Redo an undone command
    :reset     Start over with an empty inventory
    :dump      Print the state as JSON
    :history   List recent steps
    :quit      Exit";

/// What one evaluated line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalResult {
    /// Text to print; the loop continues.
    Output(String),
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The session being driven.
    simulator: Simulator,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(simulator: Simulator) -> Result<Self> {
        let editor = RustylineEditor::new(
            simulator.catalog().clone(),
            simulator.highlighter().is_enabled(),
        )?;
        Ok(Self::with_editor(editor, simulator))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, simulator: Simulator) -> Self {
        Self {
            editor,
            simulator,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the session.
    #[must_use]
    pub const fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Returns a mutable reference to the session.
    pub fn simulator_mut(&mut self) -> &mut Simulator {
        &mut self.simulator
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input)? {
            EvalResult::Output(text) => {
                if !text.is_empty() {
                    println!("{text}");
                }
                Ok(true)
            }
            EvalResult::Quit => Ok(false),
        }
    }

    /// Evaluates one line: a `:` meta command or a simulator command.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown meta command or a failed dump.
    pub fn eval(&mut self, input: &str) -> Result<EvalResult> {
        let trimmed = input.trim();
        if let Some(meta) = trimmed.strip_prefix(':') {
            return self.eval_meta(meta);
        }

        let report = self.simulator.run_line(trimmed);
        let mut out = self.format_diagnostics(&report);
        out.push_str(&self.simulator.render());
        Ok(EvalResult::Output(out.trim_end().to_string()))
    }

    fn eval_meta(&mut self, meta: &str) -> Result<EvalResult> {
        let text = match meta {
            "help" | "h" => HELP.to_string(),
            "quit" | "q" | "exit" => return Ok(EvalResult::Quit),
            "undo" => {
                if !self.simulator.undo() {
                    return Ok(EvalResult::Output("nothing to undo".to_string()));
                }
                self.simulator.render()
            }
            "redo" => {
                if !self.simulator.redo() {
                    return Ok(EvalResult::Output("nothing to redo".to_string()));
                }
                self.simulator.render()
            }
            "reset" => {
                self.simulator.reset();
                self.simulator.render()
            }
            "dump" => self.simulator.dump()?,
            "history" => self.format_history(),
            other => {
                return Err(Error::new(ErrorKind::Internal(format!(
                    "unknown REPL command :{other} (try :help)"
                ))));
            }
        };
        Ok(EvalResult::Output(text.trim_end().to_string()))
    }

    /// Runs a script file, echoing each command and its diagnostics.
    ///
    /// Blank lines and `#` comments are skipped. Returns the number of
    /// commands that reported diagnostics.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn run_file(&mut self, path: &Path) -> Result<usize> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Internal(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        })?;
        info!(path = %path.display(), "running script");

        let reports = self.simulator.run_script(&source);
        let mut failures = 0;
        for report in &reports {
            println!("{}{}", self.prompt, report.highlighted);
            let diagnostics = self.format_diagnostics(report);
            if !diagnostics.is_empty() {
                failures += 1;
                print!("{diagnostics}");
            }
        }
        Ok(failures)
    }

    /// Prints the current inventories.
    pub fn print_state(&self) {
        print!("{}", self.simulator.render());
        let _ = io::stdout().flush();
    }

    fn format_diagnostics(&self, report: &CommandReport) -> String {
        let color = self.simulator.highlighter().is_enabled();
        let mut out = String::new();
        for (i, line) in report.lines.iter().enumerate() {
            match (i, color) {
                (0, true) => {
                    let _ = writeln!(out, "\x1b[1;31m{line}\x1b[0m");
                }
                (0, false) => {
                    let _ = writeln!(out, "{line}");
                }
                _ => {
                    let _ = writeln!(out, "  {line}");
                }
            }
        }
        out
    }

    fn format_history(&self) -> String {
        let history = self.simulator.history();
        let current = history.current_step();
        let mut out = String::new();
        for snapshot in history.recent(20) {
            let marker = if Some(snapshot.step()) == current {
                '>'
            } else {
                ' '
            };
            let _ = writeln!(out, "{marker} {:>4}  {}", snapshot.step(), snapshot.summary());
        }
        out
    }

    /// Prints an error to stderr.
    fn print_error(&self, error: &Error) {
        if self.simulator.highlighter().is_enabled() {
            eprintln!("\x1b[31mError: {error}\x1b[0m");
        } else {
            eprintln!("Error: {error}");
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("Inventory slot simulator v{}", env!("CARGO_PKG_VERSION"));
        println!("Type :help for commands. Use Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}
