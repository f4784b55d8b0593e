//! Inventory slot simulator CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use istsim_foundation::{Catalog, Result};
use istsim_runtime::{Repl, Simulator, SimulatorConfig, logging};
use tracing::{debug, warn};

/// Simulates how a game's inventory slots react to pickups, removals,
/// saves, and reloads.
#[derive(Parser, Debug)]
#[command(name = "istsim")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    istsim                          Start the interactive REPL
    istsim setup.txt                Run setup.txt, then start the REPL
    istsim -b repro.txt             Run repro.txt and exit
    istsim --dump -b repro.txt      Print the final state as JSON")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run the scripts and exit (no REPL)
    #[arg(short, long)]
    batch: bool,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,

    /// Number of undo steps to keep
    #[arg(long, value_name = "N")]
    history: Option<usize>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,

    /// Print the final state as JSON
    #[arg(long)]
    dump: bool,

    /// Command scripts to run before starting the REPL
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<SimulatorConfig> {
    let mut config = match &cli.config {
        Some(path) => SimulatorConfig::load(path)?,
        None if cli.batch => SimulatorConfig::batch(),
        None => SimulatorConfig::default(),
    };
    if cli.no_color {
        config = config.with_color(false);
    }
    if let Some(size) = cli.history {
        config = config.with_history_size(size);
    }
    if let Some(filter) = &cli.log {
        config = config.with_log_filter(filter.clone());
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;
    logging::init(&config.log_filter)?;
    debug!(?config, "configured");

    let simulator = Simulator::new(config, Arc::new(Catalog::standard()));

    let mut failures = 0;
    let mut repl = if cli.batch {
        let editor = NullEditor;
        ReplKind::Batch(Repl::with_editor(editor, simulator))
    } else {
        ReplKind::Interactive(Repl::new(simulator)?)
    };

    for file in &cli.files {
        failures += match &mut repl {
            ReplKind::Batch(r) => r.run_file(file)?,
            ReplKind::Interactive(r) => r.run_file(file)?,
        };
    }
    if failures > 0 {
        warn!(failures, "scripts reported failed commands");
    }

    match repl {
        ReplKind::Batch(r) => {
            if cli.dump {
                println!("{}", r.simulator().dump()?);
            } else {
                r.print_state();
            }
        }
        ReplKind::Interactive(r) => {
            let mut r = if cli.files.is_empty() {
                r
            } else {
                r.print_state();
                r.without_banner()
            };
            r.run()?;
            if cli.dump {
                println!("{}", r.simulator().dump()?);
            }
        }
    }

    Ok(if failures > 0 {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    })
}

/// Batch runs never read from the terminal.
enum ReplKind {
    Batch(Repl<NullEditor>),
    Interactive(Repl),
}

struct NullEditor;

impl istsim_runtime::LineEditor for NullEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<istsim_runtime::ReadResult> {
        Ok(istsim_runtime::ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}
