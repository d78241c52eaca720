mod app;
mod commands;
mod console;
mod menu;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use timetable_core::config::TimetableConfig;
use tracing_subscriber::EnvFilter;

use app::App;
use console::{LineConsole, TermConsole};

#[derive(Parser)]
#[command(name = "timetable")]
#[command(about = "Manage a weekly timetable from an interactive menu")]
struct Cli {
    /// Read configuration from this file (which must exist) instead of
    /// ~/.config/timetable/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => TimetableConfig::load_from(path),
        None => TimetableConfig::load(),
    }
    .context("Could not load configuration")?;

    let mut app = App::new(config);

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        app.run(&mut TermConsole)
    } else {
        app.run(&mut LineConsole::new(stdin.lock(), std::io::stdout()))
    }
}

/// `RUST_LOG` wins when set; otherwise warnings only, or debug with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
