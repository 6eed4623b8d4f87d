//! # Jump CLI Entry Point
//!
//! Jump shows a list of remote targets, lets you pick one with the arrow
//! keys, and runs its connection command in the real terminal. When the
//! session ends (or hits its deadline) the list comes back with the same
//! target selected.
//!
//! ## Usage
//!
//! ```bash
//! # Use ~/.config/jump/targets.json
//! jump
//!
//! # Use a specific targets file
//! jump --config ./targets.json
//!
//! # Cap every session at ten minutes
//! jump --timeout 600
//!
//! # Print the loaded targets and exit
//! jump --list
//! ```
//!
//! ## Key Bindings
//!
//! - `↑` / `k` - Move selection up
//! - `↓` / `j` - Move selection down
//! - `Enter` - Run the selected target
//! - `Esc` / `q` / `Q` / `Ctrl+c` - Quit

use jump::config::Config;
use jump::logging;
use jump::session::ShellRunner;
use jump::ui::terminal::{self, CrosstermEventReader, CrosstermSession, TerminalSession};
use jump::ui::{self, App};

use anyhow::{Context, Result};
use clap::Parser;
use std::panic;
use std::path::PathBuf;

/// Jump - pick a target and connect to it
#[derive(Parser, Debug)]
#[command(name = "jump")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pick a target from a list and hand the terminal to its command", long_about = None)]
struct Args {
    /// Path to the targets file (defaults to the user config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum session length in seconds, overriding the targets file
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print the loaded targets and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::restore_terminal();
        original_hook(panic_info);
    }));

    let log_path = logging::default_log_path()
        .inspect_err(|e| eprintln!("Warning: logging disabled: {e:#}"))
        .ok();

    let result = run_application(args, log_path).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

/// `log_path` is `None` to leave logging off.
async fn run_application(args: Args, log_path: Option<PathBuf>) -> Result<()> {
    let config_path = match args.config {
        Some(path) => path,
        None => Config::default_path()?,
    };

    let config = Config::load_from(&config_path)?;
    let registry = config
        .registry()
        .with_context(|| format!("Invalid targets file: {}", config_path.display()))?;

    if let Some(path) = log_path {
        if let Err(e) = logging::init(&path) {
            eprintln!("Warning: logging disabled: {e:#}");
        }
    }

    let settings = config.settings(args.timeout)?;

    tracing::info!(
        config = %config_path.display(),
        targets = registry.len(),
        timeout_secs = settings.timeout.as_secs(),
        theme = settings.theme.name,
        "loaded targets"
    );

    if args.list {
        println!("=== Targets ({}) ===", config_path.display());
        for target in registry.targets() {
            println!("  {}\n    Command: {}\n", target.name, target.command);
        }
        println!(
            "Timeout: {}s, pause: {}ms, theme: {}",
            settings.timeout.as_secs(),
            settings.pause.as_millis(),
            settings.theme.name
        );
        return Ok(());
    }

    let mut session = CrosstermSession::new()?;
    session
        .acquire()
        .context("Failed to initialize terminal")?;

    let mut app = App::new(registry, settings.theme);
    let mut event_reader = CrosstermEventReader;
    let mut runner = ShellRunner;

    // Run the app and ensure cleanup happens even on error
    let run_result = ui::run_app(
        &mut session,
        &mut app,
        &mut event_reader,
        &mut runner,
        &settings,
    )
    .await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = session.release();

    run_result?;
    cleanup_result?;

    tracing::info!("quit");
    Ok(())
}
