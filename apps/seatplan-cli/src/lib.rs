//! # Seatplan CLI Library
//!
//! Everything behind the `seatplan` binary, kept in a library so commands
//! can be tested without a terminal.
//!
//! ## Module Organization
//! ```text
//! seatplan_cli/
//! ├── lib.rs          ◄─── You are here (startup, dispatch, prompt)
//! ├── cli.rs          ◄─── clap definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── chart.rs    ◄─── ChartState (manager + config), ChartStore
//! ├── commands/
//! │   ├── mod.rs      ◄─── ChartResponse
//! │   ├── person.rs   ◄─── show, add
//! │   ├── seat.rs     ◄─── assign, unseat
//! │   ├── grid.rs     ◄─── resize, clear
//! │   └── exchange.rs ◄─── export, import
//! ├── render.rs       ◄─── Text grid
//! └── error.rs        ◄─── ApiError for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use seatplan_store::SeatplanConfig;

use cli::{Cli, Commands};
use commands::{exchange, grid, person, seat, ChartResponse};
use error::ApiError;
use state::ChartState;

/// Parses arguments, runs one command and prints the result.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Command Startup                                   │
/// │                                                                         │
/// │  1. Parse arguments (clap) ───────────────────────────────────────────► │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, to stderr                     │
/// │     • Default: warn, seatplan crates at info; RUST_LOG overrides        │
/// │                                                                         │
/// │  3. Load Config ──────────────────────────────────────────────────────► │
/// │     • --config or platform seatplan.toml, then SEATPLAN_* env           │
/// │     • Invalid config: warn and use defaults                             │
/// │                                                                         │
/// │  4. Open Chart ───────────────────────────────────────────────────────► │
/// │     • File store restored (corrupt chart → empty 5x5)                   │
/// │     • --ephemeral: in-memory store                                      │
/// │                                                                         │
/// │  5. Run Command, Print Chart ─────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run_from_env() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let json = cli.json;
    let today = Local::now().date_naive();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let result = run(cli, today, |preview| {
        ask_confirmation(&mut input, &mut io::stderr(), preview)
    });

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e, json);
            ExitCode::FAILURE
        }
    }
}

/// Runs a parsed command line and returns what should be printed.
pub fn run<F>(cli: Cli, today: NaiveDate, confirm: F) -> anyhow::Result<String>
where
    F: FnOnce(&str) -> bool,
{
    let config = SeatplanConfig::load_or_default(cli.config.clone());

    let mut state = if cli.ephemeral {
        ChartState::ephemeral(config)
    } else {
        ChartState::open(config).context("failed to open the chart store")?
    };

    let response = execute(&mut state, cli.command, today, confirm)?;

    if cli.json {
        let mut json = serde_json::to_string_pretty(&response)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(render::render_chart(&response))
    }
}

/// Dispatches one subcommand against the chart.
pub fn execute<F>(
    state: &mut ChartState,
    command: Commands,
    today: NaiveDate,
    confirm: F,
) -> Result<ChartResponse, ApiError>
where
    F: FnOnce(&str) -> bool,
{
    match command {
        Commands::Show => Ok(person::show_chart(state)),
        Commands::Add { name } => person::add_person(state, &name),
        Commands::Assign {
            name,
            row,
            col,
            from,
        } => seat::assign_seat(state, &name, row, col, from),
        Commands::Unseat { row, col } => seat::unseat(state, row, col),
        Commands::Resize { rows, cols, yes } => grid::resize_grid(state, rows, cols, yes, confirm),
        Commands::Clear { yes } => grid::clear_chart(state, yes, confirm),
        Commands::Export { out } => exchange::export_chart(state, out, today),
        Commands::Import { path } => exchange::import_chart(state, &path),
    }
}

/// Prints the preview and reads a yes/no answer. Anything but `y`/`yes`
/// (including EOF) is a no.
pub fn ask_confirmation<R, W>(input: &mut R, output: &mut W, preview: &str) -> bool
where
    R: BufRead,
    W: Write,
{
    let _ = write!(output, "{}\nContinue? [y/N] ", preview);
    let _ = output.flush();

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn report_error(err: &anyhow::Error, json: bool) {
    if let (true, Some(api)) = (json, err.downcast_ref::<ApiError>()) {
        if let Ok(body) = serde_json::to_string(api) {
            eprintln!("{}", body);
            return;
        }
    }
    eprintln!("error: {:#}", err);
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=seatplan_core=trace` - Trace the seating rules only
/// - Default: warnings, plus info from seatplan crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,seatplan=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "seatplan starting");
}
