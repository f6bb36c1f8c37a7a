use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use classic_snake::config::TICK_INTERVAL_MS;
use classic_snake::display::DisplaySink;
use classic_snake::error::AppError;
use classic_snake::game::Game;
use classic_snake::input::CrosstermInput;
use classic_snake::logging::init_file_logging;
use classic_snake::runner::{run_game, GameSummary};
use classic_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement; a random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostic logs to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        if let Err(error) = init_file_logging(path) {
            eprintln!("Failed to open log file {}: {error}", path.display());
            return ExitCode::FAILURE;
        }
    }

    install_panic_hook();

    // The session is dropped inside `run`, so the terminal is restored
    // before anything is printed here.
    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "session failed");
            eprintln!("snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<GameSummary, AppError> {
    let mut session = TerminalSession::enter()?;
    let display = session.display_mut();

    let bounds = display.surface_size()?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(
        width = bounds.width,
        height = bounds.height,
        seed,
        "starting game"
    );

    let mut game = Game::new_with_seed(bounds, seed)?;
    let mut input = CrosstermInput;

    run_game(
        &mut game,
        &mut input,
        display,
        Duration::from_millis(TICK_INTERVAL_MS),
    )
}
