//! Two-player console tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttt_console::{Cli, run};
use ttt_engine::Game;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so the game itself owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut game = Game::with_options(cli.first.into(), cli.policy());
    let status = run(&mut game, std::io::stdin().lock(), std::io::stdout().lock())?;
    info!(?status, turns = game.turn_count(), "Game finished");

    if cli.json {
        let json = serde_json::to_string(&game.record()).context("Failed to serialize record")?;
        println!("{json}");
    }

    Ok(())
}
