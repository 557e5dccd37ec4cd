//! tictactoe_ai - terminal front end and tooling.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_ai::{Board, GameConfig, Player, audit, best_move, rules, score_moves};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { config, no_timeout } => run_play(&config, no_timeout).await,
        Command::Suggest { board, human, json } => {
            init_stderr_tracing();
            run_suggest(&board, human, json)
        }
        Command::Audit => {
            init_stderr_tracing();
            run_audit()
        }
    }
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tictactoe_ai=debug"))
}

fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive game
async fn run_play(config_path: &Path, no_timeout: bool) -> Result<()> {
    let mut config = GameConfig::load_or_default(config_path)?;
    if no_timeout {
        config = config.without_forced_move();
    }

    // Log to a file so output does not land on the alternate screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting tictactoe_ai");
    tui::run(config).await
}

/// Print the engine's pick for a board
#[instrument]
fn run_suggest(board: &str, human: bool, json: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid --board")?;

    let result = rules::evaluate(&board);
    if result.is_terminal() {
        bail!("Board is already finished ({:?})", result);
    }

    let mover = if human { Player::Human } else { Player::Computer };
    let scored = score_moves(&board, mover);
    let Some(pick) = best_move(&board, mover) else {
        bail!("Board has no empty cell");
    };

    if json {
        let candidates: Vec<_> = scored
            .iter()
            .map(|(pos, score)| {
                serde_json::json!({
                    "row": pos.row(),
                    "col": pos.col(),
                    "score": score.0,
                })
            })
            .collect();
        let out = serde_json::json!({
            "mover": mover,
            "board": board.to_string(),
            "best": { "row": pick.row(), "col": pick.col(), "label": pick.label() },
            "candidates": candidates,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}\n", board.display());
        for (pos, score) in &scored {
            let marker = if *pos == pick { "*" } else { " " };
            println!("{} ({}, {}) {:<13} {:>3}", marker, pos.row(), pos.col(), pos.label(), score);
        }
        println!("\n{} plays {} ({}, {})", mover, pick.label(), pick.row(), pick.col());
    }

    Ok(())
}

/// Exhaustively check that the engine never loses
#[instrument]
fn run_audit() -> Result<()> {
    let report = audit::audit_engine()?;
    println!("{}", report);
    if report.human_wins > 0 {
        bail!("Engine lost {} games", report.human_wins);
    }
    Ok(())
}
