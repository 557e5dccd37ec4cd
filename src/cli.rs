//! Command-line interface for tictactoe_ai.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_ai")]
#[command(about = "Play tic-tac-toe against a computer that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long, default_value = "tictactoe_ai.toml")]
        config: PathBuf,

        /// Never move for an idle human
        #[arg(long)]
        no_timeout: bool,
    },

    /// Print the engine's move for a board
    Suggest {
        /// Board as 9 cells of x/o/. (e.g. "xx./oo./...")
        #[arg(short, long)]
        board: String,

        /// Search for the human instead of the computer
        #[arg(long)]
        human: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play the engine against every human line and report the results
    Audit,
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from("tictactoe_ai.toml"),
            no_timeout: false,
        }
    }
}
