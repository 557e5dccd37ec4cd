//! Human vs. computer tic-tac-toe.
//!
//! The crate holds the game core: the 3x3 board with win/draw detection,
//! an exhaustive minimax engine that picks the computer's move, and a turn
//! coordinator that decides whose move is legal when. Rendering, sound and
//! input are left to the caller, which talks to the core through
//! [`TurnCoordinator`], a [`CueSink`] and an [`IdleTimer`].
//!
//! # Example
//!
//! ```
//! use tictactoe_ai::{Phase, Position, SilentCues, TurnCoordinator};
//!
//! let mut game = TurnCoordinator::new();
//! game.apply_human_move(Position::TopLeft, &mut SilentCues).unwrap();
//! let reply = game.apply_computer_move(&mut SilentCues).unwrap();
//! assert_eq!(reply, Position::Center);
//! assert_eq!(game.phase(), Phase::AwaitingHuman);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, Cue, CueLedger, CueSink, DEFAULT_IDLE_WINDOW, GameResult, GameSession, IdleTimer,
    Move, MoveError, ParseBoardError, Phase, Player, Position, Score, SilentCues, Turn,
    TurnCoordinator, audit, best_move, engine, rules, score_moves,
};
