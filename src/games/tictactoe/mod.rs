//! Tic-tac-toe: board model, rules, minimax engine and turn coordination.

mod action;
mod contracts;
mod coordinator;
mod cues;
mod phases;
mod position;
mod session;
mod timer;
mod types;

pub mod audit;
pub mod engine;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use coordinator::TurnCoordinator;
pub use cues::{Cue, CueLedger, CueSink, SilentCues};
pub use engine::{Score, best_move, score_moves};
pub use phases::{GameResult, Phase};
pub use position::Position;
pub use session::GameSession;
pub use timer::{DEFAULT_IDLE_WINDOW, IdleTimer};
pub use types::{Board, Cell, ParseBoardError, Player, Turn};
