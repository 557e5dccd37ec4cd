//! The game session: board, turn, terminal flag and move history.

use super::action::Move;
use super::{Board, GameResult, Phase, Player, Turn, rules};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One game from first move to restart.
///
/// The session is plain data owned by the coordinator. The result is never
/// stored; it is derived from the board whenever it is asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    turn: Turn,
    terminal: bool,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a fresh session: empty board, human to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::Human,
            terminal: false,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose turn it is. Frozen once the game is over.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns true once the game is over.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Result derived from the current board.
    pub fn result(&self) -> GameResult {
        rules::evaluate(&self.board)
    }

    /// Current coordinator phase.
    pub fn phase(&self) -> Phase {
        if self.terminal {
            Phase::Terminal(self.result())
        } else {
            match self.turn {
                Player::Human => Phase::AwaitingHuman,
                Player::Computer => Phase::AwaitingComputer,
            }
        }
    }

    /// Places the move's mark and records it. The cell must be empty.
    pub(super) fn apply(&mut self, mv: Move) {
        debug_assert!(self.board.is_empty(mv.position), "apply on occupied {}", mv.position);
        self.board.place(mv.position, mv.player);
        self.history.push(mv);
    }

    pub(super) fn set_turn(&mut self, turn: Turn) {
        self.turn = turn;
    }

    pub(super) fn mark_terminal(&mut self) {
        self.terminal = true;
    }

    /// Clears every cell, hands the turn back to the human and drops history.
    #[instrument(skip(self))]
    pub(super) fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
