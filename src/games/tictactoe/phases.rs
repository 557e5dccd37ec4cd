//! Game result and coordinator phases.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome derived from the board. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// Full board with no complete line.
    Draw,
}

impl GameResult {
    /// True once no further moves are legal.
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }
}

/// State of the turn coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a human move (or the idle timeout).
    AwaitingHuman,
    /// The engine is about to move.
    AwaitingComputer,
    /// Game over; only a restart leaves this phase.
    Terminal(GameResult),
}

impl Phase {
    /// The player allowed to move, if any.
    pub fn mover(self) -> Option<Player> {
        match self {
            Phase::AwaitingHuman => Some(Player::Human),
            Phase::AwaitingComputer => Some(Player::Computer),
            Phase::Terminal(_) => None,
        }
    }

    /// Returns true in the terminal phase.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Terminal(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingHuman => write!(f, "Your Turn"),
            Phase::AwaitingComputer => write!(f, "Computer is thinking..."),
            Phase::Terminal(GameResult::HumanWin) => write!(f, "You Win! Press R to restart"),
            Phase::Terminal(GameResult::ComputerWin) => {
                write!(f, "Computer Wins! Press R to restart")
            }
            Phase::Terminal(GameResult::Draw) => write!(f, "It's a draw! Press R to restart"),
            Phase::Terminal(GameResult::InProgress) => {
                debug_assert!(false, "terminal phase over a game in progress");
                write!(f, "Game over")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_texts() {
        assert_eq!(Phase::AwaitingHuman.to_string(), "Your Turn");
        assert_eq!(Phase::AwaitingComputer.to_string(), "Computer is thinking...");
        assert_eq!(
            Phase::Terminal(GameResult::HumanWin).to_string(),
            "You Win! Press R to restart"
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "terminal phase over a game in progress")]
    fn test_terminal_in_progress_asserts() {
        let _ = Phase::Terminal(GameResult::InProgress).to_string();
    }
}
