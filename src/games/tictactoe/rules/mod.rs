//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. They hold no state, so the
//! engine calls them on hypothetical boards exactly as the coordinator
//! calls them on the live one. Win must be checked before draw at every
//! call site; `evaluate` does that in one place.

pub mod draw;
pub mod win;

pub use draw::{check_draw, is_full};
pub use win::{LINES, check_win, line_owners, winner};

use super::{Board, GameResult, Player};
use tracing::instrument;

/// Derives the game result from the board contents.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> GameResult {
    match winner(board) {
        Some(Player::Human) => GameResult::HumanWin,
        Some(Player::Computer) => GameResult::ComputerWin,
        None if check_draw(board) => GameResult::Draw,
        None => GameResult::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_winning_board_is_a_win() {
        // Full board with a human row: reported as a win, never a draw.
        let board: Board = "xxx/oox/oxo".parse().unwrap();
        assert!(is_full(&board));
        assert!(!check_draw(&board));
        assert_eq!(evaluate(&board), GameResult::HumanWin);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        for text in ["xox/oxx/oxo", "xo./xo./x..", "x../.o./..."] {
            let board: Board = text.parse().unwrap();
            let first = evaluate(&board);
            for _ in 0..5 {
                assert_eq!(evaluate(&board), first);
            }
            assert_eq!(board.to_string(), text);
        }
    }

    #[test]
    fn test_in_progress() {
        let board: Board = "x../.o./...".parse().unwrap();
        assert_eq!(evaluate(&board), GameResult::InProgress);
    }
}
