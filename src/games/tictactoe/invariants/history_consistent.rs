//! History consistency: replaying the moves rebuilds the board.

use super::super::{Board, GameSession};
use super::Invariant;

/// Invariant: the board is exactly the replay of the move history.
///
/// Each replayed move must land on an empty cell, so this also covers
/// monotonicity: a marked cell is never overwritten or cleared.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut reconstructed = Board::new();

        for mov in session.history() {
            if reconstructed.set_cell(mov.position, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Player, Position};

    #[test]
    fn test_empty_session_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_applied_moves_hold() {
        let mut session = GameSession::new();
        session.apply(Move::new(Player::Human, Position::Center));
        session.apply(Move::new(Player::Computer, Position::TopLeft));
        assert!(HistoryConsistentInvariant::holds(&session));
    }
}
