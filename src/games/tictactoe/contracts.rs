//! Preconditions for applying a move to a session.

use super::action::{Move, MoveError};
use super::session::GameSession;
use super::Phase;
use tracing::instrument;

/// Precondition: the game is not over.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameOver` on a terminal session.
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if session.is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `SquareOccupied` when the target cell is taken.
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        if !session.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `WrongTurn` when another player holds the turn.
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        match session.phase() {
            Phase::Terminal(_) => Err(MoveError::GameOver),
            phase if phase.mover() == Some(mov.player) => Ok(()),
            _ => Err(MoveError::WrongTurn(mov.player)),
        }
    }
}

/// Composite precondition for a regular move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        GameNotOver::check(session)?;
        PlayersTurn::check(mov, session)?;
        SquareIsEmpty::check(mov, session)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_fresh_session_accepts_human() {
        let session = GameSession::new();
        let mov = Move::new(Player::Human, Position::Center);
        assert!(LegalMove::check(&mov, &session).is_ok());
    }

    #[test]
    fn test_wrong_turn() {
        let session = GameSession::new();
        let mov = Move::new(Player::Computer, Position::Center);
        assert_eq!(
            LegalMove::check(&mov, &session),
            Err(MoveError::WrongTurn(Player::Computer))
        );
    }

    #[test]
    fn test_occupied_square() {
        let mut session = GameSession::new();
        session.apply(Move::new(Player::Human, Position::Center));
        let mov = Move::new(Player::Human, Position::Center);
        assert_eq!(
            LegalMove::check(&mov, &session),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_terminal_session() {
        let mut session = GameSession::new();
        session.mark_terminal();
        let mov = Move::new(Player::Human, Position::Center);
        assert_eq!(LegalMove::check(&mov, &session), Err(MoveError::GameOver));
    }
}
