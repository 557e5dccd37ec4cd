//! The terminal flag agrees with the board.

use super::super::GameSession;
use super::Invariant;

/// Invariant: the session is terminal exactly when the board is won or drawn.
pub struct TerminalFlagInvariant;

impl Invariant<GameSession> for TerminalFlagInvariant {
    fn holds(session: &GameSession) -> bool {
        session.is_terminal() == session.result().is_terminal()
    }

    fn description() -> &'static str {
        "Terminal flag matches the board result"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_not_terminal() {
        assert!(TerminalFlagInvariant::holds(&GameSession::new()));
    }
}
