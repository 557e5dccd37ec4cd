//! At most one player can own a complete line.

use super::super::{GameSession, rules};
use super::Invariant;

/// Invariant: lines of both marks never coexist.
pub struct SingleWinnerInvariant;

impl Invariant<GameSession> for SingleWinnerInvariant {
    fn holds(session: &GameSession) -> bool {
        rules::line_owners(session.board()).len() <= 1
    }

    fn description() -> &'static str {
        "At most one player owns a complete line"
    }
}
