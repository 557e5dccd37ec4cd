//! Exhaustive audit of the engine against every human line of play.
//!
//! The engine moves second. At each human turn every empty cell is tried;
//! at each computer turn the engine's choice is played. The report counts
//! how each of those games ended. A sound engine never loses.

use super::cues::SilentCues;
use super::{GameResult, MoveError, Phase, TurnCoordinator};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Number of distinct games played to the end.
    pub games: usize,
    /// Games the human won.
    pub human_wins: usize,
    /// Games the computer won.
    pub computer_wins: usize,
    /// Games that ended full with no line.
    pub draws: usize,
}

impl AuditReport {
    fn record(&mut self, result: GameResult) {
        self.games += 1;
        match result {
            GameResult::HumanWin => self.human_wins += 1,
            GameResult::ComputerWin => self.computer_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }
    }
}

impl std::fmt::Display for AuditReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: {} computer wins, {} draws, {} human wins",
            self.games, self.computer_wins, self.draws, self.human_wins
        )
    }
}

/// Plays the engine against every possible sequence of human moves.
#[instrument]
pub fn audit_engine() -> Result<AuditReport, MoveError> {
    let mut report = AuditReport::default();
    explore(&TurnCoordinator::new(), &mut report)?;
    info!(%report, "Engine audit finished");
    Ok(report)
}

fn explore(coordinator: &TurnCoordinator, report: &mut AuditReport) -> Result<(), MoveError> {
    match coordinator.phase() {
        Phase::Terminal(result) => report.record(result),
        Phase::AwaitingHuman => {
            for pos in coordinator.session().board().empty_positions() {
                let mut next = coordinator.clone();
                next.apply_human_move(pos, &mut SilentCues)?;
                explore(&next, report)?;
            }
        }
        Phase::AwaitingComputer => {
            let mut next = coordinator.clone();
            next.apply_computer_move(&mut SilentCues)?;
            explore(&next, report)?;
        }
    }
    Ok(())
}
