//! Turn coordination for human vs. computer play.
//!
//! The coordinator is a small state machine over [`Phase`]:
//!
//! - `AwaitingHuman` + legal human move → `Terminal(HumanWin)`,
//!   `Terminal(Draw)` or `AwaitingComputer`
//! - `AwaitingComputer` + engine move → `Terminal(ComputerWin)`,
//!   `Terminal(Draw)` or `AwaitingHuman`
//! - `AwaitingHuman` + idle timeout → the engine moves, the human keeps the turn
//! - any phase + restart → `AwaitingHuman` with an empty board
//!
//! Moves attempted out of turn or after the game ended are rejected
//! without touching the session.

use super::action::{Move, MoveError};
use super::contracts::LegalMove;
use super::cues::{Cue, CueLedger, CueSink};
#[cfg(debug_assertions)]
use super::invariants::{InvariantSet, SessionInvariants};
use super::{GameResult, GameSession, Phase, Player, Position, engine};
use tracing::{debug, error, info, instrument};

/// Owns the game session and drives it through its phases.
#[derive(Debug, Clone, Default)]
pub struct TurnCoordinator {
    session: GameSession,
    cues: CueLedger,
}

impl TurnCoordinator {
    /// Creates a coordinator with a fresh session, waiting for the human.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Result derived from the board.
    pub fn result(&self) -> GameResult {
        self.session.result()
    }

    /// Returns the one-shot cue markers.
    pub fn cues(&self) -> &CueLedger {
        &self.cues
    }

    /// Text for the status bar.
    pub fn status_line(&self) -> String {
        self.phase().to_string()
    }

    /// Applies the human's mark at `pos`.
    #[instrument(skip(self, sink))]
    pub fn apply_human_move(
        &mut self,
        pos: Position,
        sink: &mut dyn CueSink,
    ) -> Result<Phase, MoveError> {
        let mv = Move::new(Player::Human, pos);
        LegalMove::check(&mv, &self.session)?;
        self.commit(mv, Player::Computer, sink)
    }

    /// Applies the human's mark at a resolved `(row, col)` grid cell.
    ///
    /// An off-board pair is rejected with `OutOfBounds` like any other
    /// illegal move and leaves the session untouched.
    #[instrument(skip(self, sink))]
    pub fn apply_human_move_at(
        &mut self,
        row: usize,
        col: usize,
        sink: &mut dyn CueSink,
    ) -> Result<Phase, MoveError> {
        let pos = Position::try_from((row, col))?;
        self.apply_human_move(pos, sink)
    }

    /// Lets the engine take its regular turn.
    ///
    /// Returns the cell the engine marked.
    #[instrument(skip(self, sink))]
    pub fn apply_computer_move(&mut self, sink: &mut dyn CueSink) -> Result<Position, MoveError> {
        match self.phase() {
            Phase::AwaitingComputer => {}
            Phase::Terminal(_) => return Err(MoveError::GameOver),
            Phase::AwaitingHuman => return Err(MoveError::WrongTurn(Player::Computer)),
        }
        let pos = self.engine_pick()?;
        self.commit(Move::new(Player::Computer, pos), Player::Human, sink)?;
        Ok(pos)
    }

    /// Moves for the computer because the human let the idle timer run out.
    ///
    /// Only valid while waiting for the human. If the game goes on, the
    /// human keeps the turn.
    #[instrument(skip(self, sink))]
    pub fn force_computer_move(&mut self, sink: &mut dyn CueSink) -> Result<Position, MoveError> {
        match self.phase() {
            Phase::AwaitingHuman => {}
            Phase::Terminal(_) => return Err(MoveError::GameOver),
            Phase::AwaitingComputer => return Err(MoveError::WrongTurn(Player::Computer)),
        }
        let pos = self.engine_pick()?;
        info!(position = %pos, "Human idle, computer moves");
        self.commit(Move::new(Player::Computer, pos), Player::Human, sink)?;
        Ok(pos)
    }

    /// Resets the board, hands the turn to the human and re-arms outcome cues.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(previous = ?self.phase(), "Restarting game");
        self.session.reset();
        self.cues.clear();
    }

    fn engine_pick(&self) -> Result<Position, MoveError> {
        engine::best_move(self.session.board(), Player::Computer).ok_or_else(|| {
            error!(board = %self.session.board(), "Engine invoked without an empty cell");
            MoveError::InvariantViolation("engine invoked on a full board".to_string())
        })
    }

    /// Applies a move that already passed its entry point's gate and
    /// advances the phase.
    ///
    /// Human moves are gated by `LegalMove`; engine moves by the phase
    /// match, and the engine only ever picks empty cells.
    fn commit(
        &mut self,
        mv: Move,
        next_turn: Player,
        sink: &mut dyn CueSink,
    ) -> Result<Phase, MoveError> {
        self.session.apply(mv);
        self.cues.notify(Cue::for_move(mv.player), sink);

        let result = self.session.result();
        match Cue::for_result(result) {
            Some(cue) => {
                self.session.mark_terminal();
                self.cues.notify(cue, sink);
                info!(?result, "Game over");
            }
            None => self.session.set_turn(next_turn),
        }

        #[cfg(debug_assertions)]
        self.verify()?;

        let phase = self.phase();
        debug!(%mv, ?phase, "Move applied");
        Ok(phase)
    }

    #[cfg(debug_assertions)]
    fn verify(&self) -> Result<(), MoveError> {
        SessionInvariants::check_all(&self.session).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            error!(%descriptions, "Session invariant violated");
            MoveError::InvariantViolation(descriptions)
        })
    }
}
