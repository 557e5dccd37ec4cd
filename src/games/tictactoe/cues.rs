//! Audio cue notifications.
//!
//! The core decides *when* a cue fires; what a cue sounds like is the
//! presentation layer's business. Move cues fire on every move. Outcome
//! cues fire once per finished game and stay silent until a restart, no
//! matter how often the finished state is looked at.

use super::{GameResult, Player};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// A one-shot notification for the audio layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Cue {
    /// The human placed a mark.
    HumanMoved,
    /// The computer placed a mark.
    ComputerMoved,
    /// The human completed a line.
    HumanWon,
    /// The computer completed a line.
    ComputerWon,
    /// The board filled up without a line.
    Draw,
}

impl Cue {
    /// Cue announcing a mark placed by `player`.
    pub fn for_move(player: Player) -> Self {
        match player {
            Player::Human => Cue::HumanMoved,
            Player::Computer => Cue::ComputerMoved,
        }
    }

    /// Cue announcing a finished game, `None` while it is in progress.
    pub fn for_result(result: GameResult) -> Option<Self> {
        match result {
            GameResult::InProgress => None,
            GameResult::HumanWin => Some(Cue::HumanWon),
            GameResult::ComputerWin => Some(Cue::ComputerWon),
            GameResult::Draw => Some(Cue::Draw),
        }
    }

    /// Outcome cues fire at most once between restarts.
    pub fn is_one_shot(self) -> bool {
        matches!(self, Cue::HumanWon | Cue::ComputerWon | Cue::Draw)
    }
}

/// Receiver of cue notifications.
pub trait CueSink {
    /// Plays (or records) a cue.
    fn play(&mut self, cue: Cue);
}

/// Records cues in order.
impl CueSink for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCues;

impl CueSink for SilentCues {
    fn play(&mut self, _cue: Cue) {}
}

/// Markers for one-shot cues that already fired, cleared on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CueLedger {
    notified: HashSet<Cue>,
}

impl CueLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forwards `cue` to `sink` unless it is a one-shot cue that already fired.
    ///
    /// Returns whether the cue was played.
    #[instrument(skip(self, sink))]
    pub fn notify(&mut self, cue: Cue, sink: &mut dyn CueSink) -> bool {
        if cue.is_one_shot() && !self.notified.insert(cue) {
            debug!("Cue already played, suppressing");
            return false;
        }
        sink.play(cue);
        true
    }

    /// Whether a one-shot cue has fired since the last restart.
    pub fn has_fired(&self, cue: Cue) -> bool {
        self.notified.contains(&cue)
    }

    /// Forgets every marker.
    pub fn clear(&mut self) {
        self.notified.clear();
    }
}
