//! Terminal bell cue output.

use std::io::Write;
use tictactoe_ai::{Cue, CueSink};
use tracing::{debug, warn};

/// Rings the terminal bell for each cue and remembers the last one.
#[derive(Debug, Clone, Default)]
pub struct Bell {
    enabled: bool,
    last: Option<Cue>,
}

impl Bell {
    /// Creates a bell; when `enabled` is false cues are only recorded.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last: None,
        }
    }

    /// Most recent cue, for the status bar.
    pub fn last(&self) -> Option<Cue> {
        self.last
    }

    /// Forgets the last cue.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl CueSink for Bell {
    fn play(&mut self, cue: Cue) {
        debug!(%cue, enabled = self.enabled, "Cue");
        self.last = Some(cue);
        if !self.enabled {
            return;
        }
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            warn!(error = %e, "Failed to ring bell");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_bell_records_cue() {
        let mut bell = Bell::new(false);
        bell.play(Cue::HumanMoved);
        bell.play(Cue::Draw);
        assert_eq!(bell.last(), Some(Cue::Draw));
        bell.reset();
        assert_eq!(bell.last(), None);
    }
}
