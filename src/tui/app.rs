//! Application state and key handling.

use super::bell::Bell;
use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tictactoe_ai::{GameConfig, IdleTimer, MoveError, Phase, Position, TurnCoordinator};
use tracing::{debug, info, instrument};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    coordinator: TurnCoordinator,
    cursor: Position,
    idle: IdleTimer,
    forced_move: bool,
    bell: Bell,
}

impl App {
    /// Creates a new application with the idle timer armed at `now`.
    pub fn new(config: &GameConfig, now: Instant) -> Self {
        Self {
            coordinator: TurnCoordinator::new(),
            cursor: Position::Center,
            idle: IdleTimer::new(config.idle_window(), now),
            forced_move: config.forced_move(),
            bell: Bell::new(config.audio_cues()),
        }
    }

    /// Gets the coordinator.
    pub fn coordinator(&self) -> &TurnCoordinator {
        &self.coordinator
    }

    /// Gets the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the bell.
    pub fn bell(&self) -> &Bell {
        &self.bell
    }

    /// Instant the computer will move for an idle human, if the rule applies now.
    pub fn idle_deadline(&self) -> Option<Instant> {
        (self.forced_move && self.coordinator.phase() == Phase::AwaitingHuman)
            .then(|| self.idle.deadline())
    }

    /// Time left on the idle countdown, if it is running.
    pub fn idle_remaining(&self, now: Instant) -> Option<Duration> {
        self.idle_deadline().map(|_| self.idle.remaining(now))
    }

    /// Handles a key press.
    ///
    /// Illegal moves are dropped. Only a broken coordinator contract is
    /// returned as an error.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> Result<Control, MoveError> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Control::Quit),
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(now),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.select(pos, now)?;
                }
            }
            KeyCode::Enter => self.select(self.cursor, now)?,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        Ok(Control::Continue)
    }

    /// Handles a click resolved to grid cell `(row, col)`.
    pub fn click(&mut self, row: usize, col: usize, now: Instant) -> Result<(), MoveError> {
        if let Some(pos) = Position::from_coords(row, col) {
            self.cursor = pos;
        }
        let placed = self.coordinator.apply_human_move_at(row, col, &mut self.bell);
        self.reply(placed, now)
    }

    fn select(&mut self, pos: Position, now: Instant) -> Result<(), MoveError> {
        let placed = self.coordinator.apply_human_move(pos, &mut self.bell);
        self.reply(placed, now)
    }

    /// Lets the computer answer a human move, dropping illegal ones.
    fn reply(&mut self, placed: Result<Phase, MoveError>, now: Instant) -> Result<(), MoveError> {
        match placed {
            Ok(Phase::AwaitingComputer) => {
                self.coordinator.apply_computer_move(&mut self.bell)?;
            }
            Ok(_) => {}
            Err(e) if e.is_illegal_move() => {
                debug!(error = %e, "Ignoring illegal move");
                return Ok(());
            }
            Err(e) => return Err(e),
        }
        self.idle.rearm(now);
        Ok(())
    }

    /// Called when the idle deadline passes.
    #[instrument(skip(self))]
    pub fn on_idle(&mut self, now: Instant) -> Result<(), MoveError> {
        if self.idle_deadline().is_none() {
            return Ok(());
        }
        let pos = self.coordinator.force_computer_move(&mut self.bell)?;
        info!(position = %pos, "Idle timeout elapsed");
        self.idle.rearm(now);
        Ok(())
    }

    /// Starts a new game.
    pub fn restart(&mut self, now: Instant) {
        self.coordinator.restart();
        self.bell.reset();
        self.cursor = Position::Center;
        self.idle.rearm(now);
    }
}
