//! Exhaustive minimax search for the computer's move.
//!
//! Every legal continuation is explored; there is no pruning, caching or
//! depth weighting. Scores are from the computer's point of view: a line
//! completed by the computer is [`Score::WIN`], one completed by the human
//! is [`Score::LOSS`], and a full board without a line is [`Score::DRAW`].
//!
//! The search mutates a scratch copy of the caller's board in place. Every
//! hypothetical mark goes through a [`Trial`] guard whose `Drop` clears the
//! cell again, so the scratch board is back to its starting contents on
//! every exit path.

use super::{Board, Player, Position, rules};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, trace};

/// Minimax score, computer-positive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub struct Score(pub i8);

impl Score {
    /// The computer completed a line.
    pub const WIN: Score = Score(10);
    /// The human completed a line.
    pub const LOSS: Score = Score(-10);
    /// Full board, no line.
    pub const DRAW: Score = Score(0);

    /// Terminal score for a line completed by `player`.
    pub fn for_winner(player: Player) -> Self {
        match player {
            Player::Computer => Score::WIN,
            Player::Human => Score::LOSS,
        }
    }

    /// True when `self` is strictly preferable to `other` for `mover`.
    fn beats(self, other: Score, mover: Player) -> bool {
        match mover {
            Player::Computer => self > other,
            Player::Human => self < other,
        }
    }
}

/// A hypothetical mark that is removed when the guard is dropped.
struct Trial<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Trial<'a> {
    fn place(board: &'a mut Board, pos: Position, player: Player) -> Self {
        debug_assert!(board.is_empty(pos), "trial placement on occupied {pos}");
        board.place(pos, player);
        Self { board, pos }
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}

/// Scores `board` where `just_moved` produced it and `to_move` moves next.
///
/// Both roles are carried so a completed line is credited to the player
/// whose mark made it, not inferred from whose turn is next.
fn minimax(board: &mut Board, just_moved: Player, to_move: Player) -> Score {
    if let Some(winner) = rules::winner(board) {
        debug_assert_eq!(winner, just_moved, "line credited to the wrong mover");
        return Score::for_winner(just_moved);
    }

    // Terminal draw has to be recognised before generating children.
    if rules::check_draw(board) {
        return Score::DRAW;
    }

    let mut best: Option<Score> = None;
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let score = {
            let mut trial = Trial::place(board, pos, to_move);
            minimax(&mut trial, to_move, to_move.opponent())
        };
        best = match best {
            Some(current) if !score.beats(current, to_move) => Some(current),
            _ => Some(score),
        };
    }

    // Unreachable with the draw check above; kept as bookkeeping only.
    best.unwrap_or(Score::DRAW)
}

fn immediate_win(board: &mut Board, mover: Player) -> Option<Position> {
    Position::ALL.into_iter().find(|&pos| {
        board.is_empty(pos) && {
            let trial = Trial::place(&mut *board, pos, mover);
            rules::winner(&trial) == Some(mover)
        }
    })
}

/// Scores every empty cell as `mover`'s next mark, in row-major order.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(board: &Board, mover: Player) -> Vec<(Position, Score)> {
    let mut scratch = board.clone();
    let scored: Vec<_> = Position::ALL
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .map(|pos| {
            let mut trial = Trial::place(&mut scratch, pos, mover);
            (pos, minimax(&mut trial, mover, mover.opponent()))
        })
        .collect();
    debug_assert_eq!(&scratch, board, "search left marks behind");
    trace!(?scored, "Scored candidate moves");
    scored
}

/// Picks the optimal empty cell for `mover`.
///
/// A mark that completes a line right away is taken first. Otherwise the
/// cell with the best minimax score wins (highest for the computer, lowest
/// for the human), ties going to the first cell in row-major order.
///
/// Returns `None` only when the board has no empty cell; callers are
/// expected to have ruled that out.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, mover: Player) -> Option<Position> {
    let mut scratch = board.clone();
    if let Some(pos) = immediate_win(&mut scratch, mover) {
        debug!(position = %pos, "Taking immediate win");
        return Some(pos);
    }

    let mut best: Option<(Position, Score)> = None;
    for (pos, score) in score_moves(board, mover) {
        match best {
            Some((_, current)) if !score.beats(current, mover) => {}
            _ => best = Some((pos, score)),
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = %pos, %score, "Selected move");
    }
    best.map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    #[test]
    fn test_trial_guard_reverts() {
        let mut board: Board = "x../.../...".parse().unwrap();
        let before = board.clone();
        {
            let trial = Trial::place(&mut board, Position::Center, Player::Computer);
            assert_eq!(trial.get(Position::Center), Cell::Occupied(Player::Computer));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_terminal_scores() {
        let mut won: Board = "ooo/xx./x..".parse().unwrap();
        assert_eq!(minimax(&mut won, Player::Computer, Player::Human), Score::WIN);

        let mut lost: Board = "xxx/oo./o..".parse().unwrap();
        assert_eq!(minimax(&mut lost, Player::Human, Player::Computer), Score::LOSS);

        let mut drawn: Board = "xox/oxx/oxo".parse().unwrap();
        assert_eq!(minimax(&mut drawn, Player::Human, Player::Computer), Score::DRAW);
    }

    #[test]
    fn test_takes_own_win_over_block() {
        let board: Board = "xx./oo./...".parse().unwrap();
        assert_eq!(best_move(&board, Player::Computer), Some(Position::MiddleRight));
    }

    #[test]
    fn test_blocks_human_line() {
        // Human threatens the top row; the computer has no line of its own.
        let board: Board = "xx./.o./...".parse().unwrap();
        assert_eq!(best_move(&board, Player::Computer), Some(Position::TopRight));
    }

    #[test]
    fn test_human_mover_minimises() {
        // The human completes the left column when searching as the human.
        let board: Board = "xo./xo./...".parse().unwrap();
        assert_eq!(best_move(&board, Player::Human), Some(Position::BottomLeft));
    }

    #[test]
    fn test_last_cell_is_only_candidate() {
        let board: Board = "xox/oxx/ox.".parse().unwrap();
        let scored = score_moves(&board, Player::Computer);
        assert_eq!(scored.len(), 1);
        assert_eq!(best_move(&board, Player::Computer), Some(Position::BottomRight));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "xox/oxx/oxo".parse().unwrap();
        assert_eq!(best_move(&board, Player::Computer), None);
    }
}
