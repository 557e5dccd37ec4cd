//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use tracing::instrument;

/// The 8 lines whose uniform occupancy wins the game.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

fn owner([a, b, c]: [Position; 3], board: &Board) -> Option<Player> {
    let cell = board.get(a);
    if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
        cell.player()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the owner of the first complete line,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| owner(line, board))
}

/// True iff any line holds three identical non-empty cells.
pub fn check_win(board: &Board) -> bool {
    winner(board).is_some()
}

/// Every player that owns at least one complete line.
///
/// Legal play never produces more than one.
pub fn line_owners(board: &Board) -> Vec<Player> {
    let mut owners = Vec::new();
    for line in LINES {
        if let Some(player) = owner(line, board)
            && !owners.contains(&player)
        {
            owners.push(player);
        }
    }
    owners
}
