//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::check_win;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// True iff every cell is occupied and no line is complete.
#[instrument(level = "trace")]
pub fn check_draw(board: &Board) -> bool {
    is_full(board) && !check_win(board)
}
