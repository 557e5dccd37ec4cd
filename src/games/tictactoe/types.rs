//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Participant in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Player {
    /// The person at the keyboard (marked "x", moves first).
    Human,
    /// The minimax engine (marked "o").
    Computer,
}

/// Whose move it is. A turn is always held by one of the two players.
pub type Turn = Player;

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Board symbol for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'x',
            Player::Computer => 'o',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at (row, col), or `None` when out of range.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Marks an empty cell for `player`.
    ///
    /// An occupied cell is never overwritten; the call fails and the board
    /// is left untouched.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(player);
        Ok(())
    }

    /// Unchecked placement used by search and board construction.
    pub(crate) fn place(&mut self, pos: Position, player: Player) {
        self.cells[pos.to_index()] = Cell::Occupied(player);
    }

    /// Clears a cell. Only hypothetical search placements are cleared.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.to_index()] = Cell::Empty;
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Empty positions in row-major scan order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(player) => player.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "/")?;
            }
            let c = match cell {
                Cell::Empty => '.',
                Cell::Occupied(player) => player.symbol(),
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Board text could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct ParseBoardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseBoardError {
    /// Creates a new parse error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells of `x`, `o` or `.` in row-major order.
    ///
    /// Row separators (`/`, `|`, whitespace) are ignored, so both
    /// `"xx./oo./..."` and `"xx.oo...."` describe the same board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut filled = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '/' && *c != '|') {
            if filled == 9 {
                return Err(ParseBoardError::new(format!(
                    "Too many cells in {:?} (expected 9)",
                    s
                )));
            }
            let cell = match ch.to_ascii_lowercase() {
                'x' => Cell::Occupied(Player::Human),
                'o' => Cell::Occupied(Player::Computer),
                '.' | '-' | '_' => Cell::Empty,
                other => {
                    return Err(ParseBoardError::new(format!(
                        "Unexpected character {:?} in board",
                        other
                    )));
                }
            };
            board.cells[filled] = cell;
            filled += 1;
        }

        if filled != 9 {
            return Err(ParseBoardError::new(format!(
                "Expected 9 cells, found {}",
                filled
            )));
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_cell_rejects_occupied() {
        let mut board = Board::new();
        board.set_cell(Position::Center, Player::Human).unwrap();

        let err = board.set_cell(Position::Center, Player::Computer).unwrap_err();
        assert_eq!(err, MoveError::SquareOccupied(Position::Center));
        assert_eq!(board.get(Position::Center), Cell::Occupied(Player::Human));
    }

    #[test]
    fn test_parse_with_separators() {
        let board: Board = "xx./oo./...".parse().unwrap();
        assert_eq!(board.get_at(0, 1), Some(Cell::Occupied(Player::Human)));
        assert_eq!(board.get_at(1, 0), Some(Cell::Occupied(Player::Computer)));
        assert_eq!(board.get_at(2, 2), Some(Cell::Empty));
        assert_eq!(board.get_at(3, 0), None);
        assert_eq!(board.to_string(), "xx./oo./...");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("xx./oo./..".parse::<Board>().is_err());
        assert!("xx./oo./....".parse::<Board>().is_err());
        assert!("xz./oo./...".parse::<Board>().is_err());
    }

    #[test]
    fn test_empty_positions_row_major() {
        let board: Board = "x.o/.x./o..".parse().unwrap();
        let empties: Vec<_> = board.empty_positions().collect();
        assert_eq!(
            empties,
            vec![
                Position::TopCenter,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board: Board = "x../.o./...".parse().unwrap();
        assert_eq!(board.display(), "x|2|3\n-+-+-\n4|o|6\n-+-+-\n7|8|9");
    }
}
