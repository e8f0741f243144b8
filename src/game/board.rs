use std::fmt;

use serde::{Deserialize, Serialize};

use super::line::{Direction, Line};
use crate::error::BoardError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Number of contiguous same-colored cells that wins the game.
pub const LINE_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Color {
    pub fn is_empty(self) -> bool {
        self == Color::Empty
    }

    /// Default single-character symbol used by `Display`.
    pub fn symbol(self) -> char {
        match self {
            Color::Empty => '.',
            Color::PlayerA => 'X',
            Color::PlayerB => 'O',
        }
    }
}

/// A 7x6 Connect Four grid.
///
/// Row 0 is the bottom row and column 0 the leftmost column. Cells only ever
/// go from `Empty` to a player color; nothing is removed until [`reset`].
/// Every query re-scans the whole grid and never mutates it.
///
/// [`reset`]: BoardState::reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BoardSnapshot", try_from = "BoardSnapshot")]
pub struct BoardState {
    cells: [Color; ROWS * COLS],
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Color::Empty; ROWS * COLS],
        }
    }

    /// Clear every cell for a new game
    pub fn reset(&mut self) {
        self.cells = [Color::Empty; ROWS * COLS];
    }

    fn offset(row: usize, column: usize) -> usize {
        row * COLS + column
    }

    fn index(row: usize, column: usize) -> Result<usize, BoardError> {
        if row >= ROWS || column >= COLS {
            return Err(BoardError::OutOfBounds { row, column });
        }
        Ok(Self::offset(row, column))
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, column: usize) -> Result<Color, BoardError> {
        Ok(self.cells[Self::index(row, column)?])
    }

    /// Place a piece on an empty cell.
    ///
    /// Fails when the position is off the board, when `color` is `Empty`, or
    /// when the cell already holds a piece.
    pub fn set_cell(&mut self, row: usize, column: usize, color: Color) -> Result<(), BoardError> {
        let idx = Self::index(row, column)?;
        if color.is_empty() {
            return Err(BoardError::EmptyColor);
        }
        let current = self.cells[idx];
        if !current.is_empty() {
            return Err(BoardError::CellOccupied {
                row,
                column,
                color: current,
            });
        }
        self.cells[idx] = color;
        Ok(())
    }

    /// Check if a column has no empty cell left
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        (0..ROWS).all(|row| !self.cells[Self::offset(row, column)].is_empty())
    }

    /// Columns that can still take a piece, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, column: usize, color: Color) -> Result<usize, BoardError> {
        if column >= COLS {
            return Err(BoardError::InvalidColumn(column));
        }
        if color.is_empty() {
            return Err(BoardError::EmptyColor);
        }

        // Lowest empty row in this column
        let row = (0..ROWS)
            .find(|&row| self.cells[Self::offset(row, column)].is_empty())
            .ok_or(BoardError::ColumnFull(column))?;

        self.set_cell(row, column, color)?;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// The line of `direction` starting at `start`, if all four cells share
    /// one non-empty color. `start` must come from `Direction::starts`.
    fn line_at(&self, start: (usize, usize), direction: Direction) -> Option<Line> {
        let color = self.cells[Self::offset(start.0, start.1)];
        if color.is_empty() {
            return None;
        }
        let line = Line {
            color,
            direction,
            start,
        };
        line.cells()
            .iter()
            .all(|&(row, column)| self.cells[Self::offset(row, column)] == color)
            .then_some(line)
    }

    /// First line found in `direction`, in scan order.
    pub fn scan(&self, direction: Direction) -> Option<Line> {
        direction
            .starts()
            .find_map(|start| self.line_at(start, direction))
    }

    /// Color of the first horizontal run of four (rows bottom to top), then
    /// of the first vertical run (columns left to right). `Empty` if none.
    pub fn get_in_a_row_same_color_of_four(&self) -> Color {
        self.scan(Direction::Horizontal)
            .or_else(|| self.scan(Direction::Vertical))
            .map_or(Color::Empty, |line| line.color)
    }

    /// Color of the first forward (`/`) diagonal run of four when `forward`
    /// is true, otherwise of the first backward (`\`) one. `Empty` if none.
    pub fn get_diagonal_same_color_of_four(&self, forward: bool) -> Color {
        let direction = if forward {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.scan(direction).map_or(Color::Empty, |line| line.color)
    }

    /// First winning line, checking horizontal, vertical, forward and
    /// backward runs in that order.
    pub fn winning_line(&self) -> Option<Line> {
        Direction::ALL
            .into_iter()
            .find_map(|direction| self.scan(direction))
    }

    /// Winning color, or `Empty` when nobody has four in a row.
    pub fn is_won(&self) -> Color {
        self.winning_line().map_or(Color::Empty, |line| line.color)
    }

    /// Check whether the piece at (row, column) is part of a four-in-a-row.
    ///
    /// Only the four lines through that cell are inspected. After a legal
    /// move this agrees with [`is_won`](Self::is_won).
    pub fn wins_through(&self, row: usize, column: usize) -> Color {
        let color = match self.get(row, column) {
            Ok(color) if !color.is_empty() => color,
            _ => return Color::Empty,
        };

        let won = Direction::ALL.into_iter().any(|direction| {
            let (dr, dc) = direction.step();
            let count = 1
                + self.count_from(row, column, dr, dc, color)
                + self.count_from(row, column, -dr, -dc, color);
            count >= LINE_LEN
        });

        if won {
            color
        } else {
            Color::Empty
        }
    }

    /// Count same-colored cells walking away from (row, column), exclusive.
    fn count_from(&self, row: usize, column: usize, dr: isize, dc: isize, color: Color) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = column as isize + dc;
        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.cells[Self::offset(r as usize, c as usize)] == color
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Render the grid top row first, one line per row.
    pub fn render(&self, symbol: impl Fn(Color) -> char) -> String {
        let mut out = String::with_capacity(ROWS * (COLS * 2 + 1));
        for row in (0..ROWS).rev() {
            for column in 0..COLS {
                if column > 0 {
                    out.push(' ');
                }
                out.push(symbol(self.cells[Self::offset(row, column)]));
            }
            out.push('\n');
        }
        out
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Color::symbol))
    }
}

/// Serialized form of a board: rows from the bottom up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: Vec<Vec<Color>>,
}

impl From<BoardState> for BoardSnapshot {
    fn from(board: BoardState) -> Self {
        BoardSnapshot {
            rows: board.cells.chunks(COLS).map(<[Color]>::to_vec).collect(),
        }
    }
}

impl TryFrom<BoardSnapshot> for BoardState {
    type Error = BoardError;

    /// Gravity is not checked, so hand-built positions load as-is.
    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let bad_row = snapshot.rows.iter().find(|row| row.len() != COLS);
        if snapshot.rows.len() != ROWS || bad_row.is_some() {
            return Err(BoardError::Dimensions {
                rows: snapshot.rows.len(),
                columns: bad_row.map_or(COLS, Vec::len),
            });
        }

        let mut board = BoardState::new();
        for (row, cells) in snapshot.rows.iter().enumerate() {
            board.cells[Self::offset(row, 0)..Self::offset(row, COLS)].copy_from_slice(cells);
        }
        Ok(board)
    }
}
