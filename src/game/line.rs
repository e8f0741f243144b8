use std::ops::Range;

use serde::Serialize;

use super::board::{Color, COLS, LINE_LEN, ROWS};

/// Orientation of a four-in-a-row.
///
/// Row 0 is the bottom of the board, so `Forward` climbs to the right (`/`)
/// and `Backward` descends to the right (`\`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
    Forward,
    Backward,
}

impl Direction {
    /// All directions in win-check precedence order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Forward,
        Direction::Backward,
    ];

    /// (row, column) offset between consecutive cells of a line.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Forward => (1, 1),
            Direction::Backward => (-1, 1),
        }
    }

    fn start_rows(self) -> Range<usize> {
        match self {
            Direction::Horizontal => 0..ROWS,
            Direction::Vertical | Direction::Forward => 0..ROWS - LINE_LEN + 1,
            Direction::Backward => LINE_LEN - 1..ROWS,
        }
    }

    fn start_columns(self) -> Range<usize> {
        match self {
            Direction::Vertical => 0..COLS,
            _ => 0..COLS - LINE_LEN + 1,
        }
    }

    /// Every starting cell whose line stays on the board.
    ///
    /// Vertical lines are visited column by column (bottom to top), the
    /// others row by row (left to right).
    pub(crate) fn starts(self) -> impl Iterator<Item = (usize, usize)> {
        let column_major = self == Direction::Vertical;
        let (outer, inner) = if column_major {
            (self.start_columns(), self.start_rows())
        } else {
            (self.start_rows(), self.start_columns())
        };

        outer.flat_map(move |o| {
            inner
                .clone()
                .map(move |i| if column_major { (i, o) } else { (o, i) })
        })
    }
}

/// A completed four-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line {
    pub color: Color,
    pub direction: Direction,
    /// (row, column) of the first cell.
    pub start: (usize, usize),
}

impl Line {
    /// The four (row, column) cells making up this line.
    pub fn cells(&self) -> [(usize, usize); LINE_LEN] {
        let (dr, dc) = self.direction.step();
        let (row, column) = self.start;
        std::array::from_fn(|i| {
            let i = i as isize;
            (
                (row as isize + dr * i) as usize,
                (column as isize + dc * i) as usize,
            )
        })
    }
}
