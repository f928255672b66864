//! Board position coordinates.

use serde::{Deserialize, Serialize};

/// A zero-based `(row, column)` coordinate on the board.
///
/// Rows grow downwards and columns grow rightwards. A position carries no
/// board size; [`Board::contains`](crate::Board::contains) checks bounds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (0 is the top row).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0 is the leftmost column).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns all positions of a `size`×`size` board in row-major order.
    pub fn all(size: usize) -> impl Iterator<Item = Self> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Self::new(row, col)))
    }
}
