//! Shift directions.

use serde::{Deserialize, Serialize};

/// The direction tiles slide in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Direction {
    /// Slide towards row 0.
    #[display("up")]
    Up,
    /// Slide towards the last row.
    #[display("down")]
    Down,
    /// Slide towards column 0.
    #[display("left")]
    Left,
    /// Slide towards the last column.
    #[display("right")]
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns `true` if the direction moves tiles along rows.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Returns which end of a line tiles are packed against.
    ///
    /// Lines are read in row-major order for rows and top-to-bottom for
    /// columns, so `Left` and `Up` pack towards the start of the line.
    #[must_use]
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Up | Self::Left => Polarity::TowardStart,
            Self::Down | Self::Right => Polarity::TowardEnd,
        }
    }
}

/// The end of a line that compaction packs tiles against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Polarity {
    /// Tiles end up at index 0 onwards.
    TowardStart,
    /// Tiles end up at the last index backwards.
    TowardEnd,
}
