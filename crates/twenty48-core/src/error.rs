//! Errors raised by board operations.

use crate::TileId;

/// Errors that can occur when building or mutating a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// A spawn was requested on a board with no empty cell.
    #[display("no empty cell to spawn a tile into")]
    NoEmptyCell,
    /// The board size is zero.
    #[display("invalid board size: {size}")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// A tile value is neither zero nor a power of two.
    #[display("invalid tile value: {value}")]
    InvalidValue {
        /// The rejected value.
        value: u32,
    },
    /// A tile's id does not fit its value: an empty cell with an id, or a
    /// non-empty tile without one.
    #[display("tile {id} cannot hold value {value}")]
    InvalidTileId {
        /// The offending id.
        id: TileId,
        /// The value of the tile.
        value: u32,
    },
    /// Two non-empty tiles share an id.
    #[display("duplicate tile id {id}")]
    DuplicateTileId {
        /// The repeated id.
        id: TileId,
    },
    /// The number of cells does not match the board size.
    #[display("expected {expected} cells, found {actual}")]
    CellCountMismatch {
        /// `size * size`.
        expected: usize,
        /// The number of cells supplied.
        actual: usize,
    },
}
