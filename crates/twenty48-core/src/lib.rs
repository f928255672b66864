//! Rules engine for a sliding-tile merge puzzle played on a square grid.
//!
//! This crate holds the pure board logic used by the game facade: tile
//! compaction and merging along a line, whole-board shifts, empty-cell
//! queries, and tile spawning. It keeps no history; every operation takes a
//! board and returns a new one.
//!
//! # Overview
//!
//! 1. **Core types**
//!    - [`tile`]: [`Tile`] values with stable [`TileId`]s, and the
//!      [`TileIdAllocator`] that hands out fresh ids
//!    - [`position`]: zero-based `(row, column)` coordinates
//!    - [`direction`]: the four shift directions and their [`Polarity`]
//!
//! 2. **Engine**
//!    - [`line`]: [`compress`], the single-line slide-and-merge step
//!    - [`board`]: [`Board`] and its whole-board operations
//!    - [`spawn`]: the [`SpawnPicker`] capability and its seeded
//!      [`RandomPicker`] implementation
//!
//! # Examples
//!
//! ```
//! use twenty48_core::{Board, Direction, TileIdAllocator};
//!
//! let mut ids = TileIdAllocator::new();
//! let board = Board::from_rows(&[[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]], &mut ids).unwrap();
//!
//! let shifted = board.shift(Direction::Left, &mut ids);
//! assert!(shifted.changed);
//! assert_eq!(shifted.score_delta, 4);
//! assert_eq!(shifted.board.row_values(0), vec![4, 4, 0, 0]);
//! ```

pub mod board;
pub mod direction;
pub mod error;
pub mod line;
pub mod position;
pub mod spawn;
pub mod tile;

pub use self::{
    board::{Board, ShiftOutcome},
    direction::{Direction, Polarity},
    error::EngineError,
    line::{Compressed, compress},
    position::Position,
    spawn::{RandomPicker, SpawnPicker},
    tile::{Tile, TileId, TileIdAllocator},
};
