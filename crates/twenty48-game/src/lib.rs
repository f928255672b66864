//! Game session management with linear undo/redo.
//!
//! [`Game`] is the player-facing facade: it starts games with two opening
//! tiles, turns a direction into a shift-spawn-record step, and navigates the
//! history. History is kept in a [`Timeline`] of immutable [`Snapshot`]s; a
//! fresh move after an undo discards the undone snapshots.
//!
//! Routine situations such as a move that shifts nothing or an undo with no
//! earlier snapshot are reported as plain results, not errors. [`GameError`]
//! is reserved for invalid settings and broken invariants.
//!
//! # Example
//!
//! ```
//! use twenty48_core::{Direction, RandomPicker};
//! use twenty48_game::{Game, GameConfig, MoveOutcome};
//!
//! let mut game = Game::new(GameConfig::default(), RandomPicker::from_seed(1)).unwrap();
//! let opening = game.snapshot().clone();
//!
//! let mut moves = 0;
//! for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     if let MoveOutcome::Moved { .. } = game.make_move(direction).unwrap() {
//!         moves += 1;
//!     }
//! }
//!
//! for _ in 0..moves {
//!     assert!(game.undo());
//! }
//! assert_eq!(game.snapshot(), &opening);
//! ```

pub use self::{
    config::GameConfig,
    error::{GameError, HistoryError},
    game::{Game, MoveOutcome},
    snapshot::Snapshot,
    timeline::Timeline,
};

mod config;
mod error;
mod game;
mod snapshot;
mod timeline;
