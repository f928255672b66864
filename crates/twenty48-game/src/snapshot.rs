use serde::{Deserialize, Serialize};
use twenty48_core::{Board, Position};

/// The state of a game at one point in its history.
///
/// A snapshot is immutable once built: board, cumulative score, and the
/// positions of the tiles spawned by the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    score: u64,
    new_positions: Vec<Position>,
}

impl Snapshot {
    /// Creates a snapshot.
    #[must_use]
    pub fn new(board: Board, score: u64, new_positions: Vec<Position>) -> Self {
        Self {
            board,
            score,
            new_positions,
        }
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cumulative score.
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Returns the positions of the freshly spawned tiles.
    #[must_use]
    pub fn new_positions(&self) -> &[Position] {
        &self.new_positions
    }

    /// Returns `true` if the tile at `pos` was just spawned.
    #[must_use]
    pub fn is_new(&self, pos: Position) -> bool {
        self.new_positions.contains(&pos)
    }
}
