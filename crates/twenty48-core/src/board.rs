//! Square board of tiles and its whole-board operations.

use std::{
    collections::HashSet,
    fmt::{self, Display},
    ops::Index,
};

use serde::{Deserialize, Serialize};

use crate::{
    Direction, EngineError, Position, SpawnPicker, Tile, TileId, TileIdAllocator,
    line::{can_compress, compress},
};

/// An N×N row-major grid of tiles.
///
/// The size is fixed at construction. Every cell holds exactly one [`Tile`],
/// possibly [`Tile::EMPTY`]. Operations never mutate a board in place; they
/// return a new one.
///
/// # Examples
///
/// ```
/// use twenty48_core::{Board, Position, TileIdAllocator};
///
/// let mut ids = TileIdAllocator::new();
/// let board = Board::from_rows(&[[2, 0], [0, 4]], &mut ids).unwrap();
///
/// assert_eq!(board.size(), 2);
/// assert_eq!(board[Position::new(1, 1)].value(), 4);
/// assert_eq!(board.empty_positions(), vec![Position::new(0, 1), Position::new(1, 0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
}

#[derive(Deserialize)]
struct BoardParts {
    size: usize,
    tiles: Vec<Tile>,
}

impl TryFrom<BoardParts> for Board {
    type Error = EngineError;

    fn try_from(parts: BoardParts) -> Result<Self, Self::Error> {
        let BoardParts { size, tiles } = parts;
        if size == 0 {
            return Err(EngineError::InvalidSize { size });
        }
        let expected = size * size;
        if tiles.len() != expected {
            return Err(EngineError::CellCountMismatch {
                expected,
                actual: tiles.len(),
            });
        }

        let mut seen = HashSet::new();
        for tile in &tiles {
            let (id, value) = (tile.id(), tile.value());
            if !Tile::is_valid_value(value) {
                return Err(EngineError::InvalidValue { value });
            }
            if tile.is_empty() != id.is_none() {
                return Err(EngineError::InvalidTileId { id, value });
            }
            if !tile.is_empty() && !seen.insert(id) {
                return Err(EngineError::DuplicateTileId { id });
            }
        }
        Ok(Self { size, tiles })
    }
}

/// The result of shifting a whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftOutcome {
    /// The board after every line was compressed.
    pub board: Board,
    /// Sum of the values produced by merges in this shift.
    pub score_delta: u64,
    /// Whether any cell value changed. Identity changes alone do not count.
    pub changed: bool,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::InvalidSize { size });
        }
        Ok(Self {
            size,
            tiles: vec![Tile::EMPTY; size * size],
        })
    }

    /// Creates a board from rows of values, allocating an id for every
    /// non-empty cell. `0` marks an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSize`] if there are no rows,
    /// [`EngineError::CellCountMismatch`] if the rows do not form a square, and
    /// [`EngineError::InvalidValue`] for a value that is neither zero nor a
    /// power of two.
    pub fn from_rows<const N: usize>(
        rows: &[[u32; N]],
        ids: &mut TileIdAllocator,
    ) -> Result<Self, EngineError> {
        let mut board = Self::new(rows.len())?;
        if N != board.size {
            return Err(EngineError::CellCountMismatch {
                expected: board.tiles.len(),
                actual: rows.len() * N,
            });
        }
        for (cell, &value) in board
            .tiles
            .iter_mut()
            .zip(rows.iter().flatten())
        {
            *cell = match value {
                0 => Tile::EMPTY,
                value if Tile::is_valid_value(value) => Tile::new(ids.allocate(), value),
                value => return Err(EngineError::InvalidValue { value }),
            };
        }
        Ok(board)
    }

    /// Returns the side length of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row() < self.size && pos.col() < self.size
    }

    /// Returns the tile at `pos`, or `None` if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.contains(pos)
            .then(|| self.tiles[self.offset(pos.row(), pos.col())])
    }

    /// Returns the tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns an iterator over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.size)
    }

    /// Returns the values of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than the board size.
    #[must_use]
    pub fn row_values(&self, row: usize) -> Vec<u32> {
        assert!(row < self.size, "Row out of range: {row}");
        self.tiles[self.offset(row, 0)..self.offset(row + 1, 0)]
            .iter()
            .map(|tile| tile.value())
            .collect()
    }

    /// Returns all cell values in row-major order.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.tiles.iter().map(|tile| tile.value()).collect()
    }

    /// Returns the sum of all cell values.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.tiles.iter().map(|tile| u64::from(tile.value())).sum()
    }

    /// Returns the highest tile value, `0` for an empty board.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.tiles.iter().map(|tile| tile.value()).max().unwrap_or(0)
    }

    /// Returns the highest tile id on the board, [`TileId::NONE`] if empty.
    #[must_use]
    pub fn max_id(&self) -> TileId {
        self.tiles
            .iter()
            .map(|tile| tile.id())
            .max()
            .unwrap_or(TileId::NONE)
    }

    /// Returns every empty position in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all(self.size)
            .zip(&self.tiles)
            .filter(|(_, tile)| tile.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Slides every row or column in `direction`, merging equal neighbours.
    ///
    /// Left and right shifts compress each row; up and down shifts compress
    /// each column. Merged tiles take fresh ids from `ids`.
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_core::{Board, Direction, TileIdAllocator};
    ///
    /// let mut ids = TileIdAllocator::new();
    /// let board = Board::from_rows(&[[2, 0], [2, 0]], &mut ids).unwrap();
    ///
    /// let up = board.shift(Direction::Up, &mut ids);
    /// assert_eq!(up.board.values(), vec![4, 0, 0, 0]);
    /// assert_eq!(up.score_delta, 4);
    ///
    /// let left = board.shift(Direction::Left, &mut ids);
    /// assert!(!left.changed);
    /// ```
    #[must_use]
    pub fn shift(&self, direction: Direction, ids: &mut TileIdAllocator) -> ShiftOutcome {
        let mut board = self.clone();
        let mut score_delta = 0;
        for index in 0..self.size {
            let line = self.line(direction, index);
            let compressed = compress(&line, direction.polarity(), ids);
            board.set_line(direction, index, &compressed.tiles);
            score_delta += compressed.score;
        }
        let changed = board.values() != self.values();
        ShiftOutcome {
            board,
            score_delta,
            changed,
        }
    }

    /// Returns `true` if shifting in `direction` would change any value.
    #[must_use]
    pub fn can_shift(&self, direction: Direction) -> bool {
        (0..self.size).any(|index| {
            let line = self.line(direction, index);
            let values = line.iter().map(|tile| tile.value());
            if direction.polarity().is_toward_start() {
                can_compress(values)
            } else {
                can_compress(values.rev())
            }
        })
    }

    /// Places a tile of `value` on an empty cell chosen by `picker`.
    ///
    /// Returns the new board together with the position of the spawned tile.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoEmptyCell`] if the board is full, and
    /// [`EngineError::InvalidValue`] if `value` is not a power of two.
    pub fn spawn_tile<P>(
        &self,
        picker: &mut P,
        ids: &mut TileIdAllocator,
        value: u32,
    ) -> Result<(Self, Position), EngineError>
    where
        P: SpawnPicker + ?Sized,
    {
        if !value.is_power_of_two() {
            return Err(EngineError::InvalidValue { value });
        }
        let candidates = self.empty_positions();
        if candidates.is_empty() {
            return Err(EngineError::NoEmptyCell);
        }
        let pos = picker.pick_one(&candidates);
        debug_assert!(candidates.contains(&pos), "picked a non-empty cell {pos}");

        let mut board = self.clone();
        let offset = board.offset(pos.row(), pos.col());
        board.tiles[offset] = Tile::new(ids.allocate(), value);
        Ok((board, pos))
    }

    const fn offset(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn line_offset(&self, direction: Direction, index: usize, i: usize) -> usize {
        if direction.is_horizontal() {
            self.offset(index, i)
        } else {
            self.offset(i, index)
        }
    }

    fn line(&self, direction: Direction, index: usize) -> Vec<Tile> {
        (0..self.size)
            .map(|i| self.tiles[self.line_offset(direction, index, i)])
            .collect()
    }

    fn set_line(&mut self, direction: Direction, index: usize, tiles: &[Tile]) {
        for (i, tile) in tiles.iter().enumerate() {
            let offset = self.line_offset(direction, index, i);
            self.tiles[offset] = *tile;
        }
    }
}

impl Index<Position> for Board {
    type Output = Tile;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "Position out of range: {pos}");
        &self.tiles[self.offset(pos.row(), pos.col())]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_value().max(1).to_string().len();
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, tile) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if tile.is_empty() {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{:>width$}", tile.value())?;
                }
            }
        }
        Ok(())
    }
}
