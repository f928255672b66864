//! Tiles and tile identities.

use serde::{Deserialize, Serialize};

/// Opaque identity of a physical tile on the board.
///
/// Ids let a renderer follow a tile as it slides. A tile keeps its id while it
/// moves; merging two tiles produces a tile with a fresh id. Empty cells all
/// share [`TileId::NONE`].
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
#[display("#{_0}")]
#[serde(transparent)]
pub struct TileId(u64);

impl TileId {
    /// The id carried by every empty tile.
    pub const NONE: Self = Self(0);

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns `true` if this is the empty-cell id.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }
}

/// Hands out fresh [`TileId`]s.
///
/// Ids are allocated in increasing order starting after [`TileId::NONE`] and
/// are never reused by the same allocator.
///
/// # Examples
///
/// ```
/// use twenty48_core::TileIdAllocator;
///
/// let mut ids = TileIdAllocator::new();
/// let a = ids.allocate();
/// let b = ids.allocate();
/// assert_ne!(a, b);
/// assert!(!a.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TileIdAllocator {
    next: u64,
}

impl Default for TileIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl TileIdAllocator {
    /// Creates an allocator whose first id follows [`TileId::NONE`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: TileId::NONE.0 + 1,
        }
    }

    /// Creates an allocator whose first id follows `last`.
    ///
    /// Use this after loading a board so that new tiles never reuse an id
    /// already on it.
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_core::{Board, TileIdAllocator};
    ///
    /// let mut ids = TileIdAllocator::new();
    /// let board = Board::from_rows(&[[2, 4], [0, 8]], &mut ids).unwrap();
    ///
    /// let mut resumed = TileIdAllocator::starting_after(board.max_id());
    /// assert!(resumed.allocate() > board.max_id());
    /// ```
    #[must_use]
    pub const fn starting_after(last: TileId) -> Self {
        Self { next: last.0 + 1 }
    }

    /// Returns a fresh id.
    pub fn allocate(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next += 1;
        id
    }
}

/// A single board cell.
///
/// A value of `0` marks an empty cell. Non-empty tiles hold a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    value: u32,
}

impl Default for Tile {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Tile {
    /// The empty tile.
    pub const EMPTY: Self = Self {
        id: TileId::NONE,
        value: 0,
    };

    /// The highest value a tile can hold. Tiles of this value never merge.
    pub const MAX_VALUE: u32 = 1 << 31;

    /// Returns `true` if `value` may appear on a board: zero or a power of
    /// two.
    #[must_use]
    pub const fn is_valid_value(value: u32) -> bool {
        value == 0 || value.is_power_of_two()
    }

    /// Creates a non-empty tile.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a power of two or `id` is [`TileId::NONE`].
    #[must_use]
    pub fn new(id: TileId, value: u32) -> Self {
        assert!(
            value.is_power_of_two(),
            "Tile value must be a power of two: {value}"
        );
        assert!(!id.is_none(), "Non-empty tile requires an id");
        Self { id, value }
    }

    /// Returns the tile's identity.
    #[must_use]
    pub const fn id(self) -> TileId {
        self.id
    }

    /// Returns the tile's value, `0` for an empty cell.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Returns `true` if this is an empty cell.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.value == 0
    }

    /// Returns the value produced by merging two tiles of `value`, or `None`
    /// if the result would not fit.
    #[must_use]
    pub const fn merged_value(value: u32) -> Option<u32> {
        value.checked_mul(2)
    }
}
