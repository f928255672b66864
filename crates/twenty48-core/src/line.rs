//! Single-line compaction and merging.

use crate::{Polarity, Tile, TileIdAllocator};

/// The result of compressing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    /// The line after sliding and merging, same length as the input.
    pub tiles: Vec<Tile>,
    /// Sum of the values produced by merges.
    pub score: u64,
}

/// Slides the tiles of `line` towards one end and merges equal neighbours.
///
/// Empty tiles are dropped first, keeping the order of the remaining tiles.
/// The survivors are then scanned from the packing end: a tile whose value
/// equals the previously placed tile replaces it with a doubled tile carrying
/// a fresh id from `ids`, and the doubled value is added to the score. A merged
/// tile never merges again in the same pass, so `[2, 2, 2, 2]` becomes
/// `[4, 4, 0, 0]`. Tiles of [`Tile::MAX_VALUE`] never merge. The line is
/// padded with empty tiles on the far side.
///
/// # Examples
///
/// ```
/// use twenty48_core::{Polarity, Tile, TileIdAllocator, compress};
///
/// let mut ids = TileIdAllocator::new();
/// let line = [
///     Tile::new(ids.allocate(), 2),
///     Tile::EMPTY,
///     Tile::new(ids.allocate(), 2),
///     Tile::new(ids.allocate(), 2),
/// ];
///
/// let compressed = compress(&line, Polarity::TowardStart, &mut ids);
/// let values: Vec<_> = compressed.tiles.iter().map(|t| t.value()).collect();
/// assert_eq!(values, [4, 2, 0, 0]);
/// assert_eq!(compressed.score, 4);
/// ```
#[must_use]
pub fn compress(line: &[Tile], polarity: Polarity, ids: &mut TileIdAllocator) -> Compressed {
    let scan: Box<dyn Iterator<Item = &Tile>> = match polarity {
        Polarity::TowardStart => Box::new(line.iter()),
        Polarity::TowardEnd => Box::new(line.iter().rev()),
    };

    let mut tiles = Vec::with_capacity(line.len());
    let mut score = 0;
    let mut last_value = None;
    for tile in scan.filter(|tile| !tile.is_empty()) {
        if last_value == Some(tile.value())
            && let Some(value) = Tile::merged_value(tile.value())
        {
            if let Some(placed) = tiles.last_mut() {
                *placed = Tile::new(ids.allocate(), value);
            }
            score += u64::from(value);
            last_value = None;
        } else {
            tiles.push(*tile);
            last_value = Some(tile.value());
        }
    }

    tiles.resize(line.len(), Tile::EMPTY);
    if polarity.is_toward_end() {
        tiles.reverse();
    }
    Compressed { tiles, score }
}

/// Returns `true` if compressing the values in scan order would change them.
///
/// This is the allocation-free counterpart of comparing [`compress`] input and
/// output values.
pub(crate) fn can_compress(scan: impl Iterator<Item = u32>) -> bool {
    let mut seen_empty = false;
    let mut last_value = None;
    for value in scan {
        if value == 0 {
            seen_empty = true;
            continue;
        }
        if seen_empty || (last_value == Some(value) && Tile::merged_value(value).is_some()) {
            return true;
        }
        last_value = Some(value);
    }
    false
}
