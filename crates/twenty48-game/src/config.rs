use std::num::NonZero;

use serde::{Deserialize, Serialize};

use crate::GameError;

/// Settings fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub size: usize,
    /// Value of every spawned tile.
    pub spawn_value: u32,
    /// Maximum number of snapshots kept for undo; unbounded when `None`.
    pub history_capacity: Option<NonZero<usize>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            spawn_value: Self::DEFAULT_SPAWN_VALUE,
            history_capacity: None,
        }
    }
}

impl GameConfig {
    /// The classic 4×4 board.
    pub const DEFAULT_SIZE: usize = 4;
    /// Tiles spawn as 2s.
    pub const DEFAULT_SPAWN_VALUE: u32 = 2;
    /// Two opening tiles must fit on the board.
    pub const MIN_SIZE: usize = 2;

    /// Checks that a game can be started with these settings.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SizeTooSmall`] if `size` is below
    /// [`MIN_SIZE`](Self::MIN_SIZE), and [`GameError::InvalidSpawnValue`] if
    /// `spawn_value` is not a power of two of at least 2.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.size < Self::MIN_SIZE {
            return Err(GameError::SizeTooSmall { size: self.size });
        }
        if self.spawn_value < 2 || !self.spawn_value.is_power_of_two() {
            return Err(GameError::InvalidSpawnValue {
                value: self.spawn_value,
            });
        }
        Ok(())
    }
}
