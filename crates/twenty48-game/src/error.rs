use twenty48_core::EngineError;

/// Errors raised when navigating a [`Timeline`](crate::Timeline).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// Stepped back from the first entry.
    #[display("already at the start of the history")]
    AtStart,
    /// Stepped forward from the last entry.
    #[display("already at the end of the history")]
    AtEnd,
    /// Read from a timeline with no entries.
    #[display("history is empty")]
    Empty,
}

/// Errors raised by [`Game`](crate::Game) operations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// The board is too small to hold the two opening tiles.
    #[display("board size must be at least 2, got {size}")]
    SizeTooSmall {
        /// The rejected size.
        size: usize,
    },
    /// The spawn value is not a power of two of at least 2.
    #[display("spawn value must be a power of two of at least 2, got {value}")]
    InvalidSpawnValue {
        /// The rejected value.
        value: u32,
    },
    /// A board operation failed.
    #[display("board operation failed: {_0}")]
    Engine(#[from] EngineError),
    /// A history operation failed.
    #[display("history operation failed: {_0}")]
    History(#[from] HistoryError),
}
