use log::{debug, trace};
use twenty48_core::{Board, Direction, Position, RandomPicker, SpawnPicker, TileIdAllocator};

use crate::{GameConfig, GameError, Snapshot, Timeline};

/// A game session with undo/redo.
///
/// Owns the history of snapshots and turns each player move into the
/// shift-spawn-record sequence: shift the current board, spawn a tile if
/// anything changed, and append the result to the timeline. The timeline is
/// never empty once a game exists.
///
/// # Example
///
/// ```
/// use twenty48_core::Direction;
/// use twenty48_game::{Game, GameConfig};
///
/// let mut game = Game::with_seed(GameConfig::default(), 42).unwrap();
/// assert_eq!(game.score(), 0);
/// assert_eq!(game.new_positions().len(), 2);
///
/// let moved = Direction::ALL
///     .into_iter()
///     .any(|direction| game.make_move(direction).unwrap().is_moved());
/// assert!(moved);
/// assert!(game.can_undo());
///
/// assert!(game.undo());
/// assert!(!game.can_undo());
/// assert!(game.can_redo());
/// ```
#[derive(Debug, Clone)]
pub struct Game<P = RandomPicker> {
    config: GameConfig,
    picker: P,
    ids: TileIdAllocator,
    timeline: Timeline<Snapshot>,
}

/// What a call to [`Game::make_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// Tiles moved, a tile was spawned, and a snapshot was recorded.
    Moved {
        /// Points gained by merges in this move.
        score_delta: u64,
        /// Where the new tile appeared.
        spawned: Position,
    },
    /// Nothing could move in that direction; the game is unchanged.
    Unchanged,
}

impl Game<RandomPicker> {
    /// Starts a game whose spawns are driven by a seeded [`RandomPicker`].
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::new(config, RandomPicker::from_seed(seed))
    }
}

impl<P> Game<P>
where
    P: SpawnPicker,
{
    /// Starts a game with the given settings and spawn picker.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn new(config: GameConfig, picker: P) -> Result<Self, GameError> {
        config.validate()?;
        let timeline = match config.history_capacity {
            Some(capacity) => Timeline::with_capacity(capacity),
            None => Timeline::new(),
        };
        let mut game = Self {
            config,
            picker,
            ids: TileIdAllocator::new(),
            timeline,
        };
        game.start()?;
        Ok(game)
    }

    /// Discards the current game and history and starts a fresh game on a
    /// `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SizeTooSmall`] if `size` is below
    /// [`GameConfig::MIN_SIZE`]. The current game is kept in that case.
    pub fn new_game(&mut self, size: usize) -> Result<(), GameError> {
        let config = GameConfig {
            size,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        self.start()
    }

    fn start(&mut self) -> Result<(), GameError> {
        let value = self.config.spawn_value;
        let board = Board::new(self.config.size)?;
        let (board, first) = board.spawn_tile(&mut self.picker, &mut self.ids, value)?;
        let (board, second) = board.spawn_tile(&mut self.picker, &mut self.ids, value)?;
        debug!(
            "new game: size={}, opening tiles at {first} and {second}",
            self.config.size
        );
        self.timeline.reset(Snapshot::new(board, 0, vec![first, second]));
        Ok(())
    }

    /// Shifts the board in `direction`.
    ///
    /// If no tile can move, returns [`MoveOutcome::Unchanged`] and leaves the
    /// game and its history untouched. Otherwise a tile is spawned, any redo
    /// history is dropped, and the new snapshot becomes current.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Engine`] if no cell is free for the spawned tile.
    /// A move that changed the board always frees at least one cell, so this
    /// indicates a broken picker or board.
    pub fn make_move(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        let current = self.timeline.current()?;
        let shifted = current.board().shift(direction, &mut self.ids);
        if !shifted.changed {
            trace!("move {direction}: nothing to shift");
            return Ok(MoveOutcome::Unchanged);
        }

        let score = current.score() + shifted.score_delta;
        let value = self.config.spawn_value;
        let (board, spawned) = shifted
            .board
            .spawn_tile(&mut self.picker, &mut self.ids, value)?;
        trace!("move {direction}: spawned {value} at {spawned}");

        self.timeline.append(Snapshot::new(board, score, vec![spawned]));
        debug!(
            "move {direction}: +{} points, score={score}, history={}/{}",
            shifted.score_delta,
            self.timeline.cursor() + 1,
            self.timeline.len()
        );
        Ok(MoveOutcome::Moved {
            score_delta: shifted.score_delta,
            spawned,
        })
    }
}

impl<P> Game<P> {
    /// Returns `true` if there is an earlier snapshot to return to.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.timeline.has_previous()
    }

    /// Returns `true` if an undone snapshot can be restored.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.timeline.has_next()
    }

    /// Steps back to the previous snapshot.
    ///
    /// Returns `false` and does nothing when there is no previous snapshot.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        let stepped = self.timeline.step_back().is_ok();
        debug!(
            "undo: history={}/{}",
            self.timeline.cursor() + 1,
            self.timeline.len()
        );
        stepped
    }

    /// Steps forward to the next snapshot.
    ///
    /// Returns `false` and does nothing when there is no next snapshot.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        let stepped = self.timeline.step_forward().is_ok();
        debug!(
            "redo: history={}/{}",
            self.timeline.cursor() + 1,
            self.timeline.len()
        );
        stepped
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        match self.timeline.current() {
            Ok(snapshot) => snapshot,
            Err(err) => unreachable!("game history is never empty: {err}"),
        }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.snapshot().board()
    }

    /// Returns the current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.snapshot().score()
    }

    /// Returns the positions to highlight as newly spawned.
    #[must_use]
    pub fn new_positions(&self) -> &[Position] {
        self.snapshot().new_positions()
    }

    /// Returns `true` if no direction can move any tile.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        let board = self.board();
        !Direction::ALL
            .into_iter()
            .any(|direction| board.can_shift(direction))
    }

    /// Returns the settings of the current game.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the full history, including undone snapshots.
    #[must_use]
    pub fn timeline(&self) -> &Timeline<Snapshot> {
        &self.timeline
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::*;

    /// Always picks the first candidate, i.e. the top-left-most empty cell.
    #[derive(Debug)]
    struct FirstPicker;

    impl SpawnPicker for FirstPicker {
        fn pick_one(&mut self, candidates: &[Position]) -> Position {
            candidates[0]
        }
    }

    fn first_picker_game() -> Game<FirstPicker> {
        Game::new(GameConfig::default(), FirstPicker).unwrap()
    }

    #[test]
    fn test_new_game_spawns_two_tiles() {
        let game = first_picker_game();

        assert_eq!(game.score(), 0);
        assert_eq!(
            game.new_positions(),
            [Position::new(0, 0), Position::new(0, 1)]
        );
        assert_eq!(game.board().row_values(0), vec![2, 2, 0, 0]);
        assert_eq!(game.board().empty_positions().len(), 14);
        assert_eq!(game.timeline().len(), 1);
        assert!(!game.can_undo());
        assert!(!game.can_redo());
    }

    #[test]
    fn test_move_merges_spawns_and_records() {
        let mut game = first_picker_game();

        let outcome = game.make_move(Direction::Left).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                score_delta: 4,
                spawned: Position::new(0, 1),
            }
        );
        assert_eq!(game.board().row_values(0), vec![4, 2, 0, 0]);
        assert_eq!(game.score(), 4);
        assert_eq!(game.new_positions(), [Position::new(0, 1)]);
        assert!(game.snapshot().is_new(Position::new(0, 1)));
        assert!(!game.snapshot().is_new(Position::new(0, 0)));
        assert_eq!(game.timeline().len(), 2);
        assert_eq!(game.timeline().cursor(), 1);
    }

    #[test]
    fn test_noop_move_leaves_history_untouched() {
        let mut game = first_picker_game();
        let before = game.snapshot().clone();

        assert_eq!(
            game.make_move(Direction::Up).unwrap(),
            MoveOutcome::Unchanged
        );
        assert_eq!(game.snapshot(), &before);
        assert_eq!(game.timeline().len(), 1);
        assert_eq!(game.timeline().cursor(), 0);
    }

    #[test]
    fn test_undo_redo() {
        let mut game = first_picker_game();
        let opening = game.snapshot().clone();
        game.make_move(Direction::Left).unwrap();
        let after_move = game.snapshot().clone();

        assert!(game.undo());
        assert_eq!(game.snapshot(), &opening);
        assert!(!game.undo());
        assert_eq!(game.snapshot(), &opening);

        assert!(game.redo());
        assert_eq!(game.snapshot(), &after_move);
        assert!(!game.redo());
    }

    #[test]
    fn test_move_after_undo_drops_redo_history() {
        let mut game = first_picker_game();
        game.make_move(Direction::Left).unwrap();
        game.make_move(Direction::Down).unwrap();
        assert_eq!(game.timeline().len(), 3);

        assert!(game.undo());
        assert!(game.undo());
        assert!(game.make_move(Direction::Right).unwrap().is_moved());

        assert_eq!(game.timeline().len(), 2);
        assert!(!game.can_redo());
        assert!(!game.redo());
    }

    #[test]
    fn test_new_game_replaces_history() {
        let mut game = first_picker_game();
        game.make_move(Direction::Left).unwrap();
        game.undo();

        game.new_game(5).unwrap();

        assert_eq!(game.board().size(), 5);
        assert_eq!(game.config().size, 5);
        assert_eq!(game.score(), 0);
        assert_eq!(game.timeline().len(), 1);
        assert!(!game.can_undo());
        assert!(!game.can_redo());
    }

    #[test]
    fn test_new_game_rejects_tiny_board() {
        let mut game = first_picker_game();
        let before = game.snapshot().clone();

        assert_eq!(game.new_game(1), Err(GameError::SizeTooSmall { size: 1 }));
        assert_eq!(game.snapshot(), &before);
        assert_eq!(game.config().size, 4);
    }

    #[test]
    fn test_game_over_on_two_by_two() {
        let config = GameConfig {
            size: 2,
            ..GameConfig::default()
        };
        let mut game = Game::new(config, FirstPicker).unwrap();
        assert_eq!(game.board().values(), vec![2, 2, 0, 0]);
        assert!(!game.is_game_over());

        // [2 2 / . .] -> left -> [4 2 / . .] -> down -> [2 . / 4 2]
        assert!(game.make_move(Direction::Left).unwrap().is_moved());
        assert_eq!(game.board().values(), vec![4, 2, 0, 0]);
        assert!(game.make_move(Direction::Down).unwrap().is_moved());
        assert_eq!(game.board().values(), vec![2, 0, 4, 2]);
        // [2 . / 4 2] -> right -> [2 2 / 4 2]
        assert!(game.make_move(Direction::Right).unwrap().is_moved());
        assert_eq!(game.board().values(), vec![2, 2, 4, 2]);
        assert!(!game.is_game_over());
        // [2 2 / 4 2] -> left -> [4 2 / 4 2]
        assert!(game.make_move(Direction::Left).unwrap().is_moved());
        assert_eq!(game.board().values(), vec![4, 2, 4, 2]);
        // [4 2 / 4 2] -> up -> [8 4 / 2 .]
        assert!(game.make_move(Direction::Up).unwrap().is_moved());
        assert_eq!(game.board().values(), vec![8, 4, 2, 0]);
        // [8 4 / 2 .] -> right -> [8 4 / 2 2] -> left -> [8 4 / 4 2]
        assert!(game.make_move(Direction::Right).unwrap().is_moved());
        assert!(game.make_move(Direction::Left).unwrap().is_moved());
        assert_eq!(game.board().values(), vec![8, 4, 4, 2]);
        assert_eq!(game.score(), 4 + 4 + 12 + 4);

        assert!(game.is_game_over());
        for direction in Direction::ALL {
            assert_eq!(game.make_move(direction).unwrap(), MoveOutcome::Unchanged);
        }
        assert!(game.undo());
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_history_capacity_bounds_undo() {
        let config = GameConfig {
            history_capacity: Some(NonZero::new(2).unwrap()),
            ..GameConfig::default()
        };
        let mut game = Game::new(config, FirstPicker).unwrap();
        game.make_move(Direction::Left).unwrap();
        game.make_move(Direction::Down).unwrap();

        assert_eq!(game.timeline().len(), 2);
        assert!(game.undo());
        assert!(!game.undo());
    }

    #[test]
    fn test_merged_tiles_get_fresh_ids() {
        let mut game = first_picker_game();
        let opening_ids: Vec<_> = game
            .board()
            .tiles()
            .iter()
            .filter(|tile| !tile.is_empty())
            .map(|tile| tile.id())
            .collect();

        game.make_move(Direction::Left).unwrap();
        let merged = game.board()[Position::new(0, 0)];
        assert_eq!(merged.value(), 4);
        assert!(!opening_ids.contains(&merged.id()));
    }
}
