use std::io::{self, BufRead, Write};

use log::{info, warn};
use rand::{SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg64;
use twenty48_core::{Direction, SpawnPicker};
use twenty48_game::{Game, GameError, MoveOutcome};

use crate::{
    command::{Command, HELP},
    render::render,
};

/// Errors that can end a session.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// Reading commands or writing output failed.
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    /// The game rejected an operation.
    #[display("game error: {_0}")]
    Game(#[from] GameError),
}

/// Returns the direction generator for autoplay with game seed `seed`.
///
/// The stream is derived from, but distinct from, the one that places spawned
/// tiles.
#[must_use]
pub fn autoplay_rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed.wrapping_add(1))
}

/// Drives a [`Game`] from decoded commands and prints its projection after
/// every step.
#[derive(Debug)]
pub struct Session<P> {
    game: Game<P>,
}

impl<P> Session<P>
where
    P: SpawnPicker,
{
    /// Wraps an already started game.
    #[must_use]
    pub fn new(game: Game<P>) -> Self {
        Self { game }
    }

    /// Returns the game being played.
    #[must_use]
    pub fn game(&self) -> &Game<P> {
        &self.game
    }

    /// Applies one command. Returns `false` when the session should end.
    ///
    /// # Errors
    ///
    /// Returns an error if the game rejects the command or output fails.
    pub fn apply<W>(&mut self, command: Command, output: &mut W) -> Result<bool, SessionError>
    where
        W: Write,
    {
        match command {
            Command::Move(direction) => {
                if self.game.make_move(direction)? == MoveOutcome::Unchanged {
                    writeln!(output, "nothing moves {direction}")?;
                }
            }
            Command::Undo => {
                if !self.game.undo() {
                    writeln!(output, "nothing to undo")?;
                }
            }
            Command::Redo => {
                if !self.game.redo() {
                    writeln!(output, "nothing to redo")?;
                }
            }
            Command::NewGame => {
                let size = self.game.config().size;
                self.game.new_game(size)?;
                info!("started a new {size}x{size} game");
            }
            Command::Help => {
                writeln!(output, "{HELP}")?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
        }
        writeln!(output, "{}", render(&self.game))?;
        Ok(true)
    }

    /// Reads commands line by line until `quit` or end of input.
    ///
    /// Unknown commands are reported and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, writing, or a game operation fails.
    pub fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<(), SessionError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", render(&self.game))?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if !self.apply(command, output)? {
                        break;
                    }
                }
                Err(err) => {
                    warn!("{err}");
                    writeln!(output, "{err} (type ? for help)")?;
                }
            }
        }
        Ok(())
    }

    /// Plays up to `moves` random directions, stopping early on game over.
    ///
    /// Returns the number of moves that changed the board.
    ///
    /// # Errors
    ///
    /// Returns an error if a game operation fails.
    pub fn autoplay(&mut self, moves: usize, rng: &mut Pcg64) -> Result<usize, SessionError> {
        let mut committed = 0;
        for _ in 0..moves {
            if self.game.is_game_over() {
                info!("autoplay stopped: game over after {committed} moves");
                break;
            }
            let Some(&direction) = Direction::ALL.choose(rng) else {
                break;
            };
            if self.game.make_move(direction)?.is_moved() {
                committed += 1;
            }
        }
        Ok(committed)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use twenty48_core::Position;
    use twenty48_game::GameConfig;

    use super::*;

    struct FirstPicker;

    impl SpawnPicker for FirstPicker {
        fn pick_one(&mut self, candidates: &[Position]) -> Position {
            candidates[0]
        }
    }

    fn session() -> Session<FirstPicker> {
        Session::new(Game::new(GameConfig::default(), FirstPicker).unwrap())
    }

    #[test]
    fn test_run_applies_commands_until_quit() {
        let mut session = session();
        let mut output = Vec::new();
        let input = Cursor::new("a\nu\nr\nbogus\nq\nd\n");

        session.run(input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("unknown command: \"bogus\""));
        assert_eq!(session.game().score(), 4);
        assert_eq!(session.game().timeline().len(), 2);
        assert!(!session.game().can_redo());
    }

    #[test]
    fn test_noop_commands_are_reported() {
        let mut session = session();
        let mut output = Vec::new();

        assert!(session.apply(Command::Undo, &mut output).unwrap());
        assert!(session.apply(Command::Redo, &mut output).unwrap());
        assert!(
            session
                .apply(Command::Move(Direction::Up), &mut output)
                .unwrap()
        );
        assert!(!session.apply(Command::Quit, &mut output).unwrap());

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("nothing to undo"));
        assert!(output.contains("nothing to redo"));
        assert!(output.contains("nothing moves up"));
    }

    #[test]
    fn test_new_game_resets_history() {
        let mut session = session();
        let mut output = Vec::new();
        session
            .apply(Command::Move(Direction::Left), &mut output)
            .unwrap();
        session.apply(Command::NewGame, &mut output).unwrap();

        assert_eq!(session.game().score(), 0);
        assert_eq!(session.game().timeline().len(), 1);
    }

    #[test]
    fn test_autoplay_commits_moves() {
        let mut session = Session::new(Game::with_seed(GameConfig::default(), 5).unwrap());
        let mut rng = autoplay_rng(5);

        let committed = session.autoplay(50, &mut rng).unwrap();

        assert!(committed > 0);
        assert_eq!(session.game().timeline().len(), committed + 1);
    }

    #[test]
    fn test_autoplay_rng_differs_from_spawn_stream() {
        let candidates: Vec<_> = (0..1000).collect();
        let mut spawn = Pcg64::seed_from_u64(7);
        let mut autoplay = autoplay_rng(7);

        let spawn_picks: Vec<_> = (0..16).map(|_| candidates.choose(&mut spawn)).collect();
        let autoplay_picks: Vec<_> = (0..16).map(|_| candidates.choose(&mut autoplay)).collect();
        assert_ne!(spawn_picks, autoplay_picks);
    }
}
