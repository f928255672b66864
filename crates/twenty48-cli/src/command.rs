use std::str::FromStr;

use twenty48_core::Direction;

/// A decoded player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the board.
    Move(Direction),
    /// Step back one move.
    Undo,
    /// Step forward one move.
    Redo,
    /// Start over on a board of the current size.
    NewGame,
    /// Print the key bindings.
    Help,
    /// Leave the game.
    Quit,
}

/// Errors that can occur when parsing a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown command: {input:?}")]
pub struct ParseCommandError {
    input: String,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s.trim().to_ascii_lowercase().as_str() {
            "w" | "k" | "up" => Self::Move(Direction::Up),
            "s" | "j" | "down" => Self::Move(Direction::Down),
            "a" | "h" | "left" => Self::Move(Direction::Left),
            "d" | "l" | "right" => Self::Move(Direction::Right),
            "u" | "undo" => Self::Undo,
            "r" | "redo" => Self::Redo,
            "n" | "new" => Self::NewGame,
            "?" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => {
                return Err(ParseCommandError {
                    input: s.trim().to_owned(),
                });
            }
        };
        Ok(command)
    }
}

/// Key binding summary shown by [`Command::Help`].
pub const HELP: &str = "\
w/a/s/d (or h/j/k/l, up/left/down/right)  move
u  undo    r  redo    n  new game    ?  help    q  quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("w".parse(), Ok(Command::Move(Direction::Up)));
        assert_eq!(" Left ".parse(), Ok(Command::Move(Direction::Left)));
        assert_eq!("j".parse(), Ok(Command::Move(Direction::Down)));
        assert_eq!("d".parse(), Ok(Command::Move(Direction::Right)));
        assert_eq!("u".parse(), Ok(Command::Undo));
        assert_eq!("redo".parse(), Ok(Command::Redo));
        assert_eq!("n".parse(), Ok(Command::NewGame));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "jump".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), r#"unknown command: "jump""#);
    }
}
