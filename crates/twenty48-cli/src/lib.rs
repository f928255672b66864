//! Terminal front end for the twenty48 game.
//!
//! Decodes typed commands, forwards them to the game facade, and prints the
//! board, score, and highlights after every step.

pub mod command;
pub mod render;
pub mod session;

pub use self::session::{Session, SessionError};
