//! Errors that end a run, and the single path through which they are reported to the player.
//!
//! Every fatal error is printed as its own message followed by a fixed trailer naming the program
//! that is giving up, so no failure is ever silent.

use std::io::{self, Write};

use console::style;
use thiserror::Error;

/// The trailer printed after every fatal error of the guessing game.
pub const GAME_TRAILER: &str = "There was an error. Exiting the guessing game.";

/// The trailer printed after every fatal error of the array exercises.
pub const EXERCISE_TRAILER: &str = "There was an error. Exiting.";

/// Invalid bounds given on the command line. These are detected before any game or array logic
/// runs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UsageError {
    /// `{0}` is the minimum and `{1}` the maximum, in that order.
    #[error("the minimum ({0}) must be smaller than the maximum ({1})")]
    NotIncreasing(i32, i32),
    /// `{0}` is the offending bound.
    #[error("both the minimum and the maximum must be positive, got {0}")]
    NotPositive(i32),
}

/// Internal errors of the game loop. These point at a logic bug rather than at bad input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A generated message index fell outside the wrong-guess pool.
    #[error("no wrong-guess message at index {index}, the pool only has {len}")]
    MessageIndex {
        /// The index that was drawn.
        index: usize,
        /// The size of the pool.
        len: usize,
    },
}

/// Writes `message` and then `trailer`, each on its own line. Styling follows whether stderr is a
/// terminal, since that is where these end up.
///
/// # Errors
///
/// Fails only if `out` cannot be written to.
pub fn error_message<W: Write>(out: &mut W, message: &str, trailer: &str) -> io::Result<()> {
    writeln!(out, "{}", style(message).for_stderr().red())?;
    writeln!(out, "{}", style(trailer).for_stderr().bold())
}
