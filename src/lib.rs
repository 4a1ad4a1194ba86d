//! The library components of the programs. They cover the random number source, the command line
//! shared by every program, the interactive guessing game and the two array exercises.
//!
//! The starting point of the library is the game.rs file, which contains the main game loop. The
//! array exercises live in arrays.rs.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod arrays;
mod cli;
mod error;
mod feedback;
mod game;
mod input;
mod logging;
mod rng;

pub use arrays::{
    calc_average, calculate_average, fill_array, find_min, find_minimum, print_array,
    NUMBER_ELEMENTS,
};
pub use cli::{parse_args, Bounds, Program, Rejection};
pub use error::{error_message, GameError, UsageError, EXERCISE_TRAILER, GAME_TRAILER};
pub use game::init;
pub use rng::RandomNumberGenerator;
