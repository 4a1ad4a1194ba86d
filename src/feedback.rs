//! What the game tells the player after a wrong guess: one phrase picked at random from a fixed
//! pool, and a hint on whether the guess moved towards or away from the secret number.

use crate::error::GameError;

/// The phrasings a wrong guess can be answered with.
pub(crate) const WRONG_GUESS_MESSAGES: [&str; 5] = [
    "Nope, that's not it.",
    "Wrong! Better luck on the next one.",
    "Not quite. Try again.",
    "Sorry, that's not the number I'm thinking of.",
    "That's a miss.",
];

/// How the distance to the secret number changed between two consecutive guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// The new guess is strictly farther from the secret number.
    Colder,
    /// Both guesses are exactly as far from the secret number.
    Unchanged,
    /// The new guess is strictly closer to the secret number.
    Warmer,
}

impl Direction {
    /// The hint shown for this direction. Equal distances get no hint at all.
    pub(crate) const fn hint(self) -> Option<&'static str> {
        match self {
            Self::Colder => Some("You're getting colder."),
            Self::Unchanged => None,
            Self::Warmer => Some("You're getting warmer."),
        }
    }
}

/// Compares how far `guess` and `last_guess` are from `secret_number`.
///
/// Distances are computed in `i64` so that no pair of `i32` values can overflow.
pub(crate) fn warmer_or_colder(guess: i32, last_guess: i32, secret_number: i32) -> Direction {
    let distance = |value: i32| (i64::from(secret_number) - i64::from(value)).abs();

    match distance(guess).cmp(&distance(last_guess)) {
        std::cmp::Ordering::Less => Direction::Warmer,
        std::cmp::Ordering::Equal => Direction::Unchanged,
        std::cmp::Ordering::Greater => Direction::Colder,
    }
}

/// Picks the wrong-guess message at `message_id`.
///
/// # Errors
///
/// An index outside the pool is a logic bug in whoever drew it, and is reported as
/// [`GameError::MessageIndex`].
pub(crate) fn wrong_guess_message(message_id: i32) -> Result<&'static str, GameError> {
    let len = WRONG_GUESS_MESSAGES.len();
    let index = usize::try_from(message_id).map_err(|_err| GameError::MessageIndex {
        index: usize::MAX,
        len,
    })?;

    WRONG_GUESS_MESSAGES
        .get(index)
        .copied()
        .ok_or(GameError::MessageIndex { index, len })
}
