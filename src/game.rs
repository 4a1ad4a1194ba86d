//! The game module contains the guessing game loop and its entry point.
//!
//! A session is a sequence of rounds. Each round draws a secret number, then keeps asking for
//! guesses until the player hits it; every wrong guess gets a randomly phrased "nope" and, from the
//! second guess of the round on, a warmer/colder hint. After a win the player decides whether to
//! play another round.

use std::io::{self, IsTerminal as _};
use std::process::ExitCode;

use anyhow::Result;
use console::Term;
use regex::Regex;
use tracing::{debug, info};

use crate::cli::{bounds_or_exit, Bounds, Program};
use crate::error::error_message;
use crate::feedback::{warmer_or_colder, wrong_guess_message, WRONG_GUESS_MESSAGES};
use crate::input::{Console, Lines, Terminal, Tone};
use crate::logging;
use crate::rng::RandomNumberGenerator;

/// The highest index into the wrong-guess pool.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    reason = "The pool has a handful of entries."
)]
const LAST_MESSAGE_ID: i32 = WRONG_GUESS_MESSAGES.len() as i32 - 1;

/// Answers to the replay prompt that start a new round: `y` or `yes` in any case. Anything else
/// ends the session.
const PLAY_AGAIN: &str = r"(?i)\A\s*y(?:es)?\s*\z";

/// The prompt asking for a guess.
const GUESS_PROMPT: &str = "Enter your guess";

/// The prompt asking whether to play another round.
const REPLAY_PROMPT: &str = "Do you want to play again? (y or n)";

/// This enum holds the result of comparing a guess with the secret number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RandomResult {
    /// The guess is the secret number.
    Correct,
    /// The guess is any other number.
    Incorrect,
}

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// A round is running and the next guess is expected.
    AwaitingGuess,
    /// The secret number was just guessed; the player decides whether to go on.
    RoundWon,
    /// The player is done.
    SessionEnded,
}

/// Tallies for the closing message of a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Summary {
    /// Every well-formed guess, right or wrong, across all rounds.
    guesses: u32,
    /// The number of secret numbers found.
    rounds_won: u32,
}

impl Summary {
    /// The line printed when the session ends.
    fn message(self) -> String {
        let rounds = if self.rounds_won == 1 { "round" } else { "rounds" };
        let guesses = if self.guesses == 1 { "guess" } else { "guesses" };

        format!(
            "Thanks for playing! You won {} {rounds} with {} {guesses}.",
            self.rounds_won, self.guesses
        )
    }
}

/// Runs the guessing game with the bounds given on the command line, and returns the process exit
/// code.
///
/// The game talks through `dialoguer` prompts when both stdin and stdout are terminals, and through
/// plain line reads otherwise, so a session can be scripted through a pipe.
#[must_use]
pub fn init() -> ExitCode {
    logging::init();

    let bounds = match bounds_or_exit(Program::GuessingGame) {
        Ok(bounds) => bounds,
        Err(code) => return code,
    };
    let mut secrets = bounds.generator();
    let mut messages = match bounds.seed {
        Some(seed) => RandomNumberGenerator::with_seed(0, LAST_MESSAGE_ID, seed.wrapping_add(1)),
        None => RandomNumberGenerator::new(0, LAST_MESSAGE_ID),
    };

    let result = if io::stdin().is_terminal() && Term::stdout().is_term() {
        play(&mut Terminal::stdout(), &bounds, &mut secrets, &mut messages)
    } else {
        let mut console = Lines::new(io::stdin().lock(), io::stdout().lock());
        play(&mut console, &bounds, &mut secrets, &mut messages)
    };

    match result {
        Ok(summary) => {
            info!(?summary, "session ended");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if error_message(&mut io::stderr(), &format!("{err:#}"), Program::GuessingGame.trailer())
                .is_err()
            {
                debug!("could not write the error to stderr");
            }
            ExitCode::FAILURE
        }
    }
}

/// Runs a whole session: rounds keep coming until the player declines another one, or the input
/// runs out.
fn play<C: Console>(
    console: &mut C,
    bounds: &Bounds,
    secrets: &mut RandomNumberGenerator,
    messages: &mut RandomNumberGenerator,
) -> Result<Summary> {
    let play_again = Regex::new(PLAY_AGAIN)?;
    let mut summary = Summary::default();
    let mut secret_number = new_round(console, bounds, secrets)?;
    let mut last_guess: Option<i32> = None;
    let mut state = State::AwaitingGuess;

    while state != State::SessionEnded {
        state = match state {
            State::AwaitingGuess => {
                let Some(guess) = gather_guess(console)? else {
                    info!("input ended in the middle of a round");
                    break;
                };
                summary.guesses += 1;

                match process_guess(guess, secret_number) {
                    RandomResult::Correct => {
                        summary.rounds_won += 1;
                        console.show(Tone::Success, "\tHooray! You guessed the secret number!!")?;
                        State::RoundWon
                    }
                    RandomResult::Incorrect => {
                        console.show(Tone::Wrong, wrong_guess_message(messages.generate())?)?;
                        let hint = last_guess
                            .and_then(|last| warmer_or_colder(guess, last, secret_number).hint());
                        if let Some(hint) = hint {
                            console.show(Tone::Hint, hint)?;
                        }
                        last_guess = Some(guess);
                        State::AwaitingGuess
                    }
                }
            }
            State::RoundWon => match console.read_line(REPLAY_PROMPT)? {
                Some(answer) if play_again.is_match(&answer) => {
                    secret_number = new_round(console, bounds, secrets)?;
                    last_guess = None;
                    State::AwaitingGuess
                }
                _ => State::SessionEnded,
            },
            State::SessionEnded => State::SessionEnded,
        };
    }

    console.show(Tone::Plain, &summary.message())?;
    Ok(summary)
}

/// Draws the secret number of a new round and greets the player with the range it lies in.
fn new_round<C: Console>(
    console: &mut C,
    bounds: &Bounds,
    secrets: &mut RandomNumberGenerator,
) -> Result<i32> {
    let secret_number = secrets.generate();
    debug!(secret_number, "drew a new secret number");

    new_game_message(console, bounds)?;
    Ok(secret_number)
}

/// Prints the message opening every round.
fn new_game_message<C: Console>(console: &mut C, bounds: &Bounds) -> Result<()> {
    console.show(
        Tone::Plain,
        &format!(
            "Hi - I'm a computer and I've thought of a number between {} and {}.",
            bounds.minimum, bounds.maximum
        ),
    )?;
    console.show(Tone::Plain, "Let's play a guessing game...")
}

/// Asks for guesses until one parses as an integer. Malformed input is reported and asked for
/// again rather than ending the game. Returns `None` once the input is exhausted.
fn gather_guess<C: Console>(console: &mut C) -> Result<Option<i32>> {
    loop {
        let Some(line) = console.read_line(GUESS_PROMPT)? else {
            return Ok(None);
        };

        match line.trim().parse() {
            Ok(guess) => return Ok(Some(guess)),
            Err(err) => {
                debug!(input = line.as_str(), %err, "could not parse a guess");
                console.show(
                    Tone::Complaint,
                    &format!("\"{}\" is not a whole number. Please try again.", line.trim()),
                )?;
            }
        }
    }
}

/// Matches a guess against the secret number.
const fn process_guess(guess: i32, secret_number: i32) -> RandomResult {
    if guess == secret_number {
        RandomResult::Correct
    } else {
        RandomResult::Incorrect
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::EnvFilter;

    use super::{play, process_guess, RandomResult, Summary, LAST_MESSAGE_ID};
    use crate::cli::Bounds;
    use crate::feedback::WRONG_GUESS_MESSAGES;
    use crate::input::Lines;
    use crate::logging::{subscriber, DEFAULT_FILTER};
    use crate::rng::RandomNumberGenerator;

    /// A log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Plays `script` with a scoped subscriber using `filter`, and returns what was logged.
    fn logs_of<F: FnOnce(&[i32]) -> String>(filter: &str, script: F) -> String {
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = subscriber(EnvFilter::new(filter), move || sink.clone(), false);

        let _ = tracing::subscriber::with_default(subscriber, || session(script));
        captured.contents()
    }

    const SEED: u64 = 11;

    /// Plays a scripted session over 1..=10. `script` receives the secret numbers the session will
    /// draw, in order, and returns the player's input.
    fn session<F: FnOnce(&[i32]) -> String>(script: F) -> (Summary, String) {
        let bounds = Bounds::new(1, 10, Some(SEED)).unwrap();
        let mut secrets = bounds.generator();
        let mut lookahead = secrets.clone();
        let upcoming: Vec<i32> = (0..4).map(|_| lookahead.generate()).collect();
        let mut messages = RandomNumberGenerator::with_seed(0, LAST_MESSAGE_ID, SEED);

        let input = script(&upcoming);
        let mut console = Lines::new(input.as_bytes(), Vec::new());
        let summary = play(&mut console, &bounds, &mut secrets, &mut messages).unwrap();

        (summary, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn warmer_then_colder_then_win() {
        let (summary, output) = session(|secrets| format!("20\n15\n30\n{}\nn\n", secrets[0]));

        assert_eq!(output.matches("You're getting warmer.").count(), 1);
        assert_eq!(output.matches("You're getting colder.").count(), 1);
        assert_eq!(output.matches("Hooray! You guessed the secret number!!").count(), 1);
        assert_eq!(
            summary,
            Summary {
                guesses: 4,
                rounds_won: 1
            }
        );
        assert!(
            output.contains("Hi - I'm a computer and I've thought of a number between 1 and 10."),
            "missing opening message:\n{output}"
        );
        assert!(
            output.ends_with("Thanks for playing! You won 1 round with 4 guesses.\n"),
            "missing summary:\n{output}"
        );
    }

    #[test]
    fn first_guess_of_a_round_gets_no_hint() {
        let (_, output) = session(|secrets| format!("20\n{}\nn\n", secrets[0]));

        assert!(!output.contains("warmer"), "unexpected hint:\n{output}");
        assert!(!output.contains("colder"), "unexpected hint:\n{output}");
    }

    #[test]
    fn replay_starts_a_fresh_round() {
        let (summary, output) = session(|secrets| {
            // the last wrong guess of round one must not leak into round two
            format!("20\n{}\nY\n15\n{}\nno\n", secrets[0], secrets[1])
        });

        assert_eq!(summary.rounds_won, 2);
        assert_eq!(output.matches("Let's play a guessing game...").count(), 2);
        assert_eq!(output.matches("Hooray!").count(), 2);
        assert!(!output.contains("warmer"), "hint crossed rounds:\n{output}");
    }

    #[test]
    fn accepts_yes_in_any_case() {
        let (summary, _) = session(|secrets| {
            format!("{}\n  yes \n{}\nYES\n{}\nnope\n", secrets[0], secrets[1], secrets[2])
        });

        assert_eq!(summary.rounds_won, 3);
    }

    #[test]
    fn anything_else_ends_the_session() {
        for answer in ["n", "", "yeah", "maybe", "q"] {
            let (summary, output) = session(|secrets| format!("{}\n{answer}\n", secrets[0]));

            assert_eq!(summary.rounds_won, 1, "{answer:?} started a new round");
            assert_eq!(output.matches("Let's play").count(), 1, "for {answer:?}");
        }
    }

    #[test]
    fn malformed_guess_is_asked_again() {
        let (summary, output) = session(|secrets| format!("abc\n\n4.5\n{}\nn\n", secrets[0]));

        assert_eq!(summary.guesses, 1);
        assert_eq!(output.matches("is not a whole number").count(), 3);
        assert!(output.contains("\"abc\" is not a whole number"), "{output}");
    }

    #[test]
    fn closed_input_ends_the_session() {
        let (summary, output) = session(|_| "20\n".to_owned());

        assert_eq!(
            summary,
            Summary {
                guesses: 1,
                rounds_won: 0
            }
        );
        assert!(
            output.ends_with("Thanks for playing! You won 0 rounds with 1 guess.\n"),
            "{output}"
        );
    }

    #[test]
    fn wrong_guesses_use_the_pool() {
        let (_, output) = session(|secrets| format!("0\n0\n0\n{}\nn\n", secrets[0]));
        let wrong = output
            .lines()
            .filter(|line| WRONG_GUESS_MESSAGES.iter().any(|message| line.ends_with(message)))
            .count();

        assert_eq!(wrong, 3);
    }

    #[test]
    fn malformed_guess_stays_out_of_the_default_log() {
        let logs = logs_of(DEFAULT_FILTER, |secrets| format!("abc\n{}\nn\n", secrets[0]));

        assert!(logs.is_empty(), "default filter let through:\n{logs}");
    }

    #[test]
    fn malformed_guess_is_logged_at_debug() {
        let logs = logs_of("debug", |secrets| format!("abc\n{}\nn\n", secrets[0]));

        assert!(logs.contains("could not parse a guess"), "{logs}");
        assert!(!logs.contains('\u{1b}'), "escape codes with ansi off:\n{logs}");
    }

    #[test]
    fn only_the_secret_is_correct() {
        const WON: RandomResult = process_guess(7, 7);

        assert_eq!(WON, RandomResult::Correct);
        assert_eq!(process_guess(6, 7), RandomResult::Incorrect);
        assert_eq!(process_guess(-7, 7), RandomResult::Incorrect);
    }
}
