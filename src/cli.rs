//! The command-line surface shared by all three programs: `program <minimum> <maximum>`.
//!
//! Parsing is done by clap; range validation happens right after, so a bad invocation is always
//! reported (and the process exits with status 1) before any game or array logic runs.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Args, CommandFactory, FromArgMatches, Parser};
use tracing::debug;

use crate::error::{error_message, UsageError, EXERCISE_TRAILER, GAME_TRAILER};
use crate::rng::RandomNumberGenerator;

/// The positional bounds and the optional seed every program accepts.
#[expect(
    clippy::arbitrary_source_item_ordering,
    reason = "Clap takes positional arguments in declaration order."
)]
#[derive(Args, Debug)]
struct RangeArgs {
    /// The lowest number that can be drawn. Must be positive.
    #[arg(value_name = "MINIMUM")]
    minimum: i32,
    /// The largest number that can be drawn. Must be positive and larger than the minimum.
    #[arg(value_name = "MAXIMUM")]
    maximum: i32,
    /// A seed to make every random draw of the run reproducible.
    #[arg(long, env = "MINDREADER_SEED", value_name = "SEED")]
    seed: Option<u64>,
}

/// This struct holds the command line of any of the programs. The program name and description are
/// filled in at runtime from [`Program`].
#[derive(Parser, Debug)]
#[command(version, allow_negative_numbers = true)]
#[command(next_line_help = true)]
struct Cli {
    /// The bounds of the random numbers.
    #[command(flatten)]
    range: RangeArgs,
}

/// The validated closed range `[minimum, maximum]`, with `0 < minimum < maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// The largest number that can be drawn.
    pub maximum: i32,
    /// The lowest number that can be drawn.
    pub minimum: i32,
    /// The seed requested on the command line, if any.
    pub seed: Option<u64>,
}

impl Bounds {
    /// Builds a generator over these bounds, honoring the requested seed.
    #[must_use]
    pub fn generator(&self) -> RandomNumberGenerator {
        match self.seed {
            Some(seed) => RandomNumberGenerator::with_seed(self.minimum, self.maximum, seed),
            None => RandomNumberGenerator::new(self.minimum, self.maximum),
        }
    }

    /// Checks that both bounds are positive and that the minimum is strictly below the maximum.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub const fn new(minimum: i32, maximum: i32, seed: Option<u64>) -> Result<Self, UsageError> {
        if minimum <= 0 {
            return Err(UsageError::NotPositive(minimum));
        }
        if maximum <= 0 {
            return Err(UsageError::NotPositive(maximum));
        }
        if minimum >= maximum {
            return Err(UsageError::NotIncreasing(minimum, maximum));
        }

        Ok(Self {
            maximum,
            minimum,
            seed,
        })
    }
}

/// The three programs built from this crate. Each one has its own name, description and error
/// trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    /// The array-average exercise.
    CalcAverage,
    /// The array-minimum exercise.
    FindMin,
    /// The interactive guessing game.
    GuessingGame,
}

impl Program {
    /// The one-line description shown by `--help`.
    const fn about(self) -> &'static str {
        match self {
            Self::CalcAverage => "Fills an array with random numbers and prints their average.",
            Self::FindMin => "Fills an array with random numbers and prints the smallest one.",
            Self::GuessingGame => "Guess the number the computer thought of, with hints.",
        }
    }

    /// The binary name.
    const fn name(self) -> &'static str {
        match self {
            Self::CalcAverage => "calc_average",
            Self::FindMin => "find_min",
            Self::GuessingGame => "mindreader",
        }
    }

    /// The line printed after every fatal error of this program.
    #[must_use]
    pub const fn trailer(self) -> &'static str {
        match self {
            Self::CalcAverage | Self::FindMin => EXERCISE_TRAILER,
            Self::GuessingGame => GAME_TRAILER,
        }
    }
}

/// Why a command line was not accepted.
#[derive(Debug)]
pub enum Rejection {
    /// Clap could not parse the arguments, or the user asked for help or the version.
    Parse(clap::Error),
    /// The arguments parsed but do not form a valid range.
    Usage(UsageError),
}

/// Parses `args` (including the program name) and validates the range.
///
/// # Errors
///
/// Returns a [`Rejection`] for missing or non-numeric arguments and for invalid ranges.
pub fn parse_args<I, T>(program: Program, args: I) -> Result<Bounds, Rejection>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Cli::command()
        .name(program.name())
        .about(program.about())
        .try_get_matches_from(args)
        .map_err(Rejection::Parse)?;
    let cli = Cli::from_arg_matches(&matches).map_err(Rejection::Parse)?;
    debug!(?cli, "parsed command line");

    Bounds::new(cli.range.minimum, cli.range.maximum, cli.range.seed).map_err(Rejection::Usage)
}

/// Parses the process arguments. On rejection, the diagnostic is printed here and the exit code
/// the program should return is handed back instead.
pub(crate) fn bounds_or_exit(program: Program) -> Result<Bounds, ExitCode> {
    match parse_args(program, std::env::args_os()) {
        Ok(bounds) => Ok(bounds),
        Err(rejection) if rejection.is_request() => {
            Err(report(program, &rejection, &mut io::stdout()))
        }
        Err(rejection) => Err(report(program, &rejection, &mut io::stderr())),
    }
}

impl Rejection {
    /// Whether the user asked for `--help` or `--version` rather than making a mistake.
    #[must_use]
    pub fn is_request(&self) -> bool {
        match *self {
            Self::Parse(ref err) => !err.use_stderr(),
            Self::Usage(_) => false,
        }
    }
}

/// Writes a rejected command line to `out` and picks the exit code. Help and version requests are
/// not errors and exit successfully; everything else is followed by the program's trailer and
/// exits with a failure.
fn report<W: Write>(program: Program, rejection: &Rejection, out: &mut W) -> ExitCode {
    let written = match *rejection {
        Rejection::Parse(ref err) if rejection.is_request() => write!(out, "{}", err.render()),
        Rejection::Parse(ref err) => {
            let message = err.render().to_string();
            error_message(out, message.trim_end(), program.trailer())
        }
        Rejection::Usage(err) => {
            let message = format!(
                "Please provide two positive integers as the minimum and maximum: {err}."
            );
            error_message(out, &message, program.trailer())
        }
    };
    if written.is_err() {
        debug!("could not write the rejected command line");
    }

    if rejection.is_request() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
