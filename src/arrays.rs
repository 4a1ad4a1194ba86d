//! The two array exercises: fill a fixed-size array with random numbers, print it, then report
//! either its smallest element or the average of its elements.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::cli::{bounds_or_exit, Bounds, Program};
use crate::error::error_message;
use crate::logging;
use crate::rng::RandomNumberGenerator;

/// How many random numbers the exercises work on.
pub const NUMBER_ELEMENTS: usize = 10;

/// Computes the arithmetic mean of `the_array`, or `None` if it is empty.
///
/// The elements are summed in an `i64` accumulator, which cannot overflow for any realistic
/// length, and only the final quotient is taken in floating point.
#[must_use]
pub fn calculate_average(the_array: &[i32]) -> Option<f64> {
    if the_array.is_empty() {
        return None;
    }
    let sum: i64 = the_array.iter().copied().map(i64::from).sum();

    Some(sum as f64 / the_array.len() as f64)
}

/// Runs the average exercise with the bounds given on the command line, and returns the process
/// exit code.
#[must_use]
pub fn calc_average() -> ExitCode {
    exercise(Program::CalcAverage, |the_array| {
        calculate_average(the_array)
            .map(|average| format!("The average value of the array is {average}"))
    })
}

/// Assigns a fresh random number to every element of `the_array`.
pub fn fill_array<const N: usize>(
    the_array: &mut [i32; N],
    random_number_generator: &mut RandomNumberGenerator,
) {
    for element in the_array {
        *element = random_number_generator.generate();
    }
}

/// Runs the minimum exercise with the bounds given on the command line, and returns the process
/// exit code.
#[must_use]
pub fn find_min() -> ExitCode {
    exercise(Program::FindMin, |the_array| {
        find_minimum(the_array).map(|minimum| format!("The minimum value in the array is {minimum}"))
    })
}

/// Returns the smallest element of `the_array`, or `None` if it is empty.
#[must_use]
pub fn find_minimum(the_array: &[i32]) -> Option<i32> {
    let (&first, rest) = the_array.split_first()?;

    Some(rest.iter().fold(first, |minimum, &value| minimum.min(value)))
}

/// Writes every element of `the_array` on a line of its own.
///
/// # Errors
///
/// Fails only if `out` cannot be written to.
pub fn print_array<W: Write>(out: &mut W, the_array: &[i32]) -> io::Result<()> {
    for element in the_array {
        writeln!(out, "{element}")?;
    }
    Ok(())
}

/// Parses the command line, runs an exercise and reports its failure, if any.
fn exercise<F>(program: Program, conclude: F) -> ExitCode
where
    F: FnOnce(&[i32]) -> Option<String>,
{
    logging::init();

    let bounds = match bounds_or_exit(program) {
        Ok(bounds) => bounds,
        Err(code) => return code,
    };

    match run_exercise(&bounds, &mut io::stdout().lock(), conclude) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if error_message(&mut io::stderr(), &format!("{err:#}"), program.trailer()).is_err() {
                debug!("could not write the error to stderr");
            }
            ExitCode::FAILURE
        }
    }
}

/// Fills an array within `bounds`, prints it, and prints the line `conclude` derives from it.
fn run_exercise<W, F>(bounds: &Bounds, out: &mut W, conclude: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&[i32]) -> Option<String>,
{
    let mut rng = bounds.generator();
    let mut random_numbers = [0; NUMBER_ELEMENTS];

    fill_array(&mut random_numbers, &mut rng);
    debug!(?random_numbers, "filled the array");

    print_array(out, &random_numbers)?;
    let conclusion = conclude(random_numbers.as_slice()).context("the array has no elements")?;
    writeln!(out, "{conclusion}")?;

    Ok(())
}
