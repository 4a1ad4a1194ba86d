//! # calc_average
//!
//! Fills an array with random numbers between the two given bounds, prints it, and prints the
//! average of its elements.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::process::ExitCode;

fn main() -> ExitCode {
    mindreader::calc_average()
}
