//! # find_min
//!
//! Fills an array with random numbers between the two given bounds, prints it, and prints its
//! smallest element.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::process::ExitCode;

fn main() -> ExitCode {
    mindreader::find_min()
}
