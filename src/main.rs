//! # mindreader
//!
//! A game about guessing the number the computer thought of, somewhere between the two bounds
//! given on the command line. Every wrong guess is answered with a random quip and, from the second
//! guess on, with a hint on whether the guess got warmer or colder than the previous one.
//!
//! ```text
//! mindreader <MINIMUM> <MAXIMUM> [--seed <SEED>]
//! ```

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::process::ExitCode;

use mindreader::init;

fn main() -> ExitCode {
    init()
}
