//! Diagnostics go to stderr through `tracing`, so they never mix with the game's own output.
//!
//! The filter is read from `RUST_LOG` and defaults to `warn`; `RUST_LOG=debug` shows the secret
//! numbers as they are drawn, and every line the player typed that was not a number.

use std::io::{self, IsTerminal as _};

use tracing::{debug, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// The filter used when `RUST_LOG` is unset or invalid.
pub(crate) const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Calling it again is harmless.
pub(crate) fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new(DEFAULT_FILTER));
    let ansi = io::stderr().is_terminal();

    if tracing::subscriber::set_global_default(subscriber(filter, io::stderr, ansi)).is_err() {
        debug!("a global subscriber is already installed");
    }
}

/// Builds the formatting subscriber writing to `make_writer`. Colors are only used when `ansi` is
/// set, which [`init`] ties to stderr being a terminal.
pub(crate) fn subscriber<W>(
    filter: EnvFilter,
    make_writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer)
        .with_ansi(ansi)
        .finish()
}
