//! Diagnostic output on standard error.

use std::io::IsTerminal;

use tracing::Level;

/// Install the global `tracing` subscriber.
///
/// Warnings are always shown; `verbose` lowers the threshold to `DEBUG`.
/// Colour is only used when standard error is a terminal. Repeated calls leave
/// the first subscriber in place.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _unused = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
