//! strtok command-line front end.
//!
//! The binary parses flags with `clap`, reads the text from an argument, a
//! file, or stdin, and prints the tokens produced by [`strtok_core`]. The
//! pieces live here so integration tests can drive them without spawning a
//! process.
//!
//! ```text
//! args ──► TokenizeOptions ─┐
//!                           ├──► commands::tokenize ──► render ──► stdout
//! input ──► read_input ─────┘
//! ```

use std::sync::Once;

pub mod args;
pub mod commands;
pub mod error;
pub mod options;
mod render;

pub use args::Cli;
pub use commands::{read_input, tokenize};
pub use error::CliError;
pub use options::{unescape_delimiters, OutputFormat, TokenizeOptions};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic output on stderr.
///
/// Safe to call multiple times. `RUST_LOG` takes precedence, e.g.
/// `RUST_LOG=strtok_core=trace`. Without it, nothing is installed unless
/// `verbose` is set, which enables `debug` for the CLI and `trace` for the
/// scanner.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("strtok=debug,strtok_core=trace")
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    });
}
