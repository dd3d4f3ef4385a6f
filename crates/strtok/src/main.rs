//! strtok CLI
//!
//! Splits text into tokens on a set of delimiter characters.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use strtok::{init_tracing, read_input, tokenize, Cli, CliError};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let options = cli.options()?;
    let source = read_input(cli.text, cli.file.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    tokenize(&source, &options, &mut out)?;
    out.flush()?;
    Ok(())
}
