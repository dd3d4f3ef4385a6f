//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::{CliError, OutputFormat, TokenizeOptions};

#[derive(Debug, Parser)]
#[command(
    name = "strtok",
    version,
    about = "Split text into tokens on delimiter characters"
)]
pub struct Cli {
    /// Text to tokenize. Read from --file or stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file.
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Delimiter characters. Escapes: \t \n \r \f \0 \\ \s (space) \u{XXXX}.
    /// Default: space, tab, newline, carriage return, form feed.
    #[arg(short, long, value_name = "DELIMS")]
    pub delimiters: Option<String>,

    /// Return each delimiter as a token of its own.
    #[arg(short, long)]
    pub return_delimiters: bool,

    /// Print only the number of tokens.
    #[arg(short, long)]
    pub count: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Log debug output to stderr (RUST_LOG overrides).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the tokenizer options the flags describe.
    pub fn options(&self) -> Result<TokenizeOptions, CliError> {
        let options = TokenizeOptions {
            return_delimiters: self.return_delimiters,
            count_only: self.count,
            format: self.format,
            ..TokenizeOptions::default()
        };
        match self.delimiters.as_deref() {
            Some(raw) => options.with_escaped_delimiters(raw),
            None => Ok(options),
        }
    }
}
