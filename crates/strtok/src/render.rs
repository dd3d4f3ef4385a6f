//! Output rendering for each [`OutputFormat`].

use std::io::Write;

use serde::Serialize;
use strtok_core::Token;

use crate::{CliError, OutputFormat};

/// One token in `--format json` output.
#[derive(Debug, Serialize)]
struct TokenRecord {
    text: String,
    start: usize,
    end: usize,
}

impl From<Token<'_>> for TokenRecord {
    fn from(token: Token<'_>) -> Self {
        Self {
            text: token.to_string_lossy(),
            start: token.start(),
            end: token.end(),
        }
    }
}

/// Write every token from `tokens` in `format`. Returns how many were written.
pub(crate) fn write_tokens<'a>(
    out: &mut impl Write,
    tokens: impl Iterator<Item = Token<'a>>,
    format: OutputFormat,
) -> Result<usize, CliError> {
    match format {
        OutputFormat::Plain => {
            let mut count = 0;
            for token in tokens {
                writeln!(out, "{token}")?;
                count += 1;
            }
            Ok(count)
        }
        OutputFormat::Debug => {
            let mut count = 0;
            for token in tokens {
                writeln!(
                    out,
                    "[{}..{}) {:?}",
                    token.start(),
                    token.end(),
                    token.to_string_lossy()
                )?;
                count += 1;
            }
            Ok(count)
        }
        OutputFormat::Json => {
            let records: Vec<TokenRecord> = tokens.map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
            Ok(records.len())
        }
    }
}
