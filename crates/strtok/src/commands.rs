//! Command handlers: reading input and tokenizing it.

use std::io::{self, Read, Write};
use std::path::Path;

use strtok_core::{SourceText, Tokenizer};

use crate::{render, CliError, TokenizeOptions};

/// Pick the input text: the literal argument, else the file, else stdin.
pub fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String, CliError> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        tracing::debug!(path = %path.display(), "reading input file");
        return std::fs::read_to_string(path)
            .map_err(|e| CliError::reading(path.to_path_buf(), e));
    }

    tracing::debug!("reading standard input");
    read_stdin(io::stdin().lock())
}

/// Read all of `reader` as standard input.
fn read_stdin(mut reader: impl Read) -> Result<String, CliError> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(CliError::reading_stdin)?;
    Ok(buf)
}

/// Tokenize `source` and write the result to `out`.
///
/// Returns the number of tokens, whether they were printed or only counted.
pub fn tokenize(
    source: &str,
    options: &TokenizeOptions,
    out: &mut impl Write,
) -> Result<usize, CliError> {
    let text = SourceText::new(source);
    let tokenizer = Tokenizer::with_options(
        &text,
        options.delimiters.clone(),
        options.return_delimiters,
    );
    tracing::debug!(
        units = text.len(),
        delimiters = options.delimiters.len(),
        return_delimiters = options.return_delimiters,
        format = ?options.format,
        "tokenizing"
    );

    if options.count_only {
        let count = tokenizer.count_remaining_tokens();
        writeln!(out, "{count}")?;
        return Ok(count);
    }

    let count = render::write_tokens(out, tokenizer, options.format)?;
    tracing::debug!(count, "tokens written");
    Ok(count)
}
