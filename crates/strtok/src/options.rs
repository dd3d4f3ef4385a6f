//! Tokenizer options gathered from the command line.
//!
//! There is no configuration file. Everything comes from flags, with
//! `RUST_LOG` controlling diagnostics (see [`init_tracing`](crate::init_tracing)).
//!
//! # Delimiter Escapes
//!
//! Delimiters are hard to type on a shell, so `--delimiters` accepts:
//! `\t` `\n` `\r` `\f` `\0` `\\`, `\s` for a space, and `\u{XXXX}` for any
//! code point.

use std::str::Chars;

use strtok_core::DelimiterSet;

use crate::CliError;

/// How tokens are written to the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One token per line.
    #[default]
    Plain,
    /// Span and escaped text per line.
    Debug,
    /// A JSON array of `{ text, start, end }` objects.
    Json,
}

/// Everything [`tokenize`](crate::tokenize) needs besides the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizeOptions {
    pub delimiters: DelimiterSet,
    pub return_delimiters: bool,
    /// Print only the number of tokens.
    pub count_only: bool,
    pub format: OutputFormat,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            delimiters: DelimiterSet::default(),
            return_delimiters: false,
            count_only: false,
            format: OutputFormat::Plain,
        }
    }
}

impl TokenizeOptions {
    /// Use the delimiters written in `raw`, after resolving escapes.
    pub fn with_escaped_delimiters(mut self, raw: &str) -> Result<Self, CliError> {
        self.delimiters = DelimiterSet::new(&unescape_delimiters(raw)?);
        Ok(self)
    }
}

/// Resolve a single-character escape.
#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        '\\' => Some('\\'),
        't' => Some('\t'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        'f' => Some('\u{C}'),
        '0' => Some('\0'),
        's' => Some(' '),
        _ => None,
    }
}

/// Resolve the escapes in a `--delimiters` value.
///
/// Fast path: a value without backslashes is returned unchanged.
pub fn unescape_delimiters(raw: &str) -> Result<String, CliError> {
    if !raw.contains('\\') {
        return Ok(raw.to_owned());
    }

    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('u') => result.push(unescape_unicode(&mut chars)?),
            Some(e) => result.push(resolve_escape(e).ok_or(CliError::InvalidEscape(e))?),
            None => return Err(CliError::TrailingBackslash),
        }
    }

    Ok(result)
}

/// Parse the `{XXXX}` part of a `\u{XXXX}` escape.
fn unescape_unicode(chars: &mut Chars<'_>) -> Result<char, CliError> {
    if chars.next() != Some('{') {
        return Err(CliError::InvalidUnicodeEscape(String::new()));
    }

    let mut digits = String::new();
    loop {
        match chars.next() {
            Some('}') => break,
            Some(c) => digits.push(c),
            None => return Err(CliError::InvalidUnicodeEscape(digits)),
        }
    }

    u32::from_str_radix(&digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| CliError::InvalidUnicodeEscape(digits))
}
