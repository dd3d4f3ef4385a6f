//! Errors surfaced by the command-line front end.

use std::io;
use std::path::PathBuf;

/// Anything that stops the CLI from printing tokens.
///
/// Running out of tokens is not an error here: the front end always checks
/// for more tokens before asking for one.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{}'", .path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", .path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("error reading '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("standard input contains invalid UTF-8 data")]
    StdinInvalidUtf8,

    #[error("error reading standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("invalid escape '\\{0}' in delimiters")]
    InvalidEscape(char),

    #[error("invalid unicode escape '\\u{{{0}}}' in delimiters")]
    InvalidUnicodeEscape(String),

    #[error("delimiters end with a lone backslash")]
    TrailingBackslash,

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Classify an I/O failure while reading `path`.
    pub(crate) fn reading(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::InvalidData => Self::InvalidUtf8 { path },
            _ => Self::Read { path, source },
        }
    }

    /// Classify an I/O failure while reading standard input.
    pub(crate) fn reading_stdin(source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::InvalidData => Self::StdinInvalidUtf8,
            _ => Self::Stdin(source),
        }
    }
}
