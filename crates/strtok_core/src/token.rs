//! Tokens handed out by the [`Tokenizer`](crate::Tokenizer).

use std::fmt;
use std::ops::Range;

/// A token: a borrowed slice of the source text plus its code-unit span.
///
/// Tokens borrow the [`SourceText`](crate::SourceText), not the tokenizer, so
/// they stay valid after the tokenizer is dropped.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    units: &'a [u16],
    start: usize,
}

impl<'a> Token<'a> {
    pub(crate) fn new(units: &'a [u16], start: usize) -> Self {
        debug_assert!(!units.is_empty(), "tokens are never empty");
        Self { units, start }
    }

    /// The code units of the token.
    pub fn as_units(&self) -> &'a [u16] {
        self.units
    }

    /// Code-unit offset of the first unit.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Code-unit offset one past the last unit.
    pub fn end(&self) -> usize {
        self.start + self.units.len()
    }

    /// `start..end` in code units.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Length in code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always `false`: tokens are never empty.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Decode to a `String`, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.units)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for c in char::decode_utf16(self.units.iter().copied()) {
            f.write_char(c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("text", &self.to_string_lossy())
            .field("span", &self.span())
            .finish()
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}
