//! The token scanner.
//!
//! # State
//!
//! ```text
//!   consumed          cached_boundary
//!  ◄────────►             │
//! [ABCD\tEFG ...  ]       ▼
//!            ▲
//!         position
//! ```
//!
//! `position` only moves forward. `cached_boundary` remembers where the next
//! token starts, as computed by [`Tokenizer::has_more_tokens`], so the
//! following [`Tokenizer::next_token`] does not rescan the delimiter run. The
//! cache is single-use and is dropped whenever the delimiter set is replaced.
//!
//! # Returning Delimiters
//!
//! With `return_delimiters` set, delimiter runs are never skipped. Each
//! delimiter code point comes out as its own token, one per call.

use std::iter::FusedIterator;

use crate::{DelimiterSet, NoMoreTokens, SourceText, Token};

/// Lazy scanner over a borrowed [`SourceText`].
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    text: &'a SourceText,
    delimiters: DelimiterSet,
    return_delimiters: bool,
    /// End of the consumed prefix, in code units.
    position: usize,
    /// Start of the next token as seen from `position` with the current
    /// delimiters. Cleared by `next_token` and by any delimiter change.
    cached_boundary: Option<usize>,
}

impl<'a> Tokenizer<'a> {
    /// Tokenize `text` on [`DEFAULT_DELIMITERS`](crate::DEFAULT_DELIMITERS),
    /// skipping delimiters.
    pub fn new(text: &'a SourceText) -> Self {
        Self::with_options(text, DelimiterSet::default(), false)
    }

    /// Tokenize `text` on `delimiters`, skipping delimiters.
    pub fn with_delimiters(text: &'a SourceText, delimiters: impl Into<DelimiterSet>) -> Self {
        Self::with_options(text, delimiters, false)
    }

    /// Tokenize `text` on `delimiters`. When `return_delimiters` is set, each
    /// delimiter is returned as a token of one code point.
    pub fn with_options(
        text: &'a SourceText,
        delimiters: impl Into<DelimiterSet>,
        return_delimiters: bool,
    ) -> Self {
        Self {
            text,
            delimiters: delimiters.into(),
            return_delimiters,
            position: 0,
            cached_boundary: None,
        }
    }

    /// Returns `true` if a following [`next_token`](Self::next_token) will
    /// succeed.
    ///
    /// Idempotent: the boundary it finds is cached and reused by the next
    /// `next_token` call unless the delimiters change first.
    pub fn has_more_tokens(&mut self) -> bool {
        let boundary = self.skip_delimiters(self.position);
        self.cached_boundary = Some(boundary);
        boundary < self.text.len()
    }

    /// Return the next token and advance past it.
    pub fn next_token(&mut self) -> Result<Token<'a>, NoMoreTokens> {
        let start = match self.cached_boundary.take() {
            Some(boundary) => boundary,
            None => self.skip_delimiters(self.position),
        };
        self.position = start;

        if start >= self.text.len() {
            tracing::trace!(position = start, "tokenizer exhausted");
            return Err(NoMoreTokens);
        }

        let end = self.scan_token(start);
        self.position = end;
        let units: &'a [u16] = self.text.as_units();
        Ok(Token::new(&units[start..end], start))
    }

    /// Switch to `delimiters`, then return the next token.
    ///
    /// The new set stays in effect for all later calls. Text already consumed
    /// is not rescanned.
    pub fn next_token_with(
        &mut self,
        delimiters: impl Into<DelimiterSet>,
    ) -> Result<Token<'a>, NoMoreTokens> {
        self.set_delimiters(delimiters.into());
        self.next_token()
    }

    /// Number of tokens [`next_token`](Self::next_token) would still return
    /// with the current delimiters. Does not move the tokenizer.
    pub fn count_remaining_tokens(&self) -> usize {
        let len = self.text.len();
        let mut count = 0;
        let mut pos = self.position;
        while pos < len {
            pos = self.skip_delimiters(pos);
            if pos >= len {
                break;
            }
            pos = self.scan_token(pos);
            count += 1;
        }
        count
    }

    /// Same as [`has_more_tokens`](Self::has_more_tokens).
    pub fn has_more_elements(&mut self) -> bool {
        self.has_more_tokens()
    }

    /// Same as [`next_token`](Self::next_token).
    pub fn next_element(&mut self) -> Result<Token<'a>, NoMoreTokens> {
        self.next_token()
    }

    /// Current code-unit offset: everything before it has been consumed.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The delimiter set currently in effect.
    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    /// Whether delimiters are returned as tokens.
    pub fn returns_delimiters(&self) -> bool {
        self.return_delimiters
    }

    /// The text being scanned.
    pub fn source(&self) -> &'a SourceText {
        self.text
    }

    /// The unconsumed code units, from the current position to the end.
    pub fn remaining(&self) -> &'a [u16] {
        let units: &'a [u16] = self.text.as_units();
        &units[self.position..]
    }

    fn set_delimiters(&mut self, delimiters: DelimiterSet) {
        tracing::trace!(
            count = delimiters.len(),
            max_code_point = delimiters.max_code_point(),
            has_surrogates = delimiters.has_surrogates(),
            position = self.position,
            "delimiters replaced"
        );
        self.delimiters = delimiters;
        self.cached_boundary = None;
    }

    /// Index of the first non-delimiter at or after `start`, or `start`
    /// itself when delimiters are returned as tokens.
    fn skip_delimiters(&self, start: usize) -> usize {
        if self.return_delimiters {
            return start;
        }
        let units = self.text.as_units();
        let mut pos = start;
        while pos < units.len() {
            let probe = self.delimiters.probe(units, pos);
            if !probe.is_delimiter {
                break;
            }
            pos += probe.width;
        }
        pos
    }

    /// Index of the first delimiter at or after `start`, or the end of the
    /// text. With `return_delimiters`, a delimiter at `start` is consumed as
    /// a token of its own.
    fn scan_token(&self, start: usize) -> usize {
        let units = self.text.as_units();
        let mut pos = start;
        while pos < units.len() {
            let probe = self.delimiters.probe(units, pos);
            if probe.is_delimiter {
                break;
            }
            pos += probe.width;
        }
        if self.return_delimiters && pos == start && pos < units.len() {
            pos += self.delimiters.probe(units, pos).width;
        }
        pos
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().ok()
    }
}

impl FusedIterator for Tokenizer<'_> {}
