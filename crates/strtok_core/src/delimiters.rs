//! Delimiter sets and the per-position membership test.
//!
//! A [`DelimiterSet`] keeps its code units, the decoded code points, the
//! largest code point, and whether any surrogate is involved. The derived
//! fields are computed once at construction, so they always match the set.
//!
//! # Two Probe Paths
//!
//! - **Fast path** (no surrogates in the set): one code unit at a time. A unit
//!   is a delimiter iff it is `<= max_code_point` and appears in the set.
//! - **Surrogate-aware path**: decode the code point at the position, pairing
//!   a high and low surrogate into one, and compare whole code points. This
//!   is required because a unit-level test would match half of a pair.

use crate::text::{decode_code_point, is_surrogate};

/// The default delimiters: space, tab, line feed, carriage return, form feed.
pub const DEFAULT_DELIMITERS: &str = " \t\n\r\u{C}";

/// An owned, immutable set of delimiter code points.
///
/// Replaced wholesale on a [`Tokenizer`](crate::Tokenizer), never edited in
/// place.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DelimiterSet {
    /// Code units as given, for the fast path.
    units: Vec<u16>,
    /// Decoded code points, for the surrogate-aware path.
    code_points: Vec<u32>,
    /// Fast-reject bound: nothing above this can be a delimiter.
    max_code_point: u32,
    /// Any unit of `units` lies in `0xD800..=0xDFFF`.
    has_surrogates: bool,
}

/// Result of probing one position of the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Probe {
    pub is_delimiter: bool,
    /// Code units covered by the probed character.
    pub width: usize,
}

impl DelimiterSet {
    /// Build a set from the characters of `delimiters`.
    pub fn new(delimiters: &str) -> Self {
        let units: Vec<u16> = delimiters.encode_utf16().collect();
        Self::from_units(units)
    }

    /// Build a set from raw code units. Surrogate pairs are combined; lone
    /// surrogates are kept as their raw value.
    pub fn from_utf16(units: &[u16]) -> Self {
        Self::from_units(units.to_vec())
    }

    /// A set with no delimiters. The whole remaining text becomes one token.
    pub fn empty() -> Self {
        Self::from_units(Vec::new())
    }

    fn from_units(units: Vec<u16>) -> Self {
        let mut code_points = Vec::with_capacity(units.len());
        let mut pos = 0;
        while pos < units.len() {
            let (code_point, width) = decode_code_point(&units, pos);
            code_points.push(code_point);
            pos += width;
        }
        let max_code_point = code_points.iter().copied().max().unwrap_or(0);
        let has_surrogates = units.iter().copied().any(is_surrogate);

        Self {
            units,
            code_points,
            max_code_point,
            has_surrogates,
        }
    }

    /// Number of delimiter code points (duplicates included).
    pub fn len(&self) -> usize {
        self.code_points.len()
    }

    /// Returns `true` if the set has no delimiters.
    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty()
    }

    /// The code units the set was built from.
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// The delimiter code points, in the order given.
    pub fn code_points(&self) -> &[u32] {
        &self.code_points
    }

    /// The largest delimiter code point, or 0 for an empty set.
    pub fn max_code_point(&self) -> u32 {
        self.max_code_point
    }

    /// Returns `true` if the set needs the surrogate-aware probe path.
    pub fn has_surrogates(&self) -> bool {
        self.has_surrogates
    }

    /// Returns `true` if `code_point` is one of the delimiters.
    pub fn contains(&self, code_point: u32) -> bool {
        code_point <= self.max_code_point && self.code_points.contains(&code_point)
    }

    /// Classify the character at `pos` in `units`.
    ///
    /// # Contract
    ///
    /// `pos < units.len()`.
    #[inline]
    pub(crate) fn probe(&self, units: &[u16], pos: usize) -> Probe {
        if self.has_surrogates {
            let (code_point, width) = decode_code_point(units, pos);
            Probe {
                is_delimiter: self.contains(code_point),
                width,
            }
        } else {
            let unit = units[pos];
            Probe {
                is_delimiter: u32::from(unit) <= self.max_code_point && self.units.contains(&unit),
                width: 1,
            }
        }
    }
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITERS)
    }
}

impl From<&str> for DelimiterSet {
    fn from(delimiters: &str) -> Self {
        Self::new(delimiters)
    }
}

impl From<&String> for DelimiterSet {
    fn from(delimiters: &String) -> Self {
        Self::new(delimiters)
    }
}

impl From<&[u16]> for DelimiterSet {
    fn from(units: &[u16]) -> Self {
        Self::from_utf16(units)
    }
}

impl FromIterator<char> for DelimiterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut units = Vec::new();
        let mut buf = [0u16; 2];
        for c in iter {
            units.extend_from_slice(c.encode_utf16(&mut buf));
        }
        Self::from_units(units)
    }
}
