//! UTF-16 source text for the tokenizer.
//!
//! The text is stored as 16-bit code units so that token boundaries and
//! spans are code-unit offsets. Text built from `&str` is always well formed;
//! text built from raw units may contain unpaired surrogates, which the
//! scanner treats as ordinary single-unit characters.
//!
//! # Surrogate Pairs
//!
//! ```text
//! U+1F600  ──►  [0xD83D, 0xDE00]
//!                 high    low
//! ```
//!
//! [`decode_code_point`] combines a high unit followed by a low unit into one
//! code point of width 2. Any other unit, including a lone high or low
//! surrogate, decodes to its own value with width 1.

use crate::Tokenizer;

const HIGH_SURROGATE_START: u16 = 0xD800;
const HIGH_SURROGATE_END: u16 = 0xDBFF;
const LOW_SURROGATE_START: u16 = 0xDC00;
const LOW_SURROGATE_END: u16 = 0xDFFF;

/// Owned UTF-16 text that a [`Tokenizer`] scans.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceText {
    units: Vec<u16>,
}

impl SourceText {
    /// Encode `source` as UTF-16.
    pub fn new(source: &str) -> Self {
        Self {
            units: source.encode_utf16().collect(),
        }
    }

    /// Copy raw code units. Unpaired surrogates are accepted as-is.
    pub fn from_utf16(units: &[u16]) -> Self {
        Self {
            units: units.to_vec(),
        }
    }

    /// The code units of the text.
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Length in code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the text has no code units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Decode the code point starting at `pos`.
    ///
    /// Returns the code point and its width in code units (1 or 2), or `None`
    /// when `pos` is at or past the end of the text.
    pub fn code_point_at(&self, pos: usize) -> Option<(u32, usize)> {
        (pos < self.units.len()).then(|| decode_code_point(&self.units, pos))
    }

    /// Decode the whole text, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Create a [`Tokenizer`] over this text with the default delimiters.
    pub fn tokenizer(&self) -> Tokenizer<'_> {
        Tokenizer::new(self)
    }
}

impl From<&str> for SourceText {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for SourceText {
    fn from(source: String) -> Self {
        Self::new(&source)
    }
}

impl From<Vec<u16>> for SourceText {
    fn from(units: Vec<u16>) -> Self {
        Self { units }
    }
}

#[inline]
pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..=HIGH_SURROGATE_END).contains(&unit)
}

#[inline]
pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_START..=LOW_SURROGATE_END).contains(&unit)
}

/// Returns `true` for any unit in the surrogate range `0xD800..=0xDFFF`.
#[inline]
pub(crate) fn is_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..=LOW_SURROGATE_END).contains(&unit)
}

/// Decode the code point at `pos` in `units`.
///
/// # Contract
///
/// `pos < units.len()`.
#[inline]
pub(crate) fn decode_code_point(units: &[u16], pos: usize) -> (u32, usize) {
    let first = units[pos];
    if is_high_surrogate(first) {
        if let Some(&second) = units.get(pos + 1) {
            if is_low_surrogate(second) {
                let high = u32::from(first - HIGH_SURROGATE_START);
                let low = u32::from(second - LOW_SURROGATE_START);
                return (0x1_0000 + (high << 10) + low, 2);
            }
        }
    }
    (u32::from(first), 1)
}
