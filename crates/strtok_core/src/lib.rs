//! Delimiter-based lazy token scanner over UTF-16 text.
//!
//! A [`Tokenizer`] walks a borrowed [`SourceText`] and hands out the
//! substrings separated by runs of delimiter code points. Delimiters can
//! optionally be returned as one-code-point tokens, and the delimiter set can
//! be swapped mid-scan with [`Tokenizer::next_token_with`].
//!
//! # Architecture
//!
//! ```text
//! &str / &[u16]
//!     │
//!     ▼
//! SourceText ──► Tokenizer ◄── DelimiterSet
//!                    │
//!                    ▼
//!              Token<'a>  (borrowed UTF-16 slice + span)
//! ```
//!
//! Positions are UTF-16 code-unit offsets. Characters outside the Basic
//! Multilingual Plane occupy two units; unpaired surrogates are kept as their
//! raw unit value and never decoded.

mod delimiters;
mod error;
mod text;
mod token;
mod tokenizer;

pub use delimiters::{DelimiterSet, DEFAULT_DELIMITERS};
pub use error::NoMoreTokens;
pub use text::SourceText;
pub use token::Token;
pub use tokenizer::Tokenizer;
