/// Returned by [`Tokenizer::next_token`](crate::Tokenizer::next_token) once
/// the text has no tokens left.
///
/// This is an end-of-sequence signal, not a data error: callers that check
/// [`has_more_tokens`](crate::Tokenizer::has_more_tokens) first never see it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, thiserror::Error)]
#[error("no more tokens")]
pub struct NoMoreTokens;
