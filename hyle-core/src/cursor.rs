//! One-directional cursor over a public-output token sequence.
//!
//! The cursor borrows the caller's tokens and only moves its own offset;
//! the input slice is never mutated.

use crate::error::{DecodeError, Result};
use crate::field::Field;

/// Front-to-back reader over a slice of textual tokens.
///
/// There is no peek and no rewind: every call to [`TokenCursor::take_one`]
/// consumes exactly one token.
///
/// # Example
///
/// ```rust
/// use hyle_core::{Field, TokenCursor};
///
/// let tokens = ["1", "0"];
/// let mut cursor = TokenCursor::new(&tokens);
/// assert_eq!(cursor.take_one(Field::Version).unwrap(), "1");
/// assert_eq!(cursor.remaining(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TokenCursor<'a, T> {
    tokens: &'a [T],
    offset: usize,
}

impl<'a, T: AsRef<str>> TokenCursor<'a, T> {
    /// Creates a cursor positioned at the first token.
    pub fn new(tokens: &'a [T]) -> Self {
        Self { tokens, offset: 0 }
    }

    /// Removes and returns the next token.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::ExhaustedInput` if no tokens remain.
    pub fn take_one(&mut self, field: Field) -> Result<&'a str> {
        let token = self
            .tokens
            .get(self.offset)
            .ok_or(DecodeError::ExhaustedInput {
                field,
                position: self.offset,
            })?;
        self.offset += 1;
        Ok(token.as_ref())
    }

    /// Index of the next token to be consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Number of tokens not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.offset
    }

    /// Returns `true` once every token has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Ends decoding and returns the unconsumed tail.
    pub fn into_remainder(self) -> &'a [T] {
        &self.tokens[self.offset..]
    }
}
