//! Error types for the Hyle core library.
//!
//! Decoding failures carry the field being read and the index of the token
//! that triggered them. Encoding and envelope framing have their own enums
//! so callers can tell a malformed public input from a malformed proof file.

use thiserror::Error;

use crate::field::Field;

/// Errors raised while decoding a public-output token stream.
///
/// Every variant aborts the whole record; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A token was required but the stream had none left.
    #[error("Exhausted input while reading '{field}' at token {position}")]
    ExhaustedInput {
        /// Field being decoded
        field: Field,
        /// Token index at which input ran out
        position: usize,
    },

    /// A length prefix was not a non-negative decimal numeral.
    #[error("Malformed length for '{field}' at token {position}: {token:?}")]
    MalformedLength {
        /// Field being decoded
        field: Field,
        /// Index of the offending token
        position: usize,
        /// The offending token
        token: String,
    },

    /// A byte token was not one or two hexadecimal digits.
    #[error("Malformed byte in '{field}' at token {position}: {token:?}")]
    MalformedByte {
        /// Field being decoded
        field: Field,
        /// Index of the offending token
        position: usize,
        /// The offending token
        token: String,
    },

    /// An integer token was not a decimal numeral fitting the field width.
    #[error("Malformed integer for '{field}' at token {position}: {token:?}")]
    MalformedInteger {
        /// Field being decoded
        field: Field,
        /// Index of the offending token
        position: usize,
        /// The offending token
        token: String,
    },
}

impl DecodeError {
    /// Returns the field that was being decoded.
    pub fn field(&self) -> Field {
        match self {
            DecodeError::ExhaustedInput { field, .. }
            | DecodeError::MalformedLength { field, .. }
            | DecodeError::MalformedByte { field, .. }
            | DecodeError::MalformedInteger { field, .. } => *field,
        }
    }

    /// Returns the token index the error refers to.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::ExhaustedInput { position, .. }
            | DecodeError::MalformedLength { position, .. }
            | DecodeError::MalformedByte { position, .. }
            | DecodeError::MalformedInteger { position, .. } => *position,
        }
    }
}

/// Errors raised while encoding a record back into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Strings are encoded one byte per character; wider code points do not fit.
    #[error("Character {ch:?} in '{field}' cannot be encoded as a single byte")]
    UnencodableChar {
        /// Field being encoded
        field: Field,
        /// The character above U+00FF
        ch: char,
    },
}

/// Errors raised while reading or writing a proof envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// The file ended inside a section or its length prefix.
    #[error("Truncated envelope: {section} needs {needed} bytes, {available} available")]
    Truncated {
        /// Section being read
        section: &'static str,
        /// Bytes required
        needed: usize,
        /// Bytes left in the input
        available: usize,
    },

    /// A section is longer than a `u32` length prefix can describe.
    #[error("Envelope section {section} is too large ({len} bytes)")]
    SectionTooLarge {
        /// Section being written
        section: &'static str,
        /// Its length
        len: usize,
    },

    /// The trailing output segment is not UTF-8 text.
    #[error("Envelope output segment is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_field() {
        let err = DecodeError::MalformedByte {
            field: Field::Origin,
            position: 12,
            token: "zz".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("origin"));
        assert!(msg.contains("12"));
        assert!(msg.contains("zz"));
    }

    #[test]
    fn test_accessors() {
        let err = DecodeError::ExhaustedInput {
            field: Field::TxHash,
            position: 22,
        };
        assert_eq!(err.field(), Field::TxHash);
        assert_eq!(err.position(), 22);
    }

    #[test]
    fn test_truncated_display() {
        let err = EnvelopeError::Truncated {
            section: "proof",
            needed: 10,
            available: 3,
        };
        assert!(err.to_string().contains("proof needs 10 bytes, 3 available"));
    }
}
