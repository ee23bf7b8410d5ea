//! Primitive field decoders.
//!
//! Each decoder pulls exactly the tokens it needs from a [`TokenCursor`].
//! Variable-length fields share one length-prefix helper: a decimal count
//! of tokens, followed by that many hex byte tokens.

use crate::cursor::TokenCursor;
use crate::error::{DecodeError, Result};
use crate::field::Field;

/// Parses a plain decimal numeral: ASCII digits only, no sign, no prefix.
fn parse_decimal(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Parses one or two hexadecimal digits.
fn parse_hex_byte(token: &str) -> Option<u8> {
    if token.is_empty() || token.len() > 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(token, 16).ok()
}

/// Reads one decimal token as a `u64`.
///
/// # Errors
///
/// `MalformedInteger` if the token is not a decimal numeral in `0..=u64::MAX`.
pub fn decode_uint<T: AsRef<str>>(cursor: &mut TokenCursor<'_, T>, field: Field) -> Result<u64> {
    let position = cursor.position();
    let token = cursor.take_one(field)?;
    parse_decimal(token).ok_or_else(|| DecodeError::MalformedInteger {
        field,
        position,
        token: token.to_string(),
    })
}

/// Reads one decimal token as a `u32`.
///
/// Values above `u32::MAX` are rejected as `MalformedInteger`.
pub fn decode_u32<T: AsRef<str>>(cursor: &mut TokenCursor<'_, T>, field: Field) -> Result<u32> {
    let position = cursor.position();
    let token = cursor.take_one(field)?;
    parse_decimal(token)
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| DecodeError::MalformedInteger {
            field,
            position,
            token: token.to_string(),
        })
}

/// Reads a length prefix: a decimal count of the tokens that follow.
///
/// # Errors
///
/// `MalformedLength` for a token that is not a decimal numeral fitting in
/// `usize`.
pub fn decode_length<T: AsRef<str>>(
    cursor: &mut TokenCursor<'_, T>,
    field: Field,
) -> Result<usize> {
    let position = cursor.position();
    let token = cursor.take_one(field)?;
    parse_decimal(token)
        .and_then(|value| usize::try_from(value).ok())
        .ok_or_else(|| DecodeError::MalformedLength {
            field,
            position,
            token: token.to_string(),
        })
}

/// Reads one hex byte token.
///
/// # Errors
///
/// `MalformedByte` unless the token is one or two hex digits.
pub fn decode_byte<T: AsRef<str>>(cursor: &mut TokenCursor<'_, T>, field: Field) -> Result<u8> {
    let position = cursor.position();
    let token = cursor.take_one(field)?;
    parse_hex_byte(token).ok_or_else(|| DecodeError::MalformedByte {
        field,
        position,
        token: token.to_string(),
    })
}

/// Reads a length-prefixed sequence of raw bytes.
pub fn decode_byte_array<T: AsRef<str>>(
    cursor: &mut TokenCursor<'_, T>,
    field: Field,
) -> Result<Vec<u8>> {
    let len = decode_length(cursor, field)?;
    // The stream cannot hold more bytes than it has tokens left.
    let mut bytes = Vec::with_capacity(len.min(cursor.remaining()));
    for _ in 0..len {
        bytes.push(decode_byte(cursor, field)?);
    }
    Ok(bytes)
}

/// Reads a length-prefixed string, one character code per token.
///
/// Each byte maps to the code point of the same value, so `0x68` is `'h'`
/// and `0xe9` is `'é'`.
pub fn decode_string<T: AsRef<str>>(
    cursor: &mut TokenCursor<'_, T>,
    field: Field,
) -> Result<String> {
    let bytes = decode_byte_array(cursor, field)?;
    Ok(bytes.into_iter().map(char::from).collect())
}
