//! The public-output record carried by a proof.
//!
//! This module provides [`HyleOutput`], its positional decoder and the
//! producer-side encoder.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cursor::TokenCursor;
use crate::decode::{decode_byte_array, decode_string, decode_u32, decode_uint};
use crate::error::{EncodeError, Result};
use crate::field::Field;
use crate::tokens::tokenize;

/// Decoded public output of a proven program run.
///
/// Fields appear in the token stream in declaration order (see
/// [`Field::ORDER`]). In JSON, `block_number` and `block_time` are written as
/// decimal strings so values above 2^53 survive consumers that read numbers
/// as doubles.
///
/// # Example
///
/// ```rust
/// use hyle_core::HyleOutput;
///
/// let output = HyleOutput::parse(
///     "[1 0 3 03 04 05 4 68 69 74 68 4 62 79 65 21 1000 2000 0]",
/// ).unwrap();
///
/// assert_eq!(output.origin, "hith");
/// assert_eq!(output.caller, "bye!");
/// assert_eq!(output.block_number, 1000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyleOutput {
    /// Output format version, read but not interpreted
    pub version: u32,

    /// Contract state before the transition
    pub initial_state: Vec<u8>,

    /// Contract state after the transition
    pub next_state: Vec<u8>,

    /// Identity that originated the transaction
    pub origin: String,

    /// Identity that called the contract
    pub caller: String,

    /// Block height
    #[serde(with = "u64_decimal")]
    pub block_number: u64,

    /// Block timestamp
    #[serde(with = "u64_decimal")]
    pub block_time: u64,

    /// Transaction hash
    pub tx_hash: Vec<u8>,
}

impl HyleOutput {
    /// Decode one record from the cursor, leaving any later tokens in place.
    ///
    /// # Errors
    ///
    /// The first `DecodeError` raised by a field decoder; nothing is returned
    /// for the fields read before it.
    pub fn decode<T: AsRef<str>>(cursor: &mut TokenCursor<'_, T>) -> Result<Self> {
        let start = cursor.position();
        let decoded = Self::decode_fields(cursor);

        match &decoded {
            Ok(_) => debug!(
                consumed = cursor.position() - start,
                remaining = cursor.remaining(),
                "decoded public output"
            ),
            Err(e) => debug!(field = %e.field(), position = e.position(), "public output decode failed: {}", e),
        }
        decoded
    }

    fn decode_fields<T: AsRef<str>>(cursor: &mut TokenCursor<'_, T>) -> Result<Self> {
        Ok(Self {
            version: decode_u32(cursor, Field::Version)?,
            initial_state: decode_byte_array(cursor, Field::InitialState)?,
            next_state: decode_byte_array(cursor, Field::NextState)?,
            origin: decode_string(cursor, Field::Origin)?,
            caller: decode_string(cursor, Field::Caller)?,
            block_number: decode_uint(cursor, Field::BlockNumber)?,
            block_time: decode_uint(cursor, Field::BlockTime)?,
            tx_hash: decode_byte_array(cursor, Field::TxHash)?,
        })
    }

    /// Decode a record from the front of a token slice.
    ///
    /// Trailing tokens are ignored.
    pub fn from_tokens<T: AsRef<str>>(tokens: &[T]) -> Result<Self> {
        Self::decode(&mut TokenCursor::new(tokens))
    }

    /// Decode a record and return the tokens that follow it.
    ///
    /// The tail is the program-specific output appended by the producer.
    pub fn decode_with_remainder<T: AsRef<str>>(tokens: &[T]) -> Result<(Self, Vec<String>)> {
        let mut cursor = TokenCursor::new(tokens);
        let output = Self::decode(&mut cursor)?;
        let rest = cursor
            .into_remainder()
            .iter()
            .map(|token| token.as_ref().to_string())
            .collect();
        Ok((output, rest))
    }

    /// Tokenize printed output text and decode the record at its front.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_tokens(&tokenize(text))
    }

    /// Encode this record into the token protocol.
    ///
    /// Integers are written in decimal, bytes as two lower-case hex digits.
    ///
    /// # Errors
    ///
    /// `EncodeError::UnencodableChar` if `origin` or `caller` holds a
    /// character above U+00FF.
    pub fn encode(&self) -> std::result::Result<Vec<String>, EncodeError> {
        let mut tokens = Vec::with_capacity(self.token_count());

        tokens.push(self.version.to_string());
        push_bytes(&mut tokens, &self.initial_state);
        push_bytes(&mut tokens, &self.next_state);
        push_text(&mut tokens, &self.origin, Field::Origin)?;
        push_text(&mut tokens, &self.caller, Field::Caller)?;
        tokens.push(self.block_number.to_string());
        tokens.push(self.block_time.to_string());
        push_bytes(&mut tokens, &self.tx_hash);

        Ok(tokens)
    }

    /// Encode this record as bracketed, space-separated text.
    pub fn to_token_string(&self) -> std::result::Result<String, EncodeError> {
        Ok(format!("[{}]", self.encode()?.join(" ")))
    }

    /// Number of tokens this record occupies once encoded.
    pub fn token_count(&self) -> usize {
        // version, block_number, block_time and five length prefixes
        8 + self.initial_state.len()
            + self.next_state.len()
            + self.origin.chars().count()
            + self.caller.chars().count()
            + self.tx_hash.len()
    }
}

fn push_bytes(tokens: &mut Vec<String>, bytes: &[u8]) {
    tokens.push(bytes.len().to_string());
    tokens.extend(bytes.iter().map(|b| format!("{:02x}", b)));
}

fn push_text(
    tokens: &mut Vec<String>,
    text: &str,
    field: Field,
) -> std::result::Result<(), EncodeError> {
    let bytes = text
        .chars()
        .map(|ch| u8::try_from(ch).map_err(|_| EncodeError::UnencodableChar { field, ch }))
        .collect::<std::result::Result<Vec<u8>, _>>()?;
    push_bytes(tokens, &bytes);
    Ok(())
}

/// Exact decimal-string serialization for `u64` fields.
mod u64_decimal {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Number(u64),
    }

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => {
                if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(D::Error::custom(format!("invalid u64 string: {:?}", text)));
                }
                text.parse()
                    .map_err(|_| D::Error::custom(format!("u64 out of range: {}", text)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    fn sample() -> HyleOutput {
        HyleOutput {
            version: 1,
            initial_state: vec![],
            next_state: vec![3, 4, 5],
            origin: "hith".into(),
            caller: "bye!".into(),
            block_number: 1000,
            block_time: 2000,
            tx_hash: vec![],
        }
    }

    #[test]
    fn test_decode_sample() {
        let tokens = [
            "1", "0", "3", "03", "04", "05", "4", "68", "69", "74", "68", "4", "62", "79", "65",
            "21", "1000", "2000", "0",
        ];
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(HyleOutput::decode(&mut cursor).unwrap(), sample());
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_encode_sample() {
        let tokens = sample().encode().unwrap();
        assert_eq!(tokens.len(), sample().token_count());
        assert_eq!(
            sample().to_token_string().unwrap(),
            "[1 0 3 03 04 05 4 68 69 74 68 4 62 79 65 21 1000 2000 0]"
        );
    }

    #[test]
    fn test_encode_rejects_wide_char() {
        let mut output = sample();
        output.caller = "b\u{2603}".into();
        assert_eq!(
            output.encode().unwrap_err(),
            EncodeError::UnencodableChar {
                field: Field::Caller,
                ch: '\u{2603}'
            }
        );
    }

    #[test]
    fn test_remainder_returned() {
        let mut tokens = sample().encode().unwrap();
        tokens.push("42".into());
        tokens.push("7".into());

        let (output, rest) = HyleOutput::decode_with_remainder(&tokens).unwrap();
        assert_eq!(output, sample());
        assert_eq!(rest, vec!["42".to_string(), "7".to_string()]);
    }

    #[test]
    fn test_decode_sequence_matches_field_order() {
        // With every variable field empty, field k sits at token k.
        let tokens = ["7", "0", "0", "0", "0", "1", "2", "0"];
        for (k, field) in Field::ORDER.into_iter().enumerate() {
            let err = HyleOutput::from_tokens(&tokens[..k]).unwrap_err();
            assert_eq!(err, DecodeError::ExhaustedInput { field, position: k });
        }
        assert!(HyleOutput::from_tokens(&tokens).is_ok());
    }

    #[test]
    fn test_failure_names_field() {
        let err = HyleOutput::parse("[1 0 0 0 0 12x 0 0]").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedInteger {
                field: Field::BlockNumber,
                position: 5,
                token: "12x".into()
            }
        );
    }

    #[test]
    fn test_json_u64_as_string() {
        let mut output = sample();
        output.block_number = u64::MAX;
        output.block_time = (1u64 << 53) + 1;

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["block_number"], "18446744073709551615");
        assert_eq!(json["block_time"], "9007199254740993");
        assert_eq!(json["version"], 1);

        let back: HyleOutput = serde_json::from_value(json).unwrap();
        assert_eq!(back, output);
    }

    #[test]
    fn test_json_accepts_plain_numbers() {
        let json = r#"{"version":1,"initial_state":[],"next_state":[],"origin":"","caller":"",
            "block_number":12,"block_time":"13","tx_hash":[]}"#;
        let output: HyleOutput = serde_json::from_str(json).unwrap();
        assert_eq!(output.block_number, 12);
        assert_eq!(output.block_time, 13);
    }

    #[test]
    fn test_json_rejects_signed_string() {
        let json = r#"{"version":1,"initial_state":[],"next_state":[],"origin":"","caller":"",
            "block_number":"-1","block_time":"0","tx_hash":[]}"#;
        assert!(serde_json::from_str::<HyleOutput>(json).is_err());
    }
}
