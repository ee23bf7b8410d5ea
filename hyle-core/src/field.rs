//! Positional field layout of the public-output record.
//!
//! The token stream carries no field names. Producer and consumer agree on
//! the order below, and every decode error is annotated with the field that
//! was being read when it happened.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One field of the public-output record, in stream order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Single decimal token.
    Version,
    /// Length-prefixed hex bytes.
    InitialState,
    /// Length-prefixed hex bytes.
    NextState,
    /// Length-prefixed hex character codes.
    Origin,
    /// Length-prefixed hex character codes.
    Caller,
    /// Single decimal token, full `u64` range.
    BlockNumber,
    /// Single decimal token, full `u64` range.
    BlockTime,
    /// Length-prefixed hex bytes.
    TxHash,
}

/// How a field is laid out in the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// One decimal token.
    Uint,
    /// Decimal length token followed by that many hex byte tokens.
    ByteArray,
    /// Decimal length token followed by that many hex character-code tokens.
    Text,
}

impl Field {
    /// Stream order of the record, mirrored by the field sequence in
    /// [`HyleOutput::decode`](crate::HyleOutput::decode).
    pub const ORDER: [Field; 8] = [
        Field::Version,
        Field::InitialState,
        Field::NextState,
        Field::Origin,
        Field::Caller,
        Field::BlockNumber,
        Field::BlockTime,
        Field::TxHash,
    ];

    /// Returns the snake_case name used in JSON and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::Version => "version",
            Field::InitialState => "initial_state",
            Field::NextState => "next_state",
            Field::Origin => "origin",
            Field::Caller => "caller",
            Field::BlockNumber => "block_number",
            Field::BlockTime => "block_time",
            Field::TxHash => "tx_hash",
        }
    }

    /// Returns the wire layout of this field.
    pub fn encoding(self) -> Encoding {
        match self {
            Field::Version | Field::BlockNumber | Field::BlockTime => Encoding::Uint,
            Field::InitialState | Field::NextState | Field::TxHash => Encoding::ByteArray,
            Field::Origin | Field::Caller => Encoding::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
