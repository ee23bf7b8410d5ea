//! Error types for the Hyle verifier.
//!
//! A rejected proof and a malformed public output are separate variants so
//! callers can report them differently.

use std::time::Duration;

use hyle_core::{DecodeError, EnvelopeError};
use thiserror::Error;

/// Errors that can occur while verifying a proof and decoding its output.
#[derive(Debug, Error)]
pub enum VerifierError {
    /// The proof verifier returned "invalid". No output is decoded.
    #[error("Proof verification rejected")]
    Rejected,

    /// The proof was valid but its public output does not follow the protocol.
    #[error("Malformed public output: {0}")]
    Decode(#[from] DecodeError),

    /// The output decoded but carries a version the caller does not accept.
    #[error("Unsupported output version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version the caller accepts
        expected: u32,
        /// Version found in the output
        found: u32,
    },

    /// The proof file framing is broken.
    #[error("Invalid proof envelope: {0}")]
    Envelope(#[from] EnvelopeError),

    /// The proof verifier itself failed to produce an answer.
    #[error("Verifier backend error: {0}")]
    Backend(String),

    /// The proof verifier did not answer in time.
    #[error("Verifier timed out after {0:?}")]
    Timeout(Duration),
}

impl VerifierError {
    /// Returns `true` if the proof itself was judged invalid.
    pub fn is_rejection(&self) -> bool {
        matches!(self, VerifierError::Rejected)
    }

    /// Returns `true` if the proof was valid but its output could not be used.
    pub fn is_malformed_output(&self) -> bool {
        matches!(
            self,
            VerifierError::Decode(_) | VerifierError::UnsupportedVersion { .. }
        )
    }
}

/// Result type alias for verifier operations.
pub type Result<T> = std::result::Result<T, VerifierError>;
