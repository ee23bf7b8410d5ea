//! # Hyle Core
//!
//! **Positional decoder for proof public outputs**
//!
//! A proven program run publishes its output as a flat vector of textual
//! tokens: decimal integers, and hex bytes behind a decimal length prefix.
//! This crate turns that vector into a typed [`HyleOutput`] record.
//!
//! ## Features
//!
//! - **Deterministic**: one token order, no schema, no field tags
//! - **Minimal**: no I/O, no async, no global state
//! - **Strict**: malformed or truncated input is an error, never a short field
//!
//! ## Quick Start
//!
//! ```rust
//! use hyle_core::{HyleOutput, TokenCursor};
//!
//! let tokens = [
//!     "1", "0", "3", "03", "04", "05", "4", "68", "69", "74", "68",
//!     "4", "62", "79", "65", "21", "1000", "2000", "0", "99",
//! ];
//!
//! let mut cursor = TokenCursor::new(&tokens);
//! let output = HyleOutput::decode(&mut cursor).unwrap();
//!
//! assert_eq!(output.next_state, vec![3, 4, 5]);
//! assert_eq!(output.caller, "bye!");
//! // Program-specific outputs follow the record and are left alone.
//! assert_eq!(cursor.into_remainder(), &["99"]);
//! ```

pub mod cursor;
pub mod decode;
pub mod envelope;
pub mod error;
pub mod field;
pub mod output;
pub mod tokens;

// Re-export main types for convenience
pub use cursor::TokenCursor;
pub use envelope::ProofEnvelope;
pub use error::{DecodeError, EncodeError, EnvelopeError};
pub use field::Field;
pub use output::HyleOutput;
