//! # Hyle Verifier
//!
//! **Proof-gated decoding of Hyle public outputs**
//!
//! This crate puts a proof verifier in front of the `hyle-core` decoder.
//! The cryptographic check is delegated to a [`ProofVerifier`], typically an
//! external program driven by [`CommandVerifier`] on the tokio runtime; the
//! output tokens are decoded only once that verifier returned "valid".
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hyle_verifier::{CommandVerifier, OutputVerifier, VerifierError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let proof_file = std::fs::read("proof.bin")?;
//!     let key = std::fs::read("verification.key")?;
//!
//!     let verifier = OutputVerifier::new(CommandVerifier::new("cairo-verify"));
//!     match verifier.verify_bytes(&proof_file, &key).await {
//!         Ok(verified) => println!("{}", serde_json::to_string(&verified.output)?),
//!         Err(VerifierError::Rejected) => eprintln!("proof rejected"),
//!         Err(e) => eprintln!("verification failed: {}", e),
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod command;
pub mod error;
pub mod result;
pub mod verifier;

// Re-export main types for convenience
pub use backend::{ProofVerifier, VerifyRequest};
pub use command::CommandVerifier;
pub use error::VerifierError;
pub use result::{VerificationReport, VerificationStatus};
pub use verifier::{decode_verified, OutputVerifier, VerifiedOutput};
