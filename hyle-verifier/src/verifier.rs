//! Verification gate.
//!
//! The public output is decoded only after the proof verifier returned
//! "valid". A rejected proof never reaches the decoder, whatever its output
//! tokens look like.

use hyle_core::{HyleOutput, ProofEnvelope};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::backend::{ProofVerifier, VerifyRequest};
use crate::error::{Result, VerifierError};

/// Output of a proof that passed verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedOutput {
    /// The decoded record
    pub output: HyleOutput,
    /// Program-specific tokens that followed the record
    pub program_outputs: Vec<String>,
}

/// Decode `tokens` if and only if `valid` is true.
///
/// # Errors
///
/// `VerifierError::Rejected` when `valid` is false (the tokens are not
/// read), `VerifierError::Decode` when they do not form a record.
pub fn decode_verified<T: AsRef<str>>(valid: bool, tokens: &[T]) -> Result<VerifiedOutput> {
    if !valid {
        warn!("proof rejected, public output not decoded");
        return Err(VerifierError::Rejected);
    }

    let (output, program_outputs) = HyleOutput::decode_with_remainder(tokens).map_err(|e| {
        warn!("valid proof carries malformed public output: {}", e);
        VerifierError::from(e)
    })?;

    Ok(VerifiedOutput {
        output,
        program_outputs,
    })
}

/// Proof verifier plus output decoder.
///
/// # Example
///
/// ```rust
/// use hyle_core::ProofEnvelope;
/// use hyle_verifier::backend::{from_fn, VerifyRequest};
/// use hyle_verifier::OutputVerifier;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let verifier = OutputVerifier::new(from_fn(|_: &VerifyRequest<'_>| Ok(true)));
/// let envelope = ProofEnvelope::new(
///     vec![1, 2, 3],
///     vec![],
///     "[1 0 0 4 68 69 74 68 4 62 79 65 21 1000 2000 0]",
/// );
///
/// let verified = verifier.verify(&envelope, b"key").await.unwrap();
/// assert_eq!(verified.output.origin, "hith");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OutputVerifier<V> {
    backend: V,
    expected_version: Option<u32>,
}

impl<V: ProofVerifier> OutputVerifier<V> {
    /// Create a gate around `backend` that accepts any output version.
    pub fn new(backend: V) -> Self {
        Self {
            backend,
            expected_version: None,
        }
    }

    /// Only accept outputs whose `version` equals `version`.
    pub fn with_expected_version(mut self, version: u32) -> Self {
        self.expected_version = Some(version);
        self
    }

    /// Returns the configured version guard, if any.
    pub fn expected_version(&self) -> Option<u32> {
        self.expected_version
    }

    /// Returns the underlying proof verifier.
    pub fn backend(&self) -> &V {
        &self.backend
    }

    /// Verify the envelope's proof, then decode its output.
    pub async fn verify(
        &self,
        envelope: &ProofEnvelope,
        verification_key: &[u8],
    ) -> Result<VerifiedOutput> {
        let request = VerifyRequest {
            proof: &envelope.proof,
            public_inputs: &envelope.public_inputs,
            verification_key,
        };
        let valid = self.backend.verify(&request).await?;

        let verified = decode_verified(valid, &envelope.output_tokens())?;
        self.check_version(&verified.output)?;

        info!(
            version = verified.output.version,
            block_number = verified.output.block_number,
            program_outputs = verified.program_outputs.len(),
            "proof verified"
        );
        Ok(verified)
    }

    /// Parse a proof file, then [`verify`](Self::verify) it.
    pub async fn verify_bytes(
        &self,
        proof_file: &[u8],
        verification_key: &[u8],
    ) -> Result<VerifiedOutput> {
        let envelope = ProofEnvelope::from_bytes(proof_file)?;
        self.verify(&envelope, verification_key).await
    }

    fn check_version(&self, output: &HyleOutput) -> Result<()> {
        match self.expected_version {
            Some(expected) if expected != output.version => {
                warn!(expected, found = output.version, "unsupported output version");
                Err(VerifierError::UnsupportedVersion {
                    expected,
                    found: output.version,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::from_fn;
    use std::sync::atomic::{AtomicBool, Ordering};

    const OUTPUT: &str = "[1 0 0 4 68 69 74 68 4 62 79 65 21 1000 2000 0 5 6]";

    #[test]
    fn test_decode_verified_valid() {
        let tokens = hyle_core::tokens::tokenize(OUTPUT);
        let verified = decode_verified(true, &tokens).unwrap();
        assert_eq!(verified.output.caller, "bye!");
        assert_eq!(verified.program_outputs, vec!["5", "6"]);
    }

    #[test]
    fn test_decode_verified_rejected_ignores_tokens() {
        let garbage = ["not", "a", "record"];
        assert!(decode_verified(false, &garbage).unwrap_err().is_rejection());
    }

    #[tokio::test]
    async fn test_gate_passes_envelope_to_backend() {
        let seen = AtomicBool::new(false);
        let verifier = OutputVerifier::new(from_fn(|request: &VerifyRequest<'_>| {
            seen.store(true, Ordering::SeqCst);
            Ok(request.proof == b"\x07\x07"
                && request.public_inputs == b"\x01"
                && request.verification_key == b"vk")
        }));
        let envelope = ProofEnvelope::new(vec![7, 7], vec![1], OUTPUT);

        let verified = verifier.verify(&envelope, b"vk").await.unwrap();
        assert!(seen.load(Ordering::SeqCst));
        assert_eq!(verified.output.block_time, 2000);
    }

    #[tokio::test]
    async fn test_backend_error_propagates() {
        let verifier = OutputVerifier::new(from_fn(|_: &VerifyRequest<'_>| {
            Err(VerifierError::Backend("unreachable prover".into()))
        }));
        let envelope = ProofEnvelope::new(vec![], vec![], OUTPUT);
        assert!(matches!(
            verifier.verify(&envelope, b"").await,
            Err(VerifierError::Backend(_))
        ));
    }

    #[tokio::test]
    async fn test_expected_version() {
        let verifier = OutputVerifier::new(from_fn(|_: &VerifyRequest<'_>| Ok(true)))
            .with_expected_version(2);
        let envelope = ProofEnvelope::new(vec![], vec![], OUTPUT);

        let err = verifier.verify(&envelope, b"").await.unwrap_err();
        assert!(matches!(
            err,
            VerifierError::UnsupportedVersion {
                expected: 2,
                found: 1
            }
        ));
    }

    #[tokio::test]
    async fn test_verify_bytes_bad_envelope() {
        let verifier = OutputVerifier::new(from_fn(|_: &VerifyRequest<'_>| Ok(true)));
        assert!(matches!(
            verifier.verify_bytes(&[1, 0, 0], b"").await,
            Err(VerifierError::Envelope(_))
        ));
    }
}
