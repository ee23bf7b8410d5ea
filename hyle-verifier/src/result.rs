//! Verification report.
//!
//! Summarizes one verification attempt for logs and machine-readable output.

use std::time::Duration;

use hyle_core::HyleOutput;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, VerifierError};
use crate::verifier::VerifiedOutput;

/// Outcome class of a verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Proof valid and output decoded.
    Verified,
    /// Proof judged invalid.
    Rejected,
    /// Proof valid but output malformed or of an unexpected version.
    MalformedOutput,
    /// No verdict: broken envelope, backend failure or timeout.
    Error,
}

impl VerificationStatus {
    /// Classify a verifier error.
    pub fn from_error(err: &VerifierError) -> Self {
        if err.is_rejection() {
            VerificationStatus::Rejected
        } else if err.is_malformed_output() {
            VerificationStatus::MalformedOutput
        } else {
            VerificationStatus::Error
        }
    }
}

/// Result of one verification attempt.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use hyle_verifier::{VerificationReport, VerificationStatus, VerifierError};
///
/// let outcome = Err(VerifierError::Rejected);
/// let report = VerificationReport::new(b"proof file", &outcome, Duration::from_millis(12));
///
/// assert_eq!(report.status, VerificationStatus::Rejected);
/// assert!(report.output.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Outcome class.
    pub status: VerificationStatus,

    /// SHA-256 of the proof file, hex-encoded.
    pub proof_sha256: String,

    /// Time spent verifying and decoding.
    #[serde(with = "duration_millis")]
    pub total_time: Duration,

    /// Decoded record, present only when verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<HyleOutput>,

    /// Tokens following the record.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub program_outputs: Vec<String>,

    /// Error message if verification did not succeed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationReport {
    /// Build a report from the proof file bytes and the verifier outcome.
    pub fn new(proof_file: &[u8], outcome: &Result<VerifiedOutput>, total_time: Duration) -> Self {
        let proof_sha256 = hex::encode(Sha256::digest(proof_file));

        match outcome {
            Ok(verified) => Self {
                status: VerificationStatus::Verified,
                proof_sha256,
                total_time,
                output: Some(verified.output.clone()),
                program_outputs: verified.program_outputs.clone(),
                error: None,
            },
            Err(err) => Self {
                status: VerificationStatus::from_error(err),
                proof_sha256,
                total_time,
                output: None,
                program_outputs: Vec::new(),
                error: Some(err.to_string()),
            },
        }
    }

    /// Returns `true` if the proof was valid and its output decoded.
    pub fn is_verified(&self) -> bool {
        self.status == VerificationStatus::Verified
    }
}

/// Custom serialization for Duration as milliseconds.
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

impl std::fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digest = &self.proof_sha256[..self.proof_sha256.len().min(16)];
        match &self.output {
            Some(output) => write!(
                f,
                "Proof {} VERIFIED (version {}, block {}, caller '{}', {:?} total)",
                digest, output.version, output.block_number, output.caller, self.total_time
            ),
            None => write!(
                f,
                "Proof {} NOT VERIFIED ({})",
                digest,
                self.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyle_core::{DecodeError, Field};

    fn verified() -> VerifiedOutput {
        VerifiedOutput {
            output: HyleOutput {
                version: 1,
                caller: "bye!".into(),
                block_number: u64::MAX,
                ..Default::default()
            },
            program_outputs: vec!["9".into()],
        }
    }

    #[test]
    fn test_success_report() {
        let report = VerificationReport::new(b"abc", &Ok(verified()), Duration::from_millis(5));

        assert!(report.is_verified());
        assert_eq!(
            report.proof_sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(report.program_outputs, vec!["9".to_string()]);
        assert!(report.error.is_none());
    }

    #[test]
    fn test_failure_statuses() {
        let decode = Err(VerifierError::Decode(DecodeError::ExhaustedInput {
            field: Field::Version,
            position: 0,
        }));
        let backend = Err(VerifierError::Backend("boom".into()));

        let report = VerificationReport::new(b"", &decode, Duration::ZERO);
        assert_eq!(report.status, VerificationStatus::MalformedOutput);
        assert!(report.error.unwrap().contains("version"));

        let report = VerificationReport::new(b"", &backend, Duration::ZERO);
        assert_eq!(report.status, VerificationStatus::Error);
    }

    #[test]
    fn test_json_shape() {
        let report = VerificationReport::new(b"abc", &Ok(verified()), Duration::from_millis(42));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "verified");
        assert_eq!(json["total_time"], 42);
        assert_eq!(json["output"]["block_number"], "18446744073709551615");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_display() {
        let report = VerificationReport::new(b"abc", &Ok(verified()), Duration::from_millis(1));
        let display = report.to_string();
        assert!(display.contains("VERIFIED"));
        assert!(display.contains("ba7816bf8f01cfea"));
        assert!(display.contains("bye!"));

        let rejected = VerificationReport::new(b"abc", &Err(VerifierError::Rejected), Duration::ZERO);
        assert!(rejected.to_string().contains("NOT VERIFIED (Proof verification rejected)"));
    }
}
