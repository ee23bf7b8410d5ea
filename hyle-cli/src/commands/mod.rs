//! CLI command implementations.

pub mod decode;
pub mod encode;
pub mod verify;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use hyle_verifier::VerificationStatus;

/// Proof verified, or record decoded/encoded.
pub const EXIT_OK: i32 = 0;
/// Proof rejected by the verifier.
pub const EXIT_REJECTED: i32 = 1;
/// Public output (or input record) malformed.
pub const EXIT_MALFORMED: i32 = 3;
/// Envelope, IO, backend or config failure.
pub const EXIT_FAILURE: i32 = 4;

/// Exit code for a verification outcome.
pub fn exit_code(status: VerificationStatus) -> i32 {
    match status {
        VerificationStatus::Verified => EXIT_OK,
        VerificationStatus::Rejected => EXIT_REJECTED,
        VerificationStatus::MalformedOutput => EXIT_MALFORMED,
        VerificationStatus::Error => EXIT_FAILURE,
    }
}

/// Read a file, or stdin when `path` is `-` or absent.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(VerificationStatus::Verified), 0);
        assert_eq!(exit_code(VerificationStatus::Rejected), 1);
        assert_eq!(exit_code(VerificationStatus::MalformedOutput), 3);
        assert_eq!(exit_code(VerificationStatus::Error), 4);
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/tokens.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
