//! Verify command implementation.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use hyle_verifier::{CommandVerifier, OutputVerifier, VerificationReport, VerificationStatus};
use serde::Serialize;
use tracing::{debug, info};

use super::{exit_code, EXIT_FAILURE};
use crate::config::VerifierConfig;
use crate::output;

/// Arguments for the verify command.
#[derive(Args)]
pub struct VerifyArgs {
    /// Proof file (length-prefixed proof, public inputs, output text)
    #[arg(short, long)]
    pub proof: PathBuf,

    /// Verification key file
    #[arg(short, long)]
    pub key: PathBuf,

    /// External verifier program (overrides config)
    #[arg(long)]
    pub verifier: Option<String>,

    /// Argument for the verifier program, repeatable (overrides config)
    #[arg(long = "verifier-arg", allow_hyphen_values = true)]
    pub verifier_args: Vec<String>,

    /// Verifier timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Reject outputs whose version differs
    #[arg(long)]
    pub expect_version: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Verifier settings after merging flags over config.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
    expected_version: Option<u32>,
}

impl Settings {
    fn resolve(args: &VerifyArgs, config: &VerifierConfig) -> Option<Self> {
        let program = args.verifier.clone().or_else(|| config.command.clone())?;
        let verifier_args = if args.verifier_args.is_empty() {
            config.args.clone()
        } else {
            args.verifier_args.clone()
        };

        Some(Self {
            program,
            args: verifier_args,
            timeout: args
                .timeout
                .or(config.timeout_secs)
                .map(Duration::from_secs),
            expected_version: args.expect_version.or(config.expected_version),
        })
    }

    fn build(self) -> OutputVerifier<CommandVerifier> {
        let mut backend = CommandVerifier::new(self.program).args(self.args);
        if let Some(timeout) = self.timeout {
            backend = backend.timeout(timeout);
        }

        let verifier = OutputVerifier::new(backend);
        match self.expected_version {
            Some(version) => verifier.with_expected_version(version),
            None => verifier,
        }
    }
}

/// JSON shape for failures that happen before verification starts.
#[derive(Serialize)]
struct JsonFailure {
    status: VerificationStatus,
    error: String,
}

fn fail(json: bool, msg: String, hint: &str) -> i32 {
    if json {
        let failure = JsonFailure {
            status: VerificationStatus::Error,
            error: msg,
        };
        match serde_json::to_string_pretty(&failure) {
            Ok(text) => println!("{}", text),
            Err(e) => output::error(&format!("Failed to serialize report: {}", e)),
        }
    } else {
        output::error(&msg);
        output::hint(hint);
    }
    EXIT_FAILURE
}

/// Run the verify command.
pub async fn run(args: VerifyArgs, config: &VerifierConfig) -> i32 {
    let Some(settings) = Settings::resolve(&args, config) else {
        return fail(
            args.json,
            "No verifier program configured".to_string(),
            "Pass --verifier <cmd> or set [verifier] command in ~/.hyle/config.toml",
        );
    };

    let proof_file = match fs::read(&args.proof) {
        Ok(bytes) => bytes,
        Err(e) => {
            return fail(
                args.json,
                format!("Failed to read proof file {}: {}", args.proof.display(), e),
                "Check the --proof path.",
            )
        }
    };
    let key = match fs::read(&args.key) {
        Ok(bytes) => bytes,
        Err(e) => {
            return fail(
                args.json,
                format!("Failed to read key file {}: {}", args.key.display(), e),
                "Check the --key path.",
            )
        }
    };

    if !args.json {
        output::info(&format!(
            "Verifying {} with {}...",
            args.proof.display(),
            settings.program
        ));
    }

    debug!(?settings, "resolved verifier settings");
    let verifier = settings.build();
    let start = Instant::now();
    let outcome = verifier.verify_bytes(&proof_file, &key).await;
    let report = VerificationReport::new(&proof_file, &outcome, start.elapsed());
    info!(
        status = ?report.status,
        proof_sha256 = %report.proof_sha256,
        elapsed_ms = report.total_time.as_millis() as u64,
        "verification finished"
    );

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                output::error(&format!("Failed to serialize report: {}", e));
                return EXIT_FAILURE;
            }
        }
    } else {
        output::verification_report(&report);
    }

    exit_code(report.status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> VerifyArgs {
        VerifyArgs {
            proof: PathBuf::from("proof.bin"),
            key: PathBuf::from("key.bin"),
            verifier: None,
            verifier_args: Vec::new(),
            timeout: None,
            expect_version: None,
            json: false,
        }
    }

    fn config() -> VerifierConfig {
        VerifierConfig {
            command: Some("cairo-verify".into()),
            args: vec!["--layout".into(), "small".into()],
            timeout_secs: Some(60),
            expected_version: Some(1),
        }
    }

    #[test]
    fn test_settings_from_config() {
        let settings = Settings::resolve(&args(), &config()).unwrap();
        assert_eq!(settings.program, "cairo-verify");
        assert_eq!(settings.args, vec!["--layout", "small"]);
        assert_eq!(settings.timeout, Some(Duration::from_secs(60)));
        assert_eq!(settings.expected_version, Some(1));
    }

    #[test]
    fn test_flags_override_config() {
        let mut args = args();
        args.verifier = Some("stone-verify".into());
        args.verifier_args = vec!["--fast".into()];
        args.timeout = Some(5);
        args.expect_version = Some(2);

        let settings = Settings::resolve(&args, &config()).unwrap();
        assert_eq!(settings.program, "stone-verify");
        assert_eq!(settings.args, vec!["--fast"]);
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
        assert_eq!(settings.expected_version, Some(2));
    }

    #[test]
    fn test_no_program_configured() {
        assert!(Settings::resolve(&args(), &VerifierConfig::default()).is_none());
    }

    #[test]
    fn test_build_applies_version_guard() {
        let verifier = Settings::resolve(&args(), &config()).unwrap().build();
        assert_eq!(verifier.expected_version(), Some(1));
    }
}
