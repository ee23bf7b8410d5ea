//! Proof verifier backed by an external program.
//!
//! The program receives the [`VerifyRequest`] as JSON on stdin and answers
//! through its exit status: `0` valid, `1` invalid. Any other status, a
//! signal, a spawn failure or a timeout is a backend error.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::backend::{ProofVerifier, VerifyRequest};
use crate::error::{Result, VerifierError};

/// Runs an external verifier program once per request.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use hyle_verifier::CommandVerifier;
///
/// let verifier = CommandVerifier::new("cairo-verify")
///     .arg("--stdin")
///     .timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct CommandVerifier {
    program: OsString,
    args: Vec<OsString>,
    timeout: Option<Duration>,
}

impl CommandVerifier {
    /// Create a verifier that runs `program` with no arguments and no timeout.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Kill the program if it has not exited after `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn spawn(&self) -> Result<Child> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                VerifierError::Backend(format!(
                    "failed to start {}: {}",
                    self.program.to_string_lossy(),
                    e
                ))
            })
    }
}

/// Write the request, close stdin, then wait for the program to exit.
async fn run_to_exit(mut child: Child, payload: Vec<u8>) -> std::io::Result<ExitStatus> {
    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(&payload).await {
            // The program may exit without reading its input.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
            other => other?,
        }
    }
    child.wait().await
}

#[async_trait]
impl ProofVerifier for CommandVerifier {
    async fn verify(&self, request: &VerifyRequest<'_>) -> Result<bool> {
        let payload = serde_json::to_vec(request)
            .map_err(|e| VerifierError::Backend(format!("failed to encode request: {}", e)))?;

        debug!(
            program = %self.program.to_string_lossy(),
            payload_bytes = payload.len(),
            "running external verifier"
        );
        let child = self.spawn()?;

        // Dropping the future on timeout drops the child, which kills it.
        let exited = match self.timeout {
            Some(limit) => match timeout(limit, run_to_exit(child, payload)).await {
                Ok(exited) => exited,
                Err(_) => {
                    warn!(timeout = ?limit, "verifier did not exit in time, killed it");
                    return Err(VerifierError::Timeout(limit));
                }
            },
            None => run_to_exit(child, payload).await,
        };
        let status = exited
            .map_err(|e| VerifierError::Backend(format!("failed to run verifier: {}", e)))?;

        match status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            Some(code) => Err(VerifierError::Backend(format!(
                "verifier exited with status {}",
                code
            ))),
            None => Err(VerifierError::Backend(
                "verifier terminated by signal".to_string(),
            )),
        }
    }
}
