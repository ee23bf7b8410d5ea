//! Terminal output formatting.
//!
//! Status lines go to stderr; stdout is reserved for records and JSON.

use colored::Colorize;
use hyle_core::HyleOutput;
use hyle_verifier::{VerificationReport, VerificationStatus};

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green().bold(), msg.green());
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg.red());
}

/// Print an info message.
pub fn info(msg: &str) {
    eprintln!("{} {}", "→".cyan(), msg);
}

/// Print a warning message.
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow().bold(), msg.yellow());
}

/// Print a helpful hint.
pub fn hint(msg: &str) {
    eprintln!("{} {}", "💡".dimmed(), msg.dimmed());
}

fn header(msg: &str) {
    println!("\n{}", msg.white().bold());
    println!("{}", "─".repeat(msg.chars().count()).dimmed());
}

fn kv(key: &str, value: &str) {
    println!("  {} {}", format!("{}:", key).dimmed(), value);
}

/// Byte fields as `0x`-prefixed hex, with a marker for empty ones.
fn hex_bytes(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        format!("0x{}", hex::encode(bytes))
    }
}

/// Print a decoded record under `title`, one field per line.
pub fn record(title: &str, record: &HyleOutput, program_outputs: &[String]) {
    header(title);
    kv("Version", &record.version.to_string());
    kv("Initial state", &hex_bytes(&record.initial_state));
    kv("Next state", &hex_bytes(&record.next_state));
    kv("Origin", &format!("{:?}", record.origin));
    kv("Caller", &format!("{:?}", record.caller));
    kv("Block number", &record.block_number.to_string());
    kv("Block time", &record.block_time.to_string());
    kv("Tx hash", &hex_bytes(&record.tx_hash));
    if !program_outputs.is_empty() {
        kv("Program outputs", &program_outputs.join(" "));
    }
}

/// Print the outcome of `hyle-verify verify`.
pub fn verification_report(report: &VerificationReport) {
    let Some(output) = &report.output else {
        error(&report.to_string());
        match report.status {
            VerificationStatus::Rejected => {
                hint("The proof did not verify; its output was not decoded.")
            }
            VerificationStatus::MalformedOutput => {
                hint("The proof verified but its public output is not a Hyle record.")
            }
            _ => hint("Run with -v for verifier logs."),
        }
        return;
    };

    success(&report.to_string());
    record("Public output", output, &report.program_outputs);
    kv("Proof SHA-256", &report.proof_sha256);
    kv(
        "Total time",
        &format!("{:.3}s", report.total_time.as_secs_f64()),
    );
    println!();
}
