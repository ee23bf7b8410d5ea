//! Decode command implementation.
//!
//! Decodes public-output tokens without any proof check. The result is
//! labelled unverified.

use std::path::PathBuf;

use clap::Args;
use hyle_core::{tokens::tokenize, HyleOutput};
use serde::Serialize;
use tracing::debug;

use super::{read_input, EXIT_FAILURE, EXIT_MALFORMED, EXIT_OK};
use crate::output;

/// Arguments for the decode command.
#[derive(Args)]
pub struct DecodeArgs {
    /// Tokens to decode; a single bracketed argument also works
    pub tokens: Vec<String>,

    /// Read tokens from a file, or `-` for stdin
    #[arg(short, long, conflicts_with = "tokens")]
    pub input: Option<PathBuf>,

    /// Print fields instead of JSON
    #[arg(long)]
    pub pretty: bool,
}

/// JSON output structure.
#[derive(Serialize)]
struct JsonOutput<'a> {
    verified: bool,
    output: &'a HyleOutput,
    program_outputs: &'a [String],
}

/// Run the decode command.
pub fn run(args: DecodeArgs) -> i32 {
    let text = if args.tokens.is_empty() {
        match read_input(args.input.as_deref()) {
            Ok(text) => text,
            Err(e) => {
                output::error(&format!("{:#}", e));
                return EXIT_FAILURE;
            }
        }
    } else {
        args.tokens.join(" ")
    };

    let tokens = tokenize(&text);
    debug!(tokens = tokens.len(), "decoding unverified public output");
    let (record, program_outputs) = match HyleOutput::decode_with_remainder(&tokens) {
        Ok(decoded) => decoded,
        Err(e) => {
            output::error(&format!("Malformed public output: {}", e));
            output::hint(&format!(
                "Field '{}' failed at token {} of {}.",
                e.field(),
                e.position(),
                tokens.len()
            ));
            return EXIT_MALFORMED;
        }
    };

    output::warn("Decoded without proof verification; do not trust these values.");

    if args.pretty {
        output::record("Public output (unverified)", &record, &program_outputs);
        println!();
        return EXIT_OK;
    }

    let json = JsonOutput {
        verified: false,
        output: &record,
        program_outputs: &program_outputs,
    };
    match serde_json::to_string_pretty(&json) {
        Ok(text) => {
            println!("{}", text);
            EXIT_OK
        }
        Err(e) => {
            output::error(&format!("Failed to serialize record: {}", e));
            EXIT_FAILURE
        }
    }
}
