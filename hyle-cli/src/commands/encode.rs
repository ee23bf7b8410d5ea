//! Encode command implementation.

use std::path::PathBuf;

use clap::Args;
use hyle_core::HyleOutput;

use super::{read_input, EXIT_FAILURE, EXIT_MALFORMED, EXIT_OK};
use crate::output;

/// Arguments for the encode command.
#[derive(Args)]
pub struct EncodeArgs {
    /// JSON record file, or `-` for stdin (default)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Program output tokens appended after the record
    #[arg(long = "append", allow_hyphen_values = true)]
    pub program_outputs: Vec<String>,
}

/// Run the encode command.
pub fn run(args: EncodeArgs) -> i32 {
    let text = match read_input(args.input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            output::error(&format!("{:#}", e));
            return EXIT_FAILURE;
        }
    };

    let record: HyleOutput = match serde_json::from_str(&text) {
        Ok(record) => record,
        Err(e) => {
            output::error(&format!("Invalid record JSON: {}", e));
            return EXIT_MALFORMED;
        }
    };

    match encode_with_outputs(&record, &args.program_outputs) {
        Ok(line) => {
            println!("{}", line);
            EXIT_OK
        }
        Err(e) => {
            output::error(&e.to_string());
            output::hint("Origin and caller must only contain characters up to U+00FF.");
            EXIT_MALFORMED
        }
    }
}

fn encode_with_outputs(
    record: &HyleOutput,
    program_outputs: &[String],
) -> Result<String, hyle_core::EncodeError> {
    let mut tokens = record.encode()?;
    tokens.extend(program_outputs.iter().cloned());
    Ok(format!("[{}]", tokens.join(" ")))
}
