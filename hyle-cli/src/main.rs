//! Hyle Verifier CLI
//!
//! Verifies a Cairo proof with an external verifier and prints its decoded
//! public output.

mod commands;
mod config;
mod logging;
mod output;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hyle-verify")]
#[command(author = "LogicCrafter")]
#[command(version = "0.1.0")]
#[command(about = "Hyle - proof-gated decoding of Cairo public outputs", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (default: ~/.hyle/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a proof file and print its public output
    Verify(commands::verify::VerifyArgs),

    /// Decode public-output tokens WITHOUT verifying any proof
    Decode(commands::decode::DecodeArgs),

    /// Encode a JSON record into public-output tokens
    Encode(commands::encode::EncodeArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            output::error(&format!("{:#}", e));
            std::process::exit(commands::EXIT_FAILURE);
        }
    };

    if let Err(e) = logging::init_logging(&config.log, cli.verbose, cli.log_json) {
        output::warn(&format!("Logging disabled: {:#}", e));
    }
    tracing::debug!(path = ?cli.config, ?config, "configuration loaded");

    let exit_code = match cli.command {
        Commands::Verify(args) => commands::verify::run(args, &config.verifier).await,
        Commands::Decode(args) => commands::decode::run(args),
        Commands::Encode(args) => commands::encode::run(args),
    };

    std::process::exit(exit_code);
}
