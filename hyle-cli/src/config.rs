//! CLI configuration.
//!
//! Read from `--config <path>` or `~/.hyle/config.toml`. Every key is
//! optional and command-line flags take precedence.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Directory under the home directory holding CLI state.
const CONFIG_DIR: &str = ".hyle";
const CONFIG_FILE: &str = "config.toml";

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub verifier: VerifierConfig,
    pub log: LogConfig,
}

/// `[verifier]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifierConfig {
    /// External verifier program
    pub command: Option<String>,
    /// Arguments passed to the verifier program
    pub args: Vec<String>,
    /// Kill the verifier after this many seconds
    pub timeout_secs: Option<u64>,
    /// Reject outputs with any other version
    pub expected_version: Option<u32>,
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// JSON log lines instead of plain text
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Default config file location, if a home directory is known.
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the configuration.
///
/// An explicit `path` must exist. The default file is optional.
pub fn load(path: Option<&Path>) -> Result<CliConfig> {
    match path {
        Some(path) => read(path),
        None => match default_path() {
            Some(path) if path.exists() => read(&path),
            _ => Ok(CliConfig::default()),
        },
    }
}

fn read(path: &Path) -> Result<CliConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
}

fn parse(content: &str) -> Result<CliConfig> {
    Ok(toml::from_str(content)?)
}
