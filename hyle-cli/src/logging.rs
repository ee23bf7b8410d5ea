//! Tracing subscriber setup.
//!
//! Logs always go to stderr so stdout only carries command output.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;

/// Filter used for a given `-v` count, if any.
fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Build the filter: `RUST_LOG` first, then `-v`, then the configured level.
fn env_filter(config: &LogConfig, verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = verbosity_level(verbose).unwrap_or(config.level.as_str());
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    })
}

/// Install the global subscriber.
pub fn init_logging(config: &LogConfig, verbose: u8, json: bool) -> Result<()> {
    let filter = env_filter(config, verbose);
    let registry = tracing_subscriber::registry().with(filter);

    let result = if json || config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
    };

    result.map_err(|e| anyhow!("failed to initialize tracing subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_level(0), None);
        assert_eq!(verbosity_level(1), Some("info"));
        assert_eq!(verbosity_level(2), Some("debug"));
        assert_eq!(verbosity_level(9), Some("trace"));
    }
}
