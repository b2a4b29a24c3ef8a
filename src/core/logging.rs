//! Diagnostic logging through `tracing`
//!
//! Log lines go to stderr so they never mix with the progress lines and
//! summary printed on stdout.
//!
//! - default: `warn`
//! - `--verbose`: `debug` (request payloads, per-row decisions)
//! - `RUST_LOG` overrides both

use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: console::colors_enabled_stderr(),
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn from_verbose(verbose: bool) -> Self {
        Self {
            level: if verbose { Level::DEBUG } else { Level::WARN },
            ..Default::default()
        }
    }
}

/// Filter from `RUST_LOG` when set, otherwise the configured level for this crate
/// and `warn` for dependencies
pub fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,clickup_importer={}",
            level.as_str().to_lowercase()
        ))
    })
}

/// Install the global subscriber; a second call is a no-op
pub fn init_logging(config: &LogConfig) {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_selects_debug() {
        assert_eq!(LogConfig::from_verbose(true).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbose(false).level, Level::WARN);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(&LogConfig::default());
        init_logging(&LogConfig::from_verbose(true));
    }
}
