//! Runtime settings read from `CIRCULATION_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;

pub const DEFAULT_LOG_FILTER: &str = "circulation=info";
pub const DEFAULT_TICK_MS: u64 = 250;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Settings {
    /// Log file; `None` disables logging.
    pub log_file: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Start with no members or publications instead of the demo data.
    pub empty: bool,
    pub tick_rate: Duration,
}

// Keys as they come out of the environment source, prefix stripped.
#[derive(Debug, Deserialize)]
struct RawSettings {
    log: Option<PathBuf>,
    log_filter: String,
    empty: bool,
    tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            empty: false,
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl Settings {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(None)
    }

    /// Load from `vars` instead of the process environment when given.
    /// Keys keep their `CIRCULATION_` prefix, e.g. `CIRCULATION_TICK_MS`.
    pub fn from_source(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let raw: RawSettings = Config::builder()
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .set_default("empty", false)?
            .set_default("tick_ms", DEFAULT_TICK_MS)?
            .add_source(Environment::with_prefix("CIRCULATION").try_parsing(true).source(vars))
            .build()?
            .try_deserialize()?;
        Ok(raw.into())
    }
}

impl From<RawSettings> for Settings {
    fn from(raw: RawSettings) -> Self {
        let defaults = Self::default();
        let log_filter = if raw.log_filter.trim().is_empty() {
            defaults.log_filter
        } else {
            raw.log_filter
        };
        Self {
            log_file: raw.log.filter(|p| !p.as_os_str().is_empty()),
            log_filter,
            empty: raw.empty,
            tick_rate: match raw.tick_ms {
                0 => defaults.tick_rate,
                ms => Duration::from_millis(ms),
            },
        }
    }
}
