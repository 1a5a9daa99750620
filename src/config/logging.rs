//! Logging configuration and initialization.

use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::env::{read_optional_from, read_string_from};

/// Output format for log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    Text,
    /// One JSON object per line, for log ingestion pipelines.
    Json,
}

impl LogFormat {
    /// `"json"` (case-insensitive) selects [`LogFormat::Json`]; anything else is text.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
    /// Colour escapes in text output. Off unless stderr is a terminal and `NO_COLOR` is unset.
    pub ansi: bool,
}

impl LoggingConfig {
    /// Loads `LOG_LEVEL`, `LOG_FORMAT` and `NO_COLOR` from a provider function.
    pub fn from_provider<F>(provider: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: read_string_from(&provider, "LOG_LEVEL", "info"),
            format: LogFormat::parse(&read_string_from(&provider, "LOG_FORMAT", "text")),
            ansi: read_optional_from(&provider, "NO_COLOR").is_none() && stderr_is_terminal(),
        }
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so stdout stays reserved for the result record.
    /// A subscriber that is already installed is left in place.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let _ = match self.format {
            LogFormat::Json => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init(),
            LogFormat::Text => fmt()
                .with_env_filter(filter)
                .with_ansi(self.ansi)
                .with_writer(io::stderr)
                .try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Text,
            ansi: stderr_is_terminal(),
        }
    }
}

fn stderr_is_terminal() -> bool {
    io::stderr().is_terminal()
}
