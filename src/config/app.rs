//! # Application Configuration Loader
//!
//! Provides a unified configuration loader for the date range binary:
//! logging setup, whether the result line is emitted, and an optional
//! fixed instant for backfills.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `LOG_LEVEL` | Log filter used when `RUST_LOG` is unset | `"info"` |
//! | `LOG_FORMAT` | `json` or `text` | `"text"` |
//! | `LOG_RESULT` | Emit the `Date calculation result` line | `true` |
//! | `EXPORT_DATES_NOW` | RFC 3339 instant used instead of the system clock | *none* |
//!
//! # Example
//! ```rust,no_run
//! use log_export_dates::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env().expect("valid configuration");
//! cfg.logging.init();
//! let range = cfg.build_calculator().calculate().unwrap();
//! println!("{}", range.yesterday_path);
//! ```

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::config::{
    env::{read_flag_from, read_optional_from, read_string_from},
    logging::LoggingConfig,
};
use crate::range::calculator::DateRangeCalculator;
use crate::report::sink::TracingSink;
use crate::time::{clock::FixedClock, system_clock::SystemClock};

/// Top-level application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Value of `APP_ENV`.
    pub app_env: String,
    /// Logging filter and format.
    pub logging: LoggingConfig,
    /// Whether each computed record is written to the log.
    pub log_result: bool,
    /// Instant that replaces the system clock, normalized to UTC.
    pub now_override: Option<DateTime<Utc>>,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to defaults.
    ///
    /// # Errors
    /// - When `EXPORT_DATES_NOW` is set but is not a valid RFC 3339 timestamp
    pub fn from_env() -> Result<Self> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        Self::from_provider(|k| env::var(k).ok())
    }

    /// Builds the configuration from a custom provider function.
    ///
    /// No dotenv files are read.
    pub fn from_provider<F>(provider: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_env = read_string_from(&provider, "APP_ENV", "development");
        let log_result = read_flag_from(&provider, "LOG_RESULT", true);

        let now_override = read_optional_from(&provider, "EXPORT_DATES_NOW")
            .map(|raw| {
                DateTime::parse_from_rfc3339(&raw)
                    .map(|dt| dt.with_timezone(&Utc))
                    .with_context(|| format!("EXPORT_DATES_NOW is not RFC 3339: {raw}"))
            })
            .transpose()?;

        Ok(Self {
            app_env,
            logging: LoggingConfig::from_provider(&provider),
            log_result,
            now_override,
        })
    }

    /// Wires a [`DateRangeCalculator`] from this configuration.
    ///
    /// - `now_override` set: [`FixedClock`], otherwise [`SystemClock`]
    /// - `log_result` set: [`TracingSink`] attached, otherwise no sink
    pub fn build_calculator(&self) -> DateRangeCalculator {
        let calculator = match self.now_override {
            Some(instant) => DateRangeCalculator::new(Arc::new(FixedClock::new(instant))),
            None => DateRangeCalculator::new(Arc::new(SystemClock::new())),
        };

        if self.log_result {
            calculator.with_sink(Arc::new(TracingSink))
        } else {
            calculator
        }
    }
}
