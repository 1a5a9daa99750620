//! # Environment Variable Utilities
//!
//! Provides helpers for reading configuration values with fallback
//! defaults. Every reader takes a provider function, so parsing can be
//! tested without touching the process environment.
//!
//! These functions are used by [`AppConfig`](crate::config::app::AppConfig),
//! which passes `|k| std::env::var(k).ok()` as the provider.
//!
//! # Examples
//! ```rust,no_run
//! use log_export_dates::config::env::{read_flag_from, read_string_from};
//!
//! let env = |k: &str| std::env::var(k).ok();
//! let log_result = read_flag_from(env, "LOG_RESULT", true);
//! let level = read_string_from(env, "LOG_LEVEL", "info");
//! ```

/// Reads a boolean flag using a custom provider function.
///
/// Returns `true` for any of the following case-insensitive values:
/// `"1"`, `"true"`, `"yes"`, `"on"`. Any other value is `false`.
/// A missing variable yields `default`.
///
/// # Example
/// ```rust
/// use log_export_dates::config::env::read_flag_from;
///
/// assert!(read_flag_from(|_| Some("'yes'".into()), "LOG_RESULT", false));
/// assert!(!read_flag_from(|_| None, "LOG_RESULT", false));
/// ```
pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => matches!(
            unquote(&v).to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}

/// Reads a string variable, falling back to `default` when it is missing or blank.
///
/// Surrounding whitespace and quotes are stripped.
pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    read_optional_from(provider, name).unwrap_or_else(|| default.to_string())
}

/// Reads an optional variable using a custom provider function.
pub fn read_optional_from<F>(provider: F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|v| unquote(&v).to_string())
        .filter(|v| !v.is_empty())
}

fn unquote(raw: &str) -> &str {
    raw.trim().trim_matches(|c| c == '"' || c == '\'')
}
