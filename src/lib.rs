//! # log_export_dates
//!
//! Computes the UTC-midnight-aligned `[yesterday, today)` window and a
//! `YYYY/MM/DD` path segment for a scheduled log-export pipeline.
//!
//! This crate provides:
//! - An injectable current-instant port (`time::clock`)
//! - The date range computation and its output record (`range`)
//! - A pluggable diagnostic sink for the computed record (`report`)
//! - The invocation entry point used by the binary (`handler`)
//! - Environment-driven configuration and logging setup (`config`)
//!
//! ## Example usage
//!
//! ```rust
//! use log_export_dates::chrono::{TimeZone, Utc};
//! use log_export_dates::range::calculator::compute;
//!
//! let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap();
//! let range = compute(now).unwrap();
//!
//! assert_eq!(range.today, "2025-03-01T00:00:00Z");
//! assert_eq!(range.yesterday, "2025-02-28T00:00:00Z");
//! assert_eq!(range.yesterday_path, "2025/02/28");
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use chrono;
pub use dotenvy;
pub use serde;
pub use serde_json;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod error;
pub mod handler;
pub mod range;
pub mod report;
pub mod time;
