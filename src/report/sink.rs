use tracing::{info, warn};

use crate::range::export_range::ExportRange;

/// Tracing target used for the per-invocation result line.
pub const RESULT_TARGET: &str = "log_export_dates::result";

/// Port trait for reporting a computed [`ExportRange`].
///
/// This trait represents an **abstraction over the diagnostic side effect**
/// of an invocation. Implementations may:
///
/// - Write a log line (see [`TracingSink`])
/// - Discard the record (see [`NoopSink`])
/// - Collect records in memory (in tests)
///
/// ## Design notes
///
/// - `emit` returns nothing. Reporting is best-effort and must never change
///   or fail the computed result.
/// - The computation does not depend on any sink being present.
///
/// ## Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared via `Arc`.
pub trait ResultSink: Send + Sync {
    /// Reports a single computed record.
    fn emit(&self, range: &ExportRange);
}

/// Logs the record as pretty-printed JSON at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl ResultSink for TracingSink {
    fn emit(&self, range: &ExportRange) {
        match serde_json::to_string_pretty(range) {
            Ok(json) => info!(target: RESULT_TARGET, "Date calculation result: {json}"),
            Err(e) => warn!(target: RESULT_TARGET, error = %e, "failed to serialize date calculation result"),
        }
    }
}

/// Discards every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl ResultSink for NoopSink {
    fn emit(&self, _range: &ExportRange) {}
}
