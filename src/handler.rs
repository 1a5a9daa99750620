//! # Invocation Handler
//!
//! The entry point a scheduler or function host calls once per run.
//!
//! An invocation carries two opaque values, an event payload and an
//! [`InvocationContext`]. Neither influences the result: they are only
//! attached to the tracing span so log lines can be correlated with the
//! host's own records.
//!
//! # Example
//! ```rust
//! use std::sync::Arc;
//!
//! use log_export_dates::chrono::{TimeZone, Utc};
//! use log_export_dates::handler::{Handler, InvocationContext, parse_event};
//! use log_export_dates::range::calculator::DateRangeCalculator;
//! use log_export_dates::time::clock::FixedClock;
//!
//! let now = Utc.with_ymd_and_hms(2025, 12, 5, 0, 10, 0).unwrap();
//! let handler = Handler::new(DateRangeCalculator::new(Arc::new(FixedClock::new(now))));
//!
//! let range = handler
//!     .invoke(parse_event(br#"{"source": "aws.events"}"#), InvocationContext::default())
//!     .unwrap();
//! assert_eq!(range.yesterday, "2025-12-04T00:00:00Z");
//! ```

use std::env;

use serde_json::Value;
use tracing::info_span;

use crate::error::range::DateRangeError;
use crate::range::calculator::DateRangeCalculator;
use crate::range::export_range::ExportRange;

/// Host-supplied metadata about the current invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvocationContext {
    /// Identifier the host assigned to this run, if any.
    pub request_id: Option<String>,
    /// Name of the deployed function, if any.
    pub function_name: Option<String>,
}

impl InvocationContext {
    /// Reads `INVOCATION_REQUEST_ID` and `AWS_LAMBDA_FUNCTION_NAME`.
    ///
    /// Missing variables leave the corresponding field `None`.
    pub fn from_env() -> Self {
        Self {
            request_id: env::var("INVOCATION_REQUEST_ID").ok(),
            function_name: env::var("AWS_LAMBDA_FUNCTION_NAME").ok(),
        }
    }
}

/// Interprets raw event bytes without ever rejecting them.
///
/// - Empty or whitespace-only input becomes [`Value::Null`].
/// - Valid JSON is parsed as-is.
/// - Anything else is kept as a [`Value::String`], with invalid UTF-8
///   replaced by U+FFFD.
pub fn parse_event(raw: &[u8]) -> Value {
    if raw.trim_ascii().is_empty() {
        return Value::Null;
    }

    serde_json::from_slice(raw)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(raw).into_owned()))
}

/// Runs the date range calculation for one invocation.
#[derive(Clone, Debug)]
pub struct Handler {
    calculator: DateRangeCalculator,
}

impl Handler {
    pub fn new(calculator: DateRangeCalculator) -> Self {
        Self { calculator }
    }

    /// Handles one invocation. The event payload is accepted but not inspected.
    pub fn invoke(
        &self,
        _event: Value,
        context: InvocationContext,
    ) -> Result<ExportRange, DateRangeError> {
        let span = info_span!(
            "invocation",
            request_id = context.request_id.as_deref().unwrap_or("-"),
            function_name = context.function_name.as_deref().unwrap_or("-"),
        );
        let _guard = span.enter();

        self.calculator.calculate()
    }
}
