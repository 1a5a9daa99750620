use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised while deriving the export date range.
///
/// The computation is total for every instant with a representable
/// previous day, so in practice only the very first calendar day that
/// `chrono` supports can produce an error.
///
/// # Example
/// ```
/// use log_export_dates::chrono::{DateTime, Utc};
/// use log_export_dates::error::range::DateRangeError;
///
/// let err = DateRangeError::OutOfRange { instant: DateTime::<Utc>::MIN_UTC };
/// assert!(err.to_string().starts_with("no previous day for"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// The day before `instant` is not representable.
    #[error("no previous day for {instant}")]
    OutOfRange { instant: DateTime<Utc> },
}
