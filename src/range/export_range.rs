use serde::Serialize;

use crate::range::date_range::DateRange;
use crate::time::midnight::{format_iso_utc, format_path_segment};

/// The record returned by each invocation.
///
/// Serializes to a JSON object with exactly three string keys:
///
/// ```json
/// {
///   "today": "2025-12-05T00:00:00Z",
///   "yesterday": "2025-12-04T00:00:00Z",
///   "yesterday_path": "2025/12/04"
/// }
/// ```
///
/// `yesterday` and `today` are meant to be used as a half-open export
/// window, `yesterday_path` as the destination key segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExportRange {
    /// End of the export window, `YYYY-MM-DDT00:00:00Z`.
    pub today: String,
    /// Start of the export window, `YYYY-MM-DDT00:00:00Z`.
    pub yesterday: String,
    /// Yesterday's date as `YYYY/MM/DD`.
    pub yesterday_path: String,
}

impl From<&DateRange> for ExportRange {
    fn from(range: &DateRange) -> Self {
        let start = range.start();
        let end = range.end();

        Self {
            today: format_iso_utc(&end),
            yesterday: format_iso_utc(&start),
            yesterday_path: format_path_segment(&start),
        }
    }
}
