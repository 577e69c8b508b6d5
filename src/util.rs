//! Time-window computation and small shared helpers.
//!
//! The digest is anchored to Korea Standard Time: "today" and "yesterday"
//! are calendar days at UTC+9 regardless of where the job runs. The
//! reference instant is always passed in by the caller so the window is
//! reproducible in tests.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};

/// Korea Standard Time (UTC+9). Naver publishes in KST and the digest's
/// notion of a calendar day follows it.
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap()
}

/// The two calendar days the pipeline filters against.
///
/// NewsAPI is queried server-side for `yesterday` (the last full day of
/// English coverage); Naver items are filtered client-side to `today`.
/// The asymmetry matches the observed behavior of the job this replaces
/// and is kept intact until product says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// Current calendar day at the reference instant, in KST.
    pub today: NaiveDate,
    /// The day before `today`.
    pub yesterday: NaiveDate,
}

impl DateWindow {
    /// Compute the window from a reference instant.
    pub fn at(reference: DateTime<FixedOffset>) -> Self {
        let today = reference.with_timezone(&kst()).date_naive();
        Self {
            today,
            yesterday: today - Duration::days(1),
        }
    }

    /// Window for the current wall-clock instant.
    pub fn now() -> Self {
        Self::at(Utc::now().with_timezone(&kst()))
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` bytes with an ellipsis and byte
/// count indicator appended. Used when echoing provider error bodies into
/// the log.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…(+{} bytes)", &s[..end], s.len() - end)
    }
}
