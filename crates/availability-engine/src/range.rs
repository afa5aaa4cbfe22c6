//! The date-range value type shared by both converters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// An immutable pair of timestamps.
///
/// Ranges order ascending by `start_time`, tie-broken by `end_time` (the
/// derived `Ord` is exactly that comparison). The `start <= end` invariant
/// is *detectable*, not enforced by construction: callers run
/// [`DateRange::ensure_valid`] before handing a range to a converter, and
/// the converters do the same on entry.
///
/// Serializes with RFC 3339 timestamps, the wire form the surrounding
/// request and persistence layers exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateRange {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// True iff the end precedes the start.
    pub fn has_order_error(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Precondition guard: errors when the end precedes the start.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidRange`] on an inverted range.
    pub fn ensure_valid(&self) -> Result<()> {
        if self.has_order_error() {
            return Err(ScheduleError::InvalidRange(format!(
                "end {} precedes start {}",
                self.end_time.to_rfc3339(),
                self.start_time.to_rfc3339()
            )));
        }
        Ok(())
    }
}
