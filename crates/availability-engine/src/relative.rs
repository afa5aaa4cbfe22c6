//! Absolute → availability conversion.
//!
//! Normalizes real calendar date ranges onto the canonical reference week
//! for storage and comparison: each endpoint keeps its weekday and
//! wall-clock time but moves to the configured anchor week. The absolute
//! dates carry no meaning afterwards — only the weekday/time pattern does.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

use crate::config::ScheduleConfig;
use crate::error::Result;
use crate::range::DateRange;
use crate::wallclock::WallClockTime;
use crate::zone;

/// Convert absolute date ranges into canonical relative-availability form.
///
/// Each input range is validated, then both endpoints are re-based onto
/// the reference week: calendar day becomes `reference_sunday + weekday`,
/// time-of-day is the endpoint's wall clock at the config's default offset,
/// normalized to minute precision. A range whose endpoints fall on
/// different weekdays can come out inverted (Saturday start, Sunday end);
/// the end then moves forward one week while the start stays put, so every
/// output start lies within the anchor week and every output satisfies
/// `end >= start`.
///
/// Outputs preserve input order; the caller's slice is untouched.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidRange`](crate::ScheduleError::InvalidRange)
/// for any input whose end precedes its start — malformed caller data is
/// surfaced, never corrected.
pub fn to_availability_ranges(
    config: &ScheduleConfig,
    ranges: &[DateRange],
) -> Result<Vec<DateRange>> {
    let mut out = Vec::with_capacity(ranges.len());
    for range in ranges {
        range.ensure_valid()?;
        let start = canonical_endpoint(config, range.start_time)?;
        let mut end = canonical_endpoint(config, range.end_time)?;
        if end < start {
            end = end + Duration::days(7);
        }
        out.push(DateRange::new(start, end));
    }
    Ok(out)
}

/// Re-base one endpoint onto the reference week.
fn canonical_endpoint(config: &ScheduleConfig, instant: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let local = zone::to_local(instant, config.default_utc_offset_minutes())?;
    let wall = WallClockTime::from_time(local.time());
    let day = config.reference_sunday()
        + Duration::days(local.weekday().num_days_from_sunday() as i64);
    Ok(Utc.from_utc_datetime(&day.and_time(wall.to_naive_time())))
}
