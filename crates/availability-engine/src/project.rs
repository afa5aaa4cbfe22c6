//! Availability → absolute conversion.
//!
//! Projects stored canonical-week availability onto real calendar dates
//! near an explicit "now" anchor. The caller provides the anchor (no
//! system-clock access here), the client's UTC offset in minutes, and the
//! relative ranges; out come the concrete occurrences still joinable this
//! week, plus next week's occurrence whenever this week's has already
//! begun in the client's zone.

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::error::Result;
use crate::range::DateRange;
use crate::wallclock;
use crate::weekday;
use crate::zone;

/// Project relative-availability ranges onto the current calendar week.
///
/// Per input range, both endpoints are placed onto the week containing
/// `now` (viewed at the caller's offset), keeping the stored weekday and
/// wall-clock time; an overnight slot whose end wraps past Saturday gets
/// its end pushed one week forward so the range stays ordered. Then up to
/// two absolute ranges are emitted:
///
/// - the remaining future portion, when the projected end is still ahead
///   of `now` — a slot already in progress restarts at the next half-hour
///   boundary, and is dropped entirely if no such boundary precedes its
///   end;
/// - next week's occurrence (both endpoints shifted forward seven days),
///   when the projected start has already begun on or before `now`'s
///   calendar day in the caller's zone — this keeps a window spanning a
///   zone-crossing boundary from being silently lost.
///
/// Both can hold at once, yielding "rest of this week" and "all of next
/// week" for a single slot.
///
/// The result is a freshly allocated collection sorted ascending by start
/// then end; the caller's slice is never mutated.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidRange`](crate::ScheduleError::InvalidRange)
/// for any input whose end precedes its start, and
/// [`ScheduleError::InvalidTimezone`](crate::ScheduleError::InvalidTimezone)
/// for an out-of-range offset.
pub fn to_absolute_ranges(
    ranges: &[DateRange],
    utc_offset_minutes: i32,
    now: DateTime<Utc>,
) -> Result<Vec<DateRange>> {
    let local_now = zone::to_local(now, utc_offset_minutes)?;

    let mut out = Vec::new();
    for range in ranges {
        range.ensure_valid()?;

        let stored_start = range.start_time.naive_utc();
        let stored_end = range.end_time.naive_utc();

        let projected_start = weekday::nearest_date_for_weekday(
            local_now.date().and_time(stored_start.time()),
            Some(stored_start.weekday().num_days_from_sunday()),
        )?;
        let mut projected_end = weekday::nearest_date_for_weekday(
            local_now.date().and_time(stored_end.time()),
            Some(stored_end.weekday().num_days_from_sunday()),
        )?;
        // Weekday placement drops the week-wrap a stored overnight slot
        // carries; re-apply it to the end only.
        if projected_end < projected_start {
            projected_end = projected_end + Duration::days(7);
        }

        let start_utc = zone::from_local(projected_start, utc_offset_minutes)?;
        let end_utc = zone::from_local(projected_end, utc_offset_minutes)?;

        if end_utc > now {
            let begin = if start_utc > now {
                start_utc
            } else {
                // Slots in progress cannot be joined mid-slot.
                zone::from_local(
                    wallclock::round_up_to_nearest_half_hour(projected_start),
                    utc_offset_minutes,
                )?
            };
            if begin < end_utc {
                out.push(DateRange::new(begin, end_utc));
            }
        }

        if zone::begins_on_or_before_day(start_utc, now, utc_offset_minutes)? {
            out.push(DateRange::new(
                start_utc + Duration::days(7),
                end_utc + Duration::days(7),
            ));
        }
    }

    out.sort();
    Ok(out)
}
