//! Fixed-offset timezone shifting and calendar-day predicates.
//!
//! Clients report their zone as minutes east of UTC; every comparison that
//! asks "has this day started yet?" happens in that shifted view, never in
//! the runtime's own zone. For request layers that hold an IANA zone name
//! instead, [`utc_offset_minutes`] derives the offset at a given instant.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, ScheduleError};

/// Build a `FixedOffset` from minutes east of UTC.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidTimezone`] when the offset is outside
/// the representable ±24h span.
pub fn fixed_offset(utc_offset_minutes: i32) -> Result<FixedOffset> {
    utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            ScheduleError::InvalidTimezone(format!(
                "UTC offset {utc_offset_minutes} minutes out of range"
            ))
        })
}

/// The wall-clock view of an instant at the given offset.
pub fn to_local(instant: DateTime<Utc>, utc_offset_minutes: i32) -> Result<NaiveDateTime> {
    Ok(instant
        .with_timezone(&fixed_offset(utc_offset_minutes)?)
        .naive_local())
}

/// The instant whose wall clock at the given offset reads `wall`.
pub fn from_local(wall: NaiveDateTime, utc_offset_minutes: i32) -> Result<DateTime<Utc>> {
    let tz = fixed_offset(utc_offset_minutes)?;
    tz.from_local_datetime(&wall)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            ScheduleError::InvalidTimezone(format!(
                "ambiguous local time at offset {utc_offset_minutes}"
            ))
        })
}

/// Whether `date` is strictly earlier than `now`, both viewed at the
/// caller's offset.
pub fn is_strictly_before(
    date: DateTime<Utc>,
    now: DateTime<Utc>,
    utc_offset_minutes: i32,
) -> Result<bool> {
    Ok(to_local(date, utc_offset_minutes)? < to_local(now, utc_offset_minutes)?)
}

/// Whether `date` and `now` fall on the same calendar day at the caller's
/// offset.
///
/// Compares year, month and day-of-month. Two dates a week apart share a
/// weekday but are never the same day.
pub fn is_same_calendar_day(
    date: DateTime<Utc>,
    now: DateTime<Utc>,
    utc_offset_minutes: i32,
) -> Result<bool> {
    Ok(to_local(date, utc_offset_minutes)?.date() == to_local(now, utc_offset_minutes)?.date())
}

/// Whether `date` has begun from the perspective of `now`'s calendar day:
/// strictly earlier, or anywhere on the same day.
pub fn begins_on_or_before_day(
    date: DateTime<Utc>,
    now: DateTime<Utc>,
    utc_offset_minutes: i32,
) -> Result<bool> {
    Ok(is_strictly_before(date, now, utc_offset_minutes)?
        || is_same_calendar_day(date, now, utc_offset_minutes)?)
}

/// The UTC offset, in minutes, that an IANA zone observes at `at`.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidTimezone`] for an unrecognized zone
/// name.
pub fn utc_offset_minutes(timezone: &str, at: DateTime<Utc>) -> Result<i32> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| ScheduleError::InvalidTimezone(format!("'{timezone}'")))?;
    Ok(at.with_timezone(&tz).offset().fix().local_minus_utc() / 60)
}
