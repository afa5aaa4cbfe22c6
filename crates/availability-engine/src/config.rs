//! Immutable configuration for the scheduling converters.
//!
//! The original application read its reference week and server offset from
//! ambient runtime globals; here both are captured once, explicitly, in a
//! [`ScheduleConfig`] constructed at process start and passed to every
//! conversion call.

use chrono::{Datelike, Duration, NaiveDate};

/// The Sunday anchoring the default canonical availability week.
///
/// Any Sunday works — relative-availability timestamps are offsets into the
/// seven-day window that begins here, and the date carries no meaning of
/// its own. Persisted data is only comparable across processes that agree
/// on the anchor, so changing it is a storage migration.
const DEFAULT_REFERENCE_SUNDAY: NaiveDate = match NaiveDate::from_ymd_opt(2017, 12, 10) {
    Some(d) => d,
    None => panic!("default reference date is valid"),
};

/// Configuration shared by both availability converters.
///
/// Holds the canonical-week anchor and the server's default UTC offset
/// (minutes east of UTC), used when normalizing absolute dates for storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    reference_sunday: NaiveDate,
    default_utc_offset_minutes: i32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            reference_sunday: DEFAULT_REFERENCE_SUNDAY,
            default_utc_offset_minutes: 0,
        }
    }
}

impl ScheduleConfig {
    /// Build a config anchored at the week containing `anchor`.
    ///
    /// The canonical week must begin on a Sunday for weekday round-trips to
    /// hold, so `anchor` is snapped back to the Sunday of its week. Passing
    /// a Sunday keeps it unchanged.
    pub fn new(anchor: NaiveDate, default_utc_offset_minutes: i32) -> Self {
        let back = anchor.weekday().num_days_from_sunday() as i64;
        Self {
            reference_sunday: anchor - Duration::days(back),
            default_utc_offset_minutes,
        }
    }

    /// The Sunday that begins the canonical availability week.
    pub fn reference_sunday(&self) -> NaiveDate {
        self.reference_sunday
    }

    /// Minutes east of UTC used when no caller offset applies.
    pub fn default_utc_offset_minutes(&self) -> i32 {
        self.default_utc_offset_minutes
    }
}
