//! Weekday naming and week placement.
//!
//! Weekdays are indexed Sunday = 0 through Saturday = 6. Timezone shifts
//! can push a computed index to 7, so placement functions accept 7 and
//! wrap it; the name conversions stay a strict bijection over 0-6.

use chrono::{Datelike, Duration, NaiveDateTime};

use crate::error::{Result, ScheduleError};

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Name for a weekday index in 0-6.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidWeekday`] outside 0-6.
pub fn weekday_to_string(index: u32) -> Result<&'static str> {
    WEEKDAY_NAMES
        .get(index as usize)
        .copied()
        .ok_or_else(|| ScheduleError::InvalidWeekday(format!("index {index} outside 0-6")))
}

/// Index for a weekday name, case-insensitive.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidWeekday`] for an unrecognized name.
pub fn string_to_weekday(name: &str) -> Result<u32> {
    WEEKDAY_NAMES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name))
        .map(|i| i as u32)
        .ok_or_else(|| ScheduleError::InvalidWeekday(format!("'{name}'")))
}

/// Place `date`'s time-of-day onto its week's occurrence of `weekday`
/// (default: `date`'s own weekday).
///
/// The week's Sunday is the ISO week's Monday minus one day, so a Sunday
/// input anchors to the week it ends — placement from a Sunday lands in
/// the seven days ending on it, not the seven days starting with it.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidWeekday`] when `weekday` exceeds 7.
/// A value of exactly 7 wraps to Sunday, absorbing week overflow produced
/// by timezone shifts.
pub fn nearest_date_for_weekday(date: NaiveDateTime, weekday: Option<u32>) -> Result<NaiveDateTime> {
    let target = match weekday {
        None => date.weekday().num_days_from_sunday(),
        Some(w @ 0..=7) => w % 7,
        Some(w) => {
            return Err(ScheduleError::InvalidWeekday(format!(
                "index {w} outside 0-7"
            )));
        }
    };

    let week_sunday =
        date.date() - Duration::days(date.weekday().num_days_from_monday() as i64 + 1);
    Ok((week_sunday + Duration::days(target as i64)).and_time(date.time()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, mi, 0).unwrap())
    }

    #[test]
    fn test_weekday_name_bijection() {
        for index in 0..=6 {
            let name = weekday_to_string(index).unwrap();
            assert_eq!(string_to_weekday(name).unwrap(), index);
        }
    }

    #[test]
    fn test_string_to_weekday_case_insensitive() {
        assert_eq!(string_to_weekday("sunday").unwrap(), 0);
        assert_eq!(string_to_weekday("WEDNESDAY").unwrap(), 3);
        assert_eq!(string_to_weekday("saTurDay").unwrap(), 6);
    }

    #[test]
    fn test_out_of_domain_weekdays_rejected() {
        assert!(weekday_to_string(7).is_err());
        assert!(string_to_weekday("Sonntag").is_err());
        assert!(string_to_weekday("").is_err());
    }

    #[test]
    fn test_places_onto_requested_weekday() {
        // Wednesday 2026-03-18 → Friday of the same week, time preserved
        let result = nearest_date_for_weekday(at(2026, 3, 18, 10, 30), Some(5)).unwrap();
        assert_eq!(result, at(2026, 3, 20, 10, 30));
    }

    #[test]
    fn test_defaults_to_own_weekday() {
        // Monday through Saturday map to themselves
        for day in 16..=21 {
            let date = at(2026, 3, day, 7, 45);
            assert_eq!(nearest_date_for_weekday(date, None).unwrap(), date);
        }
    }

    #[test]
    fn test_seven_wraps_to_sunday() {
        let from_seven = nearest_date_for_weekday(at(2026, 3, 18, 9, 0), Some(7)).unwrap();
        let from_zero = nearest_date_for_weekday(at(2026, 3, 18, 9, 0), Some(0)).unwrap();
        assert_eq!(from_seven, from_zero);
        assert_eq!(from_zero, at(2026, 3, 15, 9, 0));
    }

    #[test]
    fn test_rejects_index_above_seven() {
        assert!(nearest_date_for_weekday(at(2026, 3, 18, 9, 0), Some(8)).is_err());
    }

    #[test]
    fn test_sunday_input_anchors_to_week_it_ends() {
        // ISO weeks end on Sunday, so a Sunday input maps back to itself
        // minus a week when re-placed on Sunday.
        let sunday = at(2026, 3, 15, 10, 0);
        let result = nearest_date_for_weekday(sunday, None).unwrap();
        assert_eq!(result, at(2026, 3, 8, 10, 0));
    }
}
