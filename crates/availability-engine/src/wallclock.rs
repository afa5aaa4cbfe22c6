//! 12-hour wall-clock parsing, formatting and comparison.
//!
//! Availability windows are entered as clock strings like `"9:30 am"` or
//! `"12:05PM"`; the accepted grammar is an hour 1-12 without a leading
//! zero, a colon, zero-padded minutes, an optional single space, and a
//! case-insensitive meridiem suffix. Parsing is strict — anything outside
//! the grammar is an error, never a guess.

use std::cmp::Ordering;

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{Result, ScheduleError};

/// AM/PM half of the 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// A validated 12-hour clock reading: hour 1-12, minute 0-59, AM or PM.
///
/// Fields are private; construction goes through [`WallClockTime::new`],
/// [`WallClockTime::parse`] or [`WallClockTime::from_time`], all of which
/// uphold the ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClockTime {
    hours: u32,
    minutes: u32,
    meridiem: Meridiem,
}

impl WallClockTime {
    /// Build from components, validating ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidWallClock`] when `hours` is outside
    /// 1-12 or `minutes` is outside 0-59.
    pub fn new(hours: u32, minutes: u32, meridiem: Meridiem) -> Result<Self> {
        if !(1..=12).contains(&hours) {
            return Err(ScheduleError::InvalidWallClock(format!(
                "hour {hours} outside 1-12"
            )));
        }
        if minutes > 59 {
            return Err(ScheduleError::InvalidWallClock(format!(
                "minute {minutes} outside 0-59"
            )));
        }
        Ok(Self {
            hours,
            minutes,
            meridiem,
        })
    }

    /// Parse a clock string like `"9:30 am"`, `"12:05PM"` or `"1:00pm"`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidWallClock`] when the string does not
    /// match the grammar (leading-zero hours, 24-hour values, missing or
    /// unrecognized meridiem, stray whitespace).
    pub fn parse(s: &str) -> Result<Self> {
        let fail = || ScheduleError::InvalidWallClock(format!("'{s}'"));

        let (hour_part, rest) = s.split_once(':').ok_or_else(fail)?;
        let hours = match hour_part.as_bytes() {
            [c] if (b'1'..=b'9').contains(c) => (c - b'0') as u32,
            [b'1', c] if (b'0'..=b'2').contains(c) => (10 + (c - b'0')) as u32,
            _ => return Err(fail()),
        };

        let minutes = match rest.as_bytes() {
            [t @ b'0'..=b'5', o @ b'0'..=b'9', ..] => ((t - b'0') * 10 + (o - b'0')) as u32,
            _ => return Err(fail()),
        };

        let suffix = &rest[2..];
        let suffix = match suffix.as_bytes() {
            [c, ..] if c.is_ascii_whitespace() => &suffix[1..],
            _ => suffix,
        };
        let meridiem = if suffix.eq_ignore_ascii_case("am") {
            Meridiem::Am
        } else if suffix.eq_ignore_ascii_case("pm") {
            Meridiem::Pm
        } else {
            return Err(fail());
        };

        Self::new(hours, minutes, meridiem)
    }

    /// Read the 12-hour clock off a `NaiveTime`, dropping seconds.
    pub fn from_time(time: NaiveTime) -> Self {
        let meridiem = if time.hour() < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        };
        let hours = match time.hour() % 12 {
            0 => 12,
            h => h,
        };
        Self {
            hours,
            minutes: time.minute(),
            meridiem,
        }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// The 24-hour equivalent: 12 AM → 0, 12 PM → 12, otherwise the hour
    /// plus 12 when PM.
    pub fn military_hours(&self) -> u32 {
        match self.meridiem {
            Meridiem::Am => self.hours % 12,
            Meridiem::Pm => self.hours % 12 + 12,
        }
    }

    /// The same reading as a `NaiveTime` with seconds zeroed.
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.military_hours(), self.minutes, 0)
            .expect("constructor bounds hours and minutes")
    }
}

/// Render a time-of-day as `"h:mm am"` (optionally `"h:mm:ss am"`).
///
/// Lower-case meridiem, zero-padded minutes, no locale dependence.
pub fn format_time(time: NaiveTime, include_seconds: bool) -> String {
    if include_seconds {
        time.format("%-I:%M:%S %P").to_string()
    } else {
        time.format("%-I:%M %P").to_string()
    }
}

/// Keep `date`'s calendar day and replace the time-of-day with the parsed
/// clock string, seconds zeroed.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidWallClock`] when `time` fails the
/// clock-string grammar.
pub fn set_wall_clock(date: NaiveDateTime, time: &str) -> Result<NaiveDateTime> {
    let wall = WallClockTime::parse(time)?;
    Ok(date.date().and_time(wall.to_naive_time()))
}

/// Compare two clock strings by time-of-day alone.
///
/// Date-independent: both readings are compared on a shared neutral day.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidWallClock`] when either string fails the
/// grammar.
pub fn compare_wall_clock_strings(a: &str, b: &str) -> Result<Ordering> {
    let a = WallClockTime::parse(a)?;
    let b = WallClockTime::parse(b)?;
    Ok((a.military_hours(), a.minutes()).cmp(&(b.military_hours(), b.minutes())))
}

/// Round a datetime up to the nearest half-hour boundary.
///
/// Minutes below 30 round to :30 of the same hour, minutes above 30 round
/// to :00 of the next hour, and an exact :30 stays put. Seconds and
/// sub-seconds are zeroed; rounding past 23:30 rolls into the next day.
pub fn round_up_to_nearest_half_hour(datetime: NaiveDateTime) -> NaiveDateTime {
    let hour_start =
        datetime.date().and_time(NaiveTime::MIN) + Duration::hours(datetime.hour() as i64);
    match datetime.minute().cmp(&30) {
        Ordering::Less | Ordering::Equal => hour_start + Duration::minutes(30),
        Ordering::Greater => hour_start + Duration::hours(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn walltime(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn on_day(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 18)
            .unwrap()
            .and_time(walltime(h, m, s))
    }

    // ── parse tests ─────────────────────────────────────────────────────

    #[test]
    fn test_parse_accepts_grammar_variants() {
        for (input, hours, minutes, meridiem) in [
            ("9:30 am", 9, 30, Meridiem::Am),
            ("9:30am", 9, 30, Meridiem::Am),
            ("12:00 PM", 12, 0, Meridiem::Pm),
            ("12:05Am", 12, 5, Meridiem::Am),
            ("1:59 pM", 1, 59, Meridiem::Pm),
            ("10:45 pm", 10, 45, Meridiem::Pm),
        ] {
            let wall = WallClockTime::parse(input).unwrap();
            assert_eq!(wall.hours(), hours, "input: {input}");
            assert_eq!(wall.minutes(), minutes, "input: {input}");
            assert_eq!(wall.meridiem(), meridiem, "input: {input}");
        }
    }

    #[test]
    fn test_parse_rejects_off_grammar_strings() {
        for input in [
            "0:30 pm",
            "13:00 pm",
            "09:30 am",
            "9:60 am",
            "9:5 am",
            "10:30",
            "10:30  pm",
            " 9:30 am",
            "9:30 am ",
            "9:30 xm",
            "930 am",
            "",
        ] {
            assert!(
                WallClockTime::parse(input).is_err(),
                "should reject: '{input}'"
            );
        }
    }

    #[test]
    fn test_new_validates_ranges() {
        assert!(WallClockTime::new(0, 0, Meridiem::Am).is_err());
        assert!(WallClockTime::new(13, 0, Meridiem::Am).is_err());
        assert!(WallClockTime::new(1, 60, Meridiem::Pm).is_err());
        assert!(WallClockTime::new(12, 59, Meridiem::Pm).is_ok());
    }

    // ── military conversion tests ───────────────────────────────────────

    #[test]
    fn test_military_hours_noon_and_midnight() {
        assert_eq!(WallClockTime::parse("12:00 am").unwrap().military_hours(), 0);
        assert_eq!(
            WallClockTime::parse("12:00 pm").unwrap().military_hours(),
            12
        );
    }

    #[test]
    fn test_military_hours_ordinary() {
        assert_eq!(WallClockTime::parse("1:00 pm").unwrap().military_hours(), 13);
        assert_eq!(
            WallClockTime::parse("11:00 pm").unwrap().military_hours(),
            23
        );
        assert_eq!(WallClockTime::parse("1:00 am").unwrap().military_hours(), 1);
        assert_eq!(
            WallClockTime::parse("11:00 am").unwrap().military_hours(),
            11
        );
    }

    // ── formatting tests ────────────────────────────────────────────────

    #[test]
    fn test_format_time_basic() {
        assert_eq!(format_time(walltime(9, 5, 0), false), "9:05 am");
        assert_eq!(format_time(walltime(14, 30, 0), false), "2:30 pm");
        assert_eq!(format_time(walltime(0, 0, 0), false), "12:00 am");
        assert_eq!(format_time(walltime(12, 0, 0), false), "12:00 pm");
    }

    #[test]
    fn test_format_time_with_seconds() {
        assert_eq!(format_time(walltime(17, 5, 9), true), "5:05:09 pm");
    }

    // ── set_wall_clock tests ────────────────────────────────────────────

    #[test]
    fn test_set_wall_clock_replaces_time_and_zeroes_seconds() {
        let result = set_wall_clock(on_day(8, 15, 44), "2:30 pm").unwrap();
        assert_eq!(result, on_day(14, 30, 0));
    }

    #[test]
    fn test_set_wall_clock_rejects_bad_string() {
        assert!(set_wall_clock(on_day(8, 0, 0), "25:00 pm").is_err());
    }

    // ── comparison tests ────────────────────────────────────────────────

    #[test]
    fn test_compare_wall_clock_strings() {
        assert_eq!(
            compare_wall_clock_strings("9:00 am", "5:00 pm").unwrap(),
            Ordering::Less
        );
        assert_eq!(
            compare_wall_clock_strings("12:00 pm", "12:00 am").unwrap(),
            Ordering::Greater
        );
        assert_eq!(
            compare_wall_clock_strings("7:45 PM", "7:45pm").unwrap(),
            Ordering::Equal
        );
        assert!(compare_wall_clock_strings("7:45 pm", "nope").is_err());
    }

    // ── rounding tests ──────────────────────────────────────────────────

    #[test]
    fn test_round_up_below_half_hour() {
        assert_eq!(
            round_up_to_nearest_half_hour(on_day(10, 5, 0)),
            on_day(10, 30, 0)
        );
        assert_eq!(
            round_up_to_nearest_half_hour(on_day(10, 0, 0)),
            on_day(10, 30, 0)
        );
    }

    #[test]
    fn test_round_up_above_half_hour() {
        assert_eq!(
            round_up_to_nearest_half_hour(on_day(10, 45, 0)),
            on_day(11, 0, 0)
        );
    }

    #[test]
    fn test_round_up_exact_half_hour_is_noop() {
        assert_eq!(
            round_up_to_nearest_half_hour(on_day(10, 30, 0)),
            on_day(10, 30, 0)
        );
        // seconds still zeroed
        assert_eq!(
            round_up_to_nearest_half_hour(on_day(10, 30, 59)),
            on_day(10, 30, 0)
        );
    }

    #[test]
    fn test_round_up_rolls_over_midnight() {
        let result = round_up_to_nearest_half_hour(on_day(23, 45, 0));
        assert_eq!(
            result,
            NaiveDate::from_ymd_opt(2026, 3, 19)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );
    }

    // ── property tests ──────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_parse_format_idempotent(
            h in 1u32..=12,
            m in 0u32..=59,
            pm in any::<bool>(),
            spaced in any::<bool>(),
            upper in any::<bool>(),
        ) {
            let suffix = match (pm, upper) {
                (true, true) => "PM",
                (true, false) => "pm",
                (false, true) => "AM",
                (false, false) => "am",
            };
            let sep = if spaced { " " } else { "" };
            let input = format!("{h}:{m:02}{sep}{suffix}");

            let wall = WallClockTime::parse(&input).unwrap();
            let rendered = format_time(wall.to_naive_time(), false);
            let canonical = format!("{h}:{m:02} {}", if pm { "pm" } else { "am" });
            prop_assert_eq!(rendered, canonical);
        }

        #[test]
        fn prop_round_up_lands_on_half_hour_at_or_after(h in 0u32..=23, m in 0u32..=59, s in 0u32..=59) {
            let input = on_day(h, m, s);
            let rounded = round_up_to_nearest_half_hour(input);
            prop_assert_eq!(rounded.minute() % 30, 0);
            prop_assert_eq!(rounded.second(), 0);
            prop_assert!(rounded >= input - Duration::seconds(59));
            prop_assert!(rounded <= input + Duration::minutes(30));
        }
    }
}
