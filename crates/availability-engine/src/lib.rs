//! # availability-engine
//!
//! Deterministic recurring-availability scheduling.
//!
//! Donors, receivers and deliverers declare *weekly recurring* availability
//! windows — a weekday plus a time-of-day range, entered in their own
//! zone. This crate converts between that recurring form and absolute
//! calendar dates: normalization onto a canonical reference week for
//! storage and comparison, and projection back onto the current calendar
//! week near an explicit "now" anchor, including week-overflow correction
//! for overnight windows and the split that keeps an already-begun window
//! from being silently dropped.
//!
//! Everything is a pure function over immutable values — no system clock,
//! no I/O, no shared state. The caller supplies "now" and the client's UTC
//! offset, which keeps every operation testable and safe to call from any
//! number of concurrent request handlers.
//!
//! ## Modules
//!
//! - [`range`] — the `DateRange` value type: ordering, order-error detection
//! - [`wallclock`] — 12-hour clock parsing/formatting/comparison, half-hour rounding
//! - [`weekday`] — weekday index ↔ name, placement within a week
//! - [`zone`] — fixed-offset shifting, calendar-day predicates, IANA offset lookup
//! - [`relative`] — absolute dates → canonical availability week
//! - [`project`] — canonical availability week → absolute dates near "now"
//! - [`config`] — the immutable anchor/offset configuration
//! - [`error`] — error types

pub mod config;
pub mod error;
pub mod project;
pub mod range;
pub mod relative;
pub mod wallclock;
pub mod weekday;
pub mod zone;

pub use config::ScheduleConfig;
pub use error::{Result, ScheduleError};
pub use project::to_absolute_ranges;
pub use range::DateRange;
pub use relative::to_availability_ranges;
pub use wallclock::{
    compare_wall_clock_strings, format_time, round_up_to_nearest_half_hour, set_wall_clock,
    Meridiem, WallClockTime,
};
pub use weekday::{nearest_date_for_weekday, string_to_weekday, weekday_to_string};
pub use zone::{
    begins_on_or_before_day, is_same_calendar_day, is_strictly_before, utc_offset_minutes,
};
