//! Errors reported by the Hijri conversions.

use thiserror::Error;

/// Errors that can occur while converting dates.
///
/// All of them are local to the query that produced them; the calendar stays
/// usable afterwards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum CalendarError {
    /// The Hijri date precedes the earliest date of the tabular calendar,
    /// 8/18 of year -5499.
    #[error("Hijri date {year}/{month}/{day} precedes the earliest supported date")]
    BeforeEpoch { year: i32, month: u32, day: u32 },

    /// A month index is not covered by the Um Al-Qura table.
    #[error("month index {index} is outside the Um Al-Qura table")]
    OutOfTable { index: i64 },

    /// No month of the Um Al-Qura table contains the Julian day.
    #[error("Julian day {jdn} is outside the Um Al-Qura table")]
    JdnOutOfTable { jdn: i64 },

    /// The Julian day lies so far from the epoch that its year does not fit
    /// in an `i32`.
    #[error("year of Julian day {jdn} is out of range")]
    YearOutOfRange { jdn: i64 },

    /// A Gregorian, Julian or Western date that does not exist.
    #[error("invalid civil date {year:04}-{month:02}-{day:02}")]
    InvalidCivilDate { year: i32, month: i32, day: i32 },
}
