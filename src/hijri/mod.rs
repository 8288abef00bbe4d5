//! Hijri (Islamic lunar) calendar.
//!
//! Two algorithms are available:
//!
//! - the tabular Islamic calendar ([`tabular`]), a 30-year arithmetic cycle
//!   valid for any year;
//! - the Um Al-Qura civil calendar of Saudi Arabia ([`umalqura`]), whose
//!   month starts are tabulated for the years 1318 through 1500 (see
//!   [`data`]) and can be corrected with [`Adjustments`].
//!
//! [`Calendar`] chooses between them.
//!
//! # Example
//!
//! ```
//! use taqwim::hijri::{Calendar, HijriDate};
//!
//! let calendar = Calendar::default();
//! let date = calendar.gregorian_to_hijri(2024, 3, 11).unwrap();
//!
//! assert_eq!(HijriDate::new(1445, 9, 1), date);
//! ```

use std::fmt;

pub mod adjustment;
pub mod cache;
pub mod calendar;
pub mod data;
pub mod tabular;
pub mod umalqura;

pub use adjustment::{Adjustments, MonthStarts};
pub use cache::TableCache;
pub use calendar::{Calendar, Config};

/// First year covered by the Um Al-Qura table.
pub const UM_START_YEAR: i32 = 1318;
/// Last year covered by the Um Al-Qura table.
pub const UM_END_YEAR: i32 = 1500;
/// Julian day number of 1318/1/1 in the Um Al-Qura calendar.
pub const UM_START_JDN: i64 = 2415140;
/// Julian day number of 1500/12/1 in the Um Al-Qura calendar, the last
/// month start in the table.
pub const UM_END_JDN: i64 = 2479960;
/// Offset between Julian day numbers and the values stored in the table.
pub const MJD_OFFSET: i64 = 2400000;

/// A date in the Hijri calendar.
///
/// There is no year zero: year `-1` directly precedes year `1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl From<(i32, u32, u32)> for HijriDate {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        Self::new(year, month, day)
    }
}

/// Formats as `YYYY-MM-DD`, with a leading `-` for negative years.
///
/// ```
/// use taqwim::hijri::HijriDate;
///
/// assert_eq!("1445-09-01", HijriDate::new(1445, 9, 1).to_string());
/// assert_eq!("-0001-12-29", HijriDate::new(-1, 12, 29).to_string());
/// ```
impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-")?;
        }
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.unsigned_abs(),
            self.month,
            self.day
        )
    }
}

/// A Hijri date together with its position in the year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HijriDay {
    pub date: HijriDate,
    /// Days elapsed since the first day of the year, `0` for 1 Muharram.
    pub day_of_year: u32,
}
