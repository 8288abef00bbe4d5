//! Tabular Islamic calendar: a 30-year cycle of 10631 days with 11 leap
//! years (2, 5, 7, 10, 13, 15, 18, 21, 24, 26, 29).
//!
//! Valid for any date from 8/18 of year -5499 (JDN 1) on. Year numbers skip
//! zero: year `-1` is followed by year `1`.
//!
//! Every rounding here is half away from zero ([`f64::round`]); the
//! constants are tuned to it.

use super::{HijriDate, HijriDay};
use crate::error::CalendarError;

/// Shift between the JDN axis and the start of the cycle count.
const EPOCH_SHIFT: i64 = 7666;
/// Days in a 30-year cycle.
const CYCLE_DAYS: i64 = 10631;
/// Mean year length.
const MEAN_YEAR: f64 = 354.36667;
/// Mean month length used to place month starts within a year.
const MEAN_MONTH: f64 = 29.5;
/// Years from the start of the cycle count to year 1.
const YEAR_OFFSET: i64 = 5520;
/// Offset bringing negative years onto the cycle for the leap rule.
const LEAP_YEAR_OFFSET: i32 = 5521;

/// Earliest supported date.
pub const FLOOR: HijriDate = HijriDate {
    year: -5499,
    month: 8,
    day: 18,
};

/// Converts a Hijri date into a Julian day number.
///
/// Month and day are not checked against the calendar; out-of-range values
/// roll over arithmetically.
///
/// # Example
///
/// ```
/// use taqwim::hijri::tabular;
///
/// assert_eq!(Ok(1948439), tabular::hijri_to_jdn(1, 1, 1));
/// assert_eq!(Ok(1), tabular::hijri_to_jdn(-5499, 8, 18));
/// assert!(tabular::hijri_to_jdn(-5499, 8, 17).is_err());
/// ```
pub fn hijri_to_jdn(year: i32, month: u32, day: u32) -> Result<i64, CalendarError> {
    if (year, month, day) < (FLOOR.year, FLOOR.month, FLOOR.day) {
        return Err(CalendarError::BeforeEpoch { year, month, day });
    }
    let hy = i64::from(year) + if year < 0 { YEAR_OFFSET } else { YEAR_OFFSET - 1 };
    let n = hy.div_euclid(30);
    let mut j = n * CYCLE_DAYS + round((hy - n * 30) as f64 * MEAN_YEAR);
    j += round((f64::from(month) - 1.0) * MEAN_MONTH) + i64::from(day);
    Ok(j - EPOCH_SHIFT)
}

/// Converts a Julian day number into a Hijri date.
///
/// Fails with [`CalendarError::YearOutOfRange`] if the Hijri year does not
/// fit in an `i32`.
///
/// # Example
///
/// ```
/// use taqwim::hijri::{HijriDate, tabular};
///
/// let day = tabular::jdn_to_hijri(1948439).unwrap();
/// assert_eq!(HijriDate::new(1, 1, 1), day.date);
/// assert_eq!(0, day.day_of_year);
/// ```
pub fn jdn_to_hijri(jdn: i64) -> Result<HijriDay, CalendarError> {
    let out_of_range = CalendarError::YearOutOfRange { jdn };
    let mut j = jdn.checked_add(EPOCH_SHIFT).ok_or(out_of_range)?;
    let n = j.div_euclid(CYCLE_DAYS);
    j -= n * CYCLE_DAYS;
    let in_cycle = j;
    let mut y = (j as f64 / MEAN_YEAR).floor() as i64;
    j -= round(y as f64 * MEAN_YEAR);

    // `j` is now the 1-based day of year, unless it hit `0`, which is the
    // last day of the previous year.
    let (month, day, ordinal);
    if j == 0 {
        y -= 1;
        j = in_cycle - round(y as f64 * MEAN_YEAR);
        ordinal = j;
        month = 12;
        day = j - 325;
    } else {
        ordinal = j;
        j += 29;
        month = (24 * j).div_euclid(709);
        day = j - (709 * month).div_euclid(24);
    }

    let mut year = n * 30 + y + 1 - YEAR_OFFSET;
    if year <= 0 {
        year -= 1;
    }
    // month, day and ordinal are bounded by the year arithmetic above
    Ok(HijriDay {
        date: HijriDate::new(
            i32::try_from(year).map_err(|_| out_of_range)?,
            month as u32,
            day as u32,
        ),
        day_of_year: (ordinal - 1) as u32,
    })
}

/// Returns `true` if the 12th month of `year` has 30 days.
///
/// # Example
///
/// ```
/// use taqwim::hijri::tabular;
///
/// assert!(tabular::is_leap_year(1445));
/// assert!(!tabular::is_leap_year(1446));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    let year = if year < 0 { year + LEAP_YEAR_OFFSET } else { year };
    round(f64::from(year % 30) * 0.36667) > round(f64::from((year - 1) % 30) * 0.36667)
}

/// Returns the number of days in `month` of `year`: odd months have 30,
/// even months 29, and the 12th month 30 in leap years.
pub fn month_length(month: u32, year: i32) -> u32 {
    if month == 12 {
        if is_leap_year(year) { 30 } else { 29 }
    } else {
        29 + month % 2
    }
}

fn round(x: f64) -> i64 {
    x.round() as i64
}
