//! Um Al-Qura calendar, read off a [`MonthStarts`] table.
//!
//! Month indexes count from month 1 of [`UM_START_YEAR`]: month `m` of year
//! `y` is index `m - 1 + 12 * (y - UM_START_YEAR)`. Any index missing from
//! the table is reported as [`CalendarError::OutOfTable`].

use super::adjustment::MonthStarts;
use super::{HijriDate, HijriDay, MJD_OFFSET, UM_START_YEAR};
use crate::error::CalendarError;

/// Converts a Julian day number into a Hijri date.
///
/// The table is expected to be strictly increasing; the month containing
/// `jdn` is found by binary search. A table that is not yields
/// [`CalendarError::JdnOutOfTable`] where the search lands before the start
/// of the month or year.
///
/// # Example
///
/// ```
/// use taqwim::hijri::{HijriDate, MonthStarts, umalqura};
///
/// let table = MonthStarts::base();
/// let day = umalqura::jdn_to_hijri(&table, 2460381).unwrap();
/// assert_eq!(HijriDate::new(1445, 9, 1), day.date);
/// ```
pub fn jdn_to_hijri(table: &MonthStarts, jdn: i64) -> Result<HijriDay, CalendarError> {
    let mjd = jdn - MJD_OFFSET;
    let starts = table.as_slice();
    let i = starts.partition_point(|&start| i64::from(start) <= mjd);
    if i == 0 || i == starts.len() {
        return Err(CalendarError::JdnOutOfTable { jdn });
    }

    let cycle = (i - 1) / 12;
    let month = i - 12 * cycle;
    let out_of_table = CalendarError::JdnOutOfTable { jdn };
    let day = u32::try_from(mjd - i64::from(starts[i - 1]) + 1)
        .ok()
        .filter(|&day| day >= 1)
        .ok_or(out_of_table)?;
    let day_of_year =
        u32::try_from(mjd - i64::from(starts[12 * cycle])).map_err(|_| out_of_table)?;
    Ok(HijriDay {
        date: HijriDate::new(UM_START_YEAR + cycle as i32, month as u32, day),
        day_of_year,
    })
}

/// Converts a Hijri date into a Julian day number. The day is not checked
/// against the month length.
pub fn hijri_to_jdn(
    table: &MonthStarts,
    year: i32,
    month: u32,
    day: u32,
) -> Result<i64, CalendarError> {
    let start = month_start(table, month_index(year, month))?;
    Ok(i64::from(day) + start - 1 + MJD_OFFSET)
}

/// Returns the number of days in `month` of `year`.
pub fn month_length(table: &MonthStarts, month: u32, year: i32) -> Result<u32, CalendarError> {
    let i = month_index(year, month);
    let len = month_start(table, i + 1)? - month_start(table, i)?;
    u32::try_from(len).map_err(|_| CalendarError::OutOfTable { index: i })
}

/// Returns `true` if `year` has 355 days in the table, i.e. the sum of its
/// month lengths rather than its position in a 30-year cycle.
pub fn is_leap_year(table: &MonthStarts, year: i32) -> Result<bool, CalendarError> {
    let first = month_index(year, 1);
    let len = month_start(table, first + 12)? - month_start(table, first)?;
    Ok(len > 354)
}

fn month_index(year: i32, month: u32) -> i64 {
    i64::from(month) - 1 + 12 * (i64::from(year) - i64::from(UM_START_YEAR))
}

fn month_start(table: &MonthStarts, index: i64) -> Result<i64, CalendarError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i))
        .map(i64::from)
        .ok_or(CalendarError::OutOfTable { index })
}
