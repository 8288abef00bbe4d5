//! The Hijri calendar façade.

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use super::adjustment::{Adjustments, MonthStarts};
use super::cache::TableCache;
use super::{HijriDate, HijriDay, UM_END_JDN, UM_END_YEAR, UM_START_JDN, UM_START_YEAR};
use super::{tabular, umalqura};
use crate::date::Date;
use crate::error::CalendarError;

/// Settings of a [`Calendar`].
///
/// ```
/// use taqwim::hijri::Config;
///
/// let config: Config = serde_json::from_str(
///     r#"{"use_lookup_table": true, "adjustments": "{\"1532\": 60382}"}"#,
/// )
/// .unwrap();
/// assert_eq!(Some(60382), config.adjustments.get(1532));
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `true` for the Um Al-Qura calendar where its table applies, `false`
    /// for the tabular calendar everywhere.
    pub use_lookup_table: bool,
    /// Corrections to the Um Al-Qura table.
    pub adjustments: Adjustments,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_lookup_table: true,
            adjustments: Adjustments::default(),
        }
    }
}

/// Converts between Hijri dates and Julian day numbers.
///
/// With the lookup table enabled, dates inside the Um Al-Qura range use the
/// Um Al-Qura calendar and everything else falls back to the tabular
/// calendar. The range test differs by direction: Julian days must lie
/// strictly between [`UM_START_JDN`] and [`UM_END_JDN`], Hijri years between
/// [`UM_START_YEAR`] and [`UM_END_YEAR`] inclusive.
///
/// The adjusted table is loaded on the first query that needs it and kept
/// for the lifetime of the calendar.
///
/// # Example
///
/// ```
/// use taqwim::hijri::{Adjustments, Calendar, HijriDate};
///
/// let umalqura = Calendar::new(true, Adjustments::new());
/// let tabular = Calendar::new(false, Adjustments::new());
///
/// assert_eq!(Ok(2460381), umalqura.hijri_to_day(1445, 9, 1));
/// assert_eq!(Ok(2460380), tabular.hijri_to_day(1445, 9, 1));
/// assert_eq!(Ok(HijriDate::new(1445, 8, 29)), umalqura.day_to_hijri(2460380));
/// ```
#[derive(Debug, Clone)]
pub struct Calendar {
    use_lookup_table: bool,
    adjustments: Adjustments,
    cache: Arc<TableCache>,
    table: OnceLock<Arc<MonthStarts>>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Calendar {
    /// Creates a calendar sharing the process-wide [`TableCache`].
    pub fn new(use_lookup_table: bool, adjustments: Adjustments) -> Self {
        Self::with_cache(use_lookup_table, adjustments, TableCache::shared())
    }
    /// Creates a calendar backed by the given cache.
    pub fn with_cache(
        use_lookup_table: bool,
        adjustments: Adjustments,
        cache: Arc<TableCache>,
    ) -> Self {
        Self {
            use_lookup_table,
            adjustments,
            cache,
            table: OnceLock::new(),
        }
    }
    pub fn from_config(config: Config) -> Self {
        Self::new(config.use_lookup_table, config.adjustments)
    }

    pub fn uses_lookup_table(&self) -> bool {
        self.use_lookup_table
    }
    pub fn adjustments(&self) -> &Adjustments {
        &self.adjustments
    }

    /// Returns the Um Al-Qura month starts with this calendar's adjustments
    /// applied.
    pub fn month_starts(&self) -> Arc<MonthStarts> {
        self.table().clone()
    }

    fn table(&self) -> &Arc<MonthStarts> {
        self.table
            .get_or_init(|| self.cache.month_starts(&self.adjustments))
    }

    fn in_table_years(&self, year: i32, use_lookup_table: bool) -> bool {
        use_lookup_table && (UM_START_YEAR..=UM_END_YEAR).contains(&year)
    }

    /// Converts a Julian day number into a Hijri date, with its day of year.
    pub fn hijri_day(&self, jdn: i64) -> Result<HijriDay, CalendarError> {
        if self.use_lookup_table && UM_START_JDN < jdn && jdn < UM_END_JDN {
            umalqura::jdn_to_hijri(self.table(), jdn)
        } else {
            tabular::jdn_to_hijri(jdn)
        }
    }
    /// Converts a Julian day number into a Hijri date.
    pub fn day_to_hijri(&self, jdn: i64) -> Result<HijriDate, CalendarError> {
        self.hijri_day(jdn).map(|day| day.date)
    }
    /// Returns the day of the Hijri year of a Julian day number, `0` for
    /// 1 Muharram.
    pub fn day_of_year(&self, jdn: i64) -> Result<u32, CalendarError> {
        self.hijri_day(jdn).map(|day| day.day_of_year)
    }

    /// Converts a Hijri date into a Julian day number.
    ///
    /// Month and day are not validated, see [`Calendar::is_valid_date`].
    pub fn hijri_to_day(&self, year: i32, month: u32, day: u32) -> Result<i64, CalendarError> {
        if self.in_table_years(year, self.use_lookup_table) {
            umalqura::hijri_to_jdn(self.table(), year, month, day)
        } else {
            tabular::hijri_to_jdn(year, month, day)
        }
    }

    /// Returns the number of days (29 or 30) in `month` of `year`.
    pub fn month_length(&self, month: u32, year: i32) -> Result<u32, CalendarError> {
        self.month_length_in(month, year, self.use_lookup_table)
    }
    /// Like [`Calendar::month_length`], but choosing the algorithm with
    /// `use_lookup_table` instead of the calendar's own setting.
    pub fn month_length_in(
        &self,
        month: u32,
        year: i32,
        use_lookup_table: bool,
    ) -> Result<u32, CalendarError> {
        if self.in_table_years(year, use_lookup_table) {
            umalqura::month_length(self.table(), month, year)
        } else {
            Ok(tabular::month_length(month, year))
        }
    }

    /// Returns `true` if `year` has 355 days.
    pub fn is_leap_year(&self, year: i32) -> Result<bool, CalendarError> {
        self.is_leap_year_in(year, self.use_lookup_table)
    }
    /// Like [`Calendar::is_leap_year`], but choosing the algorithm with
    /// `use_lookup_table` instead of the calendar's own setting.
    pub fn is_leap_year_in(
        &self,
        year: i32,
        use_lookup_table: bool,
    ) -> Result<bool, CalendarError> {
        if self.in_table_years(year, use_lookup_table) {
            umalqura::is_leap_year(self.table(), year)
        } else {
            Ok(tabular::is_leap_year(year))
        }
    }

    /// Checks that a Hijri date exists in this calendar.
    ///
    /// A month whose length is unknown (e.g. the last month of the table)
    /// holds no valid date.
    ///
    /// ```
    /// use taqwim::hijri::Calendar;
    ///
    /// let calendar = Calendar::default();
    /// assert!(calendar.is_valid_date(1445, 9, 30));
    /// assert!(!calendar.is_valid_date(1445, 8, 30));
    /// assert!(!calendar.is_valid_date(0, 1, 1));
    /// ```
    pub fn is_valid_date(&self, year: i32, month: u32, day: u32) -> bool {
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) || year == 0 {
            return false;
        }
        self.month_length(month, year)
            .is_ok_and(|length| day <= length)
    }

    /// Converts a Hijri date into a calendar-independant [`Date`].
    pub fn hijri_to_date(&self, year: i32, month: u32, day: u32) -> Result<Date, CalendarError> {
        self.hijri_to_day(year, month, day).map(Date::from_jdn)
    }

    /// Converts a Gregorian date into a Hijri date.
    ///
    /// ```
    /// use taqwim::hijri::{Calendar, HijriDate};
    ///
    /// let calendar = Calendar::default();
    /// assert_eq!(Ok(HijriDate::new(1446, 1, 1)), calendar.gregorian_to_hijri(2024, 7, 7));
    /// ```
    pub fn gregorian_to_hijri(
        &self,
        year: i32,
        month: i32,
        day: i32,
    ) -> Result<HijriDate, CalendarError> {
        let date = Date::from_gregorian(year, month, day)
            .ok_or(CalendarError::InvalidCivilDate { year, month, day })?;
        self.day_to_hijri(date.jdn())
    }
    /// Converts a Hijri date into a Gregorian `(year, month, day)`.
    pub fn hijri_to_gregorian(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<(i32, i32, i32), CalendarError> {
        let date = self.hijri_to_date(year, month, day)?;
        date.gregorian().ok_or(CalendarError::YearOutOfRange { jdn: date.jdn() })
    }

    /// Converts a proleptic Julian calendar date into a Hijri date.
    pub fn julian_to_hijri(
        &self,
        year: i32,
        month: i32,
        day: i32,
    ) -> Result<HijriDate, CalendarError> {
        let date = Date::from_julian(year, month, day)
            .ok_or(CalendarError::InvalidCivilDate { year, month, day })?;
        self.day_to_hijri(date.jdn())
    }
    /// Converts a Hijri date into a Julian calendar `(year, month, day)`.
    pub fn hijri_to_julian(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<(i32, i32, i32), CalendarError> {
        let date = self.hijri_to_date(year, month, day)?;
        date.julian().ok_or(CalendarError::YearOutOfRange { jdn: date.jdn() })
    }

    /// Converts a "Western" date (Julian before the 1582 reform, Gregorian
    /// after) into a Hijri date.
    pub fn western_to_hijri(
        &self,
        year: i32,
        month: i32,
        day: i32,
    ) -> Result<HijriDate, CalendarError> {
        let date = Date::from_western(year, month, day)
            .ok_or(CalendarError::InvalidCivilDate { year, month, day })?;
        self.day_to_hijri(date.jdn())
    }
    /// Converts a Hijri date into a "Western" `(year, month, day)`.
    pub fn hijri_to_western(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<(i32, i32, i32), CalendarError> {
        let date = self.hijri_to_date(year, month, day)?;
        date.western().ok_or(CalendarError::YearOutOfRange { jdn: date.jdn() })
    }
}
