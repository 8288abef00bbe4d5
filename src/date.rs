//! Calendar-independant date, and the proleptic Gregorian/Julian calendars.

use std::ops::{Add, Sub};

/// First Julian day number of the Gregorian calendar (1582-10-15).
pub const GREGORIAN_REFORM_JDN: i64 = 2299161;

/// A calendar-independant date.
///
/// Supported range for the Gregorian and Julian calendars begins from
/// January 1, 4713 BC, proleptic Julian calendar (JDN 0). The JDN itself is
/// signed and unbounded.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: i64,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: i64) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i64 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if the date does not exist or is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use taqwim::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert_eq!(None, Date::from_gregorian(2023, 2, 29));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !is_valid_ymd(month, day, YearType::from_gregorian(year)) {
            return None;
        }
        let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
        let jdn = (1461 * (y + 4800 + (m - 14) / 12)) / 4
            + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075;
        (jdn >= 0).then(|| Self::from_jdn(jdn))
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format, or `None` if the year does not
    /// fit in an `i32`.
    ///
    /// # Example
    ///
    /// ```
    /// use taqwim::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!(Some((2000, 1, 1)), date.gregorian());
    /// assert_eq!(None, Date::from_jdn(i64::MAX).gregorian());
    /// ```
    pub fn gregorian(&self) -> Option<(i32, i32, i32)> {
        narrow(self.gregorian_wide())
    }

    fn gregorian_wide(&self) -> (i128, i128, i128) {
        let jdn = i128::from(self.jdn);
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year, month, day)
    }

    /// Creates a `Date` with a proleptic Julian calendar date.
    ///
    /// `year` is an astronomical year number, as in [`Date::from_gregorian`].
    ///
    /// # Example
    ///
    /// ```
    /// use taqwim::Date;
    ///
    /// let date = Date::from_julian(1582, 10, 4).unwrap();
    /// assert_eq!(2299160, date.jdn());
    /// ```
    pub fn from_julian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !is_valid_ymd(month, day, YearType::from_julian(year)) {
            return None;
        }
        let a = (14 - i64::from(month)) / 12;
        let y = i64::from(year) + 4800 - a;
        let m = i64::from(month) + 12 * a - 3;
        let jdn = i64::from(day) + (153 * m + 2) / 5 + 365 * y + y / 4 - 32083;
        (jdn >= 0).then(|| Self::from_jdn(jdn))
    }
    /// Represents the date in proleptic Julian calendar, in
    /// `(year, month, day)` format. `None` if the year does not fit in an
    /// `i32`.
    ///
    /// # Example
    ///
    /// ```
    /// use taqwim::Date;
    ///
    /// assert_eq!(Some((-4712, 1, 1)), Date::from_jdn(0).julian());
    /// ```
    pub fn julian(&self) -> Option<(i32, i32, i32)> {
        let c = i128::from(self.jdn) + 32082;
        let d = (4 * c + 3) / 1461;
        let e = c - 1461 * d / 4;
        let m = (5 * e + 2) / 153;
        let day = e - (153 * m + 2) / 5 + 1;
        let month = m + 3 - 12 * (m / 10);
        let year = d - 4800 + m / 10;
        narrow((year, month, day))
    }

    /// Creates a `Date` from a "Western" date: Julian calendar before the
    /// Gregorian reform of 1582, Gregorian calendar from then on.
    ///
    /// The ten days skipped by the reform (1582-10-05 to 1582-10-14) are read
    /// as Julian dates.
    pub fn from_western(year: i32, month: i32, day: i32) -> Option<Self> {
        match Self::from_gregorian(year, month, day) {
            Some(date) if date.jdn >= GREGORIAN_REFORM_JDN => Some(date),
            _ => Self::from_julian(year, month, day),
        }
    }
    /// Represents the date in the "Western" calendar, see
    /// [`Date::from_western`].
    ///
    /// # Example
    ///
    /// ```
    /// use taqwim::Date;
    ///
    /// assert_eq!(Some((1582, 10, 4)), Date::from_jdn(2299160).western());
    /// assert_eq!(Some((1582, 10, 15)), Date::from_jdn(2299161).western());
    /// ```
    pub fn western(&self) -> Option<(i32, i32, i32)> {
        if self.jdn >= GREGORIAN_REFORM_JDN {
            self.gregorian()
        } else {
            self.julian()
        }
    }

    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use taqwim::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian_wide();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use taqwim::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        (self.jdn.rem_euclid(7) + 1) as i32
    }
}

impl Add<i64> for Date {
    type Output = Date;
    fn add(self, rhs: i64) -> Self::Output {
        Date::from_jdn(self.jdn + rhs)
    }
}
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Determines if `year` is a leap year in Julian calendar.
    pub fn from_julian(year: i32) -> Self {
        if year.rem_euclid(4) == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

fn narrow((year, month, day): (i128, i128, i128)) -> Option<(i32, i32, i32)> {
    Some((
        i32::try_from(year).ok()?,
        i32::try_from(month).ok()?,
        i32::try_from(day).ok()?,
    ))
}

fn days_in_month(month: i32, year_type: YearType) -> i32 {
    match month {
        2 => 28 + year_type.is_leap() as i32,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_valid_ymd(month: i32, day: i32, year_type: YearType) -> bool {
    (1..=12).contains(&month) && day >= 1 && day <= days_in_month(month, year_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2024, 3, 11).unwrap();
        assert_eq!(2460381, date.jdn());
        let date = Date::from_gregorian(1582, 10, 15).unwrap();
        assert_eq!(GREGORIAN_REFORM_JDN, date.jdn());
    }

    #[test]
    fn invalid_gregorian() {
        for (y, m, d) in [(2023, 2, 29), (2024, 13, 1), (2024, 4, 31), (2024, 1, 0)] {
            assert_eq!(None, Date::from_gregorian(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
        assert!(Date::from_gregorian(2024, 2, 29).is_some());
        assert!(Date::from_gregorian(2000, 2, 29).is_some());
        assert_eq!(None, Date::from_gregorian(1900, 2, 29));
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!(Some((1970, 1, 1)), date.gregorian());
        let date = Date::from_jdn(2460499);
        assert_eq!(Some((2024, 7, 7)), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!(Some((2000, 1, 1)), date.gregorian());
    }

    #[test]
    fn julian() {
        assert_eq!(Some(Date::from_jdn(0)), Date::from_julian(-4712, 1, 1));
        assert_eq!(Some(Date::from_jdn(1948440)), Date::from_julian(622, 7, 16));
        assert_eq!(Some((622, 7, 16)), Date::from_jdn(1948440).julian());
        assert_eq!(Some((1582, 10, 4)), Date::from_jdn(2299160).julian());
        assert_eq!(None, Date::from_julian(1900, 2, 30));
        assert!(Date::from_julian(1900, 2, 29).is_some());
    }

    #[test]
    fn western() {
        assert_eq!(2299160, Date::from_western(1582, 10, 4).unwrap().jdn());
        assert_eq!(2299161, Date::from_western(1582, 10, 15).unwrap().jdn());
        assert_eq!(2451545, Date::from_western(2000, 1, 1).unwrap().jdn());
        assert_eq!(1948440, Date::from_western(622, 7, 16).unwrap().jdn());
        assert_eq!(Some((622, 7, 16)), Date::from_jdn(1948440).western());
    }

    #[test]
    fn to_day_of_week() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(4, date.day_of_week());
        let date = Date::from_gregorian(2024, 3, 11).unwrap();
        assert_eq!(1, date.day_of_week());
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2024, 2, 28).unwrap();
        assert_eq!("2024-03-01", (date + 2).iso_gregorian());
        assert_eq!("2024-02-27", (date + -1).iso_gregorian());
        assert_eq!(-2, date - (date + 2));
    }

    #[test]
    fn huge_jdn() {
        // past the last year an `i32` can hold
        for jdn in [1_000_000_000_000, i64::MAX] {
            let date = Date::from_jdn(jdn);
            assert_eq!(None, date.gregorian(), "{jdn}");
            assert_eq!(None, date.julian(), "{jdn}");
            assert_eq!(None, date.western(), "{jdn}");
        }
        assert_eq!(
            "2737902294-11-20",
            Date::from_jdn(1_000_000_000_000).iso_gregorian()
        );
        assert_eq!(Some((2083538604, 6, 11)), Date::from_jdn(760998569793).gregorian());
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2024-03-11",
            Date::from_gregorian(2024, 3, 11).unwrap().iso_gregorian()
        );
    }
}

#[cfg(test)]
mod tests_priv {
    use super::*;

    #[test]
    fn priv_days_in_month() {
        use YearType::*;
        assert_eq!(28, days_in_month(2, Common));
        assert_eq!(29, days_in_month(2, Leap));
        assert_eq!(30, days_in_month(9, Common));
        assert_eq!(31, days_in_month(12, Leap));
    }
}
