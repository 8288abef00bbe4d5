//! Utilities for converting between dates in the Hijri calendar and Julian
//! day numbers.
//!
//! Two Hijri calendars are supported: the tabular Islamic calendar, an
//! arithmetic 30-year cycle valid for any year, and the Um Al-Qura civil
//! calendar of Saudi Arabia, tabulated for the years 1318 through 1500 AH
//! (1900 through 2077 CE) and optionally corrected by caller-supplied
//! adjustments.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use taqwim::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Hijri calendar:
//!
//! ```
//! use taqwim::hijri::{Adjustments, Calendar, HijriDate};
//!
//! let calendar = Calendar::new(true, Adjustments::new());
//! let jdn = calendar.hijri_to_day(1445, 9, 1).unwrap();
//!
//! assert_eq!("2024-03-11", taqwim::Date::from_jdn(jdn).iso_gregorian());
//! assert_eq!(Ok(HijriDate::new(1445, 9, 1)), calendar.day_to_hijri(jdn));
//! ```
//!
//! Corrections to the Um Al-Qura table, e.g. read from settings:
//!
//! ```
//! use taqwim::hijri::{Adjustments, Calendar};
//!
//! let adjustments = Adjustments::from_json(r#"{"1532": 60382}"#);
//! let calendar = Calendar::new(true, adjustments);
//!
//! assert_eq!(Ok((2024, 3, 12)), calendar.hijri_to_gregorian(1445, 9, 1));
//! ```

pub mod date;
pub mod error;
pub mod hijri;

pub use date::{Date, YearType};
pub use error::CalendarError;
pub use hijri::{Calendar, HijriDate};
