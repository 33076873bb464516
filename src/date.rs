//! Calendar-independent date.
//!
//! [`Date`] is the only date container the lunar conversion needs: a day
//! count to measure offsets with, plus the Gregorian fields and weekday of
//! the source date.

use std::ops::{Add, Sub};

/// A calendar-independent date, stored as a Julian day number (JDN).
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a proleptic Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if `month` or `day` is out of range for that year
    /// (e.g. February 30), or if the date is before the supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// // lunar new year of 1900
    /// let date = Date::from_gregorian(1900, 1, 31).unwrap();
    /// assert_eq!(2415051, date.jdn());
    /// assert!(Date::from_gregorian(2021, 2, 29).is_none());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if !(1..=YearType::from_gregorian(year).days_in_month(month)).contains(&day) {
            return None;
        }
        let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = i64::from(self.jdn);
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2019, 12, 31).unwrap();
    /// assert_eq!("2019-12-31", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(1900, 1, 31).unwrap();
    /// assert_eq!(3, date.day_of_week()); // Wednesday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn % 7 + 1
    }
    /// Returns the Chinese sexagenary day number of the date, numbered from 1
    /// (甲子) to 60 (癸亥).
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(55, date.sexagenary()); // 戊午
    /// ```
    pub fn sexagenary(&self) -> u32 {
        (self.jdn + 49) % 60 + 1
    }
}

/// Shifts a date by a signed number of days.
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::epoch;
///
/// // lunar 1900 is 384 days long, so lunar 1901 begins 384 days after the epoch
/// assert_eq!("1901-02-19", (epoch() + 384).iso_gregorian());
/// ```
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn.wrapping_add_signed(rhs))
    }
}
/// Number of days from `rhs` to `self`, i.e. the lunar day offset when `rhs`
/// is the epoch.
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::{epoch, LunarDate};
///
/// let date = Date::from_gregorian(2000, 1, 1).unwrap();
/// assert_eq!(36494, date - epoch());
/// assert_eq!(36494, LunarDate::from_date(date).unwrap().days_since_epoch());
/// ```
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
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
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
    /// Number of days in Gregorian `month` (`1..=12`); `0` for any other month.
    pub fn days_in_month(&self, month: i32) -> i32 {
        match month {
            2 => 28 + self.is_leap() as i32,
            4 | 6 | 9 | 11 => 30,
            1..=12 => 31,
            _ => 0,
        }
    }
}
