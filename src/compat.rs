//! Conversions from `chrono` dates.

use chrono::{Datelike, Local, NaiveDate};

use crate::Error;
use crate::chinese::LunarDate;
use crate::date::Date;

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    /// Fails for dates before JDN 0 (4714-11-24 BC, proleptic Gregorian).
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        // JDN of 0001-01-01 (proleptic Gregorian) is 1721426
        u32::try_from(i64::from(date.num_days_from_ce()) + 1721425)
            .map(Date::from_jdn)
            .map_err(|_| Error::InvalidDate {
                year: date.year(),
                month: date.month() as i32,
                day: date.day() as i32,
            })
    }
}

impl TryFrom<NaiveDate> for LunarDate {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        LunarDate::from_ymd(date.year(), date.month() as i32, date.day() as i32)
    }
}

impl LunarDate {
    /// 以本地時鐘的今日取得農曆日期。
    pub fn today() -> Result<Self, Error> {
        Self::try_from(Local::now().date_naive())
    }
}
