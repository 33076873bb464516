//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序採用預製的月長表推算農曆，支持公曆 1900 至 2049 年，見 [`table`]。
//!
//! 推算方法：先求所給日期距 1900 年正月初一（公曆 1900-01-31）的日數，逐年減去各年日數以定年，再逐月減去各月日數以定月，餘數即為該月第幾日。

use tracing::{debug, trace};

use crate::Error;
use crate::date::Date;

pub mod cycle;
pub mod fmt;
pub mod table;

/// 1900 年正月初一之儒略日數（公曆 1900-01-31）
const EPOCH_JDN: u32 = 2415051;
/// 1900 年正月的月干支序號（戊寅）
const EPOCH_MONTH_SEXAGENARY: i64 = 14;

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMonth")
)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，閏月前加「闰」，十一、十二月稱「冬月」「腊月」。
    pub fn name(&self) -> String {
        fmt::month_name(*self)
    }
}

/// 農曆日期，連同其所對應的公曆日期。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{LunarDate, Month::*};
///
/// let date = LunarDate::from_ymd(2017, 7, 23).unwrap();
///
/// assert_eq!(2017, date.year());
/// assert_eq!(Leap(6), date.month());
/// assert_eq!(1, date.day());
/// assert_eq!("丁酉鸡年 二〇一七年六月初一 星期日", date.to_string());
/// ```
///
/// 反序列化時以 [`LunarDate::new`] 重新驗證，且所附公曆日期須與推算結果一致。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawLunarDate")
)]
pub struct LunarDate {
    year: i32,
    month: Month,
    day: u32,
    solar: Date,
}

impl LunarDate {
    /// 依公曆年月日取得農曆日期。
    ///
    /// 年份不在 `1900..=2049` 間則返回 [`Error::YearOutOfRange`]；年月日不成日期則返回 [`Error::InvalidDate`]；1900 年 1 月 31 日以前（屬農曆 1899 年）則返回 [`Error::BeforeEpoch`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{LunarDate, Month::*};
    ///
    /// let date = LunarDate::from_ymd(2000, 1, 1).unwrap();
    /// assert_eq!((1999, Common(11), 25), (date.year(), date.month(), date.day()));
    /// ```
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        table::YearRecord::get(year).inspect_err(|e| debug!(%e, "rejected"))?;
        let date =
            Date::from_gregorian(year, month, day).ok_or(Error::InvalidDate { year, month, day })?;
        Self::from_date(date)
    }

    /// 依 [`Date`] 取得農曆日期，錯誤情形同 [`LunarDate::from_ymd`]。
    pub fn from_date(date: Date) -> Result<Self, Error> {
        let (year, month, day) = date.gregorian();
        table::YearRecord::get(year).inspect_err(|e| debug!(%e, "rejected"))?;
        let mut offset = u32::try_from(date - epoch()).map_err(|_| {
            debug!(date = %date.iso_gregorian(), "before 1900-01-31");
            Error::BeforeEpoch { year, month, day }
        })?;
        trace!(offset, date = %date.iso_gregorian(), "resolving lunar date");

        let mut record = table::YearRecord::get(table::FIRST_YEAR)?;
        while offset >= record.days() {
            offset -= record.days();
            record = table::YearRecord::get(record.year() + 1)?;
        }

        // offset < record.days(), so the walk never runs out of months
        for (month, days) in record.months() {
            if offset < days {
                trace!(year = record.year(), ?month, day = offset + 1, "resolved");
                return Ok(Self {
                    year: record.year(),
                    month,
                    day: offset + 1,
                    solar: date,
                });
            }
            offset -= days;
        }
        unreachable!("offset exceeds length of lunar year {}", record.year())
    }

    /// 由農曆年月日反推公曆日期。
    ///
    /// 若該年無此月（如所給閏月並非該年閏月），或該月無此日，則返回 [`Error::InvalidLunarDate`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{LunarDate, Month::*};
    ///
    /// let date = LunarDate::new(2024, Common(1), 1).unwrap();
    /// assert_eq!("2024-02-10", date.solar().iso_gregorian());
    ///
    /// assert!(LunarDate::new(2024, Leap(1), 1).is_err());
    /// ```
    pub fn new(year: i32, month: Month, day: u32) -> Result<Self, Error> {
        let offset = days_since_epoch(year, month, day)?;
        Ok(Self {
            year,
            month,
            day,
            solar: epoch() + offset as i32,
        })
    }

    /// 農曆年，以正月初一為歲首
    pub fn year(&self) -> i32 {
        self.year
    }
    /// 農曆月
    pub fn month(&self) -> Month {
        self.month
    }
    /// 農曆日，`1..=30`
    pub fn day(&self) -> u32 {
        self.day
    }
    /// 是否閏月
    pub fn is_leap(&self) -> bool {
        self.month.is_leap()
    }
    /// 對應的公曆日期
    pub fn solar(&self) -> Date {
        self.solar
    }
    /// 距 1900 年正月初一的日數
    pub fn days_since_epoch(&self) -> u32 {
        (self.solar - epoch()) as u32
    }

    /// 歲次干支，依公曆年計。
    pub fn sexagenary(&self) -> String {
        cycle::year_stem_branch(self.solar.gregorian().0)
    }
    /// 生肖，依公曆年計。
    pub fn zodiac(&self) -> &'static str {
        cycle::zodiac(self.solar.gregorian().0)
    }
    /// 歲次干支，依農曆年計，正月初一方換。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::LunarDate;
    ///
    /// let date = LunarDate::from_ymd(2024, 2, 9).unwrap(); // 除夕
    /// assert_eq!("甲辰", date.sexagenary());
    /// assert_eq!("癸卯", date.lunar_sexagenary());
    /// ```
    pub fn lunar_sexagenary(&self) -> String {
        cycle::year_stem_branch(self.year)
    }
    /// 月干支，閏月從其所閏之月。
    pub fn month_sexagenary(&self) -> String {
        cycle::stem_branch(
            EPOCH_MONTH_SEXAGENARY
                + 12 * i64::from(self.year - table::FIRST_YEAR)
                + i64::from(self.month.num() - 1),
        )
    }
    /// 日干支
    pub fn day_sexagenary(&self) -> String {
        cycle::stem_branch(i64::from(self.solar.sexagenary()) - 1)
    }

    /// 年份的漢數字，如「一九〇〇」
    pub fn year_cn(&self) -> String {
        // year is within the table, hence positive
        fmt::year(self.year as u32)
    }
    /// 月份的漢數字，如「正」，閏月不另標示
    pub fn month_cn(&self) -> &'static str {
        fmt::month(self.month)
    }
    /// 日名，如「初一」
    pub fn day_cn(&self) -> String {
        fmt::day(self.day)
    }
    /// 公曆日期的星期，如「星期三」
    pub fn weekday_cn(&self) -> &'static str {
        fmt::weekday(self.solar.day_of_week())
    }
    /// 農曆日期文本，如「一九〇〇年正月初一」
    pub fn date_cn(&self) -> String {
        format!("{}年{}月{}", self.year_cn(), self.month_cn(), self.day_cn())
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&fmt::label(
            &self.sexagenary(),
            self.zodiac(),
            &self.year_cn(),
            self.month_cn(),
            &self.day_cn(),
            self.weekday_cn(),
        ))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
enum RawMonth {
    Common(u32),
    Leap(u32),
}

#[cfg(feature = "serde")]
impl TryFrom<RawMonth> for Month {
    type Error = Error;

    fn try_from(raw: RawMonth) -> Result<Self, Self::Error> {
        let (month, num) = match raw {
            RawMonth::Common(n) => (Month::Common(n), n),
            RawMonth::Leap(n) => (Month::Leap(n), n),
        };
        if !(1..=12).contains(&num) {
            return Err(Error::MonthOutOfRange { month: num });
        }
        Ok(month)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLunarDate {
    year: i32,
    month: Month,
    day: u32,
    solar: Date,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLunarDate> for LunarDate {
    type Error = Error;

    fn try_from(raw: RawLunarDate) -> Result<Self, Self::Error> {
        let date = LunarDate::new(raw.year, raw.month, raw.day)?;
        if date.solar != raw.solar {
            return Err(Error::InvalidLunarDate {
                year: raw.year,
                month: raw.month.num(),
                leap: raw.month.is_leap(),
                day: raw.day,
            });
        }
        Ok(date)
    }
}

/// 1900 年正月初一（公曆 1900-01-31）
pub fn epoch() -> Date {
    Date::from_jdn(EPOCH_JDN)
}

/// 累計農曆日期距 1900 年正月初一的日數，即 [`LunarDate::from_ymd`] 的逆運算。
fn days_since_epoch(year: i32, month: Month, day: u32) -> Result<u32, Error> {
    let record = table::YearRecord::get(year)?;
    let invalid = Error::InvalidLunarDate {
        year,
        month: month.num(),
        leap: month.is_leap(),
        day,
    };
    let mut offset: u32 = (table::FIRST_YEAR..year)
        .map(table::year_days)
        .sum::<Result<u32, Error>>()?;
    for (m, days) in record.months() {
        if m == month {
            if !(1..=days).contains(&day) {
                return Err(invalid);
            }
            return Ok(offset + day - 1);
        }
        offset += days;
    }
    Err(invalid)
}
