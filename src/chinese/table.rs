//! 農曆月長表（1900 至 2049 年）
//!
//! 每年一項，共 150 項，以公元年減 1900 為索引。每項 20 位元編碼如下：
//!
//! - 第 0–3 位：閏月序號，`0` 為該年無閏月
//! - 第 4–15 位：正月至十二月各一位（正月為第 15 位），`1` 為大月（30 日），`0` 為小月（29 日）
//! - 第 16 位：閏月長度，`1` 為 30 日，`0` 為 29 日
//!
//! 表中年份為農曆年，即自該年正月初一至次年正月初一前一日。1900 年正月初一為公曆 1900-01-31。

use crate::Error;
use crate::chinese::Month;

/// 表中首年
pub const FIRST_YEAR: i32 = 1900;
/// 表中末年
pub const LAST_YEAR: i32 = 2049;

#[rustfmt::skip]
static RECORDS: [u32; 150] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5d0, 0x14573, 0x052d0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04bd7, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
];

/// 一年的月長資料。
///
/// 只能經由 [`YearRecord::get`] 取得，故所含年份必在表內。
///
/// # 用例
///
/// ```
/// use nongli::chinese::table::YearRecord;
///
/// let rec = YearRecord::get(2017).unwrap();
/// assert_eq!(Some(6), rec.leap_month());
/// assert_eq!(30, rec.leap_month_days());
/// assert_eq!(384, rec.days());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct YearRecord {
    year: i32,
    bits: u32,
}

impl YearRecord {
    /// 取得農曆 `year` 年的資料。
    ///
    /// 若 `year` 不在 `1900..=2049` 間則返回 [`Error::YearOutOfRange`]。
    pub fn get(year: i32) -> Result<Self, Error> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Error::YearOutOfRange { year });
        }
        Ok(Self {
            year,
            bits: RECORDS[(year - FIRST_YEAR) as usize],
        })
    }
    /// 該資料所屬農曆年
    pub fn year(&self) -> i32 {
        self.year
    }
    /// 閏月序號，無閏月則為 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        match self.bits & 0xf {
            0 => None,
            m => Some(m),
        }
    }
    /// 閏月日數，無閏月則為 `0`。
    pub fn leap_month_days(&self) -> u32 {
        match self.leap_month() {
            None => 0,
            Some(_) if self.bits & 0x10000 != 0 => 30,
            Some(_) => 29,
        }
    }
    /// 平月 `month` 的日數，大月 30 日，小月 29 日。
    ///
    /// # Panics
    ///
    /// 若 `month` 不在 `1..=12` 間則 panic。
    pub fn month_days(&self, month: u32) -> u32 {
        assert!((1..=12).contains(&month), "month {} not in 1..=12", month);
        29 + (self.bits >> (16 - month) & 1)
    }
    /// 全年日數，含閏月。
    pub fn days(&self) -> u32 {
        12 * 29 + (self.bits >> 4 & 0xfff).count_ones() + self.leap_month_days()
    }
    /// 依序列出全年各月，見 [`Months`]。
    pub fn months(&self) -> Months {
        Months {
            record: *self,
            walk: Walk::Normal(1),
        }
    }
}

/// 農曆 `year` 年全年日數。
pub fn year_days(year: i32) -> Result<u32, Error> {
    YearRecord::get(year).map(|rec| rec.days())
}

/// 農曆 `year` 年閏月序號，`0` 表示無閏月。
pub fn leap_month(year: i32) -> Result<u32, Error> {
    YearRecord::get(year).map(|rec| rec.leap_month().unwrap_or(0))
}

/// 農曆 `year` 年閏月日數，無閏月則為 `0`。
pub fn leap_month_days(year: i32) -> Result<u32, Error> {
    YearRecord::get(year).map(|rec| rec.leap_month_days())
}

/// 農曆 `year` 年平月 `month` 的日數。
///
/// 年份不在表內返回 [`Error::YearOutOfRange`]，`month` 不在 `1..=12` 間返回 [`Error::MonthOutOfRange`]。
pub fn month_days(year: i32, month: u32) -> Result<u32, Error> {
    let rec = YearRecord::get(year)?;
    if !(1..=12).contains(&month) {
        return Err(Error::MonthOutOfRange { month });
    }
    Ok(rec.month_days(month))
}

/// 依序列出農曆 `year` 年各月及其日數，閏月緊隨其所閏之月。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{table, Month::*};
///
/// let months: Vec<_> = table::months(2017).unwrap().map(|(m, _)| m).collect();
/// assert_eq!(13, months.len());
/// assert_eq!(&[Common(6), Leap(6), Common(7)], &months[5..8]);
/// ```
pub fn months(year: i32) -> Result<Months, Error> {
    YearRecord::get(year).map(|rec| rec.months())
}

/// 逐月遍歷一年的迭代器，產出 `(月名, 日數)`。
///
/// 以兩態狀態機驅動：平常狀態下產出平月；若剛產出的平月正是閏月序號，則轉入閏月狀態產出閏月，之後回到平常狀態繼續下一月。
#[derive(Debug, Clone)]
pub struct Months {
    record: YearRecord,
    walk: Walk,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Walk {
    Normal(u32),
    InLeapMonth(u32),
    Done,
}

impl Walk {
    fn after(month: u32) -> Self {
        if month < 12 {
            Walk::Normal(month + 1)
        } else {
            Walk::Done
        }
    }
}

impl Iterator for Months {
    type Item = (Month, u32);

    fn next(&mut self) -> Option<Self::Item> {
        match self.walk {
            Walk::Normal(m) => {
                self.walk = if self.record.leap_month() == Some(m) {
                    Walk::InLeapMonth(m)
                } else {
                    Walk::after(m)
                };
                Some((Month::Common(m), self.record.month_days(m)))
            }
            Walk::InLeapMonth(m) => {
                self.walk = Walk::after(m);
                Some((Month::Leap(m), self.record.leap_month_days()))
            }
            Walk::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    #[test]
    fn range() {
        assert_eq!(150, RECORDS.len());
        assert!(YearRecord::get(1900).is_ok());
        assert!(YearRecord::get(2049).is_ok());
        for year in [1899, 2050, 0, -1, i32::MAX, i32::MIN] {
            assert_eq!(Err(Error::YearOutOfRange { year }), year_days(year));
        }
    }

    #[test]
    fn decode_1900() {
        // 0x04bd8: 閏八月，小
        assert_eq!(Ok(8), leap_month(1900));
        assert_eq!(Ok(29), leap_month_days(1900));
        assert_eq!(Ok(29), month_days(1900, 1));
        assert_eq!(Ok(30), month_days(1900, 2));
        assert_eq!(Ok(384), year_days(1900));
    }

    #[test]
    fn decode_2017() {
        let std = [29, 30, 29, 30, 29, 29, 29, 30, 29, 30, 30, 30];
        for (m, days) in (1..=12).zip(std) {
            assert_eq!(Ok(days), month_days(2017, m), "month {m}");
        }
        assert_eq!(Ok(6), leap_month(2017));
        assert_eq!(Ok(30), leap_month_days(2017));
    }

    #[test]
    fn no_leap_month() {
        let rec = YearRecord::get(2019).unwrap();
        assert_eq!(None, rec.leap_month());
        assert_eq!(0, rec.leap_month_days());
        assert_eq!(Ok(0), leap_month(2019));
        assert_eq!(12, rec.months().count());
    }

    #[test]
    fn days_match_month_sum() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let rec = YearRecord::get(year).unwrap();
            let sum: u32 = (1..=12).map(|m| rec.month_days(m)).sum::<u32>()
                + rec.leap_month().map_or(0, |_| rec.leap_month_days());
            assert_eq!(sum, rec.days(), "{year}");
            assert_eq!(sum, rec.months().map(|(_, d)| d).sum::<u32>(), "{year}");
            assert!(rec.leap_month().is_none_or(|m| m <= 12), "{year}");
            assert!((353..=385).contains(&rec.days()), "{year}");
        }
    }

    #[test]
    fn walk_with_leap_month() {
        let months: Vec<_> = months(2017).unwrap().collect();
        assert_eq!(
            vec![
                (Common(1), 29),
                (Common(2), 30),
                (Common(3), 29),
                (Common(4), 30),
                (Common(5), 29),
                (Common(6), 29),
                (Leap(6), 30),
                (Common(7), 29),
                (Common(8), 30),
                (Common(9), 29),
                (Common(10), 30),
                (Common(11), 30),
                (Common(12), 30),
            ],
            months
        );
    }

    #[test]
    fn walk_states() {
        let rec = YearRecord {
            year: 0,
            bits: 0x0000c,
        };
        let mut months = rec.months();
        assert_eq!(Walk::Normal(1), months.walk);
        assert_eq!(Some((Common(12), 29)), months.nth(11));
        assert_eq!(Walk::InLeapMonth(12), months.walk);
        assert_eq!(Some((Leap(12), 29)), months.next());
        assert_eq!(Walk::Done, months.walk);
        assert_eq!(None, months.next());
    }

    #[test]
    fn month_out_of_range() {
        for month in [0, 13, u32::MAX] {
            assert_eq!(Err(Error::MonthOutOfRange { month }), month_days(2000, month));
        }
        assert_eq!(
            Err(Error::YearOutOfRange { year: 2050 }),
            month_days(2050, 13)
        );
    }

    #[test]
    #[should_panic]
    fn record_month_out_of_range() {
        YearRecord::get(2000).unwrap().month_days(13);
    }
}
