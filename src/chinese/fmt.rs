//! 格式化日期相關功能

use super::Month;

/// 漢數字，第 `0..=9` 項分別為「〇」到「九」。
pub const NUM_CHINESE: &[&str] = &["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 年份逐位轉為漢數字，取千、百、十、個四位，零位寫作「〇」。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("一九〇〇", chinese::fmt::year(1900));
/// assert_eq!("二〇二四", chinese::fmt::year(2024));
/// ```
pub fn year(year: u32) -> String {
    [1000, 100, 10, 1]
        .iter()
        .map(|place| NUM_CHINESE[(year / place % 10) as usize])
        .collect()
}

/// 取得月序號的文本（不含「月」字，亦不標閏）。一月稱「正」，十一、十二月稱「冬」「腊」。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{self, Month::*};
///
/// assert_eq!("正", chinese::fmt::month(Common(1)));
/// assert_eq!("腊", chinese::fmt::month(Leap(12)));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: Month) -> &'static str {
    let num = m.num();
    match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "腊",
        _ => panic!("month {} not in 1..=12", num),
    }
}

/// 取得月名（含「月」字），閏月前加「闰」。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month_name(Common(11)));
/// assert_eq!("闰六月", chinese::fmt::month_name(Leap(6)));
/// ```
///
/// # Panics
///
/// 同 [`month`]。
pub fn month_name(m: Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "闰";
    }
    rt += month(m);
    rt += "月";
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// 不在 `1..=30` 間的數不會 panic，未定義的部分留空。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
pub fn day(d: u32) -> String {
    match d {
        10 => return "初十".to_owned(),
        20 => return "二十".to_owned(),
        30 => return "三十".to_owned(),
        _ => {}
    }
    let tens = match d / 10 {
        0 => "初",
        1 => "十",
        2 => "廿",
        3 => "三",
        _ => "",
    };
    let units = match d % 10 {
        0 => "",
        n => NUM_CHINESE[n as usize],
    };
    tens.to_owned() + units
}

/// ISO 星期序號（`1..=7` 為星期一至星期日）轉為文本，其餘序號返回空字串。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("星期三", chinese::fmt::weekday(3));
/// assert_eq!("星期日", chinese::fmt::weekday(7));
/// assert_eq!("", chinese::fmt::weekday(0));
/// ```
pub fn weekday(iso: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日",
    ];
    match iso {
        1..=7 => NAMES[iso as usize - 1],
        _ => "",
    }
}

/// 組合完整日期文本，如「庚子鼠年 一九〇〇年正月初一 星期三」。
///
/// 各部分均為已格式化的文本，本函數只負責拼接。
pub fn label(
    sexagenary: &str,
    animal: &str,
    year: &str,
    month: &str,
    day: &str,
    weekday: &str,
) -> String {
    format!("{sexagenary}{animal}年 {year}年{month}月{day} {weekday}")
}
