//! 干支與生肖
//!
//! 十天干、十二地支各以其序號對同一數取模，兩者合為以六十為周期的干支，無須另列六十甲子表。

/// 十天干，自甲至癸。
pub const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
/// 十二地支，自子至亥。
pub const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
/// 十二生肖，與地支一一對應。
pub const ANIMALS: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// 干支序號轉為文本，`0` 為甲子，`59` 為癸亥，任何整數皆可，以 60 為周期。
///
/// # 用例
///
/// ```
/// use nongli::chinese::cycle;
///
/// assert_eq!("甲子", cycle::stem_branch(0));
/// assert_eq!("癸亥", cycle::stem_branch(-1));
/// assert_eq!("戊寅", cycle::stem_branch(14));
/// ```
pub fn stem_branch(num: i64) -> String {
    STEMS[num.rem_euclid(10) as usize].to_owned() + BRANCHES[num.rem_euclid(12) as usize]
}

/// 取得公元 `year` 年的干支（歲次）。
///
/// 以公元年計，不論該日是否已過農曆新年。
///
/// # 用例
///
/// ```
/// use nongli::chinese::cycle;
///
/// assert_eq!("庚子", cycle::year_stem_branch(1900));
/// assert_eq!("甲辰", cycle::year_stem_branch(2024));
/// ```
pub fn year_stem_branch(year: i32) -> String {
    stem_branch(i64::from(year) - 1900 + 36)
}

/// 取得公元 `year` 年的生肖。
///
/// 與 [`year_stem_branch`] 相同，以公元年計。
///
/// # 用例
///
/// ```
/// use nongli::chinese::cycle;
///
/// assert_eq!("鼠", cycle::zodiac(1900));
/// assert_eq!("龙", cycle::zodiac(2024));
/// ```
pub fn zodiac(year: i32) -> &'static str {
    ANIMALS[(i64::from(year) - 4).rem_euclid(12) as usize]
}
