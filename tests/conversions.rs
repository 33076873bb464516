use nongli::Date;
use nongli::chinese::{LunarDate, Month, epoch, table};

fn all_dates() -> impl Iterator<Item = Date> {
    let last = Date::from_gregorian(2049, 12, 31).unwrap();
    (0..=last - epoch()).map(|n| epoch() + n)
}

#[test]
fn roundtrip_every_day() {
    for date in all_dates() {
        let lunar = LunarDate::from_date(date).unwrap();
        let offset: u32 = (table::FIRST_YEAR..lunar.year())
            .map(|y| table::year_days(y).unwrap())
            .sum::<u32>()
            + table::months(lunar.year())
                .unwrap()
                .take_while(|(m, _)| *m != lunar.month())
                .map(|(_, d)| d)
                .sum::<u32>()
            + lunar.day()
            - 1;
        assert_eq!(
            (date - epoch()) as u32,
            offset,
            "offset mismatch for {}",
            date.iso_gregorian()
        );
        assert_eq!(offset, lunar.days_since_epoch());

        let back = LunarDate::new(lunar.year(), lunar.month(), lunar.day()).unwrap();
        assert_eq!(date, back.solar(), "inverse mismatch for {}", date.iso_gregorian());
    }
}

#[test]
fn day_within_month_length() {
    for date in all_dates() {
        let lunar = LunarDate::from_date(date).unwrap();
        let month = lunar.month();
        assert!((1..=12).contains(&month.num()), "{}", date.iso_gregorian());
        let len = if month.is_leap() {
            assert_eq!(Ok(month.num()), table::leap_month(lunar.year()));
            table::leap_month_days(lunar.year()).unwrap()
        } else {
            table::month_days(lunar.year(), month.num()).unwrap()
        };
        assert!(
            (1..=len).contains(&lunar.day()),
            "day {} exceeds {len} on {}",
            lunar.day(),
            date.iso_gregorian()
        );
    }
}

#[test]
fn consecutive_days_advance() {
    let mut prev = LunarDate::from_date(epoch()).unwrap();
    for date in all_dates().skip(1) {
        let cur = LunarDate::from_date(date).unwrap();
        if cur.day() != 1 {
            assert_eq!(prev.day() + 1, cur.day(), "{}", date.iso_gregorian());
            assert_eq!(prev.month(), cur.month(), "{}", date.iso_gregorian());
        } else {
            assert!((29..=30).contains(&prev.day()), "{}", date.iso_gregorian());
            match (prev.month(), cur.month()) {
                (Month::Common(12), Month::Common(1)) => assert_eq!(prev.year() + 1, cur.year()),
                (Month::Common(a), Month::Leap(b)) => assert_eq!(a, b),
                (Month::Common(a) | Month::Leap(a), Month::Common(b)) => assert_eq!(a + 1, b),
                (a, b) => panic!("{a:?} followed by {b:?} on {}", date.iso_gregorian()),
            }
        }
        prev = cur;
    }
}

#[test]
fn new_years() {
    for (year, (m, d)) in [
        (1949, (1, 29)),
        (1976, (1, 31)),
        (1985, (2, 20)),
        (2000, (2, 5)),
        (2008, (2, 7)),
        (2021, (2, 12)),
        (2025, (1, 29)),
        (2049, (2, 2)),
    ] {
        let lunar = LunarDate::from_ymd(year, m, d).unwrap();
        assert_eq!(
            (year, Month::Common(1), 1),
            (lunar.year(), lunar.month(), lunar.day()),
            "{year:04}-{m:02}-{d:02}"
        );
        let eve = LunarDate::from_date(lunar.solar() + -1).unwrap();
        assert_eq!(year - 1, eve.year());
        assert_eq!(Month::Common(12), eve.month());
    }
}

#[test]
fn leap_months() {
    for ((y, m, d), month) in [
        ((2017, 7, 23), 6),
        ((2020, 5, 23), 4),
        ((2023, 3, 22), 2),
        ((2025, 7, 25), 6),
    ] {
        let lunar = LunarDate::from_ymd(y, m, d).unwrap();
        assert_eq!((Month::Leap(month), 1), (lunar.month(), lunar.day()));
        assert!(lunar.is_leap());
        assert_eq!(Ok(month), table::leap_month(y));
    }
}

#[test]
fn labels() {
    for ((y, m, d), std) in [
        ((1900, 1, 31), "庚子鼠年 一九〇〇年正月初一 星期三"),
        ((2020, 1, 24), "庚子鼠年 二〇一九年腊月三十 星期五"),
        ((2024, 2, 10), "甲辰龙年 二〇二四年正月初一 星期六"),
        ((2000, 1, 1), "庚辰龙年 一九九九年冬月廿五 星期六"),
    ] {
        assert_eq!(std, LunarDate::from_ymd(y, m, d).unwrap().to_string());
    }
}
