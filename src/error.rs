//! Error types.

/// Error type for all fallible conversions in this crate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The year lies outside the calendar table (`1900..=2049`).
    #[error("year {year} out of supported range 1900..=2049")]
    YearOutOfRange { year: i32 },

    /// The lunar month number is outside `1..=12`.
    #[error("lunar month {month} not in 1..=12")]
    MonthOutOfRange { month: u32 },

    /// The fields do not form a valid Gregorian date.
    #[error("invalid Gregorian date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    /// The date falls before 1900-01-31, i.e. in lunar year 1899.
    #[error("{year:04}-{month:02}-{day:02} precedes the lunar new year of 1900 (1900-01-31)")]
    BeforeEpoch { year: i32, month: i32, day: i32 },

    /// The lunar month or day does not exist in that lunar year.
    #[error("no such lunar date: year {year}, {}month {month}, day {day}", leap_prefix(.leap))]
    InvalidLunarDate {
        year: i32,
        month: u32,
        leap: bool,
        day: u32,
    },
}

fn leap_prefix(leap: &bool) -> &'static str {
    if *leap { "leap " } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            "year 2050 out of supported range 1900..=2049",
            Error::YearOutOfRange { year: 2050 }.to_string()
        );
        assert_eq!(
            "lunar month 13 not in 1..=12",
            Error::MonthOutOfRange { month: 13 }.to_string()
        );
        assert_eq!(
            "invalid Gregorian date 2021-02-30",
            Error::InvalidDate {
                year: 2021,
                month: 2,
                day: 30
            }
            .to_string()
        );
        assert_eq!(
            "1900-01-30 precedes the lunar new year of 1900 (1900-01-31)",
            Error::BeforeEpoch {
                year: 1900,
                month: 1,
                day: 30
            }
            .to_string()
        );
        assert_eq!(
            "no such lunar date: year 2017, leap month 5, day 1",
            Error::InvalidLunarDate {
                year: 2017,
                month: 5,
                leap: true,
                day: 1
            }
            .to_string()
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<Error>();
    }
}
