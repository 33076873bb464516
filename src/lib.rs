//! Utilities for converting Gregorian dates into the Chinese lunar calendar.
//!
//! Conversion is driven by a packed table of lunar month lengths covering
//! Gregorian years 1900 through 2049, see [`chinese::table`]. Results are
//! available both as values and as Chinese text.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use nongli::Date;
//!
//! let date = Date::from_gregorian(1900, 1, 31).unwrap();
//!
//! assert_eq!(3, date.day_of_week()); // Wednesday
//! assert_eq!(2415051, date.jdn());
//! ```
//!
//! Chinese lunar calendar:
//!
//! ```
//! use nongli::chinese::{LunarDate, Month::*};
//!
//! let date = LunarDate::from_ymd(1900, 1, 31).unwrap();
//!
//! assert_eq!((1900, Common(1), 1), (date.year(), date.month(), date.day()));
//! assert_eq!("庚子鼠年 一九〇〇年正月初一 星期三", date.to_string());
//! ```
//!
//! Years outside the table are rejected:
//!
//! ```
//! use nongli::{Error, chinese::LunarDate};
//!
//! assert_eq!(
//!     Err(Error::YearOutOfRange { year: 2050 }),
//!     LunarDate::from_ymd(2050, 1, 1)
//! );
//! ```
//!
//! # Features
//!
//! - `chrono`: convert from [`chrono::NaiveDate`] and read today's date from
//!   the local clock.
//! - `serde`: `Serialize`/`Deserialize` for [`Date`], [`chinese::Month`] and
//!   [`chinese::LunarDate`].
//!
//! [`chrono::NaiveDate`]: https://docs.rs/chrono/latest/chrono/struct.NaiveDate.html

pub mod chinese;
pub mod date;
mod error;

#[cfg(feature = "chrono")]
mod compat;

pub use date::{Date, YearType};
pub use error::Error;
