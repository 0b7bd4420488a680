//! Reads dates from strings whose layout is not known up front.
//!
//! ```
//! let date = guess_date::parse("oct. 7, '70")?;
//! assert_eq!(date.ymd(), (1970, 10, 7));
//!
//! let date: guess_date::Date = "29-Jun-2016".parse()?;
//! assert_eq!(date.to_string(), "2016-06-29");
//! # Ok::<(), guess_date::ParseError>(())
//! ```
//!
//! Numeric layouts without a leading four-digit year are read month first,
//! so `3/1/2014` is the first of March. Two-digit years always land in the
//! 1900s.

mod assemble;
mod buffer;
mod consts;
mod error;
pub mod lexicon;
mod parser;
mod prelude;
mod scanner;
mod span;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::{CENTURY_BASE, MAX_MONTH, MAX_YEAR};
pub use error::{CalendarError, ParseError};
pub use parser::DateParser;
pub use span::Unit;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A calendar date read from text, implicitly at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct Date {
    year: Year,
    month: Month,
    day: Day,
}

/// Guesses the layout of `input` and reads the date from it.
///
/// # Errors
/// See [`DateParser::parse`].
pub fn parse(input: &str) -> Result<Date, ParseError> {
    DateParser::new(input).parse()
}

/// Like [`parse`], yielding `None` instead of an error.
pub fn try_parse(input: &str) -> Option<Date> {
    DateParser::new(input).try_parse()
}

impl Date {
    /// Checks the day against the given year and month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if `day` does not exist in that month.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, CalendarError> {
        let day = Day::new(day.get(), year.get(), month.get())?;
        Ok(Self { year, month, day })
    }

    /// Validates plain numbers into a date.
    ///
    /// # Errors
    /// Returns a `CalendarError` naming the first component out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// Year as a plain number.
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Month number, January is 1.
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Day of the month.
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// The validated [`Year`].
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// The validated [`Month`].
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// The validated [`Day`].
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// `(year, month, day)` as plain numbers.
    pub const fn ymd(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<(u16, u8, u8)> for Date {
    type Error = CalendarError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(year, month, day)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl Date {
    /// The start of this day.
    pub fn and_midnight(self) -> chrono::NaiveDateTime {
        chrono::NaiveDate::from(self).and_time(chrono::NaiveTime::MIN)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(date: Date) -> Self {
        // Every Date is a real Gregorian day well inside chrono's range.
        Self::from_ymd_opt(
            i32::from(date.year()),
            u32::from(date.month()),
            u32::from(date.day()),
        )
        .unwrap_or(Self::MIN)
    }
}
