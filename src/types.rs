//! Validated calendar components.
//!
//! `Year` and `Month` check their own range. A `Day` only exists relative to
//! a year and month, so it is checked against both and never rolls over into
//! the next month.

use std::num::{NonZeroU8, NonZeroU16};

use serde::{Deserialize, Serialize};

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR,
};
use crate::error::CalendarError;
use crate::prelude::*;

/// Year in `1..=MAX_YEAR`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", "_0")]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// `CalendarError::InvalidYear` for 0 and anything past `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, CalendarError> {
        NonZeroU16::new(value)
            .filter(|_| value <= MAX_YEAR)
            .map(Self)
            .ok_or(CalendarError::InvalidYear(value))
    }

    /// The year as a plain number.
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

/// Month number in `1..=12`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", "_0")]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// `CalendarError::InvalidMonth` for 0 and anything past December.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        NonZeroU8::new(value)
            .filter(|_| value <= MAX_MONTH)
            .map(Self)
            .ok_or(CalendarError::InvalidMonth(value))
    }

    /// The month number.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Days in this month of `year`.
    pub const fn len_in(self, year: u16) -> u8 {
        days_in_month(year, self)
    }
}

/// Day of a particular month. Serializes as a bare number but has no
/// free-standing constructor from one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{}", "_0")]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// `CalendarError::InvalidMonth` if `month` is out of range, then
    /// `CalendarError::InvalidDay` for day 0 or a day past the end of it.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, CalendarError> {
        let last = Month::new(month)?.len_in(year);
        NonZeroU8::new(value)
            .filter(|_| value <= last)
            .map(Self)
            .ok_or(CalendarError::InvalidDay {
                month,
                day: value,
                year,
            })
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

pub const fn is_leap_year(year: u16) -> bool {
    year % GREGORIAN_CYCLE == 0 || (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0)
}

pub const fn days_in_month(year: u16, month: Month) -> u8 {
    match month.get() {
        FEBRUARY if is_leap_year(year) => FEBRUARY_DAYS_LEAP,
        m => DAYS_IN_MONTH[m as usize],
    }
}
