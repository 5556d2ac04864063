//! Form-input logic for composite date selects and masked SSN fields.
//!
//! A [`DateInput`] keeps a month, a day and a year select in sync with a
//! single `YYYY-MM-DD` string owned by a form library. [`SsnInput`] masks a
//! social security number while it is not being edited. The [`field`]
//! module binds either input to anything implementing [`FormField`].

mod consts;
pub mod field;
mod input;
mod prelude;
mod range;
pub mod ssn;
mod types;
mod value;

pub use consts::*;
pub use field::{DateField, FieldState, FormField, SsnField};
pub use input::{ChangeListener, DateInput, DateInputOptions, SelectView};
pub use range::{ConfigError, SelectOption, ValidationRange, day_options, month_options, year_options};
pub use ssn::SsnInput;
pub use types::{Part, days_in_month, is_leap_year};
pub use value::{DateValue, PartState};

use crate::prelude::*;
use std::str::FromStr;

/// A complete date that exists on the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Unknown date part: {_0}")]
    UnknownPart(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date, checking each part against the calendar
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `InvalidMonth` or `InvalidDay` for
    /// the first part that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        if year == UNSET || year > MAX_YEAR {
            return Err(ParseError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(month));
        }
        if !(MIN_DAY..=days_in_month(year, month)).contains(&day) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Helper to parse one numeric segment with a useful error
    fn parse_segment<T: FromStr>(s: &str) -> Result<T, ParseError> {
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Strict counterpart of [`DateValue::initialize`]: requires exactly
    /// `YYYY-MM-DD` with every part present and on the calendar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} segment(s)",
                parts.len()
            )));
        };

        Self::new(
            Self::parse_segment(year)?,
            Self::parse_segment(month)?,
            Self::parse_segment(day)?,
        )
    }
}

impl TryFrom<DateValue> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: DateValue) -> Result<Self, Self::Error> {
        Self::new(value.year(), value.month(), value.day())
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
