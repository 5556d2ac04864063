use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_DAYS_IN_MONTH, MAX_MONTH, PLACEHOLDER_YEAR, UNSET,
};
use crate::ParseError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the three independently selectable components of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "year")]
    Year,
}

impl Part {
    /// Parts in the order the selects are laid out
    pub const ALL: [Self; 3] = [Self::Month, Self::Day, Self::Year];

    /// Text shown by the disabled "nothing chosen" option
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Month => "mm",
            Self::Day => "dd",
            Self::Year => "yyyy",
        }
    }

    /// Capitalized name, used in accessible labels
    pub const fn title(self) -> &'static str {
        match self {
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Year => "Year",
        }
    }
}

impl FromStr for Part {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(Self::Month),
            "day" => Ok(Self::Day),
            "year" => Ok(Self::Year),
            other => Err(ParseError::UnknownPart(other.to_owned())),
        }
    }
}

// Calendar helpers

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// An unset year counts as a leap year, so February offers 29 days until a
/// concrete non-leap year is picked. An unset or out-of-range month yields
/// the longest month.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    if month == 0 || month > MAX_MONTH {
        return MAX_DAYS_IN_MONTH;
    }

    let year = if year == UNSET { PLACEHOLDER_YEAR } else { year };
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_display() {
        assert_eq!(Part::Month.to_string(), "month");
        assert_eq!(Part::Day.to_string(), "day");
        assert_eq!(Part::Year.to_string(), "year");
    }

    #[test]
    fn test_part_from_str() {
        assert_eq!("month".parse::<Part>().unwrap(), Part::Month);
        assert_eq!(" Day ".parse::<Part>().unwrap(), Part::Day);
        assert_eq!("YEAR".parse::<Part>().unwrap(), Part::Year);

        let result = "week".parse::<Part>();
        assert!(matches!(result, Err(ParseError::UnknownPart(ref p)) if p == "week"));
    }

    #[test]
    fn test_part_serde() {
        let json = serde_json::to_string(&Part::Month).unwrap();
        assert_eq!(json, "\"month\"");

        let parsed: Part = serde_json::from_str("\"year\"").unwrap();
        assert_eq!(parsed, Part::Year);
    }

    #[test]
    fn test_part_placeholders() {
        let placeholders: Vec<_> = Part::ALL.iter().map(|p| p.placeholder()).collect();
        assert_eq!(placeholders, ["mm", "dd", "yyyy"]);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
    }

    #[test]
    fn test_days_in_month_fixed_table() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
    }

    #[test]
    fn test_days_in_month_unset_year_is_leap() {
        assert_eq!(days_in_month(0, 2), 29);
        assert_eq!(days_in_month(0, 4), 30);
    }

    #[test]
    fn test_days_in_month_unset_month_is_longest() {
        assert_eq!(days_in_month(2023, 0), 31);
        assert_eq!(days_in_month(0, 0), 31);
        assert_eq!(days_in_month(2023, 13), 31);
    }
}
