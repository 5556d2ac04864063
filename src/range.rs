use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_MAX_DAY, DEFAULT_MAX_MONTH, DEFAULT_MAX_YEAR, DEFAULT_MIN_DAY, DEFAULT_MIN_MONTH,
    DEFAULT_MIN_YEAR, Part, prelude::*, types::days_in_month,
};

/// Bounds for the three date selects (all 1-indexed, inclusive).
///
/// Fixed for the lifetime of an input. Inverted bounds are accepted and
/// produce an empty option list for that part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationRange {
    pub min_month: u8,
    pub max_month: u8,
    pub min_day: u8,
    pub max_day: u8,
    pub min_year: u16,
    pub max_year: u16,
}

/// Error type for loading a range from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration text is not a valid range.
    #[error("Invalid range configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// One entry of a select: the stored value and its rendered label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{label}")]
pub struct SelectOption {
    pub value: u16,
    pub label: String,
}

impl Default for ValidationRange {
    fn default() -> Self {
        Self {
            min_month: DEFAULT_MIN_MONTH,
            max_month: DEFAULT_MAX_MONTH,
            min_day: DEFAULT_MIN_DAY,
            max_day: DEFAULT_MAX_DAY,
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

impl ValidationRange {
    /// Loads a range from JSON, e.g. `{"minYear": 1900, "maxYear": 2024}`.
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` if the text is not a JSON object with
    /// integer fields.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let range = serde_json::from_str(text)?;
        log::debug!("Loaded validation range {range:?}");
        Ok(range)
    }

    /// Selectable months
    pub fn months(&self) -> Vec<u8> {
        month_options(self.min_month, self.max_month)
    }

    /// Selectable days for the given (possibly unset) year and month
    pub fn days(&self, year: u16, month: u8) -> Vec<u8> {
        day_options(self.min_day, self.max_day, year, month)
    }

    /// Selectable years
    pub fn years(&self) -> Vec<u16> {
        year_options(self.min_year, self.max_year)
    }

    /// Options for one select, labelled the way they are rendered:
    /// months and days zero-padded to two digits, years as is.
    pub fn options(&self, part: Part, year: u16, month: u8) -> Vec<SelectOption> {
        match part {
            Part::Month => padded(self.months()),
            Part::Day => padded(self.days(year, month)),
            Part::Year => self
                .years()
                .into_iter()
                .map(|value| SelectOption {
                    value,
                    label: value.to_string(),
                })
                .collect(),
        }
    }

    /// Checks if `value` is offered by the select for `part`
    pub fn allows(&self, part: Part, value: u16, year: u16, month: u8) -> bool {
        match part {
            Part::Month => in_bounds(value, self.min_month.into(), self.max_month.into()),
            Part::Day => {
                let upper = self.max_day.min(days_in_month(year, month));
                in_bounds(value, self.min_day.into(), upper.into())
            }
            Part::Year => in_bounds(value, self.min_year, self.max_year),
        }
    }
}

fn in_bounds(value: u16, min: u16, max: u16) -> bool {
    (min..=max).contains(&value)
}

fn padded(values: Vec<u8>) -> Vec<SelectOption> {
    values
        .into_iter()
        .map(|value| SelectOption {
            value: value.into(),
            label: format!("{value:02}"),
        })
        .collect()
}

/// Months `min..=max`
pub fn month_options(min: u8, max: u8) -> Vec<u8> {
    (min..=max).collect()
}

/// Days `min_day..=min(max_day, days_in_month(year, month))`
pub fn day_options(min_day: u8, max_day: u8, year: u16, month: u8) -> Vec<u8> {
    let upper = max_day.min(days_in_month(year, month));
    (min_day..=upper).collect()
}

/// Years `min..=max`
pub fn year_options(min: u16, max: u16) -> Vec<u16> {
    (min..=max).collect()
}
