use crate::{CalendarDate, DATE_SEPARATOR, ParseError, Part, UNSET, ValidationRange};

/// The three parts of a date as picked in the selects. `0` means unset.
///
/// Any combination is representable, including calendar-invalid ones such
/// as February 31st; see [`DateValue::validate`] for a strict view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateValue {
    year: u16,
    month: u8,
    day: u8,
}

/// Which parts of a [`DateValue`] are filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartState {
    /// Nothing chosen
    Unset,
    /// Some but not all parts chosen
    Partial { month: bool, day: bool, year: bool },
    /// All three parts chosen
    Complete { year: u16, month: u8, day: u8 },
}

impl DateValue {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Splits a `YYYY-MM-DD` string into its parts.
    ///
    /// Never fails: an empty string, missing segments and segments that are
    /// not integers all leave the corresponding part unset. No calendar
    /// check is made, so `"2023-02-29"` loads as given.
    pub fn initialize(seed: &str) -> Self {
        let mut segments = seed.split(DATE_SEPARATOR).map(str::trim);
        let year = segments.next().and_then(|s| s.parse().ok()).unwrap_or(UNSET);
        let month = segments.next().and_then(|s| s.parse().ok()).unwrap_or(0);
        let day = segments.next().and_then(|s| s.parse().ok()).unwrap_or(0);
        Self { year, month, day }
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

    /// Current value of one part, `0` when unset
    pub const fn get(&self, part: Part) -> u16 {
        match part {
            Part::Month => self.month as u16,
            Part::Day => self.day as u16,
            Part::Year => self.year,
        }
    }

    /// Overwrites exactly one part. Month and day values that do not fit a
    /// `u8` are stored as unset.
    pub fn set(&mut self, part: Part, value: u16) {
        match part {
            Part::Month => self.month = narrow(part, value),
            Part::Day => self.day = narrow(part, value),
            Part::Year => self.year = value,
        }
    }

    /// Resets all three parts at once
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub const fn is_set(&self, part: Part) -> bool {
        self.get(part) != UNSET
    }

    pub const fn state(&self) -> PartState {
        let (year, month, day) = (self.year != UNSET, self.month != 0, self.day != 0);
        match (year, month, day) {
            (false, false, false) => PartState::Unset,
            (true, true, true) => PartState::Complete {
                year: self.year,
                month: self.month,
                day: self.day,
            },
            _ => PartState::Partial { month, day, year },
        }
    }

    /// Composite string handed to the form: `""` until every part is set,
    /// then `YYYY-MM-DD`. Calendar validity is not checked.
    pub fn serialize(&self) -> String {
        match self.state() {
            PartState::Complete { year, month, day } => {
                format!("{year:04}{DATE_SEPARATOR}{month:02}{DATE_SEPARATOR}{day:02}")
            }
            PartState::Unset | PartState::Partial { .. } => String::new(),
        }
    }

    /// Strict view of the value.
    ///
    /// Returns `Ok(None)` while incomplete and `Ok(Some(date))` once every
    /// part is set and forms a real calendar date.
    ///
    /// # Errors
    /// Returns the `ParseError` describing the first out-of-calendar part of
    /// a complete value (e.g. day 29 in February 2023).
    pub fn validate(&self) -> Result<Option<CalendarDate>, ParseError> {
        match self.state() {
            PartState::Complete { year, month, day } => CalendarDate::new(year, month, day).map(Some),
            PartState::Unset | PartState::Partial { .. } => Ok(None),
        }
    }

    /// Checks that every set part is one of the options its select offers
    pub fn is_within(&self, range: &ValidationRange) -> bool {
        Part::ALL.iter().all(|&part| {
            !self.is_set(part) || range.allows(part, self.get(part), self.year, self.month)
        })
    }
}

fn narrow(part: Part, value: u16) -> u8 {
    u8::try_from(value).unwrap_or_else(|_| {
        log::debug!("Ignoring {part} value {value}: out of range, storing unset");
        0
    })
}

impl From<CalendarDate> for DateValue {
    fn from(date: CalendarDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_empty() {
        let value = DateValue::initialize("");
        assert_eq!(value, DateValue::default());
        assert_eq!(value.state(), PartState::Unset);
        assert_eq!(value.serialize(), "");
    }

    #[test]
    fn test_initialize_round_trip() {
        let value = DateValue::initialize("2024-02-29");
        assert_eq!((value.year(), value.month(), value.day()), (2024, 2, 29));
        assert_eq!(value.serialize(), "2024-02-29");
    }

    #[test]
    fn test_initialize_keeps_calendar_invalid_date() {
        let value = DateValue::initialize("2023-02-29");
        assert_eq!((value.year(), value.month(), value.day()), (2023, 2, 29));
        assert_eq!(value.serialize(), "2023-02-29");
    }

    #[test]
    fn test_initialize_garbage_segments_are_unset() {
        let value = DateValue::initialize("2024-xx-15");
        assert_eq!((value.year(), value.month(), value.day()), (2024, 0, 15));
        assert_eq!(value.serialize(), "");

        let value = DateValue::initialize("not a date");
        assert_eq!(value.state(), PartState::Unset);

        let value = DateValue::initialize("2024-03");
        assert_eq!(
            value.state(),
            PartState::Partial {
                month: true,
                day: false,
                year: true
            }
        );
    }

    #[test]
    fn test_initialize_unpadded_segments() {
        let value = DateValue::initialize("2024-3-7");
        assert_eq!(value.serialize(), "2024-03-07");
    }

    #[test]
    fn test_set_touches_one_part() {
        let mut value = DateValue::initialize("2024-02-29");
        value.set(Part::Month, 3);
        assert_eq!((value.year(), value.month(), value.day()), (2024, 3, 29));
        assert_eq!(value.get(Part::Month), 3);
    }

    #[test]
    fn test_set_oversized_month_is_unset() {
        let mut value = DateValue::new(2024, 5, 1);
        value.set(Part::Month, 300);
        assert_eq!(value.month(), 0);
        assert_eq!(value.serialize(), "");
    }

    #[test]
    fn test_state_transitions() {
        let mut value = DateValue::default();
        value.set(Part::Year, 2024);
        assert!(matches!(value.state(), PartState::Partial { year: true, .. }));
        assert_eq!(value.serialize(), "");

        value.set(Part::Month, 2);
        value.set(Part::Day, 29);
        assert_eq!(
            value.state(),
            PartState::Complete {
                year: 2024,
                month: 2,
                day: 29
            }
        );

        value.clear();
        assert_eq!(value.state(), PartState::Unset);
    }

    #[test]
    fn test_validate() {
        assert!(matches!(DateValue::default().validate(), Ok(None)));
        assert!(matches!(DateValue::new(2024, 2, 0).validate(), Ok(None)));

        let date = DateValue::new(2024, 2, 29).validate().unwrap().unwrap();
        assert_eq!(date.to_string(), "2024-02-29");

        let result = DateValue::new(2023, 2, 29).validate();
        assert!(matches!(
            result,
            Err(ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
    }

    #[test]
    fn test_is_within() {
        let range = ValidationRange::default();
        assert!(DateValue::default().is_within(&range));
        assert!(DateValue::new(2024, 2, 29).is_within(&range));
        assert!(!DateValue::new(2023, 2, 29).is_within(&range));
        assert!(!DateValue::new(1970, 1, 1).is_within(&range));
        assert!(DateValue::new(0, 0, 31).is_within(&range));
    }

    #[test]
    fn test_from_calendar_date() {
        let date: CalendarDate = "1991-08-15".parse().unwrap();
        let value = DateValue::from(date);
        assert_eq!(value.serialize(), "1991-08-15");
    }
}
