/// Sentinel for a part that has not been chosen yet
pub const UNSET: u16 = 0;

/// Maximum year accepted by strict parsing (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Longest month, offered while no month has been picked
pub const MAX_DAYS_IN_MONTH: u8 = 31;

/// Stand-in used for day counts while the year is unset. Must be a leap
/// year so February keeps day 29 on offer.
pub const PLACEHOLDER_YEAR: u16 = 2020;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator of the composite `YYYY-MM-DD` string
pub const DATE_SEPARATOR: char = '-';

// Select defaults, all 1-indexed
pub const DEFAULT_MIN_MONTH: u8 = 1;
pub const DEFAULT_MAX_MONTH: u8 = 12;
pub const DEFAULT_MIN_DAY: u8 = 1;
pub const DEFAULT_MAX_DAY: u8 = 31;
pub const DEFAULT_MIN_YEAR: u16 = 1980;
pub const DEFAULT_MAX_YEAR: u16 = 2030;

/// Label used for the date input when none is given
pub const DEFAULT_LABEL: &str = "Date";

/// Number of digits in a social security number
pub const SSN_DIGITS: usize = 9;
/// Leading SSN digits hidden by masking
pub const SSN_MASKED_DIGITS: usize = 5;
/// SSN group boundaries (`AAA-GG-SSSS`)
pub(crate) const SSN_GROUPS: [usize; 3] = [3, 2, 4];
/// Default character replacing hidden SSN digits
pub const DEFAULT_MASKER: char = '*';
/// Default separator between SSN groups
pub const DEFAULT_SSN_SEPARATOR: &str = "-";
