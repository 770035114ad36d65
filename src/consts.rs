/// Earliest year the engine accepts by default (inclusive)
pub const MIN_YEAR: i32 = -271_820;

/// Latest year the engine accepts by default (inclusive)
pub const MAX_YEAR: i32 = 275_760;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March, the earliest possible Easter month
pub const MARCH: u8 = 3;
/// Month number for April, the latest possible Easter month
pub const APRIL: u8 = 4;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
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
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in one 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01
pub(crate) const EPOCH_SHIFT_DAYS: i64 = 719_468;

pub const DAYS_PER_WEEK: i64 = 7;

/// Day offset of Palm Sunday relative to Easter Sunday
pub const PALM_SUNDAY_OFFSET: i64 = -7;
/// Day offset of Good Friday relative to Easter Sunday
pub const GOOD_FRIDAY_OFFSET: i64 = -2;
/// Day offset of Easter Monday relative to Easter Sunday
pub const EASTER_MONDAY_OFFSET: i64 = 1;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
