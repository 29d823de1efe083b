/// Days in a weekly period
pub const DAYS_PER_WEEK: u64 = 7;

/// Days in a bi-weekly period
pub const DAYS_PER_BIWEEK: u64 = 14;

/// Day of month that closes the first semi-monthly period
pub const MID_MONTH_DAY: u32 = 15;

/// Calendar months in a quarter
pub const MONTHS_PER_QUARTER: u32 = 3;

/// Calendar months in a half-year
pub const MONTHS_PER_HALF_YEAR: u32 = 6;

/// Default cycle start day for monthly periods (calendar months)
pub const FIRST_OF_MONTH: u32 = 1;

/// Separator between the start and end dates of a range (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
