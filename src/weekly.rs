//! Weekly cadence: fixed seven-day periods stepped by the default
//! shift-by-length rule.

use chrono::{Days, NaiveDate, Weekday};

use crate::arith::days_until_weekday;
use crate::consts::DAYS_PER_WEEK;
use crate::range::{DateRange, RangeError};

/// Builds the week beginning on `start`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_start_date(start: NaiveDate) -> Result<DateRange, RangeError> {
    DateRange::new(start, start + Days::new(DAYS_PER_WEEK - 1))
}

/// Builds the week ending on `end`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_end_date(end: NaiveDate) -> Result<DateRange, RangeError> {
    DateRange::new(end - Days::new(DAYS_PER_WEEK - 1), end)
}

/// Builds the week containing `target` that ends on the next occurrence of
/// `end_day` (on `target` itself when it already falls on that weekday).
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_target_date(target: NaiveDate, end_day: Weekday) -> Result<DateRange, RangeError> {
    let end = target + Days::new(days_until_weekday(target, end_day));
    with_end_date(end)
}
