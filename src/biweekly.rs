//! Bi-weekly cadence: fixed fourteen-day periods stepped by the default
//! shift-by-length rule.

use chrono::{Days, NaiveDate, Weekday};

use crate::arith::days_until_weekday;
use crate::consts::DAYS_PER_BIWEEK;
use crate::range::{DateRange, RangeError};

/// Builds the two-week period beginning on `start`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_start_date(start: NaiveDate) -> Result<DateRange, RangeError> {
    DateRange::new(start, start + Days::new(DAYS_PER_BIWEEK - 1))
}

/// Builds the two-week period ending on `end`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_end_date(end: NaiveDate) -> Result<DateRange, RangeError> {
    DateRange::new(end - Days::new(DAYS_PER_BIWEEK - 1), end)
}

/// Builds the two-week period containing `target` that ends on the next
/// occurrence of `end_day`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_target_date(target: NaiveDate, end_day: Weekday) -> Result<DateRange, RangeError> {
    let end = target + Days::new(days_until_weekday(target, end_day));
    with_end_date(end)
}
