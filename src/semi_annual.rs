//! Semi-annual cadence: six-calendar-month periods anchored to the
//! caller's start or end date.

use chrono::{Days, Months, NaiveDate};

use crate::consts::MONTHS_PER_HALF_YEAR;
use crate::range::{DateRange, RangeError, Steps};

const STEPS: Steps = Steps { prior, next };

/// Builds the half-year period beginning on `start`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_start_date(start: NaiveDate) -> Result<DateRange, RangeError> {
    let end = (start + Months::new(MONTHS_PER_HALF_YEAR)) - Days::new(1);
    DateRange::with_steps(start, end, STEPS)
}

/// Builds the half-year period ending on `end`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_end_date(end: NaiveDate) -> Result<DateRange, RangeError> {
    let start = (end - Months::new(MONTHS_PER_HALF_YEAR)) + Days::new(1);
    DateRange::with_steps(start, end, STEPS)
}

// Both steps shift the bounds by six calendar months with no re-snapping;
// the bounds keep their day of month (clamped in shorter months).

fn prior(range: &DateRange) -> DateRange {
    range.derive(
        range.start() - Months::new(MONTHS_PER_HALF_YEAR),
        range.end() - Months::new(MONTHS_PER_HALF_YEAR),
    )
}

fn next(range: &DateRange) -> DateRange {
    range.derive(
        range.start() + Months::new(MONTHS_PER_HALF_YEAR),
        range.end() + Months::new(MONTHS_PER_HALF_YEAR),
    )
}
