//! Quarterly cadence: month-snapped three-month periods.

use chrono::{Months, NaiveDate};

use crate::arith::{first_of_month, last_of_month};
use crate::consts::MONTHS_PER_QUARTER;
use crate::range::{DateRange, RangeError, Steps};

const STEPS: Steps = Steps { prior, next };

/// Builds the quarter whose first month contains `start`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_start_date(start: NaiveDate) -> Result<DateRange, RangeError> {
    let start = first_of_month(start);
    let end = last_of_month(start + Months::new(MONTHS_PER_QUARTER - 1));
    DateRange::with_steps(start, end, STEPS)
}

/// Builds the quarter whose last month contains `end`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_end_date(end: NaiveDate) -> Result<DateRange, RangeError> {
    let start = first_of_month(end) - Months::new(MONTHS_PER_QUARTER - 1);
    DateRange::with_steps(start, last_of_month(end), STEPS)
}

// Both steps shift the bounds by three calendar months and re-snap the end
// to the last day of its month.

fn prior(range: &DateRange) -> DateRange {
    let start = range.start() - Months::new(MONTHS_PER_QUARTER);
    let end = last_of_month(first_of_month(range.end()) - Months::new(MONTHS_PER_QUARTER));
    range.derive(start, end)
}

fn next(range: &DateRange) -> DateRange {
    let start = range.start() + Months::new(MONTHS_PER_QUARTER);
    let end = last_of_month(first_of_month(range.end()) + Months::new(MONTHS_PER_QUARTER));
    range.derive(start, end)
}
