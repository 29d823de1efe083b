//! Annual cadence: one-year periods anchored to the caller's start or end
//! date, with a special rule for leap-day starts.

use chrono::{Datelike, Days, NaiveDate};

use crate::arith::{add_years, subtract_years};
use crate::range::{DateRange, RangeError, Steps};

const STEPS: Steps = Steps { prior, next };

/// Builds the year-long period beginning on `start`.
///
/// A `start` of Feb 29 ends on Feb 28 of the following year; there is no
/// leap-day counterpart to land on.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_start_date(start: NaiveDate) -> Result<DateRange, RangeError> {
    DateRange::with_steps(start, end_for_start(start), STEPS)
}

/// Builds the year-long period ending on `end`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_end_date(end: NaiveDate) -> Result<DateRange, RangeError> {
    DateRange::with_steps(subtract_years(end, 1) + Days::new(1), end, STEPS)
}

// Both steps shift the start by a year and recompute the end from it, so
// the Feb 29 rule applies on every period.

fn prior(range: &DateRange) -> DateRange {
    let start = subtract_years(range.start(), 1);
    range.derive(start, end_for_start(start))
}

fn next(range: &DateRange) -> DateRange {
    let start = add_years(range.start(), 1);
    range.derive(start, end_for_start(start))
}

fn end_for_start(start: NaiveDate) -> NaiveDate {
    if start.month() == 2 && start.day() == 29 {
        // Feb 28 of the following year
        add_years(start - Days::new(1), 1)
    } else {
        add_years(start, 1) - Days::new(1)
    }
}
