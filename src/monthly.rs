//! Monthly cadence with a configurable cycle start day.
//!
//! A cycle day of 1 follows calendar months exactly. Any other cycle day
//! produces a shifted monthly cycle (say the 15th through the 14th), stepped
//! with calendar-month arithmetic rather than a fixed day count.

use chrono::{Days, Months, NaiveDate};

use crate::arith::{first_of_month, last_of_month};
use crate::consts::FIRST_OF_MONTH;
use crate::range::{DateRange, RangeError, Steps};

const STEPS: Steps = Steps { prior, next };

/// Builds the calendar-month period ending on `end`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_end_date_on_first(end: NaiveDate) -> Result<DateRange, RangeError> {
    with_end_date_and_start_day(end, FIRST_OF_MONTH)
}

/// Builds the monthly period ending on `end` for a cycle beginning on
/// `start_day` of each month. The cycle day is carried onto every range
/// produced by navigation.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if the bounds come out reversed.
pub fn with_end_date_and_start_day(
    end: NaiveDate,
    start_day: u32,
) -> Result<DateRange, RangeError> {
    let start = if start_day == FIRST_OF_MONTH {
        first_of_month(end)
    } else {
        // One calendar month before the day after the end
        (end + Days::new(1)) - Months::new(1)
    };
    DateRange::with_steps_and_cycle_day(start, end, STEPS, start_day)
}

fn prior(range: &DateRange) -> DateRange {
    let end = range.start() - Days::new(1);
    if cycle_day(range) == FIRST_OF_MONTH {
        range.derive(first_of_month(end), end)
    } else {
        range.derive(range.start() - Months::new(1), end)
    }
}

fn next(range: &DateRange) -> DateRange {
    let start = range.end() + Days::new(1);
    if cycle_day(range) == FIRST_OF_MONTH {
        range.derive(start, last_of_month(start))
    } else {
        range.derive(start, range.end() + Months::new(1))
    }
}

fn cycle_day(range: &DateRange) -> u32 {
    range.cycle_start_day().unwrap_or(FIRST_OF_MONTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_with_end_date_on_first() {
        let range = with_end_date_on_first(date(2024, 1, 31)).expect("failed to construct month");
        assert_eq!(range.start(), date(2024, 1, 1));
        assert_eq!(range.end(), date(2024, 1, 31));
        assert_eq!(range.cycle_start_day(), Some(1));
    }

    #[test]
    fn test_next_into_leap_february() {
        let range = with_end_date_on_first(date(2024, 1, 31)).expect("failed to construct month");

        let february = range.next();
        assert_eq!(february.start(), date(2024, 2, 1));
        assert_eq!(february.end(), date(2024, 2, 29));
        assert_eq!(february.cycle_start_day(), Some(1));
    }

    #[test]
    fn test_prior_over_year_boundary() {
        let range = with_end_date_on_first(date(2024, 1, 31)).expect("failed to construct month");

        let december = range.prior();
        assert_eq!(december.start(), date(2023, 12, 1));
        assert_eq!(december.end(), date(2023, 12, 31));
    }

    #[test]
    fn test_with_start_day_mid_month() {
        // Cycle starting on the 15th: the period ending 2024-02-14 runs from
        // 2024-01-15
        let range =
            with_end_date_and_start_day(date(2024, 2, 14), 15).expect("failed to construct month");
        assert_eq!(range.start(), date(2024, 1, 15));
        assert_eq!(range.end(), date(2024, 2, 14));
        assert_eq!(range.cycle_start_day(), Some(15));
    }

    #[test]
    fn test_shifted_cycle_navigation() {
        let range =
            with_end_date_and_start_day(date(2024, 2, 14), 15).expect("failed to construct month");

        let next = range.next();
        assert_eq!(next.start(), date(2024, 2, 15));
        assert_eq!(next.end(), date(2024, 3, 14));
        assert_eq!(next.cycle_start_day(), Some(15));

        let prior = range.prior();
        assert_eq!(prior.start(), date(2023, 12, 15));
        assert_eq!(prior.end(), date(2024, 1, 14));
    }

    #[test]
    fn test_shifted_cycle_clamps_short_months() {
        // Cycle day 31: month adds clamp into shorter months
        let range =
            with_end_date_and_start_day(date(2024, 3, 30), 31).expect("failed to construct month");
        assert_eq!(range.start(), date(2024, 2, 29));

        let next = range.next();
        assert_eq!(next.start(), date(2024, 3, 31));
        assert_eq!(next.end(), date(2024, 4, 30));
    }

    #[test]
    fn test_round_trip_calendar_months() {
        // 24 months spanning a year boundary and leap February
        let mut range = with_end_date_on_first(date(2023, 6, 30)).expect("failed to construct month");
        for _ in 0..24 {
            assert_eq!(range.next().prior(), range);
            assert_eq!(range.prior().next(), range);
            assert_eq!(range.start(), first_of_month(range.start()));
            assert_eq!(range.end(), last_of_month(range.start()));
            range = range.next();
        }
        assert_eq!(range.start(), date(2025, 6, 1));
    }

    #[test]
    fn test_round_trip_shifted_cycle() {
        let mut range =
            with_end_date_and_start_day(date(2023, 11, 14), 15).expect("failed to construct month");
        for _ in 0..24 {
            assert_eq!(range.next().prior(), range);
            assert_eq!(range.prior().next(), range);
            range = range.next();
        }
        assert_eq!(range.start(), date(2025, 10, 15));
        assert_eq!(range.end(), date(2025, 11, 14));
    }
}
