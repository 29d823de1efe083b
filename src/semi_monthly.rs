//! Semi-monthly cadence: each month splits into the 1st..15th and the
//! 16th..last day.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::arith::{first_of_month, last_of_month};
use crate::consts::MID_MONTH_DAY;
use crate::range::{DateRange, RangeError, Steps};

const STEPS: Steps = Steps { prior, next };

/// Builds the semi-monthly period ending on `end`.
///
/// An `end` on the 15th yields the first half of its month; any other day
/// is treated as closing the second half, which starts on the 16th.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if `end` falls before the computed
/// start (an `end` before the 15th of its month).
pub fn with_end_date(end: NaiveDate) -> Result<DateRange, RangeError> {
    let start = if end.day() == MID_MONTH_DAY {
        first_of_month(end)
    } else {
        sixteenth_of_month(end)
    };
    DateRange::with_steps(start, end, STEPS)
}

fn prior(range: &DateRange) -> DateRange {
    let end = range.start() - Days::new(1);
    let start = if range.start().day() == 1 {
        // current is 1..15, prior is 16..last of the previous month
        sixteenth_of_month(end)
    } else {
        first_of_month(end)
    };
    range.derive(start, end)
}

fn next(range: &DateRange) -> DateRange {
    let start = if range.end().day() == MID_MONTH_DAY {
        range.end() + Days::new(1)
    } else {
        first_of_month(range.end()) + Months::new(1)
    };
    let end = if start.day() == 1 {
        start + Days::new(u64::from(MID_MONTH_DAY) - 1)
    } else {
        last_of_month(start)
    };
    range.derive(start, end)
}

fn sixteenth_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Days::new(u64::from(MID_MONTH_DAY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_with_end_date_on_fifteenth() {
        let range = with_end_date(date(2024, 1, 15)).expect("failed to construct period");
        assert_eq!(range.start(), date(2024, 1, 1));
        assert_eq!(range.end(), date(2024, 1, 15));
    }

    #[test]
    fn test_with_end_date_on_month_end() {
        let range = with_end_date(date(2024, 1, 31)).expect("failed to construct period");
        assert_eq!(range.start(), date(2024, 1, 16));
        assert_eq!(range.end(), date(2024, 1, 31));
    }

    #[test]
    fn test_next_chain_over_month_boundary() {
        let range = with_end_date(date(2024, 1, 15)).expect("failed to construct period");

        let second_half = range.next();
        assert_eq!(second_half.start(), date(2024, 1, 16));
        assert_eq!(second_half.end(), date(2024, 1, 31));

        let first_of_february = second_half.next();
        assert_eq!(first_of_february.start(), date(2024, 2, 1));
        assert_eq!(first_of_february.end(), date(2024, 2, 15));
    }

    #[test]
    fn test_next_lands_on_leap_february_end() {
        let range = with_end_date(date(2024, 2, 15)).expect("failed to construct period");

        let second_half = range.next();
        assert_eq!(second_half.start(), date(2024, 2, 16));
        assert_eq!(second_half.end(), date(2024, 2, 29));

        // Same month in a non-leap year
        let range = with_end_date(date(2023, 2, 15)).expect("failed to construct period");
        assert_eq!(range.next().end(), date(2023, 2, 28));
    }

    #[test]
    fn test_prior_chain_over_month_boundary() {
        let range = with_end_date(date(2024, 2, 15)).expect("failed to construct period");

        let prior = range.prior();
        assert_eq!(prior.start(), date(2024, 1, 16));
        assert_eq!(prior.end(), date(2024, 1, 31));

        let prior_prior = prior.prior();
        assert_eq!(prior_prior.start(), date(2024, 1, 1));
        assert_eq!(prior_prior.end(), date(2024, 1, 15));
    }

    #[test]
    fn test_prior_over_year_boundary() {
        let range = with_end_date(date(2024, 1, 15)).expect("failed to construct period");

        let prior = range.prior();
        assert_eq!(prior.start(), date(2023, 12, 16));
        assert_eq!(prior.end(), date(2023, 12, 31));
    }

    #[test]
    fn test_round_trip_across_year_and_leap_boundaries() {
        // 24 half-month steps starting late 2023, through leap February 2024
        let mut range = with_end_date(date(2023, 11, 15)).expect("failed to construct period");
        for _ in 0..24 {
            assert_eq!(range.next().prior(), range);
            assert_eq!(range.prior().next(), range);
            range = range.next();
        }
        assert_eq!(range.start(), date(2024, 11, 1));
        assert_eq!(range.end(), date(2024, 11, 15));
    }
}
