//! Calendar arithmetic helpers shared by the cadence modules.
//!
//! Month arithmetic comes straight from [`chrono::Months`]; the helpers here
//! cover the pieces chrono leaves as `Option`-returning building blocks.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// First day of `date`'s month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day() - 1))
}

/// Last day of `date`'s month.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Months::new(1) - Days::new(1)
}

/// Shifts `date` by `years` calendar years.
///
/// A Feb 29 with no counterpart in the target year rolls forward to Mar 1.
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    date.with_year(year)
        .or_else(|| (date + Days::new(1)).with_year(year))
        .unwrap_or(date)
}

/// Shifts `date` back by `years` calendar years, with the same Feb 29
/// roll-forward as [`add_years`].
pub fn subtract_years(date: NaiveDate, years: i32) -> NaiveDate {
    add_years(date, -years)
}

/// Forward distance in days from `date` to the next occurrence of `target`,
/// 0 when `date` already falls on it. Weeks are numbered Mon=1..Sun=7.
pub fn days_until_weekday(date: NaiveDate, target: Weekday) -> u64 {
    let wrapped =
        (7 + target.number_from_monday() - date.weekday().number_from_monday()) % 7;
    u64::from(wrapped)
}
