use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    str::FromStr,
};

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{RANGE_SEPARATOR, prelude::*};

/// Cadence step function: maps a range to its immediate neighbor.
pub(crate) type StepFn = fn(&DateRange) -> DateRange;

/// A prior/next pair. Step functions are always bound together, never
/// individually.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Steps {
    pub(crate) prior: StepFn,
    pub(crate) next:  StepFn,
}

/// An immutable inclusive span of calendar days.
///
/// Cadence modules bind a prior/next step pair at construction; every
/// navigation method returns a new range carrying the same bindings (and,
/// for monthly cycles, the configured cycle start day). A range without
/// bindings steps by its own length in days.
///
/// Identity, ordering and hashing are defined by the bounds alone; the
/// bindings and the cycle day are navigation metadata, not identity.
#[derive(Debug, Clone, Copy, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: NaiveDate,
    end:   NaiveDate,
    steps: Option<Steps>,
    cycle_start_day: Option<u32>,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A requested covering span ends before it starts.
    #[error("Invalid span: from ({from}) is after to ({to})")]
    InvalidSpan { from: NaiveDate, to: NaiveDate },

    /// Error parsing a date component.
    #[error(transparent)]
    ParseError(#[from] chrono::ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new plain range with validation. Plain ranges navigate by
    /// shifting both bounds by the range length.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if end < start {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            steps: None,
            cycle_start_day: None,
        })
    }

    /// Creates a range bound to a cadence's step pair.
    pub(crate) fn with_steps(
        start: NaiveDate,
        end: NaiveDate,
        steps: Steps,
    ) -> Result<Self, RangeError> {
        let mut range = Self::new(start, end)?;
        range.steps = Some(steps);
        Ok(range)
    }

    /// Creates a bound range that also carries a cycle start day.
    pub(crate) fn with_steps_and_cycle_day(
        start: NaiveDate,
        end: NaiveDate,
        steps: Steps,
        cycle_start_day: u32,
    ) -> Result<Self, RangeError> {
        let mut range = Self::with_steps(start, end, steps)?;
        range.cycle_start_day = Some(cycle_start_day);
        Ok(range)
    }

    /// New range over different bounds carrying this range's bindings and
    /// cycle day. Cadence step rules uphold the ordering invariant by
    /// construction.
    pub(crate) fn derive(&self, start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            steps: self.steps,
            cycle_start_day: self.cycle_start_day,
        }
    }

    /// Returns the first date of the range
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last date of the range
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive length of the range in days, always at least 1.
    pub fn num_days(&self) -> u64 {
        self.end
            .signed_duration_since(self.start)
            .num_days()
            .unsigned_abs()
            + 1
    }

    /// The configured cycle start day, if this range belongs to a monthly
    /// cycle.
    pub const fn cycle_start_day(&self) -> Option<u32> {
        self.cycle_start_day
    }

    /// Ascending iterator over every date in the range, inclusive.
    pub fn dates(&self) -> Dates {
        Dates {
            cur: Some(self.start),
            end: self.end,
        }
    }

    /// Returns the date at the zero-based `index` from the start, or `None`
    /// if `index` is outside the range.
    pub fn date_at(&self, index: u64) -> Option<NaiveDate> {
        (index < self.num_days()).then(|| self.start + Days::new(index))
    }

    /// Ascending iterator over the dates in the range that fall on `weekday`.
    pub fn dates_for_weekday(&self, weekday: Weekday) -> impl Iterator<Item = NaiveDate> {
        self.dates().filter(move |d| d.weekday() == weekday)
    }

    /// Checks if `date` falls within the range, bounds included.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks if `other` is fully nested within this range's bounds.
    pub fn contains_range(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Checks if the two inclusive intervals intersect. Touching endpoints
    /// count as overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range overlaps at least one member of `ranges`.
    pub fn overlaps_any<'a, I>(&self, ranges: I) -> bool
    where
        I: IntoIterator<Item = &'a Self>,
    {
        ranges.into_iter().any(|r| self.overlaps(r))
    }

    /// The adjacent range before this one.
    pub fn prior(&self) -> Self {
        match self.steps {
            Some(steps) => (steps.prior)(self),
            None => {
                let len = self.num_days();
                self.derive(self.start - Days::new(len), self.end - Days::new(len))
            },
        }
    }

    /// The adjacent range after this one.
    pub fn next(&self) -> Self {
        match self.steps {
            Some(steps) => (steps.next)(self),
            None => {
                let len = self.num_days();
                self.derive(self.start + Days::new(len), self.end + Days::new(len))
            },
        }
    }

    /// Applies [`prior`](Self::prior) `number` times. Each step depends on
    /// the previous result; calendar cadences are not fixed-length.
    pub fn prior_n(&self, number: usize) -> Self {
        let mut range = *self;
        for _ in 0..number {
            range = range.prior();
        }
        range
    }

    /// Applies [`next`](Self::next) `number` times.
    pub fn next_n(&self, number: usize) -> Self {
        let mut range = *self;
        for _ in 0..number {
            range = range.next();
        }
        range
    }

    /// The `number` ranges strictly before this one, ascending by start date
    /// (most distant first).
    pub fn ranges_before(&self, number: usize) -> Vec<Self> {
        self.ranges_before_impl(number, false)
    }

    /// As [`ranges_before`](Self::ranges_before), with this range appended
    /// as the final element.
    pub fn ranges_before_inclusive(&self, number: usize) -> Vec<Self> {
        self.ranges_before_impl(number, true)
    }

    /// The `number` ranges strictly after this one, ascending.
    pub fn ranges_after(&self, number: usize) -> Vec<Self> {
        self.ranges_after_impl(number, false)
    }

    /// As [`ranges_after`](Self::ranges_after), with this range prepended.
    pub fn ranges_after_inclusive(&self, number: usize) -> Vec<Self> {
        self.ranges_after_impl(number, true)
    }

    /// `before` prior ranges, this range, then `after` following ranges,
    /// ascending throughout. This range appears exactly once.
    pub fn ranges_window(&self, before: usize, after: usize) -> Vec<Self> {
        let mut result = Vec::with_capacity(before + after + 1);
        result.extend(self.ranges_before_impl(before, true));
        result.extend(self.ranges_after_impl(after, false));
        result
    }

    /// Walks [`prior`](Self::prior)/[`next`](Self::next) from this range
    /// until the range containing `date` is found.
    ///
    /// Termination requires the bound cadence to progress monotonically
    /// toward `date`; every cadence in this crate does.
    pub fn range_containing_date(&self, date: NaiveDate) -> Self {
        let mut range = *self;
        while !range.contains_date(date) {
            range = if date > range.end {
                range.next()
            } else {
                range.prior()
            };
        }
        range
    }

    /// The ascending, gap-free sequence of cadence ranges whose union covers
    /// `[from, to]`.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidSpan` if `to` precedes `from`.
    pub fn ranges_containing_span(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Self>, RangeError> {
        if to < from {
            return Err(RangeError::InvalidSpan { from, to });
        }
        let mut result = Vec::new();
        let mut range = self.range_containing_date(from);
        result.push(range);
        while range.end < to {
            range = range.next();
            result.push(range);
        }
        result.sort_unstable();
        Ok(result)
    }

    fn ranges_before_impl(&self, number: usize, include_self: bool) -> Vec<Self> {
        let mut result = Vec::with_capacity(number + 1);
        if include_self {
            result.push(*self);
        }
        let mut cur = *self;
        for _ in 0..number {
            cur = cur.prior();
            result.push(cur);
        }
        // Walked backwards; flip to ascending order
        result.reverse();
        result
    }

    fn ranges_after_impl(&self, number: usize, include_self: bool) -> Vec<Self> {
        let mut result = Vec::with_capacity(number + 1);
        if include_self {
            result.push(*self);
        }
        let mut cur = *self;
        for _ in 0..number {
            cur = cur.next();
            result.push(cur);
        }
        result
    }
}

/// Iterator over the dates of a [`DateRange`], ascending and inclusive.
#[derive(Debug, Clone)]
pub struct Dates {
    cur: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Dates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let date = self.cur?;
        if date > self.end {
            self.cur = None;
            return None;
        }
        self.cur = date.checked_add_days(Days::new(1));
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.cur {
            Some(cur) if cur <= self.end => {
                let days = self.end.signed_duration_since(cur).num_days().unsigned_abs() + 1;
                usize::try_from(days).unwrap_or(usize::MAX)
            },
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl std::iter::FusedIterator for Dates {}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = Dates;

    fn into_iter(self) -> Dates {
        self.dates()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = Dates;

    fn into_iter(self) -> Dates {
        self.dates()
    }
}

impl PartialEq for DateRange {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for DateRange {}

impl Hash for DateRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 extended format: RANGE_SEPARATOR between start and end
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                // SAFETY: We just verified separator_count == 1, so find() must succeed
                let pos = trimmed.find(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                let start = trimmed[..pos].trim().parse::<NaiveDate>()?;
                let end = trimmed[pos + 1..].trim().parse::<NaiveDate>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
