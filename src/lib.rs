//! Calendar date ranges with cadence-aware navigation.
//!
//! A [`DateRange`] is an immutable inclusive span of calendar days. The
//! cadence modules ([`weekly`], [`biweekly`], [`semi_monthly`], [`monthly`],
//! [`quarterly`], [`semi_annual`], [`annual`]) construct ranges bound to
//! that cadence's period rules; all navigation ([`DateRange::prior`],
//! [`DateRange::next`] and the batch helpers built on them) is generic and
//! never branches on the cadence itself. A range constructed without a
//! cadence steps by its own length in days.

pub mod annual;
pub mod arith;
pub mod biweekly;
mod consts;
pub mod monthly;
mod prelude;
pub mod quarterly;
mod range;
pub mod semi_annual;
pub mod semi_monthly;
#[cfg(test)]
mod test_utils;
pub mod weekly;

pub use consts::*;
pub use range::{DateRange, Dates, RangeError};
