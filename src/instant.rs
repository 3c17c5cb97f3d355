//! Exact points on a timeline.

use std::fmt;

use crate::cal::NANOS_PER_SECOND;
use crate::cal::unit::Unit;
use crate::clock::Clock;
use crate::config;
use crate::duration::{Duration, TimePoint};
use crate::error::{Error, Result};
use crate::util::{split_wide_cycles, OrOverflow};


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with nanosecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds since the
/// Unix epoch, and a 32-bit integer of nanoseconds so far that second,
/// which is always positive, even before the epoch.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    nanos: i32,
}

impl Instant {

    /// The Unix epoch, midnight UTC at the start of 1970.
    pub const EPOCH: Self = Self { seconds: 0, nanos: 0 };

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero nanoseconds.
    pub fn at(seconds: i64) -> Self {
        Self::from_parts(seconds, 0)
    }

    pub(crate) const fn from_parts(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Creates a new Instant from a number of seconds since the Unix epoch,
    /// adjusted by any number of nanoseconds, which may be negative.
    pub fn of_epoch_second(seconds: i64, nano_adjustment: i64) -> Result<Self> {
        let nanos = i128::from(seconds) * i128::from(NANOS_PER_SECOND) + i128::from(nano_adjustment);
        Self::from_total_nanos(nanos)
    }

    pub fn of_epoch_milli(millis: i64) -> Self {
        let (seconds, millis) = split_wide_cycles(i128::from(millis), 1000);
        Self::from_parts(seconds as i64, millis as i32 * 1_000_000)
    }

    /// Creates a new Instant set to the current time on the clock.
    pub fn now_with(clock: &dyn Clock) -> Self {
        clock.instant()
    }

    /// Creates a new Instant set to the current time, using the process-wide
    /// clock.
    pub fn now() -> Self {
        Self::now_with(&*config::defaults().clock)
    }

    /// Returns the number of seconds at this instant.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of nanoseconds past the second at this instant.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    pub fn to_epoch_milli(&self) -> Result<i64> {
        i64::try_from(self.total_nanos().div_euclid(1_000_000)).map_err(|_| Error::ArithmeticOverflow("to_epoch_milli"))
    }

    pub fn is_before(&self, other: Self) -> bool {
        *self < other
    }

    pub fn is_after(&self, other: Self) -> bool {
        *self > other
    }

    pub(crate) fn total_nanos(&self) -> i128 {
        i128::from(self.seconds) * i128::from(NANOS_PER_SECOND) + i128::from(self.nanos)
    }

    pub(crate) fn from_total_nanos(nanos: i128) -> Result<Self> {
        let (seconds, nanos) = split_wide_cycles(nanos, i128::from(NANOS_PER_SECOND));
        let seconds = i64::try_from(seconds).ok().or_overflow("instant")?;
        Ok(Self::from_parts(seconds, nanos as i32))
    }

    /// Moves this instant by a number of nanoseconds.
    pub(crate) fn plus_span(self, nanos: i128) -> Result<Self> {
        Self::from_total_nanos(self.total_nanos() + nanos)
    }

    pub fn plus(self, span: Duration) -> Result<Self> {
        self.plus_span(span.to_total_nanos())
    }

    pub fn minus(self, span: Duration) -> Result<Self> {
        self.plus_span(-span.to_total_nanos())
    }

    /// Adds an amount of an exact, time-based unit.
    pub fn plus_amount(self, amount: i64, unit: Unit) -> Result<Self> {
        self.plus_span(unit.span_of(amount)?)
    }

    pub fn until(&self, end: Self, unit: Unit) -> Result<i64> {
        unit.count_in(self.nanos_until(&end))
    }

    /// Drops any part of this instant smaller than the given unit, which
    /// has to divide a day evenly.
    pub fn truncated_to(self, unit: Unit) -> Result<Self> {
        if unit == Unit::Nanos {
            return Ok(self);
        }

        let unit_nanos = i128::from(unit.truncation_nanos()?);
        let total = self.total_nanos();
        Self::from_total_nanos(total - total.rem_euclid(unit_nanos))
    }
}

impl TimePoint for Instant {
    fn nanos_until(&self, end: &Self) -> i128 {
        end.total_nanos() - self.total_nanos()
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({})", self)
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::*;

    #[test]
    fn before_the_epoch() {
        let instant = Instant::of_epoch_second(0, -1).unwrap();
        assert_eq!(instant.seconds(), -1);
        assert_eq!(instant.nanos(), 999_999_999);
    }

    #[test]
    fn millis() {
        let instant = Instant::of_epoch_milli(-1);
        assert_eq!((instant.seconds(), instant.nanos()), (-1, 999_000_000));
        assert_eq!(instant.to_epoch_milli(), Ok(-1));
    }

    #[test]
    fn arithmetic() {
        let instant = Instant::at(10).plus(Duration::of_millis(-1500)).unwrap();
        assert_eq!((instant.seconds(), instant.nanos()), (8, 500_000_000));
        assert_eq!(Instant::at(i64::MAX).plus(Duration::of_seconds(1)), Err(Error::ArithmeticOverflow("instant")));
    }

    #[test]
    fn truncation() {
        let instant = Instant::of_epoch_second(-90, 5).unwrap();
        assert_eq!(instant.truncated_to(Unit::Minutes), Ok(Instant::at(-120)));
        assert!(instant.truncated_to(Unit::Weeks).is_err());
    }

    #[test]
    fn until() {
        let start = Instant::at(0);
        let end = Instant::of_epoch_second(7199, 999_999_999).unwrap();
        assert_eq!(start.until(end, Unit::Hours), Ok(1));
        assert_eq!(end.until(start, Unit::Minutes), Ok(-119));
        assert_eq!(start.until(end, Unit::Days), Err(Error::UnsupportedUnit(Unit::Days)));
    }
}
