//! Lengths of time on the timeline.

use std::fmt;

use crate::cal::{NANOS_PER_SECOND, SECONDS_PER_DAY};
use crate::cal::field::Field;
use crate::cal::unit::Unit;
use crate::error::{Error, Result};
use crate::util::{split_cycles, split_wide_cycles, OrOverflow};


/// A **duration** is a length of time on the timeline, irrespective of
/// time zone or calendar format, with nanosecond precision.
///
/// Internally this is a number of seconds, which can be negative, and a
/// nanosecond-of-second that is always between 0 and 999,999,999. Negative
/// durations with a fractional part therefore look a little odd: minus a
/// tenth of a second is stored as `-1` seconds plus 900,000,000 nanos.
///
/// Ordering compares the seconds first and then the nanos, which is the
/// same as comparing the lengths.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Duration {
    seconds: i64,
    nanos: i32,
}

/// Anything with a position on a timeline that a `Duration` can be measured
/// between.
pub trait TimePoint {

    /// The exact number of nanoseconds from this point to the `end` point,
    /// negative if `end` comes first.
    fn nanos_until(&self, end: &Self) -> i128;
}

const NANOS_PER_MILLI: i64 = 1_000_000;

impl Duration {

    /// The zero-length duration.
    pub const ZERO: Self = Self { seconds: 0, nanos: 0 };

    /// The most negative duration that can be represented.
    pub const MIN: Self = Self { seconds: i64::MIN, nanos: 0 };

    /// The most positive duration that can be represented.
    pub const MAX: Self = Self { seconds: i64::MAX, nanos: 999_999_999 };

    /// Builds a duration from parts that are already normalised.
    pub(crate) const fn from_parts(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Creates a duration that’s the given number of seconds long.
    pub fn of_seconds(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    /// Creates a duration from a number of seconds and an adjustment in
    /// nanoseconds, which can be any size and either sign. The result is
    /// normalised so that the nanosecond part is within a second.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::Duration;
    ///
    /// let duration = Duration::of_seconds_and_nanos(2, -1).unwrap();
    /// assert_eq!(duration.lengths(), (1, 999_999_999));
    /// ```
    pub fn of_seconds_and_nanos(seconds: i64, nano_adjustment: i64) -> Result<Self> {
        let (extra_seconds, nanos) = split_cycles(nano_adjustment, NANOS_PER_SECOND);
        let seconds = seconds.checked_add(extra_seconds).or_overflow("of_seconds_and_nanos")?;
        Ok(Self { seconds, nanos: nanos as i32 })
    }

    /// Creates a duration that’s the given number of milliseconds long.
    pub fn of_millis(millis: i64) -> Self {
        let (seconds, millis) = split_cycles(millis, 1_000);
        Self { seconds, nanos: (millis * NANOS_PER_MILLI) as i32 }
    }

    /// Creates a duration that’s the given number of nanoseconds long.
    pub fn of_nanos(nanos: i64) -> Self {
        let (seconds, nanos) = split_cycles(nanos, NANOS_PER_SECOND);
        Self { seconds, nanos: nanos as i32 }
    }

    pub fn of_minutes(minutes: i64) -> Result<Self> {
        minutes.checked_mul(60).map(Self::of_seconds).or_overflow("of_minutes")
    }

    pub fn of_hours(hours: i64) -> Result<Self> {
        hours.checked_mul(3_600).map(Self::of_seconds).or_overflow("of_hours")
    }

    /// Creates a duration of the given number of standard 24-hour days.
    pub fn of_days(days: i64) -> Result<Self> {
        days.checked_mul(SECONDS_PER_DAY).map(Self::of_seconds).or_overflow("of_days")
    }

    /// Creates a duration of an amount of the given unit. The unit has to
    /// have an exact length, with days counted as 24 hours; other estimated
    /// units such as months are rejected.
    pub fn of(amount: i64, unit: Unit) -> Result<Self> {
        Self::ZERO.plus_amount(amount, unit)
    }

    /// Creates a duration by adding up a set of amounts in different units.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::{Duration, Unit};
    ///
    /// let duration = Duration::from_amounts(&[(1, Unit::Hours), (30, Unit::Minutes)]).unwrap();
    /// assert_eq!(duration, Duration::of_seconds(5_400));
    /// ```
    pub fn from_amounts(amounts: &[(i64, Unit)]) -> Result<Self> {
        amounts.iter().try_fold(Self::ZERO, |total, &(amount, unit)| total.plus_amount(amount, unit))
    }

    /// Returns the duration between two points on a timeline, which is
    /// negative if the end comes before the start.
    pub fn between<T: TimePoint>(start: &T, end: &T) -> Result<Self> {
        Self::from_total_nanos(start.nanos_until(end))
    }

    /// Return the seconds and nanoseconds portions of the duration as
    /// a 2-element tuple.
    pub fn lengths(&self) -> (i64, i32) {
        (self.seconds, self.nanos)
    }

    /// The seconds portion of this duration. For negative durations with a
    /// fractional part, this is one less than you might expect.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The nanosecond-of-second portion of this duration, which is never
    /// negative.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    pub fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    pub fn with_seconds(self, seconds: i64) -> Self {
        Self { seconds, nanos: self.nanos }
    }

    pub fn with_nanos(self, nano_of_second: i64) -> Result<Self> {
        let nanos = Field::NanoOfSecond.check_valid_int_value(nano_of_second)?;
        Ok(Self { seconds: self.seconds, nanos })
    }

    /// The whole length of this duration in nanoseconds, which always fits.
    pub(crate) fn to_total_nanos(self) -> i128 {
        i128::from(self.seconds) * i128::from(NANOS_PER_SECOND) + i128::from(self.nanos)
    }

    /// Builds a duration from a length in nanoseconds, failing if it can’t
    /// be represented.
    pub(crate) fn from_total_nanos(nanos: i128) -> Result<Self> {
        let (seconds, nanos) = split_wide_cycles(nanos, i128::from(NANOS_PER_SECOND));
        let seconds = i64::try_from(seconds).map_err(|_| Error::ArithmeticOverflow("duration"))?;
        Ok(Self { seconds, nanos: nanos as i32 })
    }

    fn plus_total_nanos(self, nanos: i128) -> Result<Self> {
        Self::from_total_nanos(self.to_total_nanos() + nanos)
    }
}


// ---- arithmetic ----

impl Duration {

    pub fn plus(self, other: Self) -> Result<Self> {
        self.plus_total_nanos(other.to_total_nanos())
    }

    pub fn minus(self, other: Self) -> Result<Self> {
        self.plus_total_nanos(-other.to_total_nanos())
    }

    /// Adds an amount of the given unit, which has to have an exact
    /// length. Days are counted as 24 hours.
    pub fn plus_amount(self, amount: i64, unit: Unit) -> Result<Self> {
        match unit {
            Unit::Days => {
                let seconds = amount.checked_mul(SECONDS_PER_DAY).or_overflow("plus")?;
                self.plus_seconds(seconds)
            }
            _ if unit.is_duration_estimated() => Err(Error::EstimatedUnitRejected(unit)),
            Unit::Custom(custom) => self.plus(custom.add_to(amount)?),
            _ => self.plus_total_nanos(i128::from(amount) * unit.duration().to_total_nanos()),
        }
    }

    pub fn minus_amount(self, amount: i64, unit: Unit) -> Result<Self> {
        match amount.checked_neg() {
            Some(negated) => self.plus_amount(negated, unit),
            None          => self.plus_amount(i64::MAX, unit)?.plus_amount(1, unit),
        }
    }

    pub fn plus_days(self, days: i64) -> Result<Self> {
        self.plus_total_nanos(i128::from(days) * i128::from(SECONDS_PER_DAY * NANOS_PER_SECOND))
    }

    pub fn plus_hours(self, hours: i64) -> Result<Self> {
        self.plus_total_nanos(i128::from(hours) * i128::from(3_600 * NANOS_PER_SECOND))
    }

    pub fn plus_minutes(self, minutes: i64) -> Result<Self> {
        self.plus_total_nanos(i128::from(minutes) * i128::from(60 * NANOS_PER_SECOND))
    }

    pub fn plus_seconds(self, seconds: i64) -> Result<Self> {
        self.plus_total_nanos(i128::from(seconds) * i128::from(NANOS_PER_SECOND))
    }

    pub fn plus_millis(self, millis: i64) -> Result<Self> {
        self.plus_total_nanos(i128::from(millis) * i128::from(NANOS_PER_MILLI))
    }

    pub fn plus_nanos(self, nanos: i64) -> Result<Self> {
        self.plus_total_nanos(i128::from(nanos))
    }

    pub fn minus_days(self, days: i64) -> Result<Self> {
        self.plus_total_nanos(-i128::from(days) * i128::from(SECONDS_PER_DAY * NANOS_PER_SECOND))
    }

    pub fn minus_hours(self, hours: i64) -> Result<Self> {
        self.plus_total_nanos(-i128::from(hours) * i128::from(3_600 * NANOS_PER_SECOND))
    }

    pub fn minus_minutes(self, minutes: i64) -> Result<Self> {
        self.plus_total_nanos(-i128::from(minutes) * i128::from(60 * NANOS_PER_SECOND))
    }

    pub fn minus_seconds(self, seconds: i64) -> Result<Self> {
        self.plus_total_nanos(-i128::from(seconds) * i128::from(NANOS_PER_SECOND))
    }

    pub fn minus_millis(self, millis: i64) -> Result<Self> {
        self.plus_total_nanos(-i128::from(millis) * i128::from(NANOS_PER_MILLI))
    }

    pub fn minus_nanos(self, nanos: i64) -> Result<Self> {
        self.plus_total_nanos(-i128::from(nanos))
    }

    pub fn multiplied_by(self, multiplicand: i64) -> Result<Self> {
        match multiplicand {
            0 => Ok(Self::ZERO),
            1 => Ok(self),
            _ => {
                let nanos = self.to_total_nanos().checked_mul(i128::from(multiplicand)).or_overflow("multiplied_by")?;
                Self::from_total_nanos(nanos)
            }
        }
    }

    /// Divides this duration by a number. The division is done on the
    /// whole length, and any part of a nanosecond left over is dropped,
    /// rounding toward zero.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::Duration;
    ///
    /// let third = Duration::of_seconds(-1).divided_by(3).unwrap();
    /// assert_eq!(third.lengths(), (-1, 666_666_667));
    /// ```
    pub fn divided_by(self, divisor: i64) -> Result<Self> {
        match divisor {
            0 => Err(Error::DivideByZero),
            1 => Ok(self),
            _ => Self::from_total_nanos(self.to_total_nanos() / i128::from(divisor)),
        }
    }

    /// Returns how many whole times the divisor fits into this duration,
    /// rounding toward zero.
    pub fn divided_by_duration(self, divisor: Self) -> Result<i64> {
        if divisor.is_zero() {
            return Err(Error::DivideByZero);
        }

        let quotient = self.to_total_nanos() / divisor.to_total_nanos();
        i64::try_from(quotient).map_err(|_| Error::ArithmeticOverflow("divided_by"))
    }

    pub fn negated(self) -> Result<Self> {
        self.multiplied_by(-1)
    }

    pub fn abs(self) -> Result<Self> {
        if self.is_negative() { self.negated() } else { Ok(self) }
    }

    /// Drops any part of this duration smaller than the given unit, moving
    /// it toward zero. The unit has to be no longer than a day, and divide a
    /// day evenly.
    pub fn truncated_to(self, unit: Unit) -> Result<Self> {
        match unit {
            Unit::Seconds if self.seconds >= 0 || self.nanos == 0 => return Ok(self.with_nanos_unchecked(0)),
            Unit::Nanos => return Ok(self),
            _ => {}
        }

        let unit_nanos = unit.truncation_nanos()?;
        let nano_of_day = (self.seconds % SECONDS_PER_DAY) * NANOS_PER_SECOND + i64::from(self.nanos);
        let truncated = (nano_of_day / unit_nanos) * unit_nanos;
        self.plus_nanos(truncated - nano_of_day)
    }

    fn with_nanos_unchecked(self, nanos: i32) -> Self {
        Self { seconds: self.seconds, nanos }
    }
}


// ---- conversions ----

impl Duration {

    /// The total length in whole days, rounding toward zero.
    pub fn to_days(&self) -> i64 {
        self.seconds / SECONDS_PER_DAY
    }

    pub fn to_hours(&self) -> i64 {
        self.seconds / 3_600
    }

    pub fn to_minutes(&self) -> i64 {
        self.seconds / 60
    }

    pub fn to_seconds(&self) -> i64 {
        self.seconds
    }

    /// The total length in milliseconds, rounding toward zero.
    pub fn to_millis(&self) -> Result<i64> {
        let millis = self.to_total_nanos() / i128::from(NANOS_PER_MILLI);
        i64::try_from(millis).map_err(|_| Error::ArithmeticOverflow("to_millis"))
    }

    pub fn to_nanos(&self) -> Result<i64> {
        i64::try_from(self.to_total_nanos()).map_err(|_| Error::ArithmeticOverflow("to_nanos"))
    }

    // The *_part methods split the stored seconds without normalising
    // them, so the parts of a negative duration can have mixed signs.

    pub fn to_days_part(&self) -> i64 {
        self.seconds / SECONDS_PER_DAY
    }

    pub fn to_hours_part(&self) -> i32 {
        (self.to_hours() % 24) as i32
    }

    pub fn to_minutes_part(&self) -> i32 {
        (self.to_minutes() % 60) as i32
    }

    pub fn to_seconds_part(&self) -> i32 {
        (self.seconds % 60) as i32
    }

    pub fn to_millis_part(&self) -> i32 {
        self.nanos / NANOS_PER_MILLI as i32
    }

    pub fn to_nanos_part(&self) -> i32 {
        self.nanos
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Duration({})", self)
    }
}


#[cfg(test)]
mod test {
    pub use super::Duration;
    pub use crate::error::Error;
    pub use crate::cal::unit::Unit;

    mod construction {
        use super::*;

        #[test]
        fn normalises_negative_adjustment() {
            assert_eq!(Duration::of_seconds_and_nanos(2, -1).unwrap().lengths(), (1, 999_999_999));
        }

        #[test]
        fn normalises_large_adjustment() {
            assert_eq!(Duration::of_seconds_and_nanos(1, 2_500_000_000).unwrap().lengths(), (3, 500_000_000));
        }

        #[test]
        fn adjustment_overflows() {
            assert_eq!(Duration::of_seconds_and_nanos(i64::MAX, 1_000_000_000), Err(Error::ArithmeticOverflow("of_seconds_and_nanos")));
        }

        #[test]
        fn negative_millis() {
            assert_eq!(Duration::of_millis(-1).lengths(), (-1, 999_000_000));
        }

        #[test]
        fn days_overflow() {
            assert!(Duration::of_days(i64::MAX / 86_400 + 1).is_err());
        }

        #[test]
        fn estimated_units() {
            assert_eq!(Duration::of(1, Unit::Months), Err(Error::EstimatedUnitRejected(Unit::Months)));
            assert_eq!(Duration::of(2, Unit::Days), Ok(Duration::of_seconds(172_800)));
        }
    }

    mod addition {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Ok(Duration::of_seconds(10)), Duration::of_seconds(2).plus(Duration::of_seconds(8)))
        }

        #[test]
        fn wrapping() {
            assert_eq!(Ok(Duration::of_millis(1_500)), Duration::of_millis(750).plus(Duration::of_millis(750)))
        }

        #[test]
        fn overflow() {
            assert!(Duration::MAX.plus_nanos(1).is_err());
        }

        #[test]
        fn minus_min() {
            assert_eq!(Duration::ZERO.minus_seconds(i64::MIN), Err(Error::ArithmeticOverflow("duration")));
            assert_eq!(Duration::of_seconds(-1).minus_seconds(i64::MIN), Ok(Duration::of_seconds(i64::MAX)));
        }
    }

    mod division {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of_seconds(6).divided_by(3), Ok(Duration::of_seconds(2)));
        }

        #[test]
        fn by_zero() {
            assert_eq!(Duration::of_seconds(6).divided_by(0), Err(Error::DivideByZero));
        }

        #[test]
        fn mixed_signs_truncate() {
            assert_eq!(Duration::of_seconds(-7).divided_by_duration(Duration::of_seconds(3)), Ok(-2));
            assert_eq!(Duration::of_seconds(7).divided_by_duration(Duration::of_seconds(-3)), Ok(-2));
        }

        #[test]
        fn min_by_minus_one() {
            assert!(Duration::MIN.divided_by(-1).is_err());
        }
    }

    mod truncation {
        use super::*;

        #[test]
        fn negative_toward_zero() {
            let duration = Duration::of_seconds_and_nanos(-2, 500_000_000).unwrap();
            assert_eq!(duration.truncated_to(Unit::Seconds), Ok(Duration::of_seconds(-1)));
        }

        #[test]
        fn minutes() {
            let duration = Duration::of_seconds(3_725);
            assert_eq!(duration.truncated_to(Unit::Minutes), Ok(Duration::of_seconds(3_720)));
        }

        #[test]
        fn days_allowed() {
            assert_eq!(Duration::of_seconds(90_000).truncated_to(Unit::Days), Ok(Duration::of_seconds(86_400)));
        }

        #[test]
        fn weeks_rejected() {
            assert_eq!(Duration::of_seconds(1).truncated_to(Unit::Weeks), Err(Error::UnsupportedUnit(Unit::Weeks)));
        }
    }

    mod parts {
        use super::*;

        #[test]
        fn negative_is_not_normalised() {
            let duration = Duration::of_seconds_and_nanos(-1, 500_000_000).unwrap();
            assert_eq!(duration.to_seconds_part(), -1);
            assert_eq!(duration.to_millis_part(), 500);
        }

        #[test]
        fn hours_and_minutes() {
            let duration = Duration::of_seconds(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);
            assert_eq!(duration.to_days_part(), 2);
            assert_eq!(duration.to_hours_part(), 3);
            assert_eq!(duration.to_minutes_part(), 4);
            assert_eq!(duration.to_seconds_part(), 5);
        }

        #[test]
        fn millis_truncate() {
            let duration = Duration::of_seconds_and_nanos(-1, 999_999).unwrap();
            assert_eq!(duration.to_millis(), Ok(-999));
        }

        #[test]
        fn nanos_overflow() {
            assert!(Duration::MAX.to_nanos().is_err());
        }
    }
}
