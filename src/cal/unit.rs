//! Units of time, used to measure and adjust the other values.

use std::fmt;

use crate::cal::{NANOS_PER_DAY, NANOS_PER_SECOND, SECONDS_PER_DAY};
use crate::duration::Duration;
use crate::error::{Error, Result};

use self::Unit::*;


/// A **unit** of time, such as seconds, days, or months.
///
/// The built-in units are all variants of this enum. Units that aren’t
/// built in can still be used by implementing `CustomUnit` and wrapping a
/// static reference to it in the `Custom` variant.
#[derive(Clone, Copy)]
pub enum Unit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,

    /// Twelve hours: the span of AM or PM.
    HalfDays,

    /// A day. This is treated as exactly 24 hours for the purposes of
    /// durations, but date arithmetic moves by whole calendar days.
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
    Custom(&'static dyn CustomUnit),
}

/// The capabilities a unit needs to be usable with the values in this
/// crate, for units that aren’t built in.
pub trait CustomUnit: Send + Sync {

    /// The unit’s name, used when formatting errors.
    fn name(&self) -> &str;

    /// The length of this unit. For estimated units, this is only an
    /// approximation.
    fn duration(&self) -> Duration;

    fn is_duration_estimated(&self) -> bool;

    fn is_date_based(&self) -> bool;

    fn is_time_based(&self) -> bool;

    /// Returns the number of whole units in the given span of time.
    fn between(&self, span: Duration) -> Result<i64> {
        span.divided_by_duration(self.duration())
    }

    /// Returns the span of time covered by the given number of units.
    fn add_to(&self, amount: i64) -> Result<Duration> {
        self.duration().multiplied_by(amount)
    }
}

/// Average length of a year in the Gregorian calendar, in seconds.
const SECONDS_PER_YEAR: i64 = 31_556_952;

impl Unit {

    /// Returns the length of this unit. The lengths of units from `Days`
    /// upwards are estimates: a month, for example, is counted as a
    /// twelfth of an average Gregorian year.
    pub fn duration(self) -> Duration {
        match self {
            Nanos       => Duration::from_parts(0, 1),
            Micros      => Duration::from_parts(0, 1_000),
            Millis      => Duration::from_parts(0, 1_000_000),
            Seconds     => Duration::from_parts(1, 0),
            Minutes     => Duration::from_parts(60, 0),
            Hours       => Duration::from_parts(3_600, 0),
            HalfDays    => Duration::from_parts(43_200, 0),
            Days        => Duration::from_parts(SECONDS_PER_DAY, 0),
            Weeks       => Duration::from_parts(7 * SECONDS_PER_DAY, 0),
            Months      => Duration::from_parts(SECONDS_PER_YEAR / 12, 0),
            Years       => Duration::from_parts(SECONDS_PER_YEAR, 0),
            Decades     => Duration::from_parts(SECONDS_PER_YEAR * 10, 0),
            Centuries   => Duration::from_parts(SECONDS_PER_YEAR * 100, 0),
            Millennia   => Duration::from_parts(SECONDS_PER_YEAR * 1000, 0),
            Custom(c)   => c.duration(),
        }
    }

    /// Whether the length of this unit varies. Days count as estimated,
    /// as a calendar day isn’t always 24 hours long once time zones get
    /// involved.
    pub fn is_duration_estimated(self) -> bool {
        match self {
            Custom(c) => c.is_duration_estimated(),
            _         => self.is_date_based(),
        }
    }

    /// Whether this unit moves a date, from days up to millennia.
    pub fn is_date_based(self) -> bool {
        match self {
            Days | Weeks | Months | Years | Decades | Centuries | Millennia => true,
            Custom(c) => c.is_date_based(),
            _         => false,
        }
    }

    /// Whether this unit moves a time of day, from nanoseconds up to
    /// half-days.
    pub fn is_time_based(self) -> bool {
        match self {
            Nanos | Micros | Millis | Seconds | Minutes | Hours | HalfDays => true,
            Custom(c) => c.is_time_based(),
            _         => false,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Nanos       => "Nanos",
            Micros      => "Micros",
            Millis      => "Millis",
            Seconds     => "Seconds",
            Minutes     => "Minutes",
            Hours       => "Hours",
            HalfDays    => "HalfDays",
            Days        => "Days",
            Weeks       => "Weeks",
            Months      => "Months",
            Years       => "Years",
            Decades     => "Decades",
            Centuries   => "Centuries",
            Millennia   => "Millennia",
            Custom(c)   => c.name(),
        }
    }

    /// The exact length of this unit in nanoseconds, for use when
    /// truncating a time of day. Only units no longer than a day that
    /// divide a day evenly qualify.
    pub(crate) fn truncation_nanos(self) -> Result<i64> {
        let duration = self.duration();
        if duration.seconds() > SECONDS_PER_DAY {
            return Err(Error::UnsupportedUnit(self));
        }

        let nanos = duration.to_nanos()?;
        if nanos <= 0 || NANOS_PER_DAY % nanos != 0 {
            return Err(Error::UnsupportedUnit(self));
        }

        Ok(nanos)
    }

    /// Counts the whole number of this time-based unit in a span given in
    /// nanoseconds, truncating any partial unit.
    pub(crate) fn count_in(self, nanos: i128) -> Result<i64> {
        let count = match self {
            Custom(c) if c.is_time_based() => return c.between(Duration::from_total_nanos(nanos)?),
            _ if self.is_time_based() => nanos / self.duration().to_total_nanos(),
            _ => return Err(Error::UnsupportedUnit(self)),
        };

        i64::try_from(count).map_err(|_| Error::ArithmeticOverflow("until"))
    }

    /// The span of time covered by `amount` of this time-based unit, in
    /// nanoseconds.
    pub(crate) fn span_of(self, amount: i64) -> Result<i128> {
        match self {
            Custom(c) if c.is_time_based() => Ok(c.add_to(amount)?.to_total_nanos()),
            _ if self.is_time_based() => Ok(i128::from(amount) * self.duration().to_total_nanos()),
            _ => Err(Error::UnsupportedUnit(self)),
        }
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Custom(a), Custom(b)) => std::ptr::addr_eq(*a, *b),
            (Custom(_), _) | (_, Custom(_)) => false,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Eq for Unit {}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Custom(c) => write!(f, "Custom({})", c.name()),
            _         => f.write_str(self.name()),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
