//! Times of day, with wraparound arithmetic.

use std::fmt;

use crate::cal::{TimePiece, NANOS_PER_DAY, NANOS_PER_SECOND};
use crate::cal::date::LocalDate;
use crate::cal::datetime::LocalDateTime;
use crate::cal::field::Field;
use crate::cal::unit::Unit;
use crate::clock::Clock;
use crate::config;
use crate::duration::{Duration, TimePoint};
use crate::error::{Error, Result};
use crate::util::split_wide_cycles;


const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;


/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
    nanosecond: i32,
}

impl LocalTime {

    /// The start of the day.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0, second: 0, nanosecond: 0 };

    /// The middle of the day.
    pub const NOON: Self = Self { hour: 12, minute: 0, second: 0, nanosecond: 0 };

    /// The earliest time of day, which is midnight.
    pub const MIN: Self = Self::MIDNIGHT;

    /// The last nanosecond of the day.
    pub const MAX: Self = Self { hour: 23, minute: 59, second: 59, nanosecond: 999_999_999 };

    /// Creates a new time from the given hour, minute, second, and
    /// nanosecond, checking each in that order.
    pub fn of(hour: i64, minute: i64, second: i64, nanosecond: i64) -> Result<Self> {
        let hour = Field::HourOfDay.check_valid_value(hour)? as i8;
        let minute = Field::MinuteOfHour.check_valid_value(minute)? as i8;
        let second = Field::SecondOfMinute.check_valid_value(second)? as i8;
        let nanosecond = Field::NanoOfSecond.check_valid_int_value(nanosecond)?;
        Ok(Self { hour, minute, second, nanosecond })
    }

    /// Creates a new time instance with the given hour and minute
    /// fields. The second and nanosecond fields are set to 0.
    pub fn hm(hour: i64, minute: i64) -> Result<Self> {
        Self::of(hour, minute, 0, 0)
    }

    /// Creates a new time instance with the given hour, minute, and
    /// second fields. The nanosecond field is set to 0.
    pub fn hms(hour: i64, minute: i64, second: i64) -> Result<Self> {
        Self::of(hour, minute, second, 0)
    }

    pub fn hms_ns(hour: i64, minute: i64, second: i64, nanosecond: i64) -> Result<Self> {
        Self::of(hour, minute, second, nanosecond)
    }

    /// Computes the hour, minute, and second from the number of seconds
    /// that have elapsed since midnight.
    pub fn of_second_of_day(seconds: i64) -> Result<Self> {
        let seconds = Field::SecondOfDay.check_valid_value(seconds)?;
        Ok(Self::from_nanos_since_midnight(seconds * NANOS_PER_SECOND))
    }

    /// Computes the time from the number of nanoseconds that have elapsed
    /// since midnight.
    pub fn of_nano_of_day(nanos: i64) -> Result<Self> {
        let nanos = Field::NanoOfDay.check_valid_value(nanos)?;
        Ok(Self::from_nanos_since_midnight(nanos))
    }

    /// Creates a new time set to the current time of day in the clock’s
    /// time zone.
    pub fn now_with(clock: &dyn Clock) -> Result<Self> {
        LocalDateTime::now_with(clock).map(|now| now.time())
    }

    pub fn now() -> Result<Self> {
        Self::now_with(&*config::defaults().clock)
    }

    /// The caller has to make sure the value is within a day.
    pub(crate) fn from_nanos_since_midnight(nanos: i64) -> Self {
        Self {
            hour:   (nanos / NANOS_PER_HOUR) as i8,
            minute: (nanos / NANOS_PER_MINUTE % 60) as i8,
            second: (nanos / NANOS_PER_SECOND % 60) as i8,
            nanosecond: (nanos % NANOS_PER_SECOND) as i32,
        }
    }

    /// Calculate the number of seconds since midnight this time is at,
    /// ignoring nanoseconds.
    pub fn to_second_of_day(&self) -> i64 {
        i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    pub fn to_nano_of_day(&self) -> i64 {
        self.to_second_of_day() * NANOS_PER_SECOND + i64::from(self.nanosecond)
    }

    /// Combines this time with a date.
    pub fn at_date(self, date: LocalDate) -> LocalDateTime {
        LocalDateTime::new(date, self)
    }
}


// ---- adjustment ----

impl LocalTime {

    pub fn with_hour(self, hour: i64) -> Result<Self> {
        let hour = Field::HourOfDay.check_valid_value(hour)? as i8;
        Ok(Self { hour, ..self })
    }

    pub fn with_minute(self, minute: i64) -> Result<Self> {
        let minute = Field::MinuteOfHour.check_valid_value(minute)? as i8;
        Ok(Self { minute, ..self })
    }

    pub fn with_second(self, second: i64) -> Result<Self> {
        let second = Field::SecondOfMinute.check_valid_value(second)? as i8;
        Ok(Self { second, ..self })
    }

    pub fn with_nanosecond(self, nanosecond: i64) -> Result<Self> {
        let nanosecond = Field::NanoOfSecond.check_valid_int_value(nanosecond)?;
        Ok(Self { nanosecond, ..self })
    }

    /// Returns a copy of this time with the given field changed.
    ///
    /// The whole-day fields of nanos, micros, and millis replace the entire
    /// time. `SecondOfDay` and `MinuteOfDay` do *not* fully replace it: they
    /// set the time down to their own precision and keep anything finer, so
    /// a second-of-day of 1 turns 10:15:30.5 into 00:00:01.5. The AM/PM fields move the
    /// hour within the same half of the day, or between halves.
    pub fn with(self, field: Field, value: i64) -> Result<Self> {
        if !field.is_time_based() {
            return Err(Error::UnsupportedField(field));
        }

        let value = field.check_valid_value(value)?;
        let hour = i64::from(self.hour);

        match field {
            Field::NanoOfSecond     => self.with_nanosecond(value),
            Field::NanoOfDay        => Self::of_nano_of_day(value),
            Field::MicroOfSecond    => self.with_nanosecond(value * 1_000),
            Field::MicroOfDay       => Self::of_nano_of_day(value * 1_000),
            Field::MilliOfSecond    => self.with_nanosecond(value * 1_000_000),
            Field::MilliOfDay       => Self::of_nano_of_day(value * 1_000_000),
            Field::SecondOfMinute   => self.with_second(value),
            Field::SecondOfDay      => Ok(self.plus_seconds(value - self.to_second_of_day())),
            Field::MinuteOfHour     => self.with_minute(value),
            Field::MinuteOfDay      => Ok(self.plus_minutes(value - (hour * 60 + i64::from(self.minute)))),
            Field::HourOfAmPm       => Ok(self.plus_hours(value - hour % 12)),
            Field::ClockHourOfAmPm  => Ok(self.plus_hours((if value == 12 { 0 } else { value }) - hour % 12)),
            Field::HourOfDay        => self.with_hour(value),
            Field::ClockHourOfDay   => self.with_hour(if value == 24 { 0 } else { value }),
            Field::AmPmOfDay        => Ok(self.plus_hours((value - hour / 12) * 12)),
            _                       => Err(Error::UnsupportedField(field)),
        }
    }

    /// Returns the value of the given field.
    pub fn get(&self, field: Field) -> Result<i64> {
        let hour = i64::from(self.hour);
        let nano_of_day = self.to_nano_of_day();

        Ok(match field {
            Field::NanoOfSecond     => i64::from(self.nanosecond),
            Field::NanoOfDay        => nano_of_day,
            Field::MicroOfSecond    => i64::from(self.nanosecond / 1_000),
            Field::MicroOfDay       => nano_of_day / 1_000,
            Field::MilliOfSecond    => i64::from(self.nanosecond / 1_000_000),
            Field::MilliOfDay       => nano_of_day / 1_000_000,
            Field::SecondOfMinute   => i64::from(self.second),
            Field::SecondOfDay      => self.to_second_of_day(),
            Field::MinuteOfHour     => i64::from(self.minute),
            Field::MinuteOfDay      => hour * 60 + i64::from(self.minute),
            Field::HourOfAmPm       => hour % 12,
            Field::ClockHourOfAmPm  => if hour % 12 == 0 { 12 } else { hour % 12 },
            Field::HourOfDay        => hour,
            Field::ClockHourOfDay   => if hour == 0 { 24 } else { hour },
            Field::AmPmOfDay        => hour / 12,
            _                       => return Err(Error::UnsupportedField(field)),
        })
    }

    pub fn is_supported(&self, field: Field) -> bool {
        field.is_time_based()
    }

    /// Drops any part of this time smaller than the given unit. The unit
    /// has to be no longer than a day, and divide a day evenly.
    pub fn truncated_to(self, unit: Unit) -> Result<Self> {
        if unit == Unit::Nanos {
            return Ok(self);
        }

        let unit_nanos = unit.truncation_nanos()?;
        let nano_of_day = self.to_nano_of_day();
        Ok(Self::from_nanos_since_midnight(nano_of_day / unit_nanos * unit_nanos))
    }
}


// ---- arithmetic ----

impl LocalTime {

    /// Moves this time by a number of nanoseconds, wrapping around
    /// midnight, and returns the new time along with the number of days
    /// that were crossed on the way, negative when moving backwards.
    ///
    /// Every other way of moving a time is built on this.
    pub(crate) fn overflowing_add_nanos(self, nanos: i128) -> (Self, i64) {
        let total = i128::from(self.to_nano_of_day()) + nanos;
        let (days, nano_of_day) = split_wide_cycles(total, i128::from(NANOS_PER_DAY));
        (Self::from_nanos_since_midnight(nano_of_day as i64), days as i64)
    }

    /// Moves this time by a span of time, and returns the new time along
    /// with the number of days that were crossed.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::{Duration, LocalTime};
    ///
    /// let late = LocalTime::hm(23, 0).unwrap();
    /// let (time, days) = late.overflowing_add(Duration::of_hours(2).unwrap());
    /// assert_eq!(time, LocalTime::hm(1, 0).unwrap());
    /// assert_eq!(days, 1);
    /// ```
    pub fn overflowing_add(self, span: Duration) -> (Self, i64) {
        self.overflowing_add_nanos(span.to_total_nanos())
    }

    pub fn plus_hours(self, hours: i64) -> Self {
        self.overflowing_add_nanos(i128::from(hours) * i128::from(NANOS_PER_HOUR)).0
    }

    pub fn plus_minutes(self, minutes: i64) -> Self {
        self.overflowing_add_nanos(i128::from(minutes) * i128::from(NANOS_PER_MINUTE)).0
    }

    pub fn plus_seconds(self, seconds: i64) -> Self {
        self.overflowing_add_nanos(i128::from(seconds) * i128::from(NANOS_PER_SECOND)).0
    }

    pub fn plus_nanos(self, nanos: i64) -> Self {
        self.overflowing_add_nanos(i128::from(nanos)).0
    }

    pub fn minus_hours(self, hours: i64) -> Self {
        self.overflowing_add_nanos(-i128::from(hours) * i128::from(NANOS_PER_HOUR)).0
    }

    pub fn minus_minutes(self, minutes: i64) -> Self {
        self.overflowing_add_nanos(-i128::from(minutes) * i128::from(NANOS_PER_MINUTE)).0
    }

    pub fn minus_seconds(self, seconds: i64) -> Self {
        self.overflowing_add_nanos(-i128::from(seconds) * i128::from(NANOS_PER_SECOND)).0
    }

    pub fn minus_nanos(self, nanos: i64) -> Self {
        self.overflowing_add_nanos(-i128::from(nanos)).0
    }

    /// Moves this time by a span of time, wrapping around midnight.
    pub fn plus_duration(self, span: Duration) -> Self {
        self.overflowing_add(span).0
    }

    pub fn minus_duration(self, span: Duration) -> Self {
        self.overflowing_add_nanos(-span.to_total_nanos()).0
    }

    /// Adds an amount of a time-based unit, wrapping around midnight.
    pub fn plus(self, amount: i64, unit: Unit) -> Result<Self> {
        Ok(self.overflowing_add_nanos(unit.span_of(amount)?).0)
    }

    pub fn minus(self, amount: i64, unit: Unit) -> Result<Self> {
        Ok(self.overflowing_add_nanos(-unit.span_of(amount)?).0)
    }

    /// Counts the whole number of the given time-based unit between this
    /// time and the end time, within the same day.
    pub fn until(&self, end: Self, unit: Unit) -> Result<i64> {
        unit.count_in(self.nanos_until(&end))
    }
}

impl TimePoint for LocalTime {
    fn nanos_until(&self, end: &Self) -> i128 {
        i128::from(end.to_nano_of_day() - self.to_nano_of_day())
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn nanosecond(&self) -> i32 { self.nanosecond }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime({})", self)
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::*;
    pub(crate) use crate::cal::SECONDS_PER_DAY;

    mod construction {
        use super::*;

        #[test]
        fn order_of_checks() {
            assert!(matches!(LocalTime::of(24, 60, 0, 0), Err(Error::FieldOutOfRange { field: Field::HourOfDay, .. })));
            assert!(matches!(LocalTime::of(23, 60, 60, 0), Err(Error::FieldOutOfRange { field: Field::MinuteOfHour, .. })));
            assert!(matches!(LocalTime::of(23, 59, 59, 1_000_000_000), Err(Error::FieldOutOfRange { field: Field::NanoOfSecond, .. })));
        }

        #[test]
        fn of_nano_of_day() {
            let time = LocalTime::of_nano_of_day(60 * 60 * 1_000_000_000 + 17).unwrap();
            assert_eq!(time, LocalTime::of(1, 0, 0, 17).unwrap());
        }

        #[test]
        fn second_of_day_range() {
            assert!(LocalTime::of_second_of_day(86_400).is_err());
            assert_eq!(LocalTime::of_second_of_day(86_399), LocalTime::hms(23, 59, 59));
        }
    }

    mod carry {
        use super::*;

        #[test]
        fn forwards() {
            let (time, days) = LocalTime::hm(23, 0).unwrap().overflowing_add_nanos(i128::from(25 * NANOS_PER_HOUR));
            assert_eq!(time, LocalTime::hm(0, 0).unwrap());
            assert_eq!(days, 2);
        }

        #[test]
        fn backwards() {
            let (time, days) = LocalTime::hm(1, 0).unwrap().overflowing_add_nanos(-i128::from(NANOS_PER_HOUR * 2));
            assert_eq!(time, LocalTime::hm(23, 0).unwrap());
            assert_eq!(days, -1);
        }

        #[test]
        fn extreme_seconds_fit() {
            let (_, days) = LocalTime::MIDNIGHT.overflowing_add_nanos(i128::from(i64::MAX) * i128::from(NANOS_PER_SECOND));
            assert_eq!(days, i64::MAX / SECONDS_PER_DAY);
        }
    }

    mod fields {
        use super::*;

        #[test]
        fn clock_hours() {
            let time = LocalTime::hm(0, 30).unwrap();
            assert_eq!(time.get(Field::ClockHourOfDay), Ok(24));
            assert_eq!(time.get(Field::ClockHourOfAmPm), Ok(12));
        }

        #[test]
        fn second_of_day_keeps_nanos() {
            let time = LocalTime::of(12, 0, 0, 500).unwrap();
            assert_eq!(time.with(Field::SecondOfDay, 1), LocalTime::of(0, 0, 1, 500));
        }

        #[test]
        fn milli_of_day_replaces() {
            let time = LocalTime::of(12, 0, 0, 500).unwrap();
            assert_eq!(time.with(Field::MilliOfDay, 1), LocalTime::of(0, 0, 0, 1_000_000));
        }

        #[test]
        fn am_pm() {
            let time = LocalTime::hm(9, 15).unwrap();
            assert_eq!(time.with(Field::AmPmOfDay, 1), LocalTime::hm(21, 15));
            assert_eq!(time.with(Field::ClockHourOfAmPm, 12), LocalTime::hm(0, 15));
        }

        #[test]
        fn date_fields_unsupported() {
            assert_eq!(LocalTime::NOON.get(Field::DayOfMonth), Err(Error::UnsupportedField(Field::DayOfMonth)));
        }
    }

    mod until {
        use super::*;

        #[test]
        fn hours_truncate() {
            let start = LocalTime::hm(10, 30).unwrap();
            assert_eq!(start.until(LocalTime::hm(12, 29).unwrap(), Unit::Hours), Ok(1));
            assert_eq!(start.until(LocalTime::hm(8, 31).unwrap(), Unit::Hours), Ok(-1));
        }

        #[test]
        fn days_unsupported() {
            assert_eq!(LocalTime::NOON.until(LocalTime::MIDNIGHT, Unit::Days), Err(Error::UnsupportedUnit(Unit::Days)));
        }
    }
}
