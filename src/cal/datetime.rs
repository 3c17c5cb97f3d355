//! Dates combined with times of day, still without a time zone.

use std::fmt;

use crate::cal::{DatePiece, TimePiece, NANOS_PER_DAY, NANOS_PER_SECOND, SECONDS_PER_DAY};
use crate::cal::date::{LocalDate, Month, Weekday};
use crate::cal::field::{Field, ValueRange};
use crate::cal::offset::Offset;
use crate::cal::time::LocalTime;
use crate::cal::unit::Unit;
use crate::cal::zone::TimeZone;
use crate::cal::zoned::ZonedDateTime;
use crate::clock::Clock;
use crate::config;
use crate::duration::{Duration, TimePoint};
use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::util::split_wide_cycles;


/// A **local date-time** is an exact instant on the timeline, *without a
/// time zone*.
///
/// Values are ordered by date, then by time.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}

impl LocalDateTime {

    /// The earliest date-time that can be represented.
    pub const MIN: Self = Self { date: LocalDate::MIN, time: LocalTime::MIN };

    /// The latest date-time that can be represented.
    pub const MAX: Self = Self { date: LocalDate::MAX, time: LocalTime::MAX };

    /// Creates a new local date time from a local date and a local time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self {
            date,
            time,
        }
    }

    /// Creates a new date-time from its fields, checking the year, month,
    /// day, hour, and minute in that order.
    pub fn ymd_hm(year: i64, month: i64, day: i64, hour: i64, minute: i64) -> Result<Self> {
        Self::ymd_hms_ns(year, month, day, hour, minute, 0, 0)
    }

    pub fn ymd_hms(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Result<Self> {
        Self::ymd_hms_ns(year, month, day, hour, minute, second, 0)
    }

    /// Creates a new date-time from every one of its fields, reporting the
    /// first one that’s out of range, from the year down to the nanosecond.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::{Field, LocalDateTime, Error};
    ///
    /// let result = LocalDateTime::ymd_hm(i64::from(i32::MIN), 7, 15, 12, 30);
    /// assert!(matches!(result, Err(Error::FieldOutOfRange { field: Field::Year, .. })));
    /// ```
    pub fn ymd_hms_ns(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64, nanosecond: i64) -> Result<Self> {
        let date = LocalDate::of(year, month, day)?;
        let time = LocalTime::of(hour, minute, second, nanosecond)?;
        Ok(Self::new(date, time))
    }

    /// Computes the local date-time at an instant, given as seconds since
    /// the Unix epoch plus a nanosecond-of-second, as seen from a place
    /// with the given offset.
    pub fn from_epoch_second(epoch_second: i64, nanosecond: i64, offset: Offset) -> Result<Self> {
        let nanosecond = Field::NanoOfSecond.check_valid_value(nanosecond)?;
        let local_second = i128::from(epoch_second) + i128::from(offset.total_seconds());
        let (days, second_of_day) = split_wide_cycles(local_second, i128::from(SECONDS_PER_DAY));

        let epoch_day = i64::try_from(days).map_err(|_| Error::ArithmeticOverflow("from_epoch_second"))?;
        let date = LocalDate::from_epoch_day(epoch_day)?;
        let time = LocalTime::from_nanos_since_midnight(second_of_day as i64 * NANOS_PER_SECOND + nanosecond);
        Ok(Self::new(date, time))
    }

    /// Creates a new date-time set to the current time in the clock’s time
    /// zone.
    pub fn now_with(clock: &dyn Clock) -> Result<Self> {
        let instant = clock.instant();
        let offset = clock.zone().rules().offset_at(instant);
        Self::from_epoch_second(instant.seconds(), i64::from(instant.nanos()), offset)
    }

    /// Creates a new date-time set to the current time, using the
    /// process-wide clock.
    pub fn now() -> Result<Self> {
        Self::now_with(&*config::defaults().clock)
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// The number of seconds since the Unix epoch at which this date-time
    /// occurs, in a place with the given offset.
    pub fn to_epoch_second(&self, offset: Offset) -> i64 {
        self.date.to_epoch_second_at_midnight() + self.time.to_second_of_day() - i64::from(offset.total_seconds())
    }

    pub fn to_instant(&self, offset: Offset) -> Instant {
        Instant::from_parts(self.to_epoch_second(offset), self.time.nanosecond())
    }

    /// Resolves this date-time in a time zone. See `ZonedDateTime::of`.
    pub fn at_zone(self, zone: TimeZone) -> Result<ZonedDateTime> {
        ZonedDateTime::of(self, zone)
    }

    fn with_date(self, date: LocalDate) -> Self {
        Self { date, time: self.time }
    }

    fn with_time(self, time: LocalTime) -> Self {
        Self { date: self.date, time }
    }

    /// The number of nanoseconds since the start of the Unix epoch day,
    /// not adjusted for any offset.
    fn local_nanos(&self) -> i128 {
        i128::from(self.date.to_epoch_day()) * i128::from(NANOS_PER_DAY) + i128::from(self.time.to_nano_of_day())
    }
}


// ---- adjustment ----

impl LocalDateTime {

    pub fn with_year(self, year: i64) -> Result<Self> {
        Ok(self.with_date(self.date.with_year(year)?))
    }

    pub fn with_month(self, month: i64) -> Result<Self> {
        Ok(self.with_date(self.date.with_month(month)?))
    }

    pub fn with_day_of_month(self, day: i64) -> Result<Self> {
        Ok(self.with_date(self.date.with_day_of_month(day)?))
    }

    pub fn with_day_of_year(self, yearday: i64) -> Result<Self> {
        Ok(self.with_date(self.date.with_day_of_year(yearday)?))
    }

    pub fn with_hour(self, hour: i64) -> Result<Self> {
        Ok(self.with_time(self.time.with_hour(hour)?))
    }

    pub fn with_minute(self, minute: i64) -> Result<Self> {
        Ok(self.with_time(self.time.with_minute(minute)?))
    }

    pub fn with_second(self, second: i64) -> Result<Self> {
        Ok(self.with_time(self.time.with_second(second)?))
    }

    pub fn with_nanosecond(self, nanosecond: i64) -> Result<Self> {
        Ok(self.with_time(self.time.with_nanosecond(nanosecond)?))
    }

    /// Returns a copy of this date-time with the given field changed.
    /// Date fields leave the time alone, and time fields leave the date
    /// alone.
    pub fn with(self, field: Field, value: i64) -> Result<Self> {
        if field.is_date_based() {
            Ok(self.with_date(self.date.with(field, value)?))
        }
        else if field.is_time_based() {
            Ok(self.with_time(self.time.with(field, value)?))
        }
        else {
            Err(Error::UnsupportedField(field))
        }
    }

    pub fn get(&self, field: Field) -> Result<i64> {
        if field.is_time_based() { self.time.get(field) } else { self.date.get(field) }
    }

    pub fn is_supported(&self, field: Field) -> bool {
        field.is_date_based() || field.is_time_based()
    }

    pub fn range(&self, field: Field) -> Result<ValueRange> {
        if field.is_time_based() { Ok(field.range()) } else { self.date.range(field) }
    }

    /// Drops any part of the time smaller than the given unit. Truncating
    /// to days gives midnight at the start of the date.
    pub fn truncated_to(self, unit: Unit) -> Result<Self> {
        Ok(self.with_time(self.time.truncated_to(unit)?))
    }
}


// ---- arithmetic ----

impl LocalDateTime {

    /// Moves the time by a number of nanoseconds, carrying any whole days
    /// over into the date.
    ///
    /// All of the time-based arithmetic ends up here.
    fn plus_span(self, nanos: i128) -> Result<Self> {
        if nanos == 0 {
            return Ok(self);
        }

        let (time, days) = self.time.overflowing_add_nanos(nanos);
        Ok(Self::new(self.date.plus_days(days)?, time))
    }

    pub fn plus_years(self, years: i64) -> Result<Self> {
        Ok(self.with_date(self.date.plus_years(years)?))
    }

    pub fn plus_months(self, months: i64) -> Result<Self> {
        Ok(self.with_date(self.date.plus_months(months)?))
    }

    pub fn plus_weeks(self, weeks: i64) -> Result<Self> {
        Ok(self.with_date(self.date.plus_weeks(weeks)?))
    }

    pub fn plus_days(self, days: i64) -> Result<Self> {
        Ok(self.with_date(self.date.plus_days(days)?))
    }

    pub fn plus_hours(self, hours: i64) -> Result<Self> {
        self.plus(hours, Unit::Hours)
    }

    pub fn plus_minutes(self, minutes: i64) -> Result<Self> {
        self.plus(minutes, Unit::Minutes)
    }

    pub fn plus_seconds(self, seconds: i64) -> Result<Self> {
        self.plus(seconds, Unit::Seconds)
    }

    pub fn plus_nanos(self, nanos: i64) -> Result<Self> {
        self.plus(nanos, Unit::Nanos)
    }

    pub fn minus_years(self, years: i64) -> Result<Self> {
        Ok(self.with_date(self.date.minus_years(years)?))
    }

    pub fn minus_months(self, months: i64) -> Result<Self> {
        Ok(self.with_date(self.date.minus_months(months)?))
    }

    pub fn minus_weeks(self, weeks: i64) -> Result<Self> {
        Ok(self.with_date(self.date.minus_weeks(weeks)?))
    }

    pub fn minus_days(self, days: i64) -> Result<Self> {
        Ok(self.with_date(self.date.minus_days(days)?))
    }

    pub fn minus_hours(self, hours: i64) -> Result<Self> {
        self.minus(hours, Unit::Hours)
    }

    pub fn minus_minutes(self, minutes: i64) -> Result<Self> {
        self.minus(minutes, Unit::Minutes)
    }

    pub fn minus_seconds(self, seconds: i64) -> Result<Self> {
        self.minus(seconds, Unit::Seconds)
    }

    pub fn minus_nanos(self, nanos: i64) -> Result<Self> {
        self.minus(nanos, Unit::Nanos)
    }

    /// Moves this date-time by an exact span of time.
    pub fn plus_duration(self, span: Duration) -> Result<Self> {
        self.plus_span(span.to_total_nanos())
    }

    pub fn minus_duration(self, span: Duration) -> Result<Self> {
        self.plus_span(-span.to_total_nanos())
    }

    /// Adds an amount of the given unit. Date-based units move the date
    /// and leave the time alone; time-based units move the time and carry
    /// whole days over into the date.
    pub fn plus(self, amount: i64, unit: Unit) -> Result<Self> {
        if unit.is_time_based() {
            self.plus_span(unit.span_of(amount)?)
        }
        else {
            Ok(self.with_date(self.date.plus(amount, unit)?))
        }
    }

    pub fn minus(self, amount: i64, unit: Unit) -> Result<Self> {
        if unit.is_time_based() {
            self.plus_span(-unit.span_of(amount)?)
        }
        else {
            Ok(self.with_date(self.date.minus(amount, unit)?))
        }
    }

    /// Counts the whole number of the given unit between this date-time and
    /// the end one.
    ///
    /// For date-based units, a final day only counts once the end’s time of
    /// day has caught up with this one’s. Time-based units count the exact
    /// span between the two.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::{LocalDateTime, Unit};
    ///
    /// let start = LocalDateTime::ymd_hm(2008, 6, 30, 12, 0).unwrap();
    /// let end = LocalDateTime::ymd_hm(2008, 7, 1, 11, 0).unwrap();
    /// assert_eq!(start.until(end, Unit::Days), Ok(0));
    /// assert_eq!(start.until(end, Unit::Hours), Ok(23));
    /// ```
    pub fn until(&self, end: Self, unit: Unit) -> Result<i64> {
        if unit.is_time_based() {
            return unit.count_in(self.nanos_until(&end));
        }

        let mut end_date = end.date;
        if end_date > self.date && end.time < self.time {
            end_date = end_date.minus_days(1)?;
        }
        else if end_date < self.date && end.time > self.time {
            end_date = end_date.plus_days(1)?;
        }

        self.date.until(end_date, unit)
    }
}

impl TimePoint for LocalDateTime {
    fn nanos_until(&self, end: &Self) -> i128 {
        end.local_nanos() - self.local_nanos()
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i32 { self.date.year() }
    fn month(&self) -> Month { self.date.month() }
    fn day(&self) -> i8 { self.date.day() }
    fn yearday(&self) -> i16 { self.date.yearday() }
    fn weekday(&self) -> Weekday { self.date.weekday() }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour() }
    fn minute(&self) -> i8 { self.time.minute() }
    fn second(&self) -> i8 { self.time.second() }
    fn nanosecond(&self) -> i32 { self.time.nanosecond() }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime({})", self)
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::*;

    #[test]
    fn validation_order() {
        assert!(matches!(LocalDateTime::ymd_hm(2008, 13, 32, 24, 60), Err(Error::FieldOutOfRange { field: Field::MonthOfYear, .. })));
        assert!(matches!(LocalDateTime::ymd_hm(2008, 12, 31, 24, 60), Err(Error::FieldOutOfRange { field: Field::HourOfDay, .. })));
        assert!(matches!(LocalDateTime::ymd_hms(2008, 12, 31, 23, 59, 60), Err(Error::FieldOutOfRange { field: Field::SecondOfMinute, .. })));
    }

    #[test]
    fn epoch_seconds() {
        let then = LocalDateTime::ymd_hms(2009, 2, 13, 23, 31, 30).unwrap();
        assert_eq!(then.to_epoch_second(Offset::UTC), 1_234_567_890);
        assert_eq!(LocalDateTime::from_epoch_second(1_234_567_890, 0, Offset::UTC), Ok(then));
    }

    #[test]
    fn before_the_epoch() {
        let then = LocalDateTime::from_epoch_second(-1, 500, Offset::UTC).unwrap();
        assert_eq!(then, LocalDateTime::ymd_hms_ns(1969, 12, 31, 23, 59, 59, 500).unwrap());
    }

    #[test]
    fn offset_moves_the_wall_clock() {
        let offset = Offset::of_hours(2).unwrap();
        let then = LocalDateTime::from_epoch_second(0, 0, offset).unwrap();
        assert_eq!(then, LocalDateTime::ymd_hm(1970, 1, 1, 2, 0).unwrap());
        assert_eq!(then.to_epoch_second(offset), 0);
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn hours_carry_into_date() {
            let then = LocalDateTime::ymd_hm(2008, 12, 31, 23, 0).unwrap();
            assert_eq!(then.plus_hours(2), LocalDateTime::ymd_hm(2009, 1, 1, 1, 0));
            assert_eq!(then.minus_hours(24), LocalDateTime::ymd_hm(2008, 12, 30, 23, 0));
        }

        #[test]
        fn days_leave_time_alone() {
            let then = LocalDateTime::ymd_hm(2008, 2, 28, 12, 0).unwrap();
            assert_eq!(then.plus(1, Unit::Days), LocalDateTime::ymd_hm(2008, 2, 29, 12, 0));
        }

        #[test]
        fn days_overflow() {
            let then = LocalDateTime::ymd_hm(999_999_999, 1, 1, 0, 0).unwrap();
            assert_eq!(then.plus_days(i64::MAX), Err(Error::ArithmeticOverflow("plus_days")));
        }

        #[test]
        fn past_the_end() {
            assert!(matches!(LocalDateTime::MAX.plus_nanos(1), Err(Error::FieldOutOfRange { field: Field::EpochDay, .. })));
        }
    }

    mod until {
        use super::*;

        #[test]
        fn partial_day_is_dropped() {
            let start = LocalDateTime::ymd_hm(2008, 6, 30, 12, 0).unwrap();
            let end = LocalDateTime::ymd_hm(2008, 6, 28, 13, 0).unwrap();
            assert_eq!(start.until(end, Unit::Days), Ok(-1));
        }

        #[test]
        fn across_midnight() {
            let start = LocalDateTime::ymd_hm(2008, 6, 30, 23, 0).unwrap();
            let end = LocalDateTime::ymd_hm(2008, 7, 1, 1, 0).unwrap();
            assert_eq!(start.until(end, Unit::Hours), Ok(2));
            assert_eq!(start.until(end, Unit::HalfDays), Ok(0));
        }

        #[test]
        fn months() {
            let start = LocalDateTime::ymd_hm(2008, 1, 31, 12, 0).unwrap();
            assert_eq!(start.until(LocalDateTime::ymd_hm(2008, 2, 29, 12, 0).unwrap(), Unit::Months), Ok(0));
            assert_eq!(start.until(LocalDateTime::ymd_hm(2008, 3, 31, 11, 59).unwrap(), Unit::Months), Ok(1));
            assert_eq!(start.until(LocalDateTime::ymd_hm(2008, 3, 31, 12, 0).unwrap(), Unit::Months), Ok(2));
        }
    }

    mod debug {
        use super::*;

        #[test]
        fn ascending() {
            let then = LocalDateTime::new(
                        LocalDate::of(2009, 2, 13).unwrap(),
                        LocalTime::hms(23, 31, 30).unwrap());
            assert_eq!(format!("{:?}", then), "LocalDateTime(2009-02-13T23:31:30)");
        }
    }
}
