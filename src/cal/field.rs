//! Fields of dates and times, such as the day-of-month or hour-of-day.

use std::fmt;

use crate::cal::date::{MAX_YEAR, MIN_YEAR};
use crate::error::{Error, Result};

use self::Field::*;


/// A **field** of a date, time, or zoned date-time, which can be read with
/// `get` and replaced with `with`.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Field {
    NanoOfSecond,
    NanoOfDay,
    MicroOfSecond,
    MicroOfDay,
    MilliOfSecond,
    MilliOfDay,
    SecondOfMinute,
    SecondOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfAmPm,
    ClockHourOfAmPm,
    HourOfDay,
    ClockHourOfDay,
    AmPmOfDay,
    DayOfWeek,
    AlignedDayOfWeekInMonth,
    AlignedDayOfWeekInYear,
    DayOfMonth,
    DayOfYear,
    EpochDay,
    AlignedWeekOfMonth,
    AlignedWeekOfYear,
    MonthOfYear,
    ProlepticMonth,
    YearOfEra,
    Year,
    Era,
    InstantSeconds,
    OffsetSeconds,
}

/// The range of values a field can take.
///
/// Some fields have a maximum that depends on the rest of the value, such
/// as the day-of-month, so this keeps both the smallest possible maximum
/// and the largest one.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct ValueRange {
    min: i64,
    smallest_max: i64,
    max: i64,
}

impl ValueRange {

    /// A range with a fixed minimum and maximum.
    pub const fn of(min: i64, max: i64) -> Self {
        Self { min, smallest_max: max, max }
    }

    /// A range whose maximum varies between `smallest_max` and `max`.
    pub const fn varying(min: i64, smallest_max: i64, max: i64) -> Self {
        Self { min, smallest_max, max }
    }

    pub fn min(&self) -> i64 { self.min }
    pub fn smallest_max(&self) -> i64 { self.smallest_max }
    pub fn max(&self) -> i64 { self.max }

    pub fn is_valid_value(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether every value in this range fits in an `i32`.
    pub fn is_int_value(&self) -> bool {
        self.min >= i64::from(i32::MIN) && self.max <= i64::from(i32::MAX)
    }

    /// Checks the value against this range, reporting it as a value of
    /// the given field if it’s out of range.
    pub fn check_valid_value(&self, value: i64, field: Field) -> Result<i64> {
        if self.is_valid_value(value) {
            Ok(value)
        }
        else {
            Err(Error::FieldOutOfRange { field, value, min: self.min, max: self.max })
        }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.smallest_max == self.max {
            write!(f, "{} - {}", self.min, self.max)
        }
        else {
            write!(f, "{} - {}/{}", self.min, self.smallest_max, self.max)
        }
    }
}

const NANOS_PER_DAY: i64 = 86_400 * 1_000_000_000;

/// Epoch days of the first day of the earliest supported year, and the
/// last day of the latest one.
const MIN_EPOCH_DAY: i64 = -365_243_219_162;
const MAX_EPOCH_DAY: i64 = 365_241_780_471;

#[allow(clippy::match_same_arms)]
impl Field {

    /// Returns the outer range of values for this field. Fields whose
    /// maximum depends on the rest of the value report the largest one.
    pub fn range(self) -> ValueRange {
        match self {
            NanoOfSecond            => ValueRange::of(0, 999_999_999),
            NanoOfDay               => ValueRange::of(0, NANOS_PER_DAY - 1),
            MicroOfSecond           => ValueRange::of(0, 999_999),
            MicroOfDay              => ValueRange::of(0, NANOS_PER_DAY / 1_000 - 1),
            MilliOfSecond           => ValueRange::of(0, 999),
            MilliOfDay              => ValueRange::of(0, NANOS_PER_DAY / 1_000_000 - 1),
            SecondOfMinute          => ValueRange::of(0, 59),
            SecondOfDay             => ValueRange::of(0, 86_400 - 1),
            MinuteOfHour            => ValueRange::of(0, 59),
            MinuteOfDay             => ValueRange::of(0, 24 * 60 - 1),
            HourOfAmPm              => ValueRange::of(0, 11),
            ClockHourOfAmPm         => ValueRange::of(1, 12),
            HourOfDay               => ValueRange::of(0, 23),
            ClockHourOfDay          => ValueRange::of(1, 24),
            AmPmOfDay               => ValueRange::of(0, 1),
            DayOfWeek               => ValueRange::of(1, 7),
            AlignedDayOfWeekInMonth => ValueRange::of(1, 7),
            AlignedDayOfWeekInYear  => ValueRange::of(1, 7),
            DayOfMonth              => ValueRange::varying(1, 28, 31),
            DayOfYear               => ValueRange::varying(1, 365, 366),
            EpochDay                => ValueRange::of(MIN_EPOCH_DAY, MAX_EPOCH_DAY),
            AlignedWeekOfMonth      => ValueRange::varying(1, 4, 5),
            AlignedWeekOfYear       => ValueRange::of(1, 53),
            MonthOfYear             => ValueRange::of(1, 12),
            ProlepticMonth          => ValueRange::of(i64::from(MIN_YEAR) * 12, i64::from(MAX_YEAR) * 12 + 11),
            YearOfEra               => ValueRange::varying(1, i64::from(MAX_YEAR), i64::from(MAX_YEAR) + 1),
            Year                    => ValueRange::of(i64::from(MIN_YEAR), i64::from(MAX_YEAR)),
            Era                     => ValueRange::of(0, 1),
            InstantSeconds          => ValueRange::of(i64::MIN, i64::MAX),
            OffsetSeconds           => ValueRange::of(-18 * 3_600, 18 * 3_600),
        }
    }

    /// Checks that the value is within this field’s outer range.
    pub fn check_valid_value(self, value: i64) -> Result<i64> {
        self.range().check_valid_value(value, self)
    }

    /// Checks that the value is within this field’s outer range, and
    /// narrows it to an `i32`.
    pub(crate) fn check_valid_int_value(self, value: i64) -> Result<i32> {
        let value = self.check_valid_value(value)?;
        i32::try_from(value).map_err(|_| Error::UnsupportedField(self))
    }

    /// Whether this field is part of a date.
    pub fn is_date_based(self) -> bool {
        matches!(self,
            DayOfWeek | AlignedDayOfWeekInMonth | AlignedDayOfWeekInYear | DayOfMonth |
            DayOfYear | EpochDay | AlignedWeekOfMonth | AlignedWeekOfYear | MonthOfYear |
            ProlepticMonth | YearOfEra | Year | Era)
    }

    /// Whether this field is part of a time of day.
    pub fn is_time_based(self) -> bool {
        matches!(self,
            NanoOfSecond | NanoOfDay | MicroOfSecond | MicroOfDay | MilliOfSecond |
            MilliOfDay | SecondOfMinute | SecondOfDay | MinuteOfHour | MinuteOfDay |
            HourOfAmPm | ClockHourOfAmPm | HourOfDay | ClockHourOfDay | AmPmOfDay)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
