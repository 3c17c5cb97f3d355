//! Dates, months, and weekdays.

use std::cmp::min;
use std::fmt;

use crate::cal::{DatePiece, SECONDS_PER_DAY};
use crate::cal::datetime::LocalDateTime;
use crate::cal::field::{Field, ValueRange};
use crate::cal::time::LocalTime;
use crate::cal::unit::Unit;
use crate::clock::Clock;
use crate::config;
use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::util::{split_cycles, OrOverflow};

use self::Month::*;
use self::Weekday::*;


/// The earliest year that can be represented.
pub(crate) const MIN_YEAR: i32 = -999_999_999;

/// The latest year that can be represented.
pub(crate) const MAX_YEAR: i32 = 999_999_999;


/// A single year.
///
/// This is just a wrapper around `i32` that performs year-related tests.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Year(pub i32);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.0 % 4 == 0 && (self.0 % 100 != 0 || self.0 % 400 == 0)
    }

    /// Returns the number of days in this year.
    pub fn length(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;


/// Number of days between  **1st January, 1970** and **1st March, 2000**.
///
/// Counting from immediately after a possible leap day means the leap day
/// always falls at the very end of a cycle, so turning a number of days
/// into a year, month, and day comes down to simple division.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.

/// The number of days between the 1st of March and the start of each
/// month, in a year that starts in March.
const MARCH_MONTH_STARTS: [i64; 12] =
    [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337];


/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
///
/// Every value is a real date in the proleptic Gregorian calendar, between
/// the years -999,999,999 and 999,999,999.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalDate {
    year:  i32,
    month: Month,
    day:   i8,
}

impl LocalDate {

    /// The earliest date that can be represented.
    pub const MIN: Self = Self { year: MIN_YEAR, month: January, day: 1 };

    /// The latest date that can be represented.
    pub const MAX: Self = Self { year: MAX_YEAR, month: December, day: 31 };

    /// The 1st of January 1970.
    pub const EPOCH: Self = Self { year: 1970, month: January, day: 1 };

    /// Creates a new local date from the given year, month, and day
    /// numbers.
    ///
    /// The year is checked first, then the month, then the day, and the
    /// error names the first field found to be out of range. In-range
    /// fields that don’t make a date, such as the 30th of February, are
    /// rejected as an invalid combination.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::of(1969, 7, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::of(2100, 2, 29).is_err());
    /// ```
    pub fn of(year: i64, month: i64, day: i64) -> Result<Self> {
        let year = Field::Year.check_valid_int_value(year)?;
        let month = Month::from_one(month)?;
        let day = Field::DayOfMonth.check_valid_value(day)? as i8;
        Self::create(year, month, day)
    }

    /// Creates a new local date from the given year, month, and day.
    pub fn ymd(year: i64, month: Month, day: i64) -> Result<Self> {
        Self::of(year, month as i64, day)
    }

    /// Creates a new local date from the given year and day-of-year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2015, 0x100).unwrap();
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self> {
        let year = Field::Year.check_valid_int_value(year)?;
        let yearday = Field::DayOfYear.check_valid_value(yearday)?;
        let leap = Year(year).is_leap_year();

        if yearday == 366 && !leap {
            return Err(Error::InvalidFieldCombination {
                fields: &[Field::Year, Field::DayOfYear],
                detail: format!("Invalid date 'DayOfYear 366' as '{}' is not a leap year", year),
            });
        }

        let month = Month::from_day_of_year(yearday, leap);
        let day = yearday - month.first_day_of_year(leap) + 1;
        Ok(Self { year, month, day: day as i8 })
    }

    /// Creates a local date from a number of days since the 1st of January
    /// 1970, which may be negative.
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self> {
        let epoch_day = Field::EpochDay.check_valid_value(epoch_day)?;
        Ok(Self::from_days_since_epoch(epoch_day - EPOCH_DIFFERENCE))
    }

    /// Creates a new local date set to the current date in the clock’s
    /// time zone.
    pub fn now_with(clock: &dyn Clock) -> Result<Self> {
        LocalDateTime::now_with(clock).map(|now| now.date())
    }

    /// Creates a new local date set to the current date, using the
    /// process-wide clock.
    pub fn now() -> Result<Self> {
        Self::now_with(&*config::defaults().clock)
    }

    /// Checks that the day exists in the month, now that each has been
    /// checked on its own.
    fn create(year: i32, month: Month, day: i8) -> Result<Self> {
        let leap = Year(year).is_leap_year();
        if day > month.days_in_month(leap) {
            let detail = if day == 29 {
                format!("Invalid date 'February 29' as '{}' is not a leap year", year)
            }
            else {
                format!("Invalid date '{} {}'", month.name(), day)
            };

            return Err(Error::InvalidFieldCombination { fields: &[Field::MonthOfYear, Field::DayOfMonth], detail });
        }

        Ok(Self { year, month, day })
    }

    /// Creates a date, moving the day back to the last day of the month if
    /// the month is too short for it.
    fn resolve_previous_valid(year: i32, month: Month, day: i8) -> Self {
        let day = min(day, month.days_in_month(Year(year).is_leap_year()));
        Self { year, month, day }
    }

    /// Computes a date given the number of days that have passed since
    /// **1st March, 2000**.
    ///
    /// This is used by all the other constructor functions.
    fn from_days_since_epoch(days: i64) -> Self {

        // The Gregorian calendar works in 400-year cycles, which repeat
        // themselves ever after.
        //
        // This calculation works by finding the number of 400-year,
        // 100-year, and 4-year cycles, then constantly subtracting the
        // number of leftover days.
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        // The last day of a 400-year cycle is a leap day that the 100-year
        // cycles don’t have room for, so there can only be three whole
        // 100-year cycles before it.
        let num_100y_cycles = min(remainder / DAYS_IN_100Y, 3);
        remainder -= num_100y_cycles * DAYS_IN_100Y;

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;

        // Likewise, the fourth year of a 4-year cycle can end in a leap day.
        let years = min(remainder / 365, 3);
        remainder -= years * 365;  // remainder is now days since the 1st of March

        let march_month = MARCH_MONTH_STARTS.iter()
                                            .rposition(|&start| start <= remainder)
                                            .unwrap_or(0);

        let day = remainder - MARCH_MONTH_STARTS[march_month] + 1;

        // Turn all those cycles into an actual number of years, moving
        // January and February into the next year.
        let mut year = 2000 + years + 4 * num_4y_cycles + 100 * num_100y_cycles + 400 * num_400y_cycles;
        let month = Month::March.plus(march_month as i64);
        if month < March {
            year += 1;
        }

        Self { year: year as i32, month, day: day as i8 }
    }

    /// Calculates the number of days since **1st January, 1970**.
    pub fn to_epoch_day(&self) -> i64 {
        // Count years as starting on the 1st of March, so any leap day
        // comes at the end of one.
        let (year, march_month) = if self.month < March {
            (i64::from(self.year) - 1, self.month as usize + 9)
        }
        else {
            (i64::from(self.year), self.month as usize - 3)
        };

        let (num_400y_cycles, year_of_cycle) = split_cycles(year - 2000, 400);
        let day_of_year = MARCH_MONTH_STARTS[march_month] + i64::from(self.day) - 1;
        let day_of_cycle = year_of_cycle * 365 + year_of_cycle / 4 - year_of_cycle / 100 + day_of_year;

        num_400y_cycles * DAYS_IN_400Y + day_of_cycle + EPOCH_DIFFERENCE
    }

    /// The month number, plus twelve for every year since year zero.
    fn proleptic_month(&self) -> i64 {
        i64::from(self.year) * 12 + self.month as i64 - 1
    }

    pub fn is_leap_year(&self) -> bool {
        Year(self.year).is_leap_year()
    }

    pub fn length_of_month(&self) -> i8 {
        self.month.days_in_month(self.is_leap_year())
    }

    pub fn length_of_year(&self) -> i16 {
        Year(self.year).length()
    }

    /// Combines this date with a time of day.
    pub fn at_time(self, time: LocalTime) -> LocalDateTime {
        LocalDateTime::new(self, time)
    }

    /// Combines this date with the time of midnight.
    pub fn at_start_of_day(self) -> LocalDateTime {
        LocalDateTime::new(self, LocalTime::MIDNIGHT)
    }
}


// ---- adjustment ----

impl LocalDate {

    /// Returns a copy of this date with the year changed. If the day
    /// doesn’t exist in that year, the last day of the month is used.
    pub fn with_year(self, year: i64) -> Result<Self> {
        let year = Field::Year.check_valid_int_value(year)?;
        if year == self.year {
            return Ok(self);
        }

        Ok(Self::resolve_previous_valid(year, self.month, self.day))
    }

    /// Returns a copy of this date with the month changed. If the day
    /// doesn’t exist in that month, the last day of the month is used.
    pub fn with_month(self, month: i64) -> Result<Self> {
        let month = Month::from_one(month)?;
        if month == self.month {
            return Ok(self);
        }

        Ok(Self::resolve_previous_valid(self.year, month, self.day))
    }

    /// Returns a copy of this date with the day-of-month changed, failing
    /// if the month doesn’t have that day.
    pub fn with_day_of_month(self, day: i64) -> Result<Self> {
        if day == i64::from(self.day) {
            return Ok(self);
        }

        Self::of(i64::from(self.year), self.month as i64, day)
    }

    /// Returns a copy of this date with the day-of-year changed, failing
    /// if the year doesn’t have that day.
    pub fn with_day_of_year(self, yearday: i64) -> Result<Self> {
        if yearday == i64::from(self.yearday()) {
            return Ok(self);
        }

        Self::yd(i64::from(self.year), yearday)
    }

    /// Returns a copy of this date with the given field changed.
    pub fn with(self, field: Field, value: i64) -> Result<Self> {
        if !field.is_date_based() {
            return Err(Error::UnsupportedField(field));
        }

        let value = field.check_valid_value(value)?;
        match field {
            Field::DayOfWeek
            | Field::AlignedDayOfWeekInMonth
            | Field::AlignedDayOfWeekInYear => self.plus_days(value - self.get(field)?),
            Field::DayOfMonth               => self.with_day_of_month(value),
            Field::DayOfYear                => self.with_day_of_year(value),
            Field::EpochDay                 => Self::from_epoch_day(value),
            Field::AlignedWeekOfMonth
            | Field::AlignedWeekOfYear      => self.plus_weeks(value - self.get(field)?),
            Field::MonthOfYear              => self.with_month(value),
            Field::ProlepticMonth           => self.plus_months(value - self.proleptic_month()),
            Field::YearOfEra                => self.with_year(if self.year >= 1 { value } else { 1 - value }),
            Field::Year                     => self.with_year(value),
            Field::Era if value == self.get(Field::Era)? => Ok(self),
            Field::Era                      => self.with_year(1 - i64::from(self.year)),
            _                               => Err(Error::UnsupportedField(field)),
        }
    }

    /// Returns the value of the given field.
    pub fn get(&self, field: Field) -> Result<i64> {
        let day = i64::from(self.day);
        let yearday = i64::from(self.yearday());

        Ok(match field {
            Field::DayOfWeek                => self.weekday() as i64,
            Field::AlignedDayOfWeekInMonth  => (day - 1) % 7 + 1,
            Field::AlignedDayOfWeekInYear   => (yearday - 1) % 7 + 1,
            Field::DayOfMonth               => day,
            Field::DayOfYear                => yearday,
            Field::EpochDay                 => self.to_epoch_day(),
            Field::AlignedWeekOfMonth       => (day - 1) / 7 + 1,
            Field::AlignedWeekOfYear        => (yearday - 1) / 7 + 1,
            Field::MonthOfYear              => self.month as i64,
            Field::ProlepticMonth           => self.proleptic_month(),
            Field::YearOfEra                => if self.year >= 1 { i64::from(self.year) } else { 1 - i64::from(self.year) },
            Field::Year                     => i64::from(self.year),
            Field::Era                      => if self.year >= 1 { 1 } else { 0 },
            _                               => return Err(Error::UnsupportedField(field)),
        })
    }

    pub fn is_supported(&self, field: Field) -> bool {
        field.is_date_based()
    }

    /// Returns the range of valid values for the given field, taking the
    /// length of this date’s month and year into account.
    pub fn range(&self, field: Field) -> Result<ValueRange> {
        match field {
            Field::DayOfMonth         => Ok(ValueRange::of(1, i64::from(self.length_of_month()))),
            Field::DayOfYear          => Ok(ValueRange::of(1, i64::from(self.length_of_year()))),
            Field::AlignedWeekOfMonth => {
                let weeks = if self.month == February && !self.is_leap_year() { 4 } else { 5 };
                Ok(ValueRange::of(1, weeks))
            }
            Field::YearOfEra          => {
                let max = if self.year <= 0 { i64::from(MAX_YEAR) + 1 } else { i64::from(MAX_YEAR) };
                Ok(ValueRange::of(1, max))
            }
            _ if field.is_date_based() => Ok(field.range()),
            _                          => Err(Error::UnsupportedField(field)),
        }
    }
}


// ---- arithmetic ----

impl LocalDate {

    /// Adds a number of days, failing if the result is out of range.
    ///
    /// All of the other day- and week-based arithmetic ends up here.
    pub fn plus_days(self, days: i64) -> Result<Self> {
        if days == 0 {
            return Ok(self);
        }

        let epoch_day = self.to_epoch_day().checked_add(days).or_overflow("plus_days")?;
        Self::from_epoch_day(epoch_day)
    }

    pub fn plus_weeks(self, weeks: i64) -> Result<Self> {
        self.plus_days(weeks.checked_mul(7).or_overflow("plus_weeks")?)
    }

    /// Adds a number of months. If the day doesn’t exist in the resulting
    /// month, the last day of the month is used instead.
    pub fn plus_months(self, months: i64) -> Result<Self> {
        if months == 0 {
            return Ok(self);
        }

        let month_count = i128::from(self.proleptic_month()) + i128::from(months);
        let year = month_count.div_euclid(12) as i64;
        let year = Field::Year.check_valid_int_value(year)?;
        let month = Month::January.plus(month_count.rem_euclid(12) as i64);
        Ok(Self::resolve_previous_valid(year, month, self.day))
    }

    /// Adds a number of years. If the day doesn’t exist in the resulting
    /// year, which can only happen to the 29th of February, the 28th is
    /// used instead.
    pub fn plus_years(self, years: i64) -> Result<Self> {
        if years == 0 {
            return Ok(self);
        }

        let year = Field::Year.check_valid_int_value(i64::from(self.year).saturating_add(years))?;
        Ok(Self::resolve_previous_valid(year, self.month, self.day))
    }

    pub fn minus_days(self, days: i64) -> Result<Self> {
        match days.checked_neg() {
            Some(days) => self.plus_days(days),
            None       => self.plus_days(i64::MAX)?.plus_days(1),
        }
    }

    pub fn minus_weeks(self, weeks: i64) -> Result<Self> {
        match weeks.checked_neg() {
            Some(weeks) => self.plus_weeks(weeks),
            None        => self.plus_weeks(i64::MAX)?.plus_weeks(1),
        }
    }

    pub fn minus_months(self, months: i64) -> Result<Self> {
        match months.checked_neg() {
            Some(months) => self.plus_months(months),
            None         => self.plus_months(i64::MAX)?.plus_months(1),
        }
    }

    pub fn minus_years(self, years: i64) -> Result<Self> {
        match years.checked_neg() {
            Some(years) => self.plus_years(years),
            None        => self.plus_years(i64::MAX)?.plus_years(1),
        }
    }

    /// Adds an amount of a date-based unit.
    pub fn plus(self, amount: i64, unit: Unit) -> Result<Self> {
        let multiply = |factor: i64| amount.checked_mul(factor).or_overflow("plus");

        match unit {
            Unit::Days          => self.plus_days(amount),
            Unit::Weeks         => self.plus_weeks(amount),
            Unit::Months        => self.plus_months(amount),
            Unit::Years         => self.plus_years(amount),
            Unit::Decades       => self.plus_years(multiply(10)?),
            Unit::Centuries     => self.plus_years(multiply(100)?),
            Unit::Millennia     => self.plus_years(multiply(1000)?),
            Unit::Custom(custom) if custom.is_date_based() => {
                let span = custom.add_to(amount)?;
                self.plus_days(span.to_days())
            }
            _ => Err(Error::UnsupportedUnit(unit)),
        }
    }

    pub fn minus(self, amount: i64, unit: Unit) -> Result<Self> {
        match amount.checked_neg() {
            Some(amount) => self.plus(amount, unit),
            None         => self.plus(i64::MAX, unit)?.plus(1, unit),
        }
    }

    /// Counts the whole number of the given unit between this date and
    /// the end date, which is negative if the end date is earlier.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::{LocalDate, Unit};
    ///
    /// let start = LocalDate::of(2008, 1, 31).unwrap();
    /// let end = LocalDate::of(2008, 2, 29).unwrap();
    /// assert_eq!(start.until(end, Unit::Months), Ok(0));
    /// assert_eq!(start.until(end, Unit::Days), Ok(29));
    /// ```
    pub fn until(&self, end: Self, unit: Unit) -> Result<i64> {
        match unit {
            Unit::Days          => Ok(self.days_until(end)),
            Unit::Weeks         => Ok(self.days_until(end) / 7),
            Unit::Months        => Ok(self.months_until(end)),
            Unit::Years         => Ok(self.months_until(end) / 12),
            Unit::Decades       => Ok(self.months_until(end) / 120),
            Unit::Centuries     => Ok(self.months_until(end) / 1_200),
            Unit::Millennia     => Ok(self.months_until(end) / 12_000),
            Unit::Custom(custom) if custom.is_date_based() => {
                let days = Duration::of_days(self.days_until(end))?;
                custom.between(days)
            }
            _ => Err(Error::UnsupportedUnit(unit)),
        }
    }

    fn days_until(&self, end: Self) -> i64 {
        end.to_epoch_day() - self.to_epoch_day()
    }

    /// Whole months until the end date, where a month only counts once the
    /// end date’s day-of-month has caught up with this one’s.
    fn months_until(&self, end: Self) -> i64 {
        let packed_start = self.proleptic_month() * 32 + i64::from(self.day);
        let packed_end = end.proleptic_month() * 32 + i64::from(end.day);
        (packed_end - packed_start) / 32
    }

    /// The number of seconds from the epoch to the start of this date.
    pub(crate) fn to_epoch_second_at_midnight(&self) -> i64 {
        self.to_epoch_day() * SECONDS_PER_DAY
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i32 { self.year }
    fn month(&self) -> Month { self.month }
    fn day(&self) -> i8 { self.day }
    fn yearday(&self) -> i16 { self.month.first_day_of_year(self.is_leap_year()) as i16 + i16::from(self.day) - 1 }
    fn weekday(&self) -> Weekday { Weekday::from_epoch_day(self.to_epoch_day()) }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate({})", self)
    }
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

static MONTHS: [Month; 12] = [
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// The same as `days_in_month`.
    pub fn length(self, leap_year: bool) -> i8 {
        self.days_in_month(leap_year)
    }

    /// Returns the day-of-year of the first day of this month.
    pub fn first_day_of_year(self, leap_year: bool) -> i64 {
        let leap = if leap_year && self > February { 1 } else { 0 };
        let first = match self {
            January =>   1, February =>  32, March     =>  60,
            April   =>  91, May      => 121, June      => 152,
            July    => 182, August   => 213, September => 244,
            October => 274, November => 305, December  => 335,
        };

        first + leap
    }

    /// Returns the month a day-of-year falls in. Dividing by 31 can only
    /// ever guess one month too early.
    fn from_day_of_year(yearday: i64, leap_year: bool) -> Self {
        let guess = Self::from_zero(((yearday - 1) / 31) as i8).unwrap_or(January);
        let next = guess.plus(1);
        if next != January && yearday >= next.first_day_of_year(leap_year) { next } else { guess }
    }

    /// Returns the month that is the given number of months after this one,
    /// wrapping around at the end of the year.
    pub fn plus(self, months: i64) -> Self {
        MONTHS[(self as i64 - 1 + months.rem_euclid(12)).rem_euclid(12) as usize]
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use calendric::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i64) -> Result<Self> {
        let month = Field::MonthOfYear.check_valid_value(month)?;
        Ok(MONTHS[month as usize - 1])
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    pub fn from_zero(month: i8) -> Result<Self> {
        Self::from_one(i64::from(month) + 1)
    }

    /// The month’s name in upper case, as used in error messages.
    fn name(self) -> &'static str {
        match self {
            January => "JANUARY",  February => "FEBRUARY",  March     => "MARCH",
            April   => "APRIL",    May      => "MAY",       June      => "JUNE",
            July    => "JULY",     August   => "AUGUST",    September => "SEPTEMBER",
            October => "OCTOBER",  November => "NOVEMBER",  December  => "DECEMBER",
        }
    }
}


/// A named day of the week, numbered from Monday as day 1 to Sunday as
/// day 7, following ISO-8601.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Monday = 1, Tuesday = 2, Wednesday = 3, Thursday = 4, Friday = 5, Saturday = 6, Sunday = 7,
}

static WEEKDAYS: [Weekday; 7] = [
    Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday,
];

impl Weekday {

    /// Return the weekday based on a number, with Monday as Day 1 and
    /// Sunday as Day 7.
    ///
    /// ```rust
    /// use calendric::Weekday;
    /// assert_eq!(Weekday::from_one(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_one(0).is_err());
    /// ```
    pub fn from_one(weekday: i64) -> Result<Self> {
        let weekday = Field::DayOfWeek.check_valid_value(weekday)?;
        Ok(WEEKDAYS[weekday as usize - 1])
    }

    /// Returns the weekday that is the given number of days after this one.
    pub fn plus(self, days: i64) -> Self {
        WEEKDAYS[(self as i64 - 1 + days.rem_euclid(7)).rem_euclid(7) as usize]
    }

    /// Computes the weekday, given the number of days since the Unix epoch.
    fn from_epoch_day(epoch_day: i64) -> Self {
        // The 1st of January 1970 was a Thursday.
        Thursday.plus(epoch_day)
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::*;

    #[test]
    fn some_leap_years() {
        for year in [2004, 2008, 2012, 2016] {
            assert!(LocalDate::of(year, 2, 29).is_ok());
            assert!(LocalDate::of(year + 1, 2, 29).is_err());
        }
        assert!(LocalDate::of(1600, 2, 29).is_ok());
        assert!(LocalDate::of(1601, 2, 29).is_err());
        assert!(LocalDate::of(1602, 2, 29).is_err());
    }

    #[test]
    fn new() {
        for year in 1..3000 {
            for (month, bad_day) in [(1, 32), (3, 32), (4, 31), (6, 31), (9, 31), (11, 31), (12, 32)] {
                assert!(LocalDate::of(year, month, bad_day).is_err());
            }
            assert!(LocalDate::of(year, 2, 30).is_err());
        }
    }

    #[test]
    fn to_from_epoch_day() {
        for date in [
            LocalDate::of(1970,  1,  1).unwrap(),
            LocalDate::of(   1,  1,  1).unwrap(),
            LocalDate::of(1971,  1,  1).unwrap(),
            LocalDate::of(1989, 11, 10).unwrap(),
            LocalDate::of(2000,  2, 29).unwrap(),
            LocalDate::of(2000,  3,  1).unwrap(),
            LocalDate::of(2100,  2, 28).unwrap(),
            LocalDate::of(2400, 12, 31).unwrap(),
            LocalDate::of(-753, 12,  1).unwrap(),
            LocalDate::MIN,
            LocalDate::MAX,
        ] {
            assert_eq!(Ok(date), LocalDate::from_epoch_day(date.to_epoch_day()));
        }
    }

    #[test]
    fn every_day_around_a_400_year_cycle() {
        let mut date = LocalDate::of(1999, 1, 1).unwrap();
        for epoch_day in date.to_epoch_day() .. date.to_epoch_day() + 3 * 366 {
            assert_eq!(date.to_epoch_day(), epoch_day);
            assert_eq!(LocalDate::from_epoch_day(epoch_day), Ok(date));
            date = LocalDate::yd(i64::from(date.year), i64::from(date.yearday()) + 1)
                .or_else(|_| LocalDate::of(i64::from(date.year) + 1, 1, 1))
                .unwrap();
        }
    }

    #[test]
    fn epoch_days() {
        assert_eq!(LocalDate::EPOCH.to_epoch_day(), 0);
        assert_eq!(LocalDate::of(2000, 3, 1).unwrap().to_epoch_day(), EPOCH_DIFFERENCE);
        assert_eq!(LocalDate::MIN.to_epoch_day(), Field::EpochDay.range().min());
        assert_eq!(LocalDate::MAX.to_epoch_day(), Field::EpochDay.range().max());
    }

    #[test]
    fn weekdays() {
        assert_eq!(LocalDate::EPOCH.weekday(), Thursday);
        assert_eq!(LocalDate::of(2000, 3, 1).unwrap().weekday(), Wednesday);
        assert_eq!(LocalDate::of(1969, 12, 29).unwrap().weekday(), Monday);
    }

    #[test]
    fn yeardays() {
        assert_eq!(LocalDate::of(2008, 12, 31).unwrap().yearday(), 366);
        assert_eq!(LocalDate::of(2007, 3, 1).unwrap().yearday(), 60);
        assert_eq!(LocalDate::yd(2008, 60), LocalDate::of(2008, 2, 29));
        assert_eq!(LocalDate::yd(2007, 59), LocalDate::of(2007, 2, 28));
        assert_eq!(LocalDate::yd(2007, 32), LocalDate::of(2007, 2, 1));
    }

    #[test]
    fn first_days_of_months() {
        assert_eq!(January.first_day_of_year(true), 1);
        assert_eq!(February.first_day_of_year(true), 32);
        assert_eq!(March.first_day_of_year(false), 60);
        assert_eq!(March.first_day_of_year(true), 61);
        assert_eq!(December.first_day_of_year(true), 336);
    }

    #[test]
    fn month_wraps() {
        assert_eq!(December.plus(1), January);
        assert_eq!(January.plus(-1), December);
        assert_eq!(Sunday.plus(1), Monday);
    }

    mod debug {
        use super::*;

        #[test]
        fn recently() {
            let date = LocalDate::of(1600, 2, 28).unwrap();
            assert_eq!(format!("{:?}", date), "LocalDate(1600-02-28)");
        }

        #[test]
        fn just_then() {
            let date = LocalDate::of(-753, 12, 1).unwrap();
            assert_eq!(format!("{:?}", date), "LocalDate(-0753-12-01)");
        }

        #[test]
        fn far_far_future() {
            let date = LocalDate::of(10601, 1, 31).unwrap();
            assert_eq!(format!("{:?}", date), "LocalDate(+10601-01-31)");
        }
    }
}
