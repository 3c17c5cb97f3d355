//! Date-times in a time zone, and how local date-times are resolved into
//! them.

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::date::{LocalDate, Month, Weekday};
use crate::cal::datetime::LocalDateTime;
use crate::cal::field::Field;
use crate::cal::offset::Offset;
use crate::cal::time::LocalTime;
use crate::cal::unit::Unit;
use crate::cal::zone::{LocalOffsets, TimeZone};
use crate::clock::Clock;
use crate::config;
use crate::duration::{Duration, TimePoint};
use crate::error::{Error, Result};
use crate::instant::Instant;


/// A **zoned date-time** is a local date-time, along with the offset it
/// has and the time zone it belongs to.
///
/// The offset is always one that the zone’s rules allow for the local
/// date-time. Two values are only equal when all three parts are: the same
/// instant seen from different zones gives different values.
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct ZonedDateTime {
    local: LocalDateTime,
    offset: Offset,
    zone: TimeZone,
}

impl ZonedDateTime {

    /// Resolves a local date-time in a time zone.
    ///
    /// A local date-time that falls in a gap is pushed forward by the
    /// length of the gap, and one that falls in an overlap takes the
    /// earlier of its two offsets.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::{LocalDateTime, Offset, ZonedDateTime};
    /// use calendric::zone::TimeZone;
    ///
    /// let local = LocalDateTime::ymd_hm(2008, 6, 30, 11, 30).unwrap();
    /// let zoned = ZonedDateTime::of(local, TimeZone::fixed(Offset::of_hours(2).unwrap())).unwrap();
    /// assert_eq!(zoned.to_epoch_second(), 1_214_818_200);
    /// ```
    pub fn of(local: LocalDateTime, zone: TimeZone) -> Result<Self> {
        Self::of_local(local, zone, None)
    }

    /// Resolves a local date-time in a time zone, keeping the preferred
    /// offset if the local date-time falls in an overlap and the offset is
    /// one of its two candidates.
    pub fn of_local(local: LocalDateTime, zone: TimeZone, preferred: Option<Offset>) -> Result<Self> {
        let (local, offset) = match zone.rules().classify(local) {
            LocalOffsets::Normal(offset) => {
                (local, offset)
            }
            LocalOffsets::Gap { before, after } => {
                let gap = i64::from(after.total_seconds() - before.total_seconds());
                let shifted = local.plus_seconds(gap)?;
                trace!(zone = %zone, %local, %shifted, "moved local date-time out of a gap");
                (shifted, after)
            }
            LocalOffsets::Overlap { earlier, later } => {
                let offset = match preferred {
                    Some(p) if p == earlier || p == later => p,
                    _                                     => earlier,
                };
                trace!(zone = %zone, %local, %offset, "picked an offset in an overlap");
                (local, offset)
            }
        };

        Ok(Self { local, offset, zone })
    }

    /// Creates a zoned date-time from a local date-time and an offset that
    /// the zone has to allow for it.
    ///
    /// ## Errors
    ///
    /// Returns `InvalidOffsetForZone` if the local date-time is in a gap,
    /// or if the offset isn’t one of the ones the zone allows.
    pub fn of_strict(local: LocalDateTime, offset: Offset, zone: TimeZone) -> Result<Self> {
        let offsets = zone.rules().classify(local);
        if offsets.is_valid_offset(offset) {
            return Ok(Self { local, offset, zone });
        }

        Err(Error::InvalidOffsetForZone {
            local,
            offset,
            zone: zone.id().into_owned(),
            gap: offsets.is_gap(),
        })
    }

    /// Creates the zoned date-time at an instant, as seen from a zone.
    pub fn of_instant(instant: Instant, zone: TimeZone) -> Result<Self> {
        let offset = zone.rules().offset_at(instant);
        let local = LocalDateTime::from_epoch_second(instant.seconds(), i64::from(instant.nanos()), offset)?;
        Ok(Self { local, offset, zone })
    }

    /// Creates the zoned date-time at the instant that a local date-time
    /// has at an offset, as seen from a zone. The offset doesn’t have to be
    /// one the zone uses.
    pub fn of_local_instant(local: LocalDateTime, offset: Offset, zone: TimeZone) -> Result<Self> {
        Self::of_instant(local.to_instant(offset), zone)
    }

    /// Creates a new zoned date-time set to the current time, in the
    /// clock’s zone.
    pub fn now_with(clock: &dyn Clock) -> Result<Self> {
        Self::of_instant(clock.instant(), clock.zone())
    }

    pub fn now() -> Result<Self> {
        Self::now_with(&*config::defaults().clock)
    }

    pub fn local(&self) -> LocalDateTime {
        self.local
    }

    pub fn date(&self) -> LocalDate {
        self.local.date()
    }

    pub fn time(&self) -> LocalTime {
        self.local.time()
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn zone(&self) -> &TimeZone {
        &self.zone
    }

    pub fn to_instant(&self) -> Instant {
        self.local.to_instant(self.offset)
    }

    /// The number of seconds since the Unix epoch, which is the local
    /// date-time’s seconds less the offset.
    pub fn to_epoch_second(&self) -> i64 {
        self.local.to_epoch_second(self.offset)
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self.to_instant() < other.to_instant()
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self.to_instant() > other.to_instant()
    }

    /// Whether both values are at the same instant, whatever their zones.
    pub fn is_equal_instant(&self, other: &Self) -> bool {
        self.to_instant() == other.to_instant()
    }

    /// Resolves a new local date-time in this zone, keeping the current
    /// offset if possible.
    fn resolve_local(&self, local: LocalDateTime) -> Result<Self> {
        Self::of_local(local, self.zone.clone(), Some(self.offset))
    }

    fn resolve_instant(&self, instant: Instant) -> Result<Self> {
        Self::of_instant(instant, self.zone.clone())
    }

    /// Switches to an offset the zone allows for the current local
    /// date-time, or stays the same if it doesn’t allow it.
    fn resolve_offset(&self, offset: Offset) -> Self {
        if offset != self.offset && self.zone.rules().is_valid_offset(self.local, offset) {
            Self { local: self.local, offset, zone: self.zone.clone() }
        }
        else {
            if offset != self.offset {
                trace!(zone = %self.zone, local = %self.local, %offset, "ignored an offset the zone does not allow");
            }
            self.clone()
        }
    }
}


// ---- zones and offsets ----

impl ZonedDateTime {

    /// Returns the same local date-time at the earlier of its two offsets,
    /// if it’s in an overlap.
    pub fn with_earlier_offset_at_overlap(&self) -> Self {
        match self.zone.rules().classify(self.local) {
            LocalOffsets::Overlap { earlier, .. } => self.resolve_offset(earlier),
            _                                     => self.clone(),
        }
    }

    /// Returns the same local date-time at the later of its two offsets,
    /// if it’s in an overlap.
    pub fn with_later_offset_at_overlap(&self) -> Self {
        match self.zone.rules().classify(self.local) {
            LocalOffsets::Overlap { later, .. } => self.resolve_offset(later),
            _                                   => self.clone(),
        }
    }

    /// Keeps the local date-time, and resolves it in another zone. The
    /// instant usually changes.
    pub fn with_zone_same_local(&self, zone: TimeZone) -> Result<Self> {
        if zone == self.zone {
            return Ok(self.clone());
        }

        Self::of_local(self.local, zone, Some(self.offset))
    }

    /// Keeps the instant, and works out the local date-time in another
    /// zone.
    pub fn with_zone_same_instant(&self, zone: TimeZone) -> Result<Self> {
        if zone == self.zone {
            return Ok(self.clone());
        }

        Self::of_instant(self.to_instant(), zone)
    }

    /// Swaps the zone for the fixed zone of the current offset.
    pub fn with_fixed_offset_zone(&self) -> Self {
        Self { local: self.local, offset: self.offset, zone: TimeZone::fixed(self.offset) }
    }
}


// ---- adjustment ----

impl ZonedDateTime {

    pub fn with_year(&self, year: i64) -> Result<Self> {
        self.resolve_local(self.local.with_year(year)?)
    }

    pub fn with_month(&self, month: i64) -> Result<Self> {
        self.resolve_local(self.local.with_month(month)?)
    }

    pub fn with_day_of_month(&self, day: i64) -> Result<Self> {
        self.resolve_local(self.local.with_day_of_month(day)?)
    }

    pub fn with_day_of_year(&self, yearday: i64) -> Result<Self> {
        self.resolve_local(self.local.with_day_of_year(yearday)?)
    }

    pub fn with_hour(&self, hour: i64) -> Result<Self> {
        self.resolve_local(self.local.with_hour(hour)?)
    }

    pub fn with_minute(&self, minute: i64) -> Result<Self> {
        self.resolve_local(self.local.with_minute(minute)?)
    }

    pub fn with_second(&self, second: i64) -> Result<Self> {
        self.resolve_local(self.local.with_second(second)?)
    }

    pub fn with_nanosecond(&self, nanosecond: i64) -> Result<Self> {
        self.resolve_local(self.local.with_nanosecond(nanosecond)?)
    }

    /// Returns a copy with one field changed, re-resolving the local
    /// date-time in the zone and keeping the current offset if possible.
    ///
    /// Setting `InstantSeconds` moves to that instant. Setting
    /// `OffsetSeconds` only has an effect if the zone allows that offset
    /// for the current local date-time; otherwise the value is returned
    /// unchanged.
    pub fn with(&self, field: Field, value: i64) -> Result<Self> {
        match field {
            Field::InstantSeconds => {
                self.resolve_instant(Instant::of_epoch_second(value, i64::from(self.local.nanosecond()))?)
            }
            Field::OffsetSeconds => {
                Ok(self.resolve_offset(Offset::of_total_seconds(value)?))
            }
            _ => {
                self.resolve_local(self.local.with(field, value)?)
            }
        }
    }

    pub fn get(&self, field: Field) -> Result<i64> {
        match field {
            Field::InstantSeconds  => Ok(self.to_epoch_second()),
            Field::OffsetSeconds   => Ok(i64::from(self.offset.total_seconds())),
            _                      => self.local.get(field),
        }
    }

    pub fn is_supported(&self, field: Field) -> bool {
        matches!(field, Field::InstantSeconds | Field::OffsetSeconds) || self.local.is_supported(field)
    }

    /// Drops any part of the local time smaller than the unit, then
    /// re-resolves it in the zone.
    pub fn truncated_to(&self, unit: Unit) -> Result<Self> {
        self.resolve_local(self.local.truncated_to(unit)?)
    }
}


// ---- arithmetic ----

impl ZonedDateTime {

    /// Adds an amount of a unit.
    ///
    /// Date-based units move the local date-time, keeping the wall-clock
    /// time across a transition. Time-based units move the instant, keeping
    /// the exact amount of time elapsed.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::{LocalDateTime, Offset, Unit, ZonedDateTime};
    /// use calendric::zone::{TimeZone, TransitionRules};
    /// use std::sync::Arc;
    ///
    /// let cet = Offset::of_hours(1).unwrap();
    /// let cest = Offset::of_hours(2).unwrap();
    /// let paris = TimeZone::region("Europe/Paris", Arc::new(TransitionRules::new(cet, vec![ (1_206_838_800, cest) ])));
    ///
    /// let before = ZonedDateTime::of(LocalDateTime::ymd_hm(2008, 3, 29, 12, 0).unwrap(), paris).unwrap();
    /// assert_eq!(before.plus(1, Unit::Days).unwrap().to_string(), "2008-03-30T12:00+02:00[Europe/Paris]");
    /// assert_eq!(before.plus(24, Unit::Hours).unwrap().to_string(), "2008-03-30T13:00+02:00[Europe/Paris]");
    /// ```
    pub fn plus(&self, amount: i64, unit: Unit) -> Result<Self> {
        if unit.is_time_based() {
            self.resolve_instant(self.to_instant().plus_span(unit.span_of(amount)?)?)
        }
        else {
            self.resolve_local(self.local.plus(amount, unit)?)
        }
    }

    pub fn minus(&self, amount: i64, unit: Unit) -> Result<Self> {
        match amount.checked_neg() {
            Some(amount) => self.plus(amount, unit),
            None         => self.plus(i64::MAX, unit)?.plus(1, unit),
        }
    }

    pub fn plus_duration(&self, span: Duration) -> Result<Self> {
        self.resolve_instant(self.to_instant().plus(span)?)
    }

    pub fn minus_duration(&self, span: Duration) -> Result<Self> {
        self.resolve_instant(self.to_instant().minus(span)?)
    }

    pub fn plus_years(&self, years: i64) -> Result<Self> {
        self.plus(years, Unit::Years)
    }

    pub fn plus_months(&self, months: i64) -> Result<Self> {
        self.plus(months, Unit::Months)
    }

    pub fn plus_weeks(&self, weeks: i64) -> Result<Self> {
        self.plus(weeks, Unit::Weeks)
    }

    pub fn plus_days(&self, days: i64) -> Result<Self> {
        self.plus(days, Unit::Days)
    }

    pub fn plus_hours(&self, hours: i64) -> Result<Self> {
        self.plus(hours, Unit::Hours)
    }

    pub fn plus_minutes(&self, minutes: i64) -> Result<Self> {
        self.plus(minutes, Unit::Minutes)
    }

    pub fn plus_seconds(&self, seconds: i64) -> Result<Self> {
        self.plus(seconds, Unit::Seconds)
    }

    pub fn plus_nanos(&self, nanos: i64) -> Result<Self> {
        self.plus(nanos, Unit::Nanos)
    }

    pub fn minus_years(&self, years: i64) -> Result<Self> {
        self.minus(years, Unit::Years)
    }

    pub fn minus_months(&self, months: i64) -> Result<Self> {
        self.minus(months, Unit::Months)
    }

    pub fn minus_weeks(&self, weeks: i64) -> Result<Self> {
        self.minus(weeks, Unit::Weeks)
    }

    pub fn minus_days(&self, days: i64) -> Result<Self> {
        self.minus(days, Unit::Days)
    }

    pub fn minus_hours(&self, hours: i64) -> Result<Self> {
        self.minus(hours, Unit::Hours)
    }

    pub fn minus_minutes(&self, minutes: i64) -> Result<Self> {
        self.minus(minutes, Unit::Minutes)
    }

    pub fn minus_seconds(&self, seconds: i64) -> Result<Self> {
        self.minus(seconds, Unit::Seconds)
    }

    pub fn minus_nanos(&self, nanos: i64) -> Result<Self> {
        self.minus(nanos, Unit::Nanos)
    }

    /// Counts the whole number of the given unit until the end value,
    /// which is first moved into this value’s zone.
    ///
    /// Date-based units compare the two local date-times, and time-based
    /// units compare the two instants.
    pub fn until(&self, end: &Self, unit: Unit) -> Result<i64> {
        let end = end.with_zone_same_instant(self.zone.clone())?;

        if unit.is_time_based() {
            self.to_instant().until(end.to_instant(), unit)
        }
        else {
            self.local.until(end.local, unit)
        }
    }
}

impl TimePoint for ZonedDateTime {
    fn nanos_until(&self, end: &Self) -> i128 {
        self.to_instant().nanos_until(&end.to_instant())
    }
}

impl DatePiece for ZonedDateTime {
    fn year(&self) -> i32 { self.local.year() }
    fn month(&self) -> Month { self.local.month() }
    fn day(&self) -> i8 { self.local.day() }
    fn yearday(&self) -> i16 { self.local.yearday() }
    fn weekday(&self) -> Weekday { self.local.weekday() }
}

impl TimePiece for ZonedDateTime {
    fn hour(&self) -> i8 { self.local.hour() }
    fn minute(&self) -> i8 { self.local.minute() }
    fn second(&self) -> i8 { self.local.second() }
    fn nanosecond(&self) -> i32 { self.local.nanosecond() }
}

/// Zoned date-times are ordered by instant, then by local date-time, then
/// by zone identifier.
impl Ord for ZonedDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_instant().cmp(&other.to_instant())
            .then_with(|| self.local.cmp(&other.local))
            .then_with(|| self.zone.id().cmp(&other.zone.id()))
    }
}

impl PartialOrd for ZonedDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ZonedDateTime({})", self)
    }
}
