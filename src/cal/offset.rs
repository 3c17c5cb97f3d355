//! Fixed offsets from UTC.

use std::fmt;

use crate::cal::datetime::LocalDateTime;
use crate::cal::field::{Field, ValueRange};
use crate::cal::zone::{LocalOffsets, ZoneRules};
use crate::error::{Error, Result};
use crate::instant::Instant;


/// The range of each component of an offset, checked before the total.
const HOURS: ValueRange = ValueRange::of(-18, 18);
const MINUTES: ValueRange = ValueRange::of(-59, 59);
const SECONDS: ValueRange = ValueRange::of(-59, 59);


/// An **offset** is the amount of time a place’s wall clocks are ahead of
/// UTC, between eighteen hours behind and eighteen hours ahead.
///
/// An offset is also the simplest set of zone rules: one that never
/// changes.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Offset {
    total_seconds: i32,
}

impl Offset {

    /// The offset of UTC itself.
    pub const UTC: Self = Self { total_seconds: 0 };

    pub fn utc() -> Self {
        Self::UTC
    }

    /// Creates an offset from a total number of seconds, which must be
    /// within eighteen hours either side of UTC.
    pub fn of_total_seconds(seconds: i64) -> Result<Self> {
        let total_seconds = Field::OffsetSeconds.check_valid_int_value(seconds)?;
        Ok(Self { total_seconds })
    }

    pub fn of_hours(hours: i64) -> Result<Self> {
        Self::of_hours_minutes_seconds(hours, 0, 0)
    }

    pub fn of_hours_minutes(hours: i64, minutes: i64) -> Result<Self> {
        Self::of_hours_minutes_seconds(hours, minutes, 0)
    }

    /// Creates an offset from its components, all of which have to share
    /// the same sign, so `-05:30` is written as `(-5, -30, 0)`.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::Offset;
    ///
    /// let india = Offset::of_hours_minutes(5, 30).unwrap();
    /// assert_eq!(india.total_seconds(), 19_800);
    /// assert!(Offset::of_hours_minutes(-5, 30).is_err());
    /// ```
    pub fn of_hours_minutes_seconds(hours: i64, minutes: i64, seconds: i64) -> Result<Self> {
        let hours   = HOURS.check_valid_value(hours, Field::OffsetSeconds)?;
        let minutes = MINUTES.check_valid_value(minutes, Field::OffsetSeconds)?;
        let seconds = SECONDS.check_valid_value(seconds, Field::OffsetSeconds)?;

        let signs = [hours.signum(), minutes.signum(), seconds.signum()];
        if signs.contains(&1) && signs.contains(&-1) {
            return Err(Error::InvalidFieldCombination {
                fields: &[Field::OffsetSeconds],
                detail: format!("Zone offset hours, minutes and seconds must have the same sign: {}, {}, {}", hours, minutes, seconds),
            });
        }

        Self::of_total_seconds(hours * 3600 + minutes * 60 + seconds)
    }

    /// The total offset from UTC in seconds, positive east of Greenwich.
    pub fn total_seconds(self) -> i32 {
        self.total_seconds
    }

    pub fn is_utc(self) -> bool {
        self.total_seconds == 0
    }

    pub fn is_negative(self) -> bool {
        self.total_seconds < 0
    }

    /// The whole hours part of this offset, carrying its sign.
    pub fn hours(self) -> i8 {
        (self.total_seconds / 3600) as i8
    }

    pub fn minutes(self) -> i8 {
        (self.total_seconds / 60 % 60) as i8
    }

    pub fn seconds(self) -> i8 {
        (self.total_seconds % 60) as i8
    }

    pub fn get(self, field: Field) -> Result<i64> {
        match field {
            Field::OffsetSeconds => Ok(i64::from(self.total_seconds)),
            _                    => Err(Error::UnsupportedField(field)),
        }
    }

    pub fn is_supported(self, field: Field) -> bool {
        field == Field::OffsetSeconds
    }
}

impl ZoneRules for Offset {
    fn classify(&self, _local: LocalDateTime) -> LocalOffsets {
        LocalOffsets::Normal(*self)
    }

    fn offset_at(&self, _instant: Instant) -> Offset {
        *self
    }

    fn is_fixed(&self) -> bool {
        true
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Offset({})", self)
    }
}
