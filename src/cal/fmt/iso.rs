use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::date::LocalDate;
use crate::cal::datetime::LocalDateTime;
use crate::cal::fmt::ISO;
use crate::cal::offset::Offset;
use crate::cal::time::LocalTime;
use crate::cal::zoned::ZonedDateTime;
use crate::duration::Duration;
use crate::instant::Instant;


const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Writes the fraction of a second, in groups of three digits, with none
/// at all for whole seconds.
fn write_fraction(f: &mut fmt::Formatter, nanos: i32) -> fmt::Result {
    if nanos == 0 {
        Ok(())
    }
    else if nanos % 1_000_000 == 0 {
        write!(f, ".{:03}", nanos / 1_000_000)
    }
    else if nanos % 1000 == 0 {
        write!(f, ".{:06}", nanos / 1000)
    }
    else {
        write!(f, ".{:09}", nanos)
    }
}

fn write_time(f: &mut fmt::Formatter, time: &LocalTime, always_seconds: bool) -> fmt::Result {
    write!(f, "{:02}:{:02}", time.hour(), time.minute())?;
    if always_seconds || time.second() > 0 || time.nanosecond() > 0 {
        write!(f, ":{:02}", time.second())?;
        write_fraction(f, time.nanosecond())?;
    }

    Ok(())
}


impl ISO for Duration {

    /// Durations are written in hours, minutes, and seconds, such as
    /// `PT8H6M12.345S`, with any fraction of a second combined into the
    /// seconds so `-0.5` seconds is written as `PT-0.5S`.
    fn write_iso(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }

        let (seconds, nanos) = self.lengths();
        let borrowing = seconds < 0 && nanos > 0;
        let effective = if borrowing { i128::from(seconds) + 1 } else { i128::from(seconds) };

        let hours   = effective / 3600;
        let minutes = effective % 3600 / 60;
        let secs    = effective % 60;

        f.write_str("PT")?;
        if hours != 0 {
            write!(f, "{}H", hours)?;
        }
        if minutes != 0 {
            write!(f, "{}M", minutes)?;
        }
        if secs == 0 && nanos == 0 && (hours != 0 || minutes != 0) {
            return Ok(());
        }

        if borrowing && secs == 0 {
            f.write_str("-0")?;
        }
        else {
            write!(f, "{}", secs)?;
        }

        if nanos > 0 {
            let fraction = if borrowing { 2 * NANOS_PER_SECOND - i64::from(nanos) } else { i64::from(nanos) + NANOS_PER_SECOND };
            let digits = fraction.to_string();
            write!(f, ".{}", digits[1..].trim_end_matches('0'))?;
        }

        f.write_str("S")
    }
}

impl ISO for LocalDate {

    /// Years from 0 to 9999 are written with four digits; years before
    /// that are padded to four digits after their sign, and years after it
    /// are given an explicit `+`.
    fn write_iso(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.year();
        if year.unsigned_abs() < 1000 {
            if year < 0 {
                write!(f, "-{:04}", year.unsigned_abs())?;
            }
            else {
                write!(f, "{:04}", year)?;
            }
        }
        else if year > 9999 {
            write!(f, "+{}", year)?;
        }
        else {
            write!(f, "{}", year)?;
        }

        write!(f, "-{:02}-{:02}", self.month() as i8, self.day())
    }
}

impl ISO for LocalTime {
    fn write_iso(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_time(f, self, false)
    }
}

impl ISO for LocalDateTime {
    fn write_iso(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.date().write_iso(f)?;
        f.write_str("T")?;
        self.time().write_iso(f)
    }
}

impl ISO for Offset {

    /// UTC itself is written as `Z`, and anything else as `±HH:MM`, with
    /// seconds only if there are any.
    fn write_iso(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_utc() {
            return f.write_str("Z");
        }

        let sign = if self.is_negative() { '-' } else { '+' };
        write!(f, "{}{:02}:{:02}", sign, self.hours().unsigned_abs(), self.minutes().unsigned_abs())?;
        if self.seconds() != 0 {
            write!(f, ":{:02}", self.seconds().unsigned_abs())?;
        }

        Ok(())
    }
}

impl ISO for ZonedDateTime {

    /// The zone’s identifier is only written when it’s a region, as a
    /// fixed zone is already given by the offset.
    fn write_iso(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.local().write_iso(f)?;
        self.offset().write_iso(f)?;
        if self.zone().as_offset().is_none() {
            write!(f, "[{}]", self.zone())?;
        }

        Ok(())
    }
}

impl ISO for Instant {

    /// Instants are written as UTC date-times, always with seconds.
    fn write_iso(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match LocalDateTime::from_epoch_second(self.seconds(), i64::from(self.nanos()), Offset::UTC) {
            Ok(utc) => {
                utc.date().write_iso(f)?;
                f.write_str("T")?;
                write_time(f, &utc.time(), true)?;
                f.write_str("Z")
            }
            Err(_) => {
                // Beyond the calendar’s range.
                write!(f, "{}", self.seconds())?;
                write_fraction(f, self.nanos())?;
                f.write_str("s")
            }
        }
    }
}


macro_rules! display_as_iso {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    self.write_iso(f)
                }
            }
        )*
    };
}

display_as_iso!(Duration, LocalDate, LocalTime, LocalDateTime, Offset, ZonedDateTime, Instant);
