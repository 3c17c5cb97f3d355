//! Parsing ISO-8601 text back into values.
//!
//! Parsing happens in two steps. First the text is split into its fields,
//! which only checks the syntax and reports the position of the first
//! problem. Then the fields are handed to the same constructors used
//! everywhere else, so a value that’s out of range fails in exactly the
//! same way whether it was parsed or built directly.

use std::str::FromStr;

use crate::cal::date::LocalDate;
use crate::cal::datetime::LocalDateTime;
use crate::cal::offset::Offset;
use crate::cal::time::LocalTime;
use crate::cal::zone::{TimeZone, ZoneProvider};
use crate::cal::zoned::ZonedDateTime;
use crate::config;
use crate::duration::Duration;
use crate::error::{Error, Result};


impl FromStr for Duration {
    type Err = Error;

    /// Parses text such as `PT8H6M12.345S` or `-P2DT-3M`. Every number
    /// may have its own sign, and the letters may be in either case.
    fn from_str(input: &str) -> Result<Self> {
        let mut cursor = Cursor::new(input);
        let fields = cursor.duration()?;
        cursor.finish()?;
        fields_to_duration(&cursor, fields)
    }
}

impl FromStr for LocalDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let mut cursor = Cursor::new(input);
        let fields = cursor.date()?;
        cursor.finish()?;
        fields_to_date(fields)
    }
}

impl FromStr for LocalTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let mut cursor = Cursor::new(input);
        let fields = cursor.time()?;
        cursor.finish()?;
        fields_to_time(fields)
    }
}

impl FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let mut cursor = Cursor::new(input);
        let (date, time) = cursor.datetime()?;
        cursor.finish()?;
        Ok(LocalDateTime::new(fields_to_date(date)?, fields_to_time(time)?))
    }
}

impl FromStr for Offset {
    type Err = Error;

    /// Parses `Z`, or an offset in one of the forms `±H`, `±HH`, `±HH:MM`,
    /// `±HHMM`, `±HH:MM:SS`, or `±HHMMSS`.
    fn from_str(input: &str) -> Result<Self> {
        let mut cursor = Cursor::new(input);
        let fields = cursor.lenient_offset()?;
        cursor.finish()?;
        fields_to_offset(fields)
    }
}

impl FromStr for ZonedDateTime {
    type Err = Error;

    /// Parses text such as `2008-10-26T02:30+01:00[Europe/Paris]`, looking
    /// the zone up in the process-wide zone provider.
    fn from_str(input: &str) -> Result<Self> {
        Self::parse_with(input, &*config::defaults().zones)
    }
}

impl ZonedDateTime {

    /// Parses a zoned date-time, looking its zone up in the given provider.
    ///
    /// The local date-time and offset give an instant, which is then seen
    /// from the zone. Without a zone in brackets, the offset is used as a
    /// fixed zone.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::ZonedDateTime;
    /// use calendric::zone::ZoneRegistry;
    ///
    /// let zones = ZoneRegistry::new();
    /// let zoned = ZonedDateTime::parse_with("2008-06-30T12:00+02:00", &zones).unwrap();
    /// assert_eq!(zoned.to_epoch_second(), 1_214_820_000);
    /// ```
    pub fn parse_with(input: &str, provider: &dyn ZoneProvider) -> Result<Self> {
        let mut cursor = Cursor::new(input);
        let (date, time) = cursor.datetime()?;
        let offset = cursor.strict_offset()?;
        let zone_id = cursor.zone_id()?;
        cursor.finish()?;

        let local = LocalDateTime::new(fields_to_date(date)?, fields_to_time(time)?);
        let offset = fields_to_offset(offset)?;

        match zone_id {
            Some(id) => ZonedDateTime::of_local_instant(local, offset, TimeZone::of(id, provider)?),
            None     => ZonedDateTime::of_local_instant(local, offset, TimeZone::fixed(offset)),
        }
    }
}


/// The fields of a duration, before being added together.
#[derive(PartialEq, Debug, Default)]
struct DurationFields {
    negated: bool,
    days: Option<Number>,
    hours: Option<Number>,
    minutes: Option<Number>,
    seconds: Option<Number>,
    nanos: i64,
}

/// A signed number, with the position it was found at.
#[derive(PartialEq, Debug, Clone, Copy)]
struct Number {
    value: i64,
    negative: bool,
    position: usize,
}

#[derive(PartialEq, Debug, Clone, Copy)]
struct DateFields {
    year: i64,
    month: i64,
    day: i64,
}

#[derive(PartialEq, Debug, Clone, Copy, Default)]
struct TimeFields {
    hour: i64,
    minute: i64,
    second: i64,
    nanosecond: i64,
}

#[derive(PartialEq, Debug, Clone, Copy)]
enum OffsetFields {
    Utc,
    Signed { negative: bool, hours: i64, minutes: i64, seconds: i64 },
}


/// Walks over the text one byte at a time. Everything this parser accepts
/// is ASCII, except a zone identifier, which is taken as is.
struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, bytes: text.as_bytes(), position: 0 }
    }

    fn fail_at(&self, position: usize, reason: &str) -> Error {
        Error::ParseFailure {
            text: self.text.to_owned(),
            reason: reason.to_owned(),
            position,
        }
    }

    fn fail(&self, reason: &str) -> Error {
        self.fail_at(self.position, reason)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    fn peek_is_letter(&self, letter: u8) -> bool {
        self.peek().map_or(false, |b| b.eq_ignore_ascii_case(&letter))
    }

    /// Moves past the letter in either case, if it’s next.
    fn eat_letter(&mut self, letter: u8) -> bool {
        if self.peek_is_letter(letter) {
            self.position += 1;
            true
        }
        else {
            false
        }
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.position += 1;
            true
        }
        else {
            false
        }
    }

    fn expect(&mut self, byte: u8, reason: &str) -> Result<()> {
        if self.eat(byte) { Ok(()) } else { Err(self.fail(reason)) }
    }

    /// Fails unless every byte has been used.
    fn finish(&self) -> Result<()> {
        if self.position == self.bytes.len() {
            Ok(())
        }
        else {
            Err(self.fail("unparsed text found"))
        }
    }

    /// Reads an optional `+` or `-`, returning whether it was a minus.
    fn sign(&mut self) -> Option<bool> {
        match self.peek() {
            Some(b'+')  => { self.position += 1; Some(false) }
            Some(b'-')  => { self.position += 1; Some(true) }
            _           => None,
        }
    }

    /// Reads a run of digits, returning them as text.
    fn digits(&mut self) -> &'a str {
        let start = self.position;
        while self.peek().map_or(false, |b| b.is_ascii_digit()) {
            self.position += 1;
        }

        &self.text[start .. self.position]
    }

    /// Reads exactly `count` digits as a number.
    fn fixed_digits(&mut self, count: usize, what: &str) -> Result<i64> {
        let start = self.position;
        let digits = self.digits();
        if digits.len() != count {
            return Err(self.fail_at(start, &format!("expected {} digits for {}", count, what)));
        }

        Ok(decimal(digits))
    }

    /// Reads a number with an optional sign, which has to have at least
    /// one digit and fit in 64 bits.
    fn signed_number(&mut self) -> Result<Number> {
        let position = self.position;
        let negative = self.sign() == Some(true);
        let digits = self.digits();
        if digits.is_empty() {
            return Err(self.fail("expected a number"));
        }

        let magnitude: i128 = digits.parse().map_err(|_| self.fail_at(position, "numeric overflow"))?;
        let value = if negative { -magnitude } else { magnitude };
        let value = i64::try_from(value).map_err(|_| self.fail_at(position, "numeric overflow"))?;
        Ok(Number { value, negative, position })
    }
}


// ---- durations ----

impl<'a> Cursor<'a> {

    /// `[+-]P[nD][T[nH][nM][n[.f]S]]`, where at least one component has to
    /// be present, and `T` has to be followed by at least one.
    fn duration(&mut self) -> Result<DurationFields> {
        let mut fields = DurationFields {
            negated: self.sign() == Some(true),
            .. DurationFields::default()
        };

        if !self.eat_letter(b'P') {
            return Err(self.fail("expected 'P'"));
        }

        if self.peek().is_some() && !self.peek_is_letter(b'T') {
            let days = self.signed_number()?;
            if !self.eat_letter(b'D') {
                return Err(self.fail("expected 'D'"));
            }
            fields.days = Some(days);
        }

        if self.eat_letter(b'T') {
            self.time_components(&mut fields)?;
        }
        else if fields.days.is_none() {
            return Err(self.fail("missing duration component"));
        }

        Ok(fields)
    }

    /// The components after the `T`, which have to come in the order of
    /// hours, minutes, and then seconds.
    fn time_components(&mut self, fields: &mut DurationFields) -> Result<()> {
        if self.peek().is_none() {
            return Err(self.fail("missing time component"));
        }

        while self.peek().is_some() {
            let number = self.signed_number()?;

            if self.eat(b'.') || self.eat(b',') {
                let start = self.position;
                let fraction = self.digits();
                if fraction.len() > 9 {
                    return Err(self.fail_at(start + 9, "fraction has more than nine digits"));
                }
                if !self.eat_letter(b'S') {
                    return Err(self.fail("only seconds can have a fraction"));
                }
                if fields.seconds.is_some() {
                    return Err(self.fail_at(number.position, "seconds given twice"));
                }

                let padded = format!("{:0<9}", fraction);
                let nanos: i64 = padded.parse().map_err(|_| self.fail_at(start, "invalid fraction"))?;
                fields.nanos = if number.negative { -nanos } else { nanos };
                fields.seconds = Some(number);
                continue;
            }

            let slot = match self.peek().map(|b| b.to_ascii_uppercase()) {
                Some(b'H') if fields.hours.is_none()
                           && fields.minutes.is_none()
                           && fields.seconds.is_none()  => &mut fields.hours,
                Some(b'M') if fields.minutes.is_none()
                           && fields.seconds.is_none()  => &mut fields.minutes,
                Some(b'S') if fields.seconds.is_none()  => &mut fields.seconds,
                _ => return Err(self.fail("expected 'H', 'M', or 'S' in order")),
            };

            *slot = Some(number);
            self.position += 1;
        }

        Ok(())
    }
}

/// Adds up the components of a duration, failing if any part overflows.
fn fields_to_duration(cursor: &Cursor<'_>, fields: DurationFields) -> Result<Duration> {
    let components = [
        (fields.days,    86_400),
        (fields.hours,   3600),
        (fields.minutes, 60),
        (fields.seconds, 1),
    ];

    // Summed from the seconds upwards.
    let mut seconds: i64 = 0;
    for (number, multiplier) in components.iter().rev() {
        if let Some(number) = number {
            seconds = number.value.checked_mul(*multiplier)
                            .and_then(|s| seconds.checked_add(s))
                            .ok_or_else(|| cursor.fail_at(number.position, "numeric overflow"))?;
        }
    }

    let duration = Duration::of_seconds_and_nanos(seconds, fields.nanos)
                           .map_err(|_| cursor.fail_at(0, "numeric overflow"))?;

    if fields.negated {
        duration.negated().map_err(|_| cursor.fail_at(0, "numeric overflow"))
    }
    else {
        Ok(duration)
    }
}


// ---- dates and times ----

impl<'a> Cursor<'a> {

    /// `yyyy-MM-dd`. Years outside 0 to 9999 need a sign, and years with
    /// more than four digits need one even if they’re positive.
    fn date(&mut self) -> Result<DateFields> {
        let start = self.position;
        let sign = self.sign();
        let digits_start = self.position;
        let digits = self.digits();

        let valid_length = match sign {
            None         => digits.len() == 4,
            Some(false)  => digits.len() > 4 && digits.len() <= 10,
            Some(true)   => digits.len() >= 4 && digits.len() <= 10,
        };

        if !valid_length {
            return Err(self.fail_at(digits_start, "invalid year"));
        }

        let magnitude: i64 = digits.parse().map_err(|_| self.fail_at(start, "invalid year"))?;
        let year = if sign == Some(true) { -magnitude } else { magnitude };

        self.expect(b'-', "expected '-'")?;
        let month = self.fixed_digits(2, "month")?;
        self.expect(b'-', "expected '-'")?;
        let day = self.fixed_digits(2, "day")?;

        Ok(DateFields { year, month, day })
    }

    /// `HH:mm[:ss[.fffffffff]]`, with one to nine digits of fraction.
    fn time(&mut self) -> Result<TimeFields> {
        let mut fields = TimeFields {
            hour: self.fixed_digits(2, "hour")?,
            .. TimeFields::default()
        };

        self.expect(b':', "expected ':'")?;
        fields.minute = self.fixed_digits(2, "minute")?;

        if self.eat(b':') {
            fields.second = self.fixed_digits(2, "second")?;

            if self.eat(b'.') {
                let start = self.position;
                let fraction = self.digits();
                if fraction.is_empty() || fraction.len() > 9 {
                    return Err(self.fail_at(start, "fraction must have one to nine digits"));
                }

                fields.nanosecond = format!("{:0<9}", fraction).parse().map_err(|_| self.fail_at(start, "invalid fraction"))?;
            }
        }

        Ok(fields)
    }

    fn datetime(&mut self) -> Result<(DateFields, TimeFields)> {
        let date = self.date()?;
        if !self.eat_letter(b'T') {
            return Err(self.fail("expected 'T'"));
        }

        Ok((date, self.time()?))
    }

    /// `Z`, `±HH:MM`, or `±HH:MM:SS`, as used after a date-time.
    fn strict_offset(&mut self) -> Result<OffsetFields> {
        if self.eat_letter(b'Z') {
            return Ok(OffsetFields::Utc);
        }

        let negative = match self.sign() {
            Some(negative) => negative,
            None           => return Err(self.fail("expected an offset")),
        };

        let hours = self.fixed_digits(2, "offset hours")?;
        self.expect(b':', "expected ':'")?;
        let minutes = self.fixed_digits(2, "offset minutes")?;
        let seconds = if self.eat(b':') { self.fixed_digits(2, "offset seconds")? } else { 0 };

        Ok(OffsetFields::Signed { negative, hours, minutes, seconds })
    }

    /// Any of the offset forms accepted on their own.
    fn lenient_offset(&mut self) -> Result<OffsetFields> {
        if self.eat_letter(b'Z') {
            return Ok(OffsetFields::Utc);
        }

        let negative = match self.sign() {
            Some(negative) => negative,
            None           => return Err(self.fail("expected '+' or '-'")),
        };

        let start = self.position;
        let digits = self.digits();

        let (hours, minutes, seconds) = match digits.len() {
            1 | 2 if self.peek().is_none()  => (decimal(digits), 0, 0),
            2                               => {
                self.expect(b':', "expected ':'")?;
                let minutes = self.fixed_digits(2, "offset minutes")?;
                let seconds = if self.eat(b':') { self.fixed_digits(2, "offset seconds")? } else { 0 };
                (decimal(digits), minutes, seconds)
            }
            4 => (decimal(&digits[0..2]), decimal(&digits[2..4]), 0),
            6 => (decimal(&digits[0..2]), decimal(&digits[2..4]), decimal(&digits[4..6])),
            _ => return Err(self.fail_at(start, "invalid offset")),
        };

        Ok(OffsetFields::Signed { negative, hours, minutes, seconds })
    }

    /// An optional zone identifier in square brackets.
    fn zone_id(&mut self) -> Result<Option<&'a str>> {
        if !self.eat(b'[') {
            return Ok(None);
        }

        let start = self.position;
        let length = self.text[start..].find(']').ok_or_else(|| self.fail("expected ']'"))?;
        if length == 0 {
            return Err(self.fail("missing zone"));
        }

        self.position = start + length + 1;
        Ok(Some(&self.text[start .. start + length]))
    }
}

/// The value of a short run of ASCII digits.
fn decimal(digits: &str) -> i64 {
    digits.bytes().fold(0, |n, b| n * 10 + i64::from(b - b'0'))
}

fn fields_to_date(fields: DateFields) -> Result<LocalDate> {
    LocalDate::of(fields.year, fields.month, fields.day)
}

fn fields_to_time(fields: TimeFields) -> Result<LocalTime> {
    LocalTime::of(fields.hour, fields.minute, fields.second, fields.nanosecond)
}

fn fields_to_offset(fields: OffsetFields) -> Result<Offset> {
    match fields {
        OffsetFields::Utc => Ok(Offset::UTC),
        OffsetFields::Signed { negative, hours, minutes, seconds } => {
            let sign = if negative { -1 } else { 1 };
            Offset::of_hours_minutes_seconds(sign * hours, sign * minutes, sign * seconds)
        }
    }
}
