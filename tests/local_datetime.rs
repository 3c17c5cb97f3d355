use calendric::{LocalDate, LocalDateTime, LocalTime, Offset, Instant, DatePiece, TimePiece};
use calendric::{Duration, Error, Field, Unit, Month};


fn dt(year: i64, month: i64, day: i64, hour: i64, minute: i64) -> LocalDateTime {
    LocalDateTime::ymd_hm(year, month, day, hour, minute).unwrap()
}


mod construction {
    use super::*;

    #[test]
    fn pieces() {
        let then = LocalDateTime::ymd_hms_ns(1989, 11, 9, 18, 53, 7, 1).unwrap();
        assert_eq!(then.date(), LocalDate::of(1989, 11, 9).unwrap());
        assert_eq!(then.time(), LocalTime::of(18, 53, 7, 1).unwrap());
        assert_eq!((then.year(), then.month(), then.hour(), then.nanosecond()), (1989, Month::November, 18, 1));
    }

    #[test]
    fn year_checked_before_anything_else() {
        let error = LocalDateTime::ymd_hm(i64::from(i32::MIN), 7, 15, 12, 30).unwrap_err();
        assert!(matches!(error, Error::FieldOutOfRange { field: Field::Year, .. }));
    }

    #[test]
    fn date_checked_before_time() {
        let error = LocalDateTime::ymd_hm(2007, 2, 29, 25, 0).unwrap_err();
        assert!(matches!(error, Error::InvalidFieldCombination { .. }));
    }
}


mod instants {
    use super::*;

    #[test]
    fn at_the_epoch() {
        assert_eq!(LocalDateTime::from_epoch_second(0, 0, Offset::UTC), Ok(dt(1970, 1, 1, 0, 0)));
    }

    #[test]
    fn a_famous_second() {
        let then = LocalDateTime::from_epoch_second(1_234_567_890, 0, Offset::UTC).unwrap();
        assert_eq!(then, LocalDateTime::ymd_hms(2009, 2, 13, 23, 31, 30).unwrap());
        assert_eq!(then.to_epoch_second(Offset::UTC), 1_234_567_890);
    }

    #[test]
    fn with_an_offset() {
        let offset = Offset::of_hours(2).unwrap();
        let then = LocalDateTime::from_epoch_second(-1, 0, offset).unwrap();
        assert_eq!(then, LocalDateTime::ymd_hms(1970, 1, 1, 1, 59, 59).unwrap());
        assert_eq!(then.to_instant(offset), Instant::at(-1));
    }

    #[test]
    fn fraction_kept() {
        let then = LocalDateTime::from_epoch_second(86_400, 999, Offset::UTC).unwrap();
        assert_eq!(then.nanosecond(), 999);
        assert_eq!(then.to_instant(Offset::UTC).nanos(), 999);
    }

    #[test]
    fn bad_nanosecond() {
        let error = LocalDateTime::from_epoch_second(0, 1_000_000_000, Offset::UTC).unwrap_err();
        assert!(matches!(error, Error::FieldOutOfRange { field: Field::NanoOfSecond, .. }));
    }

    #[test]
    fn beyond_the_calendar() {
        assert!(LocalDateTime::from_epoch_second(i64::MAX, 0, Offset::UTC).is_err());
    }
}


mod arithmetic {
    use super::*;

    #[test]
    fn carrying_into_the_date() {
        assert_eq!(dt(2008, 12, 31, 23, 0).plus_hours(1), Ok(dt(2009, 1, 1, 0, 0)));
        assert_eq!(dt(2008, 3, 1, 0, 0).minus_nanos(1).map(|d| d.day()), Ok(29));
        assert_eq!(dt(2008, 1, 1, 0, 0).plus_minutes(-1), Ok(dt(2007, 12, 31, 23, 59)));
    }

    #[test]
    fn durations() {
        let span = Duration::of_seconds_and_nanos(86_400 + 60, 0).unwrap();
        assert_eq!(dt(2008, 6, 30, 12, 0).plus_duration(span), Ok(dt(2008, 7, 1, 12, 1)));
        assert_eq!(dt(2008, 6, 30, 12, 0).minus_duration(span), Ok(dt(2008, 6, 29, 11, 59)));
    }

    #[test]
    fn date_units_keep_the_time() {
        assert_eq!(dt(2008, 1, 31, 6, 30).plus(1, Unit::Months), Ok(dt(2008, 2, 29, 6, 30)));
        assert_eq!(dt(2008, 1, 31, 6, 30).minus(1, Unit::Weeks), Ok(dt(2008, 1, 24, 6, 30)));
    }

    #[test]
    fn overflow_past_the_end() {
        let end = dt(999_999_999, 1, 1, 0, 0);
        assert_eq!(end.plus_days(i64::MAX), Err(Error::ArithmeticOverflow("plus_days")));
        assert!(LocalDateTime::MAX.plus_nanos(1).is_err());
        assert!(LocalDateTime::MIN.minus_seconds(1).is_err());
    }

    #[test]
    fn until_waits_for_the_time_of_day() {
        let start = dt(2008, 6, 30, 12, 0);
        assert_eq!(start.until(dt(2008, 7, 1, 11, 59), Unit::Days), Ok(0));
        assert_eq!(start.until(dt(2008, 7, 1, 12, 0), Unit::Days), Ok(1));
        assert_eq!(start.until(dt(2008, 6, 29, 12, 1), Unit::Days), Ok(0));
        assert_eq!(start.until(dt(2008, 6, 29, 12, 0), Unit::Days), Ok(-1));
    }

    #[test]
    fn until_in_time_units() {
        let start = dt(2008, 6, 30, 12, 0);
        let end = dt(2008, 7, 2, 11, 0);
        assert_eq!(start.until(end, Unit::Hours), Ok(47));
        assert_eq!(start.until(end, Unit::HalfDays), Ok(3));
        assert_eq!(end.until(start, Unit::Minutes), Ok(-47 * 60));
    }
}


mod adjustment {
    use super::*;

    #[test]
    fn fields() {
        let then = dt(2008, 6, 30, 12, 0);
        assert_eq!(then.with(Field::HourOfDay, 1), Ok(dt(2008, 6, 30, 1, 0)));
        assert_eq!(then.with(Field::DayOfMonth, 1), Ok(dt(2008, 6, 1, 12, 0)));
        assert_eq!(then.with(Field::InstantSeconds, 0), Err(Error::UnsupportedField(Field::InstantSeconds)));
    }

    #[test]
    fn named_components() {
        let then = dt(2008, 2, 29, 12, 0);
        assert_eq!(then.with_year(2009), Ok(dt(2009, 2, 28, 12, 0)));
        assert_eq!(then.with_minute(59), Ok(dt(2008, 2, 29, 12, 59)));
        assert!(then.with_second(60).is_err());
    }

    #[test]
    fn truncation() {
        let then = LocalDateTime::ymd_hms_ns(2008, 6, 30, 12, 34, 56, 789).unwrap();
        assert_eq!(then.truncated_to(Unit::Minutes), Ok(dt(2008, 6, 30, 12, 34)));
        assert_eq!(then.truncated_to(Unit::Days), Ok(dt(2008, 6, 30, 0, 0)));
    }

    #[test]
    fn ordering() {
        assert!(dt(2008, 6, 30, 12, 0) < dt(2008, 6, 30, 12, 1));
        assert!(dt(2008, 6, 30, 23, 59) < dt(2008, 7, 1, 0, 0));
    }
}
