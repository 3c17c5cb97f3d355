use calendric::{LocalDate, Month, Weekday, Year, DatePiece, Error, Field, Unit};
use calendric::Month::*;


mod leap_years {
    use super::*;

    #[test]
    fn divisible_by_four() {
        assert!(Year(2004).is_leap_year());
        assert!(Year(-4).is_leap_year());
        assert!(!Year(2005).is_leap_year());
    }

    #[test]
    fn centuries() {
        assert!(!Year(1900).is_leap_year());
        assert!(!Year(2100).is_leap_year());
        assert!(Year(2000).is_leap_year());
        assert!(Year(1600).is_leap_year());
    }

    #[test]
    fn lengths() {
        assert_eq!(Year(2000).length(), 366);
        assert_eq!(Year(1900).length(), 365);
        assert_eq!(February.length(true), 29);
        assert_eq!(February.length(false), 28);
    }
}


mod ymd {
    use super::*;

    #[test]
    fn the_distant_past() {
        let date = LocalDate::of(7, 4, 1).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (7, April, 1));
    }

    #[test]
    fn just_before_the_epoch() {
        let date = LocalDate::of(1969, 12, 31).unwrap();
        assert_eq!(date.to_epoch_day(), -1);
        assert_eq!(date.weekday(), Weekday::Wednesday);
    }

    #[test]
    fn a_leap_day() {
        let date = LocalDate::ymd(2008, February, 29).unwrap();
        assert_eq!(date.yearday(), 60);
        assert_eq!(date.to_epoch_day(), 13_938);
    }

    #[test]
    fn the_distant_future() {
        let date = LocalDate::of(1_000_000, 12, 31).unwrap();
        assert_eq!(LocalDate::from_epoch_day(date.to_epoch_day()), Ok(date));
    }

    #[test]
    fn out_of_range_names_the_first_field() {
        let error = LocalDate::of(1_000_000_000, 13, 32).unwrap_err();
        assert!(matches!(error, Error::FieldOutOfRange { field: Field::Year, .. }));

        let error = LocalDate::of(2008, 13, 32).unwrap_err();
        assert!(matches!(error, Error::FieldOutOfRange { field: Field::MonthOfYear, value: 13, .. }));

        let error = LocalDate::of(2008, 12, 32).unwrap_err();
        assert!(matches!(error, Error::FieldOutOfRange { field: Field::DayOfMonth, value: 32, .. }));
    }

    #[test]
    fn invalid_combination() {
        let error = LocalDate::of(2007, 2, 29).unwrap_err();
        assert_eq!(error.to_string(), "Invalid date-time: Invalid date 'February 29' as '2007' is not a leap year");

        let error = LocalDate::of(2008, 4, 31).unwrap_err();
        assert_eq!(error.to_string(), "Invalid date-time: Invalid date 'APRIL 31'");
    }

    #[test]
    fn extremes() {
        assert_eq!(LocalDate::of(-999_999_999, 1, 1), Ok(LocalDate::MIN));
        assert_eq!(LocalDate::of(999_999_999, 12, 31), Ok(LocalDate::MAX));
        assert!(LocalDate::MAX.plus_days(1).is_err());
        assert!(LocalDate::MIN.minus_days(1).is_err());
    }
}


mod yd {
    use super::*;

    #[test]
    fn start_of_year() {
        assert_eq!(LocalDate::yd(2015, 1), LocalDate::of(2015, 1, 1));
    }

    #[test]
    fn end_of_leap_year() {
        assert_eq!(LocalDate::yd(2016, 366), LocalDate::of(2016, 12, 31));
    }

    #[test]
    fn day_after_february() {
        assert_eq!(LocalDate::yd(2016, 60), LocalDate::of(2016, 2, 29));
        assert_eq!(LocalDate::yd(2015, 60), LocalDate::of(2015, 3, 1));
    }

    #[test]
    fn every_day_of_a_year() {
        for yearday in 1 ..= 366 {
            let date = LocalDate::yd(2000, yearday).unwrap();
            assert_eq!(i64::from(date.yearday()), yearday);
        }
    }

    #[test]
    fn not_a_leap_year() {
        let error = LocalDate::yd(2015, 366).unwrap_err();
        assert_eq!(error.to_string(), "Invalid date-time: Invalid date 'DayOfYear 366' as '2015' is not a leap year");
    }
}


mod epoch_days {
    use super::*;

    #[test]
    fn known_days() {
        assert_eq!(LocalDate::from_epoch_day(0), Ok(LocalDate::EPOCH));
        assert_eq!(LocalDate::from_epoch_day(14_060), LocalDate::of(2008, 6, 30));
        assert_eq!(LocalDate::from_epoch_day(-719_528), LocalDate::of(0, 1, 1));
    }

    #[test]
    fn weekdays_cycle() {
        let start = LocalDate::of(2023, 1, 2).unwrap();
        assert_eq!(start.weekday(), Weekday::Monday);
        assert_eq!(start.plus_days(6).unwrap().weekday(), Weekday::Sunday);
        assert_eq!(start.minus_days(1).unwrap().weekday(), Weekday::Sunday);
    }
}


mod arithmetic {
    use super::*;

    fn date(year: i64, month: i64, day: i64) -> LocalDate {
        LocalDate::of(year, month, day).unwrap()
    }

    #[test]
    fn months_clamp_to_the_end() {
        assert_eq!(date(2008, 1, 31).plus_months(1), Ok(date(2008, 2, 29)));
        assert_eq!(date(2007, 3, 31).minus_months(1), Ok(date(2007, 2, 28)));
        assert_eq!(date(2008, 1, 31).plus_months(-13), Ok(date(2006, 12, 31)));
    }

    #[test]
    fn years_from_a_leap_day() {
        assert_eq!(date(2008, 2, 29).plus_years(1), Ok(date(2009, 2, 28)));
        assert_eq!(date(2008, 2, 29).plus_years(4), Ok(date(2012, 2, 29)));
    }

    #[test]
    fn year_overflow() {
        let error = date(2008, 1, 1).plus_years(i64::MAX).unwrap_err();
        assert!(matches!(error, Error::FieldOutOfRange { field: Field::Year, .. }));
    }

    #[test]
    fn by_unit() {
        let start = date(2000, 1, 15);
        assert_eq!(start.plus(2, Unit::Weeks), Ok(date(2000, 1, 29)));
        assert_eq!(start.plus(1, Unit::Decades), Ok(date(2010, 1, 15)));
        assert_eq!(start.minus(1, Unit::Millennia), Ok(date(1000, 1, 15)));
        assert_eq!(start.plus(1, Unit::Hours), Err(Error::UnsupportedUnit(Unit::Hours)));
    }

    #[test]
    fn until() {
        let start = date(2000, 1, 15);
        let end = date(2001, 1, 14);
        assert_eq!(start.until(end, Unit::Days), Ok(365));
        assert_eq!(start.until(end, Unit::Weeks), Ok(52));
        assert_eq!(start.until(end, Unit::Months), Ok(11));
        assert_eq!(start.until(end, Unit::Years), Ok(0));
        assert_eq!(end.until(start, Unit::Months), Ok(-11));
    }
}


mod fields {
    use super::*;

    #[test]
    fn get() {
        let date = LocalDate::of(2008, 6, 30).unwrap();
        assert_eq!(date.get(Field::DayOfWeek), Ok(1));
        assert_eq!(date.get(Field::DayOfYear), Ok(182));
        assert_eq!(date.get(Field::AlignedWeekOfMonth), Ok(5));
        assert_eq!(date.get(Field::ProlepticMonth), Ok(2008 * 12 + 5));
        assert_eq!(date.get(Field::Era), Ok(1));
        assert_eq!(date.get(Field::HourOfDay), Err(Error::UnsupportedField(Field::HourOfDay)));
    }

    #[test]
    fn with() {
        let date = LocalDate::of(2008, 6, 30).unwrap();
        assert_eq!(date.with(Field::DayOfWeek, 7), LocalDate::of(2008, 7, 6));
        assert_eq!(date.with(Field::MonthOfYear, 2), LocalDate::of(2008, 2, 29));
        assert_eq!(date.with(Field::Era, 0), LocalDate::of(-2007, 6, 30));
        assert!(date.with(Field::DayOfMonth, 31).is_err());
    }

    #[test]
    fn ranges() {
        let date = LocalDate::of(2007, 2, 1).unwrap();
        assert_eq!(date.range(Field::DayOfMonth).map(|r| r.max()), Ok(28));
        assert_eq!(date.range(Field::AlignedWeekOfMonth).map(|r| r.max()), Ok(4));
        assert_eq!(date.range(Field::DayOfYear).map(|r| r.max()), Ok(365));
    }

    #[test]
    fn months_by_number() {
        assert_eq!(Month::from_one(12), Ok(December));
        assert_eq!(Month::from_zero(0), Ok(January));
        assert_eq!(December.plus(1), January);
    }
}
