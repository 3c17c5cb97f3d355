use calendric::{Instant, Duration, Unit, Error, TimePoint};


#[test]
fn epoch() {
    assert_eq!(Instant::EPOCH, Instant::at(0));
    assert_eq!(Instant::EPOCH.to_string(), "1970-01-01T00:00:00Z");
}

#[test]
fn nanos_are_never_negative() {
    let before = Instant::of_epoch_second(0, -1).unwrap();
    assert_eq!((before.seconds(), before.nanos()), (-1, 999_999_999));
}

#[test]
fn millis() {
    let before = Instant::of_epoch_milli(-1);
    assert_eq!((before.seconds(), before.nanos()), (-1, 999_000_000));
    assert_eq!(before.to_epoch_milli(), Ok(-1));
}

#[test]
fn adjustment_overflow() {
    assert_eq!(Instant::of_epoch_second(i64::MAX, 1_000_000_000), Err(Error::ArithmeticOverflow("instant")));
}

#[test]
fn durations() {
    let start = Instant::at(1_234_567_890);
    let span = Duration::of_seconds_and_nanos(0, 1_500_000_000).unwrap();
    let end = start.plus(span).unwrap();
    assert_eq!((end.seconds(), end.nanos()), (1_234_567_891, 500_000_000));
    assert_eq!(end.minus(span), Ok(start));
    assert_eq!(Duration::between(&start, &end), Ok(span));
    assert_eq!(start.nanos_until(&end), 1_500_000_000);
}

#[test]
fn units() {
    let start = Instant::at(0);
    assert_eq!(start.plus_amount(2, Unit::HalfDays), Ok(Instant::at(86_400)));
    assert_eq!(start.until(Instant::at(-5_400), Unit::Hours), Ok(-1));
    assert_eq!(start.plus_amount(1, Unit::Months), Err(Error::UnsupportedUnit(Unit::Months)));
}

#[test]
fn truncation_goes_backwards() {
    let before = Instant::of_epoch_second(-1, 500_000_000).unwrap();
    assert_eq!(before.truncated_to(Unit::Seconds), Ok(Instant::at(-1)));
    assert_eq!(Instant::at(-1).truncated_to(Unit::Days), Ok(Instant::at(-86_400)));
}

#[test]
fn ordering() {
    let early = Instant::of_epoch_second(-1, 999_999_999).unwrap();
    assert!(early.is_before(Instant::EPOCH));
    assert!(Instant::EPOCH.is_after(early));
    assert!(early < Instant::EPOCH);
}

#[test]
fn display() {
    assert_eq!(Instant::at(1_234_567_890).to_string(), "2009-02-13T23:31:30Z");
    assert_eq!(Instant::of_epoch_milli(1).to_string(), "1970-01-01T00:00:00.001Z");
}
