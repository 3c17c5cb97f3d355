use std::sync::Arc;

use calendric::{Instant, LocalDateTime, Offset, ZonedDateTime};
use calendric::clock::{Clock, FixedClock, SystemClock};
use calendric::config::{self, Defaults};
use calendric::zone::{TimeZone, TransitionRules, ZoneRegistry};


#[test]
fn zoned_now_in_a_region() {
    let winter = Offset::of_hours(1).unwrap();
    let summer = Offset::of_hours(2).unwrap();
    let paris = TimeZone::region("Europe/Paris", Arc::new(TransitionRules::new(winter, vec![ (1_206_838_800, summer) ])));

    let clock = FixedClock::new(Instant::at(1_214_820_000), paris);
    let now = ZonedDateTime::now_with(&clock).unwrap();
    assert_eq!(now.to_string(), "2008-06-30T12:00+02:00[Europe/Paris]");
    assert_eq!(Instant::now_with(&clock), Instant::at(1_214_820_000));
}

#[test]
fn installed_defaults_are_used() {
    let clock = FixedClock::new(Instant::at(0), TimeZone::utc());
    config::install(Defaults::new(Arc::new(clock), Arc::new(ZoneRegistry::new()))).unwrap();

    assert_eq!(Instant::now(), Instant::EPOCH);
    assert_eq!(LocalDateTime::now(), LocalDateTime::ymd_hm(1970, 1, 1, 0, 0));
    assert!(config::install(Defaults::system()).is_err());
}

#[test]
fn system_clock_is_after_2020() {
    let clock = SystemClock::utc();
    assert!(clock.instant() > Instant::at(1_577_836_800));
    assert_eq!(clock.zone(), TimeZone::utc());
}
