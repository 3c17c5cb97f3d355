//! Sources of the current instant, paired with the zone they’re read in.

use crate::cal::zone::TimeZone;
use crate::instant::Instant;
use crate::system::sys_time;


/// A **clock** supplies the current instant, along with the time zone that
/// local values created from it should be seen from.
///
/// Every `now` function has a `now_with` twin that takes a clock
/// explicitly; pass a `FixedClock` to make them predictable.
pub trait Clock: Send + Sync {

    /// The current instant on the timeline.
    fn instant(&self) -> Instant;

    /// The zone that local date-times are computed in.
    fn zone(&self) -> TimeZone;
}


/// The computer’s own clock, seen from some time zone.
#[derive(Debug, Clone)]
pub struct SystemClock {
    zone: TimeZone,
}

impl SystemClock {
    pub fn new(zone: TimeZone) -> Self {
        Self { zone }
    }

    pub fn utc() -> Self {
        Self::new(TimeZone::utc())
    }
}

impl Clock for SystemClock {
    fn instant(&self) -> Instant {
        let (seconds, nanos) = sys_time();
        Instant::from_parts(seconds, nanos)
    }

    fn zone(&self) -> TimeZone {
        self.zone.clone()
    }
}


/// A clock that’s stopped at one instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Instant,
    zone: TimeZone,
}

impl FixedClock {
    pub fn new(instant: Instant, zone: TimeZone) -> Self {
        Self { instant, zone }
    }
}

impl Clock for FixedClock {
    fn instant(&self) -> Instant {
        self.instant
    }

    fn zone(&self) -> TimeZone {
        self.zone.clone()
    }
}
