//! The process-wide defaults used by the parameterless `now` functions and
//! by parsing zoned text.
//!
//! The defaults are set at most once. Install them at start-up with
//! `install`; otherwise the first call to `defaults` sets up the system
//! clock in the system’s time zone, with an empty zone registry.

use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::cal::zone::{TimeZone, ZoneProvider, ZoneRegistry};
use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::system::sys_timezone;


static DEFAULTS: OnceLock<Defaults> = OnceLock::new();

/// The clock and the zone provider to use when none is given explicitly.
#[derive(Clone)]
pub struct Defaults {
    pub clock: Arc<dyn Clock>,
    pub zones: Arc<dyn ZoneProvider>,
}

impl Defaults {
    pub fn new(clock: Arc<dyn Clock>, zones: Arc<dyn ZoneProvider>) -> Self {
        Self { clock, zones }
    }

    /// The computer’s clock, seen from the system time zone if the zone
    /// registry knows it, and from UTC if it doesn’t.
    pub fn system() -> Self {
        Self::system_with(Arc::new(ZoneRegistry::new()))
    }

    /// The computer’s clock, looking the system time zone up in the given
    /// provider.
    pub fn system_with(zones: Arc<dyn ZoneProvider>) -> Self {
        let zone = sys_timezone()
            .and_then(|id| TimeZone::of(&id, &*zones).ok())
            .unwrap_or_else(TimeZone::utc);

        Self { clock: Arc::new(SystemClock::new(zone)), zones }
    }
}

impl fmt::Debug for Defaults {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Defaults")
         .field("zone", &self.clock.zone().id())
         .finish_non_exhaustive()
    }
}

/// Sets the process-wide defaults.
///
/// ## Errors
///
/// Returns `AlreadyConfigured` if the defaults have already been installed,
/// or were already set up by an earlier call to `defaults`.
pub fn install(defaults: Defaults) -> Result<()> {
    let zone = defaults.clock.zone();
    DEFAULTS.set(defaults).map_err(|_| Error::AlreadyConfigured)?;
    debug!(zone = %zone, "installed process defaults");
    Ok(())
}

/// Gets the process-wide defaults, setting up the system ones if nothing
/// has been installed yet.
pub fn defaults() -> &'static Defaults {
    DEFAULTS.get_or_init(|| {
        let defaults = Defaults::system();
        debug!(zone = %defaults.clock.zone(), "using system defaults");
        defaults
    })
}
