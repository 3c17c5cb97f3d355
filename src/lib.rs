#![crate_name = "calendric"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Immutable values for durations, calendar dates, wall-clock times, and
//! zoned date-times, with checked arithmetic and ISO-8601 text conversion.
//!
//! # Examples
//!
//! ```
//! use calendric::{Duration, LocalDate, LocalDateTime};
//!
//! let date: LocalDate = "2008-02-29".parse().unwrap();
//! assert_eq!(date.plus_years(1).unwrap().to_string(), "2009-02-28");
//!
//! let span: Duration = "PT12M-0.35S".parse().unwrap();
//! assert_eq!(span.lengths(), (719, 650_000_000));
//!
//! let then = LocalDateTime::ymd_hms_ns(999, 12, 31, 23, 59, 59, 990_000_000).unwrap();
//! assert_eq!(then.to_string(), "0999-12-31T23:59:59.990");
//! ```

mod cal;
pub use cal::{DatePiece, TimePiece};
pub use cal::date::{LocalDate, Month, Weekday, Year};
pub use cal::datetime::LocalDateTime;
pub use cal::field::{Field, ValueRange};
pub use cal::fmt::{ISO, ISOString};
pub use cal::offset::Offset;
pub use cal::time::LocalTime;
pub use cal::unit::{CustomUnit, Unit};
pub use cal::zoned::ZonedDateTime;
pub mod zone {
    //! Time zone rules and the providers that hand them out.
    pub use crate::cal::zone::*;
}

pub mod clock;
pub mod config;
mod duration;
pub use duration::{Duration, TimePoint};
mod error;
pub use error::{Error, Result};
mod instant;
pub use instant::Instant;
#[cfg(feature = "serde")]
mod serialization;
mod system;
mod util;
