//! The one error type shared by every fallible operation in this crate.

use thiserror::Error;

use crate::cal::datetime::LocalDateTime;
use crate::cal::field::Field;
use crate::cal::offset::Offset;
use crate::cal::unit::Unit;


/// Everything that can go wrong when constructing, adjusting, or parsing
/// one of the values in this crate.
///
/// Every failure is reported at the call that discovers it, and no
/// operation leaves a half-built value behind.
#[derive(Error, PartialEq, Debug, Clone)]
pub enum Error {

    /// A field was given a value outside of its outer range.
    #[error("Invalid value for {field} (valid values {min} - {max}): {value}")]
    FieldOutOfRange { field: Field, value: i64, min: i64, max: i64 },

    /// Each field is within range, but together they don’t describe a
    /// real value, such as the 31st of February.
    #[error("Invalid date-time: {detail}")]
    InvalidFieldCombination { fields: &'static [Field], detail: String },

    /// The result of a calculation doesn’t fit in the value’s storage.
    #[error("Arithmetic overflow in {0}")]
    ArithmeticOverflow(&'static str),

    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(Unit),

    #[error("Unsupported field: {0}")]
    UnsupportedField(Field),

    /// Only units with an exact length can be used to build a duration.
    #[error("Unit must not have an estimated duration: {0}")]
    EstimatedUnitRejected(Unit),

    #[error("Text '{text}' could not be parsed at index {position}: {reason}")]
    ParseFailure { text: String, reason: String, position: usize },

    #[error("Cannot divide by zero")]
    DivideByZero,

    /// The offset can’t be used with the local date-time in that zone:
    /// either the local date-time falls in a gap, or the offset isn’t one
    /// of the candidates for it.
    #[error("{}", offset_message(.local, .offset, .zone, .gap))]
    InvalidOffsetForZone { local: LocalDateTime, offset: Offset, zone: String, gap: bool },

    #[error("Unknown time-zone ID: {0}")]
    UnknownZone(String),

    /// The process-wide defaults can only be installed once.
    #[error("Process defaults have already been installed")]
    AlreadyConfigured,
}

fn offset_message(local: &LocalDateTime, offset: &Offset, zone: &str, gap: &bool) -> String {
    if *gap {
        format!("LocalDateTime '{}' does not exist in zone '{}' due to a gap in the local time-line", local, zone)
    }
    else {
        format!("Offset '{}' is not valid for LocalDateTime '{}' in zone '{}'", offset, local, zone)
    }
}

/// The result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
