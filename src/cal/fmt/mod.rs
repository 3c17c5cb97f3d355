//! Formatting values as ISO-8601 text.

use std::fmt;

mod iso;


/// Values that have a canonical ISO-8601 representation.
///
/// Every value type’s `Display` implementation writes this representation,
/// and parsing it back gives an equal value.
pub trait ISO: Sized {

    /// Writes this value’s ISO-8601 text to the formatter.
    fn write_iso(&self, f: &mut fmt::Formatter) -> fmt::Result;

    /// Wraps this value so it can be used with formatting macros.
    fn iso(&self) -> ISOString<'_, Self> {
        ISOString(self)
    }
}

/// A value that is formatted as its ISO-8601 text. See `ISO::iso`.
#[derive(Debug, Clone, Copy)]
pub struct ISOString<'a, T: 'a>(&'a T);

impl<T> fmt::Display for ISOString<'_, T> where T: ISO {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.write_iso(f)
    }
}
