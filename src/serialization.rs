//! Serde support, with every value written as its ISO-8601 text.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::cal::date::LocalDate;
use crate::cal::datetime::LocalDateTime;
use crate::cal::offset::Offset;
use crate::cal::time::LocalTime;
use crate::cal::zoned::ZonedDateTime;
use crate::duration::Duration;
use crate::error::Error;


/// Reads a string and parses it, reporting the parse failure as a serde
/// error.
struct IsoVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for IsoVisitor<T> where T: FromStr<Err = Error> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an ISO-8601 string")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<T, E> {
        text.parse().map_err(E::custom)
    }
}

macro_rules! serde_as_iso {
    ($($t:ty),*) => {
        $(
            impl Serialize for $t {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $t {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserializer.deserialize_str(IsoVisitor(PhantomData))
                }
            }
        )*
    };
}

serde_as_iso!(Duration, LocalDate, LocalTime, LocalDateTime, Offset, ZonedDateTime);
