//! Misc stuff.

use crate::error::{Error, Result};


/// Turns the `None` from a checked arithmetic operation into an overflow
/// error naming the operation that failed.
pub(crate) trait OrOverflow<T> {
    fn or_overflow(self, operation: &'static str) -> Result<T>;
}

impl<T> OrOverflow<T> for Option<T> {
    fn or_overflow(self, operation: &'static str) -> Result<T> {
        self.ok_or(Error::ArithmeticOverflow(operation))
    }
}


/// Split a number of periods into a number of whole cycles, and the number
/// of periods left over that don’t fit into a cycle.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}

/// The same as `split_cycles`, for quantities measured in nanoseconds.
pub(crate) fn split_wide_cycles(number_of_periods: i128, cycle_length: i128) -> (i128, i128) {
    (number_of_periods.div_euclid(cycle_length), number_of_periods.rem_euclid(cycle_length))
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn positive() {
        assert_eq!(split_cycles(17, 5), (3, 2));
    }

    #[test]
    fn negative_wraps_around() {
        assert_eq!(split_cycles(-1, 7), (-1, 6));
        assert_eq!(split_wide_cycles(-1_000_000_001, 1_000_000_000), (-2, 999_999_999));
    }

    #[test]
    fn exact() {
        assert_eq!(split_cycles(-14, 7), (-2, 0));
    }
}
