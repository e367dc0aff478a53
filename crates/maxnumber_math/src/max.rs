//! Linear-scan maximum over borrowed sequences.

use std::fmt;

use maxnumber_foundation::{Error, Result};

/// Value returned by [`max_number`] for absent or empty input.
pub const DEFAULT_FALLBACK: i32 = 0;

/// Returns the largest value in `sequence`, or `0` if it is absent or empty.
///
/// Never fails and never panics. Negative values compare as signed integers.
///
/// ```
/// use maxnumber_math::max_number;
///
/// assert_eq!(max_number(Some(&[1, 3, 9, 5])), 9);
/// assert_eq!(max_number(Some(&[])), 0);
/// assert_eq!(max_number(None), 0);
/// ```
#[must_use]
pub fn max_number(sequence: Option<&[i32]>) -> i32 {
    max_or(sequence, DEFAULT_FALLBACK)
}

/// Returns the largest value in `sequence`, or `fallback` if it is absent or empty.
#[must_use]
pub fn max_or<T>(sequence: Option<&[T]>, fallback: T) -> T
where
    T: Ord + Copy + fmt::Debug,
{
    let Some(sequence) = sequence else {
        tracing::trace!(reason = "absent", ?fallback, "max fallback");
        return fallback;
    };
    match scan(sequence) {
        Some(max) => max,
        None => {
            tracing::trace!(reason = "empty", ?fallback, "max fallback");
            fallback
        }
    }
}

/// Returns the largest value in `sequence`, or an error if it is absent or empty.
///
/// Use this when a real maximum of `0` must be told apart from the fallback.
///
/// # Errors
///
/// Returns [`ErrorKind::AbsentSequence`] for `None` and [`ErrorKind::EmptySequence`] for an
/// empty slice.
///
/// [`ErrorKind::AbsentSequence`]: maxnumber_foundation::ErrorKind::AbsentSequence
/// [`ErrorKind::EmptySequence`]: maxnumber_foundation::ErrorKind::EmptySequence
pub fn try_max_number(sequence: Option<&[i32]>) -> Result<i32> {
    let sequence = sequence.ok_or_else(Error::absent_sequence)?;
    scan(sequence).ok_or_else(Error::empty_sequence)
}

// Running maximum seeded from the first element.
fn scan<T: Ord + Copy>(sequence: &[T]) -> Option<T> {
    let (&first, rest) = sequence.split_first()?;
    let mut result = first;
    for &value in rest {
        if value > result {
            result = value;
        }
    }
    Some(result)
}
