/// Safely converts an `i64` to `usize`, rejecting negative values.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or does not fit a `usize`.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if the conversion is not possible.
///
/// ## Example
/// ```
/// use dakota::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(3, "negative!").unwrap(), 3);
/// assert!(i64_to_usize_checked(-1, "negative!").is_err());
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}

/// Converts a `usize` into `i64` for values returned to user programs.
///
/// ## Example
/// ```
/// use dakota::util::num::usize_to_i64;
///
/// assert_eq!(usize_to_i64(7), 7);
/// ```
#[must_use]
pub fn usize_to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
