use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;

/// Splits `num` into `(num / modulus, num % modulus)`.
///
/// The remainder is always below `modulus` and is returned as a machine
/// integer so callers can `match` on it.
///
/// ## Example
/// ```
/// use num_bigint::BigUint;
/// use whilelang::util::num::split_tag;
///
/// let (quotient, tag) = split_tag(&BigUint::from(17u32), 5);
///
/// assert_eq!(quotient, BigUint::from(3u32));
/// assert_eq!(tag, 2);
/// ```
#[must_use]
pub fn split_tag(num: &BigUint, modulus: u32) -> (BigUint, u32) {
    let (quotient, remainder) = num.div_rem(&BigUint::from(modulus));
    (quotient, remainder.iter_u32_digits().next().unwrap_or(0))
}

/// Computes `tag + modulus * payload`, the inverse of [`split_tag`].
#[must_use]
pub fn join_tag(payload: BigUint, modulus: u32, tag: u32) -> BigUint {
    payload * modulus + tag
}

/// Converts `value` to a shift amount if it does not exceed `limit`.
///
/// ## Returns
/// - `Some(u64)`: The value, if it is at most `limit`.
/// - `None`: If the value is larger.
///
/// ## Example
/// ```
/// use num_bigint::BigUint;
/// use whilelang::util::num::shift_amount_checked;
///
/// assert_eq!(shift_amount_checked(&BigUint::from(12u32), 64), Some(12));
/// assert_eq!(shift_amount_checked(&BigUint::from(65u32), 64), None);
/// ```
#[must_use]
pub fn shift_amount_checked(value: &BigUint, limit: u64) -> Option<u64> {
    value.to_u64().filter(|shift| *shift <= limit)
}

/// Converts `value` to an index into a small table.
#[must_use]
pub fn index_checked(value: &BigUint) -> Option<usize> {
    value.to_usize()
}
