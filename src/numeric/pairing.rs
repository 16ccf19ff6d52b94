use num_bigint::BigUint;

use crate::{error::NumericError, util::num::shift_amount_checked};

/// Largest exponent `phi` accepts for its first argument.
///
/// `phi(n, m)` has roughly `n` bits, so this bounds the size of any single
/// Gödel number at about two megabytes.
pub const MAX_PAIRING_EXPONENT: u64 = 1 << 24;

/// Packs two naturals into one: `phi(n, m) = 2^n * (2m + 1) - 1`.
///
/// This is a bijection between pairs of naturals and naturals; [`phi_prime`]
/// is its inverse.
///
/// # Errors
/// Returns `NumericError::TooLarge` if `n` exceeds [`MAX_PAIRING_EXPONENT`].
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use whilelang::numeric::phi;
///
/// let pair = |n: u32, m: u32| phi(&n.into(), &m.into()).unwrap();
///
/// assert_eq!(pair(0, 0), BigUint::from(0u32));
/// assert_eq!(pair(1, 0), BigUint::from(1u32));
/// assert_eq!(pair(0, 1), BigUint::from(2u32));
/// assert_eq!(pair(2, 1), BigUint::from(11u32));
/// ```
pub fn phi(n: &BigUint, m: &BigUint) -> Result<BigUint, NumericError> {
    let shift = shift_amount_checked(n, MAX_PAIRING_EXPONENT).ok_or(NumericError::TooLarge)?;
    let odd: BigUint = (m << 1u32) + 1u32;
    Ok((odd << shift) - 1u32)
}

/// Unpacks a number produced by [`phi`] into its two components.
///
/// `x + 1` is split into a power of two `2^n` and an odd factor `2m + 1`.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use whilelang::numeric::phi_prime;
///
/// let (n, m) = phi_prime(&BigUint::from(11u32));
///
/// assert_eq!(n, BigUint::from(2u32));
/// assert_eq!(m, BigUint::from(1u32));
/// ```
#[must_use]
pub fn phi_prime(x: &BigUint) -> (BigUint, BigUint) {
    let successor = x + 1u32;
    let n = successor.trailing_zeros().unwrap_or(0);
    let odd = successor >> n;
    let m = (odd - 1u32) >> 1u32;
    (BigUint::from(n), m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u32) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn small_pairs() {
        assert_eq!(phi(&big(0), &big(0)).unwrap(), big(0));
        assert_eq!(phi(&big(1), &big(0)).unwrap(), big(1));
        assert_eq!(phi(&big(0), &big(1)).unwrap(), big(2));
        assert_eq!(phi(&big(3), &big(2)).unwrap(), big(39));
    }

    #[test]
    fn inverse_covers_every_small_number() {
        for x in 0u32..512 {
            let (n, m) = phi_prime(&big(x));
            assert_eq!(phi(&n, &m).unwrap(), big(x));
        }
    }

    #[test]
    fn exponent_limit_is_enforced() {
        let n = BigUint::from(MAX_PAIRING_EXPONENT) + 1u32;
        assert_eq!(phi(&n, &big(0)), Err(NumericError::TooLarge));
    }
}
