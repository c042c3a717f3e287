//! Arbitrary-precision integer backend.
//!
//! The backend is chosen at compile time: [`num_bigint`]. Everything the
//! rest of the crate needs from big-integer arithmetic beyond the operator
//! surface of [`BigUint`]/[`BigInt`] funnels through this module, so no
//! other module depends on backend-specific behavior (in particular not on
//! the backend's truncated `%` for negative operands).

use core::mem;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::{Error, Result};

/// Floored (always non-negative) remainder of `value` modulo `modulus`.
///
/// Curve arithmetic routinely produces negative intermediates (chord slopes,
/// `-Py` terms); this is the "mathematically correct" reduction those
/// formulas require. `modulus` must be non-zero.
pub(crate) fn mod_floor(value: &BigInt, modulus: &BigUint) -> BigUint {
    let modulus = BigInt::from(modulus.clone());
    value
        .mod_floor(&modulus)
        .to_biguint()
        .expect("floored remainder of a positive modulus is non-negative")
}

/// Modular inverse of `value` modulo `modulus` via the extended Euclidean
/// algorithm.
///
/// Fails with [`Error::ArithmeticDomain`] when the operands are not coprime
/// (including `value == 0`), never returning a bogus zero inverse.
pub(crate) fn inv_mod(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::ArithmeticDomain);
    }

    let mut r0 = BigInt::from(modulus.clone());
    let mut r1 = BigInt::from(value % modulus);
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();

    while !r1.is_zero() {
        let quotient = &r0 / &r1;
        let remainder = &r0 - &quotient * &r1;
        r0 = mem::replace(&mut r1, remainder);
        let coefficient = &t0 - &quotient * &t1;
        t0 = mem::replace(&mut t1, coefficient);
    }

    if !r0.is_one() {
        return Err(Error::ArithmeticDomain);
    }

    Ok(mod_floor(&t0, modulus))
}

/// Square root of `value` modulo `prime`, for primes `p ≡ 3 (mod 4)`.
///
/// Both supported curve fields satisfy the congruence, so the root is
/// `value^((p+1)/4) mod p`. A quadratic non-residue fails with
/// [`Error::ArithmeticDomain`].
pub(crate) fn sqrt_mod(value: &BigUint, prime: &BigUint) -> Result<BigUint> {
    debug_assert_eq!(prime % 4u32, BigUint::from(3u32));

    let exponent = (prime + 1u32) >> 2;
    let root = value.modpow(&exponent, prime);

    if (&root * &root) % prime == value % prime {
        Ok(root)
    } else {
        Err(Error::ArithmeticDomain)
    }
}

/// Big-endian byte encoding of `value`, left-padded with zeros to exactly
/// `length` bytes.
pub(crate) fn to_fixed_bytes_be(value: &BigUint, length: usize) -> Result<Vec<u8>> {
    let bytes = value.to_bytes_be();
    if bytes.len() > length {
        return Err(Error::ArithmeticDomain);
    }

    let mut padded = vec![0u8; length - bytes.len()];
    padded.extend_from_slice(&bytes);
    Ok(padded)
}
