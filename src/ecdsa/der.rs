//! DER encoding of ECDSA signatures.
//!
//! The layout is `30 LL 02 Lr r 02 Ls s` with fixed-width scalars: each of
//! `r` and `s` is emitted as exactly `scalar_length` big-endian bytes
//! (zero-padded on the left), preceded by a `00` pad byte whenever the most
//! significant bit of its first byte is set, keeping the DER integer
//! non-negative. For 32-byte scalars the complete signature is therefore
//! 70, 71 or 72 bytes (140/142/144 hex characters).
//!
//! Decoding is strict structural validation: sequence tag, integer tags and
//! every length byte are checked against the expected constants, and any
//! mismatch is [`Error::MalformedSignature`] rather than best-effort
//! recovery.

use num_bigint::BigUint;

use crate::numeric;
use crate::{Error, Result};

const SEQUENCE_TAG: u8 = 0x30;
const INTEGER_TAG: u8 = 0x02;

/// DER-encodes the scalar pair `(r, s)` as lowercase hex.
///
/// Fails with [`Error::MalformedSignature`] if either scalar exceeds
/// `scalar_length` bytes.
pub fn encode(r: &BigUint, s: &BigUint, scalar_length: usize) -> Result<String> {
    let r_block = integer_block(r, scalar_length)?;
    let s_block = integer_block(s, scalar_length)?;

    let mut encoded = Vec::with_capacity(2 + r_block.len() + s_block.len());
    encoded.push(SEQUENCE_TAG);
    encoded.push((r_block.len() + s_block.len()) as u8);
    encoded.extend_from_slice(&r_block);
    encoded.extend_from_slice(&s_block);

    Ok(numeric::bytes_to_hex(&encoded))
}

/// Decodes a hex DER signature back into the scalar pair `(r, s)`.
pub fn decode(signature: &str, scalar_length: usize) -> Result<(BigUint, BigUint)> {
    let digits = signature.strip_prefix("0x").unwrap_or(signature);

    let minimum = 2 * scalar_length + 6;
    if !(minimum..=minimum + 2).contains(&(digits.len() / 2)) || digits.len() % 2 != 0 {
        return Err(Error::MalformedSignature);
    }

    let bytes = numeric::hex_to_bytes(digits).map_err(|_| Error::MalformedSignature)?;
    if bytes[0] != SEQUENCE_TAG || bytes[1] as usize != bytes.len() - 2 {
        return Err(Error::MalformedSignature);
    }

    let (r, offset) = read_integer(&bytes, 2, scalar_length)?;
    let (s, offset) = read_integer(&bytes, offset, scalar_length)?;
    if offset != bytes.len() {
        return Err(Error::MalformedSignature);
    }

    Ok((r, s))
}

/// `02 ‖ length ‖ value`, with a `00` pad byte when the value's MSB is set.
fn integer_block(value: &BigUint, scalar_length: usize) -> Result<Vec<u8>> {
    let bytes = crate::bigint::to_fixed_bytes_be(value, scalar_length)
        .map_err(|_| Error::MalformedSignature)?;

    let mut block = Vec::with_capacity(scalar_length + 3);
    block.push(INTEGER_TAG);
    if bytes[0] & 0x80 != 0 {
        block.push((scalar_length + 1) as u8);
        block.push(0x00);
    } else {
        block.push(scalar_length as u8);
    }
    block.extend_from_slice(&bytes);

    Ok(block)
}

/// Reads one strictly-validated integer block starting at `offset`.
fn read_integer(bytes: &[u8], offset: usize, scalar_length: usize) -> Result<(BigUint, usize)> {
    if bytes.len() < offset + 2 || bytes[offset] != INTEGER_TAG {
        return Err(Error::MalformedSignature);
    }

    let length = bytes[offset + 1] as usize;
    if length != scalar_length && length != scalar_length + 1 {
        return Err(Error::MalformedSignature);
    }

    let start = offset + 2;
    let end = start + length;
    if bytes.len() < end {
        return Err(Error::MalformedSignature);
    }

    let mut payload = &bytes[start..end];
    if length == scalar_length + 1 {
        // the pad byte must be zero and must be justified by a set MSB
        if payload[0] != 0x00 || payload[1] & 0x80 == 0 {
            return Err(Error::MalformedSignature);
        }
        payload = &payload[1..];
    }

    Ok((BigUint::from_bytes_be(payload), end))
}
