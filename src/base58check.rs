//! Base58Check: Base58 with a trailing four-byte double-SHA-256 checksum.

use sha2::{Digest, Sha256};

use crate::numeric;
use crate::{Error, Result};

const CHECKSUM_LENGTH: usize = 4;

/// Appends the payload's checksum and Base58-encodes the result.
pub fn encode(payload: &[u8]) -> String {
    let mut bytes = payload.to_vec();
    bytes.extend_from_slice(&checksum(payload));

    numeric::encode_base58(&numeric::bytes_to_hex(&bytes))
        .expect("whole bytes re-encode as base58")
}

/// Decodes a Base58Check string, verifying and stripping the checksum.
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    let hex = numeric::decode_base58(encoded)?;
    let bytes = numeric::hex_to_bytes(&hex)?;
    if bytes.len() <= CHECKSUM_LENGTH {
        return Err(Error::InvalidChecksum);
    }

    let (payload, expected) = bytes.split_at(bytes.len() - CHECKSUM_LENGTH);
    if *expected != checksum(payload) {
        return Err(Error::InvalidChecksum);
    }

    Ok(payload.to_vec())
}

/// First four bytes of `SHA-256(SHA-256(payload))`.
fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = Sha256::digest(Sha256::digest(payload));
    let mut truncated = [0u8; CHECKSUM_LENGTH];
    truncated.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        for payload in [&b"\x80abc"[..], &[0x00, 0x00, 0x01][..], &[0xff; 21][..]] {
            let encoded = encode(payload);
            assert_eq!(decode(&encoded).unwrap(), payload);
        }
    }

    #[test]
    fn tampering_breaks_the_checksum() {
        let encoded = encode(b"\x0f\x02payload");
        let mut tampered = encoded.into_bytes();
        let last = tampered.last_mut().unwrap();
        *last = if *last == b'2' { b'3' } else { b'2' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert_eq!(decode(&tampered), Err(Error::InvalidChecksum));
    }

    #[test]
    fn too_short_to_carry_a_checksum() {
        // "1" decodes to the single byte 0x00
        assert_eq!(decode("1"), Err(Error::InvalidChecksum));
    }
}
