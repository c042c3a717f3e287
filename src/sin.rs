//! Service Identification Number derivation.
//!
//! A SIN is the Base58Check form of a fixed hash pipeline over a compressed
//! public key: `0F 02 ‖ RIPEMD-160(SHA-256(pubkey))`, where `0F` is the SIN
//! version byte and `02` the ephemeral identity type.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::base58check;
use crate::numeric;
use crate::{Error, Result};

const SIN_VERSION: u8 = 0x0f;
const SIN_TYPE_EPHEMERAL: u8 = 0x02;

const COMPRESSED_PUBLIC_KEY_LENGTH: usize = 33;

/// Derives the SIN of a compressed public key given as hex.
pub fn from_public_key(public_key: &str) -> Result<String> {
    let digits = public_key.strip_prefix("0x").unwrap_or(public_key);
    let bytes = numeric::hex_to_bytes(digits).map_err(|_| Error::InvalidPoint)?;
    if bytes.len() != COMPRESSED_PUBLIC_KEY_LENGTH || (bytes[0] != 0x02 && bytes[0] != 0x03) {
        return Err(Error::InvalidPoint);
    }

    let digest = Ripemd160::digest(Sha256::digest(&bytes));

    let mut payload = Vec::with_capacity(2 + digest.len());
    payload.push(SIN_VERSION);
    payload.push(SIN_TYPE_EPHEMERAL);
    payload.extend_from_slice(&digest);

    Ok(base58check::encode(&payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC_KEY_COMPRESSED: &str =
        "033fbbf44c3da3fec12bf7bac254fd176adc3eaed79470932b574d8d60728eb206";

    #[test]
    fn derives_the_expected_sin() {
        assert_eq!(
            from_public_key(PUBLIC_KEY_COMPRESSED).unwrap(),
            "Tf61EPoJDSjbp6tGoyjbTKq7XLABPVcyUwY"
        );
    }

    #[test]
    fn sin_payload_carries_the_version_and_type_prefix() {
        let sin = from_public_key(PUBLIC_KEY_COMPRESSED).unwrap();
        let payload = base58check::decode(&sin).unwrap();

        assert_eq!(payload.len(), 22);
        assert_eq!(&payload[..2], &[SIN_VERSION, SIN_TYPE_EPHEMERAL]);
    }

    #[test]
    fn rejects_uncompressed_and_malformed_keys() {
        assert_eq!(
            from_public_key(&format!("04{}", "ab".repeat(64))),
            Err(Error::InvalidPoint)
        );
        assert_eq!(from_public_key("02abcd"), Err(Error::InvalidPoint));
        assert_eq!(from_public_key("zz"), Err(Error::InvalidPoint));
    }
}
