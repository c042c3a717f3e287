//! Wallet Import Format: Base58Check encoding of a private key.

use crate::base58check;
use crate::numeric;
use crate::{Error, Result};

/// Version byte of the main Bitcoin network.
pub const MAINNET_VERSION: u8 = 0x80;

const PRIVATE_KEY_LENGTH: usize = 32;

/// Encodes a 32-byte private key hex string as WIF under the given network
/// version byte.
pub fn encode(private_key_hex: &str, version: u8) -> Result<String> {
    let digits = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
    if digits.len() != 2 * PRIVATE_KEY_LENGTH {
        return Err(Error::InvalidPrivateKey);
    }

    let key = numeric::hex_to_bytes(digits).map_err(|_| Error::InvalidPrivateKey)?;
    let mut payload = Vec::with_capacity(1 + PRIVATE_KEY_LENGTH);
    payload.push(version);
    payload.extend_from_slice(&key);

    Ok(base58check::encode(&payload))
}

/// Decodes a WIF string back into its private key hex and version byte.
pub fn decode(wif: &str) -> Result<(String, u8)> {
    let payload = base58check::decode(wif)?;
    if payload.len() != 1 + PRIVATE_KEY_LENGTH {
        return Err(Error::InvalidPrivateKey);
    }

    Ok((numeric::bytes_to_hex(&payload[1..]), payload[0]))
}
