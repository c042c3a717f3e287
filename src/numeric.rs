//! Numeric format detection and textual codecs.
//!
//! Every textual number entering the crate passes through here exactly once:
//! [`classify`] tags the representation, [`parse`] converts it to a
//! [`BigUint`], and internal arithmetic never re-sniffs formats afterwards.
//!
//! Accepted input formats are hex (optionally `0x`-prefixed), plain decimal
//! digit strings, binary digit strings and Base58; outputs are lowercase hex,
//! `0x`-prefixed on request.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::{Error, Result};

/// The Base58 alphabet (Bitcoin variant: no `0`, `O`, `I` or `l`).
const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Detected textual representation of a numeric value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumberFormat {
    /// Plain decimal digit string.
    Decimal,
    /// Hexadecimal digit string, optionally `0x`-prefixed.
    Hex,
    /// Binary digit string.
    Binary,
    /// Base58 string.
    Base58,
    /// One of the canonical zero spellings `0`, `0x0`, `0x00`.
    Zero,
    /// Empty or unclassifiable input.
    Unknown,
}

/// Detects the textual representation of `value`.
///
/// The precedence is significant: binary digit strings are also valid
/// decimal, and decimal digit strings are also valid hex, so the narrower
/// alphabet always wins. A leading `-` sign and a `0x` prefix are tolerated
/// for detection.
pub fn classify(value: &str) -> NumberFormat {
    if value.is_empty() {
        return NumberFormat::Unknown;
    }

    if matches!(value, "0" | "0x0" | "0x00") {
        return NumberFormat::Zero;
    }

    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let digits = unsigned.strip_prefix("0x").unwrap_or(unsigned);
    if digits.is_empty() {
        return NumberFormat::Unknown;
    }

    if digits.bytes().all(|b| b == b'0' || b == b'1') {
        NumberFormat::Binary
    } else if digits.bytes().all(|b| b.is_ascii_digit()) {
        NumberFormat::Decimal
    } else if digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        NumberFormat::Hex
    } else if digits.bytes().all(|b| BASE58_ALPHABET.contains(&b)) {
        NumberFormat::Base58
    } else {
        NumberFormat::Unknown
    }
}

/// Parses a textual number in any accepted format into a [`BigUint`].
///
/// This is the system boundary where format detection happens; the scalars
/// this crate operates on are non-negative, so a `-` sign (tolerated by
/// [`classify`] for detection) is rejected here.
pub fn parse(value: &str) -> Result<BigUint> {
    if value.starts_with('-') {
        return Err(invalid(value));
    }

    match classify(value) {
        NumberFormat::Zero => Ok(BigUint::zero()),
        NumberFormat::Binary => accumulate(strip_radix_prefix(value), 2),
        NumberFormat::Decimal => accumulate(strip_radix_prefix(value), 10),
        NumberFormat::Hex => decode_hex(value),
        NumberFormat::Base58 => decode_hex(&decode_base58(strip_radix_prefix(value))?),
        NumberFormat::Unknown => Err(invalid(value)),
    }
}

/// Decodes a hex digit string (optionally `0x`-prefixed) by digit-wise
/// multiply-add.
pub fn decode_hex(hex: &str) -> Result<BigUint> {
    accumulate(strip_radix_prefix(hex), 16)
}

/// Encodes `value` as a lowercase hex string by repeated base-16 remainder
/// extraction. Zero encodes as `"0"`.
pub fn encode_hex(value: &BigUint) -> String {
    const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

    if value.is_zero() {
        return "0".into();
    }

    let base = BigUint::from(16u32);
    let mut remaining = value.clone();
    let mut encoded = Vec::new();

    while !remaining.is_zero() {
        let (quotient, digit) = remaining.div_rem(&base);
        encoded.push(HEX_DIGITS[digit.to_usize().expect("remainder below 16")]);
        remaining = quotient;
    }

    encoded.reverse();
    String::from_utf8(encoded).expect("hex digits are ASCII")
}

/// Encodes `value` as a `0x`-prefixed lowercase hex string, the crate's
/// default output form.
pub fn encode_hex_prefixed(value: &BigUint) -> String {
    format!("0x{}", encode_hex(value))
}

/// Encodes `value` as hex left-padded with zeros to `width` characters.
///
/// Callers pass field elements that are guaranteed to fit the width.
pub fn to_padded_hex(value: &BigUint, width: usize) -> String {
    let hex = encode_hex(value);
    if hex.len() >= width {
        hex
    } else {
        format!("{}{}", "0".repeat(width - hex.len()), hex)
    }
}

/// Base58-encodes a hex string of whole bytes.
///
/// Leading zero bytes of the input map to leading `'1'` characters, one per
/// byte, and are restored exactly by [`decode_base58`].
pub fn encode_base58(hex: &str) -> Result<String> {
    let digits = strip_radix_prefix(hex);
    if digits.is_empty() || digits.len() % 2 != 0 {
        return Err(invalid(hex));
    }

    let leading_zero_bytes = digits
        .as_bytes()
        .chunks(2)
        .take_while(|pair| *pair == b"00")
        .count();

    let mut remaining = decode_hex(digits)?;
    let base = BigUint::from(58u32);
    let mut encoded = Vec::new();

    while !remaining.is_zero() {
        let (quotient, digit) = remaining.div_rem(&base);
        encoded.push(BASE58_ALPHABET[digit.to_usize().expect("remainder below 58")]);
        remaining = quotient;
    }

    for _ in 0..leading_zero_bytes {
        encoded.push(b'1');
    }

    encoded.reverse();
    Ok(String::from_utf8(encoded).expect("alphabet is ASCII"))
}

/// Decodes a Base58 string back into an even-length hex string, restoring
/// one leading `00` byte per leading `'1'` character.
pub fn decode_base58(encoded: &str) -> Result<String> {
    if encoded.is_empty() {
        return Err(invalid(encoded));
    }

    let leading_ones = encoded.bytes().take_while(|&b| b == b'1').count();

    let mut value = BigUint::zero();
    for byte in encoded.bytes() {
        let digit = BASE58_ALPHABET
            .iter()
            .position(|&c| c == byte)
            .ok_or_else(|| invalid(encoded))?;
        value = value * 58u32 + digit;
    }

    let mut hex = if value.is_zero() {
        String::new()
    } else {
        encode_hex(&value)
    };
    if hex.len() % 2 != 0 {
        hex.insert(0, '0');
    }

    Ok(format!("{}{}", "00".repeat(leading_ones), hex))
}

/// Decodes an even-length hex string into bytes.
pub(crate) fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let digits = strip_radix_prefix(hex);
    if digits.is_empty() || digits.len() % 2 != 0 || !digits.is_ascii() {
        return Err(invalid(hex));
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid(hex)))
        .collect()
}

/// Encodes bytes as lowercase hex.
pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

fn strip_radix_prefix(value: &str) -> &str {
    value.strip_prefix("0x").unwrap_or(value)
}

/// Digit-wise multiply-add accumulation in the given radix.
fn accumulate(digits: &str, radix: u32) -> Result<BigUint> {
    if digits.is_empty() {
        return Err(invalid(digits));
    }

    let mut value = BigUint::zero();
    for c in digits.chars() {
        let digit = c.to_digit(radix).ok_or_else(|| invalid(digits))?;
        value = value * radix + digit;
    }
    Ok(value)
}

fn invalid(value: &str) -> Error {
    Error::InvalidNumberFormat {
        value: value.into(),
    }
}
