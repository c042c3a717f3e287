//! Textual codec round-trip tests.

use koblitz::{numeric, BigUint, NumberFormat};
use proptest::prelude::*;

#[test]
fn every_accepted_format_parses_to_the_same_value() {
    // 0xff, decimal 255 and Base58 "5Q" (hex "ff") are the same number
    assert_eq!(numeric::parse("0xff").unwrap(), BigUint::from(255u32));
    assert_eq!(numeric::parse("255").unwrap(), BigUint::from(255u32));
    assert_eq!(numeric::classify("5Q"), NumberFormat::Base58);
    assert_eq!(numeric::parse("5Q").unwrap(), BigUint::from(255u32));
}

proptest! {
    #[test]
    fn hex_round_trips_for_arbitrary_magnitudes(bytes in proptest::collection::vec(any::<u8>(), 0..96)) {
        let value = BigUint::from_bytes_be(&bytes);
        let hex = numeric::encode_hex(&value);
        prop_assert_eq!(numeric::decode_hex(&hex).unwrap(), value.clone());
        prop_assert_eq!(
            numeric::decode_hex(&numeric::encode_hex_prefixed(&value)).unwrap(),
            value
        );
    }

    #[test]
    fn base58_round_trips_preserve_leading_zero_bytes(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
        let hex = hex::encode(&bytes);
        let encoded = numeric::encode_base58(&hex).unwrap();
        prop_assert_eq!(numeric::decode_base58(&encoded).unwrap(), hex);
    }

    #[test]
    fn parse_never_panics(input in "\\PC{0,40}") {
        let _ = numeric::parse(&input);
    }
}
