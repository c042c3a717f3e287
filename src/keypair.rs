//! Keypair generation and SEC1-style public key encoding.
//!
//! Private scalars are drawn from the open range `(1, n − 1)` by rejection
//! sampling against a caller-supplied cryptographically secure generator;
//! public points are derived with the Montgomery ladder. Hex forms of the
//! private scalar are zeroized when a [`KeyPair`] is dropped.

use core::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::arithmetic::{AffinePoint, PointArithmetic};
use crate::bigint;
use crate::curve::CurveParams;
use crate::numeric;
use crate::{Error, Result};

/// Bound on rejection-sampling redraws before the random source is declared
/// broken. A working source practically never rejects more than a handful of
/// draws (rejection probability is ~2⁻¹²⁸ per draw or smaller).
const MAX_RANDOM_DRAWS: usize = 128;

/// A private scalar and its derived public point, in the textual forms the
/// rest of the system consumes.
#[derive(Clone, Eq, PartialEq)]
pub struct KeyPair {
    private_key_hex: String,
    private_key_dec: String,
    public_x: String,
    public_y: String,
    public_key_uncompressed: String,
    public_key_compressed: String,
}

impl KeyPair {
    /// Generates a fresh keypair from the given secure random source.
    pub fn generate(
        curve: &CurveParams,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<Self> {
        let d = random_scalar(curve, rng)?;
        Self::from_private_scalar(curve, &d)
    }

    /// Generates a fresh keypair using the operating system's secure random
    /// number generator.
    #[cfg(feature = "getrandom")]
    pub fn random(curve: &CurveParams) -> Result<Self> {
        Self::generate(curve, &mut rand_core::OsRng)
    }

    /// Derives the keypair of an existing private scalar.
    ///
    /// The scalar must lie in `[1, n − 1]`.
    pub fn from_private_scalar(curve: &CurveParams, d: &BigUint) -> Result<Self> {
        if !curve.contains_private_scalar(d) {
            return Err(Error::InvalidPrivateKey);
        }

        let arithmetic = PointArithmetic::new(curve);
        let public = arithmetic.mul(&curve.generator(), d)?;
        let (x, y) = public.coordinates().ok_or(Error::InvalidPoint)?;

        let width = 2 * curve.field_byte_length();
        let x_hex = numeric::to_padded_hex(x, width);
        let y_hex = numeric::to_padded_hex(y, width);
        let parity_prefix = if y.is_odd() { "03" } else { "02" };

        Ok(Self {
            private_key_hex: numeric::to_padded_hex(d, width),
            private_key_dec: d.to_string(),
            public_key_uncompressed: format!("04{x_hex}{y_hex}"),
            public_key_compressed: format!("{parity_prefix}{x_hex}"),
            public_x: x_hex,
            public_y: y_hex,
        })
    }

    /// Derives the keypair of a private key given as a fixed-width hex
    /// string (64 characters for secp256k1, optionally `0x`-prefixed).
    pub fn from_private_key_hex(curve: &CurveParams, private_key: &str) -> Result<Self> {
        let digits = private_key.strip_prefix("0x").unwrap_or(private_key);
        if digits.len() != 2 * curve.field_byte_length() {
            return Err(Error::InvalidPrivateKey);
        }

        let d = numeric::decode_hex(digits).map_err(|_| Error::InvalidPrivateKey)?;
        Self::from_private_scalar(curve, &d)
    }

    /// Rehydrates a keypair from previously computed field values.
    ///
    /// The values are taken verbatim, with no recomputation or cross-field
    /// validation beyond presence; callers are responsible for consistency.
    pub fn from_parts(
        private_key_hex: String,
        private_key_dec: String,
        public_x: String,
        public_y: String,
        public_key_uncompressed: String,
        public_key_compressed: String,
    ) -> Result<Self> {
        if private_key_hex.is_empty() || private_key_dec.is_empty() {
            return Err(Error::InvalidPrivateKey);
        }
        if public_x.is_empty()
            || public_y.is_empty()
            || public_key_uncompressed.is_empty()
            || public_key_compressed.is_empty()
        {
            return Err(Error::InvalidPoint);
        }

        Ok(Self {
            private_key_hex,
            private_key_dec,
            public_x,
            public_y,
            public_key_uncompressed,
            public_key_compressed,
        })
    }

    /// Private scalar as fixed-width hex.
    pub fn private_key_hex(&self) -> &str {
        &self.private_key_hex
    }

    /// Private scalar as a decimal digit string.
    pub fn private_key_dec(&self) -> &str {
        &self.private_key_dec
    }

    /// x-coordinate of the public point, fixed-width hex.
    pub fn public_x(&self) -> &str {
        &self.public_x
    }

    /// y-coordinate of the public point, fixed-width hex.
    pub fn public_y(&self) -> &str {
        &self.public_y
    }

    /// Uncompressed SEC1 public key: `04 ‖ x ‖ y`.
    pub fn public_key_uncompressed(&self) -> &str {
        &self.public_key_uncompressed
    }

    /// Compressed SEC1 public key: `02/03 ‖ x`, prefix selected by the
    /// parity of `y`.
    pub fn public_key_compressed(&self) -> &str {
        &self.public_key_compressed
    }
}

impl fmt::Debug for KeyPair {
    /// Omits the private scalar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key_compressed", &self.public_key_compressed)
            .finish_non_exhaustive()
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.private_key_hex.zeroize();
        self.private_key_dec.zeroize();
    }
}

/// Draws a scalar uniformly from the open range `(1, n − 1)`, redrawing on
/// out-of-range values.
///
/// A failing random source, or exhaustion of the redraw bound, is
/// [`Error::InsufficientEntropy`].
pub(crate) fn random_scalar(
    curve: &CurveParams,
    rng: &mut (impl RngCore + CryptoRng),
) -> Result<BigUint> {
    let mut buffer = vec![0u8; curve.field_byte_length()];
    let lower = BigUint::from(1u32);
    let upper = curve.n() - 1u32;

    for _ in 0..MAX_RANDOM_DRAWS {
        rng.try_fill_bytes(&mut buffer)
            .map_err(|_| Error::InsufficientEntropy)?;
        let candidate = BigUint::from_bytes_be(&buffer);

        if candidate > lower && candidate < upper {
            buffer.zeroize();
            return Ok(candidate);
        }
    }

    buffer.zeroize();
    Err(Error::InsufficientEntropy)
}

/// Parses a hex public key in either SEC1 form, validating the recovered
/// point against the curve equation.
pub fn parse_public_key(curve: &CurveParams, public_key: &str) -> Result<AffinePoint> {
    let digits = public_key.strip_prefix("0x").unwrap_or(public_key);

    match digits.get(..2) {
        Some("04") => parse_uncompressed_public_key(curve, digits),
        Some("02") | Some("03") => decompress_public_key(curve, digits),
        _ => Err(Error::InvalidPoint),
    }
}

/// Parses an uncompressed public key `04 ‖ x ‖ y`.
pub fn parse_uncompressed_public_key(
    curve: &CurveParams,
    public_key: &str,
) -> Result<AffinePoint> {
    let (x_hex, y_hex) = split_coordinates(public_key)?;
    let width = 2 * curve.field_byte_length();
    if x_hex.len() != width {
        return Err(Error::InvalidPoint);
    }

    let x = numeric::decode_hex(&x_hex).map_err(|_| Error::InvalidPoint)?;
    let y = numeric::decode_hex(&y_hex).map_err(|_| Error::InvalidPoint)?;
    let point = AffinePoint::new(x, y);

    PointArithmetic::new(curve).check_on_curve(&point)?;
    Ok(point)
}

/// Strips the `04` prefix of an uncompressed public key and splits the
/// payload into its two equal-width coordinate strings.
pub fn split_coordinates(public_key: &str) -> Result<(String, String)> {
    let digits = public_key.strip_prefix("0x").unwrap_or(public_key);
    let payload = digits.strip_prefix("04").ok_or(Error::InvalidPoint)?;
    if payload.is_empty() || payload.len() % 2 != 0 || !payload.is_ascii() {
        return Err(Error::InvalidPoint);
    }

    let (x_hex, y_hex) = payload.split_at(payload.len() / 2);
    Ok((x_hex.into(), y_hex.into()))
}

/// Recovers the full point of a compressed public key `02/03 ‖ x`.
///
/// Solves `y² = x³ + ax + b (mod p)` for `y` and selects the root whose
/// parity matches the compression prefix bit.
pub fn decompress_public_key(curve: &CurveParams, public_key: &str) -> Result<AffinePoint> {
    let digits = public_key.strip_prefix("0x").unwrap_or(public_key);
    if digits.len() != 2 + 2 * curve.field_byte_length() {
        return Err(Error::InvalidPoint);
    }

    let y_is_odd = match digits.get(..2) {
        Some("02") => false,
        Some("03") => true,
        _ => return Err(Error::InvalidPoint),
    };

    let x = numeric::decode_hex(&digits[2..]).map_err(|_| Error::InvalidPoint)?;
    let p = curve.p();
    if &x >= p {
        return Err(Error::InvalidPoint);
    }

    let alpha = (&x * &x * &x + curve.a() * &x + curve.b()) % p;
    let beta = bigint::sqrt_mod(&alpha, p).map_err(|_| Error::InvalidPoint)?;

    let y = if beta.is_odd() == y_is_odd {
        beta
    } else {
        p - beta
    };

    Ok(AffinePoint::new(x, y))
}

/// Compresses a finite point to its `02/03 ‖ x` hex form.
pub fn compress_point(curve: &CurveParams, point: &AffinePoint) -> Result<String> {
    let (x, y) = point.coordinates().ok_or(Error::InvalidPoint)?;
    let parity_prefix = if y.is_odd() { "03" } else { "02" };
    let x_hex = numeric::to_padded_hex(x, 2 * curve.field_byte_length());
    Ok(format!("{parity_prefix}{x_hex}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve;
    use hex_literal::hex;

    /// Test vector: the published compressed key of a known private scalar.
    const PRIVATE_KEY_HEX: &str =
        "7a4fbece43963538cb8f9149b094906168d71be36cfb405e6930fddb42da2c7d";
    const PUBLIC_KEY_COMPRESSED: &str =
        "033fbbf44c3da3fec12bf7bac254fd176adc3eaed79470932b574d8d60728eb206";
    const PUBLIC_KEY_UNCOMPRESSED: &str =
        "043fbbf44c3da3fec12bf7bac254fd176adc3eaed79470932b574d8d60728eb206\
         fb7ac7ac6959f75a6859a1a8d745db7e825a3c5c826e5b2e4950892b35772313";

    /// Deterministic byte source for generation tests.
    struct SequenceRng {
        chunks: Vec<Vec<u8>>,
    }

    impl RngCore for SequenceRng {
        fn next_u32(&mut self) -> u32 {
            let mut buffer = [0u8; 4];
            self.fill_bytes(&mut buffer);
            u32::from_le_bytes(buffer)
        }

        fn next_u64(&mut self) -> u64 {
            let mut buffer = [0u8; 8];
            self.fill_bytes(&mut buffer);
            u64::from_le_bytes(buffer)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let chunk = self.chunks.remove(0);
            dest.copy_from_slice(&chunk);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for SequenceRng {}

    #[test]
    fn derives_published_public_key() {
        let curve = curve::secp256k1();
        let keypair = KeyPair::from_private_key_hex(curve, PRIVATE_KEY_HEX).unwrap();

        assert_eq!(keypair.private_key_hex(), PRIVATE_KEY_HEX);
        assert_eq!(keypair.public_key_compressed(), PUBLIC_KEY_COMPRESSED);
        assert_eq!(keypair.public_key_uncompressed(), PUBLIC_KEY_UNCOMPRESSED);
        assert_eq!(keypair.public_x(), &PUBLIC_KEY_UNCOMPRESSED[2..66]);
        assert_eq!(keypair.public_y(), &PUBLIC_KEY_UNCOMPRESSED[66..]);
    }

    #[test]
    fn rejects_out_of_range_private_scalars() {
        let curve = curve::secp256k1();

        assert_eq!(
            KeyPair::from_private_scalar(curve, &BigUint::from(0u32)),
            Err(Error::InvalidPrivateKey)
        );
        assert_eq!(
            KeyPair::from_private_scalar(curve, curve.n()),
            Err(Error::InvalidPrivateKey)
        );
        assert_eq!(
            KeyPair::from_private_key_hex(curve, "abcd"),
            Err(Error::InvalidPrivateKey)
        );
    }

    #[test]
    fn generation_redraws_out_of_range_candidates() {
        let curve = curve::secp256k1();
        let mut rng = SequenceRng {
            chunks: vec![
                vec![0xff; 32], // above n, rejected
                vec![0x00; 32], // zero, rejected
                hex!("7a4fbece43963538cb8f9149b094906168d71be36cfb405e6930fddb42da2c7d")
                    .to_vec(),
            ],
        };

        let keypair = KeyPair::generate(curve, &mut rng).unwrap();
        assert_eq!(keypair.private_key_hex(), PRIVATE_KEY_HEX);
    }

    #[test]
    fn compressed_and_uncompressed_forms_agree() {
        let curve = curve::secp256k1();

        let from_compressed = parse_public_key(curve, PUBLIC_KEY_COMPRESSED).unwrap();
        let from_uncompressed = parse_public_key(curve, PUBLIC_KEY_UNCOMPRESSED).unwrap();
        assert_eq!(from_compressed, from_uncompressed);

        assert_eq!(
            compress_point(curve, &from_uncompressed).unwrap(),
            PUBLIC_KEY_COMPRESSED
        );
    }

    #[test]
    fn even_parity_prefix_selects_the_other_root() {
        let curve = curve::secp256k1();
        let odd = decompress_public_key(curve, PUBLIC_KEY_COMPRESSED).unwrap();

        let even_form = format!("02{}", &PUBLIC_KEY_COMPRESSED[2..]);
        let even = decompress_public_key(curve, &even_form).unwrap();

        assert_eq!(odd.x(), even.x());
        assert_ne!(odd.y(), even.y());
        assert_eq!(odd.y().unwrap() + even.y().unwrap(), *curve.p());
    }

    #[test]
    fn split_strips_the_uncompressed_prefix() {
        let (x_hex, y_hex) = split_coordinates(PUBLIC_KEY_UNCOMPRESSED).unwrap();
        assert_eq!(x_hex, &PUBLIC_KEY_UNCOMPRESSED[2..66]);
        assert_eq!(y_hex, &PUBLIC_KEY_UNCOMPRESSED[66..]);

        assert_eq!(split_coordinates("0279be66"), Err(Error::InvalidPoint));
    }

    #[test]
    fn rejects_malformed_public_keys() {
        let curve = curve::secp256k1();

        // unknown prefix
        assert!(parse_public_key(curve, "05abcd").is_err());
        // wrong length
        assert!(decompress_public_key(curve, "02abcd").is_err());
        // x not on the curve: x = 0 gives alpha = 7, a non-residue
        let zero_x = format!("02{}", "0".repeat(64));
        assert_eq!(
            decompress_public_key(curve, &zero_x),
            Err(Error::InvalidPoint)
        );
    }

    #[test]
    fn rehydration_is_verbatim() {
        let keypair = KeyPair::from_parts(
            "aa".into(),
            "170".into(),
            "xx".into(),
            "yy".into(),
            "04xxyy".into(),
            "02xx".into(),
        )
        .unwrap();
        assert_eq!(keypair.private_key_hex(), "aa");
        assert_eq!(keypair.public_key_compressed(), "02xx");

        assert_eq!(
            KeyPair::from_parts(
                String::new(),
                "170".into(),
                "xx".into(),
                "yy".into(),
                "04xxyy".into(),
                "02xx".into(),
            ),
            Err(Error::InvalidPrivateKey)
        );
    }

    #[test]
    fn debug_output_redacts_the_private_scalar() {
        let curve = curve::secp256k1();
        let keypair = KeyPair::from_private_key_hex(curve, PRIVATE_KEY_HEX).unwrap();
        let rendered = format!("{keypair:?}");
        assert!(!rendered.contains(PRIVATE_KEY_HEX));
        assert!(rendered.contains(PUBLIC_KEY_COMPRESSED));
    }
}
