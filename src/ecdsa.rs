//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! Signatures are produced over the SHA-256 digest of the message, with a
//! fresh ephemeral scalar per attempt, and serialized through the strict
//! DER codec in [`der`].

pub mod der;

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};

use crate::arithmetic::PointArithmetic;
use crate::bigint;
use crate::curve::CurveParams;
use crate::keypair;
use crate::numeric;
use crate::{Error, Result};

/// Bound on re-derivations with a fresh ephemeral scalar before signing is
/// declared broken. Each retry happens only when `r` or `s` reduces to zero,
/// which a working random source hits with negligible probability.
const MAX_SIGNING_ATTEMPTS: usize = 128;

/// ECDSA signature: the scalar pair `(r, s)`, each in `[1, n − 1]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
    scalar_length: usize,
}

impl Signature {
    /// Builds a signature from its scalar pair.
    ///
    /// `scalar_length` is the curve's field width in bytes (32 for
    /// secp256k1); zero or oversized scalars are rejected.
    pub fn from_scalars(r: BigUint, s: BigUint, scalar_length: usize) -> Result<Self> {
        if r.is_zero() || s.is_zero() {
            return Err(Error::MalformedSignature);
        }
        if r.to_bytes_be().len() > scalar_length || s.to_bytes_be().len() > scalar_length {
            return Err(Error::MalformedSignature);
        }

        Ok(Self {
            r,
            s,
            scalar_length,
        })
    }

    /// The `r` scalar.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` scalar.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// `r` as fixed-width big-endian hex.
    pub fn r_hex(&self) -> String {
        numeric::to_padded_hex(&self.r, 2 * self.scalar_length)
    }

    /// `s` as fixed-width big-endian hex.
    pub fn s_hex(&self) -> String {
        numeric::to_padded_hex(&self.s, 2 * self.scalar_length)
    }

    /// The signature's DER projection, as hex.
    pub fn to_der_hex(&self) -> String {
        der::encode(&self.r, &self.s, self.scalar_length)
            .expect("scalar width is validated at construction")
    }
}

/// ECDSA signing and verification over a borrowed set of curve domain
/// parameters.
pub struct SignatureEngine<'a> {
    params: &'a CurveParams,
}

impl<'a> SignatureEngine<'a> {
    /// Binds the engine to a curve.
    pub fn new(params: &'a CurveParams) -> Self {
        Self { params }
    }

    /// Signs `message` with the given private key, using the operating
    /// system's secure random number generator for the ephemeral scalar.
    ///
    /// The private key is accepted in any supported textual format.
    #[cfg(feature = "getrandom")]
    pub fn sign(&self, message: &[u8], private_key: &str) -> Result<Signature> {
        self.sign_with_rng(message, private_key, &mut rand_core::OsRng)
    }

    /// Signs `message`, drawing ephemeral scalars from `rng`.
    ///
    /// Draws a fresh `k` from the open range `(1, n − 1)` per attempt and
    /// retries while `r` or `s` reduces to zero; the retry loop is bounded,
    /// surfacing exhaustion as [`Error::InsufficientEntropy`] instead of
    /// spinning forever.
    pub fn sign_with_rng(
        &self,
        message: &[u8],
        private_key: &str,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<Signature> {
        let d = numeric::parse(private_key)?;
        if !self.params.contains_private_scalar(&d) {
            return Err(Error::InvalidPrivateKey);
        }

        let n = self.params.n();
        let e = self.hash_to_scalar(message);
        let arithmetic = PointArithmetic::new(self.params);
        let generator = self.params.generator();

        for _ in 0..MAX_SIGNING_ATTEMPTS {
            let k = keypair::random_scalar(self.params, rng)?;
            let ephemeral = arithmetic.mul(&generator, &k)?;
            let ephemeral_x = match ephemeral.x() {
                Some(x) => x,
                None => continue,
            };

            let r = ephemeral_x % n;
            if r.is_zero() {
                continue;
            }

            let k_inverse = bigint::inv_mod(&k, n)?;
            let s = (k_inverse * ((&e + &d * &r) % n)) % n;
            if s.is_zero() {
                continue;
            }

            return Signature::from_scalars(r, s, self.params.field_byte_length());
        }

        Err(Error::InsufficientEntropy)
    }

    /// Verifies a DER-encoded signature over `message` against a public key
    /// in either SEC1 hex form.
    ///
    /// Malformed or out-of-range encodings are errors; a well-formed
    /// signature that does not match is `Ok(false)`.
    pub fn verify(&self, signature: &str, message: &[u8], public_key: &str) -> Result<bool> {
        let signature = self.parse_der(signature)?;
        let public = keypair::parse_public_key(self.params, public_key)?;

        let n = self.params.n();
        let e = self.hash_to_scalar(message);
        let w = bigint::inv_mod(&signature.s, n)?;
        let u1 = (&e * &w) % n;
        let u2 = (&signature.r * &w) % n;

        // public data throughout, so the variable-time path is fine
        let arithmetic = PointArithmetic::new(self.params);
        let z = arithmetic.add(
            &arithmetic.mul_vartime(&self.params.generator(), &u1)?,
            &arithmetic.mul_vartime(&public, &u2)?,
        )?;

        match z.x() {
            None => Ok(false),
            Some(zx) => Ok(zx % n == signature.r),
        }
    }

    /// Parses a DER signature, enforcing that both scalars lie in
    /// `[1, n − 1]`.
    pub fn parse_der(&self, signature: &str) -> Result<Signature> {
        let (r, s) = der::decode(signature, self.params.field_byte_length())?;

        let n = self.params.n();
        if r.is_zero() || &r >= n || s.is_zero() || &s >= n {
            return Err(Error::MalformedSignature);
        }

        Signature::from_scalars(r, s, self.params.field_byte_length())
    }

    /// SHA-256 digest of `message` as an integer, truncated to the leftmost
    /// `bits(n)` bits (SEC 1, §4.1.3). A no-op for secp256k1.
    fn hash_to_scalar(&self, message: &[u8]) -> BigUint {
        let digest = Sha256::digest(message);
        let mut e = BigUint::from_bytes_be(&digest);

        let hash_bits = 8 * digest.len() as u64;
        let order_bits = self.params.n().bits();
        if hash_bits > order_bits {
            e >>= (hash_bits - order_bits) as usize;
        }

        e
    }
}
