//! Koblitz curve (secp256k1 / secp192k1) elliptic curve cryptography.
//!
//! This crate implements keypair generation, scalar point multiplication and
//! ECDSA signing/verification from scratch on top of an arbitrary-precision
//! integer backend ([`num_bigint`]), rather than a pre-built elliptic curve
//! library.
//!
//! Curve domain parameters are taken bit-for-bit from Certicom's SECG in
//! SEC 2: Recommended Elliptic Curve Domain Parameters:
//!
//! <https://www.secg.org/sec2-v2.pdf>
//!
//! Two scalar multiplication algorithms are provided: a Montgomery ladder
//! ([`PointArithmetic::mul`]), which performs an identical operation sequence
//! for every scalar bit and is used on all secret-scalar paths, and classic
//! double-and-add ([`PointArithmetic::mul_vartime`]), whose running time
//! depends on the scalar bit pattern and which exists for verification and
//! equivalence testing.
//!
//! # Usage
//!
//! ```
//! # fn main() -> koblitz::Result<()> {
//! use koblitz::{KeyPair, SignatureEngine};
//!
//! let curve = koblitz::curve::secp256k1();
//! let keys = KeyPair::random(curve)?;
//!
//! let engine = SignatureEngine::new(curve);
//! let signature = engine.sign(b"a message", keys.private_key_hex())?;
//!
//! let der = signature.to_der_hex();
//! assert!(engine.verify(&der, b"a message", keys.public_key_compressed())?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod arithmetic;
pub mod base58check;
pub mod curve;
pub mod ecdsa;
pub mod keypair;
pub mod numeric;
pub mod sin;
pub mod wif;

mod bigint;
mod error;

pub use crate::{
    arithmetic::{AffinePoint, PointArithmetic},
    curve::CurveParams,
    ecdsa::{Signature, SignatureEngine},
    error::{Error, Result},
    keypair::KeyPair,
    numeric::NumberFormat,
};

pub use num_bigint::BigUint;
