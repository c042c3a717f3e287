//! Koblitz curve domain parameters.
//!
//! Constants are reproduced bit-for-bit from Certicom's SECG in SEC 2:
//! Recommended Elliptic Curve Domain Parameters:
//!
//! <https://www.secg.org/sec2-v2.pdf>
//!
//! Parameters are process-wide immutable data, built once on first use and
//! shared by reference afterwards.

use num_bigint::BigUint;
use num_traits::Zero;
use once_cell::sync::Lazy;

use crate::arithmetic::AffinePoint;
use crate::numeric;

/// Domain parameters `(p, a, b, G, n, h)` of a named Koblitz curve
/// `y² = x³ + ax + b` over the prime field `F_p`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    name: &'static str,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    gx: BigUint,
    gy: BigUint,
    n: BigUint,
    h: BigUint,
}

impl CurveParams {
    /// Canonical curve name, e.g. `"secp256k1"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Prime modulus of the base field.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The `a` coefficient of the curve equation (zero for Koblitz curves).
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// The `b` coefficient of the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Prime order of the base point.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Cofactor.
    pub fn h(&self) -> &BigUint {
        &self.h
    }

    /// The base point `G`.
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::new(self.gx.clone(), self.gy.clone())
    }

    /// Width in bytes of a base field element.
    pub fn field_byte_length(&self) -> usize {
        ((self.p.bits() + 7) / 8) as usize
    }

    /// Is `d` a valid private scalar, i.e. in `[1, n - 1]`?
    pub fn contains_private_scalar(&self, d: &BigUint) -> bool {
        !d.is_zero() && d < &self.n
    }
}

/// The secp256k1 curve: `y² = x³ + 7` over a ~256-bit prime field.
///
/// ```text
/// Gₓ = 79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798
/// Gᵧ = 483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8
/// ```
pub fn secp256k1() -> &'static CurveParams {
    static PARAMS: Lazy<CurveParams> = Lazy::new(|| CurveParams {
        name: "secp256k1",
        p: hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
        a: BigUint::zero(),
        b: hex("7"),
        gx: hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        gy: hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        n: hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
        h: hex("1"),
    });

    &PARAMS
}

/// The secp192k1 curve: `y² = x³ + 3` over a ~192-bit prime field.
pub fn secp192k1() -> &'static CurveParams {
    static PARAMS: Lazy<CurveParams> = Lazy::new(|| CurveParams {
        name: "secp192k1",
        p: hex("fffffffffffffffffffffffffffffffffffffffeffffee37"),
        a: BigUint::zero(),
        b: hex("3"),
        gx: hex("db4ff10ec057e9ae26b07d0280b7f4341da5d1b1eae06c7d"),
        gy: hex("9b2f2f6d9c5628a7844163d015be86344082aa88d95e2f9d"),
        n: hex("fffffffffffffffffffffffe26f2fc170f69466a74defd8d"),
        h: hex("1"),
    });

    &PARAMS
}

/// Looks up a supported curve by its SEC 2 name.
pub fn by_name(name: &str) -> Option<&'static CurveParams> {
    match name {
        "secp256k1" => Some(secp256k1()),
        "secp192k1" => Some(secp192k1()),
        _ => None,
    }
}

fn hex(digits: &str) -> BigUint {
    numeric::decode_hex(digits).expect("valid SEC 2 constant")
}
