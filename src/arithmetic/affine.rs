//! Affine points

use num_bigint::BigUint;

/// A curve point expressed in affine coordinates, or the point at infinity.
///
/// Every finite point handed out by this crate satisfies the curve equation
/// `y² ≡ x³ + ax + b (mod p)` of the [`CurveParams`] it was produced under.
///
/// [`CurveParams`]: crate::curve::CurveParams
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AffinePoint {
    /// Additive identity of the group: the point at infinity.
    Identity,

    /// A finite point with affine coordinates.
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl AffinePoint {
    /// Creates a finite point from its coordinates.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        AffinePoint::Affine { x, y }
    }

    /// Returns the identity of the group: the point at infinity.
    pub fn identity() -> Self {
        AffinePoint::Identity
    }

    /// Is this point the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, AffinePoint::Identity)
    }

    /// x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            AffinePoint::Identity => None,
            AffinePoint::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            AffinePoint::Identity => None,
            AffinePoint::Affine { y, .. } => Some(y),
        }
    }

    /// Both coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            AffinePoint::Identity => None,
            AffinePoint::Affine { x, y } => Some((x, y)),
        }
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        AffinePoint::Identity
    }
}
