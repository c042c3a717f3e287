//! Point arithmetic on Koblitz curves.
//!
//! Pure functions over [`AffinePoint`] values, parameterized by a borrowed
//! [`CurveParams`]. Negative intermediates (chord slopes, `-Py` terms) are
//! reduced with the floored modulo from the backend facade, so every
//! coordinate leaving this module lies in `[0, p)`.

mod affine;

pub use affine::AffinePoint;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::bigint;
use crate::curve::CurveParams;
use crate::{Error, Result};

/// Group arithmetic over a borrowed set of curve domain parameters.
pub struct PointArithmetic<'a> {
    params: &'a CurveParams,
}

impl<'a> PointArithmetic<'a> {
    /// Binds the arithmetic to a curve.
    pub fn new(params: &'a CurveParams) -> Self {
        Self { params }
    }

    /// Adds two points.
    ///
    /// The identity is the neutral element; a point plus its reflection is
    /// the identity; adding a point to itself delegates to [`double`].
    ///
    /// [`double`]: Self::double
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> Result<AffinePoint> {
        let (px, py) = match lhs.coordinates() {
            None => return Ok(rhs.clone()),
            Some(coordinates) => coordinates,
        };
        let (qx, qy) = match rhs.coordinates() {
            None => return Ok(lhs.clone()),
            Some(coordinates) => coordinates,
        };

        if px == qx {
            if py != qy {
                // vertical chord
                return Ok(AffinePoint::identity());
            }
            return self.double(lhs);
        }

        let numerator = BigInt::from(py.clone()) - BigInt::from(qy.clone());
        let denominator = BigInt::from(px.clone()) - BigInt::from(qx.clone());
        let slope = self.slope(numerator, denominator)?;

        Ok(self.secant_point(&slope, px, py, qx))
    }

    /// Doubles a point.
    pub fn double(&self, point: &AffinePoint) -> Result<AffinePoint> {
        let (x, y) = match point.coordinates() {
            None => return Ok(AffinePoint::identity()),
            Some(coordinates) => coordinates,
        };

        if y.is_zero() {
            // vertical tangent
            return Ok(AffinePoint::identity());
        }

        let numerator = BigInt::from(3u32) * BigInt::from(x.clone()) * BigInt::from(x.clone())
            + BigInt::from(self.params.a().clone());
        let denominator = BigInt::from(2u32) * BigInt::from(y.clone());
        let slope = self.slope(numerator, denominator)?;

        Ok(self.secant_point(&slope, x, y, x))
    }

    /// Scalar multiplication by the Montgomery ladder.
    ///
    /// Performs exactly one addition and one doubling per scalar bit
    /// regardless of the bit's value, so the operation sequence depends only
    /// on the scalar's bit length. This is the path used for secret scalars.
    pub fn mul(&self, point: &AffinePoint, scalar: &BigUint) -> Result<AffinePoint> {
        let mut r0 = AffinePoint::identity();
        let mut r1 = point.clone();

        for i in (0..scalar.bits()).rev() {
            if scalar.bit(i) {
                r0 = self.add(&r0, &r1)?;
                r1 = self.double(&r1)?;
            } else {
                r1 = self.add(&r0, &r1)?;
                r0 = self.double(&r0)?;
            }
        }

        Ok(r0)
    }

    /// Scalar multiplication by classic double-and-add, most significant
    /// bit first.
    ///
    /// Not constant time: the scalar's bit pattern observably affects the
    /// operation sequence. Use [`mul`] for secret scalars; this variant
    /// serves verification and equivalence testing.
    ///
    /// [`mul`]: Self::mul
    pub fn mul_vartime(&self, point: &AffinePoint, scalar: &BigUint) -> Result<AffinePoint> {
        let mut acc = AffinePoint::identity();

        for i in (0..scalar.bits()).rev() {
            acc = self.double(&acc)?;
            if scalar.bit(i) {
                acc = self.add(&acc, point)?;
            }
        }

        Ok(acc)
    }

    /// Does `point` satisfy the curve equation?
    ///
    /// The identity is a group member and always passes.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        self.check_on_curve(point).is_ok()
    }

    /// Recomputes both sides of `y² ≡ x³ + ax + b (mod p)` and fails with
    /// [`Error::InvalidPoint`] on mismatch or out-of-field coordinates.
    pub fn check_on_curve(&self, point: &AffinePoint) -> Result<()> {
        let (x, y) = match point.coordinates() {
            None => return Ok(()),
            Some(coordinates) => coordinates,
        };

        let p = self.params.p();
        if x >= p || y >= p {
            return Err(Error::InvalidPoint);
        }

        let lhs = (y * y) % p;
        let rhs = (x * x * x + self.params.a() * x + self.params.b()) % p;

        if lhs == rhs {
            Ok(())
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Chord/tangent slope `numerator / denominator mod p`.
    ///
    /// A denominator that is not invertible modulo `p` surfaces as
    /// [`Error::ArithmeticDomain`] instead of silently producing zero.
    fn slope(&self, numerator: BigInt, denominator: BigInt) -> Result<BigUint> {
        let p = self.params.p();
        let denominator = bigint::mod_floor(&denominator, p);
        let inverse = bigint::inv_mod(&denominator, p)?;
        Ok((bigint::mod_floor(&numerator, p) * inverse) % p)
    }

    /// Third intersection of the slope line through `(px, py)` and `(qx, _)`,
    /// reflected: `Rx = s² − Px − Qx`, `Ry = s·(Px − Rx) − Py`, both mod `p`.
    fn secant_point(&self, slope: &BigUint, px: &BigUint, py: &BigUint, qx: &BigUint) -> AffinePoint {
        let p = self.params.p();
        let s = BigInt::from(slope.clone());

        let rx = bigint::mod_floor(
            &(&s * &s - BigInt::from(px.clone()) - BigInt::from(qx.clone())),
            p,
        );
        let ry = bigint::mod_floor(
            &(&s * (BigInt::from(px.clone()) - BigInt::from(rx.clone())) - BigInt::from(py.clone())),
            p,
        );

        AffinePoint::new(rx, ry)
    }
}
