//! Scalar multiplication property tests.

use koblitz::{curve, BigUint, PointArithmetic};
use proptest::prelude::*;

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> BigUint {
        BigUint::from_bytes_be(&bytes)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn ladder_and_double_and_add_are_equivalent(k in scalar()) {
        for curve in [curve::secp256k1(), curve::secp192k1()] {
            let arithmetic = PointArithmetic::new(curve);
            let g = curve.generator();
            let k = &k % curve.n();

            let ladder = arithmetic.mul(&g, &k).unwrap();
            let double_and_add = arithmetic.mul_vartime(&g, &k).unwrap();
            prop_assert_eq!(ladder, double_and_add);
        }
    }

    #[test]
    fn products_stay_on_the_curve(k in scalar()) {
        let curve = curve::secp256k1();
        let arithmetic = PointArithmetic::new(curve);
        let k = &k % curve.n();

        let product = arithmetic.mul(&curve.generator(), &k).unwrap();
        prop_assert!(arithmetic.is_on_curve(&product));
    }

    #[test]
    fn multiplication_distributes_over_scalar_addition(a in scalar(), b in scalar()) {
        let curve = curve::secp256k1();
        let arithmetic = PointArithmetic::new(curve);
        let g = curve.generator();
        let n = curve.n();
        let a = &a % n;
        let b = &b % n;

        let combined = arithmetic.mul(&g, &((&a + &b) % n)).unwrap();
        let separate = arithmetic
            .add(
                &arithmetic.mul(&g, &a).unwrap(),
                &arithmetic.mul(&g, &b).unwrap(),
            )
            .unwrap();
        prop_assert_eq!(combined, separate);
    }
}
