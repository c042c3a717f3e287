//! Scalar multiplication benchmarks.

use criterion::{criterion_group, criterion_main, Criterion};
use koblitz::{curve, numeric, PointArithmetic};

fn bench_scalar_mul(c: &mut Criterion) {
    let curve = curve::secp256k1();
    let arithmetic = PointArithmetic::new(curve);
    let g = curve.generator();
    let k = numeric::decode_hex("7a4fbece43963538cb8f9149b094906168d71be36cfb405e6930fddb42da2c7d")
        .unwrap();

    c.bench_function("scalar_mul/ladder", |b| {
        b.iter(|| arithmetic.mul(&g, &k).unwrap())
    });

    c.bench_function("scalar_mul/double_and_add", |b| {
        b.iter(|| arithmetic.mul_vartime(&g, &k).unwrap())
    });
}

criterion_group!(benches, bench_scalar_mul);
criterion_main!(benches);
