#![allow(non_snake_case)]

use rand::thread_rng;

use criterion::{
    criterion_group, criterion_main, measurement::Measurement, BatchSize, BenchmarkGroup,
    BenchmarkId, Criterion,
};

use curve25519_core::constants;
use curve25519_core::field::FieldElement;
use curve25519_core::scalar::Scalar;

static MULTISCALAR_SIZES: [usize; 9] = [1, 2, 4, 8, 16, 32, 64, 128, 256];

mod edwards_benches {
    use super::*;

    use curve25519_core::edwards::EdwardsPoint;

    fn compress(c: &mut Criterion) {
        let B = &constants::ED25519_BASEPOINT_POINT;
        c.bench_function("EdwardsPoint compression", move |b| b.iter(|| B.compress()));
    }

    fn decompress(c: &mut Criterion) {
        let B_comp = &constants::ED25519_BASEPOINT_COMPRESSED;
        c.bench_function("EdwardsPoint decompression", move |b| {
            b.iter(|| B_comp.decompress())
        });
    }

    fn consttime_fixed_base_scalar_mul(c: &mut Criterion) {
        let s = Scalar::random(&mut thread_rng());
        c.bench_function("Constant-time fixed-base scalar mul", move |b| {
            b.iter(|| EdwardsPoint::mul_base(&s))
        });
    }

    fn consttime_variable_base_scalar_mul(c: &mut Criterion) {
        let B = &constants::ED25519_BASEPOINT_POINT;
        let s = Scalar::random(&mut thread_rng());
        c.bench_function("Constant-time variable-base scalar mul", move |b| {
            b.iter(|| B * s)
        });
    }

    fn vartime_double_base_scalar_mul(c: &mut Criterion) {
        c.bench_function("Variable-time aA+bB, A variable, B fixed", |bench| {
            let mut rng = thread_rng();
            let A = EdwardsPoint::mul_base(&Scalar::random(&mut rng));
            bench.iter_batched(
                || (Scalar::random(&mut rng), Scalar::random(&mut rng)),
                |(a, b)| EdwardsPoint::vartime_double_scalar_mul_basepoint(&a, &A, &b),
                BatchSize::SmallInput,
            );
        });
    }

    fn mul_by_cofactor(c: &mut Criterion) {
        let A = EdwardsPoint::mul_base(&Scalar::random(&mut thread_rng()));
        c.bench_function("Cofactor multiplication", move |b| {
            b.iter(|| A.mul_by_cofactor())
        });
    }

    criterion_group! {
        name = edwards_benches;
        config = Criterion::default();
        targets =
        compress,
        decompress,
        consttime_fixed_base_scalar_mul,
        consttime_variable_base_scalar_mul,
        vartime_double_base_scalar_mul,
        mul_by_cofactor,
    }
}

mod multiscalar_benches {
    use super::*;

    use curve25519_core::edwards::EdwardsPoint;
    use curve25519_core::traits::VartimeMultiscalarMul;

    fn construct_scalars(n: usize) -> Vec<Scalar> {
        let mut rng = thread_rng();
        (0..n).map(|_| Scalar::random(&mut rng)).collect()
    }

    fn construct_points(n: usize) -> Vec<EdwardsPoint> {
        let mut rng = thread_rng();
        (0..n)
            .map(|_| EdwardsPoint::mul_base(&Scalar::random(&mut rng)))
            .collect()
    }

    fn vartime_multiscalar_mul<M: Measurement>(c: &mut BenchmarkGroup<'_, M>) {
        for multiscalar_size in &MULTISCALAR_SIZES {
            c.bench_with_input(
                BenchmarkId::new(
                    "Variable-time variable-base multiscalar multiplication",
                    *multiscalar_size,
                ),
                &multiscalar_size,
                |b, &&size| {
                    let points = construct_points(size);
                    // Rerandomize the scalars for every call to prevent
                    // false timings from better caching.
                    b.iter_batched(
                        || construct_scalars(size),
                        |scalars| EdwardsPoint::vartime_multiscalar_mul(&scalars, &points),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    fn multiscalar_multiplications(c: &mut Criterion) {
        let mut group: BenchmarkGroup<'_, _> = c.benchmark_group("Multiscalar muls");

        vartime_multiscalar_mul(&mut group);

        group.finish();
    }

    criterion_group! {
        name = multiscalar_benches;
        // Lower the sample size to run the benchmarks faster
        config = Criterion::default().sample_size(15);
        targets =
        multiscalar_multiplications,
    }
}

mod scalar_benches {
    use super::*;

    fn scalar_mul(c: &mut Criterion) {
        c.bench_function("Scalar multiplication", |b| {
            let mut rng = thread_rng();
            b.iter_batched(
                || (Scalar::random(&mut rng), Scalar::random(&mut rng)),
                |(x, y)| x * y,
                BatchSize::SmallInput,
            )
        });
    }

    fn scalar_reduce_wide(c: &mut Criterion) {
        let bytes = [0xa5u8; 64];
        c.bench_function("Scalar wide reduction", move |b| {
            b.iter(|| Scalar::from_bytes_mod_order_wide(&bytes))
        });
    }

    fn scalar_canonical_check(c: &mut Criterion) {
        let bytes = Scalar::random(&mut thread_rng()).to_bytes();
        c.bench_function("Scalar canonical decoding", move |b| {
            b.iter(|| Scalar::from_canonical_bytes(bytes))
        });
    }

    criterion_group! {
        name = scalar_benches;
        config = Criterion::default();
        targets =
        scalar_mul,
        scalar_reduce_wide,
        scalar_canonical_check,
    }
}

mod field_benches {
    use super::*;

    fn field_invert(c: &mut Criterion) {
        let x = FieldElement::from_bytes(&constants::ED25519_BASEPOINT_COMPRESSED.to_bytes());
        c.bench_function("Field inversion", move |b| b.iter(|| x.invert()));
    }

    fn field_sqrt_ratio(c: &mut Criterion) {
        let u = constants::EDWARDS_D;
        let v = constants::SQRT_M1;
        c.bench_function("Field sqrt_ratio_i", move |b| {
            b.iter(|| FieldElement::sqrt_ratio_i(&u, &v))
        });
    }

    criterion_group! {
        name = field_benches;
        config = Criterion::default();
        targets =
        field_invert,
        field_sqrt_ratio,
    }
}

criterion_main!(
    edwards_benches::edwards_benches,
    multiscalar_benches::multiscalar_benches,
    scalar_benches::scalar_benches,
    field_benches::field_benches,
);
