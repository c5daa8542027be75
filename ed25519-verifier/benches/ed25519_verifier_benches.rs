// -*- mode: rust; -*-
//
// This file is part of ed25519-verifier.
// Copyright (c) 2018-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

#![allow(non_snake_case)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::OsRng;
use rand::thread_rng;
use sha2::{Digest, Sha512};

use curve25519_core::edwards::EdwardsPoint;
use curve25519_core::scalar::Scalar;

use ed25519_verifier::{
    verify_batch_with_policy, Policy, Signature, VerifyingKey, SIGNATURE_LENGTH,
};

static BATCH_SIZES: [usize; 6] = [4, 8, 16, 32, 64, 96];

/// A freshly generated key pair which can produce RFC 8032 signatures.
struct Signer {
    secret: Scalar,
    public: VerifyingKey,
}

impl Signer {
    fn generate() -> Signer {
        let secret = Scalar::random(&mut thread_rng());
        let A = EdwardsPoint::mul_base(&secret).compress();
        let public = VerifyingKey::from_bytes(A.as_bytes()).unwrap();
        Signer { secret, public }
    }

    fn sign(&self, message: &[u8]) -> Signature {
        let r = Scalar::random(&mut thread_rng());
        let R = EdwardsPoint::mul_base(&r).compress();
        let k = Scalar::from_hash(
            Sha512::new()
                .chain_update(R.as_bytes())
                .chain_update(self.public.as_bytes())
                .chain_update(message),
        );
        let s = r + k * self.secret;

        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..32].copy_from_slice(R.as_bytes());
        bytes[32..].copy_from_slice(s.as_bytes());
        Signature::from_bytes(&bytes)
    }
}

mod single_benches {
    use super::*;

    fn verify(c: &mut Criterion) {
        let signer = Signer::generate();
        let msg: &[u8] = b"";
        let sig = signer.sign(msg);

        let mut group = c.benchmark_group("Ed25519 signature verification");
        for (name, policy) in [
            ("default", Policy::DEFAULT),
            ("zip215", Policy::ZIP215),
            ("strict", Policy::STRICT),
        ] {
            group.bench_function(name, |b| {
                b.iter(|| signer.public.verify_with_policy(msg, &sig, &policy))
            });
        }
        group.finish();
    }

    criterion_group! {
        name = single_benches;
        config = Criterion::default();
        targets = verify,
    }
}

mod batch_benches {
    use super::*;

    fn verify_batch_signatures(c: &mut Criterion) {
        let mut group = c.benchmark_group("Ed25519 batch signature verification");
        for size in BATCH_SIZES {
            let signers: Vec<Signer> = (0..size).map(|_| Signer::generate()).collect();
            let msg: &[u8] = b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
            let signatures: Vec<[u8; SIGNATURE_LENGTH]> =
                signers.iter().map(|s| s.sign(msg).to_bytes()).collect();

            let public_keys: Vec<&[u8]> = signers.iter().map(|s| &s.public.as_bytes()[..]).collect();
            let messages: Vec<&[u8]> = vec![msg; size];
            let sigs: Vec<&[u8]> = signatures.iter().map(|s| &s[..]).collect();

            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| {
                    verify_batch_with_policy(
                        &mut OsRng,
                        &public_keys,
                        &messages,
                        &sigs,
                        &Policy::DEFAULT,
                    )
                })
            });
        }
        group.finish();
    }

    criterion_group! {
        name = batch_benches;
        config = Criterion::default();
        targets = verify_batch_signatures,
    }
}

criterion_main!(single_benches::single_benches, batch_benches::batch_benches);
