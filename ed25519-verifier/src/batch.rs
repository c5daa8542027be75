// -*- mode: rust; -*-
//
// This file is part of ed25519-verifier.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Batch signature verification.

use alloc::vec::Vec;

use core::iter::once;

use curve25519_core::constants;
use curve25519_core::edwards::EdwardsPoint;
use curve25519_core::scalar::Scalar;
use curve25519_core::traits::IsIdentity;
use curve25519_core::traits::VartimeMultiscalarMul;

use rand_core::{CryptoRng, RngCore};

use crate::errors::InternalError;
use crate::errors::SignatureError;
use crate::policy::{Options, Policy};
use crate::signature::Signature;
use crate::verifying::{PreparedSignature, VerifyingKey};

/// Batches smaller than this are verified one signature at a time.
pub const MIN_BATCH_SIZE: usize = 4;

/// Verify a batch of `signatures` on `messages` with their respective `public_keys`,
/// under the [`Policy`] selected by `options`.
///
/// # Inputs
///
/// * `rng` supplies one 128-bit blinding factor per signature.
/// * `public_keys`, `messages` and `signatures` are parallel slices of raw
///   encodings; element `i` of each forms the `i`th triple.
///
/// # Returns
///
/// `Ok((all_valid, valid))`, where `valid[i]` is exactly what
/// [`crate::verify`] returns for the `i`th triple and `all_valid` is their
/// conjunction.  An `Err` is returned only if the slices differ in length
/// or `rng` fails; an invalid signature is never an error.
///
/// # Examples
///
/// ```
/// use ed25519_verifier::{verify_batch, Options};
/// use rand::rngs::OsRng;
///
/// # fn main() {
/// let public_keys: Vec<&[u8]> = vec![&[0u8; 32][..]; 4];
/// let messages: Vec<&[u8]> = vec![&b"They're good dogs Brant"[..]; 4];
/// let signatures: Vec<&[u8]> = vec![&[0u8; 64][..]; 4];
///
/// let (all_valid, valid) =
///     verify_batch(&mut OsRng, &public_keys, &messages, &signatures, &Options::default())
///         .unwrap();
/// assert!(!all_valid);
/// assert_eq!(valid, vec![false; 4]);
/// # }
/// ```
pub fn verify_batch<R>(
    rng: &mut R,
    public_keys: &[&[u8]],
    messages: &[&[u8]],
    signatures: &[&[u8]],
    options: &Options,
) -> Result<(bool, Vec<bool>), SignatureError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    verify_batch_with_policy(rng, public_keys, messages, signatures, &options.policy())
}

/// Verify a batch of signatures under an explicit [`Policy`].
///
/// See [`verify_batch`].  A cofactorless policy cannot be checked with a
/// single combined equation, so under such a policy every signature is
/// verified on its own.
#[allow(non_snake_case)]
pub fn verify_batch_with_policy<R>(
    rng: &mut R,
    public_keys: &[&[u8]],
    messages: &[&[u8]],
    signatures: &[&[u8]],
    policy: &Policy,
) -> Result<(bool, Vec<bool>), SignatureError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    // Return an Error if any of the vectors were not the same size as the others.
    if signatures.len() != messages.len()
        || signatures.len() != public_keys.len()
        || public_keys.len() != messages.len()
    {
        return Err(InternalError::ArrayLength {
            name_a: "public_keys",
            length_a: public_keys.len(),
            name_b: "messages",
            length_b: messages.len(),
            name_c: "signatures",
            length_c: signatures.len(),
        }
        .into());
    }

    // Decode every triple and apply the policy to its encodings.  A triple
    // which fails here is invalid and takes no part in the combined check.
    let prepared: Vec<Option<PreparedSignature>> = public_keys
        .iter()
        .zip(messages.iter())
        .zip(signatures.iter())
        .map(|((public_key, message), signature)| {
            prepare(public_key, message, signature, policy).ok()
        })
        .collect();

    if prepared.len() < MIN_BATCH_SIZE || !policy.cofactored {
        return Ok(verify_serially(&prepared, policy));
    }

    let candidates: Vec<&PreparedSignature> = prepared.iter().flatten().collect();
    if candidates.is_empty() {
        return Ok(finish(prepared.iter().map(|_| false).collect()));
    }

    // Select a random 128-bit scalar for each signature.
    let mut zs: Vec<Scalar> = Vec::with_capacity(candidates.len());
    for _ in 0..candidates.len() {
        let mut z = [0u8; 16];
        rng.try_fill_bytes(&mut z)
            .map_err(|_| InternalError::Rng)?;
        zs.push(Scalar::from(u128::from_le_bytes(z)));
    }

    // Compute the basepoint coefficient, ∑ s[i]z[i] (mod l)
    let B_coefficient: Scalar = candidates
        .iter()
        .zip(zs.iter())
        .map(|(sig, z)| z * sig.s)
        .sum();

    // Multiply each H(R || A || M) by the random value
    let zhrams = candidates.iter().zip(zs.iter()).map(|(sig, z)| z * sig.k);

    let Rs = candidates.iter().map(|sig| sig.R);
    let As = candidates.iter().map(|sig| sig.A);
    let B = once(constants::ED25519_BASEPOINT_POINT);

    // Compute (-∑ z[i]s[i] (mod l)) B + ∑ z[i]R[i] + ∑ (z[i]H(R||A||M)[i] (mod l)) A[i],
    // which is a torsion point exactly when every equation holds up to torsion.
    let check = EdwardsPoint::vartime_multiscalar_mul(
        once(-B_coefficient).chain(zs.iter().cloned()).chain(zhrams),
        B.chain(Rs).chain(As),
    );

    if check.mul_by_cofactor().is_identity() {
        Ok(finish(prepared.iter().map(Option::is_some).collect()))
    } else {
        // The combined check cannot say which signature failed.
        Ok(verify_serially(&prepared, policy))
    }
}

fn prepare(
    public_key: &[u8],
    message: &[u8],
    signature: &[u8],
    policy: &Policy,
) -> Result<PreparedSignature, SignatureError> {
    let key = VerifyingKey::try_from(public_key)?;
    let signature = Signature::from_slice(signature)?;
    PreparedSignature::new(&key, message, &signature, policy)
}

fn verify_serially(prepared: &[Option<PreparedSignature>], policy: &Policy) -> (bool, Vec<bool>) {
    finish(
        prepared
            .iter()
            .map(|entry| {
                entry
                    .as_ref()
                    .is_some_and(|sig| sig.check_equation(policy))
            })
            .collect(),
    )
}

fn finish(valid: Vec<bool>) -> (bool, Vec<bool>) {
    (valid.iter().all(|v| *v), valid)
}
