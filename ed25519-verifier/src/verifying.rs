// -*- mode: rust; -*-
//
// This file is part of ed25519-verifier.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! ed25519 public keys and single-signature verification.

use core::fmt::Debug;
use core::hash::{Hash, Hasher};

use curve25519_core::digest::Digest;
use curve25519_core::edwards::CompressedEdwardsY;
use curve25519_core::edwards::EdwardsPoint;
use curve25519_core::scalar::Scalar;
use curve25519_core::traits::IsIdentity;

use sha2::Sha512;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::*;
use crate::errors::*;
use crate::policy::{Options, Policy};
use crate::signature::*;

/// An ed25519 public key.
///
/// # Note
///
/// The `Eq` and `Hash` impls here use the compressed Edwards y encoding, _not_ the algebraic
/// representation. This means if this `VerifyingKey` is non-canonically encoded, it will be
/// considered unequal to the other equivalent encoding, despite the two representing the same
/// point.  The received encoding is also what the challenge hash is computed over.
// Invariant: VerifyingKey.point is always the decompression of VerifyingKey.compressed
#[derive(Copy, Clone, Default, Eq)]
pub struct VerifyingKey {
    /// Serialized compressed Edwards-y point, exactly as received.
    pub(crate) compressed: CompressedEdwardsY,

    /// Decompressed Edwards point used for curve arithmetic operations.
    pub(crate) point: EdwardsPoint,
}

impl Debug for VerifyingKey {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "VerifyingKey({:?}, {:?})", self.compressed, self.point)
    }
}

impl AsRef<[u8]> for VerifyingKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Hash for VerifyingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialEq<VerifyingKey> for VerifyingKey {
    fn eq(&self, other: &VerifyingKey) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl VerifyingKey {
    /// Convert this public key to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.compressed.to_bytes()
    }

    /// View this public key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.compressed.as_bytes()
    }

    /// Construct a `VerifyingKey` from its 32-byte encoding.
    ///
    /// Small-order keys and the non-canonical encodings that decompress are
    /// accepted here; whether a signature under such a key can be valid is
    /// the verification [`Policy`]'s decision.
    ///
    /// # Example
    ///
    /// ```
    /// use ed25519_verifier::VerifyingKey;
    /// use ed25519_verifier::PUBLIC_KEY_LENGTH;
    /// use ed25519_verifier::SignatureError;
    ///
    /// # fn doctest() -> Result<VerifyingKey, SignatureError> {
    /// let public_key_bytes: [u8; PUBLIC_KEY_LENGTH] = [
    ///    215,  90, 152,   1, 130, 177,  10, 183, 213,  75, 254, 211, 201, 100,   7,  58,
    ///     14, 225, 114, 243, 218, 166,  35,  37, 175,   2,  26, 104, 247,   7,   81, 26];
    ///
    /// let public_key = VerifyingKey::from_bytes(&public_key_bytes)?;
    /// #
    /// # Ok(public_key)
    /// # }
    /// #
    /// # fn main() {
    /// #     doctest().unwrap();
    /// # }
    /// ```
    ///
    /// # Returns
    ///
    /// A `Result` whose okay value is an EdDSA `VerifyingKey` or whose error value
    /// is a `SignatureError` describing the error that occurred.
    #[inline]
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<VerifyingKey, SignatureError> {
        let compressed = CompressedEdwardsY(*bytes);
        let point = compressed
            .decompress()
            .ok_or(InternalError::PointDecompression)?;

        // Invariant: VerifyingKey.point is always the decompression of VerifyingKey.compressed
        Ok(VerifyingKey { compressed, point })
    }

    /// Returns whether this is a _weak_ public key, i.e., if this public key has low order.
    ///
    /// A weak public key can be used to generate a signature that's valid for almost every
    /// message. [`Self::verify_strict`] and the default policy deny weak keys, but if you
    /// want to check for this property before verification, then use this method.
    pub fn is_weak(&self) -> bool {
        self.point.is_small_order()
    }

    /// Verify a signature on a message under the [`Policy`] selected by `options`.
    ///
    /// # Return
    ///
    /// Returns `true` if the signature is valid, and `false` otherwise.  A
    /// malformed `R` or an unreduced `S` is simply an invalid signature.
    pub fn verify_with_options(
        &self,
        message: &[u8],
        signature: &Signature,
        options: &Options,
    ) -> bool {
        self.verify_with_policy(message, signature, &options.policy())
    }

    /// Verify a signature on a message under an explicit [`Policy`].
    pub fn verify_with_policy(&self, message: &[u8], signature: &Signature, policy: &Policy) -> bool {
        PreparedSignature::new(self, message, signature, policy)
            .map(|prepared| prepared.check_equation(policy))
            .unwrap_or(false)
    }

    /// Verify a signature on a message with the default options.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.verify_with_policy(message, signature, &Policy::DEFAULT)
    }

    /// Strictly verify a signature on a message with this public key.
    ///
    /// This is [`Policy::STRICT`]: the cofactorless equation
    /// \\( [S]B = R + [h]A \\), with small-order and non-canonically
    /// encoded `A` and `R` refused.  It is the check RFC 8032 calls
    /// "sufficient, but not required", and is not batchable.
    pub fn verify_strict(&self, message: &[u8], signature: &Signature) -> bool {
        self.verify_with_policy(message, signature, &Policy::STRICT)
    }
}

/// Verify `signature` on `message` under `public_key`, all given as raw bytes.
///
/// This never panics: wrong lengths and undecodable encodings are reported
/// as `false`, like any other invalid signature.
///
/// # Example
///
/// ```
/// use ed25519_verifier::{verify, Options};
///
/// let public_key = [0u8; 31];
/// assert!(!verify(&public_key, b"message", &[0u8; 64], &Options::default()));
/// ```
pub fn verify(public_key: &[u8], message: &[u8], signature: &[u8], options: &Options) -> bool {
    let Ok(key) = VerifyingKey::try_from(public_key) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(signature) else {
        return false;
    };
    key.verify_with_options(message, &signature, options)
}

/// A signature which has been decoded and has passed a policy's checks
/// on its encodings, ready for the verification equation.
#[allow(non_snake_case)]
#[derive(Copy, Clone, Debug)]
pub(crate) struct PreparedSignature {
    pub(crate) A: EdwardsPoint,
    pub(crate) R: EdwardsPoint,
    pub(crate) s: Scalar,
    /// The challenge \\( h = H(R \| A \| M) \bmod \ell \\).
    pub(crate) k: Scalar,
}

impl PreparedSignature {
    /// Decode `signature`, reject an unreduced `S`, apply the `policy` to
    /// `A` and `R`, and compute the challenge over the received bytes.
    #[allow(non_snake_case)]
    pub(crate) fn new(
        key: &VerifyingKey,
        message: &[u8],
        signature: &Signature,
        policy: &Policy,
    ) -> Result<PreparedSignature, SignatureError> {
        let R = signature
            .R
            .decompress()
            .ok_or(InternalError::PointDecompression)?;

        let s = Option::<Scalar>::from(Scalar::from_canonical_bytes(signature.s))
            .ok_or(InternalError::ScalarFormat)?;

        if !policy.admits_public_key(&key.point, &key.compressed)
            || !policy.admits_commitment(&R, &signature.R)
        {
            return Err(InternalError::Verify.into());
        }

        let k = compute_challenge(&signature.R, &key.compressed, message);

        Ok(PreparedSignature {
            A: key.point,
            R,
            s,
            k,
        })
    }

    /// Evaluate the verification equation the `policy` calls for.
    #[allow(non_snake_case)]
    pub(crate) fn check_equation(&self, policy: &Policy) -> bool {
        let minus_A = -self.A;
        // [S]B - [h]A
        let sB_minus_kA =
            EdwardsPoint::vartime_double_scalar_mul_basepoint(&self.k, &minus_A, &self.s);

        if policy.cofactored {
            (sB_minus_kA - self.R).mul_by_cofactor().is_identity()
        } else {
            sB_minus_kA == self.R
        }
    }
}

/// Compute \\( H(R \| A \| M) \bmod \ell \\) over the encodings as received.
#[allow(non_snake_case)]
pub(crate) fn compute_challenge(
    R: &CompressedEdwardsY,
    A: &CompressedEdwardsY,
    M: &[u8],
) -> Scalar {
    let mut h = Sha512::new();
    h.update(R.as_bytes());
    h.update(A.as_bytes());
    h.update(M);

    Scalar::from_hash(h)
}

impl TryFrom<&[u8]> for VerifyingKey {
    type Error = SignatureError;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes = bytes.try_into().map_err(|_| InternalError::BytesLength {
            name: "VerifyingKey",
            length: PUBLIC_KEY_LENGTH,
        })?;
        Self::from_bytes(bytes)
    }
}

#[cfg(feature = "serde")]
impl Serialize for VerifyingKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.as_bytes()[..])
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for VerifyingKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        struct VerifyingKeyVisitor;

        impl<'de> serde::de::Visitor<'de> for VerifyingKeyVisitor {
            type Value = VerifyingKey;

            fn expecting(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(formatter, concat!("An ed25519 verifying (public) key"))
            }

            fn visit_bytes<E: serde::de::Error>(self, bytes: &[u8]) -> Result<Self::Value, E> {
                VerifyingKey::try_from(bytes).map_err(E::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];

                #[allow(clippy::needless_range_loop)]
                for i in 0..32 {
                    bytes[i] = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 32 bytes"))?;
                }

                let remaining = (0..)
                    .map(|_| seq.next_element::<u8>())
                    .take_while(|el| matches!(el, Ok(Some(_))))
                    .count();

                if remaining > 0 {
                    return Err(serde::de::Error::invalid_length(
                        32 + remaining,
                        &"expected 32 bytes",
                    ));
                }

                VerifyingKey::try_from(&bytes[..]).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_bytes(VerifyingKeyVisitor)
    }
}
