// -*- mode: rust; -*-
//
// This file is part of ed25519-verifier.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! An ed25519 signature.

use core::fmt::Debug;

use curve25519_core::edwards::CompressedEdwardsY;

#[cfg(feature = "serde")]
use serde::de::Error as SerdeError;
#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde::{Deserializer, Serializer};

use crate::constants::*;
use crate::errors::*;

/// An ed25519 signature, as received on the wire.
///
/// Neither half is validated on construction: `R` is decoded and `S` is
/// checked against the group order at verification time, so that a
/// malformed signature is an ordinary verification failure.
///
/// # Note
///
/// These signatures are "detached", that is, they do **not** include a copy
/// of the message which has been signed.
#[allow(non_snake_case)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Signature {
    /// `R` is the compressed encoding of the signer's commitment point,
    /// exactly as received.  The challenge hash is computed over these
    /// bytes, never over a re-encoding.
    pub(crate) R: CompressedEdwardsY,

    /// `s` holds the 32 little-endian bytes of the response scalar `S`,
    /// which may or may not be reduced modulo \\( \ell \\).
    pub(crate) s: [u8; 32],
}

impl Debug for Signature {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "Signature( R: {:?}, s: {:?} )", &self.R, &self.s)
    }
}

impl Signature {
    /// Construct a `Signature` from its 64-byte `R || S` encoding.
    #[inline]
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Signature {
        let mut lower: [u8; 32] = [0u8; 32];
        let mut upper: [u8; 32] = [0u8; 32];

        lower.copy_from_slice(&bytes[..SIGNATURE_R_LENGTH]);
        upper.copy_from_slice(&bytes[SIGNATURE_R_LENGTH..]);

        Signature {
            R: CompressedEdwardsY(lower),
            s: upper,
        }
    }

    /// Construct a `Signature` from a slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns a `SignatureError` if `bytes` is not exactly
    /// `SIGNATURE_LENGTH` bytes long.
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Result<Signature, SignatureError> {
        let bytes: &[u8; SIGNATURE_LENGTH] =
            bytes.try_into().map_err(|_| InternalError::BytesLength {
                name: "Signature",
                length: SIGNATURE_LENGTH,
            })?;
        Ok(Signature::from_bytes(bytes))
    }

    /// Convert this `Signature` to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut signature_bytes: [u8; SIGNATURE_LENGTH] = [0u8; SIGNATURE_LENGTH];

        signature_bytes[..SIGNATURE_R_LENGTH].copy_from_slice(&self.R.as_bytes()[..]);
        signature_bytes[SIGNATURE_R_LENGTH..].copy_from_slice(&self.s[..]);
        signature_bytes
    }

    /// The `R` half of this signature, as received.
    #[inline]
    pub fn r_bytes(&self) -> &[u8; 32] {
        self.R.as_bytes()
    }

    /// The `S` half of this signature, as received.
    #[inline]
    pub fn s_bytes(&self) -> &[u8; 32] {
        &self.s
    }
}

impl From<[u8; SIGNATURE_LENGTH]> for Signature {
    fn from(bytes: [u8; SIGNATURE_LENGTH]) -> Signature {
        Signature::from_bytes(&bytes)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<Signature, SignatureError> {
        Signature::from_slice(bytes)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes()[..])
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        struct SignatureVisitor;

        impl<'d> Visitor<'d> for SignatureVisitor {
            type Value = Signature;

            fn expecting(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.write_str("An ed25519 signature as 64 bytes, as specified in RFC8032.")
            }

            fn visit_bytes<E>(self, bytes: &[u8]) -> Result<Signature, E>
            where
                E: SerdeError,
            {
                Signature::from_slice(bytes)
                    .map_err(|_| SerdeError::invalid_length(bytes.len(), &self))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Signature, A::Error>
            where
                A: serde::de::SeqAccess<'d>,
            {
                let mut bytes = [0u8; SIGNATURE_LENGTH];

                #[allow(clippy::needless_range_loop)]
                for i in 0..SIGNATURE_LENGTH {
                    bytes[i] = seq
                        .next_element()?
                        .ok_or_else(|| SerdeError::invalid_length(i, &self))?;
                }

                if seq.next_element::<u8>()?.is_some() {
                    return Err(SerdeError::invalid_length(SIGNATURE_LENGTH + 1, &self));
                }

                Ok(Signature::from_bytes(&bytes))
            }
        }
        deserializer.deserialize_bytes(SignatureVisitor)
    }
}
