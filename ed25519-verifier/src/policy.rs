// -*- mode: rust; -*-
//
// This file is part of ed25519-verifier.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Validity policies for Ed25519 signatures.
//!
//! Implementations of Ed25519 disagree about which edge-case signatures
//! are valid.  The disagreements all come down to a handful of choices:
//!
//! * whether the verification equation is multiplied by the cofactor 8;
//! * whether a public key `A` or commitment `R` of small order is refused;
//! * whether an encoding of `A` or `R` which decodes, but is not the
//!   canonical encoding of the point it decodes to, is refused.
//!
//! A [`Policy`] records one answer to each of these.  Whatever the
//! policy, a response scalar `S` which is not below \\( \ell \\) is always
//! refused, as is any \\(y\\)-coordinate which is not below \\(p\\).
//!
//! | policy              | cofactored | small-order `A` | small-order `R` | non-canonical `A` | non-canonical `R` |
//! |---------------------|------------|-----------------|-----------------|-------------------|-------------------|
//! | [`Policy::DEFAULT`] | yes        | refuse          | allow           | refuse            | allow             |
//! | [`Policy::ZIP215`]  | yes        | allow           | allow           | allow             | allow             |
//! | [`Policy::STRICT`]  | no         | refuse          | refuse          | refuse            | refuse            |

#![allow(non_snake_case)]

use curve25519_core::edwards::{CompressedEdwardsY, EdwardsPoint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Caller-facing verification options.
///
/// `zip215_verify` selects the relaxed [ZIP-215] rules; when unset the
/// standard cofactored rules of [`Policy::DEFAULT`] apply.
///
/// [ZIP-215]: https://zips.z.cash/zip-0215
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Options {
    /// Accept small-order and non-canonically encoded points, checking
    /// only the cofactored equation.
    pub zip215_verify: bool,
}

impl Options {
    /// The [`Policy`] these options select.
    pub const fn policy(&self) -> Policy {
        if self.zip215_verify {
            Policy::ZIP215
        } else {
            Policy::DEFAULT
        }
    }
}

impl From<Options> for Policy {
    fn from(options: Options) -> Policy {
        options.policy()
    }
}

/// The decision table for one Ed25519 validity policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Policy {
    /// Check \\( [8]([S]B - [h]A - R) = 0 \\) instead of \\( [S]B = R + [h]A \\).
    pub cofactored: bool,
    /// Accept a public key `A` in the torsion subgroup.
    pub allow_small_order_a: bool,
    /// Accept a commitment `R` in the torsion subgroup.
    pub allow_small_order_r: bool,
    /// Accept a public key whose bytes are not the canonical encoding of its point.
    pub allow_non_canonical_a: bool,
    /// Accept a commitment whose bytes are not the canonical encoding of its point.
    pub allow_non_canonical_r: bool,
}

impl Policy {
    /// Cofactored verification which refuses small-order and
    /// non-canonically encoded public keys.
    pub const DEFAULT: Policy = Policy {
        cofactored: true,
        allow_small_order_a: false,
        allow_small_order_r: true,
        allow_non_canonical_a: false,
        allow_non_canonical_r: true,
    };

    /// Cofactored verification with no further checks on `A` or `R`.
    pub const ZIP215: Policy = Policy {
        cofactored: true,
        allow_small_order_a: true,
        allow_small_order_r: true,
        allow_non_canonical_a: true,
        allow_non_canonical_r: true,
    };

    /// Cofactorless verification which refuses small-order and
    /// non-canonically encoded `A` and `R`.
    pub const STRICT: Policy = Policy {
        cofactored: false,
        allow_small_order_a: false,
        allow_small_order_r: false,
        allow_non_canonical_a: false,
        allow_non_canonical_r: false,
    };

    /// Whether this policy accepts the public key `A`, received as `encoding`.
    pub(crate) fn admits_public_key(&self, A: &EdwardsPoint, encoding: &CompressedEdwardsY) -> bool {
        admits(
            A,
            encoding,
            self.allow_small_order_a,
            self.allow_non_canonical_a,
        )
    }

    /// Whether this policy accepts the commitment `R`, received as `encoding`.
    pub(crate) fn admits_commitment(&self, R: &EdwardsPoint, encoding: &CompressedEdwardsY) -> bool {
        admits(
            R,
            encoding,
            self.allow_small_order_r,
            self.allow_non_canonical_r,
        )
    }
}

impl Default for Policy {
    fn default() -> Policy {
        Policy::DEFAULT
    }
}

// Decoding already refuses y >= p, so the only way to get here with a
// non-canonical encoding is x = 0 with the sign bit set.
fn admits(
    point: &EdwardsPoint,
    encoding: &CompressedEdwardsY,
    allow_small_order: bool,
    allow_non_canonical: bool,
) -> bool {
    if !allow_non_canonical && point.compress() != *encoding {
        return false;
    }
    if !allow_small_order && point.is_small_order() {
        return false;
    }
    true
}
