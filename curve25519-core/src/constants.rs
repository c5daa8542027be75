// -*- mode: rust; -*-
//
// This file is part of curve25519-core.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Various constants, such as the Ed25519 basepoint.
//!
//! Most of the constants are given with
//! `LONG_DESCRIPTIVE_UPPER_CASE_NAMES`, but they can be brought into
//! scope using a `let` binding:
//!
//! ```
//! use curve25519_core::constants;
//! use curve25519_core::traits::IsIdentity;
//!
//! let B = constants::ED25519_BASEPOINT_POINT;
//! let l = constants::BASEPOINT_ORDER_BYTES;
//!
//! let A = B.mul_by_pow_2(3);
//! assert!(!A.is_identity());
//! # let _ = l;
//! ```

#![allow(non_snake_case)]

use crate::backend::serial::u64::constants as backend;
use crate::edwards::{CompressedEdwardsY, EdwardsPoint};
use crate::field::FieldElement;
use crate::scalar::Scalar;

/// The Ed25519 basepoint, in `CompressedEdwardsY` format.
///
/// This is the little-endian byte encoding of \\( 4/5 \pmod p \\),
/// which is the \\(y\\)-coordinate of the Ed25519 basepoint.
///
/// The sign bit is 0 since the basepoint has \\(x\\) chosen to be positive.
pub const ED25519_BASEPOINT_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY([
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
]);

/// The Ed25519 basepoint, as an `EdwardsPoint`.
pub const ED25519_BASEPOINT_POINT: EdwardsPoint = backend::ED25519_BASEPOINT_POINT;

/// The 8-torsion subgroup \\(\mathcal E [8]\\).
///
/// In the case of Curve25519, it is cyclic; the \\(i\\)-th element of
/// the array is \\([i]P\\), where \\(P\\) is a point of order \\(8\\)
/// generating \\(\mathcal E[8]\\).
///
/// Thus \\(\mathcal E[4]\\) is the points indexed by `0,2,4,6`, and
/// \\(\mathcal E[2]\\) is the points indexed by `0,4`.
pub const EIGHT_TORSION: [EdwardsPoint; 8] = backend::EIGHT_TORSION;

/// The order of the basepoint, \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\),
/// as little-endian bytes.
///
/// This is not a canonical scalar encoding: it reduces to zero.
pub const BASEPOINT_ORDER_BYTES: [u8; 32] = BASEPOINT_ORDER_PRIVATE.bytes;

/// `BASEPOINT_ORDER_PRIVATE` is the order of the Ed25519 basepoint, i.e.,
/// $$
/// \ell = 2^\{252\} + 27742317777372353535851937790883648493.
/// $$
/// It violates scalar invariant #2 and is only used for torsion checks.
pub(crate) const BASEPOINT_ORDER_PRIVATE: Scalar = Scalar {
    bytes: [
        0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
        0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x10,
    ],
};

/// Edwards `d` value, equal to `-121665/121666 mod p`.
pub const EDWARDS_D: FieldElement = backend::EDWARDS_D;

/// Edwards `2*d` value, equal to `2*(-121665/121666) mod p`.
pub const EDWARDS_D2: FieldElement = backend::EDWARDS_D2;

/// Precomputed value of one of the square roots of -1 (mod p).
pub const SQRT_M1: FieldElement = backend::SQRT_M1;

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::{IsIdentity, ValidityCheck};

    /// Test that d = -121665/121666
    #[test]
    fn test_d_vs_ratio() {
        let a = -&FieldElement::from_limbs([121665, 0, 0, 0, 0]);
        let b = FieldElement::from_limbs([121666, 0, 0, 0, 0]);
        let d = &a * &b.invert();
        let d2 = &d + &d;
        assert_eq!(d, EDWARDS_D);
        assert_eq!(d2, EDWARDS_D2);
    }

    #[test]
    fn test_sqrt_minus_one() {
        let minus_one = FieldElement::MINUS_ONE;
        let sqrt_m1_sq = &SQRT_M1 * &SQRT_M1;
        assert_eq!(minus_one, sqrt_m1_sq);
        assert!(bool::from(!SQRT_M1.is_negative()));
    }

    #[test]
    fn test_sqrt_constants_sign() {
        let minus_one = FieldElement::MINUS_ONE;
        let (was_nonzero_square, invsqrt_m1) =
            FieldElement::sqrt_ratio_i(&FieldElement::ONE, &minus_one);
        assert!(bool::from(was_nonzero_square));
        let sign_test_sqrt = &invsqrt_m1 * &SQRT_M1;
        assert_eq!(sign_test_sqrt, minus_one);
    }

    #[test]
    fn basepoint_is_valid_and_compresses() {
        assert!(ED25519_BASEPOINT_POINT.is_valid());
        assert_eq!(ED25519_BASEPOINT_POINT.compress(), ED25519_BASEPOINT_COMPRESSED);
    }

    /// Test that all the eight-torsion points lie on the curve and
    /// that the table is \\([i]P\\) for its generator \\(P\\).
    #[test]
    fn test_eight_torsion() {
        for (i, torsion_point) in EIGHT_TORSION.iter().enumerate() {
            assert!(torsion_point.is_valid(), "torsion point {} is invalid", i);
            assert!(torsion_point.mul_by_pow_2(3).is_identity());
            let q = torsion_point + &EIGHT_TORSION[1];
            assert_eq!(q, EIGHT_TORSION[(i + 1) % 8]);
        }
    }

    #[test]
    fn basepoint_order_bytes_reduce_to_zero() {
        assert_eq!(Scalar::from_bytes_mod_order(BASEPOINT_ORDER_BYTES), Scalar::ZERO);
    }
}
