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

//! This module contains backend-specific constant values, such as the 64-bit limbs of curve constants.

#![allow(non_snake_case)]

use super::field::FieldElement51;
use super::scalar::Scalar52;
use crate::edwards::EdwardsPoint;

/// Edwards `d` value, equal to `-121665/121666 mod p`.
pub(crate) const EDWARDS_D: FieldElement51 = FieldElement51::from_limbs([
    929955233495203,
    466365720129213,
    1662059464998953,
    2033849074728123,
    1442794654840575,
]);

/// Edwards `2*d` value, equal to `2*(-121665/121666) mod p`.
pub(crate) const EDWARDS_D2: FieldElement51 = FieldElement51::from_limbs([
    1859910466990425,
    932731440258426,
    1072319116312658,
    1815898335770999,
    633789495995903,
]);

/// Precomputed value of one of the square roots of -1 (mod p)
pub(crate) const SQRT_M1: FieldElement51 = FieldElement51::from_limbs([
    1718705420411056,
    234908883556509,
    2233514472574048,
    2117202627021982,
    765476049583133,
]);

/// `L` is the order of base point, i.e. 2^252 + 27742317777372353535851937790883648493
pub(crate) const L: Scalar52 = Scalar52([
    0x0002631a5cf5d3ed,
    0x000dea2f79cd6581,
    0x000000000014def9,
    0x0000000000000000,
    0x0000100000000000,
]);

/// `L` * `LFACTOR` = -1 (mod 2^52)
pub(crate) const LFACTOR: u64 = 0x51da312547e1b;

/// `R` = R % L where R = 2^260
pub(crate) const R: Scalar52 = Scalar52([
    0x000f48bd6721e6ed,
    0x0003bab5ac67e45a,
    0x000fffffeb35e51b,
    0x000fffffffffffff,
    0x00000fffffffffff,
]);

/// `RR` = (R^2) % L where R = 2^260
pub(crate) const RR: Scalar52 = Scalar52([
    0x0009d265e952d13b,
    0x000d63c715bea69f,
    0x0005be65cb687604,
    0x0003dceec73d217f,
    0x000009411b7c309a,
]);

/// The Ed25519 basepoint, as an `EdwardsPoint`.
///
/// This is called `_POINT` to distinguish it from
/// `ED25519_BASEPOINT_COMPRESSED`.
pub(crate) const ED25519_BASEPOINT_POINT: EdwardsPoint = EdwardsPoint {
    X: FieldElement51::from_limbs([
        1738742601995546,
        1146398526822698,
        2070867633025821,
        562264141797630,
        587772402128613,
    ]),
    Y: FieldElement51::from_limbs([
        1801439850948184,
        1351079888211148,
        450359962737049,
        900719925474099,
        1801439850948198,
    ]),
    Z: FieldElement51::from_limbs([1, 0, 0, 0, 0]),
    T: FieldElement51::from_limbs([
        1841354044333475,
        16398895984059,
        755974180946558,
        900171276175154,
        1821297809914039,
    ]),
};

/// Affine x-coordinate of a generator of the 8-torsion subgroup.
const TORSION_X1: FieldElement51 = FieldElement51::from_limbs([
    358744748052810,
    1691584618240980,
    977650209285361,
    1429865912637724,
    560044844278676,
]);

/// Negation of `TORSION_X1`.
const TORSION_X1_NEG: FieldElement51 = FieldElement51::from_limbs([
    1893055065632419,
    560215195444267,
    1274149604399886,
    821933901047523,
    1691754969406571,
]);

/// Affine y-coordinate of a generator of the 8-torsion subgroup.
const TORSION_Y1: FieldElement51 = FieldElement51::from_limbs([
    84926274344903,
    473620666599931,
    365590438845504,
    1028470286882429,
    2146499180330972,
]);

/// Negation of `TORSION_Y1`.
const TORSION_Y1_NEG: FieldElement51 = FieldElement51::from_limbs([
    2166873539340326,
    1778179147085316,
    1886209374839743,
    1223329526802818,
    105300633354275,
]);

/// `TORSION_X1 * TORSION_Y1`.
const TORSION_T1: FieldElement51 = FieldElement51::from_limbs([
    1448326834587521,
    1857896831960481,
    1093722731865333,
    1677408490711241,
    1915505153018406,
]);

/// Negation of `TORSION_T1`.
const TORSION_T1_NEG: FieldElement51 = FieldElement51::from_limbs([
    803472979097708,
    393902981724766,
    1158077081819914,
    574391322974006,
    336294660666841,
]);

/// The affine x-coordinate of `[2]P`, a point of order 4 with `y = 0`.
/// It is `-SQRT_M1`, the x-coordinate of `[6]P`.
const TORSION_X2: FieldElement51 = FieldElement51::from_limbs([
    533094393274173,
    2016890930128738,
    18285341111199,
    134597186663265,
    1486323764102114,
]);

/// Build an affine point with `Z = 1`.
const fn affine(X: FieldElement51, Y: FieldElement51, T: FieldElement51) -> EdwardsPoint {
    EdwardsPoint {
        X,
        Y,
        Z: FieldElement51::ONE,
        T,
    }
}

/// The 8-torsion subgroup \\(\mathcal E [8]\\).
///
/// In the case of Curve25519, it is cyclic; the \\(i\\)-th element of
/// the array is \\([i]P\\), where \\(P\\) is a point of order \\(8\\)
/// generating \\(\mathcal E[8]\\).
pub(crate) const EIGHT_TORSION: [EdwardsPoint; 8] = [
    affine(FieldElement51::ZERO, FieldElement51::ONE, FieldElement51::ZERO),
    affine(TORSION_X1, TORSION_Y1, TORSION_T1),
    affine(TORSION_X2, FieldElement51::ZERO, FieldElement51::ZERO),
    affine(TORSION_X1, TORSION_Y1_NEG, TORSION_T1_NEG),
    affine(FieldElement51::ZERO, FieldElement51::MINUS_ONE, FieldElement51::ZERO),
    affine(TORSION_X1_NEG, TORSION_Y1_NEG, TORSION_T1),
    affine(SQRT_M1, FieldElement51::ZERO, FieldElement51::ZERO),
    affine(TORSION_X1_NEG, TORSION_Y1, TORSION_T1_NEG),
];
