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

//! Variable-time multiscalar multiplication by interleaved sliding windows.

#![allow(non_snake_case)]

use alloc::vec::Vec;

use core::borrow::Borrow;
use core::cmp::Ordering;

use crate::backend::serial::curve_models::{ProjectiveNielsPoint, ProjectivePoint};
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::{Identity, VartimeMultiscalarMul};
use crate::window::NafLookupTable5;

/// Straus' interleaved window method, as used by batch verification
/// to evaluate
/// \\[
/// Q = c\_1 P\_1 + \cdots + c\_n P\_n
/// \\]
/// with all \\(n\\) terms sharing one chain of 256 doublings.
///
/// Each scalar is recoded into width-5 non-adjacent form, whose nonzero
/// digits are odd and lie in \\( [-15, 15] \\), so a table of
/// \\( P\_i, 3P\_i, \ldots, 15P\_i \\) per point covers every digit after
/// a possible negation.  Zero digits cost nothing, which is where the
/// variable timing comes from; every input here is public.
pub(crate) struct Straus {}

impl VartimeMultiscalarMul for Straus {
    type Point = EdwardsPoint;

    /// Returns `None` as soon as any point is `None`.
    fn optional_multiscalar_mul<I, J>(scalars: I, points: J) -> Option<EdwardsPoint>
    where
        I: IntoIterator,
        I::Item: Borrow<Scalar>,
        J: IntoIterator<Item = Option<EdwardsPoint>>,
    {
        let digits: Vec<[i8; 256]> = scalars
            .into_iter()
            .map(|c| c.borrow().non_adjacent_form(5))
            .collect();

        let tables = points
            .into_iter()
            .map(|P| P.map(|P| NafLookupTable5::<ProjectiveNielsPoint>::from(&P)))
            .collect::<Option<Vec<_>>>()?;

        // Walk the digit columns from the most significant end.
        let mut acc = ProjectivePoint::identity();
        for bit in (0..256).rev() {
            let mut sum = acc.double();

            for (naf, table) in digits.iter().zip(tables.iter()) {
                let d = naf[bit];
                match d.cmp(&0) {
                    Ordering::Greater => sum = &sum.as_extended() + &table.select(d as usize),
                    Ordering::Less => sum = &sum.as_extended() - &table.select(-d as usize),
                    Ordering::Equal => {}
                }
            }

            acc = sum.as_projective();
        }

        Some(acc.as_extended())
    }
}
