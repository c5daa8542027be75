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

//! Field arithmetic modulo \\(p = 2\^{255} - 19\\), using \\(64\\)-bit
//! limbs with \\(128\\)-bit products.
//!
//! # Magnitude bounds
//!
//! An element is *reduced* when every limb is below \\(2\^{51}\\) plus a
//! small carry (at most \\(2\^{51} + 2\^{13}\cdot 19\\) after a carry
//! pass). Multiplication and squaring accept any limbs below
//! \\(2\^{54}\\) and always return a reduced element.
//!
//! The additive operations differ only in how much headroom they consume:
//!
//! | operation | inputs | output limbs |
//! |---|---|---|
//! | `a + b` | reduced, reduced | \\( < 2\^{52} \\) |
//! | [`add_after_basic`](FieldElement51::add_after_basic) | \\( < 2\^{53} \\), reduced | \\( < 2\^{54} \\) |
//! | [`add_reduce`](FieldElement51::add_reduce) | \\( < 2\^{63} \\) | reduced |
//! | [`sub_basic`](FieldElement51::sub_basic) | \\( < 2\^{52} \\), reduced | \\( < 2\^{53} \\) |
//! | [`sub_after_basic`](FieldElement51::sub_after_basic) | \\( < 2\^{53} \\), \\( < 2\^{52} \\) | \\( < 2\^{54} \\) |
//! | `a - b` ([`sub_reduce`](FieldElement51::sub_reduce)) | \\( < 2\^{54} \\) | reduced |
//!
//! Subtraction adds a multiple of \\(p\\) large enough that no limb can
//! underflow, so none of these paths branch on the operands.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Mask selecting the low 51 bits of a limb.
const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// \\(2p\\) in radix \\(2\^{51}\\).
const TWO_P: [u64; 5] = [
    0xfffffffffffda,
    0xffffffffffffe,
    0xffffffffffffe,
    0xffffffffffffe,
    0xffffffffffffe,
];

/// \\(4p\\) in radix \\(2\^{51}\\).
const FOUR_P: [u64; 5] = [
    0x1fffffffffffb4,
    0x1ffffffffffffc,
    0x1ffffffffffffc,
    0x1ffffffffffffc,
    0x1ffffffffffffc,
];

/// \\(16p\\) in radix \\(2\^{51}\\).
const SIXTEEN_P: [u64; 5] = [
    36028797018963664,
    36028797018963952,
    36028797018963952,
    36028797018963952,
    36028797018963952,
];

/// A `FieldElement51` represents an element of the field
/// \\( \mathbb Z / (2\^{255} - 19)\\).
///
/// In the 64-bit implementation, a `FieldElement` is represented in
/// radix \\(2\^{51}\\) as five `u64`s; the coefficients are allowed to
/// grow up to \\(2\^{54}\\) between reductions modulo \\(p\\).
///
/// # Note
///
/// The `curve25519_core::field` module provides a type alias
/// `curve25519_core::field::FieldElement` to this type.
#[derive(Copy, Clone)]
pub struct FieldElement51(pub(crate) [u64; 5]);

impl Debug for FieldElement51 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement51({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement51 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<'b> AddAssign<&'b FieldElement51> for FieldElement51 {
    fn add_assign(&mut self, rhs: &'b FieldElement51) {
        for i in 0..5 {
            self.0[i] += rhs.0[i];
        }
    }
}

impl<'a, 'b> Add<&'b FieldElement51> for &'a FieldElement51 {
    type Output = FieldElement51;
    /// Limbwise addition without a carry pass.
    fn add(self, rhs: &'b FieldElement51) -> FieldElement51 {
        let mut output = *self;
        output += rhs;
        output
    }
}

define_add_variants!(LHS = FieldElement51, RHS = FieldElement51, Output = FieldElement51);
define_add_assign_variants!(LHS = FieldElement51, RHS = FieldElement51);

impl<'b> SubAssign<&'b FieldElement51> for FieldElement51 {
    fn sub_assign(&mut self, rhs: &'b FieldElement51) {
        *self = self.sub_reduce(rhs);
    }
}

impl<'a, 'b> Sub<&'b FieldElement51> for &'a FieldElement51 {
    type Output = FieldElement51;
    /// Subtraction followed by a carry pass; see
    /// [`FieldElement51::sub_reduce`].
    fn sub(self, rhs: &'b FieldElement51) -> FieldElement51 {
        self.sub_reduce(rhs)
    }
}

define_sub_variants!(LHS = FieldElement51, RHS = FieldElement51, Output = FieldElement51);
define_sub_assign_variants!(LHS = FieldElement51, RHS = FieldElement51);

impl<'b> MulAssign<&'b FieldElement51> for FieldElement51 {
    fn mul_assign(&mut self, rhs: &'b FieldElement51) {
        let result = &*self * rhs;
        self.0 = result.0;
    }
}

impl<'a, 'b> Mul<&'b FieldElement51> for &'a FieldElement51 {
    type Output = FieldElement51;

    #[rustfmt::skip] // keep alignment of c* calculations
    fn mul(self, rhs: &'b FieldElement51) -> FieldElement51 {
        /// Helper function to multiply two 64-bit integers with 128
        /// bits of output.
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 { (x as u128) * (y as u128) }

        let a: &[u64; 5] = &self.0;
        let b: &[u64; 5] = &rhs.0;

        // Precondition: every limb of both inputs is below 2^54, so that
        // b[i] * 19 fits in 59 bits and each c_i below fits in 128 bits.
        debug_assert!(a.iter().all(|&limb| limb < (1 << 54)));
        debug_assert!(b.iter().all(|&limb| limb < (1 << 54)));

        // Multiplication by 2^255 is multiplication by 19 mod p, so the
        // wrapped-around partial products are pre-scaled by 19.
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let     c0: u128 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let mut c1: u128 = m(a[1], b[0]) + m(a[0],  b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let mut c2: u128 = m(a[2], b[0]) + m(a[1],  b[1]) + m(a[0],  b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let mut c3: u128 = m(a[3], b[0]) + m(a[2],  b[1]) + m(a[1],  b[2]) + m(a[0],  b[3]) + m(a[4], b4_19);
        let mut c4: u128 = m(a[4], b[0]) + m(a[3],  b[1]) + m(a[2],  b[2]) + m(a[1],  b[3]) + m(a[0],  b[4]);

        FieldElement51::carry_wide(c0, &mut c1, &mut c2, &mut c3, &mut c4)
    }
}

define_mul_variants!(LHS = FieldElement51, RHS = FieldElement51, Output = FieldElement51);
define_mul_assign_variants!(LHS = FieldElement51, RHS = FieldElement51);

impl<'a> Neg for &'a FieldElement51 {
    type Output = FieldElement51;
    fn neg(self) -> FieldElement51 {
        let mut output = *self;
        output.negate();
        output
    }
}

impl Neg for FieldElement51 {
    type Output = FieldElement51;
    fn neg(self) -> FieldElement51 {
        -&self
    }
}

impl ConditionallySelectable for FieldElement51 {
    fn conditional_select(a: &FieldElement51, b: &FieldElement51, choice: Choice) -> FieldElement51 {
        let mut limbs = [0u64; 5];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement51(limbs)
    }

    fn conditional_swap(a: &mut FieldElement51, b: &mut FieldElement51, choice: Choice) {
        for i in 0..5 {
            u64::conditional_swap(&mut a.0[i], &mut b.0[i], choice);
        }
    }

    fn conditional_assign(&mut self, other: &FieldElement51, choice: Choice) {
        for i in 0..5 {
            self.0[i].conditional_assign(&other.0[i], choice);
        }
    }
}

impl FieldElement51 {
    /// Construct a field element from its radix-\\(2\^{51}\\) limbs.
    ///
    /// The limbs are taken as-is, so the result may be unreduced.
    pub const fn from_limbs(limbs: [u64; 5]) -> FieldElement51 {
        FieldElement51(limbs)
    }

    /// The scalar \\( 0 \\).
    pub const ZERO: FieldElement51 = FieldElement51::from_limbs([0, 0, 0, 0, 0]);
    /// The scalar \\( 1 \\).
    pub const ONE: FieldElement51 = FieldElement51::from_limbs([1, 0, 0, 0, 0]);
    /// The scalar \\( -1 \\).
    pub const MINUS_ONE: FieldElement51 = FieldElement51::from_limbs([
        2251799813685228,
        2251799813685247,
        2251799813685247,
        2251799813685247,
        2251799813685247,
    ]);

    /// The raw limbs, in whatever magnitude state they currently are.
    pub const fn limbs(&self) -> [u64; 5] {
        self.0
    }

    /// Invert the sign of this field element.
    pub fn negate(&mut self) {
        // Same headroom argument as sub_reduce, with a zero minuend.
        let neg = FieldElement51::reduce([
            SIXTEEN_P[0] - self.0[0],
            SIXTEEN_P[1] - self.0[1],
            SIXTEEN_P[2] - self.0[2],
            SIXTEEN_P[3] - self.0[3],
            SIXTEEN_P[4] - self.0[4],
        ]);
        self.0 = neg.0;
    }

    /// Add `rhs` to an element that is itself the output of a basic
    /// addition or subtraction, without carrying.
    ///
    /// `self` may have limbs up to \\(2\^{53}\\); `rhs` must be reduced.
    /// The result has limbs below \\(2\^{54}\\) and is still a valid
    /// input to multiplication.
    pub fn add_after_basic(&self, rhs: &FieldElement51) -> FieldElement51 {
        debug_assert!(self.0.iter().all(|&limb| limb < (1 << 53)));
        self + rhs
    }

    /// Add two elements and carry the result back to reduced form.
    pub fn add_reduce(&self, rhs: &FieldElement51) -> FieldElement51 {
        let mut limbs = self.0;
        for (limb, r) in limbs.iter_mut().zip(rhs.0.iter()) {
            *limb += r;
        }
        FieldElement51::reduce(limbs)
    }

    /// Compute `self - rhs` as \\( a + 2p - b \\), without carrying.
    ///
    /// `rhs` must be reduced so that no limb of \\(2p - b\\) underflows.
    /// The result has limbs below \\(2\^{53}\\).
    pub fn sub_basic(&self, rhs: &FieldElement51) -> FieldElement51 {
        debug_assert!(rhs.0.iter().zip(TWO_P.iter()).all(|(&limb, &bound)| limb <= bound));
        FieldElement51([
            (self.0[0] + TWO_P[0]) - rhs.0[0],
            (self.0[1] + TWO_P[1]) - rhs.0[1],
            (self.0[2] + TWO_P[2]) - rhs.0[2],
            (self.0[3] + TWO_P[3]) - rhs.0[3],
            (self.0[4] + TWO_P[4]) - rhs.0[4],
        ])
    }

    /// Compute `self - rhs` as \\( a + 4p - b \\), without carrying.
    ///
    /// `rhs` may be the unreduced output of a basic addition (limbs below
    /// \\(2\^{52}\\)). The result has limbs below \\(2\^{54}\\) when `self`
    /// has limbs below \\(2\^{53}\\).
    pub fn sub_after_basic(&self, rhs: &FieldElement51) -> FieldElement51 {
        debug_assert!(rhs.0.iter().zip(FOUR_P.iter()).all(|(&limb, &bound)| limb <= bound));
        FieldElement51([
            (self.0[0] + FOUR_P[0]) - rhs.0[0],
            (self.0[1] + FOUR_P[1]) - rhs.0[1],
            (self.0[2] + FOUR_P[2]) - rhs.0[2],
            (self.0[3] + FOUR_P[3]) - rhs.0[3],
            (self.0[4] + FOUR_P[4]) - rhs.0[4],
        ])
    }

    /// Compute `self - rhs` as \\( a + 16p - b \\) and carry.
    ///
    /// Both inputs may have limbs up to \\(2\^{54}\\); the result is
    /// reduced. This is what the `-` operator does.
    pub fn sub_reduce(&self, rhs: &FieldElement51) -> FieldElement51 {
        // Adding 16p keeps every limb positive for subtrahends below
        // 2^54, and the sum stays below 2^56 so reduce() can carry it.
        FieldElement51::reduce([
            (self.0[0] + SIXTEEN_P[0]) - rhs.0[0],
            (self.0[1] + SIXTEEN_P[1]) - rhs.0[1],
            (self.0[2] + SIXTEEN_P[2]) - rhs.0[2],
            (self.0[3] + SIXTEEN_P[3]) - rhs.0[3],
            (self.0[4] + SIXTEEN_P[4]) - rhs.0[4],
        ])
    }

    /// Given 64-bit input limbs, reduce to enforce the bound 2^(51 + epsilon).
    #[inline(always)]
    fn reduce(mut limbs: [u64; 5]) -> FieldElement51 {
        // Since the input limbs are bounded by 2^64, the biggest
        // carry-out is bounded by 2^13.
        //
        // The biggest carry-in is c4 * 19, resulting in
        //
        // 2^51 + 19*2^13 < 2^51.0000000001
        //
        // Because we don't need to canonicalize, only to reduce the
        // limb sizes, it's OK to do a "weak reduction", where we
        // compute the carry-outs in parallel.

        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        FieldElement51(limbs)
    }

    /// Carry the five 128-bit column sums of a product (or square) into a
    /// reduced element.
    #[inline(always)]
    fn carry_wide(c0: u128, c1: &mut u128, c2: &mut u128, c3: &mut u128, c4: &mut u128) -> FieldElement51 {
        // Each c_i is below 2^115 for inputs below 2^54, so the carries
        // fit in 64 bits and are added back at u128 width.
        let mut out = [0u64; 5];

        *c1 += ((c0 >> 51) as u64) as u128;
        out[0] = (c0 as u64) & LOW_51_BIT_MASK;

        *c2 += ((*c1 >> 51) as u64) as u128;
        out[1] = (*c1 as u64) & LOW_51_BIT_MASK;

        *c3 += ((*c2 >> 51) as u64) as u128;
        out[2] = (*c2 as u64) & LOW_51_BIT_MASK;

        *c4 += ((*c3 >> 51) as u64) as u128;
        out[3] = (*c3 as u64) & LOW_51_BIT_MASK;

        let carry: u64 = (*c4 >> 51) as u64;
        out[4] = (*c4 as u64) & LOW_51_BIT_MASK;

        // carry * 19 fits comfortably in a u64.
        out[0] += carry * 19;

        // out[0] may now exceed 2^51; move its excess into out[1], which
        // is then at most 2^51 + 2^8.
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BIT_MASK;

        FieldElement51(out)
    }

    /// Load a `FieldElement51` from the low 255 bits of a 256-bit
    /// input.
    ///
    /// # Warning
    ///
    /// This function does not check that the input used the canonical
    /// representative.  It masks the high bit, but it will happily
    /// decode 2^255 - 18 to 1.  Applications that require a canonical
    /// encoding of every field element should decode, re-encode to
    /// the canonical encoding, and check that the input was
    /// canonical.
    #[rustfmt::skip] // keep alignment of bit shifts
    pub const fn from_bytes(bytes: &[u8; 32]) -> FieldElement51 {
        const fn load8_at(input: &[u8; 32], i: usize) -> u64 {
              (input[i] as u64)
            | ((input[i + 1] as u64) << 8)
            | ((input[i + 2] as u64) << 16)
            | ((input[i + 3] as u64) << 24)
            | ((input[i + 4] as u64) << 32)
            | ((input[i + 5] as u64) << 40)
            | ((input[i + 6] as u64) << 48)
            | ((input[i + 7] as u64) << 56)
        }

        // Limb i starts at bit 51*i = 8*byte + shift.
        FieldElement51(
        // load bits [  0, 64), no shift
        [  load8_at(bytes,  0)        & LOW_51_BIT_MASK
        // load bits [ 48,112), shift to [ 51,112)
        , (load8_at(bytes,  6) >>  3) & LOW_51_BIT_MASK
        // load bits [ 96,160), shift to [102,160)
        , (load8_at(bytes, 12) >>  6) & LOW_51_BIT_MASK
        // load bits [152,216), shift to [153,216)
        , (load8_at(bytes, 19) >>  1) & LOW_51_BIT_MASK
        // load bits [192,256), shift to [204,256)
        , (load8_at(bytes, 24) >> 12) & LOW_51_BIT_MASK
        ])
    }

    /// Serialize this `FieldElement51` to a 32-byte array.  The
    /// encoding is canonical.
    pub fn to_bytes(self) -> [u8; 32] {
        // Let h = limbs[0] + limbs[1]*2^51 + ... + limbs[4]*2^204.
        //
        // Write h = pq + r with 0 <= r < p.
        //
        // We want to compute r = h mod p.
        //
        // If h < 2*p = 2^256 - 38,
        // then q = 0 or 1,
        //
        // with q = 0 when h < p
        //  and q = 1 when h >= p.
        //
        // Notice that h >= p <==> h + 19 >= p + 19 <==> h + 19 >= 2^255.
        // Therefore q can be computed as the carry bit of h + 19.

        // First, reduce the limbs to ensure h < 2*p.
        let mut limbs = FieldElement51::reduce(self.0).0;

        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        // Now we can compute r as r = h - pq = r - (2^255-19)q = r + 19q - 2^255q

        limbs[0] += 19 * q;

        // Now carry the result to compute r + 19q ...
        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        // ... but instead of carrying (limbs[4] >> 51) = 2^255q
        // into another limb, discard it, subtracting the value
        limbs[4] &= LOW_51_BIT_MASK;

        // Now pack the 255 bits of r into 32 little-endian bytes. The
        // loop bounds are fixed, so this is data-independent.
        let mut s = [0u8; 32];
        let mut acc: u128 = 0;
        let mut acc_bits = 0;
        let mut index = 0;
        for limb in limbs.iter() {
            acc |= (*limb as u128) << acc_bits;
            acc_bits += 51;
            while acc_bits >= 8 {
                s[index] = acc as u8;
                acc >>= 8;
                acc_bits -= 8;
                index += 1;
            }
        }
        // The final 7 bits; bit 255 stays clear.
        s[31] = acc as u8;

        debug_assert!((s[31] & 0b1000_0000u8) == 0u8);

        s
    }

    /// Given `k > 0`, return `self^(2^k)`.
    #[rustfmt::skip] // keep alignment of c* calculations
    pub fn pow2k(&self, mut k: u32) -> FieldElement51 {

        debug_assert!( k > 0 );

        /// Multiply two 64-bit integers with 128 bits of output.
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 { (x as u128) * (y as u128) }

        let mut a: [u64; 5] = self.0;

        loop {
            // Precondition: assume input limbs a[i] are bounded as
            //
            // a[i] < 2^(51 + b)
            //
            // where b is a real parameter measuring the "bit excess" of the limbs.
            debug_assert!(a.iter().all(|&limb| limb < (1 << 54)));

            // Precomputation: 64-bit multiply by 19.
            let a3_19 = 19 * a[3];
            let a4_19 = 19 * a[4];

            // Multiply to get 128-bit coefficients of output; the symmetric
            // cross terms are computed once and doubled.
            let     c0: u128 = m(a[0],  a[0]) + 2*( m(a[1], a4_19) + m(a[2], a3_19) );
            let mut c1: u128 = m(a[3], a3_19) + 2*( m(a[0],  a[1]) + m(a[2], a4_19) );
            let mut c2: u128 = m(a[1],  a[1]) + 2*( m(a[0],  a[2]) + m(a[4], a3_19) );
            let mut c3: u128 = m(a[4], a4_19) + 2*( m(a[0],  a[3]) + m(a[1],  a[2]) );
            let mut c4: u128 = m(a[2],  a[2]) + 2*( m(a[0],  a[4]) + m(a[1],  a[3]) );

            a = FieldElement51::carry_wide(c0, &mut c1, &mut c2, &mut c3, &mut c4).0;

            k -= 1;
            if k == 0 {
                break;
            }
        }

        FieldElement51(a)
    }

    /// Returns the square of this field element.
    pub fn square(&self) -> FieldElement51 {
        self.pow2k(1)
    }

    /// Returns 2 times the square of this field element.
    pub fn square2(&self) -> FieldElement51 {
        let mut square = self.pow2k(1);
        for limb in square.0.iter_mut() {
            *limb *= 2;
        }

        square
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Every limb at its 51-bit maximum: 2^255 - 1, which is 18 mod p.
    const MAX_LIMBS: FieldElement51 = FieldElement51([LOW_51_BIT_MASK; 5]);

    /// p - 1 = 2^255 - 20, the largest canonical element.
    const P_MINUS_ONE: FieldElement51 = FieldElement51::MINUS_ONE;

    fn small(n: u8) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[0] = n;
        bytes
    }

    /// 18 encodes as 0x12.
    const MAX_LIMBS_RAW: [u8; 32] = [
        0x12, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];

    /// (2 * 18)^2 = 1296.
    const MAX_LIMBS_2_SQUARED_RAW: [u8; 32] = [
        0x10, 0x05, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];

    /// (3 * 18)^2 = 2916.
    const MAX_LIMBS_3_SQUARED_RAW: [u8; 32] = [
        0x64, 0x0b, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];

    /// 18^2 = 324.
    const MAX_LIMBS_SQUARED_RAW: [u8; 32] = [
        0x44, 0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];

    #[test]
    fn contract_max_limbs() {
        assert_eq!(MAX_LIMBS.to_bytes(), MAX_LIMBS_RAW);
    }

    #[test]
    fn adds_keep_mul_headroom() {
        // a = max + max
        let a = &MAX_LIMBS + &MAX_LIMBS;
        assert_eq!((&a * &a).to_bytes(), MAX_LIMBS_2_SQUARED_RAW);
        assert_eq!(a.square().to_bytes(), MAX_LIMBS_2_SQUARED_RAW);

        // b = max + max + max
        let b = a.add_after_basic(&MAX_LIMBS);
        assert_eq!((&b * &b).to_bytes(), MAX_LIMBS_3_SQUARED_RAW);
        assert_eq!(b.square().to_bytes(), MAX_LIMBS_3_SQUARED_RAW);

        assert_eq!(MAX_LIMBS.add_reduce(&MAX_LIMBS).to_bytes(), small(36));
    }

    #[test]
    fn subs_keep_mul_headroom() {
        // a = max - 0, which expands to 2p + max
        let a = MAX_LIMBS.sub_basic(&FieldElement51::ZERO);
        assert_eq!(a.to_bytes(), MAX_LIMBS_RAW);
        assert_eq!((&a * &a).to_bytes(), MAX_LIMBS_SQUARED_RAW);
        assert_eq!(a.square().to_bytes(), MAX_LIMBS_SQUARED_RAW);

        // b = (max - 0) - 0, which expands to 4p + 2p + max
        let b = a.sub_after_basic(&FieldElement51::ZERO);
        assert_eq!(b.to_bytes(), MAX_LIMBS_RAW);
        assert_eq!((&b * &b).to_bytes(), MAX_LIMBS_SQUARED_RAW);
        assert_eq!(b.square().to_bytes(), MAX_LIMBS_SQUARED_RAW);

        let c = &b - &FieldElement51::ZERO;
        assert_eq!(c.to_bytes(), MAX_LIMBS_RAW);
    }

    #[test]
    fn p_minus_one_chain() {
        let mut p_minus_one_raw = [0xffu8; 32];
        p_minus_one_raw[0] = 0xec;
        p_minus_one_raw[31] = 0x7f;
        assert_eq!(P_MINUS_ONE.to_bytes(), p_minus_one_raw);

        let a = &P_MINUS_ONE + &P_MINUS_ONE;
        assert_eq!(a.square().to_bytes(), small(4));
        assert_eq!((&a * &a).to_bytes(), small(4));

        let b = a.add_after_basic(&P_MINUS_ONE);
        assert_eq!(b.square().to_bytes(), small(9));
        assert_eq!((&b * &b).to_bytes(), small(9));

        let c = P_MINUS_ONE.sub_basic(&FieldElement51::ZERO);
        assert_eq!(c.to_bytes(), p_minus_one_raw);
        assert_eq!(c.square().to_bytes(), small(1));

        let d = c.sub_after_basic(&FieldElement51::ZERO);
        assert_eq!(d.to_bytes(), p_minus_one_raw);
        assert_eq!((&d * &d).to_bytes(), small(1));
    }

    #[test]
    fn sub_variants_agree() {
        let a = FieldElement51::from_bytes(&[0x5au8; 32]);
        let b = FieldElement51::from_bytes(&[0xc3u8; 32]);
        let expected = (&a - &b).to_bytes();
        assert_eq!(a.sub_basic(&b).to_bytes(), expected);
        assert_eq!(a.sub_after_basic(&b).to_bytes(), expected);
        assert_eq!(a.sub_reduce(&b).to_bytes(), expected);

        // b - b vanishes regardless of the path taken.
        assert_eq!(b.sub_basic(&b).to_bytes(), [0u8; 32]);
        assert_eq!((&b + &b).to_bytes(), b.add_reduce(&b).to_bytes());
    }

    #[test]
    fn sub_bounds_are_per_limb() {
        // 2p and 4p are the largest subtrahends the basic variants take;
        // their upper limbs sit above limb 0.
        let a = FieldElement51::from_bytes(&[0x5au8; 32]);
        let two_p = FieldElement51(TWO_P);
        let four_p = FieldElement51(FOUR_P);
        assert!(TWO_P[1] > TWO_P[0] && FOUR_P[1] > FOUR_P[0]);

        assert_eq!(a.sub_basic(&two_p).to_bytes(), a.to_bytes());
        assert_eq!(a.sub_basic(&two_p).0, a.0);
        let b = a.sub_basic(&FieldElement51::ZERO);
        assert_eq!(b.sub_after_basic(&four_p).to_bytes(), a.to_bytes());
        assert_eq!(b.sub_after_basic(&four_p).0, b.0);
    }

    #[test]
    fn negation_is_additive_inverse() {
        let a = FieldElement51::from_bytes(&[0x37u8; 32]);
        assert_eq!((&a + &(-&a)).to_bytes(), [0u8; 32]);
        assert_eq!((-&FieldElement51::ONE).to_bytes(), P_MINUS_ONE.to_bytes());
    }

    #[test]
    fn square2_is_double_square() {
        let a = FieldElement51::from_bytes(&[0x21u8; 32]);
        let sq = a.square();
        assert_eq!(a.square2().to_bytes(), (&sq + &sq).to_bytes());
    }

    #[test]
    fn pow2k_matches_repeated_squaring() {
        let a = FieldElement51::from_bytes(&[0x9eu8; 32]);
        let mut expected = a;
        for _ in 0..5 {
            expected = expected.square();
        }
        assert_eq!(a.pow2k(5).to_bytes(), expected.to_bytes());
    }

    #[test]
    fn conditional_select_picks_by_choice() {
        let a = FieldElement51::from_bytes(&small(3));
        let b = FieldElement51::from_bytes(&small(5));
        let picked = FieldElement51::conditional_select(&a, &b, Choice::from(1));
        assert_eq!(picked.to_bytes(), small(5));
        let kept = FieldElement51::conditional_select(&a, &b, Choice::from(0));
        assert_eq!(kept.to_bytes(), small(3));
    }
}
