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

//! Arithmetic mod \\(\ell = 2\^{252} + 27742317777372353535851937790883648493\\)
//! with five \\(52\\)-bit unsigned limbs.
//!
//! \\(51\\)-bit limbs would cover the desired bit range (\\(253\\)
//! bits), but isn't large enough to reduce a \\(512\\)-bit number with
//! Montgomery multiplication, so \\(52\\) bits is used instead.  The
//! largest column in a \\(5\times 5\\) product of \\(52\\)-bit limbs is
//! \\(5 \cdot (2\^{52}-1)\^2 < 2\^{107}\\), which leaves ample room in a
//! `u128` for the Montgomery reduction's additions.

use core::fmt::Debug;
use core::ops::{Index, IndexMut};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use super::constants;

const LOW_52_BIT_MASK: u64 = (1u64 << 52) - 1;

/// The `Scalar52` struct represents an element in
/// \\(\mathbb Z / \ell \mathbb Z\\) as 5 \\(52\\)-bit limbs.
#[derive(Copy, Clone)]
pub struct Scalar52(pub [u64; 5]);

impl Debug for Scalar52 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar52: {:?}", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar52 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Index<usize> for Scalar52 {
    type Output = u64;
    fn index(&self, index: usize) -> &u64 {
        &(self.0[index])
    }
}

impl IndexMut<usize> for Scalar52 {
    fn index_mut(&mut self, index: usize) -> &mut u64 {
        &mut (self.0[index])
    }
}

/// u64 * u64 = u128 multiply helper
#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

/// Read `N` little-endian 64-bit words.
#[inline(always)]
fn load_words<const N: usize>(bytes: &[u8]) -> [u64; N] {
    debug_assert_eq!(bytes.len(), N * 8);
    let mut words = [0u64; N];
    for (i, word) in words.iter_mut().enumerate() {
        for j in 0..8 {
            *word |= (bytes[i * 8 + j] as u64) << (j * 8);
        }
    }
    words
}

impl Scalar52 {
    /// The scalar \\( 0 \\).
    pub const ZERO: Scalar52 = Scalar52([0, 0, 0, 0, 0]);

    /// Unpack a 32 byte / 256 bit scalar into 5 52-bit limbs.
    #[rustfmt::skip] // keep alignment of s[*] calculations
    pub fn from_bytes(bytes: &[u8; 32]) -> Scalar52 {
        let words: [u64; 4] = load_words(&bytes[..]);

        let top_mask = (1u64 << 48) - 1;

        Scalar52([
              words[0]                             & LOW_52_BIT_MASK,
            ((words[0] >> 52) | (words[1] << 12)) & LOW_52_BIT_MASK,
            ((words[1] >> 40) | (words[2] << 24)) & LOW_52_BIT_MASK,
            ((words[2] >> 28) | (words[3] << 36)) & LOW_52_BIT_MASK,
             (words[3] >> 16)                     & top_mask,
        ])
    }

    /// Reduce a 64 byte / 512 bit scalar mod l
    #[rustfmt::skip] // keep alignment of lo[*] and hi[*] calculations
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Scalar52 {
        let words: [u64; 8] = load_words(&bytes[..]);

        let lo = Scalar52([
              words[0]                             & LOW_52_BIT_MASK,
            ((words[0] >> 52) | (words[1] << 12)) & LOW_52_BIT_MASK,
            ((words[1] >> 40) | (words[2] << 24)) & LOW_52_BIT_MASK,
            ((words[2] >> 28) | (words[3] << 36)) & LOW_52_BIT_MASK,
            ((words[3] >> 16) | (words[4] << 48)) & LOW_52_BIT_MASK,
        ]);
        let hi = Scalar52([
             (words[4] >>  4)                     & LOW_52_BIT_MASK,
            ((words[4] >> 56) | (words[5] <<  8)) & LOW_52_BIT_MASK,
            ((words[5] >> 44) | (words[6] << 20)) & LOW_52_BIT_MASK,
            ((words[6] >> 32) | (words[7] << 32)) & LOW_52_BIT_MASK,
              words[7] >> 20,
        ]);

        // The input is lo + hi * 2^260. Multiplying lo by R and hi by R^2
        // in Montgomery form divides each by R once more, leaving
        // lo + hi * R = the input, mod l.
        let lo = Scalar52::montgomery_mul(&lo, &constants::R);
        let hi = Scalar52::montgomery_mul(&hi, &constants::RR);

        Scalar52::add(&hi, &lo)
    }

    /// Pack the limbs of this `Scalar52` into 32 bytes.
    pub fn as_bytes(&self) -> [u8; 32] {
        let mut s = [0u8; 32];
        let mut acc: u128 = 0;
        let mut acc_bits = 0;
        let mut index = 0;
        for limb in self.0.iter() {
            acc |= (*limb as u128) << acc_bits;
            acc_bits += 52;
            while acc_bits >= 8 && index < 32 {
                s[index] = acc as u8;
                acc >>= 8;
                acc_bits -= 8;
                index += 1;
            }
        }
        s
    }

    /// Compute `a + b` (mod l)
    pub fn add(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let mut sum = Scalar52::ZERO;

        // a + b
        let mut carry: u64 = 0;
        for i in 0..5 {
            carry = a[i] + b[i] + (carry >> 52);
            sum[i] = carry & LOW_52_BIT_MASK;
        }

        // subtract l if the sum is >= l
        Scalar52::sub(&sum, &constants::L)
    }

    /// Compute `a - b` (mod l)
    pub fn sub(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let mut difference = Scalar52::ZERO;

        // a - b
        let mut borrow: u64 = 0;
        for i in 0..5 {
            borrow = a[i].wrapping_sub(b[i] + (borrow >> 63));
            difference[i] = borrow & LOW_52_BIT_MASK;
        }

        // conditionally add l if the difference is negative
        let underflow_mask = ((borrow >> 63) ^ 1).wrapping_sub(1);
        let mut carry: u64 = 0;
        for i in 0..5 {
            carry = (carry >> 52) + difference[i] + (constants::L[i] & underflow_mask);
            difference[i] = carry & LOW_52_BIT_MASK;
        }

        difference
    }

    /// Compute `a * b`
    #[inline(always)]
    #[rustfmt::skip] // keep alignment of z[*] calculations
    pub(crate) fn mul_internal(a: &Scalar52, b: &Scalar52) -> [u128; 9] {
        let mut z = [0u128; 9];

        z[0] = m(a[0], b[0]);
        z[1] = m(a[0], b[1]) + m(a[1], b[0]);
        z[2] = m(a[0], b[2]) + m(a[1], b[1]) + m(a[2], b[0]);
        z[3] = m(a[0], b[3]) + m(a[1], b[2]) + m(a[2], b[1]) + m(a[3], b[0]);
        z[4] = m(a[0], b[4]) + m(a[1], b[3]) + m(a[2], b[2]) + m(a[3], b[1]) + m(a[4], b[0]);
        z[5] =                 m(a[1], b[4]) + m(a[2], b[3]) + m(a[3], b[2]) + m(a[4], b[1]);
        z[6] =                                 m(a[2], b[4]) + m(a[3], b[3]) + m(a[4], b[2]);
        z[7] =                                                 m(a[3], b[4]) + m(a[4], b[3]);
        z[8] =                                                                 m(a[4], b[4]);

        z
    }

    /// Compute `limbs/R` (mod l), where R is the Montgomery modulus 2^260
    #[inline(always)]
    #[rustfmt::skip] // keep alignment of n* and r* calculations
    pub(crate) fn montgomery_reduce(limbs: &[u128; 9]) -> Scalar52 {

        /// Pick the multiple n of l that clears the low 52 bits of `sum`.
        #[inline(always)]
        fn part1(sum: u128) -> (u128, u64) {
            let p = (sum as u64).wrapping_mul(constants::LFACTOR) & LOW_52_BIT_MASK;
            ((sum + m(p, constants::L[0])) >> 52, p)
        }

        /// Split off a finished 52-bit limb of the quotient.
        #[inline(always)]
        fn part2(sum: u128) -> (u128, u64) {
            let w = (sum as u64) & LOW_52_BIT_MASK;
            (sum >> 52, w)
        }

        // note: l[3] is zero, so its multiples can be skipped
        let l = &constants::L;

        // the first half computes the Montgomery adjustment factor n, and begins adding n*l to make limbs divisible by R
        let (carry, n0) = part1(        limbs[0]);
        let (carry, n1) = part1(carry + limbs[1] + m(n0, l[1]));
        let (carry, n2) = part1(carry + limbs[2] + m(n0, l[2]) + m(n1, l[1]));
        let (carry, n3) = part1(carry + limbs[3]               + m(n1, l[2]) + m(n2, l[1]));
        let (carry, n4) = part1(carry + limbs[4] + m(n0, l[4])               + m(n2, l[2]) + m(n3, l[1]));

        // limbs is divisible by R now, so we can divide by R by simply storing the upper half as the result
        let (carry, r0) = part2(carry + limbs[5]               + m(n1, l[4])               + m(n3, l[2]) + m(n4, l[1]));
        let (carry, r1) = part2(carry + limbs[6]                             + m(n2, l[4])               + m(n4, l[2]));
        let (carry, r2) = part2(carry + limbs[7]                                           + m(n3, l[4])              );
        let (carry, r3) = part2(carry + limbs[8]                                                         + m(n4, l[4]));
        let         r4 = carry as u64;

        // result may be >= l, so attempt to subtract l
        Scalar52::sub(&Scalar52([r0, r1, r2, r3, r4]), l)
    }

    /// Compute `a * b` (mod l)
    #[inline(never)]
    pub fn mul(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let ab = Scalar52::montgomery_reduce(&Scalar52::mul_internal(a, b));
        Scalar52::montgomery_reduce(&Scalar52::mul_internal(&ab, &constants::RR))
    }

    /// Compute `(a * b) / R` (mod l), where R is the Montgomery modulus 2^260
    #[inline(never)]
    pub fn montgomery_mul(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        Scalar52::montgomery_reduce(&Scalar52::mul_internal(a, b))
    }

    /// Puts a Scalar52 in to Montgomery form, i.e. computes `a*R (mod l)`
    #[inline(never)]
    pub fn as_montgomery(&self) -> Scalar52 {
        Scalar52::montgomery_mul(self, &constants::RR)
    }

    /// Takes a Scalar52 out of Montgomery form, i.e. computes `a/R (mod l)`
    #[allow(clippy::wrong_self_convention)]
    #[inline(never)]
    pub fn from_montgomery(&self) -> Scalar52 {
        let mut limbs = [0u128; 9];
        for (wide, limb) in limbs.iter_mut().zip(self.0.iter()) {
            *wide = *limb as u128;
        }
        Scalar52::montgomery_reduce(&limbs)
    }
}
