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

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Arithmetic over Curve25519 in its twisted Edwards form, restricted to
//! what an Ed25519 verifier needs.
//!
//! The crate provides:
//!
//! * [`field::FieldElement`], an element of \\( \mathbb F\_{2\^{255}-19} \\)
//!   held in a redundant radix-\\(2\^{51}\\) representation, with the
//!   "basic" and "after basic" addition and subtraction variants whose
//!   magnitude bounds allow chaining several operations before a carry;
//! * [`scalar::Scalar`], integers modulo the basepoint order \\( \ell \\),
//!   including canonicity checks for untrusted encodings;
//! * [`edwards::EdwardsPoint`] and [`edwards::CompressedEdwardsY`], with
//!   complete addition formulas, decoding that keeps small-order points
//!   representable, constant-time scalar multiplication, and
//!   variable-time double-base and multiscalar multiplication.
//!
//! Nothing in this crate decides whether a signature is valid; that policy
//! lives with the caller.

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(feature = "alloc")]
#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "digest")]
pub use digest;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

//------------------------------------------------------------------------
// curve25519-core public modules
//------------------------------------------------------------------------

// Arithmetic on the field of integers modulo p = 2^255 - 19
pub mod field;

// Scalar arithmetic mod l = 2^252 + ..., the order of the basepoint
pub mod scalar;

// Point operations on the Edwards form of Curve25519
pub mod edwards;

// Useful constants, like the Ed25519 basepoint
pub mod constants;

// External (and internal) traits.
pub mod traits;

//------------------------------------------------------------------------
// curve25519-core internal modules
//------------------------------------------------------------------------

// Finite field arithmetic, curve models and scalar multiplication
pub(crate) mod backend;

// Generic code for window lookups
pub(crate) mod window;

pub use crate::{edwards::EdwardsPoint, field::FieldElement, scalar::Scalar};
