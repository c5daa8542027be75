// -*- mode: rust; -*-
//
// This file is part of ed25519-verifier.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Errors which may occur when parsing keys and/or signatures to or from wire formats,
//! or when a batch verification call is malformed.

// rustc seems to think the typenames in match statements (e.g. in
// Display) should be snake cased, for some reason.
#![allow(non_snake_case)]

use thiserror::Error;

/// Internal errors.  Most application-level developers will likely not
/// need to pay any attention to these.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq, Hash)]
#[cfg_attr(not(feature = "batch"), allow(dead_code))]
pub(crate) enum InternalError {
    #[error("Cannot decompress Edwards point")]
    PointDecompression,

    #[error("Cannot use scalar which is not reduced modulo the group order")]
    ScalarFormat,

    /// An error in the length of bytes handed to a constructor.
    ///
    /// To use this, pass a string specifying the `name` of the type which is
    /// returning the error, and the `length` in bytes which its constructor
    /// expects.
    #[error("{name} must be {length} bytes in length")]
    BytesLength { name: &'static str, length: usize },

    /// The verification equation wasn't satisfied, or the selected policy
    /// refused one of the points.
    #[error("Verification equation was not satisfied")]
    Verify,

    /// Two or more arrays handed to a batch call did not have the same length.
    #[error(
        "Arrays must be the same length: {name_a} has length {length_a}, \
         {name_b} has length {length_b}, {name_c} has length {length_c}."
    )]
    ArrayLength {
        name_a: &'static str,
        length_a: usize,
        name_b: &'static str,
        length_b: usize,
        name_c: &'static str,
        length_c: usize,
    },

    /// The caller's randomness source could not supply blinding factors.
    #[error("Randomness source failed while drawing batch blinding factors")]
    Rng,
}

/// Errors which may occur while processing signatures and verifying keys.
///
/// This error may arise due to:
///
/// * Being given bytes with a length different to what was expected.
///
/// * A problem decompressing `R`, a curve point, in the `Signature`, or the
///   curve point for a `VerifyingKey`.
///
/// * A problem with the format of `S`, a scalar, in the `Signature`.  This
///   is raised if `S` is not below the group order \\( \ell \\).
///
/// * Failure of a signature to satisfy the verification equation.
///
/// * Mismatched input lengths, or an exhausted randomness source, in a
///   batch verification call.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq, Hash)]
#[error("{0}")]
pub struct SignatureError(#[source] pub(crate) InternalError);

impl From<InternalError> for SignatureError {
    fn from(err: InternalError) -> SignatureError {
        SignatureError(err)
    }
}
