// -*- mode: rust; -*-
//
// This file is part of ed25519-verifier.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Common constants such as buffer sizes for keys and signatures.

/// The length of an ed25519 `Signature`, in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// The length of an ed25519 `VerifyingKey`, in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// The length of the `R` half of a `Signature`, in bytes.
pub(crate) const SIGNATURE_R_LENGTH: usize = 32;
