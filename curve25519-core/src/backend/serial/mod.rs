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

//! Serial implementations of field, scalar, point arithmetic.
//!
//! The `u64` submodule provides field and scalar arithmetic on 64-bit
//! limbs with 128-bit products. `curve_models` implements the Edwards
//! point representations and their conversions, and `scalar_mul`
//! implements the scalar multiplication algorithms on top of them.

pub(crate) mod u64;

pub(crate) mod curve_models;

pub(crate) mod scalar_mul;
