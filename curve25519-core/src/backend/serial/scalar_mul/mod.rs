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

//! Implementations of various scalar multiplication algorithms.
//!
//! All of these implementations use serial code for field arithmetic
//! with the multi-model strategy described in the `curve_models`
//! module.

pub(crate) mod variable_base;

pub(crate) mod vartime_double_base;

#[cfg(feature = "alloc")]
pub(crate) mod straus;
