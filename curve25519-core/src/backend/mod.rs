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

//! Arithmetic backends.
//!
//! Only the portable 64-bit serial backend is provided. Its field and
//! scalar types are re-exported through [`crate::field`] and
//! [`crate::scalar`]; point-level algorithms live under
//! [`serial::scalar_mul`].

pub(crate) mod serial;
