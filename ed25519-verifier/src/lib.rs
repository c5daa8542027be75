// -*- mode: rust; -*-
//
// This file is part of ed25519-verifier.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Ed25519 signature verification with selectable validity rules.
//!
//! Ed25519 implementations disagree about a small set of edge cases:
//! small-order public keys and commitments, encodings which decode but are
//! not canonical, and whether the verification equation is multiplied by
//! the cofactor.  This crate makes each of those choices explicit in a
//! [`Policy`], and guarantees that batch verification agrees with single
//! verification under the same policy, signature by signature.
//!
//! # Example
//!
//! ```
//! use ed25519_verifier::{verify, Options, Signature, VerifyingKey};
//!
//! // RFC 8032, section 7.1, TEST 1.
//! let public_key = hex::decode(
//!     "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
//! ).unwrap();
//! let signature = hex::decode(
//!     "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
//!      5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b",
//! ).unwrap();
//!
//! assert!(verify(&public_key, b"", &signature, &Options::default()));
//!
//! let key = VerifyingKey::try_from(&public_key[..]).unwrap();
//! let signature = Signature::from_slice(&signature).unwrap();
//! assert!(key.verify_strict(b"", &signature));
//! assert!(!key.verify(b"tampered", &signature));
//! ```
//!
//! # Policies
//!
//! * [`Policy::DEFAULT`] checks the cofactored equation and refuses
//!   small-order or non-canonically encoded public keys.
//! * [`Policy::ZIP215`], selected with `Options { zip215_verify: true }`,
//!   checks only the cofactored equation.
//! * [`Policy::STRICT`] checks the cofactorless equation and refuses
//!   small-order and non-canonical `A` and `R`.
//!
//! Every policy refuses a response scalar `S` which is not reduced modulo
//! the group order, and any point encoding whose \\(y\\)-coordinate is not
//! reduced modulo \\(p\\).

#![no_std]
#![warn(future_incompatible, rust_2018_idioms)]
#![deny(missing_docs)] // refuse to compile if documentation is missing
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "batch")]
mod batch;
mod constants;
mod errors;
mod policy;
mod signature;
mod verifying;

#[cfg(feature = "batch")]
pub use crate::batch::*;
pub use crate::constants::*;
pub use crate::errors::*;
pub use crate::policy::*;
pub use crate::signature::*;
pub use crate::verifying::*;
