// -*- mode: rust; -*-
//
// This file is part of curve25519-core.
// Copyright (c) 2016-2021 isis agora lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Internal macros.
//!
//! Every binary operator is implemented once on references, `&A op &B`;
//! these macros derive the owned and mixed forms from that one impl.

/// Define the owned and half-borrowed variants of a binary operator
/// `$trait::$method` from the `&LHS op &RHS` implementation.
macro_rules! define_binop_variants {
    ($trait:ident, $method:ident, LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        impl<'b> $trait<&'b $rhs> for $lhs {
            type Output = $out;
            fn $method(self, rhs: &'b $rhs) -> $out {
                $trait::$method(&self, rhs)
            }
        }

        impl<'a> $trait<$rhs> for &'a $lhs {
            type Output = $out;
            fn $method(self, rhs: $rhs) -> $out {
                $trait::$method(self, &rhs)
            }
        }

        impl $trait<$rhs> for $lhs {
            type Output = $out;
            fn $method(self, rhs: $rhs) -> $out {
                $trait::$method(&self, &rhs)
            }
        }
    };
}

/// Define the owned-RHS variant of a compound assignment operator from the
/// `op= &RHS` implementation.
macro_rules! define_assign_variants {
    ($trait:ident, $method:ident, LHS = $lhs:ty, RHS = $rhs:ty) => {
        impl $trait<$rhs> for $lhs {
            fn $method(&mut self, rhs: $rhs) {
                $trait::$method(self, &rhs)
            }
        }
    };
}

macro_rules! define_add_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        define_binop_variants!(Add, add, LHS = $lhs, RHS = $rhs, Output = $out);
    };
}

macro_rules! define_add_assign_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty) => {
        define_assign_variants!(AddAssign, add_assign, LHS = $lhs, RHS = $rhs);
    };
}

macro_rules! define_sub_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        define_binop_variants!(Sub, sub, LHS = $lhs, RHS = $rhs, Output = $out);
    };
}

macro_rules! define_sub_assign_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty) => {
        define_assign_variants!(SubAssign, sub_assign, LHS = $lhs, RHS = $rhs);
    };
}

macro_rules! define_mul_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        define_binop_variants!(Mul, mul, LHS = $lhs, RHS = $rhs, Output = $out);
    };
}

macro_rules! define_mul_assign_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty) => {
        define_assign_variants!(MulAssign, mul_assign, LHS = $lhs, RHS = $rhs);
    };
}
