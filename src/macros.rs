// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

/// Implements a binary operator for every combination of owned and borrowed
/// operands, given the body for the borrowed-borrowed case.
macro_rules! impl_binop {
    (
        $op:ident, $method:ident,
        $lhs:ty, $rhs:ty => $out:ty,
        |$a:ident, $b:ident| $body:expr
    ) => {
        impl<'a, 'b> core::ops::$op<&'b $rhs> for &'a $lhs {
            type Output = $out;

            fn $method(self, rhs: &'b $rhs) -> $out {
                let $a = self;
                let $b = rhs;
                $body
            }
        }

        impl<'b> core::ops::$op<&'b $rhs> for $lhs {
            type Output = $out;

            fn $method(self, rhs: &'b $rhs) -> $out {
                core::ops::$op::$method(&self, rhs)
            }
        }

        impl<'a> core::ops::$op<$rhs> for &'a $lhs {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> $out {
                core::ops::$op::$method(self, &rhs)
            }
        }

        impl core::ops::$op<$rhs> for $lhs {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> $out {
                core::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

/// Adds lowercase hex encoding and decoding on top of a `Serializable<N>`
/// implementation whose error is the crate's [`Error`](crate::Error).
macro_rules! impl_hex {
    ($ty:ty, $n:expr) => {
        impl $ty {
            /// Encodes into a lowercase hex string
            pub fn encode_as_hex(&self) -> alloc::string::String {
                hex::encode(<$ty as dusk_bytes::Serializable<$n>>::to_bytes(
                    self,
                ))
            }

            /// Decodes from a hex string of the canonical encoding
            pub fn decode_from_hex(s: &str) -> Result<Self, crate::Error> {
                let bytes = crate::error::decode_hex::<$n>(s)?;
                <$ty as dusk_bytes::Serializable<$n>>::from_bytes(&bytes)
            }
        }
    };
}
