// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroize;

/// Label of an encryption domain, typically a session: ciphertexts are
/// rekeyed between encryption contexts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncryptionContext(String);

/// Label of a pseudonymization domain: pseudonyms are reshuffled between
/// pseudonymization contexts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PseudonymizationContext(String);

macro_rules! impl_context {
    ($ty:ident) => {
        impl $ty {
            /// Creates a context from its label
            pub fn new(label: impl Into<String>) -> Self {
                Self(label.into())
            }

            /// Gets the label
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $ty {
            fn from(label: &str) -> Self {
                Self::new(label)
            }
        }

        impl From<String> for $ty {
            fn from(label: String) -> Self {
                Self(label)
            }
        }

        impl AsRef<[u8]> for $ty {
            fn as_ref(&self) -> &[u8] {
                self.0.as_bytes()
            }
        }
    };
}

impl_context!(EncryptionContext);
impl_context!(PseudonymizationContext);

/// Secret keying the factors of every [`EncryptionContext`]
///
/// ## Safety
///
/// Call `zeroize` before the secret goes out of scope so it does not linger
/// in memory.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct EncryptionSecret(Box<[u8]>);

/// Secret keying the factors of every [`PseudonymizationContext`]
///
/// ## Safety
///
/// Call `zeroize` before the secret goes out of scope so it does not linger
/// in memory.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct PseudonymizationSecret(Box<[u8]>);

macro_rules! impl_secret {
    ($ty:ident) => {
        impl $ty {
            /// Creates a secret from arbitrary bytes
            pub fn new(secret: impl Into<Vec<u8>>) -> Self {
                Self(secret.into().into_boxed_slice())
            }
        }

        impl From<&str> for $ty {
            fn from(secret: &str) -> Self {
                Self::new(secret.as_bytes())
            }
        }

        impl From<&[u8]> for $ty {
            fn from(secret: &[u8]) -> Self {
                Self::new(secret)
            }
        }

        impl From<Vec<u8>> for $ty {
            fn from(secret: Vec<u8>) -> Self {
                Self(secret.into_boxed_slice())
            }
        }

        impl AsRef<[u8]> for $ty {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

impl_secret!(EncryptionSecret);
impl_secret!(PseudonymizationSecret);
