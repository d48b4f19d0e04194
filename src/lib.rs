// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Polymorphic encryption and pseudonymization over the JubJub curve.
//!
//! Pseudonyms and data points are ElGamal-encrypted once, under a session
//! key derived from a global key pair, and then moved between sessions
//! (rekeying) and between pseudonymization contexts (reshuffling) without
//! ever being decrypted.

#![deny(missing_docs)]
#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

pub mod arithmetic;
pub mod data;
/// ElGamal encryption and its transformations
pub mod encryption;
mod error;
/// Global and session keys, and the factors derived from contexts
pub mod keys;
pub mod transcryption;

#[cfg(feature = "serde")]
mod serde_support;

pub use arithmetic::{GroupElement, ScalarCanBeZero, ScalarNonZero, G};
pub use data::{
    decrypt, decrypt_data, decrypt_pseudonym, encrypt, encrypt_data,
    encrypt_pseudonym, rerandomize_data, rerandomize_pseudonym, DataPoint,
    Encryptable, Encrypted, EncryptedDataPoint, EncryptedPseudonym,
    Pseudonym,
};
pub use encryption::elgamal::ElGamal;
pub use error::Error;
pub use keys::context::{
    EncryptionContext, EncryptionSecret, PseudonymizationContext,
    PseudonymizationSecret,
};
pub use keys::factors::{RekeyFactor, ReshuffleFactor};
pub use keys::global::{
    make_global_keys, GlobalKeyPair, GlobalPublicKey, GlobalSecretKey,
};
pub use keys::session::{
    make_session_keys, SessionKeyPair, SessionPublicKey, SessionSecretKey,
};
pub use keys::{PublicKey, SecretKey};
pub use transcryption::{
    pseudonymize, rekey_data, rerandomize_and_pseudonymize,
    PseudonymizationInfo, RekeyInfo,
};
