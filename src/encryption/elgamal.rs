// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! This module implements the ElGamal asymmetric cipher over the group
//! elements of [`crate::arithmetic`].
//!
//! Reference: https://link.springer.com/chapter/10.1007/3-540-39568-7_2

use dusk_bytes::{DeserializableSlice, Serializable};
use rand::{CryptoRng, RngCore};

use crate::arithmetic::{GroupElement, ScalarNonZero, G};
use crate::Error;

/// Size of an encoded [`ElGamal`] ciphertext
pub const ELGAMAL_LENGTH: usize = 64;

/// An ElGamal ciphertext `(b, c) = (r·G, m + r·Y)` of a single group
/// element `m` under public key `Y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElGamal {
    /// The ephemeral part `r·G`
    pub b: GroupElement,
    /// The masked message `m + r·Y`
    pub c: GroupElement,
}

impl Serializable<ELGAMAL_LENGTH> for ElGamal {
    type Error = Error;

    fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[..32].copy_from_slice(&self.b.to_bytes());
        bytes[32..].copy_from_slice(&self.c.to_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self, Self::Error> {
        let b = GroupElement::from_slice(&bytes[..32])?;
        let c = GroupElement::from_slice(&bytes[32..])?;

        Ok(Self { b, c })
    }
}

impl_hex!(ElGamal, ELGAMAL_LENGTH);

/// Encrypts a message under a public key with a fresh random nonzero `r`,
/// returning `(r·G, msg + r·public_key)`
pub fn encrypt<R: RngCore + CryptoRng>(
    msg: &GroupElement,
    public_key: &GroupElement,
    rng: &mut R,
) -> ElGamal {
    let r = ScalarNonZero::random(rng);

    ElGamal {
        b: r * G,
        c: msg + r * public_key,
    }
}

/// Decrypts a ciphertext with the secret key, returning `c - secret_key·b`
///
/// A ciphertext that was not encrypted for `secret_key` decrypts to an
/// unrelated element, which may be the identity.
pub fn decrypt(
    ciphertext: &ElGamal,
    secret_key: &ScalarNonZero,
) -> GroupElement {
    ciphertext.c - secret_key * ciphertext.b
}
