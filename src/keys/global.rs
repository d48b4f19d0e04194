// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use dusk_bytes::Serializable;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::arithmetic::{GroupElement, ScalarNonZero, G};
use crate::keys::{PublicKey, SecretKey};
use crate::Error;

/// Public key of the whole system, `y·G` for the global secret `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalPublicKey(pub(crate) GroupElement);

/// Secret key of the whole system, from which every session secret is
/// derived
///
/// ## Safety
///
/// The scalar is wiped from memory when the key is dropped. A key is never
/// observable in its wiped state.
#[derive(Debug, Clone, Eq)]
pub struct GlobalSecretKey(pub(crate) ScalarNonZero);

/// A freshly generated global key pair
#[derive(Debug, Clone)]
pub struct GlobalKeyPair {
    /// The public key `secret·G`
    pub public: GlobalPublicKey,
    /// The secret key
    pub secret: GlobalSecretKey,
}

/// Generates a new global key pair from a random number generator.
///
/// Run once, when setting up the system.
pub fn make_global_keys<R: RngCore + CryptoRng>(rng: &mut R) -> GlobalKeyPair {
    let secret = GlobalSecretKey(ScalarNonZero::random(rng));
    let public = GlobalPublicKey::from(&secret);

    GlobalKeyPair { public, secret }
}

impl From<&GlobalSecretKey> for GlobalPublicKey {
    fn from(sk: &GlobalSecretKey) -> Self {
        Self(sk.0 * G)
    }
}

impl PublicKey for GlobalPublicKey {
    fn value(&self) -> &GroupElement {
        &self.0
    }
}

impl SecretKey for GlobalSecretKey {
    fn value(&self) -> &ScalarNonZero {
        &self.0
    }
}

impl Drop for GlobalSecretKey {
    fn drop(&mut self) {
        self.0 .0.zeroize();
    }
}

impl ZeroizeOnDrop for GlobalSecretKey {}

impl ConstantTimeEq for GlobalSecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for GlobalSecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Serializable<32> for GlobalPublicKey {
    type Error = Error;

    fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.0.to_bytes()
    }

    fn from_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self, Self::Error> {
        let pk = GroupElement::from_bytes(bytes)?;
        if pk.is_identity() {
            return Err(Error::InvalidValue);
        }
        Ok(Self(pk))
    }
}

impl Serializable<32> for GlobalSecretKey {
    type Error = Error;

    fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.0.to_bytes()
    }

    fn from_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self, Self::Error> {
        Ok(Self(ScalarNonZero::from_bytes(bytes)?))
    }
}

impl_hex!(GlobalPublicKey, 32);
impl_hex!(GlobalSecretKey, 32);
