// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use dusk_bytes::Serializable;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::arithmetic::{GroupElement, ScalarNonZero, G};
use crate::keys::context::{EncryptionContext, EncryptionSecret};
use crate::keys::factors::derive_session_secret;
use crate::keys::global::GlobalSecretKey;
use crate::keys::{PublicKey, SecretKey};
use crate::Error;

/// Public key of an encryption context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPublicKey(pub(crate) GroupElement);

/// Secret key of an encryption context, never generated on its own but
/// derived from the [`GlobalSecretKey`]
///
/// ## Safety
///
/// The scalar is wiped from memory when the key is dropped. A key is never
/// observable in its wiped state.
#[derive(Debug, Clone, Eq)]
pub struct SessionSecretKey(pub(crate) ScalarNonZero);

/// The key pair of an encryption context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKeyPair {
    /// The public key `secret·G`
    pub public: SessionPublicKey,
    /// The secret key
    pub secret: SessionSecretKey,
}

/// Derives the key pair of an encryption context from the global secret
/// key and the encryption secret.
///
/// The derivation is deterministic: the same context and secret always
/// give the same key pair.
pub fn make_session_keys(
    global: &GlobalSecretKey,
    context: &EncryptionContext,
    secret: &EncryptionSecret,
) -> SessionKeyPair {
    let secret = SessionSecretKey(derive_session_secret(
        global.value(),
        context,
        secret,
    ));
    let public = SessionPublicKey::from(&secret);

    SessionKeyPair { public, secret }
}

impl From<&SessionSecretKey> for SessionPublicKey {
    fn from(sk: &SessionSecretKey) -> Self {
        Self(sk.0 * G)
    }
}

impl PublicKey for SessionPublicKey {
    fn value(&self) -> &GroupElement {
        &self.0
    }
}

impl SecretKey for SessionSecretKey {
    fn value(&self) -> &ScalarNonZero {
        &self.0
    }
}

impl Drop for SessionSecretKey {
    fn drop(&mut self) {
        self.0 .0.zeroize();
    }
}

impl ZeroizeOnDrop for SessionSecretKey {}

impl ConstantTimeEq for SessionSecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for SessionSecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Serializable<32> for SessionPublicKey {
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

impl Serializable<32> for SessionSecretKey {
    type Error = Error;

    fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.0.to_bytes()
    }

    fn from_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self, Self::Error> {
        Ok(Self(ScalarNonZero::from_bytes(bytes)?))
    }
}

impl_hex!(SessionPublicKey, 32);
impl_hex!(SessionSecretKey, 32);
