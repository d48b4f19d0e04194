// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Pseudonyms and data points, and their encrypted versions.
//!
//! Both wrap a single non-identity [`GroupElement`] and encrypt to the same
//! ciphertext shape, but only an [`EncryptedPseudonym`] can be
//! pseudonymized and only an [`EncryptedDataPoint`] can be rekeyed on its
//! own.

use alloc::vec::Vec;

use dusk_bytes::{DeserializableSlice, Serializable};
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use tracing::debug;

use crate::arithmetic::{GroupElement, ScalarNonZero, G};
use crate::encryption::elgamal::{self, ElGamal, ELGAMAL_LENGTH};
use crate::encryption::primitives::rerandomize;
use crate::keys::{PublicKey, SecretKey};
use crate::Error;

/// The identity label of a data subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pseudonym(GroupElement);

/// A single data point about a data subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataPoint(GroupElement);

/// An encrypted [`Pseudonym`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptedPseudonym(ElGamal);

/// An encrypted [`DataPoint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptedDataPoint(ElGamal);

/// A plaintext that can be encrypted into its [`Encrypted`] counterpart
pub trait Encryptable: Sized {
    /// The ciphertext type
    type EncryptedType: Encrypted;

    /// Gets the wrapped group element
    fn value(&self) -> &GroupElement;

    /// Wraps a group element, failing on the identity
    fn from_value(value: GroupElement) -> Result<Self, Error>;
}

/// A ciphertext that decrypts into its [`Encryptable`] counterpart
pub trait Encrypted: Sized {
    /// The plaintext type
    type UnencryptedType: Encryptable;

    /// Gets the wrapped ciphertext
    fn value(&self) -> &ElGamal;

    /// Wraps a ciphertext
    fn from_value(value: ElGamal) -> Self;
}

macro_rules! impl_plaintext {
    ($ty:ident, $encrypted:ident) => {
        impl $ty {
            /// Wraps a group element, failing with [`Error::InvalidValue`]
            /// on the identity
            pub fn new(value: GroupElement) -> Result<Self, Error> {
                if value.is_identity() {
                    debug!(
                        kind = stringify!($ty),
                        "rejecting the identity element"
                    );
                    return Err(Error::InvalidValue);
                }
                Ok(Self(value))
            }

            /// Samples a random non-identity value
            pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
                // a nonzero multiple of the generator is never the identity
                Self(ScalarNonZero::random(rng) * G)
            }

            /// Deterministically maps 64 uniform bytes to a value, failing
            /// with [`Error::InvalidValue`] on the negligible chance they
            /// reduce to zero
            pub fn from_hash(hash: &[u8; 64]) -> Result<Self, Error> {
                Self::new(GroupElement::from_hash(hash))
            }

            /// Deterministically maps an identifier of any length to a
            /// value through its SHA-512 digest
            pub fn from_identifier(identifier: &[u8]) -> Result<Self, Error> {
                let mut hash = [0u8; 64];
                hash.copy_from_slice(&Sha512::digest(identifier));
                Self::from_hash(&hash)
            }

            /// Embeds a 16-byte payload that [`Self::to_payload`] recovers
            /// after decryption
            pub fn from_payload(payload: &[u8; 16]) -> Result<Self, Error> {
                GroupElement::from_payload(payload)
                    .map(Self)
                    .ok_or(Error::InvalidData)
            }

            /// Gets the embedded 16-byte payload, if the value carries one
            pub fn to_payload(&self) -> Option<[u8; 16]> {
                self.0.to_payload()
            }

            /// Gets the wrapped group element
            pub fn value(&self) -> &GroupElement {
                &self.0
            }
        }

        impl Encryptable for $ty {
            type EncryptedType = $encrypted;

            fn value(&self) -> &GroupElement {
                &self.0
            }

            fn from_value(value: GroupElement) -> Result<Self, Error> {
                Self::new(value)
            }
        }

        impl TryFrom<GroupElement> for $ty {
            type Error = Error;

            fn try_from(value: GroupElement) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl Serializable<32> for $ty {
            type Error = Error;

            fn to_bytes(&self) -> [u8; Self::SIZE] {
                self.0.to_bytes()
            }

            fn from_bytes(
                bytes: &[u8; Self::SIZE],
            ) -> Result<Self, Self::Error> {
                Self::new(GroupElement::from_bytes(bytes)?)
            }
        }

        impl_hex!($ty, 32);
    };
}

impl_plaintext!(Pseudonym, EncryptedPseudonym);
impl_plaintext!(DataPoint, EncryptedDataPoint);

impl DataPoint {
    /// Splits arbitrary bytes into 16-byte payloads, one data point each.
    /// The last chunk is padded with zeros.
    pub fn from_payloads(data: &[u8]) -> Result<Vec<Self>, Error> {
        data.chunks(16)
            .map(|chunk| {
                let mut payload = [0u8; 16];
                payload[..chunk.len()].copy_from_slice(chunk);
                Self::from_payload(&payload)
            })
            .collect()
    }

    /// Concatenates the payloads of consecutive data points, failing with
    /// [`Error::InvalidData`] on a point that carries none
    pub fn to_payloads(points: &[Self]) -> Result<Vec<u8>, Error> {
        let mut data = Vec::with_capacity(16 * points.len());
        for point in points {
            let payload = point.to_payload().ok_or(Error::InvalidData)?;
            data.extend_from_slice(&payload);
        }
        Ok(data)
    }
}

macro_rules! impl_ciphertext {
    ($ty:ident, $plain:ident) => {
        impl $ty {
            /// Wraps a ciphertext
            pub fn new(value: ElGamal) -> Self {
                Self(value)
            }

            /// Gets the wrapped ciphertext
            pub fn value(&self) -> &ElGamal {
                &self.0
            }
        }

        impl Encrypted for $ty {
            type UnencryptedType = $plain;

            fn value(&self) -> &ElGamal {
                &self.0
            }

            fn from_value(value: ElGamal) -> Self {
                Self(value)
            }
        }

        impl From<ElGamal> for $ty {
            fn from(value: ElGamal) -> Self {
                Self(value)
            }
        }

        impl Serializable<ELGAMAL_LENGTH> for $ty {
            type Error = Error;

            fn to_bytes(&self) -> [u8; Self::SIZE] {
                self.0.to_bytes()
            }

            fn from_bytes(
                bytes: &[u8; Self::SIZE],
            ) -> Result<Self, Self::Error> {
                Ok(Self(ElGamal::from_slice(&bytes[..])?))
            }
        }

        impl_hex!($ty, ELGAMAL_LENGTH);
    };
}

impl_ciphertext!(EncryptedPseudonym, Pseudonym);
impl_ciphertext!(EncryptedDataPoint, DataPoint);

/// Encrypts a pseudonym or data point under a global or session public key
pub fn encrypt<M, K, R>(
    message: &M,
    public_key: &K,
    rng: &mut R,
) -> M::EncryptedType
where
    M: Encryptable,
    K: PublicKey,
    R: RngCore + CryptoRng,
{
    let ciphertext =
        elgamal::encrypt(message.value(), public_key.value(), rng);
    <M::EncryptedType as Encrypted>::from_value(ciphertext)
}

/// Decrypts an encrypted pseudonym or data point with a global or session
/// secret key.
///
/// Fails with [`Error::DecryptionMismatch`] when the ciphertext decrypts to
/// the identity, which happens when it was not encrypted for `secret_key`.
pub fn decrypt<E, K>(
    encrypted: &E,
    secret_key: &K,
) -> Result<E::UnencryptedType, Error>
where
    E: Encrypted,
    K: SecretKey,
{
    let value = elgamal::decrypt(encrypted.value(), secret_key.value());
    if value.is_identity() {
        debug!("ciphertext decrypted to the identity element");
        return Err(Error::DecryptionMismatch);
    }
    <E::UnencryptedType as Encryptable>::from_value(value)
}

/// Rerandomizes the ciphertext of an encrypted pseudonym or data point,
/// given the public key it is decryptable under
pub fn rerandomize_encrypted<E, K, R>(
    encrypted: &E,
    public_key: &K,
    rng: &mut R,
) -> E
where
    E: Encrypted,
    K: PublicKey,
    R: RngCore + CryptoRng,
{
    let r = ScalarNonZero::random(rng);
    E::from_value(rerandomize(encrypted.value(), public_key.value(), &r))
}

/// Encrypts a pseudonym
pub fn encrypt_pseudonym<K: PublicKey, R: RngCore + CryptoRng>(
    pseudonym: &Pseudonym,
    public_key: &K,
    rng: &mut R,
) -> EncryptedPseudonym {
    encrypt(pseudonym, public_key, rng)
}

/// Decrypts an encrypted pseudonym
pub fn decrypt_pseudonym<K: SecretKey>(
    encrypted: &EncryptedPseudonym,
    secret_key: &K,
) -> Result<Pseudonym, Error> {
    decrypt(encrypted, secret_key)
}

/// Encrypts a data point
pub fn encrypt_data<K: PublicKey, R: RngCore + CryptoRng>(
    data: &DataPoint,
    public_key: &K,
    rng: &mut R,
) -> EncryptedDataPoint {
    encrypt(data, public_key, rng)
}

/// Decrypts an encrypted data point
pub fn decrypt_data<K: SecretKey>(
    encrypted: &EncryptedDataPoint,
    secret_key: &K,
) -> Result<DataPoint, Error> {
    decrypt(encrypted, secret_key)
}

/// Rerandomizes an encrypted pseudonym, so it cannot be linked to its
/// previous ciphertext
pub fn rerandomize_pseudonym<K: PublicKey, R: RngCore + CryptoRng>(
    encrypted: &EncryptedPseudonym,
    public_key: &K,
    rng: &mut R,
) -> EncryptedPseudonym {
    rerandomize_encrypted(encrypted, public_key, rng)
}

/// Rerandomizes an encrypted data point, so it cannot be linked to its
/// previous ciphertext
pub fn rerandomize_data<K: PublicKey, R: RngCore + CryptoRng>(
    encrypted: &EncryptedDataPoint,
    public_key: &K,
    rng: &mut R,
) -> EncryptedDataPoint {
    rerandomize_encrypted(encrypted, public_key, rng)
}
