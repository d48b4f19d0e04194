// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Moving encrypted pseudonyms and data points between contexts without
//! decrypting them.

use rand::{CryptoRng, RngCore};

use crate::arithmetic::ScalarNonZero;
use crate::data::{EncryptedDataPoint, EncryptedPseudonym};
use crate::encryption::primitives::{
    rekey, rekey_and_reshuffle, rerandomize_and_rekey_and_reshuffle,
};
use crate::keys::context::{
    EncryptionContext, EncryptionSecret, PseudonymizationContext,
    PseudonymizationSecret,
};
use crate::keys::factors::{
    derive_rekey_factor, derive_reshuffle_factor, RekeyFactor,
    ReshuffleFactor,
};
use crate::keys::PublicKey;

/// Rekeys ciphertexts from the session key of one encryption context to
/// the session key of another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RekeyInfo {
    k: RekeyFactor,
}

impl RekeyInfo {
    /// Creates the info moving ciphertexts from encryption context `from`
    /// to `to`
    pub fn new(
        from: &EncryptionContext,
        to: &EncryptionContext,
        secret: &EncryptionSecret,
    ) -> Self {
        Self {
            k: derive_rekey_factor(from, to, secret),
        }
    }

    /// Wraps an already combined rekey factor
    pub fn from_factor(k: RekeyFactor) -> Self {
        Self { k }
    }

    /// Takes the rekey half of a [`PseudonymizationInfo`], to move the data
    /// accompanying a pseudonym along with it
    pub fn from_pseudo_info(info: &PseudonymizationInfo) -> Self {
        info.k
    }

    /// Gets the rekey factor
    pub fn factor(&self) -> &RekeyFactor {
        &self.k
    }

    /// The info moving ciphertexts back from `to` to `from`
    pub fn rev(&self) -> Self {
        Self { k: self.k.invert() }
    }
}

impl From<&PseudonymizationInfo> for RekeyInfo {
    fn from(info: &PseudonymizationInfo) -> Self {
        Self::from_pseudo_info(info)
    }
}

impl From<PseudonymizationInfo> for RekeyInfo {
    fn from(info: PseudonymizationInfo) -> Self {
        Self::from_pseudo_info(&info)
    }
}

/// Moves encrypted pseudonyms from one pseudonymization and encryption
/// context to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PseudonymizationInfo {
    s: ReshuffleFactor,
    k: RekeyInfo,
}

impl PseudonymizationInfo {
    /// Creates the info moving pseudonyms from pseudonymization context
    /// `from_pseudo` to `to_pseudo`, and from encryption context
    /// `from_enc` to `to_enc`
    pub fn new(
        from_pseudo: &PseudonymizationContext,
        to_pseudo: &PseudonymizationContext,
        from_enc: &EncryptionContext,
        to_enc: &EncryptionContext,
        pseudonymization_secret: &PseudonymizationSecret,
        encryption_secret: &EncryptionSecret,
    ) -> Self {
        Self {
            s: derive_reshuffle_factor(
                from_pseudo,
                to_pseudo,
                pseudonymization_secret,
            ),
            k: RekeyInfo::new(from_enc, to_enc, encryption_secret),
        }
    }

    /// Wraps already combined reshuffle and rekey factors
    pub fn from_factors(s: ReshuffleFactor, k: RekeyFactor) -> Self {
        Self {
            s,
            k: RekeyInfo::from_factor(k),
        }
    }

    /// Gets the reshuffle factor
    pub fn reshuffle_factor(&self) -> &ReshuffleFactor {
        &self.s
    }

    /// Gets the rekey factor
    pub fn rekey_factor(&self) -> &RekeyFactor {
        self.k.factor()
    }

    /// The info moving pseudonyms back, such that
    /// `pseudonymize(&pseudonymize(p, &info), &info.rev()) == *p`
    pub fn rev(&self) -> Self {
        Self {
            s: self.s.invert(),
            k: self.k.rev(),
        }
    }
}

/// Pseudonymizes an encrypted pseudonym: the result decrypts with the
/// destination session key to the pseudonym of the same subject in the
/// destination pseudonymization context
pub fn pseudonymize(
    encrypted: &EncryptedPseudonym,
    info: &PseudonymizationInfo,
) -> EncryptedPseudonym {
    EncryptedPseudonym::new(rekey_and_reshuffle(
        encrypted.value(),
        info.rekey_factor().scalar(),
        info.reshuffle_factor().scalar(),
    ))
}

/// [`pseudonymize`] that also rerandomizes the ciphertext, so the result
/// cannot be linked to the input even by whoever knows the factors.
///
/// `public_key` is the session key the input is decryptable under.
pub fn rerandomize_and_pseudonymize<K: PublicKey, R: RngCore + CryptoRng>(
    encrypted: &EncryptedPseudonym,
    public_key: &K,
    info: &PseudonymizationInfo,
    rng: &mut R,
) -> EncryptedPseudonym {
    let r = ScalarNonZero::random(rng);

    EncryptedPseudonym::new(rerandomize_and_rekey_and_reshuffle(
        encrypted.value(),
        public_key.value(),
        &r,
        info.rekey_factor().scalar(),
        info.reshuffle_factor().scalar(),
    ))
}

/// Rekeys an encrypted data point: the result decrypts with the destination
/// session key to the same data point
pub fn rekey_data(
    encrypted: &EncryptedDataPoint,
    info: &RekeyInfo,
) -> EncryptedDataPoint {
    EncryptedDataPoint::new(rekey(encrypted.value(), info.factor().scalar()))
}
