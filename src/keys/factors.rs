// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Deterministic derivation of the scalar factors addressed by contexts.
//!
//! A context `c` keyed by secret `x` maps to the factor `H(x, c)` of its
//! domain. Moving from context `a` to context `b` uses the combined factor
//! `H(x, b) · H(x, a)⁻¹`.

use crate::arithmetic::ScalarNonZero;
use crate::keys::context::{
    EncryptionContext, EncryptionSecret, PseudonymizationContext,
    PseudonymizationSecret,
};
use crate::keys::{
    hash_to_nonzero_scalar, ENCRYPTION_DOMAIN, PSEUDONYMIZATION_DOMAIN,
};

/// Factor `k` changing the key a ciphertext decrypts with from `y` to `k·y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RekeyFactor(pub(crate) ScalarNonZero);

/// Factor `s` changing the plaintext of a ciphertext from `m` to `s·m`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReshuffleFactor(pub(crate) ScalarNonZero);

macro_rules! impl_factor {
    ($ty:ident) => {
        impl $ty {
            /// Wraps a raw scalar
            pub fn new(scalar: ScalarNonZero) -> Self {
                Self(scalar)
            }

            /// Gets the scalar
            pub fn scalar(&self) -> &ScalarNonZero {
                &self.0
            }

            /// The factor undoing this one
            pub fn invert(&self) -> Self {
                Self(self.0.invert())
            }
        }

        impl From<ScalarNonZero> for $ty {
            fn from(scalar: ScalarNonZero) -> Self {
                Self(scalar)
            }
        }
    };
}

impl_factor!(RekeyFactor);
impl_factor!(ReshuffleFactor);

/// The rekey factor of a single encryption context
pub fn make_rekey_factor(
    secret: &EncryptionSecret,
    context: &EncryptionContext,
) -> RekeyFactor {
    RekeyFactor(hash_to_nonzero_scalar(
        ENCRYPTION_DOMAIN,
        secret.as_ref(),
        context.as_ref(),
    ))
}

/// The reshuffle factor of a single pseudonymization context
pub fn make_pseudonymisation_factor(
    secret: &PseudonymizationSecret,
    context: &PseudonymizationContext,
) -> ReshuffleFactor {
    ReshuffleFactor(hash_to_nonzero_scalar(
        PSEUDONYMIZATION_DOMAIN,
        secret.as_ref(),
        context.as_ref(),
    ))
}

/// The factor rekeying a ciphertext from the session key of `from` to the
/// session key of `to`
pub fn derive_rekey_factor(
    from: &EncryptionContext,
    to: &EncryptionContext,
    secret: &EncryptionSecret,
) -> RekeyFactor {
    let k_from = make_rekey_factor(secret, from);
    let k_to = make_rekey_factor(secret, to);

    RekeyFactor(k_to.0 * k_from.0.invert())
}

/// The factor reshuffling a pseudonym of context `from` into the pseudonym
/// of the same subject in context `to`
pub fn derive_reshuffle_factor(
    from: &PseudonymizationContext,
    to: &PseudonymizationContext,
    secret: &PseudonymizationSecret,
) -> ReshuffleFactor {
    let s_from = make_pseudonymisation_factor(secret, from);
    let s_to = make_pseudonymisation_factor(secret, to);

    ReshuffleFactor(s_to.0 * s_from.0.invert())
}

/// The secret key of an encryption context: its rekey factor times the
/// global secret
pub fn derive_session_secret(
    global_secret: &ScalarNonZero,
    context: &EncryptionContext,
    secret: &EncryptionSecret,
) -> ScalarNonZero {
    make_rekey_factor(secret, context).0 * global_secret
}
