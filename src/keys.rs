// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use hkdf::Hkdf;
use sha2::Sha512;
use tracing::trace;

use crate::arithmetic::{GroupElement, ScalarNonZero};

/// Context labels and the secrets keying them
pub mod context;
pub mod factors;
/// The global key pair
pub mod global;
/// Key pairs of encryption contexts
pub mod session;

/// Domain of the factors derived from encryption contexts
pub(crate) const ENCRYPTION_DOMAIN: &[u8] = b"pep-core/encryption-factor/v1";
/// Domain of the factors derived from pseudonymization contexts
pub(crate) const PSEUDONYMIZATION_DOMAIN: &[u8] =
    b"pep-core/pseudonymization-factor/v1";

/// Hashes a `label` keyed by `secret` into a nonzero scalar, using
/// HKDF-SHA512 with `domain` as salt.
///
/// The label is length-prefixed in the HKDF info, followed by a counter that
/// is bumped for as long as the wide reduction yields zero.
pub fn hash_to_nonzero_scalar(
    domain: &[u8],
    secret: &[u8],
    label: &[u8],
) -> ScalarNonZero {
    let hk = Hkdf::<Sha512>::new(Some(domain), secret);
    let label_len = (label.len() as u64).to_le_bytes();

    let mut counter = 0u32;
    loop {
        let mut okm = [0u8; 64];
        hk.expand_multi_info(
            &[&label_len[..], label, &counter.to_le_bytes()[..]],
            &mut okm,
        )
        .expect("64 is a valid length for Sha512 to output");

        if let Ok(scalar) = ScalarNonZero::from_bytes_wide(&okm) {
            return scalar;
        }

        trace!(counter, "hashed to a zero scalar, rehashing");
        counter = counter.wrapping_add(1);
    }
}

/// A key holding a public group element
pub trait PublicKey {
    /// The public group element `secret·G`
    fn value(&self) -> &GroupElement;
}

/// A key holding a secret nonzero scalar
pub trait SecretKey {
    /// The secret scalar
    fn value(&self) -> &ScalarNonZero;
}
