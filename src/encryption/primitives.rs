// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Transformations of [`ElGamal`] ciphertexts that never decrypt them.
//!
//! For a ciphertext of `m` decryptable with secret `y`:
//! - [`rekey`] with `k` makes it decryptable with `k·y`, still holding `m`
//! - [`reshuffle`] with `s` keeps the key `y` but makes it hold `s·m`
//! - [`rerandomize`] changes neither, only the ciphertext's randomness
//!
//! The combined functions apply several of these at once.

use crate::arithmetic::{GroupElement, ScalarNonZero, G};
use crate::encryption::elgamal::ElGamal;

/// Returns `(k⁻¹·b, c)`, decryptable with `k·y` if `m` was decryptable
/// with `y`
pub fn rekey(m: &ElGamal, k: &ScalarNonZero) -> ElGamal {
    ElGamal {
        b: k.invert() * m.b,
        c: m.c,
    }
}

/// Returns `(s·b, s·c)`, which decrypts with the same key to `s` times the
/// original plaintext
pub fn reshuffle(m: &ElGamal, s: &ScalarNonZero) -> ElGamal {
    ElGamal {
        b: s * m.b,
        c: s * m.c,
    }
}

/// Combination of [`reshuffle`] with `s` and [`rekey`] with `k`, returning
/// `(s·k⁻¹·b, s·c)`
///
/// Both orders of applying the two yield the same ciphertext.
pub fn rekey_and_reshuffle(
    m: &ElGamal,
    k: &ScalarNonZero,
    s: &ScalarNonZero,
) -> ElGamal {
    ElGamal {
        b: (s * k.invert()) * m.b,
        c: s * m.c,
    }
}

/// Returns `(r·G + b, r·Y + c)`, a fresh encryption of the same plaintext
/// under the same public key `Y`
pub fn rerandomize(
    m: &ElGamal,
    public_key: &GroupElement,
    r: &ScalarNonZero,
) -> ElGamal {
    ElGamal {
        b: r * G + m.b,
        c: r * public_key + m.c,
    }
}

/// [`rerandomize`] with `r` followed by [`rekey_and_reshuffle`] with `k` and
/// `s`, in one pass: `(s·k⁻¹·(b + r·G), s·(c + r·Y))`
///
/// `public_key` is the key `Y` the input ciphertext is decryptable under.
pub fn rerandomize_and_rekey_and_reshuffle(
    m: &ElGamal,
    public_key: &GroupElement,
    r: &ScalarNonZero,
    k: &ScalarNonZero,
    s: &ScalarNonZero,
) -> ElGamal {
    let ski = s * k.invert();

    ElGamal {
        b: ski * m.b + (ski * r) * G,
        c: (s * r) * public_key + s * m.c,
    }
}

/// [`rekey`] from a ciphertext decryptable with `k_from·y` to one
/// decryptable with `k_to·y`
pub fn rekey_from_to(
    m: &ElGamal,
    k_from: &ScalarNonZero,
    k_to: &ScalarNonZero,
) -> ElGamal {
    rekey(m, &(k_from.invert() * k_to))
}

/// [`reshuffle`] a plaintext `s_from·m` into `s_to·m`
pub fn reshuffle_from_to(
    m: &ElGamal,
    s_from: &ScalarNonZero,
    s_to: &ScalarNonZero,
) -> ElGamal {
    reshuffle(m, &(s_from.invert() * s_to))
}

/// [`rekey_and_reshuffle`] with both factors given as a from/to pair
pub fn rekey_and_reshuffle_from_to(
    m: &ElGamal,
    k_from: &ScalarNonZero,
    k_to: &ScalarNonZero,
    s_from: &ScalarNonZero,
    s_to: &ScalarNonZero,
) -> ElGamal {
    let k = k_from.invert() * k_to;
    let s = s_from.invert() * s_to;

    rekey_and_reshuffle(m, &k, &s)
}

/// [`rerandomize_and_rekey_and_reshuffle`] with both factors given as a
/// from/to pair
pub fn rerandomize_and_rekey_and_reshuffle_from_to(
    m: &ElGamal,
    public_key: &GroupElement,
    r: &ScalarNonZero,
    k_from: &ScalarNonZero,
    k_to: &ScalarNonZero,
    s_from: &ScalarNonZero,
    s_to: &ScalarNonZero,
) -> ElGamal {
    let k = k_from.invert() * k_to;
    let s = s_from.invert() * s_to;

    rerandomize_and_rekey_and_reshuffle(m, public_key, r, &k, &s)
}
