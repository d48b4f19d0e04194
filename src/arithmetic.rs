// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Group elements and scalars of the JubJub prime-order subgroup.
//!
//! The rest of the crate only sees [`GroupElement`], [`ScalarNonZero`] and
//! [`ScalarCanBeZero`], so the underlying curve is confined to this module.

use core::convert::TryFrom;

use dusk_bytes::{DeserializableSlice, Serializable};
use dusk_jubjub::{
    JubJubAffine, JubJubExtended, JubJubScalar, GENERATOR_EXTENDED,
};
use ff::Field;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use tracing::debug;
use zeroize::Zeroize;

use crate::Error;

/// The generator of the prime-order subgroup
pub const G: GroupElement = GroupElement(GENERATOR_EXTENDED);

/// A point of the JubJub prime-order subgroup, including the identity
#[derive(Debug, Clone, Copy, Eq)]
pub struct GroupElement(pub(crate) JubJubExtended);

impl GroupElement {
    /// The identity element of the group
    pub fn identity() -> Self {
        Self(JubJubExtended::identity())
    }

    /// Samples a uniformly random element from the given number generator
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self(GENERATOR_EXTENDED * JubJubScalar::random(&mut *rng))
    }

    /// Checks if this is the identity element
    pub fn is_identity(&self) -> bool {
        self.0.is_identity().into()
    }

    /// Maps 64 uniform bytes, such as a SHA-512 digest, to `h·G` where `h` is
    /// their wide reduction. Only a reduction to zero gives the identity.
    pub fn from_hash(hash: &[u8; 64]) -> Self {
        Self(GENERATOR_EXTENDED * JubJubScalar::from_bytes_wide(hash))
    }

    /// Embeds a 16-byte payload into a subgroup element.
    ///
    /// The encoding is the payload followed by a little-endian `u16` counter
    /// and zeros, and the counter is bumped until it decodes to a
    /// non-identity element of the subgroup. Returns `None` if no counter
    /// value works.
    pub fn from_payload(payload: &[u8; 16]) -> Option<Self> {
        let mut bytes = [0u8; Self::SIZE];
        bytes[..16].copy_from_slice(payload);

        for counter in 0..=u16::MAX {
            bytes[16..18].copy_from_slice(&counter.to_le_bytes());
            match Self::from_bytes(&bytes) {
                Ok(element) if !element.is_identity() => return Some(element),
                _ => continue,
            }
        }

        debug!("no counter embeds the payload");
        None
    }

    /// Extracts the payload embedded by [`GroupElement::from_payload`], or
    /// `None` if the element does not carry one
    pub fn to_payload(&self) -> Option<[u8; 16]> {
        let bytes = self.to_bytes();
        if bytes[18..].iter().any(|b| *b != 0) {
            return None;
        }

        let mut payload = [0u8; 16];
        payload.copy_from_slice(&bytes[..16]);
        Some(payload)
    }
}

impl ConstantTimeEq for GroupElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for GroupElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Serializable<32> for GroupElement {
    type Error = Error;

    fn to_bytes(&self) -> [u8; Self::SIZE] {
        JubJubAffine::from(self.0).to_bytes()
    }

    fn from_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self, Self::Error> {
        let affine = JubJubAffine::from_slice(&bytes[..])?;

        // only the canonical encoding of a point is accepted
        if &affine.to_bytes() != bytes {
            return Err(Error::InvalidData);
        }

        let point = JubJubExtended::from(affine);
        if !bool::from(point.is_torsion_free()) {
            return Err(Error::InvalidData);
        }

        Ok(Self(point))
    }
}

impl_hex!(GroupElement, 32);

/// A scalar modulo the subgroup order that is never zero
///
/// It cannot be zeroized in place, as that would break the invariant. Types
/// holding a secret `ScalarNonZero` wipe it when dropped.
#[derive(Debug, Clone, Copy, Eq)]
pub struct ScalarNonZero(pub(crate) JubJubScalar);

impl ScalarNonZero {
    /// The multiplicative identity
    pub fn one() -> Self {
        Self(JubJubScalar::one())
    }

    /// Samples a uniformly random nonzero scalar, redrawing on zero
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        loop {
            let scalar = JubJubScalar::random(&mut *rng);
            if scalar != JubJubScalar::zero() {
                return Self(scalar);
            }
        }
    }

    /// Reduces 64 uniform bytes into a scalar, failing on zero
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Result<Self, Error> {
        Self::try_from(JubJubScalar::from_bytes_wide(bytes))
    }

    /// The multiplicative inverse
    pub fn invert(&self) -> Self {
        let inverse: Option<JubJubScalar> = self.0.invert().into();
        Self(inverse.expect("nonzero scalars are invertible"))
    }
}

impl TryFrom<JubJubScalar> for ScalarNonZero {
    type Error = Error;

    fn try_from(scalar: JubJubScalar) -> Result<Self, Self::Error> {
        if scalar == JubJubScalar::zero() {
            debug!("rejecting zero as a nonzero scalar");
            return Err(Error::InvalidScalar);
        }
        Ok(Self(scalar))
    }
}

impl TryFrom<ScalarCanBeZero> for ScalarNonZero {
    type Error = Error;

    fn try_from(scalar: ScalarCanBeZero) -> Result<Self, Self::Error> {
        Self::try_from(scalar.0)
    }
}

impl ConstantTimeEq for ScalarNonZero {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for ScalarNonZero {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Serializable<32> for ScalarNonZero {
    type Error = Error;

    fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.0.to_bytes()
    }

    fn from_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self, Self::Error> {
        let scalar = JubJubScalar::from_slice(&bytes[..])?;
        Self::try_from(scalar)
    }
}

impl_hex!(ScalarNonZero, 32);

/// A scalar modulo the subgroup order, zero included
#[derive(Debug, Clone, Copy, Eq, Zeroize)]
pub struct ScalarCanBeZero(pub(crate) JubJubScalar);

impl ScalarCanBeZero {
    /// The additive identity
    pub fn zero() -> Self {
        Self(JubJubScalar::zero())
    }

    /// The multiplicative identity
    pub fn one() -> Self {
        Self(JubJubScalar::one())
    }

    /// Samples a uniformly random scalar
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self(JubJubScalar::random(&mut *rng))
    }

    /// Checks if the scalar is zero
    pub fn is_zero(&self) -> bool {
        self.0 == JubJubScalar::zero()
    }
}

impl From<ScalarNonZero> for ScalarCanBeZero {
    fn from(scalar: ScalarNonZero) -> Self {
        Self(scalar.0)
    }
}

impl From<u64> for ScalarCanBeZero {
    fn from(value: u64) -> Self {
        Self(JubJubScalar::from(value))
    }
}

impl ConstantTimeEq for ScalarCanBeZero {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for ScalarCanBeZero {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Serializable<32> for ScalarCanBeZero {
    type Error = Error;

    fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.0.to_bytes()
    }

    fn from_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self, Self::Error> {
        Ok(Self(JubJubScalar::from_slice(&bytes[..])?))
    }
}

impl_hex!(ScalarCanBeZero, 32);

impl_binop!(Add, add, GroupElement, GroupElement => GroupElement, |a, b| {
    GroupElement(a.0 + b.0)
});
impl_binop!(Sub, sub, GroupElement, GroupElement => GroupElement, |a, b| {
    GroupElement(a.0 - b.0)
});

impl core::ops::Neg for GroupElement {
    type Output = GroupElement;

    fn neg(self) -> GroupElement {
        GroupElement(-self.0)
    }
}

impl_binop!(Mul, mul, ScalarNonZero, GroupElement => GroupElement, |s, p| {
    GroupElement(p.0 * s.0)
});
impl_binop!(Mul, mul, ScalarCanBeZero, GroupElement => GroupElement, |s, p| {
    GroupElement(p.0 * s.0)
});

// the product of two nonzero elements of a prime field is nonzero
impl_binop!(Mul, mul, ScalarNonZero, ScalarNonZero => ScalarNonZero, |a, b| {
    ScalarNonZero(a.0 * b.0)
});

impl_binop!(Add, add, ScalarCanBeZero, ScalarCanBeZero => ScalarCanBeZero, |a, b| {
    ScalarCanBeZero(a.0 + b.0)
});
impl_binop!(Sub, sub, ScalarCanBeZero, ScalarCanBeZero => ScalarCanBeZero, |a, b| {
    ScalarCanBeZero(a.0 - b.0)
});
impl_binop!(Mul, mul, ScalarCanBeZero, ScalarCanBeZero => ScalarCanBeZero, |a, b| {
    ScalarCanBeZero(a.0 * b.0)
});
