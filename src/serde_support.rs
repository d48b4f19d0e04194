// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use alloc::format;
use alloc::string::String;

use serde::de::Error as SerdeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    DataPoint, ElGamal, EncryptedDataPoint, EncryptedPseudonym,
    GlobalPublicKey, GlobalSecretKey, GroupElement, Pseudonym,
    ScalarCanBeZero, ScalarNonZero, SessionPublicKey, SessionSecretKey,
};

macro_rules! impl_serde_hex {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(
                    &self,
                    serializer: S,
                ) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(&self.encode_as_hex())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(
                    deserializer: D,
                ) -> Result<Self, D::Error> {
                    let s = String::deserialize(deserializer)?;
                    <$ty>::decode_from_hex(&s)
                        .map_err(|err| SerdeError::custom(format!("{err:?}")))
                }
            }
        )*
    };
}

impl_serde_hex!(
    GroupElement,
    ScalarNonZero,
    ScalarCanBeZero,
    ElGamal,
    Pseudonym,
    DataPoint,
    EncryptedPseudonym,
    EncryptedDataPoint,
    GlobalPublicKey,
    GlobalSecretKey,
    SessionPublicKey,
    SessionSecretKey,
);
