// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use core::fmt;
use dusk_bytes::{BadLength, Error as DuskBytesError, InvalidChar};
use hex::FromHexError;

/// All possible errors for PEP's Core
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A zero scalar was given where a nonzero one is required
    InvalidScalar,
    /// The identity element cannot be a pseudonym or a data point
    InvalidValue,
    /// Decryption resulted in the identity element
    DecryptionMismatch,
    /// Malformed, non-canonical or off-curve encoding
    InvalidData,
    /// Dusk-bytes BadLength error
    BadLength(usize, usize),
    /// Dusk-bytes InvalidChar error
    InvalidChar(char, usize),
}

impl Error {
    /// Whether the error was raised while decoding wire input
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidData | Error::BadLength(..) | Error::InvalidChar(..)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PEP-Core Error: {:?}", &self)
    }
}

impl From<DuskBytesError> for Error {
    fn from(err: DuskBytesError) -> Self {
        match err {
            DuskBytesError::InvalidData => Error::InvalidData,
            DuskBytesError::BadLength { found, expected } => {
                Error::BadLength(found, expected)
            }
            DuskBytesError::InvalidChar { ch, index } => {
                Error::InvalidChar(ch, index)
            }
        }
    }
}

impl From<FromHexError> for Error {
    fn from(err: FromHexError) -> Self {
        match err {
            FromHexError::InvalidHexCharacter { c, index } => {
                Error::InvalidChar(c, index)
            }
            // lengths are checked before decoding
            _ => Error::InvalidData,
        }
    }
}

impl BadLength for Error {
    fn bad_length(found: usize, expected: usize) -> Self {
        Error::BadLength(found, expected)
    }
}

impl InvalidChar for Error {
    fn invalid_char(ch: char, index: usize) -> Self {
        Error::InvalidChar(ch, index)
    }
}

/// Decodes a hex string into exactly `N` bytes. A string of odd length is
/// malformed rather than of the wrong length.
pub(crate) fn decode_hex<const N: usize>(s: &str) -> Result<[u8; N], Error> {
    if s.len() % 2 != 0 {
        return Err(Error::InvalidData);
    }
    if s.len() != 2 * N {
        return Err(Error::BadLength(s.len() / 2, N));
    }

    let mut bytes = [0u8; N];
    hex::decode_to_slice(s, &mut bytes)?;

    Ok(bytes)
}
