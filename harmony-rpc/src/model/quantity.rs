// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Hex encoded quantities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A quantity sent by the node as a `0x`-prefixed hex string.
///
/// The string is kept exactly as received; decoding is left to
/// [`HexQuantity::to_u64`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexQuantity(String);

impl HexQuantity {
    /// The quantity as sent by the node.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the quantity.
    ///
    /// # Errors
    /// Returns [`Error::InvalidQuantity`] if the value is not a `0x`-prefixed
    /// hex number fitting in a `u64`.
    pub fn to_u64(&self) -> Result<u64, Error> {
        let digits = self
            .0
            .strip_prefix("0x")
            .or_else(|| self.0.strip_prefix("0X"))
            .ok_or_else(|| Error::InvalidQuantity(self.0.clone()))?;

        // from_str_radix alone lets a leading sign through
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidQuantity(self.0.clone()));
        }

        u64::from_str_radix(digits, 16)
            .map_err(|_| Error::InvalidQuantity(self.0.clone()))
    }
}

impl From<String> for HexQuantity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for HexQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
