// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;

use crate::Error;

/// Identifies a block either by number or by hash, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockSelector {
    /// Block number
    ByNumber(u64),
    /// Block hash
    ByHash(String),
}

impl BlockSelector {
    /// Build a selector from two optional values, exactly one of which must
    /// be set.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParams`] if both or neither are set.
    pub fn from_options(
        number: Option<u64>,
        hash: Option<String>,
    ) -> Result<Self, Error> {
        match (number, hash) {
            (Some(number), None) => Ok(Self::ByNumber(number)),
            (None, Some(hash)) => Ok(Self::ByHash(hash)),
            (None, None) => Err(Error::InvalidParams(
                "one of block number or block hash is required".into(),
            )),
            (Some(_), Some(_)) => Err(Error::InvalidParams(
                "block number and block hash can't be passed at once".into(),
            )),
        }
    }
}

impl From<u64> for BlockSelector {
    fn from(number: u64) -> Self {
        Self::ByNumber(number)
    }
}

impl From<String> for BlockSelector {
    fn from(hash: String) -> Self {
        Self::ByHash(hash)
    }
}

impl From<&str> for BlockSelector {
    fn from(hash: &str) -> Self {
        Self::ByHash(hash.to_string())
    }
}

impl fmt::Display for BlockSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByNumber(number) => write!(f, "#{number}"),
            Self::ByHash(hash) => write!(f, "{hash}"),
        }
    }
}
