// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Method parameters
//!
//! Harmony methods take positional parameters. Each parameter model below
//! serializes as a JSON array holding its fields in declaration order, so
//! `AddressBlockNumberParameters { address: "one1..", block_number: 7 }`
//! becomes `["one1..", 7]`.
//!
//! Nested objects, like [`BlockConfig`] or [`TransactionsHistoryObject`], are
//! serialized as regular JSON objects inside that array.

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};
use serde_with::skip_serializing_none;

use crate::model::Atto;

macro_rules! positional {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let len = [$(stringify!($field)),+].len();
                let mut tuple = serializer.serialize_tuple(len)?;
                $(tuple.serialize_element(&self.$field)?;)+
                tuple.end()
            }
        }
    };
}

/// Filter on the direction of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Transactions sent by the address
    Sent,
    /// Transactions received by the address
    Received,
    /// Both directions
    #[default]
    All,
}

/// Ordering of a transaction history page, based on timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest first
    #[default]
    #[serde(rename = "ASC")]
    Ascending,
    /// Newest first
    #[serde(rename = "DESC")]
    Descending,
}

/// A single wallet address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParameters {
    /// Wallet address
    pub address: String,
}
positional!(AddressParameters { address });

/// A wallet address at a given block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBlockNumberParameters {
    /// Wallet address
    pub address: String,
    /// Block number
    pub block_number: u64,
}
positional!(AddressBlockNumberParameters {
    address,
    block_number
});

/// A single block number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNumberParameters {
    /// Block number
    pub block_number: u64,
}
positional!(BlockNumberParameters { block_number });

/// A single block or transaction hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashParameters {
    /// Hash value
    pub hash: String,
}
positional!(HashParameters { hash });

/// Position of a transaction in a block identified by number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNumberAndIndexParameters {
    /// Block number
    pub block_number: u64,
    /// Index of the transaction within the block
    pub index: u64,
}
positional!(BlockNumberAndIndexParameters {
    block_number,
    index
});

/// Position of a transaction in a block identified by hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashAndIndexParameters {
    /// Block hash
    pub hash: String,
    /// Index of the transaction within the block
    pub index: u64,
}
positional!(HashAndIndexParameters { hash, index });

/// Count of transactions of an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionsCountParameters {
    /// Wallet address
    pub address: String,
    /// Direction of the transactions to count
    pub transaction_type: TransactionType,
}
positional!(TransactionsCountParameters {
    address,
    transaction_type
});

/// Page request for the transaction history of an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsHistoryObject {
    /// Wallet address
    pub address: String,
    /// Page to return
    pub page_index: u64,
    /// Transactions per page
    pub page_size: u64,
    /// Return full transactions instead of hashes
    pub full_tx: bool,
    /// Direction of the transactions to return
    pub tx_type: TransactionType,
    /// Ordering by timestamp
    pub order: SortOrder,
}

impl TransactionsHistoryObject {
    /// Default page size used by the node.
    pub const DEFAULT_PAGE_SIZE: u64 = 1000;

    /// First page of the history of `address`, hashes only.
    pub fn new<S: Into<String>>(address: S) -> Self {
        Self {
            address: address.into(),
            page_index: 0,
            page_size: Self::DEFAULT_PAGE_SIZE,
            full_tx: false,
            tx_type: TransactionType::All,
            order: SortOrder::Ascending,
        }
    }
}

/// The single history object the history methods take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionsHistoryParameters {
    /// History page request
    pub obj: TransactionsHistoryObject,
}
positional!(TransactionsHistoryParameters { obj });

/// Options for `hmyv2_getBlocks`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocksListConfig {
    /// Include block signer wallet addresses
    pub with_signers: bool,
    /// Include full transaction data
    pub full_tx: bool,
    /// Include full staking transactions
    pub incl_staking: bool,
}

/// Options for the single block lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockConfig {
    /// Include full transaction data
    pub full_tx: bool,
    /// Include regular transactions
    pub incl_tx: bool,
    /// Include full staking transactions
    pub incl_staking: bool,
}

/// A range of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockListParameters {
    /// First block of the range
    pub start_block: u64,
    /// Last block of the range
    pub end_block: u64,
    /// What to include in each block
    pub blocks_config: BlocksListConfig,
}
positional!(BlockListParameters {
    start_block,
    end_block,
    blocks_config
});

/// A block looked up by number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetBlockByNumberParameters {
    /// Block number
    pub block_number: u64,
    /// What to include in the block
    pub block_config: BlockConfig,
}
positional!(GetBlockByNumberParameters {
    block_number,
    block_config
});

/// A block looked up by hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetBlockByHashParameters {
    /// Block hash
    pub hash: String,
    /// What to include in the block
    pub block_config: BlockConfig,
}
positional!(GetBlockByHashParameters { hash, block_config });

/// A single epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpochNumberParameters {
    /// Epoch number
    pub epoch_number: u64,
}
positional!(EpochNumberParameters { epoch_number });

/// A page of validator information. Pages hold 100 validators, `-1`
/// requests all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParameters {
    /// Page number
    pub page_number: i64,
}
positional!(PageParameters { page_number });

/// A page of validator information at a given block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBlockNumberParameters {
    /// Page number, `-1` for all
    pub page_number: i64,
    /// Block number
    pub block_number: u64,
}
positional!(PageBlockNumberParameters {
    page_number,
    block_number
});

/// A signed transaction, hex encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransactionParameters {
    /// Hex representation of the signed transaction
    pub transaction_hex: String,
}
positional!(RawTransactionParameters { transaction_hex });

/// A read-only smart contract call.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartContractCall {
    /// Smart contract address
    pub to: String,
    /// Caller wallet address
    pub from: Option<String>,
    /// Gas available to the call
    pub gas: Option<u64>,
    /// Gas price of the call, in Atto
    pub gas_price: Option<Atto>,
    /// Value sent with the call, in Atto
    pub value: Option<Atto>,
    /// Hash of the method and its encoded arguments
    pub data: Option<String>,
}

/// A smart contract call at a given block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallParameters {
    /// Call object
    pub smart_contract_call: SmartContractCall,
    /// Block number
    pub block_number: u64,
}
positional!(CallParameters {
    smart_contract_call,
    block_number
});

/// Code stored at an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCodeParameters {
    /// Address to get the code from
    pub address: String,
    /// Block to query, usually `latest`
    pub block: String,
    /// Optional callback name, forwarded as-is to the node
    pub callback: Option<String>,
}

impl Serialize for GetCodeParameters {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // the callback is a trailing positional parameter, dropped when unset
        let len = if self.callback.is_some() { 3 } else { 2 };
        let mut tuple = serializer.serialize_tuple(len)?;
        tuple.serialize_element(&self.address)?;
        tuple.serialize_element(&self.block)?;
        if let Some(callback) = &self.callback {
            tuple.serialize_element(callback)?;
        }
        tuple.end()
    }
}

/// A storage slot of a smart contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetStorageAtParameters {
    /// Smart contract address
    pub address: String,
    /// Hex representation of the storage location
    pub storage_location: String,
    /// Block number
    pub block_number: u64,
}
positional!(GetStorageAtParameters {
    address,
    storage_location,
    block_number
});
