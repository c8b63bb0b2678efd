// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Transaction models
//!
//! Plain and staking transactions, receipts, pool statistics and the error
//! sinks of the transaction pool.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::model::Atto;

/// A plain (transfer or contract) transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Hash of the block including the transaction
    pub block_hash: String,
    /// Number of the block including the transaction
    pub block_number: u64,
    /// Sender wallet address
    pub from: String,
    /// Unix time at which the transaction was finalized
    pub timestamp: u64,
    /// Gas limit
    pub gas: u64,
    /// Gas price, in Atto
    pub gas_price: Atto,
    /// Transaction hash
    pub hash: String,
    /// Transaction data, used by smart contracts
    pub input: String,
    /// Sender nonce
    pub nonce: u64,
    /// Receiver wallet address
    pub to: String,
    /// Index of the transaction within its block
    pub transaction_index: u64,
    /// Amount transferred, in Atto
    pub value: Atto,
    /// Source shard
    #[serde(rename = "shardID")]
    pub shard_id: u32,
    /// Destination shard
    #[serde(rename = "toShardID")]
    pub to_shard_id: u32,
}

/// A staking directive (create validator, delegate, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingTransaction {
    /// Hash of the block including the transaction
    pub block_hash: String,
    /// Number of the block including the transaction
    pub block_number: u64,
    /// Sender wallet address
    pub from: String,
    /// Unix time at which the transaction was finalized
    pub timestamp: u64,
    /// Gas limit
    pub gas: u64,
    /// Gas price, in Atto
    pub gas_price: Atto,
    /// Sender nonce
    pub nonce: u64,
    /// Index of the transaction within its block
    pub transaction_index: u64,
    /// Kind of staking directive
    #[serde(rename = "type")]
    pub kind: String,
    /// Directive payload, its shape depends on `kind`
    pub msg: Map<String, Value>,
}

/// Receipt of an executed transaction.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Block hash
    pub block_hash: String,
    /// Block number
    pub block_number: u64,
    /// Address of the created smart contract, if any
    pub contract_address: String,
    /// Cumulative gas used in the block up to this transaction
    #[serde(alias = "culmulativeGasUsed")]
    pub cumulative_gas_used: u64,
    /// Sender wallet address
    pub from: String,
    /// Gas used by the transaction
    pub gas_used: u64,
    /// Emitted logs
    pub logs: Vec<Value>,
    /// Bloom filter of the logs
    pub logs_bloom: String,
    /// Shard ID
    #[serde(rename = "shardID")]
    pub shard_id: u32,
    /// 0 when pending, 1 on success
    pub status: u64,
    /// Receiver wallet address
    pub to: String,
    /// Transaction hash
    pub transaction_hash: String,
    /// Index of the transaction within its block
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub transaction_index: u64,
}

/// Size of the transaction pool.
///
/// Counts are sent either as numbers or as decimal strings depending on the
/// node version.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PoolStats {
    /// Number of executable transactions
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub executable_count: u64,
    /// Number of non-executable transactions
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub non_executable_count: u64,
}

/// A transaction rejected by the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransactionError {
    /// Transaction hash
    pub tx_hash_id: String,
    /// Unix time of the rejection
    pub time_at_rejection: u64,
    /// Reason for the rejection
    pub error_message: String,
}

/// A staking transaction rejected by the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StakingError {
    /// Staking transaction hash
    pub tx_hash_id: String,
    /// Kind of staking directive
    pub directive_kind: String,
    /// Unix time of the rejection
    pub time_at_rejection: u64,
    /// Reason for the rejection
    pub error_message: String,
}

/// A page of account history, as requested through `fullTx`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum History<T> {
    /// Transaction hashes, when full data was not requested
    Hashes(Vec<String>),
    /// Full transactions
    Full(Vec<T>),
}

impl<T> History<T> {
    /// Number of entries in the page.
    pub fn len(&self) -> usize {
        match self {
            Self::Hashes(hashes) => hashes.len(),
            Self::Full(txs) => txs.len(),
        }
    }

    /// Whether the page is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
