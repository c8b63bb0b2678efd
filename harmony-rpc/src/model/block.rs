// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Block models
//!
//! Blocks and block headers. The content of `transactions` and
//! `stakingTransactions` depends on the block config of the request (hashes
//! or full objects), so it is kept as raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A block of a shard chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Unused, legacy from Ethereum
    pub difficulty: u64,
    /// Epoch of the block
    pub epoch: u64,
    /// Hex representation of the extra data
    pub extra_data: String,
    /// Maximum gas usable by the transactions of the block
    pub gas_limit: u64,
    /// Gas used by the transactions of the block
    pub gas_used: u64,
    /// Block hash
    pub hash: String,
    /// Bloom filter of the logs
    pub logs_bloom: String,
    /// Wallet address of the leader that proposed the block
    pub miner: String,
    /// Unused, legacy from Ethereum
    pub mix_hash: String,
    /// Unused, legacy from Ethereum
    pub nonce: u64,
    /// Block number
    pub number: u64,
    /// Hash of the parent block
    pub parent_hash: String,
    /// Root hash of the transaction receipts
    pub receipts_root: String,
    /// Block size in bytes
    pub size: u64,
    /// Staking transactions finalized in the block
    pub staking_transactions: Vec<Value>,
    /// Root hash of the state
    pub state_root: String,
    /// Unix timestamp of the block
    pub timestamp: u64,
    /// Transactions finalized in the block
    pub transactions: Vec<Value>,
    /// Root hash of the transactions
    pub transactions_root: String,
    /// Unused, legacy from Ethereum
    pub uncles: Vec<Value>,
    /// View ID
    #[serde(rename = "viewID")]
    pub view_id: u64,
}

/// Header of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Block hash
    pub block_hash: String,
    /// Block number
    pub block_number: u64,
    /// Shard ID
    #[serde(rename = "shardID")]
    pub shard_id: u32,
    /// Wallet address of the leader before staking, otherwise the sha256
    /// hash of the leader's BLS public key
    pub leader: String,
    /// View ID
    #[serde(rename = "viewID")]
    pub view_id: u64,
    /// Epoch of the block
    pub epoch: u64,
    /// Timestamp at which the block was finalized
    pub timestamp: u64,
    /// Timestamp at which the block was finalized, in Unix time
    pub unixtime: u64,
    /// Hex representation of the aggregated signature of the previous block
    pub last_commit_sig: String,
    /// Hex representation of the aggregated signature bitmap of the
    /// previous block
    pub last_commit_bitmap: String,
}

/// Compact header of the tip of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChainHeader {
    /// Shard ID
    pub shard_id: u32,
    /// Block header hash
    pub block_header_hash: String,
    /// Block number
    pub block_number: u64,
    /// View ID
    pub view_id: u64,
    /// Epoch number
    pub epoch: u64,
}

/// Tips of the beacon chain and of the shard chain of the queried node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LatestChainHeaders {
    /// Beacon chain tip
    pub beacon_chain_header: ChainHeader,
    /// Shard chain tip
    pub shard_chain_header: ChainHeader,
}
