// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Cross shard receipts and the proofs attached to them.

use serde::{Deserialize, Serialize};

use crate::model::Atto;

/// Receipt of a cross shard transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CxReceipt {
    /// Block hash
    pub block_hash: String,
    /// Block number
    pub block_number: u64,
    /// Transaction hash
    pub hash: String,
    /// Sender wallet address
    pub from: String,
    /// Receiver wallet address
    pub to: String,
    /// Source shard
    #[serde(rename = "shardID")]
    pub shard_id: u32,
    /// Destination shard
    #[serde(rename = "toShardID")]
    pub to_shard_id: u32,
    /// Amount transferred, in Atto
    pub value: Atto,
}

/// A receipt waiting to be delivered to its destination shard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Transaction hash
    pub tx_hash: String,
    /// Sender wallet address
    pub from: String,
    /// Receiver wallet address
    pub to: String,
    /// Source shard
    #[serde(rename = "shardID")]
    pub shard_id: u32,
    /// Destination shard
    #[serde(rename = "toShardID")]
    pub to_shard_id: u32,
    /// Amount transferred, in Atto
    pub amount: Atto,
}

/// Merkle proof of a batch of outgoing receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerkleProof {
    /// Block number
    pub block_number: u64,
    /// Block hash
    pub block_hash: String,
    /// Shard of the originating block
    #[serde(rename = "shardID")]
    pub shard_id: u32,
    /// Receipt hash
    pub receipt_hash: String,
    /// Destination shards
    #[serde(rename = "shardIDs")]
    pub shard_ids: Vec<u32>,
    /// Hashes of the receipts per destination shard
    #[serde(alias = "shardHashed")]
    pub shard_hashes: Vec<String>,
}

/// Header of the block the receipts originate from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CxBlockHeader {
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

/// A batch of receipts pending on the destination shard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingCxReceipt {
    /// Receipts of the batch
    pub receipts: Vec<Receipt>,
    /// Proof of inclusion of the batch
    pub merkle_proof: MerkleProof,
    /// Header of the originating block
    pub header: CxBlockHeader,
    /// Hex representation of the aggregated signature
    pub commit_sig: String,
    /// Hex representation of the aggregated signature bitmap
    pub commit_bit_map: String,
}
