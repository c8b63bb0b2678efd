// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Network and node models
//!
//! Results of the blockchain network and node methods: cross links, the
//! sharding layout, the validator set of an epoch and node metadata.

use serde::{Deserialize, Serialize};

use crate::model::Atto;

/// A cross link, committing a shard block to the beacon chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CrossLink {
    /// Parent block hash
    pub hash: String,
    /// Block number
    pub block_number: u64,
    /// View ID
    pub view_id: u64,
    /// Hex representation of the aggregated signature
    pub signature: String,
    /// Hex representation of the aggregated signature bitmap
    pub signature_bitmap: String,
    /// Shard ID
    pub shard_id: u32,
    /// Block epoch
    pub epoch_number: u64,
}

/// Endpoints of one shard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardingStructure {
    /// Whether the queried node is on this shard
    pub current: bool,
    /// HTTP API endpoint of the shard
    pub http: String,
    /// Shard ID
    #[serde(rename = "shardID")]
    pub shard_id: u32,
    /// Websocket API endpoint of the shard
    pub ws: String,
}

/// A validator address with its balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorAddress {
    /// Wallet address
    pub address: String,
    /// Balance of the wallet, in Atto
    pub balance: Atto,
}

/// Validators of a shard for a given epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorIds {
    /// Shard ID
    #[serde(rename = "shardID")]
    pub shard_id: u32,
    /// Validators of the shard
    pub validators: Vec<ValidatorAddress>,
}

/// Epochs at which protocol features were enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChainConfig {
    /// Chain ID of the network
    pub chain_id: u64,
    /// Cross shard transactions
    pub cross_tx_epoch: u64,
    /// Cross links
    pub cross_link_epoch: u64,
    /// Staking
    pub staking_epoch: u64,
    /// Pre-staking
    pub prestaking_epoch: u64,
    /// Undelegations unlocking in one epoch
    pub quick_unlock_epoch: u64,
    /// EIP155
    pub eip155_epoch: u64,
    /// Mainnet V0 launch
    pub s3_epoch: u64,
    /// Receipt logs
    pub receipt_log_epoch: u64,
}

/// Peer connectivity of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct P2PConnectivity {
    /// Number of known peers
    pub total_known_peers: u64,
    /// Number of connected peers
    pub connected: u64,
    /// Number of known peers not connected
    pub not_connected: u64,
}

/// Metadata of the queried node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeMetadata {
    /// BLS keys running on the node
    pub blskey: Vec<String>,
    /// Harmony binary version
    pub version: String,
    /// Network name (mainnet, testnet, ...)
    pub network: String,
    /// Feature activation epochs
    pub chain_config: ChainConfig,
    /// Whether the node is currently leader
    pub is_leader: bool,
    /// Shard the node is on
    pub shard_id: u32,
    /// Current epoch
    pub current_epoch: u64,
    /// Blocks per epoch, only meaningful on shard 0
    pub blocks_per_epoch: u64,
    /// Node type (Validator or ExplorerNode)
    pub role: String,
    /// DNS zone
    pub dns_zone: String,
    /// Whether the node keeps the full state history
    pub is_archival: bool,
    /// Start time of the node, in Unix time
    pub node_unix_start_time: u64,
    /// Peer connectivity
    pub p2p_connectivity: P2PConnectivity,
}
