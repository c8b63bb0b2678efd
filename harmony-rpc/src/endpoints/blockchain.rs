// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Network state, node information and blocks.

use serde_json::Number;

use crate::method::endpoints;
use crate::model::{
    Atto, Block, BlockListParameters, BlockNumberParameters, CrossLink,
    EpochNumberParameters, GetBlockByHashParameters,
    GetBlockByNumberParameters, HashParameters, Header, HexQuantity,
    LatestChainHeaders, NodeMetadata, ShardingStructure, ValidatorIds,
};

// Network
endpoints! {
    /// Current block number.
    fn block_number() as "hmyv2_blockNumber" => u64;
    /// Number of tokens in circulation, in ONE.
    fn get_circulating_supply() as "hmyv2_getCirculatingSupply" => Number;
    /// Current epoch.
    fn get_epoch() as "hmyv2_getEpoch" => u64;
    /// Latest cross links of every shard.
    fn get_last_cross_links() as "hmyv2_getLastCrossLinks" => Vec<CrossLink>;
    /// Wallet address of the current leader.
    fn get_leader() as "hmyv2_getLeader" => String;
    /// Average gas price of recent transactions, in Atto.
    fn gas_price() as "hmyv2_gasPrice" => Atto;
    /// Endpoints of every shard.
    fn get_sharding_structure()
        as "hmyv2_getShardingStructure" => Vec<ShardingStructure>;
    /// Number of pre-mined tokens, in ONE.
    fn get_total_supply() as "hmyv2_getTotalSupply" => Number;
    /// Validators of the queried shard for an epoch.
    fn get_validators(EpochNumberParameters)
        as "hmyv2_getValidators" => ValidatorIds;
    /// BLS keys of the elected committee for an epoch.
    fn get_validator_keys(EpochNumberParameters)
        as "hmyv2_getValidatorKeys" => Vec<String>;
}

// Node
endpoints! {
    /// Bad blocks kept in the node memory.
    fn get_current_bad_blocks() as "hmyv2_getCurrentBadBlocks" => Vec<String>;
    /// Metadata of the node.
    fn get_node_metadata() as "hmyv2_getNodeMetadata" => NodeMetadata;
    /// Protocol version of the node.
    fn protocol_version() as "hmyv2_protocolVersion" => u64;
    /// Number of peers, as a hex quantity.
    fn peer_count() as "net_peerCount" => HexQuantity;
}

// Blocks
endpoints! {
    /// Blocks in a range.
    fn get_blocks(BlockListParameters) as "hmyv2_getBlocks" => Vec<Block>;
    /// Block by number.
    fn get_block_by_number(GetBlockByNumberParameters)
        as "hmyv2_getBlockByNumber" => Block;
    /// Block by hash.
    fn get_block_by_hash(GetBlockByHashParameters)
        as "hmyv2_getBlockByHash" => Block;
    /// Wallet addresses of the signers of a block.
    fn get_block_signers(BlockNumberParameters)
        as "hmyv2_getBlockSigners" => Vec<String>;
    /// BLS keys of the signers of a block.
    fn get_block_signers_keys(BlockNumberParameters)
        as "hmyv2_getBlockSignersKeys" => Vec<String>;
    /// Number of transactions in a block identified by number.
    fn get_block_transaction_count_by_number(BlockNumberParameters)
        as "hmyv2_getBlockTransactionCountByNumber" => u64;
    /// Number of transactions in a block identified by hash.
    fn get_block_transaction_count_by_hash(HashParameters)
        as "hmyv2_getBlockTransactionCountByHash" => u64;
    /// Header of a block.
    fn get_header_by_number(BlockNumberParameters)
        as "hmyv2_getHeaderByNumber" => Header;
    /// Tips of the beacon chain and of the shard chain.
    fn get_latest_chain_headers()
        as "hmyv2_getLatestChainHeaders" => LatestChainHeaders;
    /// Header of the latest block.
    fn latest_header() as "hmyv2_latestHeader" => Header;
}
