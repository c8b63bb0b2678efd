// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use harmony_rpc::model::BlockConfig;
use harmony_rpc::{BlockSelector, Error, HarmonyClient};
use serde::Serialize;
use serde_json::json;

/// Items whose current status can be queried
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusOption {
    /// Node metadata
    Metadata,
    /// Number of peers
    Peers,
    /// Protocol version
    Protocol,
    /// Bad blocks in the node memory
    BadBlocks,
    /// Average gas price
    GasPrice,
    /// Tokens in circulation
    CirculatingSupply,
    /// Pre-mined tokens
    TotalSupply,
    /// Latest block number
    BlockNumber,
    /// Latest block header
    BlockHeader,
    /// Latest block
    Block,
    /// Current leader
    Leader,
    /// Shard endpoints
    ShardingStructure,
    /// Current epoch
    Epoch,
    /// Issuance and staking ratio
    UtilityMetrics,
    /// Network-wide staking figures
    StakingNetworkInfo,
    /// Elected committees
    SuperCommittees,
    /// EPoS auction snapshot
    MedianStake,
    /// Transaction pool size
    TxPoolStats,
    /// Transactions waiting in the pool
    PendingTxs,
    /// Staking transactions waiting in the pool
    PendingStakingTxs,
    /// Beacon and shard chain tips
    ChainHeader,
    /// Every validator address
    Validators,
    /// Transactions rejected by the pool
    TxErrors,
    /// Staking transactions rejected by the pool
    StakingTxErrors,
    /// Elected validator addresses
    Elected,
}

type Query = fn(&HarmonyClient) -> Result<String, Error>;

fn show<T: Serialize>(result: Result<T, Error>) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&result?)?)
}

fn peers(client: &HarmonyClient) -> Result<String, Error> {
    let peers = client.peer_count()?;
    let count = peers.to_u64()?;
    show(Ok(json!({ "count": count, "hex": peers.as_str() })))
}

fn latest_block(client: &HarmonyClient) -> Result<String, Error> {
    let number = client.current_block_number()?;
    show(client.get_block(BlockSelector::ByNumber(number), BlockConfig::default()))
}

const QUERIES: &[(StatusOption, Query)] = &[
    (StatusOption::Metadata, |c| show(c.node_metadata())),
    (StatusOption::Peers, peers),
    (StatusOption::Protocol, |c| show(c.protocol_version())),
    (StatusOption::BadBlocks, |c| show(c.current_bad_blocks())),
    (StatusOption::GasPrice, |c| show(c.current_gas_price())),
    (StatusOption::CirculatingSupply, |c| show(c.circulating_supply())),
    (StatusOption::TotalSupply, |c| show(c.total_supply())),
    (StatusOption::BlockNumber, |c| show(c.current_block_number())),
    (StatusOption::BlockHeader, |c| show(c.block_header(None))),
    (StatusOption::Block, latest_block),
    (StatusOption::Leader, |c| show(c.current_leader())),
    (StatusOption::ShardingStructure, |c| show(c.sharding_structure())),
    (StatusOption::Epoch, |c| show(c.current_epoch())),
    (StatusOption::UtilityMetrics, |c| show(c.current_utility_metrics())),
    (StatusOption::StakingNetworkInfo, |c| show(c.staking_network_info())),
    (StatusOption::SuperCommittees, |c| show(c.latest_super_committees())),
    (StatusOption::MedianStake, |c| show(c.median_raw_stake_snapshot())),
    (StatusOption::TxPoolStats, |c| show(c.transaction_pool_stats())),
    (StatusOption::PendingTxs, |c| show(c.pending_transactions())),
    (StatusOption::PendingStakingTxs, |c| {
        show(c.pending_staking_transactions())
    }),
    (StatusOption::ChainHeader, |c| show(c.latest_chain_headers())),
    (StatusOption::Validators, |c| show(c.get_all_validators())),
    (StatusOption::TxErrors, |c| show(c.current_transaction_error_sink())),
    (StatusOption::StakingTxErrors, |c| {
        show(c.current_staking_transaction_error_sink())
    }),
    (StatusOption::Elected, |c| show(c.get_all_elected_validators())),
];

impl StatusOption {
    /// Query the node for this item, returning pretty printed JSON.
    pub(crate) fn query(self, client: &HarmonyClient) -> Result<String, Error> {
        let (_, query) = QUERIES
            .iter()
            .find(|(option, _)| *option == self)
            .ok_or_else(|| {
                Error::InvalidParams(format!("no query for {self:?}"))
            })?;

        query(client)
    }
}
