// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Request and response models
//!
//! Plain data mirroring the parameters and results of the Harmony node
//! methods. Result models are only ever built by deserializing a node
//! response; field names follow the node's JSON keys through serde renames.
//!
//! ## Modules
//!
//! - [`params`]: positional parameters of every method.
//! - [`block`]: blocks and headers.
//! - [`transaction`]: plain and staking transactions, receipts, pool state.
//! - [`cross_shard`]: cross shard receipts.
//! - [`staking`]: delegations, validators and committees.
//! - [`network`]: sharding layout, cross links, node metadata.
//! - [`quantity`]: hex encoded quantities.

pub mod block;
pub mod cross_shard;
pub mod network;
pub mod params;
pub mod quantity;
pub mod staking;
pub mod transaction;

pub use block::{Block, ChainHeader, Header, LatestChainHeaders};
pub use cross_shard::{
    CxBlockHeader, CxReceipt, MerkleProof, PendingCxReceipt, Receipt,
};
pub use network::{
    ChainConfig, CrossLink, NodeMetadata, P2PConnectivity, ShardingStructure,
    ValidatorAddress, ValidatorIds,
};
pub use params::*;
pub use quantity::HexQuantity;
pub use staking::{
    BlsKey, CommitteeMember, CommitteeShard, Delegation, ElectedCommittee,
    EpochApr, EposSlotCandidate, EposSlotWinner, Key, Lifetime,
    MedianRawStakeSnapshot, Metrics, SignedBlocks, StakingNetworkInfo,
    SuperCommittees, UtilityMetrics, ValidatorInformation,
};
pub use transaction::{
    History, PoolStats, StakingError, StakingTransaction, Transaction,
    TransactionError, TransactionReceipt,
};

/// Amounts of ONE, expressed in Atto (10^-18 ONE).
pub type Atto = u128;
