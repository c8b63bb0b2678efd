// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Staking models
//!
//! Delegations, validator information and the network-wide staking state
//! (utility metrics, EPoS auction snapshot, elected committees).
//!
//! Decimal figures such as rates and percentages are sent by the node as
//! strings and kept that way; amounts in Atto are parsed as [`Atto`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::Atto;

/// A delegation from a delegator to a validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Delegation {
    /// Validator wallet address
    pub validator_address: String,
    /// Delegator wallet address
    pub delegator_address: String,
    /// Amount delegated, in Atto
    pub amount: Atto,
    /// Unclaimed rewards, in Atto
    pub reward: Atto,
    /// Pending undelegations
    pub undelegations: Vec<Map<String, Value>>,
}

/// Stake and voting share of a BLS key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Key {
    /// BLS public key
    pub bls_public_key: String,
    /// Voting power of the key in its shard
    pub group_percent: String,
    /// Effective stake of the key
    pub effective_stake: String,
    /// Actual stake of the key
    pub raw_stake: String,
    /// Validator wallet address
    pub earning_account: String,
    /// Share of the total effective stake
    pub overall_percent: String,
    /// Shard the key is on
    pub shard_id: u32,
}

/// Earnings of a BLS key in the current epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BlsKey {
    /// Key details
    pub key: Key,
    /// Reward earned by the key, in Atto
    pub earned_reward: Atto,
}

/// Earning metrics of a validator for the current epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Metrics {
    /// Metrics per BLS key
    pub by_bls_key: Vec<BlsKey>,
}

/// Signing record of a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SignedBlocks {
    /// Blocks the validator could sign
    pub to_sign: u64,
    /// Blocks the validator signed
    pub signed: u64,
}

/// Return rate over one epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochApr {
    /// Epoch number
    pub epoch: u64,
    /// APR computed for the epoch
    pub value: String,
}

/// Lifetime record of a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Lifetime {
    /// Reward accumulated since creation, in Atto
    pub reward_accumulated: Atto,
    /// Signing record
    pub blocks: SignedBlocks,
    /// Approximate return rate
    pub apr: String,
    /// APR per epoch
    pub epoch_apr: Vec<EpochApr>,
}

/// Everything the node knows about a validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ValidatorInformation {
    /// BLS public keys of the validator
    pub bls_public_keys: Vec<String>,
    /// Last epoch any key of the validator was elected
    pub last_epoch_in_committee: u64,
    /// Amount the validator must self-delegate, in Atto
    pub min_self_delegation: Atto,
    /// Delegation cap, in Atto
    pub max_total_delegation: Atto,
    /// Current commission rate
    pub rate: String,
    /// Highest commission rate the validator can charge
    pub max_rate: String,
    /// Highest commission increase over one epoch
    pub max_change_rate: String,
    /// Last block at which the validator edited its information
    pub update_height: u64,
    /// Display name
    pub name: String,
    /// Unique identity
    pub identity: String,
    /// Website
    pub website: String,
    /// Contact of the validator
    #[serde(alias = "security-contract")]
    pub security_contact: String,
    /// Free-form details
    pub details: String,
    /// Block in which the validator was created
    pub creation_height: u64,
    /// Validator wallet address
    pub address: String,
    /// Delegations received
    pub delegations: Vec<Delegation>,
    /// Earning metrics of the current epoch
    pub metrics: Metrics,
    /// Total amount delegated, in Atto
    pub total_delegation: Atto,
    /// Whether a key of the validator is currently elected
    pub currently_in_committee: bool,
    /// Election status for the current and next epoch
    pub epos_status: String,
    /// Total effective stake
    pub epos_winning_stake: String,
    /// Ban status
    pub booted_status: String,
    /// Active or inactive
    pub active_status: String,
    /// Lifetime record
    pub lifetime: Lifetime,
}

/// Issuance and staking ratio of the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UtilityMetrics {
    /// Total block reward given out, in Atto
    pub accumulator_snapshot: Atto,
    /// Share of the circulating supply that is staked
    pub current_staked_percentage: String,
    /// Change of the staked share
    pub deviation: String,
    /// Change of the staked circulating supply
    pub adjustment: String,
}

/// A committee slot won in the EPoS auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EposSlotWinner {
    /// Wallet address owning the key
    pub slot_owner: String,
    /// BLS public key
    pub bls_public_key: String,
    /// Actual stake
    pub raw_stake: String,
    /// Effective stake
    pub eposed_stake: String,
}

/// A validator taking part in the EPoS auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EposSlotCandidate {
    /// Actual stake, in Atto
    pub stake: Atto,
    /// BLS public keys at auction
    pub keys_at_auction: Vec<String>,
    /// Share of the total stake at auction
    pub percentage_of_total_auction_stake: String,
    /// Stake per key, in Atto
    pub stake_per_key: Atto,
    /// Validator wallet address
    pub validator: String,
}

/// Snapshot of the EPoS auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MedianRawStakeSnapshot {
    /// Effective median stake
    pub epos_median_stake: String,
    /// Number of available committee slots
    pub max_eternal_slots: u64,
    /// Slot winners
    pub epos_slot_winners: Vec<EposSlotWinner>,
    /// Auction candidates
    pub epos_slot_candidates: Vec<EposSlotCandidate>,
}

/// Network-wide staking figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StakingNetworkInfo {
    /// Total number of pre-mined tokens
    pub total_supply: String,
    /// Tokens in circulation
    pub circulating_supply: String,
    /// Last block of the current epoch
    pub epoch_last_block: u64,
    /// Total amount staked, in Atto
    pub total_staking: Atto,
    /// Effective median stake, in Atto
    pub median_raw_stake: String,
}

/// A BLS key of an elected committee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommitteeMember {
    /// Whether the slot is owned by Harmony
    pub is_harmony_slot: bool,
    /// Wallet address receiving the rewards
    pub earning_account: String,
    /// BLS public key
    pub bls_public_key: String,
    /// Raw voting power
    pub voting_power_unnormalized: String,
    /// Normalized voting power
    #[serde(rename = "voting-power-%")]
    pub voting_power_percent: String,
}

/// The committee of one shard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommitteeShard {
    /// Election policy
    pub policy: String,
    /// Number of BLS keys in the committee
    pub count: u64,
    /// Number of keys owned by external validators
    pub external_validator_slot_count: u64,
    /// Members of the committee
    pub committee_members: Vec<CommitteeMember>,
}

/// Committees of every shard for one epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ElectedCommittee {
    /// Committee per shard, keyed by shard name
    pub quorum_deciders: BTreeMap<String, CommitteeShard>,
}

/// Previously and currently elected committees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperCommittees {
    /// Committee of the previous epoch
    pub previous: ElectedCommittee,
    /// Committee of the current epoch
    pub current: ElectedCommittee,
}
