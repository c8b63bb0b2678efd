// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Delegations, validators and the staking state of the network.

use crate::method::endpoints;
use crate::model::{
    AddressBlockNumberParameters, AddressParameters, Delegation,
    MedianRawStakeSnapshot, PageBlockNumberParameters, PageParameters,
    StakingNetworkInfo, SuperCommittees, UtilityMetrics, ValidatorInformation,
};

// Delegation
endpoints! {
    /// Delegations made by an address.
    fn get_delegations_by_delegator(AddressParameters)
        as "hmyv2_getDelegationsByDelegator" => Vec<Delegation>;
    /// Delegations made by an address at a given block.
    fn get_delegations_by_delegator_by_block_number(
        AddressBlockNumberParameters
    ) as "hmyv2_getDelegationsByDelegatorByBlockNumber" => Vec<Delegation>;
    /// Delegations received by a validator.
    fn get_delegations_by_validator(AddressParameters)
        as "hmyv2_getDelegationsByValidator" => Vec<Delegation>;
}

// Validator
endpoints! {
    /// Addresses of every validator.
    fn get_all_validator_addresses()
        as "hmyv2_getAllValidatorAddresses" => Vec<String>;
    /// A page of validator information.
    fn get_all_validator_information(PageParameters)
        as "hmyv2_getAllValidatorInformation" => Vec<ValidatorInformation>;
    /// A page of validator information at a given block.
    fn get_all_validator_information_by_block_number(
        PageBlockNumberParameters
    ) as "hmyv2_getAllValidatorInformationByBlockNumber"
        => Vec<ValidatorInformation>;
    /// Addresses of the elected validators.
    fn get_elected_validator_addresses()
        as "hmyv2_getElectedValidatorAddresses" => Vec<String>;
    /// Information about one validator.
    fn get_validator_information(AddressParameters)
        as "hmyv2_getValidatorInformation" => ValidatorInformation;
}

// Network
endpoints! {
    /// Issuance figures of the current epoch.
    fn get_current_utility_metrics()
        as "hmyv2_getCurrentUtilityMetrics" => UtilityMetrics;
    /// Snapshot of the EPoS auction.
    fn get_median_raw_stake_snapshot()
        as "hmyv2_getMedianRawStakeSnapshot" => MedianRawStakeSnapshot;
    /// Network-wide supply and staking figures.
    fn get_staking_network_info()
        as "hmyv2_getStakingNetworkInfo" => StakingNetworkInfo;
    /// Previously and currently elected committees.
    fn get_super_committees()
        as "hmyv2_getSuperCommittees" => SuperCommittees;
}
