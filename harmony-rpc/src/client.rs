// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use serde_json::Number;

use crate::endpoints::{
    account, blockchain, smart_contract, staking, transaction,
};
use crate::model::{
    AddressBlockNumberParameters, AddressParameters, Atto, Block, BlockConfig,
    BlockListParameters, BlockNumberAndIndexParameters,
    BlockNumberParameters, BlocksListConfig, CallParameters, CrossLink,
    CxReceipt, Delegation, EpochNumberParameters, GetBlockByHashParameters,
    GetBlockByNumberParameters, GetCodeParameters, GetStorageAtParameters,
    HashAndIndexParameters, HashParameters, Header, HexQuantity, History,
    LatestChainHeaders, MedianRawStakeSnapshot, NodeMetadata,
    PageBlockNumberParameters, PageParameters, PendingCxReceipt, PoolStats,
    RawTransactionParameters, ShardingStructure, SmartContractCall,
    StakingError, StakingNetworkInfo, StakingTransaction, SuperCommittees,
    Transaction, TransactionError, TransactionReceipt, TransactionType,
    TransactionsCountParameters, TransactionsHistoryObject,
    TransactionsHistoryParameters, UtilityMetrics, ValidatorIds,
    ValidatorInformation,
};
use crate::transport::{HttpTransport, Transport};
use crate::{BlockSelector, Error};

/// Default block tag for code lookups.
pub const LATEST_BLOCK: &str = "latest";

/// Client of a single Harmony node.
///
/// `HarmonyClient` keeps one session open to the node and exposes every
/// supported method under a descriptive name. Results are unwrapped from
/// their envelope: an error object sent by the node becomes
/// [`Error::Node`], carrying the node's code and message unchanged.
///
/// Lookups that may legitimately find nothing (a transaction by hash, a
/// block by number, ...) return `Ok(None)` when the node answers `null`.
pub struct HarmonyClient {
    url: String,
    transport: Box<dyn Transport>,
}

impl HarmonyClient {
    /// Create a client talking to `url` over HTTP.
    ///
    /// # Errors
    /// This method errors if the HTTP client cannot be initialized.
    pub fn new<S: Into<String>>(url: S) -> Result<Self, Error> {
        Ok(Self::with_transport(url, HttpTransport::new()?))
    }

    /// Create a client talking to `url` through the given transport.
    pub fn with_transport<S, T>(url: S, transport: T) -> Self
    where
        S: Into<String>,
        T: Transport + 'static,
    {
        Self {
            url: url.into(),
            transport: Box::new(transport),
        }
    }

    /// Endpoint of the node.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn session(&self) -> Option<&dyn Transport> {
        Some(self.transport.as_ref())
    }

    /// Metadata of the node.
    pub fn node_metadata(&self) -> Result<NodeMetadata, Error> {
        blockchain::get_node_metadata(&self.url, self.session())?
            .into_result()
    }

    /// Number of peers of the node, as sent by the node.
    pub fn peer_count(&self) -> Result<HexQuantity, Error> {
        blockchain::peer_count(&self.url, self.session())?.into_result()
    }

    /// Protocol version of the node.
    pub fn protocol_version(&self) -> Result<u64, Error> {
        blockchain::protocol_version(&self.url, self.session())?.into_result()
    }

    /// Bad blocks kept in the node memory.
    pub fn current_bad_blocks(&self) -> Result<Vec<String>, Error> {
        blockchain::get_current_bad_blocks(&self.url, self.session())?
            .into_result()
    }

    /// Average gas price, in Atto.
    pub fn current_gas_price(&self) -> Result<Atto, Error> {
        blockchain::gas_price(&self.url, self.session())?.into_result()
    }

    /// Tokens in circulation, in ONE.
    pub fn circulating_supply(&self) -> Result<Number, Error> {
        blockchain::get_circulating_supply(&self.url, self.session())?
            .into_result()
    }

    /// Pre-mined tokens, in ONE.
    pub fn total_supply(&self) -> Result<Number, Error> {
        blockchain::get_total_supply(&self.url, self.session())?.into_result()
    }

    /// Number of the latest block.
    pub fn current_block_number(&self) -> Result<u64, Error> {
        blockchain::block_number(&self.url, self.session())?.into_result()
    }

    /// Wallet address of the current leader.
    pub fn current_leader(&self) -> Result<String, Error> {
        blockchain::get_leader(&self.url, self.session())?.into_result()
    }

    /// Endpoints of every shard.
    pub fn sharding_structure(&self) -> Result<Vec<ShardingStructure>, Error> {
        blockchain::get_sharding_structure(&self.url, self.session())?
            .into_result()
    }

    /// Latest cross links.
    pub fn last_cross_links(&self) -> Result<Vec<CrossLink>, Error> {
        blockchain::get_last_cross_links(&self.url, self.session())?
            .into_result()
    }

    /// Current epoch.
    pub fn current_epoch(&self) -> Result<u64, Error> {
        blockchain::get_epoch(&self.url, self.session())?.into_result()
    }

    /// Validators of the queried shard for `epoch_number`.
    pub fn validators_by_epoch(
        &self,
        epoch_number: u64,
    ) -> Result<ValidatorIds, Error> {
        let params = EpochNumberParameters { epoch_number };
        blockchain::get_validators(&self.url, &params, self.session())?
            .into_result()
    }

    /// BLS keys of the committee elected for `epoch_number`.
    pub fn validator_keys_by_epoch(
        &self,
        epoch_number: u64,
    ) -> Result<Vec<String>, Error> {
        let params = EpochNumberParameters { epoch_number };
        blockchain::get_validator_keys(&self.url, &params, self.session())?
            .into_result()
    }

    /// Issuance and staking ratio of the network.
    pub fn current_utility_metrics(&self) -> Result<UtilityMetrics, Error> {
        staking::get_current_utility_metrics(&self.url, self.session())?
            .into_result()
    }

    /// Network-wide staking figures.
    pub fn staking_network_info(&self) -> Result<StakingNetworkInfo, Error> {
        staking::get_staking_network_info(&self.url, self.session())?
            .into_result()
    }

    /// Previously and currently elected committees.
    pub fn latest_super_committees(&self) -> Result<SuperCommittees, Error> {
        staking::get_super_committees(&self.url, self.session())?
            .into_result()
    }

    /// Snapshot of the EPoS auction.
    pub fn median_raw_stake_snapshot(
        &self,
    ) -> Result<MedianRawStakeSnapshot, Error> {
        staking::get_median_raw_stake_snapshot(&self.url, self.session())?
            .into_result()
    }

    /// Size of the transaction pool.
    pub fn transaction_pool_stats(&self) -> Result<PoolStats, Error> {
        transaction::get_pool_stats(&self.url, self.session())?.into_result()
    }

    /// Staking transactions waiting in the pool.
    pub fn pending_staking_transactions(
        &self,
    ) -> Result<Vec<StakingTransaction>, Error> {
        transaction::pending_staking_transactions(&self.url, self.session())?
            .into_result()
    }

    /// Plain transactions waiting in the pool.
    pub fn pending_transactions(&self) -> Result<Vec<Transaction>, Error> {
        transaction::pending_transactions(&self.url, self.session())?
            .into_result()
    }

    /// Tips of the beacon chain and of the shard chain.
    pub fn latest_chain_headers(&self) -> Result<LatestChainHeaders, Error> {
        blockchain::get_latest_chain_headers(&self.url, self.session())?
            .into_result()
    }

    /// Header of the given block, or of the latest one.
    pub fn block_header(
        &self,
        block_number: Option<u64>,
    ) -> Result<Header, Error> {
        let envelope = match block_number {
            Some(block_number) => blockchain::get_header_by_number(
                &self.url,
                &BlockNumberParameters { block_number },
                self.session(),
            )?,
            None => blockchain::latest_header(&self.url, self.session())?,
        };
        envelope.into_result()
    }

    /// A block, by number or by hash.
    pub fn get_block(
        &self,
        block: BlockSelector,
        block_config: BlockConfig,
    ) -> Result<Option<Block>, Error> {
        let envelope = match block {
            BlockSelector::ByNumber(block_number) => {
                let params = GetBlockByNumberParameters {
                    block_number,
                    block_config,
                };
                blockchain::get_block_by_number(
                    &self.url,
                    &params,
                    self.session(),
                )?
            }
            BlockSelector::ByHash(hash) => {
                let params = GetBlockByHashParameters { hash, block_config };
                blockchain::get_block_by_hash(&self.url, &params, self.session())?
            }
        };
        envelope.into_optional()
    }

    /// Wallet addresses of the signers of a block.
    pub fn get_block_signers(
        &self,
        block_number: u64,
    ) -> Result<Vec<String>, Error> {
        let params = BlockNumberParameters { block_number };
        blockchain::get_block_signers(&self.url, &params, self.session())?
            .into_result()
    }

    /// BLS keys of the signers of a block.
    pub fn get_block_signer_keys(
        &self,
        block_number: u64,
    ) -> Result<Vec<String>, Error> {
        let params = BlockNumberParameters { block_number };
        blockchain::get_block_signers_keys(&self.url, &params, self.session())?
            .into_result()
    }

    /// Number of transactions in a block.
    pub fn get_transaction_count_on_block(
        &self,
        block: BlockSelector,
    ) -> Result<u64, Error> {
        let envelope = match block {
            BlockSelector::ByNumber(block_number) => {
                blockchain::get_block_transaction_count_by_number(
                    &self.url,
                    &BlockNumberParameters { block_number },
                    self.session(),
                )?
            }
            BlockSelector::ByHash(hash) => {
                blockchain::get_block_transaction_count_by_hash(
                    &self.url,
                    &HashParameters { hash },
                    self.session(),
                )?
            }
        };
        envelope.into_result()
    }

    /// Blocks between `start_block` and `end_block`.
    pub fn get_blocks(
        &self,
        start_block: u64,
        end_block: u64,
        blocks_config: BlocksListConfig,
    ) -> Result<Vec<Block>, Error> {
        let params = BlockListParameters {
            start_block,
            end_block,
            blocks_config,
        };
        blockchain::get_blocks(&self.url, &params, self.session())?
            .into_result()
    }

    /// Balance of an address, in Atto, at the latest block unless
    /// `block_number` is given.
    pub fn get_account_balance(
        &self,
        address: &str,
        block_number: Option<u64>,
    ) -> Result<Atto, Error> {
        let address = address.to_string();
        let envelope = match block_number {
            Some(block_number) => account::get_balance_by_block_number(
                &self.url,
                &AddressBlockNumberParameters {
                    address,
                    block_number,
                },
                self.session(),
            )?,
            None => account::get_balance(
                &self.url,
                &AddressParameters { address },
                self.session(),
            )?,
        };
        envelope.into_result()
    }

    /// Number of staking transactions of an address.
    pub fn get_account_staking_transaction_count(
        &self,
        address: &str,
        transaction_type: TransactionType,
    ) -> Result<u64, Error> {
        let params = TransactionsCountParameters {
            address: address.to_string(),
            transaction_type,
        };
        account::get_staking_transactions_count(
            &self.url,
            &params,
            self.session(),
        )?
        .into_result()
    }

    /// A page of the staking transaction history of an address.
    pub fn get_account_staking_transaction_history(
        &self,
        request: TransactionsHistoryObject,
    ) -> Result<History<StakingTransaction>, Error> {
        let params = TransactionsHistoryParameters { obj: request };
        account::get_staking_transactions_history(
            &self.url,
            &params,
            self.session(),
        )?
        .into_result()
    }

    /// Number of plain transactions of an address.
    pub fn get_account_transaction_count(
        &self,
        address: &str,
        transaction_type: TransactionType,
    ) -> Result<u64, Error> {
        let params = TransactionsCountParameters {
            address: address.to_string(),
            transaction_type,
        };
        account::get_transactions_count(&self.url, &params, self.session())?
            .into_result()
    }

    /// A page of the plain transaction history of an address.
    pub fn get_account_transaction_history(
        &self,
        request: TransactionsHistoryObject,
    ) -> Result<History<Transaction>, Error> {
        let params = TransactionsHistoryParameters { obj: request };
        account::get_transactions_history(&self.url, &params, self.session())?
            .into_result()
    }

    /// Plain transactions rejected by the pool.
    pub fn current_transaction_error_sink(
        &self,
    ) -> Result<Vec<TransactionError>, Error> {
        transaction::get_current_transaction_error_sink(
            &self.url,
            self.session(),
        )?
        .into_result()
    }

    /// A transaction by hash.
    pub fn get_transaction(
        &self,
        hash: &str,
    ) -> Result<Option<Transaction>, Error> {
        let params = HashParameters {
            hash: hash.to_string(),
        };
        transaction::get_transaction_by_hash(&self.url, &params, self.session())?
            .into_optional()
    }

    /// The transaction at `index` in a block.
    pub fn get_transaction_by_block(
        &self,
        index: u64,
        block: BlockSelector,
    ) -> Result<Option<Transaction>, Error> {
        let envelope = match block {
            BlockSelector::ByNumber(block_number) => {
                transaction::get_transaction_by_block_number_and_index(
                    &self.url,
                    &BlockNumberAndIndexParameters {
                        block_number,
                        index,
                    },
                    self.session(),
                )?
            }
            BlockSelector::ByHash(hash) => {
                transaction::get_transaction_by_block_hash_and_index(
                    &self.url,
                    &HashAndIndexParameters { hash, index },
                    self.session(),
                )?
            }
        };
        envelope.into_optional()
    }

    /// Receipt of a transaction.
    pub fn get_transaction_receipt(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionReceipt>, Error> {
        let params = HashParameters {
            hash: hash.to_string(),
        };
        transaction::get_transaction_receipt(&self.url, &params, self.session())?
            .into_optional()
    }

    /// Submit a signed transaction, returning its hash.
    pub fn send_raw_transaction(
        &self,
        transaction_hex: &str,
    ) -> Result<String, Error> {
        let params = RawTransactionParameters {
            transaction_hex: transaction_hex.to_string(),
        };
        transaction::send_raw_transaction(&self.url, &params, self.session())?
            .into_result()
    }

    /// Staking transactions rejected by the pool.
    pub fn current_staking_transaction_error_sink(
        &self,
    ) -> Result<Vec<StakingError>, Error> {
        transaction::get_current_staking_error_sink(&self.url, self.session())?
            .into_result()
    }

    /// A staking transaction by hash.
    pub fn get_staking_transaction(
        &self,
        hash: &str,
    ) -> Result<Option<StakingTransaction>, Error> {
        let params = HashParameters {
            hash: hash.to_string(),
        };
        transaction::get_staking_transaction_by_hash(
            &self.url,
            &params,
            self.session(),
        )?
        .into_optional()
    }

    /// The staking transaction at `index` in a block.
    pub fn get_staking_transaction_by_block(
        &self,
        index: u64,
        block: BlockSelector,
    ) -> Result<Option<StakingTransaction>, Error> {
        let envelope = match block {
            BlockSelector::ByNumber(block_number) => {
                transaction::get_staking_transaction_by_block_number_and_index(
                    &self.url,
                    &BlockNumberAndIndexParameters {
                        block_number,
                        index,
                    },
                    self.session(),
                )?
            }
            BlockSelector::ByHash(hash) => {
                transaction::get_staking_transaction_by_block_hash_and_index(
                    &self.url,
                    &HashAndIndexParameters { hash, index },
                    self.session(),
                )?
            }
        };
        envelope.into_optional()
    }

    /// Submit a signed staking transaction, returning its hash.
    pub fn send_raw_staking_transaction(
        &self,
        transaction_hex: &str,
    ) -> Result<String, Error> {
        let params = RawTransactionParameters {
            transaction_hex: transaction_hex.to_string(),
        };
        transaction::send_raw_staking_transaction(
            &self.url,
            &params,
            self.session(),
        )?
        .into_result()
    }

    /// Delegations made by an address, at the latest block unless
    /// `block_number` is given.
    pub fn get_delegations_by_delegator(
        &self,
        delegator_address: &str,
        block_number: Option<u64>,
    ) -> Result<Vec<Delegation>, Error> {
        let address = delegator_address.to_string();
        let envelope = match block_number {
            Some(block_number) => {
                staking::get_delegations_by_delegator_by_block_number(
                    &self.url,
                    &AddressBlockNumberParameters {
                        address,
                        block_number,
                    },
                    self.session(),
                )?
            }
            None => staking::get_delegations_by_delegator(
                &self.url,
                &AddressParameters { address },
                self.session(),
            )?,
        };
        envelope.into_result()
    }

    /// Delegations received by a validator.
    pub fn get_delegations_by_validator(
        &self,
        validator_address: &str,
    ) -> Result<Vec<Delegation>, Error> {
        let params = AddressParameters {
            address: validator_address.to_string(),
        };
        staking::get_delegations_by_validator(&self.url, &params, self.session())?
            .into_result()
    }

    /// Addresses of every validator.
    pub fn get_all_validators(&self) -> Result<Vec<String>, Error> {
        staking::get_all_validator_addresses(&self.url, self.session())?
            .into_result()
    }

    /// Addresses of the elected validators.
    pub fn get_all_elected_validators(&self) -> Result<Vec<String>, Error> {
        staking::get_elected_validator_addresses(&self.url, self.session())?
            .into_result()
    }

    /// Information about one validator.
    pub fn get_information_about_validator(
        &self,
        validator_address: &str,
    ) -> Result<ValidatorInformation, Error> {
        let params = AddressParameters {
            address: validator_address.to_string(),
        };
        staking::get_validator_information(&self.url, &params, self.session())?
            .into_result()
    }

    /// A page of validator information, `-1` for every validator. At the
    /// latest block unless `block_number` is given.
    pub fn get_all_validator_information(
        &self,
        page_number: i64,
        block_number: Option<u64>,
    ) -> Result<Vec<ValidatorInformation>, Error> {
        let envelope = match block_number {
            Some(block_number) => {
                staking::get_all_validator_information_by_block_number(
                    &self.url,
                    &PageBlockNumberParameters {
                        page_number,
                        block_number,
                    },
                    self.session(),
                )?
            }
            None => staking::get_all_validator_information(
                &self.url,
                &PageParameters { page_number },
                self.session(),
            )?,
        };
        envelope.into_result()
    }

    /// Receipt of a cross shard transaction.
    pub fn get_cx_receipt(
        &self,
        hash: &str,
    ) -> Result<Option<CxReceipt>, Error> {
        let params = HashParameters {
            hash: hash.to_string(),
        };
        transaction::get_cx_receipt_by_hash(&self.url, &params, self.session())?
            .into_optional()
    }

    /// Cross shard receipts pending on the queried shard.
    pub fn pending_cx_receipts(&self) -> Result<Vec<PendingCxReceipt>, Error> {
        transaction::get_pending_cx_receipts(&self.url, self.session())?
            .into_result()
    }

    /// Resend a cross shard receipt, returning whether it was resent.
    pub fn resend_cx_receipt(&self, hash: &str) -> Result<bool, Error> {
        let params = HashParameters {
            hash: hash.to_string(),
        };
        transaction::resend_cx(&self.url, &params, self.session())?
            .into_result()
    }

    /// Execute a read-only contract call at `block_number`, returning the
    /// hex encoded return value.
    pub fn call_smart_contract(
        &self,
        smart_contract_call: SmartContractCall,
        block_number: u64,
    ) -> Result<String, Error> {
        let params = CallParameters {
            smart_contract_call,
            block_number,
        };
        smart_contract::call(&self.url, &params, self.session())?.into_result()
    }

    /// Hex encoded gas estimate of a contract call.
    pub fn estimate_smart_contract_gas(
        &self,
        smart_contract_call: SmartContractCall,
        block_number: u64,
    ) -> Result<String, Error> {
        let params = CallParameters {
            smart_contract_call,
            block_number,
        };
        smart_contract::estimate_gas(&self.url, &params, self.session())?
            .into_result()
    }

    /// Code stored at `address`, at the [`LATEST_BLOCK`] unless `block` is
    /// given.
    pub fn get_smart_contract_code(
        &self,
        address: &str,
        block: Option<&str>,
        callback: Option<String>,
    ) -> Result<String, Error> {
        let params = GetCodeParameters {
            address: address.to_string(),
            block: block.unwrap_or(LATEST_BLOCK).to_string(),
            callback,
        };
        smart_contract::get_code(&self.url, &params, self.session())?
            .into_result()
    }

    /// Data stored at `storage_location` of a contract.
    pub fn get_value_at_smart_contract_storage(
        &self,
        address: &str,
        storage_location: &str,
        block_number: u64,
    ) -> Result<String, Error> {
        let params = GetStorageAtParameters {
            address: address.to_string(),
            storage_location: storage_location.to_string(),
            block_number,
        };
        smart_contract::get_storage_at(&self.url, &params, self.session())?
            .into_result()
    }
}
