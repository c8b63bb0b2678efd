// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Account balances, transaction counts and histories.

use crate::Error;
use crate::jsonrpc::Envelope;
use crate::method::{call, endpoints};
use crate::model::{
    AddressBlockNumberParameters, AddressParameters, Atto, History,
    StakingTransaction, Transaction, TransactionsCountParameters,
    TransactionsHistoryParameters,
};
use crate::transport::Transport;

endpoints! {
    /// Balance of an address at the latest block, in Atto.
    fn get_balance(AddressParameters) as "hmyv2_getBalance" => Atto;
    /// Balance of an address at a given block, in Atto.
    fn get_balance_by_block_number(AddressBlockNumberParameters)
        as "hmyv2_getBalanceByBlockNumber" => Atto;
    /// Number of staking transactions of an address.
    fn get_staking_transactions_count(TransactionsCountParameters)
        as "hmyv2_getStakingTransactionsCount" => u64;
    /// Number of plain transactions of an address.
    fn get_transactions_count(TransactionsCountParameters)
        as "hmyv2_getTransactionsCount" => u64;
}

/// A page of the staking transaction history of an address.
///
/// The result holds full staking transactions when `fullTx` is set in the
/// request, transaction hashes otherwise.
///
/// # Errors
/// This function errors if the request fails or if the response does not
/// match the requested shape.
pub fn get_staking_transactions_history(
    api_url: &str,
    params: &TransactionsHistoryParameters,
    session: Option<&dyn Transport>,
) -> Result<Envelope<History<StakingTransaction>>, Error> {
    history(api_url, "hmyv2_getStakingTransactionsHistory", params, session)
}

/// A page of the plain transaction history of an address.
///
/// The result holds full transactions when `fullTx` is set in the request,
/// transaction hashes otherwise.
///
/// # Errors
/// This function errors if the request fails or if the response does not
/// match the requested shape.
pub fn get_transactions_history(
    api_url: &str,
    params: &TransactionsHistoryParameters,
    session: Option<&dyn Transport>,
) -> Result<Envelope<History<Transaction>>, Error> {
    history(api_url, "hmyv2_getTransactionsHistory", params, session)
}

fn history<T: serde::de::DeserializeOwned>(
    api_url: &str,
    method: &str,
    params: &TransactionsHistoryParameters,
    session: Option<&dyn Transport>,
) -> Result<Envelope<History<T>>, Error> {
    if params.obj.full_tx {
        let envelope: Envelope<Vec<T>> =
            call(api_url, method, Some(params), session)?;
        Ok(envelope.map(History::Full))
    } else {
        let envelope: Envelope<Vec<String>> =
            call(api_url, method, Some(params), session)?;
        Ok(envelope.map(History::Hashes))
    }
}
