// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Cross shard receipts, the transaction pool, staking transactions and
//! transfers.

use crate::method::endpoints;
use crate::model::{
    BlockNumberAndIndexParameters, CxReceipt, HashAndIndexParameters,
    HashParameters, PendingCxReceipt, PoolStats, RawTransactionParameters,
    StakingError, StakingTransaction, Transaction, TransactionError,
    TransactionReceipt,
};

// Cross shard
endpoints! {
    /// Receipt of a cross shard transaction.
    fn get_cx_receipt_by_hash(HashParameters)
        as "hmyv2_getCXReceiptByHash" => CxReceipt;
    /// Receipts pending on the queried shard.
    fn get_pending_cx_receipts()
        as "hmyv2_getPendingCXReceipts" => Vec<PendingCxReceipt>;
    /// Resend a cross shard receipt. The result tells whether it was resent.
    fn resend_cx(HashParameters) as "hmyv2_resendCx" => bool;
}

// Transaction pool
endpoints! {
    /// Size of the transaction pool.
    fn get_pool_stats() as "hmyv2_getPoolStats" => PoolStats;
    /// Staking transactions waiting in the pool.
    fn pending_staking_transactions()
        as "hmyv2_pendingStakingTransactions" => Vec<StakingTransaction>;
    /// Plain transactions waiting in the pool.
    fn pending_transactions()
        as "hmyv2_pendingTransactions" => Vec<Transaction>;
}

// Staking transactions
endpoints! {
    /// Staking transactions rejected by the pool.
    fn get_current_staking_error_sink()
        as "hmyv2_getCurrentStakingErrorSink" => Vec<StakingError>;
    /// Staking transaction at an index of a block identified by number.
    fn get_staking_transaction_by_block_number_and_index(
        BlockNumberAndIndexParameters
    ) as "hmyv2_getStakingTransactionByBlockNumberAndIndex"
        => StakingTransaction;
    /// Staking transaction at an index of a block identified by hash.
    fn get_staking_transaction_by_block_hash_and_index(HashAndIndexParameters)
        as "hmyv2_getStakingTransactionByBlockHashAndIndex"
        => StakingTransaction;
    /// Staking transaction by hash.
    fn get_staking_transaction_by_hash(HashParameters)
        as "hmyv2_getStakingTransactionByHash" => StakingTransaction;
    /// Submit a signed staking transaction. The result is its hash.
    fn send_raw_staking_transaction(RawTransactionParameters)
        as "hmyv2_sendRawStakingTransaction" => String;
}

// Transfers
endpoints! {
    /// Plain transactions rejected by the pool.
    fn get_current_transaction_error_sink()
        as "hmyv2_getCurrentTransactionErrorSink" => Vec<TransactionError>;
    /// Transaction at an index of a block identified by hash.
    fn get_transaction_by_block_hash_and_index(HashAndIndexParameters)
        as "hmyv2_getTransactionByBlockHashAndIndex" => Transaction;
    /// Transaction at an index of a block identified by number.
    fn get_transaction_by_block_number_and_index(
        BlockNumberAndIndexParameters
    ) as "hmyv2_getTransactionByBlockNumberAndIndex" => Transaction;
    /// Transaction by hash.
    fn get_transaction_by_hash(HashParameters)
        as "hmyv2_getTransactionByHash" => Transaction;
    /// Receipt of an executed transaction.
    fn get_transaction_receipt(HashParameters)
        as "hmyv2_getTransactionReceipt" => TransactionReceipt;
    /// Submit a signed transaction. The result is its hash.
    fn send_raw_transaction(RawTransactionParameters)
        as "hmyv2_sendRawTransaction" => String;
}
