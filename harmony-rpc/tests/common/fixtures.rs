// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Node responses captured from a localnet, trimmed down.

use serde_json::{Value, json};

pub const ADDRESS: &str = "one1wmudztmxynm38vkc3998fxkeymmczg6st7sf83";
pub const VALIDATOR: &str = "one103q7qe5t2505lypvltkqtddaef5tzfxwsse4z7";
pub const BLOCK_HASH: &str =
    "0x7e5f4e8c6f9a5d6cc1d1b1f4cbf2d6d0e0b3c6ae13cdbdb7e7df7a5e1b0a2d11";
pub const TX_HASH: &str =
    "0x5dfd3fbcbb1b36ef5ed2e3a1a2c6ff9c28b3b1e1f2c6e1d65d0a7f8b5c2b9e01";

pub fn block() -> Value {
    json!({
        "difficulty": 0,
        "epoch": 10,
        "extraData": "0x",
        "gasLimit": 80000000,
        "gasUsed": 21000,
        "hash": BLOCK_HASH,
        "logsBloom": "0x00",
        "miner": VALIDATOR,
        "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "nonce": 0,
        "number": 1234,
        "parentHash": "0x11",
        "receiptsRoot": "0x22",
        "size": 1076,
        "stakingTransactions": [],
        "stateRoot": "0x33",
        "timestamp": 1_607_000_000u64,
        "transactions": [TX_HASH],
        "transactionsRoot": "0x44",
        "uncles": [],
        "viewID": 1240
    })
}

pub fn header() -> Value {
    json!({
        "blockHash": BLOCK_HASH,
        "blockNumber": 1234,
        "shardID": 0,
        "leader": VALIDATOR,
        "viewID": 1240,
        "epoch": 10,
        "timestamp": 1_607_000_000u64,
        "unixtime": 1_607_000_000u64,
        "lastCommitSig": "0xaa",
        "lastCommitBitmap": "0xff"
    })
}

pub fn latest_chain_headers() -> Value {
    let tip = |shard: u32| {
        json!({
            "shard-id": shard,
            "block-header-hash": BLOCK_HASH,
            "block-number": 1234,
            "view-id": 1240,
            "epoch": 10
        })
    };
    json!({
        "beacon-chain-header": tip(0),
        "shard-chain-header": tip(1)
    })
}

pub fn node_metadata() -> Value {
    json!({
        "blskey": ["65f55eb3052f9e9f632b2923be594ba77c55543f5c58ee1454b9cfd658d25e06373b0f7d42a19c84768139ea294f6204"],
        "version": "Harmony (C) 2020. harmony, version v6916-v2.3.5",
        "network": "localnet",
        "chain-config": {
            "chain-id": 2,
            "cross-tx-epoch": 0,
            "cross-link-epoch": 2,
            "staking-epoch": 2,
            "prestaking-epoch": 0,
            "quick-unlock-epoch": 0,
            "eip155-epoch": 0,
            "s3-epoch": 0,
            "receipt-log-epoch": 0
        },
        "is-leader": true,
        "shard-id": 0,
        "current-epoch": 10,
        "blocks-per-epoch": 32,
        "role": "Validator",
        "dns-zone": "",
        "is-archival": false,
        "node-unix-start-time": 1_607_000_000u64,
        "p2p-connectivity": {
            "total-known-peers": 12,
            "connected": 10,
            "not-connected": 2
        }
    })
}

pub fn sharding_structure() -> Value {
    json!([
        {
            "current": true,
            "http": "http://127.0.0.1:9500",
            "shardID": 0,
            "ws": "ws://127.0.0.1:9800"
        },
        {
            "current": false,
            "http": "http://127.0.0.1:9501",
            "shardID": 1,
            "ws": "ws://127.0.0.1:9801"
        }
    ])
}

pub fn validators() -> Value {
    json!({
        "shardID": 0,
        "validators": [{"address": VALIDATOR, "balance": 10_000_000_000_000_000_000u64}]
    })
}

pub fn transaction() -> Value {
    json!({
        "blockHash": BLOCK_HASH,
        "blockNumber": 1234,
        "from": ADDRESS,
        "timestamp": 1_607_000_000u64,
        "gas": 21000,
        "gasPrice": 1_000_000_000u64,
        "hash": TX_HASH,
        "input": "0x",
        "nonce": 3,
        "to": VALIDATOR,
        "transactionIndex": 0,
        "value": 1_000_000_000_000_000_000u64,
        "shardID": 0,
        "toShardID": 0
    })
}

pub fn staking_transaction() -> Value {
    json!({
        "blockHash": BLOCK_HASH,
        "blockNumber": 1234,
        "from": ADDRESS,
        "timestamp": 1_607_000_000u64,
        "gas": 25000,
        "gasPrice": 1_000_000_000u64,
        "nonce": 4,
        "transactionIndex": 0,
        "type": "Delegate",
        "msg": {
            "amount": 100_000_000_000_000_000_000u128.to_string(),
            "delegatorAddress": ADDRESS,
            "validatorAddress": VALIDATOR
        }
    })
}

pub fn receipt() -> Value {
    json!({
        "blockHash": BLOCK_HASH,
        "blockNumber": 1234,
        "contractAddress": "0x0000000000000000000000000000000000000000",
        "cumulativeGasUsed": 21000,
        "from": ADDRESS,
        "gasUsed": 21000,
        "logs": [],
        "logsBloom": "0x00",
        "shardID": 0,
        "status": 1,
        "to": VALIDATOR,
        "transactionHash": TX_HASH,
        "transactionIndex": 0
    })
}

pub fn staking_error_sink() -> Value {
    json!([{
        "tx-hash-id": TX_HASH,
        "directive-kind": "Delegate",
        "time-at-rejection": 1_607_000_000u64,
        "error-message": "insufficient balance for stake"
    }])
}

pub fn cx_receipt() -> Value {
    json!({
        "blockHash": BLOCK_HASH,
        "blockNumber": 1234,
        "hash": TX_HASH,
        "from": ADDRESS,
        "to": VALIDATOR,
        "shardID": 0,
        "toShardID": 1,
        "value": 1_000_000_000_000_000_000u64
    })
}

pub fn pending_cx_receipts() -> Value {
    json!([{
        "receipts": [{
            "txHash": TX_HASH,
            "from": ADDRESS,
            "to": VALIDATOR,
            "shardID": 0,
            "toShardID": 1,
            "amount": 1_000_000_000_000_000_000u64
        }],
        "merkleProof": {
            "blockNumber": 1234,
            "blockHash": BLOCK_HASH,
            "shardID": 0,
            "receiptHash": "0x55",
            "shardIDs": [1],
            "shardHashes": ["0x66"]
        },
        "header": {
            "shard-id": 0,
            "block-header-hash": BLOCK_HASH,
            "block-number": 1234,
            "view-id": 1240,
            "epoch": 10
        },
        "commitSig": "0xaa",
        "commitBitMap": "0xff"
    }])
}

pub fn delegations() -> Value {
    json!([{
        "validator-address": VALIDATOR,
        "delegator-address": ADDRESS,
        "amount": 100_000_000_000_000_000u64,
        "reward": 0,
        "undelegations": [{"Amount": 0, "Epoch": 3}]
    }])
}

pub fn validator_information() -> Value {
    json!({
        "bls-public-keys": ["65f55eb3052f9e9f632b2923be594ba77c55543f5c58ee1454b9cfd658d25e06373b0f7d42a19c84768139ea294f6204"],
        "last-epoch-in-committee": 10,
        "min-self-delegation": 10_000_000_000_000_000_000u64,
        "max-total-delegation": 18_000_000_000_000_000_000u64,
        "rate": "0.100000000000000000",
        "max-rate": "0.900000000000000000",
        "max-change-rate": "0.050000000000000000",
        "update-height": 0,
        "name": "Alice",
        "identity": "alice",
        "website": "alice.harmony.one",
        "security-contact": "Bob",
        "details": "Don't mess with me!!!",
        "creation-height": 0,
        "address": VALIDATOR,
        "delegations": delegations(),
        "metrics": {
            "by-bls-key": [{
                "key": {
                    "bls-public-key": "65f55eb3052f9e9f632b2923be594ba77c55543f5c58ee1454b9cfd658d25e06373b0f7d42a19c84768139ea294f6204",
                    "group-percent": "0.500000000000000000",
                    "effective-stake": "10000000000000000000.000000000000000000",
                    "raw-stake": "10000000000000000000.000000000000000000",
                    "earning-account": VALIDATOR,
                    "overall-percent": "0.160000000000000000",
                    "shard-id": 0
                },
                "earned-reward": 2_000_000_000_000_000u64
            }]
        },
        "total-delegation": 10_100_000_000_000_000_000u64,
        "currently-in-committee": true,
        "epos-status": "currently elected",
        "epos-winning-stake": "10000000000000000000.000000000000000000",
        "booted-status": "not booted",
        "active-status": "active",
        "lifetime": {
            "reward-accumulated": 2_000_000_000_000_000u64,
            "blocks": {"to-sign": 32, "signed": 31},
            "apr": "0.000000000000000000",
            "epoch-apr": [{"epoch": 9, "value": "0.000000000000000000"}]
        }
    })
}

pub fn utility_metrics() -> Value {
    json!({
        "AccumulatorSnapshot": 5_768_000_000_000_000_000u64,
        "CurrentStakedPercentage": "0.000004444444444444",
        "Deviation": "0.349995555555555556",
        "Adjustment": "13.578509043473519833"
    })
}

pub fn median_raw_stake_snapshot() -> Value {
    json!({
        "epos-median-stake": "10000000000000000000.000000000000000000",
        "max-eternal-slots": 6,
        "epos-slot-winners": [{
            "slot-owner": VALIDATOR,
            "bls-public-key": "65f55eb3052f9e9f632b2923be594ba77c55543f5c58ee1454b9cfd658d25e06373b0f7d42a19c84768139ea294f6204",
            "raw-stake": "10000000000000000000.000000000000000000",
            "eposed-stake": "10000000000000000000.000000000000000000"
        }],
        "epos-slot-candidates": [{
            "stake": 10_000_000_000_000_000_000u64,
            "keys-at-auction": ["65f55eb3052f9e9f632b2923be594ba77c55543f5c58ee1454b9cfd658d25e06373b0f7d42a19c84768139ea294f6204"],
            "percentage-of-total-auction-stake": "1.000000000000000000",
            "stake-per-key": 10_000_000_000_000_000_000u64,
            "validator": VALIDATOR
        }]
    })
}

pub fn super_committees() -> Value {
    let committee = json!({
        "quorum-deciders": {
            "shard-0": {
                "policy": "SuperMajorityStake",
                "count": 1,
                "external-validator-slot-count": 1,
                "committee-members": [{
                    "is-harmony-slot": false,
                    "earning-account": VALIDATOR,
                    "bls-public-key": "65f55eb3052f9e9f632b2923be594ba77c55543f5c58ee1454b9cfd658d25e06373b0f7d42a19c84768139ea294f6204",
                    "voting-power-unnormalized": "1.000000000000000000",
                    "voting-power-%": "0.320000000000000000"
                }]
            }
        }
    });
    json!({"previous": committee.clone(), "current": committee})
}
