// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Facade behaviour over a mocked node.

mod common;

use assert_matches::assert_matches;
use harmony_rpc::model::{
    BlockConfig, History, SmartContractCall, TransactionType,
    TransactionsHistoryObject,
};
use harmony_rpc::{BlockSelector, Error, HarmonyClient};
use serde_json::{Value, json};

use common::fixtures::{self, ADDRESS, BLOCK_HASH, TX_HASH, VALIDATOR};
use common::{MockTransport, NODE_URL};

fn client(mock: &MockTransport) -> HarmonyClient {
    HarmonyClient::with_transport(NODE_URL, mock.clone())
}

#[test]
fn balance_of_an_address() {
    let mock = MockTransport::with_result(json!(1_000_000_000_000_000_000u64));

    let balance = client(&mock).get_account_balance(ADDRESS, None).unwrap();

    assert_eq!(balance, 1_000_000_000_000_000_000);
    let request = mock.last_request();
    assert_eq!(request["method"], "hmyv2_getBalance");
    assert_eq!(request["params"], json!([ADDRESS]));
}

#[test]
fn balance_at_a_block() {
    let mock = MockTransport::with_result(json!(42));

    let balance = client(&mock)
        .get_account_balance(ADDRESS, Some(1234))
        .unwrap();

    assert_eq!(balance, 42);
    let request = mock.last_request();
    assert_eq!(request["method"], "hmyv2_getBalanceByBlockNumber");
    assert_eq!(request["params"], json!([ADDRESS, 1234]));
}

#[test]
fn node_errors_are_surfaced() {
    let mock = MockTransport::new(
        r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"x"}}"#,
    );

    let err = client(&mock).current_block_number().unwrap_err();

    assert_matches!(err, Error::Node { code: -32000, ref message } if message == "x");
    assert_eq!(
        err.to_string(),
        "The node responded with the following error.\nCode -32000: x"
    );
}

#[test]
fn node_errors_win_over_lookups() {
    let mock = MockTransport::new(
        r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"invalid argument 0"}}"#,
    );

    let err = client(&mock).get_transaction("0x").unwrap_err();

    assert_matches!(err, Error::Node { code: -32602, .. });
}

#[test]
fn missing_result() {
    let mock = MockTransport::with_result(Value::Null);

    let err = client(&mock).current_epoch().unwrap_err();

    assert_matches!(err, Error::EmptyResult);
}

#[test]
fn lookups_may_find_nothing() {
    let mock = MockTransport::with_result(Value::Null);
    let client = client(&mock);

    assert_eq!(client.get_transaction(TX_HASH).unwrap(), None);
    assert_eq!(client.get_staking_transaction(TX_HASH).unwrap(), None);
    assert_eq!(client.get_transaction_receipt(TX_HASH).unwrap(), None);
    assert_eq!(client.get_cx_receipt(TX_HASH).unwrap(), None);
    assert_eq!(
        client
            .get_block(BlockSelector::ByNumber(1), BlockConfig::default())
            .unwrap(),
        None
    );
}

#[test]
fn malformed_response() {
    let mock = MockTransport::new("<html>Bad gateway</html>");

    let err = client(&mock).current_leader().unwrap_err();

    assert_matches!(err, Error::Json(_));
}

#[test]
fn peer_count_is_kept_literal() {
    let mock = MockTransport::with_result(json!("0x2a"));

    let peers = client(&mock).peer_count().unwrap();

    assert_eq!(peers.as_str(), "0x2a");
    assert_eq!(peers.to_u64().unwrap(), 42);
}

#[test]
fn block_by_number_or_hash() {
    let mock = MockTransport::with_result(fixtures::block());
    let client = client(&mock);
    let config = BlockConfig {
        full_tx: true,
        ..Default::default()
    };

    let block = client
        .get_block(BlockSelector::ByNumber(1234), config)
        .unwrap()
        .expect("a block");
    assert_eq!(block.number, 1234);
    assert_eq!(block.hash, BLOCK_HASH);
    let request = mock.last_request();
    assert_eq!(request["method"], "hmyv2_getBlockByNumber");
    assert_eq!(
        request["params"],
        json!([1234, {"fullTx": true, "inclTx": false, "inclStaking": false}])
    );

    client
        .get_block(BlockSelector::from(BLOCK_HASH), config)
        .unwrap();
    let request = mock.last_request();
    assert_eq!(request["method"], "hmyv2_getBlockByHash");
    assert_eq!(request["params"][0], BLOCK_HASH);
}

#[test]
fn block_selector_needs_exactly_one_value() {
    let mock = MockTransport::with_result(json!(3));
    let client = client(&mock);

    let err = BlockSelector::from_options(Some(1), Some(BLOCK_HASH.into()))
        .unwrap_err();
    assert_matches!(err, Error::InvalidParams(_));
    let err = BlockSelector::from_options(None, None).unwrap_err();
    assert_matches!(err, Error::InvalidParams(_));
    assert!(mock.requests().is_empty());

    let selector = BlockSelector::from_options(None, Some(BLOCK_HASH.into()))
        .unwrap();
    assert_eq!(client.get_transaction_count_on_block(selector).unwrap(), 3);
    let request = mock.last_request();
    assert_eq!(request["method"], "hmyv2_getBlockTransactionCountByHash");
    assert_eq!(request["params"], json!([BLOCK_HASH]));

    let selector = BlockSelector::from_options(Some(1234), None).unwrap();
    client.get_transaction_count_on_block(selector).unwrap();
    let request = mock.last_request();
    assert_eq!(request["method"], "hmyv2_getBlockTransactionCountByNumber");
    assert_eq!(request["params"], json!([1234]));
}

#[test]
fn transaction_by_block_position() {
    let mock = MockTransport::with_result(fixtures::transaction());
    let client = client(&mock);

    let tx = client
        .get_transaction_by_block(0, BlockSelector::ByNumber(1234))
        .unwrap()
        .expect("a transaction");
    assert_eq!(tx.hash, TX_HASH);
    assert_eq!(tx.value, 1_000_000_000_000_000_000);
    assert_eq!(mock.last_request()["params"], json!([1234, 0]));

    client
        .get_transaction_by_block(2, BlockSelector::from(BLOCK_HASH))
        .unwrap();
    let request = mock.last_request();
    assert_eq!(request["method"], "hmyv2_getTransactionByBlockHashAndIndex");
    assert_eq!(request["params"], json!([BLOCK_HASH, 2]));
}

#[test]
fn history_of_hashes() {
    let mock = MockTransport::with_result(json!([TX_HASH, TX_HASH]));

    let history = client(&mock)
        .get_account_transaction_history(TransactionsHistoryObject::new(
            ADDRESS,
        ))
        .unwrap();

    assert_matches!(&history, History::Hashes(hashes) if hashes.len() == 2);
    assert_eq!(history.len(), 2);
}

#[test]
fn history_of_full_transactions() {
    let mock = MockTransport::with_result(json!([fixtures::transaction()]));
    let request = TransactionsHistoryObject {
        full_tx: true,
        tx_type: TransactionType::Received,
        ..TransactionsHistoryObject::new(ADDRESS)
    };

    let history = client(&mock)
        .get_account_transaction_history(request)
        .unwrap();

    assert_matches!(&history, History::Full(txs) if txs[0].from == ADDRESS);
    let request = mock.last_request();
    let params = &request["params"][0];
    assert_eq!(params["fullTx"], true);
    assert_eq!(params["txType"], "RECEIVED");
}

#[test]
fn staking_history_of_full_transactions() {
    let mock =
        MockTransport::with_result(json!([fixtures::staking_transaction()]));
    let request = TransactionsHistoryObject {
        full_tx: true,
        ..TransactionsHistoryObject::new(ADDRESS)
    };

    let history = client(&mock)
        .get_account_staking_transaction_history(request)
        .unwrap();

    assert_matches!(history, History::Full(txs) if txs[0].kind == "Delegate");
    assert_eq!(
        mock.last_request()["method"],
        "hmyv2_getStakingTransactionsHistory"
    );
}

#[test]
fn full_history_rejects_hashes() {
    let mock = MockTransport::with_result(json!([TX_HASH]));
    let request = TransactionsHistoryObject {
        full_tx: true,
        ..TransactionsHistoryObject::new(ADDRESS)
    };

    let err = client(&mock)
        .get_account_transaction_history(request)
        .unwrap_err();

    assert_matches!(err, Error::Json(_));
}

#[test]
fn header_of_latest_or_given_block() {
    let mock = MockTransport::with_result(fixtures::header());
    let client = client(&mock);

    let header = client.block_header(None).unwrap();
    assert_eq!(header.block_number, 1234);
    assert_eq!(mock.last_request()["method"], "hmyv2_latestHeader");

    client.block_header(Some(1234)).unwrap();
    let request = mock.last_request();
    assert_eq!(request["method"], "hmyv2_getHeaderByNumber");
    assert_eq!(request["params"], json!([1234]));
}

#[test]
fn validator_information_pages() {
    let mock =
        MockTransport::with_result(json!([fixtures::validator_information()]));
    let client = client(&mock);

    let validators = client.get_all_validator_information(-1, None).unwrap();
    assert_eq!(validators[0].address, VALIDATOR);
    assert_eq!(validators[0].lifetime.blocks.signed, 31);
    let request = mock.last_request();
    assert_eq!(request["method"], "hmyv2_getAllValidatorInformation");
    assert_eq!(request["params"], json!([-1]));

    client.get_all_validator_information(0, Some(1234)).unwrap();
    let request = mock.last_request();
    assert_eq!(
        request["method"],
        "hmyv2_getAllValidatorInformationByBlockNumber"
    );
    assert_eq!(request["params"], json!([0, 1234]));
}

#[test]
fn smart_contract_code_defaults_to_latest() {
    let mock = MockTransport::with_result(json!("0x6080"));
    let client = client(&mock);

    let code = client
        .get_smart_contract_code(VALIDATOR, None, None)
        .unwrap();
    assert_eq!(code, "0x6080");
    assert_eq!(mock.last_request()["params"], json!([VALIDATOR, "latest"]));

    client
        .get_smart_contract_code(VALIDATOR, Some("0x4d2"), Some("cb".into()))
        .unwrap();
    assert_eq!(
        mock.last_request()["params"],
        json!([VALIDATOR, "0x4d2", "cb"])
    );
}

#[test]
fn smart_contract_call() {
    let mock = MockTransport::with_result(json!("0x01"));
    let call = SmartContractCall {
        to: VALIDATOR.into(),
        from: Some(ADDRESS.into()),
        gas: Some(50_000),
        ..Default::default()
    };

    let output = client(&mock).call_smart_contract(call, 1234).unwrap();

    assert_eq!(output, "0x01");
    let request = mock.last_request();
    assert_eq!(request["method"], "hmyv2_call");
    assert_eq!(
        request["params"],
        json!([{"to": VALIDATOR, "from": ADDRESS, "gas": 50_000}, 1234])
    );
}

#[test]
fn requests_go_to_the_client_url() {
    let mock = MockTransport::with_result(json!(7));
    let client = HarmonyClient::with_transport("http://node:9500", mock.clone());

    client.current_epoch().unwrap();
    client.protocol_version().unwrap();

    let urls: Vec<_> = mock.requests().into_iter().map(|(url, _)| url).collect();
    assert_eq!(urls, ["http://node:9500", "http://node:9500"]);
    assert_eq!(client.url(), "http://node:9500");
}
