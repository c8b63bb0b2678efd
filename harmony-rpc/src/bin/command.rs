// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod status;

pub(crate) use status::StatusOption;

use std::fmt;

use clap::Subcommand;
use harmony_rpc::model::{Atto, BlockConfig};
use harmony_rpc::{BlockSelector, HarmonyClient};
use serde::Serialize;
use tracing::info;

/// Atto in one ONE
const ATTO_PER_ONE: Atto = 1_000_000_000_000_000_000;

/// Commands that can be run against a Harmony node
#[derive(Clone, Subcommand, Debug)]
pub(crate) enum Command {
    /// View the current status of the desired item
    Current {
        /// Item to query
        #[arg(value_enum)]
        item: StatusOption,
    },

    /// Look up a block or a transaction
    Find {
        #[command(subcommand)]
        object: FindObject,
    },

    /// Check the balance of an address
    Balance {
        /// Wallet address
        address: String,
        /// Block at which to read the balance [default: latest]
        #[arg(long)]
        block: Option<u64>,
    },

    /// Show current settings
    Settings,
}

/// Objects that can be looked up
#[derive(Clone, Subcommand, Debug)]
pub(crate) enum FindObject {
    /// A block, by number or by hash
    Block {
        /// Block number
        #[arg(long)]
        number: Option<u64>,
        /// Block hash
        #[arg(long)]
        hash: Option<String>,
        /// Include full transaction data
        #[arg(long)]
        full_tx: bool,
        /// Include regular transactions
        #[arg(long)]
        incl_tx: bool,
        /// Include staking transactions
        #[arg(long)]
        incl_staking: bool,
    },
    /// A transaction, by hash
    Tx {
        /// Transaction hash
        #[arg(long)]
        hash: String,
    },
    /// A staking transaction, by hash
    StakingTx {
        /// Staking transaction hash
        #[arg(long)]
        hash: String,
    },
}

impl Command {
    /// Runs the command against the node
    pub(crate) fn run(self, client: &HarmonyClient) -> anyhow::Result<RunResult> {
        match self {
            Command::Current { item } => {
                info!(?item, url = client.url(), "Querying status");
                Ok(RunResult::Json(item.query(client)?))
            }
            Command::Find { object } => object.run(client),
            Command::Balance { address, block } => {
                let balance = client.get_account_balance(&address, block)?;
                Ok(RunResult::Balance(balance))
            }
            Command::Settings => Ok(RunResult::Settings),
        }
    }
}

impl FindObject {
    fn run(self, client: &HarmonyClient) -> anyhow::Result<RunResult> {
        match self {
            FindObject::Block {
                number,
                hash,
                full_tx,
                incl_tx,
                incl_staking,
            } => {
                let selector = BlockSelector::from_options(number, hash)?;
                let config = BlockConfig {
                    full_tx,
                    incl_tx,
                    incl_staking,
                };
                RunResult::found(client.get_block(selector, config)?)
            }
            FindObject::Tx { hash } => {
                RunResult::found(client.get_transaction(&hash)?)
            }
            FindObject::StakingTx { hash } => {
                RunResult::found(client.get_staking_transaction(&hash)?)
            }
        }
    }
}

/// Possible results of running a command
#[derive(Debug)]
pub(crate) enum RunResult {
    Json(String),
    NotFound,
    Balance(Atto),
    Settings,
}

impl RunResult {
    fn found<T: Serialize>(value: Option<T>) -> anyhow::Result<Self> {
        Ok(match value {
            Some(value) => Self::Json(serde_json::to_string_pretty(&value)?),
            None => Self::NotFound,
        })
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use RunResult::*;
        match self {
            Json(json) => write!(f, "{json}"),
            NotFound => write!(f, "> Not found"),
            Balance(atto) => {
                let whole = atto / ATTO_PER_ONE;
                let fraction = format!("{:018}", atto % ATTO_PER_ONE);
                let fraction = fraction.trim_end_matches('0');
                if fraction.is_empty() {
                    write!(f, "> Balance: {whole} ONE ({atto} Atto)")
                } else {
                    write!(f, "> Balance: {whole}.{fraction} ONE ({atto} Atto)")
                }
            }
            Settings => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::io::CliArgs;

    #[test]
    fn balance_display() {
        assert_eq!(
            RunResult::Balance(1_000_000_000_000_000_000).to_string(),
            "> Balance: 1 ONE (1000000000000000000 Atto)"
        );
        assert_eq!(
            RunResult::Balance(1_500_000_000_000_000_000).to_string(),
            "> Balance: 1.5 ONE (1500000000000000000 Atto)"
        );
        assert_eq!(
            RunResult::Balance(42).to_string(),
            "> Balance: 0.000000000000000042 ONE (42 Atto)"
        );
    }

    #[test]
    fn parse_current() {
        let args = CliArgs::parse_from(["harmony-cli", "current", "gas-price"]);
        assert!(matches!(
            args.command,
            Command::Current {
                item: StatusOption::GasPrice
            }
        ));
    }

    #[test]
    fn parse_find_block() {
        let args = CliArgs::parse_from([
            "harmony-cli",
            "find",
            "block",
            "--hash",
            "0xab",
            "--full-tx",
        ]);
        match args.command {
            Command::Find {
                object:
                    FindObject::Block {
                        number,
                        hash,
                        full_tx,
                        ..
                    },
            } => {
                assert_eq!(number, None);
                assert_eq!(hash.as_deref(), Some("0xab"));
                assert!(full_tx);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn find_block_needs_one_selector() {
        let client = HarmonyClient::with_transport(
            "http://127.0.0.1:9500",
            Unreachable,
        );
        let object = FindObject::Block {
            number: Some(1),
            hash: Some("0xab".into()),
            full_tx: false,
            incl_tx: false,
            incl_staking: false,
        };
        let err = object.run(&client).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<harmony_rpc::Error>(),
            Some(harmony_rpc::Error::InvalidParams(_))
        ));
    }

    struct Unreachable;

    impl harmony_rpc::Transport for Unreachable {
        fn post(
            &self,
            _url: &str,
            _body: String,
        ) -> Result<String, harmony_rpc::Error> {
            panic!("no request expected")
        }
    }
}
