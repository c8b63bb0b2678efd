// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::path::PathBuf;

use clap::Parser;

use crate::Command;
use crate::settings::{LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "A command-line interface to query a Harmony node over JSON-RPC."
)]
pub(crate) struct CliArgs {
    /// Node endpoint fully qualified URL
    #[arg(long, env = "HARMONY_RPC_URL")]
    pub url: Option<String>,

    /// Network to connect to, as named in the configuration file
    #[arg(short, long)]
    pub network: Option<String>,

    /// Configuration file [default: `$CONFIG_DIR/harmony-cli/config.toml`]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Logging output type
    #[arg(long, value_enum, default_value_t = LogFormat::Coloured)]
    pub log_type: LogFormat,

    /// Command
    #[command(subcommand)]
    pub command: Command,
}
