// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod command;
mod config;
mod io;
mod settings;

pub(crate) use command::{Command, RunResult};

use clap::Parser;
use tracing::{Level, debug};

use harmony_rpc::HarmonyClient;

use crate::settings::{LogFormat, LogLevel, Settings};
use config::Config;
use io::CliArgs;

fn main() -> anyhow::Result<()> {
    if let Err(err) = exec() {
        // display the error message (if any)
        eprintln!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(level: &LogLevel, format: &LogFormat) -> anyhow::Result<()> {
    let level: Level = level.into();
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr);

    // set the subscriber as global
    match format {
        LogFormat::Json => {
            let subscriber = subscriber.json().flatten_event(true).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Plain => {
            let subscriber = subscriber.with_ansi(false).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Coloured => {
            let subscriber = subscriber.finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    };

    Ok(())
}

fn exec() -> anyhow::Result<()> {
    // parse user args
    let args = CliArgs::parse();

    // the logger only depends on the arguments, so it is up before any
    // configuration error can happen
    init_logging(&args.log_level, &args.log_type)?;

    let cmd = args.command.clone();

    // Get the initial settings from the args
    let settings_builder = Settings::args(args)?;

    // load configuration (or use an empty one)
    let cfg = Config::load(settings_builder.config_path())?;

    // Finally complete the settings by resolving the endpoint
    let settings = settings_builder.config(cfg)?;
    debug!(config = %settings.config_path.display(), "Settings resolved");

    if let Command::Settings = cmd {
        println!("{settings}");
        return Ok(());
    }

    let client = HarmonyClient::new(settings.endpoint()?.as_str())?;

    match cmd.run(&client)? {
        RunResult::Settings => {}
        result => println!("{result}"),
    }

    Ok(())
}
