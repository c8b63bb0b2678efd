// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;
use std::path::PathBuf;

use harmony_rpc::Error;
use tracing::Level;
use url::Url;

use crate::config::Config;
use crate::io::CliArgs;

#[derive(clap::ValueEnum, Debug, Clone)]
pub(crate) enum LogFormat {
    Json,
    Plain,
    Coloured,
}

#[derive(clap::ValueEnum, Debug, Clone)]
pub(crate) enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,
    /// Designates lower priority information.
    Debug,
    /// Designates useful information.
    Info,
    /// Designates hazardous situations.
    Warn,
    /// Designates very serious errors.
    Error,
}

#[derive(Debug)]
pub(crate) struct Logging {
    /// Max log level
    pub level: LogLevel,
    /// Log format
    pub format: LogFormat,
}

#[derive(Debug)]
pub(crate) struct Settings {
    pub(crate) endpoint: Option<Url>,
    pub(crate) network: Option<String>,
    pub(crate) config_path: PathBuf,
    pub(crate) logging: Logging,
}

pub(crate) struct SettingsBuilder {
    config_path: PathBuf,
    pub(crate) args: CliArgs,
}

impl SettingsBuilder {
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Resolve the node endpoint: `--url` (or `HARMONY_RPC_URL`) first, then
    /// the network named with `--network`, then the default network of the
    /// configuration file.
    pub fn config(self, config: Config) -> Result<Settings, Error> {
        let args = self.args;

        let (network, endpoint) = match (&args.url, &args.network) {
            (Some(url), _) => (None, Some(Url::parse(url)?)),
            (None, Some(label)) => {
                let url = config.network_url(label)?;
                (Some(label.clone()), Some(url))
            }
            (None, None) => match config.default_network() {
                Some((label, url)) => (Some(label), Some(url?)),
                None => (None, None),
            },
        };

        let logging = Logging {
            level: args.log_level,
            format: args.log_type,
        };

        Ok(Settings {
            endpoint,
            network,
            config_path: self.config_path,
            logging,
        })
    }
}

impl Settings {
    pub fn args(args: CliArgs) -> Result<SettingsBuilder, Error> {
        let config_path = match &args.config {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };

        Ok(SettingsBuilder { config_path, args })
    }

    /// The node endpoint to talk to.
    pub fn endpoint(&self) -> Result<&Url, Error> {
        self.endpoint.as_ref().ok_or(Error::EndpointNotConfigured)
    }
}

impl From<&LogLevel> for Level {
    fn from(level: &LogLevel) -> Level {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Json => "json",
                Self::Plain => "plain",
                Self::Coloured => "coloured",
            }
        )
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Trace => "trace",
                Self::Debug => "debug",
                Self::Info => "info",
                Self::Warn => "warn",
                Self::Error => "error",
            }
        )
    }
}

impl fmt::Display for Logging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logging: [{}] ({})", self.level, self.format)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "─".repeat(14);
        writeln!(f, "{separator}")?;
        writeln!(f, "Settings")?;
        writeln!(f, "{separator}")?;
        writeln!(f, "Config file: {}", self.config_path.display())?;
        writeln!(
            f,
            "Network: {}",
            self.network.as_deref().unwrap_or("[Not set]")
        )?;
        match &self.endpoint {
            Some(endpoint) => writeln!(f, "Endpoint: {endpoint}")?,
            None => writeln!(f, "Endpoint: [Not set]")?,
        }
        writeln!(f, "{separator}")?;
        writeln!(f, "{}", self.logging)
    }
}
