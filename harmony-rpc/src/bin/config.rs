// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

use harmony_rpc::Error;
use serde::Deserialize;
use url::Url;

/// A named node endpoint
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Network {
    pub(crate) url: Url,
}

/// Config holds the networks known to the CLI
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Network used when none is given on the command line
    pub(crate) default: Option<String>,
    /// Known networks, by name
    #[serde(default)]
    pub(crate) network: HashMap<String, Network>,
}

fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<Option<String>> {
    fs::read_to_string(&path)
        .map(Some)
        .or_else(|e| match e.kind() {
            io::ErrorKind::NotFound => Ok(None),
            _ => Err(e),
        })
}

impl Config {
    /// Attempt to load configuration from file. A missing file yields an
    /// empty configuration.
    pub fn load(path: &Path) -> Result<Config, Error> {
        match read_to_string(path)? {
            Some(contents) => Ok(toml::from_str(&contents)?),
            None => Ok(Config::default()),
        }
    }

    /// `$CONFIG_DIR/harmony-cli/config.toml`
    pub fn default_path() -> Result<PathBuf, Error> {
        let mut path = dirs::config_dir().ok_or(Error::OsNotSupported)?;
        path.push(env!("CARGO_BIN_NAME"));
        path.push("config.toml");
        Ok(path)
    }

    /// Endpoint of the network called `label`.
    pub fn network_url(&self, label: &str) -> Result<Url, Error> {
        self.network
            .get(label)
            .map(|network| network.url.clone())
            .ok_or_else(|| Error::NetworkNotFound(label.to_string()))
    }

    /// Name and endpoint of the default network, if one is set.
    pub fn default_network(&self) -> Option<(String, Result<Url, Error>)> {
        self.default
            .as_ref()
            .map(|label| (label.clone(), self.network_url(label)))
    }
}
