// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io;

/// Errors returned by this library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection failures and non-2xx responses from the node
    #[error("A request error occurred: {0}")]
    Transport(#[from] reqwest::Error),
    /// JSON serialization errors, including bodies not matching the model
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The node answered with a JSON-RPC error object
    #[error("The node responded with the following error.\nCode {code}: {message}")]
    Node {
        /// JSON-RPC error code
        code: i64,
        /// Error message as sent by the node
        message: String,
    },
    /// The node answered with neither a result nor an error
    #[error("The node returned an empty result")]
    EmptyResult,
    /// Local misuse of the API, detected before any request is sent
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
    /// A hex quantity returned by the node could not be decoded
    #[error("Invalid hex quantity: {0}")]
    InvalidQuantity(String),
    /// The HTTP client could not be initialized
    #[error("Unable to initialize the HTTP client")]
    HttpClient,
    /// Filesystem errors
    #[error(transparent)]
    IO(#[from] io::Error),
    /// Malformed configuration file
    #[error("Invalid configuration file: {0}")]
    Config(#[from] toml::de::Error),
    /// Malformed node URL
    #[error("Invalid node URL: {0}")]
    Url(#[from] url::ParseError),
    /// Provided network not found
    #[error(
        "Network '{0}' not found, check config.toml or specify the endpoint with --url"
    )]
    NetworkNotFound(String),
    /// No endpoint was given on the command line, in the environment or in
    /// the configuration file
    #[error(
        "No node endpoint configured, use --url, HARMONY_RPC_URL or a default network in config.toml"
    )]
    EndpointNotConfigured,
    /// OS not supported
    #[error("OS not supported")]
    OsNotSupported,
}
