// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! HTTP transport used to reach the node.
//!
//! [`Transport`] is the seam between the endpoint wrappers and the network:
//! [`HttpTransport`] is the blocking reqwest session, tests plug in their own.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::trace;

use crate::Error;

/// A channel able to deliver a JSON-RPC payload to a node and return the raw
/// response body.
///
/// Implementations are used for one call at a time; the library performs no
/// locking around them.
pub trait Transport {
    /// POST `body` to `url` and return the response body.
    ///
    /// # Errors
    /// This method errors if the request cannot be sent, or if the node
    /// answers with a non-2xx status.
    fn post(&self, url: &str, body: String) -> Result<String, Error>;
}

/// Blocking HTTP transport, the reusable session of the client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport
    ///
    /// # Errors
    /// This method errors if a TLS backend cannot be initialized, or the
    /// resolver cannot load the system configuration.
    pub fn new() -> Result<Self, Error> {
        match Client::builder().build() {
            Ok(client) => Ok(Self { client }),
            Err(_) => Err(Error::HttpClient),
        }
    }

    /// Reuse an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, body: String) -> Result<String, Error> {
        trace!(%url, %body, "POST");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?
            .error_for_status()?;

        Ok(response.text()?)
    }
}

/// Send `payload` to `url`, through `session` when given.
///
/// Without a session a transport is created for this call only and dropped
/// afterwards.
///
/// # Errors
/// This function errors if the transport cannot be created, or if the
/// request fails.
pub fn post_request(
    url: &str,
    payload: String,
    session: Option<&dyn Transport>,
) -> Result<String, Error> {
    match session {
        Some(session) => session.post(url, payload),
        None => HttpTransport::new()?.post(url, payload),
    }
}
