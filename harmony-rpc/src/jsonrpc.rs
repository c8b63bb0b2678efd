// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # JSON-RPC envelopes
//!
//! The request envelope sent to a Harmony node and the generic response
//! envelope every method result is wrapped into.
//!
//! A request always carries `jsonrpc = "2.0"` and `id = 1`; its `params` is
//! the positional list produced by the parameter model of the method, or an
//! empty list for methods without parameters.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

use crate::Error;

/// JSON-RPC protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request id sent with every request. Calls are strictly sequential, so a
/// constant id is enough to pair a response with its request.
pub const REQUEST_ID: u64 = 1;

#[derive(Serialize)]
#[serde(bound = "P: Serialize")]
struct Request<'a, P> {
    jsonrpc: &'a str,
    id: u64,
    method: &'a str,
    #[serde(serialize_with = "params_or_empty")]
    params: Option<&'a P>,
}

fn params_or_empty<P, S>(
    params: &Option<&P>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    P: Serialize,
    S: Serializer,
{
    match params {
        Some(params) => params.serialize(serializer),
        None => serializer.collect_seq(std::iter::empty::<()>()),
    }
}

/// Build the JSON body of a call to `method`.
///
/// With no parameters the envelope carries `"params": []`; otherwise the
/// parameter model is serialized as a JSON array, in declaration order.
///
/// # Errors
/// This function errors if the parameters cannot be serialized.
pub fn format_api_call<P: Serialize>(
    method: &str,
    params: Option<&P>,
) -> Result<String, Error> {
    let request = Request {
        jsonrpc: JSONRPC_VERSION,
        id: REQUEST_ID,
        method,
        params,
    };

    Ok(serde_json::to_string(&request)?)
}

/// Error object carried by a failed JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    /// Error code, as defined by the JSON-RPC specification or the node.
    pub code: i64,
    /// Short description of the error.
    pub message: String,
    /// Additional information attached by the node, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Response envelope, generic over the result model of the method.
///
/// Exclusivity of `result` and `error` is not checked: whatever the node
/// sends is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Protocol version echoed by the node.
    #[serde(default)]
    pub jsonrpc: String,
    /// Id of the request this response answers.
    pub id: Option<u64>,
    /// Method result, absent when the call failed.
    pub result: Option<T>,
    /// Error object, present when the call failed.
    pub error: Option<RpcError>,
}

impl<T> Envelope<T> {
    /// Transform the result, leaving the rest of the envelope untouched.
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        Envelope {
            jsonrpc: self.jsonrpc,
            id: self.id,
            result: self.result.map(f),
            error: self.error,
        }
    }

    /// Unwrap the result of a call whose result is optional, like lookups
    /// by hash.
    ///
    /// # Errors
    /// Returns [`Error::Node`] when the node sent an error object.
    pub fn into_optional(self) -> Result<Option<T>, Error> {
        match self.error {
            Some(RpcError { code, message, .. }) => {
                warn!(code, %message, "Node returned an error");
                Err(Error::Node { code, message })
            }
            None => Ok(self.result),
        }
    }

    /// Unwrap the result of a call.
    ///
    /// # Errors
    /// Returns [`Error::Node`] when the node sent an error object, and
    /// [`Error::EmptyResult`] when it sent neither an error nor a result.
    pub fn into_result(self) -> Result<T, Error> {
        self.into_optional()?.ok_or(Error::EmptyResult)
    }
}

impl<T: DeserializeOwned> std::str::FromStr for Envelope<T> {
    type Err = Error;

    fn from_str(body: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(body)?)
    }
}
