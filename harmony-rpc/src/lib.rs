// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Harmony RPC Lib
//!
//! The `harmony_rpc` library is a typed client for the JSON-RPC API of a
//! Harmony node.
//!
//! It is layered as follows:
//! - [`model`]: parameters and results of every node method.
//! - [`jsonrpc`]: request formatting and the generic response [`Envelope`].
//! - [`transport`]: the blocking HTTP session and the [`Transport`] seam.
//! - [`endpoints`]: one function per node method, returning the raw
//!   envelope.
//! - [`HarmonyClient`]: descriptive method names, results unwrapped and node
//!   errors surfaced as [`Error::Node`].
//!
//! All calls are synchronous and perform exactly one HTTP round trip.

#![deny(missing_docs)]

mod client;
mod error;
mod method;
mod selector;

pub mod endpoints;
pub mod jsonrpc;
pub mod model;
pub mod transport;

pub use client::{HarmonyClient, LATEST_BLOCK};
pub use error::Error;
pub use jsonrpc::{Envelope, RpcError, format_api_call};
pub use selector::BlockSelector;
pub use transport::{HttpTransport, Transport, post_request};
