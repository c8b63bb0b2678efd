// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Plumbing shared by every method wrapper.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::Error;
use crate::jsonrpc::{Envelope, format_api_call};
use crate::transport::{Transport, post_request};

/// Perform a single call to `method` and parse the body into an envelope
/// carrying `R`.
pub(crate) fn call<P, R>(
    api_url: &str,
    method: &str,
    params: Option<&P>,
    session: Option<&dyn Transport>,
) -> Result<Envelope<R>, Error>
where
    P: Serialize,
    R: DeserializeOwned,
{
    let payload = format_api_call(method, params)?;

    debug!(method, url = api_url, "Calling node");
    let body = post_request(api_url, payload, session)?;
    trace!(method, %body, "Node response");

    Ok(serde_json::from_str(&body)?)
}

/// Declare one wrapper function per RPC method.
///
/// ```ignore
/// endpoints! {
///     /// Current block number
///     fn block_number() as "hmyv2_blockNumber" => u64;
///     /// Balance of an address
///     fn get_balance(AddressParameters) as "hmyv2_getBalance" => Atto;
/// }
/// ```
///
/// Every entry expands to
/// `pub fn name(api_url, [params,] session) -> Result<Envelope<R>, Error>`.
macro_rules! endpoints {
    () => {};
    (
        $(#[$attr:meta])*
        fn $name:ident() as $method:literal => $result:ty;
        $($rest:tt)*
    ) => {
        $(#[$attr])*
        ///
        #[doc = concat!("Calls `", $method, "`.")]
        ///
        /// # Errors
        /// This function errors if the request fails or if the response does
        /// not match the expected model.
        pub fn $name(
            api_url: &str,
            session: Option<&dyn $crate::transport::Transport>,
        ) -> Result<$crate::jsonrpc::Envelope<$result>, $crate::Error> {
            $crate::method::call::<(), _>(api_url, $method, None, session)
        }

        $crate::method::endpoints! { $($rest)* }
    };
    (
        $(#[$attr:meta])*
        fn $name:ident($params:ty) as $method:literal => $result:ty;
        $($rest:tt)*
    ) => {
        $(#[$attr])*
        ///
        #[doc = concat!("Calls `", $method, "`.")]
        ///
        /// # Errors
        /// This function errors if the request fails or if the response does
        /// not match the expected model.
        pub fn $name(
            api_url: &str,
            params: &$params,
            session: Option<&dyn $crate::transport::Transport>,
        ) -> Result<$crate::jsonrpc::Envelope<$result>, $crate::Error> {
            $crate::method::call(api_url, $method, Some(params), session)
        }

        $crate::method::endpoints! { $($rest)* }
    };
}

pub(crate) use endpoints;
