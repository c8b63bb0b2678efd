// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! One wrapper function per node method.
//!
//! Every wrapper takes the node URL, the parameter model of the method (if
//! any) and an optional session, performs one call and returns the parsed
//! [`Envelope`](crate::jsonrpc::Envelope). An error object sent by the node
//! is left inside the envelope; [`HarmonyClient`](crate::HarmonyClient)
//! turns it into an [`Error::Node`](crate::Error::Node).

pub mod account;
pub mod blockchain;
pub mod smart_contract;
pub mod staking;
pub mod transaction;
