// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Read-only access to smart contracts.

use crate::method::endpoints;
use crate::model::{CallParameters, GetCodeParameters, GetStorageAtParameters};

endpoints! {
    /// Execute a call without creating a transaction. The result is the
    /// hex encoded return value.
    fn call(CallParameters) as "hmyv2_call" => String;
    /// Hex encoded gas estimate of a call.
    fn estimate_gas(CallParameters) as "hmyv2_estimateGas" => String;
    /// Code stored at an address.
    fn get_code(GetCodeParameters) as "hmyv2_getCode" => String;
    /// Data stored at a storage location of a contract.
    fn get_storage_at(GetStorageAtParameters)
        as "hmyv2_getStorageAt" => String;
}
