// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

#![allow(dead_code)]

pub mod fixtures;

use std::cell::RefCell;
use std::rc::Rc;

use harmony_rpc::{Error, Transport};
use serde_json::{Value, json};

pub const NODE_URL: &str = "http://127.0.0.1:9500";

/// A transport answering every request with the same body, and recording
/// what it was sent.
#[derive(Clone)]
pub struct MockTransport {
    response: String,
    requests: Rc<RefCell<Vec<(String, String)>>>,
}

impl MockTransport {
    pub fn new<S: Into<String>>(response: S) -> Self {
        Self {
            response: response.into(),
            requests: Rc::default(),
        }
    }

    /// Answer with a successful envelope carrying `result`.
    pub fn with_result(result: Value) -> Self {
        Self::new(
            json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string(),
        )
    }

    /// Urls and bodies received so far.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.borrow().clone()
    }

    /// The body of the last request, parsed.
    pub fn last_request(&self) -> Value {
        let requests = self.requests.borrow();
        let (_, body) = requests.last().expect("a request to be sent");
        serde_json::from_str(body).expect("the request to be JSON")
    }
}

impl Transport for MockTransport {
    fn post(&self, url: &str, body: String) -> Result<String, Error> {
        self.requests.borrow_mut().push((url.to_string(), body));
        Ok(self.response.clone())
    }
}
