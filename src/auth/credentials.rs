// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Known test credentials.
//!
//! The service is a harness for API clients, so the accepted credentials are
//! constants that client test suites can hard-code.

pub const BASIC_USERNAME: &str = "admin";
pub const BASIC_PASSWORD: &str = "password";

pub const API_KEY: &str = "api-key";
/// Subject reported for API key callers.
pub const API_KEY_SUBJECT: &str = "API User";

pub const CLIENT_ID: &str = "client";
pub const CLIENT_SECRET: &str = "secret";

/// A credential extracted from a request. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Basic { username: String, password: String },
    ApiKey(String),
    ClientCredentials { client_id: String, client_secret: String },
}

impl Credential {
    /// Whether the credential equals the configured constant for its kind.
    ///
    /// Comparison is exact: no trimming and no case folding.
    pub fn is_known(&self) -> bool {
        match self {
            Credential::Basic { username, password } => {
                username == BASIC_USERNAME && password == BASIC_PASSWORD
            }
            Credential::ApiKey(key) => key == API_KEY,
            Credential::ClientCredentials {
                client_id,
                client_secret,
            } => client_id == CLIENT_ID && client_secret == CLIENT_SECRET,
        }
    }
}
