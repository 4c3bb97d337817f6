// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The capability shared by every authentication scheme.

use std::fmt;

use axum::http::{header::CONTENT_TYPE, HeaderMap};
use serde::Serialize;

use super::{AuthError, Principal};

/// Named authentication strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SchemeName {
    Basic,
    #[serde(rename = "API Key")]
    ApiKey,
    #[serde(rename = "Client Credentials")]
    ClientCredentials,
    Bearer,
}

impl SchemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeName::Basic => "Basic",
            SchemeName::ApiKey => "API Key",
            SchemeName::ClientCredentials => "Client Credentials",
            SchemeName::Bearer => "Bearer",
        }
    }
}

impl fmt::Display for SchemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request metadata inspected by the schemes.
///
/// `body` is empty unless the route's policy needs form or JSON credentials.
/// It is `None` when the body was needed but could not be buffered.
#[derive(Debug, Clone, Copy)]
pub struct AuthRequest<'a> {
    pub headers: &'a HeaderMap,
    pub body: Option<&'a [u8]>,
}

impl<'a> AuthRequest<'a> {
    pub fn new(headers: &'a HeaderMap, body: &'a [u8]) -> Self {
        Self {
            headers,
            body: Some(body),
        }
    }

    /// Request without a buffered body.
    pub fn headers_only(headers: &'a HeaderMap) -> Self {
        Self::new(headers, &[])
    }

    /// Request whose body was too large or failed to read. Header schemes
    /// still run; body schemes fail.
    pub fn unreadable_body(headers: &'a HeaderMap) -> Self {
        Self {
            headers,
            body: None,
        }
    }

    /// Header value as a string. Non-visible-ASCII values are `Err`.
    pub fn header(&self, name: &str) -> Option<Result<&'a str, AuthError>> {
        self.headers.get(name).map(|value| {
            value
                .to_str()
                .map_err(|_| AuthError::malformed(format!("{name} header is not valid text")))
        })
    }

    pub fn content_type(&self) -> Option<&'a str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }
}

/// Result of an authentication attempt.
///
/// Expected failures are values, never errors propagated past the scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success(Principal),
    Failure(AuthError),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success(_))
    }

    pub fn into_result(self) -> Result<Principal, AuthError> {
        match self {
            AuthOutcome::Success(principal) => Ok(principal),
            AuthOutcome::Failure(error) => Err(error),
        }
    }
}

impl From<Result<Principal, AuthError>> for AuthOutcome {
    fn from(result: Result<Principal, AuthError>) -> Self {
        match result {
            Ok(principal) => AuthOutcome::Success(principal),
            Err(error) => AuthOutcome::Failure(error),
        }
    }
}

/// An authentication strategy.
///
/// Implementations are stateless with respect to shared memory and may run
/// concurrently without locking.
pub trait AuthenticationScheme: Send + Sync {
    fn name(&self) -> SchemeName;

    fn authenticate(&self, request: &AuthRequest<'_>) -> AuthOutcome;
}
