// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! API key authentication.

use super::{
    credentials::{Credential, API_KEY_SUBJECT},
    AuthError, AuthOutcome, AuthRequest, AuthenticationScheme, Principal, SchemeName,
};

/// Header carrying the key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Accepts `x-api-key: <key>` with an exact match on the configured key.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApiKeyScheme;

impl AuthenticationScheme for ApiKeyScheme {
    fn name(&self) -> SchemeName {
        SchemeName::ApiKey
    }

    fn authenticate(&self, request: &AuthRequest<'_>) -> AuthOutcome {
        let key = match request.header(API_KEY_HEADER) {
            None => return AuthOutcome::Failure(AuthError::missing("API key not found.")),
            Some(Err(error)) => return AuthOutcome::Failure(error),
            Some(Ok(key)) => key,
        };

        if Credential::ApiKey(key.to_string()).is_known() {
            AuthOutcome::Success(Principal::new(API_KEY_SUBJECT, SchemeName::ApiKey))
        } else {
            AuthOutcome::Failure(AuthError::invalid("Invalid API key."))
        }
    }
}
