// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP Basic authentication.

use axum::http::header::AUTHORIZATION;
use base64ct::{Base64, Encoding};

use super::{
    credentials::Credential, AuthError, AuthOutcome, AuthRequest, AuthenticationScheme, Principal,
    SchemeName,
};

/// Accepts `Authorization: Basic <base64(username:password)>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicScheme;

impl BasicScheme {
    fn extract(request: &AuthRequest<'_>) -> Result<Credential, AuthError> {
        let header = request
            .header(AUTHORIZATION.as_str())
            .ok_or_else(|| AuthError::missing("Authorization header is missing"))??;

        let encoded = header
            .strip_prefix("Basic ")
            .ok_or_else(|| AuthError::missing("Authorization header is not Basic"))?;

        let decoded = Base64::decode_vec(encoded)
            .map_err(|_| AuthError::malformed("Invalid base64 in Basic credentials"))?;
        let decoded = String::from_utf8(decoded)
            .map_err(|_| AuthError::malformed("Basic credentials are not valid UTF-8"))?;

        let (username, password) = decoded
            .split_once(':')
            .ok_or_else(|| AuthError::malformed("Invalid credentials"))?;

        Ok(Credential::Basic {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

impl AuthenticationScheme for BasicScheme {
    fn name(&self) -> SchemeName {
        SchemeName::Basic
    }

    fn authenticate(&self, request: &AuthRequest<'_>) -> AuthOutcome {
        Self::extract(request)
            .and_then(|credential| match credential {
                Credential::Basic { ref username, .. } if credential.is_known() => {
                    Ok(Principal::new(username.clone(), SchemeName::Basic))
                }
                _ => Err(AuthError::invalid("Invalid username or password")),
            })
            .into()
    }
}
