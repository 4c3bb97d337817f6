// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWT bearer authentication.

use std::sync::Arc;

use axum::http::header::AUTHORIZATION;

use super::{
    jwt::JwtAuthenticator, AuthError, AuthOutcome, AuthRequest, AuthenticationScheme, Principal,
    SchemeName,
};

/// Accepts `Authorization: Bearer <jwt>` signed by this service.
#[derive(Clone)]
pub struct JwtBearerScheme {
    jwt: Arc<JwtAuthenticator>,
}

impl JwtBearerScheme {
    pub fn new(jwt: Arc<JwtAuthenticator>) -> Self {
        Self { jwt }
    }
}

impl AuthenticationScheme for JwtBearerScheme {
    fn name(&self) -> SchemeName {
        SchemeName::Bearer
    }

    fn authenticate(&self, request: &AuthRequest<'_>) -> AuthOutcome {
        let result = request
            .header(AUTHORIZATION.as_str())
            .ok_or_else(|| AuthError::missing("Authorization header is missing"))
            .and_then(|header| header)
            .and_then(|header| match header.split_once(' ') {
                Some((scheme, token)) if scheme.eq_ignore_ascii_case("Bearer") => Ok(token.trim()),
                _ => Err(AuthError::missing("Authorization header is not Bearer")),
            })
            .and_then(|token| self.jwt.validate(token))
            .map(Principal::from_claims);

        result.into()
    }
}
