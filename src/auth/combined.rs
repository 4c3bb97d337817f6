// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ordered, short-circuiting composition of authentication schemes.
//!
//! Schemes are tried in registration order: Basic, API key, client
//! credentials, then JWT bearer. The first success wins. The schemes are
//! mutually exclusive by request shape, so order only matters for a request
//! that could satisfy two of them at once; in that case the earlier scheme
//! wins.

use std::sync::Arc;

use tracing::debug;

use super::{
    api_key::ApiKeyScheme, basic::BasicScheme, bearer::JwtBearerScheme,
    client_credentials::ClientCredentialsScheme, jwt::JwtAuthenticator, AuthError, AuthOutcome,
    AuthRequest, AuthenticationScheme, SchemeName,
};

pub struct CombinedAuthenticator {
    schemes: Vec<Arc<dyn AuthenticationScheme>>,
}

impl CombinedAuthenticator {
    /// Register the four built-in schemes in priority order.
    pub fn new(jwt: Arc<JwtAuthenticator>) -> Self {
        let schemes: Vec<Arc<dyn AuthenticationScheme>> = vec![
            Arc::new(BasicScheme),
            Arc::new(ApiKeyScheme),
            Arc::new(ClientCredentialsScheme),
            Arc::new(JwtBearerScheme::new(jwt)),
        ];
        Self::with_schemes(schemes)
    }

    pub fn with_schemes(schemes: Vec<Arc<dyn AuthenticationScheme>>) -> Self {
        Self { schemes }
    }

    /// Registered scheme names, in try order.
    pub fn scheme_names(&self) -> Vec<SchemeName> {
        self.schemes.iter().map(|scheme| scheme.name()).collect()
    }

    /// Try every registered scheme.
    pub fn authenticate(&self, request: &AuthRequest<'_>) -> AuthOutcome {
        self.run(self.schemes.iter(), request)
    }

    /// Try only the schemes in `allowed`, still in registration order.
    ///
    /// With exactly one allowed scheme its own failure is returned; otherwise
    /// a failure collapses to [`AuthError::Unauthenticated`].
    pub fn authenticate_with(
        &self,
        allowed: &[SchemeName],
        request: &AuthRequest<'_>,
    ) -> AuthOutcome {
        let selected = self
            .schemes
            .iter()
            .filter(|scheme| allowed.contains(&scheme.name()));
        self.run(selected, request)
    }

    fn run<'s>(
        &self,
        schemes: impl Iterator<Item = &'s Arc<dyn AuthenticationScheme>>,
        request: &AuthRequest<'_>,
    ) -> AuthOutcome {
        let mut tried = 0usize;
        let mut last_failure = None;

        for scheme in schemes {
            tried += 1;
            match scheme.authenticate(request) {
                AuthOutcome::Success(principal) => {
                    debug!(scheme = %scheme.name(), subject = %principal.subject, "authenticated");
                    return AuthOutcome::Success(principal);
                }
                AuthOutcome::Failure(error) => {
                    debug!(scheme = %scheme.name(), reason = %error, "scheme rejected request");
                    last_failure = Some(error);
                }
            }
        }

        match (tried, last_failure) {
            (1, Some(error)) => AuthOutcome::Failure(error),
            _ => AuthOutcome::Failure(AuthError::Unauthenticated),
        }
    }
}
