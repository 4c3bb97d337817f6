// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for the authenticated principal.
//!
//! Handlers behind [`require_policy`](super::middleware::require_policy)
//! take the principal directly:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(principal): Auth) -> impl IntoResponse {
//!     // principal.subject, principal.scheme
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::{AuthError, Principal};

/// Principal set by the authentication middleware.
///
/// Rejects with 401 when the route was not wrapped by the middleware.
pub struct Auth(pub Principal);

impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(Auth)
            .ok_or(AuthError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SchemeName;
    use axum::http::Request;

    #[tokio::test]
    async fn reads_principal_from_extensions() {
        let mut request = Request::new(());
        request
            .extensions_mut()
            .insert(Principal::new("admin", SchemeName::Basic));
        let (mut parts, _) = request.into_parts();

        let Auth(principal) = Auth::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(principal, Principal::new("admin", SchemeName::Basic));
    }

    #[tokio::test]
    async fn rejects_without_principal() {
        let (mut parts, _) = Request::new(()).into_parts();
        let result = Auth::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }
}
