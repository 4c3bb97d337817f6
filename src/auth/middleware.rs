// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Per-route authentication middleware.
//!
//! Each protected route group is wrapped with [`require_policy`], bound to
//! the [`AccessPolicy`] it enforces:
//!
//! ```rust,ignore
//! Router::new()
//!     .route("/basic", get(handler))
//!     .route_layer(axum::middleware::from_fn_with_state(
//!         (state.clone(), AccessPolicy::Basic),
//!         require_policy,
//!     ));
//! ```
//!
//! On success the authenticated [`Principal`](super::Principal) is stored in
//! the request extensions, where the [`Auth`](super::Auth) extractor finds it.

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::{AccessPolicy, AuthRequest};
use crate::state::AppState;

/// Upper bound on a buffered request body used for client credentials.
pub const MAX_CREDENTIAL_BODY_BYTES: usize = 64 * 1024;

pub async fn require_policy(
    State((state, policy)): State<(AppState, AccessPolicy)>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();

    // Only client-credential schemes look at the body; everything else
    // leaves it streaming. A body that cannot be buffered fails those
    // schemes alone.
    let (body, bytes) = if policy.reads_body() {
        match to_bytes(body, MAX_CREDENTIAL_BODY_BYTES).await {
            Ok(bytes) => (Body::from(bytes.clone()), Some(bytes)),
            Err(err) => {
                debug!(%policy, error = %err, "could not buffer request body");
                (Body::empty(), None)
            }
        }
    } else {
        (body, Some(Bytes::new()))
    };

    let outcome = {
        let auth_request = match &bytes {
            Some(bytes) => AuthRequest::new(&parts.headers, bytes),
            None => AuthRequest::unreadable_body(&parts.headers),
        };
        policy.evaluate(&state.authenticator, &auth_request)
    };

    match outcome {
        Ok(principal) => {
            debug!(
                %policy,
                subject = %principal.subject,
                scheme = %principal.scheme,
                "request authorized"
            );
            parts.extensions.insert(principal);
            next.run(Request::from_parts(parts, body)).await
        }
        Err(err) => {
            debug!(
                %policy,
                path = %parts.uri.path(),
                code = err.error_code(),
                reason = %err,
                "request rejected"
            );
            err.into_response()
        }
    }
}
