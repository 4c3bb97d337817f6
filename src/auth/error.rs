// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Authentication error type.
///
/// The `Display` text is the failure reason used in logs and tests. Clients
/// only ever see the uniform body produced by [`IntoResponse`], so the
/// specific failed check never leaks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No header or body field carrying the credential
    #[error("{0}")]
    MissingCredential(String),
    /// Credential present but unparsable (bad base64, bad content type, bad token)
    #[error("{0}")]
    MalformedCredential(String),
    /// Credential well-formed but wrong
    #[error("{0}")]
    InvalidCredential(String),
    /// No scheme accepted the request
    #[error("Invalid authentication information.")]
    Unauthenticated,
    /// Authenticated principal does not satisfy the route policy
    #[error("{0}")]
    Forbidden(String),
    /// Token signing failed
    #[error("Internal authentication error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: &'static str,
    error_code: &'static str,
}

impl AuthError {
    pub fn missing(reason: impl Into<String>) -> Self {
        AuthError::MissingCredential(reason.into())
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        AuthError::MalformedCredential(reason.into())
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        AuthError::InvalidCredential(reason.into())
    }

    /// Failure reason for logs and tests.
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingCredential(_) => "missing_credential",
            AuthError::MalformedCredential(_) => "malformed_credential",
            AuthError::InvalidCredential(_) => "invalid_credential",
            AuthError::Unauthenticated => "unauthenticated",
            AuthError::Forbidden(_) => "policy_not_satisfied",
            AuthError::Internal(_) => "internal_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredential(_)
            | AuthError::MalformedCredential(_)
            | AuthError::InvalidCredential(_)
            | AuthError::Unauthenticated
            | AuthError::Forbidden(_) => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = if status == StatusCode::UNAUTHORIZED {
            AuthErrorBody {
                error: "Unauthorized",
                error_code: "unauthorized",
            }
        } else {
            AuthErrorBody {
                error: "Server error",
                error_code: "internal_error",
            }
        };
        (status, Json(body)).into_response()
    }
}
