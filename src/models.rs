// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies used by the REST API. All types derive
//! `Serialize` and/or `Deserialize` plus `ToSchema` for OpenAPI
//! documentation.
//!
//! ## Model Categories
//!
//! - **Messages**: the `{"message": ..}` body shared by the auth and
//!   simulation endpoints
//! - **Tokens**: login and client-credentials token exchange
//! - **Dates**: echo endpoints for date values
//! - **Fake data**: generated user, policy, risk, incident and control records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// =============================================================================
// Messages
// =============================================================================

/// Plain success message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    /// The message of the response.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// `Hello, <name>!`
    pub fn greeting(name: &str) -> Self {
        Self::new(format!("Hello, {name}!"))
    }
}

// =============================================================================
// Tokens
// =============================================================================

/// Credentials exchanged for a bearer token at `/generate-token`.
///
/// Both fields are optional at the JSON level so a missing field is a
/// validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Basic-auth username.
    #[schema(example = "admin")]
    pub username: Option<String>,
    /// Basic-auth password.
    #[schema(example = "password")]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Username and password, when both are present and non-blank.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().filter(|v| !v.trim().is_empty())?;
        let password = self.password.as_deref().filter(|v| !v.trim().is_empty())?;
        Some((username, password))
    }
}

/// Response from `/generate-token`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Signed HS256 JWT.
    pub token: String,
}

/// OAuth2 token response from `/access-token`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessTokenResponse {
    /// Always `Bearer`.
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Signed HS256 JWT.
    pub access_token: String,
    /// Seconds until the token expires.
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Client credentials body for `/access-token`.
///
/// Documentation only; the authentication middleware reads the body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ClientCredentialsRequest {
    #[schema(example = "client")]
    pub client_id: String,
    #[schema(example = "secret")]
    pub client_secret: String,
}

// =============================================================================
// Dates
// =============================================================================

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateQuery {
    /// Date value to echo back.
    pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateBodyRequest {
    /// Date value to echo back.
    pub date_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct DateResponse {
    pub value: String,
}

// =============================================================================
// Fake Data
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The unique identifier of the user.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `Active` or `Inactive`.
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// The unique identifier of the policy.
    pub id: String,
    pub name: String,
    pub description: String,
    /// `Active` or `Inactive`.
    pub status: String,
    /// Publication date (midnight UTC).
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    /// The unique identifier of the risk.
    pub id: String,
    /// The title of the risk.
    pub title: String,
    /// The severity of the risk.
    pub severity: String,
    /// The impact of the risk.
    pub impact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// The unique identifier of the incident.
    pub id: String,
    pub title: String,
    /// `Open`, `Closed` or `In Progress`.
    pub status: String,
    /// `Low`, `Medium` or `High`.
    pub priority: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    /// The unique identifier of the control.
    pub id: String,
    /// The name of the control.
    pub name: String,
    /// The unique identifier of the policy associated with the control.
    pub policy_id: String,
    /// The status of the control.
    pub status: String,
}
