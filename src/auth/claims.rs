// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWT claims and the authenticated principal.

use serde::{Deserialize, Serialize};

use super::scheme::SchemeName;

/// Claims carried by bearer tokens issued by this service.
///
/// `sub` is the identity claim; `name` mirrors it for clients that display
/// a user name. There is no `jti`, so two tokens issued in the same second
/// for the same subject are identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (authenticated user or client id)
    pub sub: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Not before timestamp
    pub nbf: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Identity produced by a successful authentication.
///
/// Built once per request and handed to handlers explicitly through the
/// [`Auth`](super::Auth) extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    /// Stable subject identifier
    pub subject: String,
    /// Scheme that authenticated the request
    pub scheme: SchemeName,
}

impl Principal {
    pub fn new(subject: impl Into<String>, scheme: SchemeName) -> Self {
        Self {
            subject: subject.into(),
            scheme,
        }
    }

    /// Create from verified token claims.
    pub fn from_claims(claims: TokenClaims) -> Self {
        Self::new(claims.sub, SchemeName::Bearer)
    }

    /// Whether the principal carries a usable subject claim.
    pub fn has_subject(&self) -> bool {
        !self.subject.trim().is_empty()
    }
}
