// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Route authorization policies.
//!
//! ## Policy Table
//!
//! | Policy | Accepted schemes | Required claim |
//! |--------|------------------|----------------|
//! | `Basic` | Basic | non-empty subject |
//! | `API Key` | API Key | non-empty subject |
//! | `Bearer` | Bearer | non-empty subject |
//! | `Client Credentials` | Client Credentials | non-empty subject |
//! | `CombinedAuthentication` | Basic, API Key, Client Credentials, Bearer | non-empty subject |

use std::fmt;

use super::{AuthError, AuthRequest, CombinedAuthenticator, Principal, SchemeName};

const ALL_SCHEMES: &[SchemeName] = &[
    SchemeName::Basic,
    SchemeName::ApiKey,
    SchemeName::ClientCredentials,
    SchemeName::Bearer,
];

/// Authorization policy bound to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessPolicy {
    Basic,
    ApiKey,
    Bearer,
    ClientCredentials,
    /// Accepts any of the four schemes
    Combined,
}

impl AccessPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            AccessPolicy::Basic => SchemeName::Basic.as_str(),
            AccessPolicy::ApiKey => SchemeName::ApiKey.as_str(),
            AccessPolicy::Bearer => SchemeName::Bearer.as_str(),
            AccessPolicy::ClientCredentials => SchemeName::ClientCredentials.as_str(),
            AccessPolicy::Combined => "CombinedAuthentication",
        }
    }

    /// Schemes allowed to authenticate requests for this policy.
    pub fn schemes(&self) -> &'static [SchemeName] {
        match self {
            AccessPolicy::Basic => &[SchemeName::Basic],
            AccessPolicy::ApiKey => &[SchemeName::ApiKey],
            AccessPolicy::Bearer => &[SchemeName::Bearer],
            AccessPolicy::ClientCredentials => &[SchemeName::ClientCredentials],
            AccessPolicy::Combined => ALL_SCHEMES,
        }
    }

    /// Whether a scheme of this policy reads credentials from the body.
    pub fn reads_body(&self) -> bool {
        self.schemes().contains(&SchemeName::ClientCredentials)
    }

    /// Check an authenticated principal against this policy.
    pub fn authorize(&self, principal: &Principal) -> Result<(), AuthError> {
        if !self.schemes().contains(&principal.scheme) {
            return Err(AuthError::Forbidden(format!(
                "{} is not accepted by the {} policy",
                principal.scheme,
                self.name()
            )));
        }

        if !principal.has_subject() {
            return Err(AuthError::Forbidden(
                "Principal has no subject identifier".to_string(),
            ));
        }

        Ok(())
    }

    /// Authenticate with this policy's schemes, then authorize the result.
    pub fn evaluate(
        &self,
        authenticator: &CombinedAuthenticator,
        request: &AuthRequest<'_>,
    ) -> Result<Principal, AuthError> {
        let principal = authenticator
            .authenticate_with(self.schemes(), request)
            .into_result()?;
        self.authorize(&principal)?;
        Ok(principal)
    }
}

impl fmt::Display for AccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
