// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer token issuance and validation.
//!
//! Tokens are HMAC-SHA256 signed with a shared secret, carry a fixed issuer
//! and audience, and expire after the configured lifetime. Validation
//! allows no clock skew. Nothing is stored server-side.

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use super::{claims::TokenClaims, AuthError};
use crate::config::JwtConfig;

/// A freshly signed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact serialized JWT
    pub value: String,
    /// Seconds until expiry, measured at issuance
    pub expires_in: i64,
}

/// Signs and verifies bearer tokens.
pub struct JwtAuthenticator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl_secs: i64,
}

impl JwtAuthenticator {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            header: Header::new(Algorithm::HS256),
            validation,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl_secs: config.ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Issue a token for `subject`, valid from now.
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, AuthError> {
        self.issue_at(subject, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `issued_at`.
    pub(crate) fn issue_at(&self, subject: &str, issued_at: i64) -> Result<IssuedToken, AuthError> {
        let expires_at = issued_at + self.ttl_secs;
        let claims = TokenClaims {
            sub: subject.to_string(),
            name: subject.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: issued_at,
            nbf: issued_at,
            exp: expires_at,
        };

        let value = encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))?;

        Ok(IssuedToken {
            value,
            expires_in: expires_at - Utc::now().timestamp(),
        })
    }

    /// Verify signature, issuer, audience and lifetime.
    pub fn validate(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::invalid("Token has expired"),
                ErrorKind::InvalidSignature => AuthError::invalid("Token signature is invalid"),
                ErrorKind::InvalidIssuer => AuthError::invalid("Token issuer is invalid"),
                ErrorKind::InvalidAudience => AuthError::invalid("Token audience is invalid"),
                ErrorKind::ImmatureSignature => AuthError::invalid("Token is not yet valid"),
                ErrorKind::InvalidAlgorithm => {
                    AuthError::invalid("Token algorithm is not accepted")
                }
                _ => AuthError::malformed("Token is malformed"),
            })?;

        Ok(token_data.claims)
    }
}
