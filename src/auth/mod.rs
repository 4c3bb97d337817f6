// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Four interchangeable authentication schemes behind one trait, plus the
//! policy layer that binds routes to the schemes they accept.
//!
//! ## Schemes
//!
//! | Scheme | Credential source | Principal subject |
//! |--------|-------------------|-------------------|
//! | Basic | `Authorization: Basic base64(user:pass)` | username |
//! | API Key | `x-api-key` header | `API User` |
//! | Client Credentials | `client_id`/`client_secret` in a form or JSON body | client id |
//! | Bearer | `Authorization: Bearer <HS256 JWT>` | `sub` claim |
//!
//! ## Auth Flow
//!
//! 1. [`middleware::require_policy`] runs for every protected route
//! 2. The route's [`AccessPolicy`] selects the schemes to try
//! 3. [`CombinedAuthenticator`] tries them in registration order and stops
//!    at the first success
//! 4. The resulting [`Principal`] is stored in request extensions and read
//!    by handlers through [`Auth`]
//!
//! All authentication failures produce the same 401 body. The specific
//! reason is only logged.

pub mod api_key;
pub mod basic;
pub mod bearer;
pub mod claims;
pub mod client_credentials;
pub mod combined;
pub mod credentials;
pub mod error;
pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod policy;
pub mod scheme;

pub use claims::{Principal, TokenClaims};
pub use combined::CombinedAuthenticator;
pub use error::AuthError;
pub use extractor::Auth;
pub use jwt::{IssuedToken, JwtAuthenticator};
pub use middleware::{require_policy, MAX_CREDENTIAL_BODY_BYTES};
pub use policy::AccessPolicy;
pub use scheme::{AuthOutcome, AuthRequest, AuthenticationScheme, SchemeName};
