// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |
//! | `JWT_SECRET` | HMAC-SHA256 signing secret | built-in test secret |
//! | `JWT_ISSUER` | Issuer written to and expected in tokens | `TestingAPI` |
//! | `JWT_AUDIENCE` | Audience written to and expected in tokens | `Onspring` |
//! | `JWT_TTL_SECS` | Token lifetime in seconds | `86400` |
//! | `RETRY_THRESHOLD` | Failed attempts before `/retry/{id}` succeeds | `2` |
//! | `TIMEOUT_DELAY_SECS` | Delay applied by `/timeout` | `31` |
//! | `TLS_CERT_PATH` | PEM certificate chain (enables HTTPS with `TLS_KEY_PATH`) | unset |
//! | `TLS_KEY_PATH` | PEM private key | unset |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

pub const JWT_SECRET_ENV: &str = "JWT_SECRET";
pub const JWT_ISSUER_ENV: &str = "JWT_ISSUER";
pub const JWT_AUDIENCE_ENV: &str = "JWT_AUDIENCE";
pub const JWT_TTL_SECS_ENV: &str = "JWT_TTL_SECS";

pub const RETRY_THRESHOLD_ENV: &str = "RETRY_THRESHOLD";
pub const TIMEOUT_DELAY_SECS_ENV: &str = "TIMEOUT_DELAY_SECS";

pub const TLS_CERT_PATH_ENV: &str = "TLS_CERT_PATH";
pub const TLS_KEY_PATH_ENV: &str = "TLS_KEY_PATH";

/// Shared HMAC secret for bearer tokens.
///
/// This is a fixed test value; the service never protects real data.
pub const DEFAULT_JWT_SECRET: &str = "This is a secret key for JWT token generation.";
pub const DEFAULT_JWT_ISSUER: &str = "TestingAPI";
pub const DEFAULT_JWT_AUDIENCE: &str = "Onspring";
/// One day.
pub const DEFAULT_JWT_TTL_SECS: i64 = 86_400;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RETRY_THRESHOLD: u32 = 2;
pub const DEFAULT_TIMEOUT_DELAY_SECS: u64 = 31;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Signing and validation parameters for bearer tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    /// Token lifetime in seconds.
    pub ttl_secs: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_JWT_SECRET.to_string(),
            issuer: DEFAULT_JWT_ISSUER.to_string(),
            audience: DEFAULT_JWT_AUDIENCE.to_string(),
            ttl_secs: DEFAULT_JWT_TTL_SECS,
        }
    }
}

/// PEM file locations for HTTPS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

/// Complete service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    pub jwt: JwtConfig,
    pub retry_threshold: u32,
    pub timeout_delay: Duration,
    /// HTTPS is enabled only when both PEM paths are present.
    pub tls: Option<TlsConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            log_format: LogFormat::default(),
            jwt: JwtConfig::default(),
            retry_threshold: DEFAULT_RETRY_THRESHOLD,
            timeout_delay: Duration::from_secs(DEFAULT_TIMEOUT_DELAY_SECS),
            tls: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unparsable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host: IpAddr = lookup(HOST_ENV)
            .and_then(|h| h.parse().ok())
            .unwrap_or(defaults.bind_addr.ip());
        let port: u16 = lookup(PORT_ENV)
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let log_format = lookup(LOG_FORMAT_ENV)
            .map(|f| LogFormat::parse(&f))
            .unwrap_or_default();

        let jwt = JwtConfig {
            secret: lookup(JWT_SECRET_ENV).unwrap_or(defaults.jwt.secret),
            issuer: lookup(JWT_ISSUER_ENV).unwrap_or(defaults.jwt.issuer),
            audience: lookup(JWT_AUDIENCE_ENV).unwrap_or(defaults.jwt.audience),
            ttl_secs: lookup(JWT_TTL_SECS_ENV)
                .and_then(|t| t.parse().ok())
                .filter(|ttl: &i64| *ttl > 0)
                .unwrap_or(DEFAULT_JWT_TTL_SECS),
        };

        let retry_threshold = lookup(RETRY_THRESHOLD_ENV)
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_RETRY_THRESHOLD);

        let timeout_delay = lookup(TIMEOUT_DELAY_SECS_ENV)
            .and_then(|t| t.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout_delay);

        let tls = match (lookup(TLS_CERT_PATH_ENV), lookup(TLS_KEY_PATH_ENV)) {
            (Some(cert), Some(key)) => Some(TlsConfig {
                cert_path: PathBuf::from(cert),
                key_path: PathBuf::from(key),
            }),
            _ => None,
        };

        Self {
            bind_addr: SocketAddr::new(host, port),
            log_format,
            jwt,
            retry_threshold,
            timeout_delay,
            tls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.jwt.issuer, DEFAULT_JWT_ISSUER);
        assert_eq!(config.jwt.audience, DEFAULT_JWT_AUDIENCE);
        assert_eq!(config.jwt.ttl_secs, 86_400);
        assert_eq!(config.retry_threshold, 2);
        assert_eq!(config.timeout_delay, Duration::from_secs(31));
        assert!(config.tls.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (HOST_ENV, "127.0.0.1"),
            (PORT_ENV, "9000"),
            (LOG_FORMAT_ENV, "JSON"),
            (JWT_ISSUER_ENV, "issuer"),
            (RETRY_THRESHOLD_ENV, "5"),
            (TIMEOUT_DELAY_SECS_ENV, "1"),
        ]));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.jwt.issuer, "issuer");
        assert_eq!(config.retry_threshold, 5);
        assert_eq!(config.timeout_delay, Duration::from_secs(1));
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (PORT_ENV, "not-a-port"),
            (JWT_TTL_SECS_ENV, "-5"),
        ]));
        assert_eq!(config.bind_addr.port(), DEFAULT_PORT);
        assert_eq!(config.jwt.ttl_secs, DEFAULT_JWT_TTL_SECS);
    }

    #[test]
    fn tls_requires_both_paths() {
        let only_cert = AppConfig::from_lookup(lookup_from(&[(TLS_CERT_PATH_ENV, "cert.pem")]));
        assert!(only_cert.tls.is_none());

        let both = AppConfig::from_lookup(lookup_from(&[
            (TLS_CERT_PATH_ENV, "cert.pem"),
            (TLS_KEY_PATH_ENV, "key.pem"),
        ]));
        assert_eq!(
            both.tls,
            Some(TlsConfig {
                cert_path: PathBuf::from("cert.pem"),
                key_path: PathBuf::from("key.pem"),
            })
        );
    }
}
