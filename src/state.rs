// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{CombinedAuthenticator, JwtAuthenticator};
use crate::config::AppConfig;
use crate::retry::RetryTracker;

#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<CombinedAuthenticator>,
    pub jwt: Arc<JwtAuthenticator>,
    pub retry: Arc<RetryTracker>,
    /// Delay applied by `/timeout`.
    pub timeout_delay: Duration,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let jwt = Arc::new(JwtAuthenticator::new(&config.jwt));
        Self {
            authenticator: Arc::new(CombinedAuthenticator::new(jwt.clone())),
            jwt,
            retry: Arc::new(RetryTracker::new(config.retry_threshold)),
            timeout_delay: config.timeout_delay,
        }
    }

    pub fn with_timeout_delay(mut self, delay: Duration) -> Self {
        self.timeout_delay = delay;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
