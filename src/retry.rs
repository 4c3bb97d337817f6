// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Per-id attempt counter behind `/retry/{id}`.
//!
//! Models a flaky dependency: the first `threshold` attempts for an id fail,
//! the next one succeeds and clears the id so the cycle starts over.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tracing::debug;

/// Result of one recorded attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAttempt {
    /// Attempt number `attempt` (1-based) failed.
    Failed { attempt: u32 },
    Succeeded,
}

impl RetryAttempt {
    pub fn succeeded(&self) -> bool {
        matches!(self, RetryAttempt::Succeeded)
    }
}

/// Process-wide attempt counters keyed by caller-supplied id.
pub struct RetryTracker {
    attempts: Mutex<HashMap<String, u32>>,
    threshold: u32,
}

impl RetryTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            attempts: Mutex::new(HashMap::new()),
            threshold,
        }
    }

    /// Record an attempt for `id`.
    ///
    /// The check, increment and clear happen under one lock, so concurrent
    /// attempts for the same id are serialized.
    pub fn record_attempt(&self, id: &str) -> RetryAttempt {
        // A panic while holding the lock cannot leave the map half-updated.
        let mut attempts = self.attempts.lock().unwrap_or_else(PoisonError::into_inner);

        let count = attempts.entry(id.to_string()).or_insert(0);
        if *count < self.threshold {
            *count += 1;
            let attempt = *count;
            debug!(id, attempt, threshold = self.threshold, "retry attempt failed");
            RetryAttempt::Failed { attempt }
        } else {
            attempts.remove(id);
            debug!(id, "retry attempt succeeded");
            RetryAttempt::Succeeded
        }
    }

    /// Number of ids with a pending failure count.
    pub fn pending(&self) -> usize {
        self.attempts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for RetryTracker {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_RETRY_THRESHOLD)
    }
}
