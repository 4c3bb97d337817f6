// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Testing API - Authentication Test Service
//!
//! An HTTP service for exercising API clients against several
//! authentication schemes, retry behavior, slow responses and generated
//! records.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Basic, API key, client credentials and JWT bearer authentication
//! - `config` - Environment configuration
//! - `fake_data` - Random record generators
//! - `retry` - Per-id retry counters

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod fake_data;
pub mod models;
pub mod retry;
pub mod state;
