// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};
use tracing::debug;

use crate::{models::MessageResponse, state::AppState};

/// Sleeps for the configured delay before answering, to exercise client timeouts.
#[utoipa::path(
    get,
    path = "/timeout",
    tag = "Timeout",
    security(("Basic" = []), ("ApiKey" = []), ("ClientCredentials" = []), ("Bearer" = [])),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn timeout(State(state): State<AppState>) -> Json<MessageResponse> {
    debug!(delay_secs = state.timeout_delay.as_secs_f64(), "simulating slow response");
    tokio::time::sleep(state.timeout_delay).await;
    Json(MessageResponse::new("Timeout completed!"))
}
