// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    auth::Auth, error::ApiError, models::MessageResponse, retry::RetryAttempt, state::AppState,
};

/// Fails with 503 until the id has been retried enough times.
#[utoipa::path(
    get,
    path = "/retry/{id}",
    params(("id" = String, Path, description = "Caller-chosen key for the retry counter")),
    tag = "Retry",
    security(("Basic" = []), ("ApiKey" = []), ("ClientCredentials" = []), ("Bearer" = [])),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, description = "Authentication failed"),
        (status = 503, description = "Retry failed!")
    )
)]
pub async fn retry(
    Auth(_principal): Auth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    match state.retry.record_attempt(&id) {
        RetryAttempt::Failed { .. } => Err(ApiError::service_unavailable("Retry failed!")),
        RetryAttempt::Succeeded => Ok(Json(MessageResponse::new("Finally!"))),
    }
}
