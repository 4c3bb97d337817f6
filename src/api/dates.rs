// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{rejection::JsonRejection, Query},
    Json,
};

use crate::{
    error::ApiError,
    models::{DateBodyRequest, DateQuery, DateResponse},
};

/// Echo a date sent in the query string.
#[utoipa::path(
    get,
    path = "/date",
    params(DateQuery),
    tag = "Dates",
    responses(
        (status = 200, body = DateResponse),
        (status = 400, description = "`date` is missing")
    )
)]
pub async fn date_from_query(
    Query(query): Query<DateQuery>,
) -> Result<Json<DateResponse>, ApiError> {
    let value = query
        .date
        .ok_or_else(|| ApiError::bad_request("The date query parameter is required."))?;
    Ok(Json(DateResponse { value }))
}

/// Echo a date sent in a JSON body.
#[utoipa::path(
    post,
    path = "/date-body",
    request_body = DateBodyRequest,
    tag = "Dates",
    responses(
        (status = 200, body = DateResponse),
        (status = 400, description = "`dateValue` is missing or the body is not JSON")
    )
)]
pub async fn date_from_body(
    payload: Result<Json<DateBodyRequest>, JsonRejection>,
) -> Result<Json<DateResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let value = body
        .date_value
        .ok_or_else(|| ApiError::bad_request("dateValue is required."))?;
    Ok(Json(DateResponse { value }))
}
