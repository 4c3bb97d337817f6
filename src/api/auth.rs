// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, error};

use crate::{
    auth::{credentials::Credential, Auth, AuthError},
    error::ApiError,
    models::{
        AccessTokenResponse, ClientCredentialsRequest, LoginRequest, MessageResponse, TokenResponse,
    },
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/no-auth",
    tag = "Authentication",
    responses((status = 200, body = MessageResponse))
)]
pub async fn no_auth() -> Json<MessageResponse> {
    Json(MessageResponse::new("You are in!"))
}

#[utoipa::path(
    get,
    path = "/basic",
    tag = "Authentication",
    security(("Basic" = [])),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, description = "Missing or invalid Basic credentials")
    )
)]
pub async fn basic(Auth(principal): Auth) -> Json<MessageResponse> {
    Json(MessageResponse::greeting(&principal.subject))
}

#[utoipa::path(
    get,
    path = "/api-key",
    tag = "Authentication",
    security(("ApiKey" = [])),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, description = "Missing or invalid API key")
    )
)]
pub async fn api_key(Auth(principal): Auth) -> Json<MessageResponse> {
    Json(MessageResponse::greeting(&principal.subject))
}

#[utoipa::path(
    get,
    path = "/bearer",
    tag = "Authentication",
    security(("Bearer" = [])),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
pub async fn bearer(Auth(principal): Auth) -> Json<MessageResponse> {
    Json(MessageResponse::greeting(&principal.subject))
}

/// Same check as `/bearer`, for clients configured with an OAuth2 flow.
#[utoipa::path(
    get,
    path = "/oauth2",
    tag = "Authentication",
    security(("ClientCredentials" = [])),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, description = "Missing or invalid access token")
    )
)]
pub async fn oauth2(Auth(principal): Auth) -> Json<MessageResponse> {
    Json(MessageResponse::greeting(&principal.subject))
}

/// Exchange the Basic test credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/generate-token",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, body = TokenResponse),
        (status = 400, description = "Username or password missing"),
        (status = 401, description = "Invalid username or password")
    )
)]
pub async fn generate_token(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection, "login body rejected");
        ApiError::bad_request("Invalid login request. Username and password are required.")
    })?;

    let (username, password) = request.credentials().ok_or_else(|| {
        ApiError::bad_request("Invalid login request. Username and password are required.")
    })?;

    let credential = Credential::Basic {
        username: username.to_string(),
        password: password.to_string(),
    };
    if !credential.is_known() {
        debug!("login rejected");
        return Err(ApiError::unauthorized("Invalid username or password."));
    }

    let token = state.jwt.issue(username).map_err(token_error)?;
    Ok(Json(TokenResponse { token: token.value }))
}

/// OAuth2 client-credentials token endpoint.
///
/// `client_id` and `client_secret` are checked by the authentication
/// middleware before this handler runs.
#[utoipa::path(
    post,
    path = "/access-token",
    tag = "Authentication",
    security(("ClientCredentials" = [])),
    request_body(
        content = ClientCredentialsRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, body = AccessTokenResponse),
        (status = 401, description = "Missing or invalid client credentials")
    )
)]
pub async fn access_token(
    State(state): State<AppState>,
    Auth(principal): Auth,
) -> Result<Json<AccessTokenResponse>, ApiError> {
    let token = state.jwt.issue(&principal.subject).map_err(token_error)?;
    Ok(Json(AccessTokenResponse {
        token_type: "Bearer".to_string(),
        access_token: token.value,
        expires_in: token.expires_in,
    }))
}

fn token_error(err: AuthError) -> ApiError {
    error!(error = %err, "failed to issue token");
    ApiError::internal("Failed to issue token")
}
