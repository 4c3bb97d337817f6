// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Fake-data endpoints. Every call returns freshly generated records.

use axum::{extract::Path, Json};

use crate::{
    fake_data::{self, LIST_SIZE},
    models::{Control, Incident, Policy, Risk, User},
};

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    security(("Basic" = []), ("ApiKey" = []), ("ClientCredentials" = []), ("Bearer" = [])),
    responses(
        (status = 200, body = [User]),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn list_users() -> Json<Vec<User>> {
    Json(fake_data::many(&mut rand::thread_rng(), LIST_SIZE, fake_data::user))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "The unique identifier of the user")),
    tag = "Users",
    security(("Basic" = []), ("ApiKey" = []), ("ClientCredentials" = []), ("Bearer" = [])),
    responses(
        (status = 200, body = User),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn get_user(Path(id): Path<String>) -> Json<User> {
    let user = fake_data::user(&mut rand::thread_rng());
    Json(User { id, ..user })
}

#[utoipa::path(
    get,
    path = "/policies",
    tag = "Policies",
    security(("Basic" = []), ("ApiKey" = []), ("ClientCredentials" = []), ("Bearer" = [])),
    responses(
        (status = 200, body = [Policy]),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn list_policies() -> Json<Vec<Policy>> {
    Json(fake_data::many(&mut rand::thread_rng(), LIST_SIZE, fake_data::policy))
}

#[utoipa::path(
    get,
    path = "/policies/{id}",
    params(("id" = String, Path, description = "The unique identifier of the policy")),
    tag = "Policies",
    security(("Basic" = []), ("ApiKey" = []), ("ClientCredentials" = []), ("Bearer" = [])),
    responses(
        (status = 200, body = Policy),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn get_policy(Path(id): Path<String>) -> Json<Policy> {
    let policy = fake_data::policy(&mut rand::thread_rng());
    Json(Policy { id, ..policy })
}

#[utoipa::path(
    get,
    path = "/risks",
    tag = "Risks",
    security(("Basic" = []), ("ApiKey" = []), ("ClientCredentials" = []), ("Bearer" = [])),
    responses(
        (status = 200, body = [Risk]),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn list_risks() -> Json<Vec<Risk>> {
    Json(fake_data::many(&mut rand::thread_rng(), LIST_SIZE, fake_data::risk))
}

#[utoipa::path(
    get,
    path = "/risks/{id}",
    params(("id" = String, Path, description = "The unique identifier of the risk")),
    tag = "Risks",
    security(("Basic" = []), ("ApiKey" = []), ("ClientCredentials" = []), ("Bearer" = [])),
    responses(
        (status = 200, body = Risk),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn get_risk(Path(id): Path<String>) -> Json<Risk> {
    let risk = fake_data::risk(&mut rand::thread_rng());
    Json(Risk { id, ..risk })
}

#[utoipa::path(
    get,
    path = "/incidents",
    tag = "Incidents",
    security(("Basic" = []), ("ApiKey" = []), ("ClientCredentials" = []), ("Bearer" = [])),
    responses(
        (status = 200, body = [Incident]),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn list_incidents() -> Json<Vec<Incident>> {
    Json(fake_data::many(&mut rand::thread_rng(), LIST_SIZE, fake_data::incident))
}

#[utoipa::path(
    get,
    path = "/incidents/{id}",
    params(("id" = String, Path, description = "The unique identifier of the incident")),
    tag = "Incidents",
    security(("Basic" = []), ("ApiKey" = []), ("ClientCredentials" = []), ("Bearer" = [])),
    responses(
        (status = 200, body = Incident),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn get_incident(Path(id): Path<String>) -> Json<Incident> {
    let incident = fake_data::incident(&mut rand::thread_rng());
    Json(Incident { id, ..incident })
}

#[utoipa::path(
    get,
    path = "/controls",
    tag = "Controls",
    security(("Basic" = []), ("ApiKey" = []), ("ClientCredentials" = []), ("Bearer" = [])),
    responses(
        (status = 200, body = [Control]),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn list_controls() -> Json<Vec<Control>> {
    Json(fake_data::many(&mut rand::thread_rng(), LIST_SIZE, fake_data::control))
}

#[utoipa::path(
    get,
    path = "/controls/{id}",
    params(("id" = String, Path, description = "The unique identifier of the control")),
    tag = "Controls",
    security(("Basic" = []), ("ApiKey" = []), ("ClientCredentials" = []), ("Bearer" = [])),
    responses(
        (status = 200, body = Control),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn get_control(Path(id): Path<String>) -> Json<Control> {
    let control = fake_data::control(&mut rand::thread_rng());
    Json(Control { id, ..control })
}
