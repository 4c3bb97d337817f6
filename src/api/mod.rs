// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{
        ApiKey, ApiKeyValue, ClientCredentials, Flow, HttpAuthScheme, HttpBuilder, OAuth2, Scopes,
        SecurityScheme,
    },
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{require_policy, AccessPolicy},
    error::panic_response,
    models::{
        AccessTokenResponse, ClientCredentialsRequest, Control, DateBodyRequest, DateResponse,
        Incident, LoginRequest, MessageResponse, Policy, Risk, TokenResponse, User,
    },
    state::AppState,
};

pub mod auth;
pub mod dates;
pub mod records;
pub mod retry;
pub mod timeout;

pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/no-auth", get(auth::no_auth))
        .route("/generate-token", post(auth::generate_token))
        .route("/date", get(dates::date_from_query))
        .route("/date-body", post(dates::date_from_body));

    let basic = Router::new().route("/basic", get(auth::basic));
    let api_key = Router::new().route("/api-key", get(auth::api_key));
    let bearer = Router::new()
        .route("/bearer", get(auth::bearer))
        .route("/oauth2", get(auth::oauth2));
    let client_credentials = Router::new().route("/access-token", post(auth::access_token));
    let combined = Router::new()
        .route("/retry/{id}", get(retry::retry))
        .route("/timeout", get(timeout::timeout))
        .route("/users", get(records::list_users))
        .route("/users/{id}", get(records::get_user))
        .route("/policies", get(records::list_policies))
        .route("/policies/{id}", get(records::get_policy))
        .route("/risks", get(records::list_risks))
        .route("/risks/{id}", get(records::get_risk))
        .route("/incidents", get(records::list_incidents))
        .route("/incidents/{id}", get(records::get_incident))
        .route("/controls", get(records::list_controls))
        .route("/controls/{id}", get(records::get_control));

    let routes = Router::new()
        .merge(public)
        .merge(protect(basic, &state, AccessPolicy::Basic))
        .merge(protect(api_key, &state, AccessPolicy::ApiKey))
        .merge(protect(bearer, &state, AccessPolicy::Bearer))
        .merge(protect(client_credentials, &state, AccessPolicy::ClientCredentials))
        .merge(protect(combined, &state, AccessPolicy::Combined))
        .with_state(state);

    with_layers(
        routes.merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi())),
    )
}

/// Require `policy` for every route in `routes`.
fn protect(
    routes: Router<AppState>,
    state: &AppState,
    policy: AccessPolicy,
) -> Router<AppState> {
    routes.route_layer(middleware::from_fn_with_state(
        (state.clone(), policy),
        require_policy,
    ))
}

/// Outer middleware shared by every route. Panics become a generic 500.
fn with_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}

/// Registers the four authentication schemes referenced by `security(..)`.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "Basic",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
        );
        components.add_security_scheme(
            "Bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        components.add_security_scheme(
            "ApiKey",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-api-key"))),
        );
        components.add_security_scheme(
            "ClientCredentials",
            SecurityScheme::OAuth2(OAuth2::new([Flow::ClientCredentials(
                ClientCredentials::new("/access-token", Scopes::new()),
            )])),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Testing API", description = "Endpoints for exercising API client authentication"),
    paths(
        auth::no_auth,
        auth::basic,
        auth::api_key,
        auth::bearer,
        auth::oauth2,
        auth::generate_token,
        auth::access_token,
        retry::retry,
        timeout::timeout,
        dates::date_from_query,
        dates::date_from_body,
        records::list_users,
        records::get_user,
        records::list_policies,
        records::get_policy,
        records::list_risks,
        records::get_risk,
        records::list_incidents,
        records::get_incident,
        records::list_controls,
        records::get_control
    ),
    components(
        schemas(
            MessageResponse,
            LoginRequest,
            TokenResponse,
            AccessTokenResponse,
            ClientCredentialsRequest,
            DateBodyRequest,
            DateResponse,
            User,
            Policy,
            Risk,
            Incident,
            Control
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "One endpoint per authentication scheme"),
        (name = "Retry", description = "Fails until retried"),
        (name = "Timeout", description = "Slow responses"),
        (name = "Dates", description = "Date value echo"),
        (name = "Users", description = "Generated users"),
        (name = "Policies", description = "Generated policies"),
        (name = "Risks", description = "Generated risks"),
        (name = "Incidents", description = "Generated incidents"),
        (name = "Controls", description = "Generated controls")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{JwtAuthenticator, MAX_CREDENTIAL_BODY_BYTES};
    use crate::config::JwtConfig;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tokio::task::JoinSet;
    use tower::ServiceExt;

    const UNAUTHORIZED_BODY: &str = r#"{"error":"Unauthorized","error_code":"unauthorized"}"#;

    fn app() -> Router {
        router(AppState::default().with_timeout_delay(Duration::ZERO))
    }

    fn basic_auth(username: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
    }

    fn get_request(uri: &str) -> axum::http::request::Builder {
        Request::builder().method("GET").uri(uri)
    }

    fn anonymous(uri: &str) -> Request<Body> {
        get_request(uri).body(Body::empty()).unwrap()
    }

    fn with_api_key(uri: &str, key: &str) -> Request<Body> {
        get_request(uri)
            .header("x-api-key", key)
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn call(app: &Router, request: Request<Body>) -> (StatusCode, String) {
        let response = send(app, request).await;
        let status = response.status();
        (status, body_text(response).await)
    }

    async fn login(app: &Router) -> String {
        let (status, body) = call(
            app,
            post_json("/generate-token", json!({"username": "admin", "password": "password"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).unwrap();
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn no_auth_is_always_the_same() {
        let app = app();
        for _ in 0..3 {
            let (status, body) = call(&app, anonymous("/no-auth")).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, r#"{"message":"You are in!"}"#);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn no_auth_is_the_same_under_concurrency() {
        let app = app();
        let mut calls = JoinSet::new();
        for _ in 0..32 {
            let app = app.clone();
            calls.spawn(async move { call(&app, anonymous("/no-auth")).await });
        }

        let mut completed = 0;
        while let Some(result) = calls.join_next().await {
            let (status, body) = result.unwrap();
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, r#"{"message":"You are in!"}"#);
            completed += 1;
        }
        assert_eq!(completed, 32);
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let response = send(&app(), anonymous("/no-auth")).await;
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn basic_accepts_known_credentials() {
        let request = get_request("/basic")
            .header(header::AUTHORIZATION, basic_auth("admin", "password"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(&app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"message":"Hello, admin!"}"#);
    }

    #[tokio::test]
    async fn basic_rejects_bad_credentials_uniformly() {
        let app = app();
        let headers = [
            None,
            Some(basic_auth("admin", "wrong")),
            Some("Basic not-base64".to_string()),
            Some("Bearer token".to_string()),
        ];
        for authorization in headers {
            let mut request = get_request("/basic");
            if let Some(value) = &authorization {
                request = request.header(header::AUTHORIZATION, value);
            }
            let (status, body) = call(&app, request.body(Body::empty()).unwrap()).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{authorization:?}");
            assert_eq!(body, UNAUTHORIZED_BODY);
        }
    }

    #[tokio::test]
    async fn api_key_requires_exact_key() {
        let app = app();

        let (status, body) = call(&app, with_api_key("/api-key", "api-key")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"message":"Hello, API User!"}"#);

        for key in ["API-KEY", "api-key ", "wrong"] {
            let status = call(&app, with_api_key("/api-key", key)).await.0;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{key:?}");
        }

        assert_eq!(call(&app, anonymous("/api-key")).await.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn api_key_does_not_open_basic_route() {
        let request = with_api_key("/basic", "api-key");
        assert_eq!(call(&app(), request).await.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn generated_token_opens_bearer_routes() {
        let app = app();
        let token = login(&app).await;

        for uri in ["/bearer", "/oauth2"] {
            let request = get_request(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap();
            let (status, body) = call(&app, request).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, r#"{"message":"Hello, admin!"}"#);
        }
    }

    #[tokio::test]
    async fn bearer_scheme_name_ignores_case() {
        let app = app();
        let token = login(&app).await;

        for scheme in ["bearer", "BEARER"] {
            let request = get_request("/bearer")
                .header(header::AUTHORIZATION, format!("{scheme} {token}"))
                .body(Body::empty())
                .unwrap();
            assert_eq!(call(&app, request).await.0, StatusCode::OK, "{scheme}");
        }
    }

    #[tokio::test]
    async fn bearer_rejects_foreign_tokens() {
        let foreign = JwtAuthenticator::new(&JwtConfig {
            issuer: "SomeoneElse".into(),
            ..JwtConfig::default()
        })
        .issue("admin")
        .unwrap();

        let app = app();
        for token in [foreign.value.as_str(), "not.a.jwt", ""] {
            let request = get_request("/bearer")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap();
            let (status, body) = call(&app, request).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{token:?}");
            assert_eq!(body, UNAUTHORIZED_BODY);
        }
    }

    #[tokio::test]
    async fn generate_token_validates_body() {
        let app = app();

        let missing = post_json("/generate-token", json!({"username": "admin"}));
        assert_eq!(call(&app, missing).await.0, StatusCode::BAD_REQUEST);

        let not_json = Request::builder()
            .method("POST")
            .uri("/generate-token")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{"))
            .unwrap();
        assert_eq!(call(&app, not_json).await.0, StatusCode::BAD_REQUEST);

        let wrong = post_json("/generate-token", json!({"username": "admin", "password": "nope"}));
        let (status, body) = call(&app, wrong).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"error":"Invalid username or password."}"#);
    }

    #[tokio::test]
    async fn access_token_accepts_json_and_form() {
        let app = app();
        let form = "grant_type=client_credentials&client_id=client&client_secret=secret";
        let requests = [
            post_json(
                "/access-token",
                json!({"client_id": "client", "client_secret": "secret"}),
            ),
            Request::builder()
                .method("POST")
                .uri("/access-token")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .unwrap(),
        ];

        for request in requests {
            let (status, body) = call(&app, request).await;
            assert_eq!(status, StatusCode::OK);

            let body: Value = serde_json::from_str(&body).unwrap();
            assert_eq!(body["token_type"], "Bearer");
            let expires_in = body["expires_in"].as_i64().unwrap();
            assert!((86_390..=86_400).contains(&expires_in));

            // The issued token is a working bearer token for the client.
            let token = body["access_token"].as_str().unwrap();
            let check = get_request("/bearer")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap();
            let (status, body) = call(&app, check).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, r#"{"message":"Hello, client!"}"#);
        }
    }

    #[tokio::test]
    async fn access_token_rejects_bad_client_credentials() {
        let app = app();
        let requests = [
            post_json("/access-token", json!({"client_id": "client"})),
            post_json(
                "/access-token",
                json!({"client_id": "client", "client_secret": "wrong"}),
            ),
            Request::builder()
                .method("POST")
                .uri("/access-token")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("client_id=client&client_secret=secret"))
                .unwrap(),
            Request::builder()
                .method("POST")
                .uri("/access-token")
                .header(header::AUTHORIZATION, basic_auth("admin", "password"))
                .body(Body::empty())
                .unwrap(),
        ];

        for request in requests {
            let (status, body) = call(&app, request).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, UNAUTHORIZED_BODY);
        }
    }

    #[tokio::test]
    async fn retry_fails_twice_then_succeeds_per_id() {
        let app = app();
        let retry = |id: &str| with_api_key(&format!("/retry/{id}"), "api-key");

        let mut statuses = Vec::new();
        for _ in 0..4 {
            statuses.push(call(&app, retry("a")).await.0);
        }
        assert_eq!(
            statuses,
            vec![
                StatusCode::SERVICE_UNAVAILABLE,
                StatusCode::SERVICE_UNAVAILABLE,
                StatusCode::OK,
                StatusCode::SERVICE_UNAVAILABLE
            ]
        );

        // "a" is one failure in; "b" starts fresh.
        assert_eq!(call(&app, retry("b")).await.0, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(call(&app, retry("a")).await.0, StatusCode::SERVICE_UNAVAILABLE);
        let (status, body) = call(&app, retry("a")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"message":"Finally!"}"#);
    }

    #[tokio::test]
    async fn retry_failure_body() {
        let request = get_request("/retry/x")
            .header(header::AUTHORIZATION, basic_auth("admin", "password"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(&app(), request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, r#"{"error":"Retry failed!"}"#);
    }

    #[tokio::test]
    async fn unauthenticated_retry_does_not_count() {
        let app = app();
        assert_eq!(call(&app, anonymous("/retry/z")).await.0, StatusCode::UNAUTHORIZED);

        let expected = [
            StatusCode::SERVICE_UNAVAILABLE,
            StatusCode::SERVICE_UNAVAILABLE,
            StatusCode::OK,
        ];
        for status in expected {
            let request = with_api_key("/retry/z", "api-key");
            assert_eq!(call(&app, request).await.0, status);
        }
    }

    #[tokio::test]
    async fn combined_routes_accept_every_scheme() {
        let app = app();
        let token = login(&app).await;

        let requests = [
            get_request("/users")
                .header(header::AUTHORIZATION, basic_auth("admin", "password"))
                .body(Body::empty())
                .unwrap(),
            with_api_key("/users", "api-key"),
            get_request("/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"client_id":"client","client_secret":"secret"}"#))
                .unwrap(),
            get_request("/users")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        ];

        for request in requests {
            let (status, body) = call(&app, request).await;
            assert_eq!(status, StatusCode::OK);
            let users: Vec<User> = serde_json::from_str(&body).unwrap();
            assert_eq!(users.len(), 10);
        }

        let (status, body) = call(&app, anonymous("/users")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, UNAUTHORIZED_BODY);
    }

    #[tokio::test]
    async fn oversized_body_only_fails_client_credentials() {
        let app = app();
        let oversized = vec![b'a'; MAX_CREDENTIAL_BODY_BYTES + 6 * 1024];

        let request = get_request("/users")
            .header(header::AUTHORIZATION, basic_auth("admin", "password"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(oversized.clone()))
            .unwrap();
        assert_eq!(call(&app, request).await.0, StatusCode::OK);

        let request = get_request("/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(oversized))
            .unwrap();
        let (status, body) = call(&app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, UNAUTHORIZED_BODY);
    }

    #[tokio::test]
    async fn record_routes_echo_path_id() {
        let app = app();
        for path in ["users", "policies", "risks", "incidents", "controls"] {
            let request = with_api_key(&format!("/{path}/1"), "api-key");
            let (status, body) = call(&app, request).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            let record: Value = serde_json::from_str(&body).unwrap();
            assert_eq!(record["id"], "1", "{path}");
        }
    }

    #[tokio::test]
    async fn timeout_completes_after_delay() {
        let (status, body) = call(&app(), with_api_key("/timeout", "api-key")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"message":"Timeout completed!"}"#);
    }

    #[tokio::test]
    async fn date_endpoints_echo_value() {
        let app = app();

        let (status, body) = call(&app, anonymous("/date?date=2025-01-02")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"value":"2025-01-02"}"#);

        let request = post_json("/date-body", json!({"dateValue": "1/2/2025"}));
        let (status, body) = call(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"value":"1/2/2025"}"#);

        assert_eq!(call(&app, anonymous("/date")).await.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn openapi_document_lists_security_schemes() {
        let (status, body) = call(&app(), anonymous("/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);

        let doc: Value = serde_json::from_str(&body).unwrap();
        let schemes = &doc["components"]["securitySchemes"];
        for name in ["Basic", "Bearer", "ApiKey", "ClientCredentials"] {
            assert!(schemes.get(name).is_some(), "{name}");
        }
        assert!(doc["paths"].get("/retry/{id}").is_some());
    }

    #[tokio::test]
    async fn panics_become_generic_server_errors() {
        async fn boom() -> &'static str {
            panic!("handler exploded")
        }

        let app = with_layers(Router::new().route("/boom", get(boom)));
        let (status, body) = call(&app, anonymous("/boom")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            r#"{"error":"Server error","detail":"A problem occurred while processing the request"}"#
        );
    }
}
