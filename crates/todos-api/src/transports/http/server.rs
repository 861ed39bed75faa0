// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

// HTTP server implementation (Axum)
//
// Routing, middleware and shared state. Todo routes are wrapped in the
// authorization middleware; health, authorizer and OpenAPI routes are open.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use todos_config::ApiConfig;
use todos_services::TodoService;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::endpoints::{auth, health, todos};
use crate::middleware::{create_cors_layer, require_authorization};
use crate::openapi::ApiDoc;
use crate::security::Authorizer;

/// Application state shared across all HTTP handlers
#[derive(Clone)]
pub struct ApiState {
    pub todo_service: Arc<dyn TodoService>,
    pub authorizer: Arc<Authorizer>,
}

impl ApiState {
    pub fn new(todo_service: Arc<dyn TodoService>, authorizer: Arc<Authorizer>) -> Self {
        Self {
            todo_service,
            authorizer,
        }
    }
}

/// Create the main HTTP server application
pub fn create_http_server(state: ApiState, config: &ApiConfig) -> Router {
    Router::new()
        // OpenAPI document
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/v1", create_v1_router(state.clone()))
        .fallback(|| async {
            tracing::debug!(target: "todos-api", "Unmatched request - 404 Not Found");
            (StatusCode::NOT_FOUND, "404 Not Found")
        })
        .with_state(state)
        .layer(create_cors_layer(&config.cors_allow_origin))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::span!(
                        target: "todos-api",
                        tracing::Level::DEBUG,
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    tracing::debug!(target: "todos-api", "Incoming request: {} {}", request.method(), request.uri());
                })
                .on_response(|response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::debug!(
                        target: "todos-api",
                        "Response: status={}, latency={:?}",
                        response.status(),
                        latency
                    );
                })
                .on_failure(|error: tower_http::classify::ServerErrorsFailureClass, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::error!(target: "todos-api", "Request failed: {}, latency={:?}", error, latency);
                }),
        )
}

/// Create V1 API router
/// Format: /v1/{resource}[/{id}[/{sub-resource}]]
fn create_v1_router(state: ApiState) -> Router<ApiState> {
    let protected = Router::new()
        .route("/todos", get(todos::get_todos).post(todos::post_todo))
        .route(
            "/todos/:todo_id",
            get(todos::get_todo)
                .patch(todos::patch_todo)
                .delete(todos::delete_todo),
        )
        .route("/todos/:todo_id/attachment", post(todos::post_attachment))
        .route_layer(middleware::from_fn_with_state(state, require_authorization));

    Router::new()
        .route("/system/health_check", get(health::health_check))
        .route("/auth/authorize", post(auth::post_authorize))
        .merge(protected)
}

/// Bind `host:port` and serve `app` until `shutdown` resolves
pub async fn serve<F>(app: Router, host: &str, port: u16, shutdown: F) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(target: "todos-api", "Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
