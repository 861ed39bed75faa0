// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

// OpenAPI documentation generation
//
// The OpenAPI 3.0 document is generated at compile-time with utoipa from the
// endpoint annotations.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::{
    common::{ApiError, ApiErrorCode, EmptyResponse},
    security::{AuthorizationDecision, Effect, PolicyDocument, PolicyStatement},
    v1::{
        AuthorizerEventRequest, CreateTodoRequest, HealthCheckResponseV1, TodoItemResponse,
        TodoItemV1, TodoListResponse, UpdateTodoRequest, UploadUrlResponse,
    },
};

/// OpenAPI documentation for the Todos REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todos REST API",
        version = "1.0.0",
        description = "Per-user todo lists with attachment uploads, behind a bearer token authorizer",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        crate::endpoints::health::health_check,
        crate::endpoints::auth::post_authorize,
        crate::endpoints::todos::get_todos,
        crate::endpoints::todos::post_todo,
        crate::endpoints::todos::get_todo,
        crate::endpoints::todos::patch_todo,
        crate::endpoints::todos::delete_todo,
        crate::endpoints::todos::post_attachment,
    ),
    components(
        schemas(
            HealthCheckResponseV1,
            AuthorizerEventRequest,
            AuthorizationDecision,
            PolicyDocument,
            PolicyStatement,
            Effect,
            TodoItemV1,
            CreateTodoRequest,
            UpdateTodoRequest,
            TodoListResponse,
            TodoItemResponse,
            UploadUrlResponse,
            EmptyResponse,
            ApiError,
            ApiErrorCode,
        )
    ),
    tags(
        (name = "Health", description = "System health endpoints"),
        (name = "Auth", description = "Bearer token authorizer"),
        (name = "Todos", description = "Todo management (CRUD) and attachment uploads"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security scheme configuration
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI document as pretty-printed JSON
pub fn get_openapi_json() -> String {
    ApiDoc::openapi().to_pretty_json().unwrap_or_else(|e| {
        format!(r#"{{"error": "Failed to generate OpenAPI document: {}"}}"#, e)
    })
}
