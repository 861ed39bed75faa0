// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

// Authorization gate for protected routes

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::common::ApiError;
use crate::security::AuthContext;
use crate::transports::http::ApiState;

/// Run the authorizer on the `Authorization` header
///
/// Denied requests get a 403 without the failure reason. Allowed requests
/// carry an [`AuthContext`] extension for the handler.
pub async fn require_authorization(
    State(state): State<ApiState>,
    mut request: Request,
    next: Next,
) -> Response {
    // A header that is not visible ASCII is treated like an absent one
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default());

    let decision = state.authorizer.authorize(header);
    if !decision.is_allowed() {
        return ApiError::forbidden("User is not authorized").into_response();
    }

    request
        .extensions_mut()
        .insert(AuthContext::authenticated(decision.principal_id));
    next.run(request).await
}
