// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

/*!
 * Custom authorizer endpoint
 *
 * Lets a gateway delegate token checks to this service. The response is
 * always 200 with a policy document; a refused token is a Deny policy, not
 * an HTTP error.
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::security::AuthorizationDecision;
use crate::transports::http::ApiState;
use crate::v1::AuthorizerEventRequest;

/// POST /v1/auth/authorize
#[utoipa::path(
    post,
    path = "/v1/auth/authorize",
    tag = "Auth",
    request_body = AuthorizerEventRequest,
    responses(
        (status = 200, description = "Allow or Deny policy", body = AuthorizationDecision)
    )
)]
pub async fn post_authorize(
    State(state): State<ApiState>,
    event: Result<Json<AuthorizerEventRequest>, JsonRejection>,
) -> Json<AuthorizationDecision> {
    let token = match &event {
        Ok(Json(event)) => event.authorization_token.as_deref(),
        Err(rejection) => {
            tracing::debug!(target: "todos-api", "Unreadable authorizer event: {}", rejection);
            None
        }
    };

    Json(state.authorizer.authorize(token))
}
