// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::v1::HealthCheckResponseV1;

/// GET /v1/system/health_check
///
/// Liveness probe; does not require a credential.
#[utoipa::path(
    get,
    path = "/v1/system/health_check",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = HealthCheckResponseV1)
    )
)]
pub async fn health_check() -> Json<HealthCheckResponseV1> {
    Json(HealthCheckResponseV1 {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}
