// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

// CORS middleware for HTTP API

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Create the CORS layer for `allow_origin` (`*` or a single origin)
///
/// An origin that is not a valid header value falls back to `*`.
pub fn create_cors_layer(allow_origin: &str) -> CorsLayer {
    let origin = if allow_origin == "*" {
        AllowOrigin::from(Any)
    } else {
        match HeaderValue::from_str(allow_origin) {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                tracing::warn!(
                    target: "todos-api",
                    "Invalid CORS origin '{}', allowing any origin",
                    allow_origin
                );
                AllowOrigin::from(Any)
            }
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_credentials(false)
}
