// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

// Todos REST API Layer
//
// Bearer token authorizer in front of the todo CRUD endpoints, served over
// HTTP with Axum.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod common;
pub mod endpoints;
pub mod middleware;
pub mod openapi;
pub mod security;
pub mod transports;
pub mod v1;

// Re-export commonly used types
pub use common::{ApiError, ApiErrorCode, ApiResult, EmptyResponse};
pub use security::{
    AuthContext, AuthError, AuthorizationDecision, Authorizer, Effect, TokenVerifier, TrustAnchor,
    VerifiedClaims,
};
pub use transports::http::{create_http_server, serve, ApiState};
