// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

// HTTP middleware

pub mod auth;
pub mod cors;

pub use auth::require_authorization;
pub use cors::create_cors_layer;
