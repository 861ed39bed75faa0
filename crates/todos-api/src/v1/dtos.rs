// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponseV1 {
    pub status: String,
    pub version: String,
    /// RFC 3339 server time
    pub timestamp: String,
}
