// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Empty JSON object (`{}`), returned by updates and deletes
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EmptyResponse {}

impl EmptyResponse {
    pub fn new() -> Self {
        Self {}
    }
}
