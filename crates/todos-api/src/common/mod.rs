// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

// Common types shared by all endpoints

pub mod error;
pub mod response;

pub use error::{ApiError, ApiErrorCode, ApiResult};
pub use response::EmptyResponse;
