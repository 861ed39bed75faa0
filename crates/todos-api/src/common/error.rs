// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    NotFound,
    InvalidInput,
    Internal,
    Forbidden,
}

impl ApiErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ApiErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorCode::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

/// API error type, serialized as `{"detail": ..., "code": ..., "details": ...}`
#[derive(Debug, Error, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Human readable message
    pub detail: String,

    /// Error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ApiErrorCode>,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Result type for endpoint handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl ApiError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            code: None,
            details: None,
        }
    }

    pub fn with_code(mut self, code: ApiErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        let resource = resource.into();
        let id = id.into();
        Self::new(format!("{} '{}' not found", resource, id))
            .with_code(ApiErrorCode::NotFound)
            .with_details(serde_json::json!({
                "resource": resource,
                "id": id
            }))
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(message).with_code(ApiErrorCode::InvalidInput)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message).with_code(ApiErrorCode::Internal)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(message).with_code(ApiErrorCode::Forbidden)
    }

    pub fn status(&self) -> StatusCode {
        self.code
            .map(|code| code.status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Convert service layer errors to API errors
impl From<todos_services::ServiceError> for ApiError {
    fn from(err: todos_services::ServiceError) -> Self {
        use todos_services::ServiceError;

        match err {
            ServiceError::NotFound { resource, id } => ApiError::not_found(resource, id),
            ServiceError::InvalidInput(msg) => ApiError::invalid_input(msg),
            ServiceError::Backend(msg) => {
                tracing::error!(target: "todos-api", "Backend failure: {}", msg);
                ApiError::internal("Backend failure")
            }
            ServiceError::Internal(msg) => {
                tracing::error!(target: "todos-api", "Internal failure: {}", msg);
                ApiError::internal("Internal error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todos_services::ServiceError;

    #[test]
    fn test_service_error_mapping() {
        let err = ApiError::from(ServiceError::todo_not_found("abc"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.details.unwrap()["id"], "abc");

        let err = ApiError::from(ServiceError::InvalidInput("bad".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(ServiceError::Backend("table down".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.detail.contains("table down"));
    }

    #[test]
    fn test_wire_format() {
        let value = serde_json::to_value(ApiError::forbidden("User is not authorized")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"detail": "User is not authorized", "code": "FORBIDDEN"})
        );
        assert_eq!(ApiError::new("x").status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
