// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

/*!
Service layer error types.

Transport-agnostic errors that adapters map to HTTP status codes.
*/

use thiserror::Error;

/// Service layer errors (transport-agnostic)
#[derive(Error, Debug, Clone)]
pub enum ServiceError {
    /// Resource not found (404 in HTTP)
    #[error("Not found: {resource} with id '{id}'")]
    NotFound { resource: String, id: String },

    /// Invalid input parameters (400 in HTTP)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Table or object storage failure
    #[error("Backend error: {0}")]
    Backend(String),

    /// Internal service error (500 in HTTP)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn todo_not_found(todo_id: impl Into<String>) -> Self {
        ServiceError::NotFound {
            resource: "Todo".to_string(),
            id: todo_id.into(),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors raised by a [`crate::TodoStore`]
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// Conditional write found no item under the given key
    #[error("No item with key ({user_id}, {created_at}) in table '{table}'")]
    MissingItem {
        table: String,
        user_id: String,
        created_at: String,
    },

    /// Conditional insert found an item under the same key
    #[error("Item with key ({user_id}, {created_at}) already exists in table '{table}'")]
    ItemExists {
        table: String,
        user_id: String,
        created_at: String,
    },

    #[error("Table '{table}' is unavailable: {reason}")]
    Unavailable { table: String, reason: String },
}

/// Errors raised by an [`crate::UploadUrlSigner`]
#[derive(Error, Debug, Clone)]
pub enum SignerError {
    #[error("Invalid object storage endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid object key: {0}")]
    InvalidKey(String),
}

// ============================================================================
// ERROR CONVERSIONS FROM BACKENDS
// ============================================================================

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Backend(err.to_string())
    }
}

impl From<SignerError> for ServiceError {
    fn from(err: SignerError) -> Self {
        match err {
            SignerError::InvalidKey(msg) => ServiceError::InvalidInput(msg),
            SignerError::InvalidEndpoint(msg) => ServiceError::Internal(msg),
        }
    }
}
