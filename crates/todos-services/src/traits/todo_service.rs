// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Todo CRUD service trait

use async_trait::async_trait;

use crate::types::*;

/// Service for managing a user's todo items
///
/// Every call is scoped to `user_id`, the principal of an already
/// authorized request.
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Create a todo for `user_id`
    ///
    /// # Returns
    /// * `TodoItem` - The stored item, including generated id and timestamps
    ///
    async fn create_todo(&self, user_id: &str, params: CreateTodoParams) -> ServiceResult<TodoItem>;

    /// List all todos of `user_id`, newest first
    async fn list_todos(&self, user_id: &str) -> ServiceResult<Vec<TodoItem>>;

    /// Get one todo, `None` if `user_id` has no todo with this id
    async fn get_todo(&self, user_id: &str, todo_id: &str) -> ServiceResult<Option<TodoItem>>;

    /// Replace name, due date and done flag of a todo
    ///
    /// # Errors
    /// * `ServiceError::NotFound` - no todo with this id for `user_id`
    ///
    async fn update_todo(
        &self,
        user_id: &str,
        todo_id: &str,
        params: UpdateTodoParams,
    ) -> ServiceResult<()>;

    /// Delete a todo
    ///
    /// # Errors
    /// * `ServiceError::NotFound` - no todo with this id for `user_id`
    ///
    async fn delete_todo(&self, user_id: &str, todo_id: &str) -> ServiceResult<()>;

    /// Presigned URL the client uses to upload the attachment of `todo_id`
    fn generate_upload_url(&self, todo_id: &str) -> ServiceResult<String>;
}
