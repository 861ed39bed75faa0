// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Key-value table access

use async_trait::async_trait;

use crate::types::{StoreError, TodoItem, TodoUpdate};

/// Access to the todos table
///
/// Items are keyed by `(user_id, created_at)`. A secondary index on
/// `(user_id, todo_id)` serves lookups by todo id.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert the item under its table key
    ///
    /// Fails with `StoreError::ItemExists` if the key is taken; existing items
    /// are never replaced.
    async fn put(&self, item: TodoItem) -> Result<(), StoreError>;

    /// Overwrite the mutable attributes of the item under `(user_id, created_at)`
    async fn update(
        &self,
        user_id: &str,
        created_at: &str,
        update: TodoUpdate,
    ) -> Result<(), StoreError>;

    /// Remove the item under `(user_id, created_at)`; removing nothing is not an error
    async fn delete(&self, user_id: &str, created_at: &str) -> Result<(), StoreError>;

    /// All items of a user, newest `created_at` first
    async fn query_by_user(&self, user_id: &str) -> Result<Vec<TodoItem>, StoreError>;

    /// Index lookup by todo id
    async fn query_by_todo_id(
        &self,
        user_id: &str,
        todo_id: &str,
    ) -> Result<Option<TodoItem>, StoreError>;
}
