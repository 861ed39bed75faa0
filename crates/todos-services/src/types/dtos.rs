// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

/*!
Data transfer objects for the service layer.

Field names serialize in camelCase, which is also the attribute naming of the
backing table.
*/

use serde::{Deserialize, Serialize};

/// A stored todo item
///
/// The table key is `(user_id, created_at)`; `todo_id` is reachable through
/// the secondary index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub user_id: String,
    pub todo_id: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    pub name: String,
    pub due_date: String,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

/// Parameters for creating a todo
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoParams {
    pub name: String,
    pub due_date: String,
}

/// Parameters for updating a todo (full replacement of the mutable fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoParams {
    pub name: String,
    pub due_date: String,
    pub done: bool,
}

/// Attribute values written by a table update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoUpdate {
    pub name: String,
    pub due_date: String,
    pub done: bool,
}

impl From<UpdateTodoParams> for TodoUpdate {
    fn from(params: UpdateTodoParams) -> Self {
        Self {
            name: params.name,
            due_date: params.due_date,
            done: params.done,
        }
    }
}
