// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Todo API DTOs
//!
//! Request/response types for todo management. JSON fields are camelCase.

use serde::{Deserialize, Serialize};
use todos_services::{CreateTodoParams, TodoItem, UpdateTodoParams};
use utoipa::ToSchema;
use validator::Validate;

/// Todo item as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemV1 {
    pub user_id: String,
    pub todo_id: String,
    pub created_at: String,
    pub name: String,
    pub due_date: String,
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

impl From<TodoItem> for TodoItemV1 {
    fn from(item: TodoItem) -> Self {
        Self {
            user_id: item.user_id,
            todo_id: item.todo_id,
            created_at: item.created_at,
            name: item.name,
            due_date: item.due_date,
            done: item.done,
            attachment_url: item.attachment_url,
        }
    }
}

/// Todo creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, max = 256))]
    pub name: String,

    #[validate(length(max = 64))]
    pub due_date: String,
}

impl From<CreateTodoRequest> for CreateTodoParams {
    fn from(request: CreateTodoRequest) -> Self {
        Self {
            name: request.name,
            due_date: request.due_date,
        }
    }
}

/// Todo update request; all fields are replaced
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, max = 256))]
    pub name: String,

    #[validate(length(max = 64))]
    pub due_date: String,

    pub done: bool,
}

impl From<UpdateTodoRequest> for UpdateTodoParams {
    fn from(request: UpdateTodoRequest) -> Self {
        Self {
            name: request.name,
            due_date: request.due_date,
            done: request.done,
        }
    }
}

/// Todo list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodoListResponse {
    pub items: Vec<TodoItemV1>,
}

/// Single todo response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodoItemResponse {
    pub item: TodoItemV1,
}

/// Attachment upload URL response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub upload_url: String,
}
