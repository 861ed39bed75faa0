// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

/*!
 * Todo endpoints
 *
 * All routes sit behind the authorization middleware and act on the todos
 * of the authorized principal.
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use validator::Validate;

use crate::common::{ApiError, ApiResult, EmptyResponse};
use crate::security::AuthContext;
use crate::transports::http::ApiState;
use crate::v1::{
    CreateTodoRequest, TodoItemResponse, TodoItemV1, TodoListResponse, UpdateTodoRequest,
    UploadUrlResponse,
};

fn validated<T: Validate>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    let Json(request) = payload.map_err(|e| ApiError::invalid_input(e.body_text()))?;
    request
        .validate()
        .map_err(|e| ApiError::invalid_input(e.to_string()))?;
    Ok(request)
}

// ============================================================================
// QUERIES
// ============================================================================

/// GET /v1/todos
#[utoipa::path(
    get,
    path = "/v1/todos",
    tag = "Todos",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Todos of the caller, newest first", body = TodoListResponse),
        (status = 403, description = "Not authorized", body = ApiError)
    )
)]
pub async fn get_todos(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<TodoListResponse>> {
    let items = state.todo_service.list_todos(auth.user_id()).await?;

    Ok(Json(TodoListResponse {
        items: items.into_iter().map(TodoItemV1::from).collect(),
    }))
}

/// GET /v1/todos/{todo_id}
#[utoipa::path(
    get,
    path = "/v1/todos/{todo_id}",
    tag = "Todos",
    security(("bearer_auth" = [])),
    params(("todo_id" = String, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Todo", body = TodoItemResponse),
        (status = 404, description = "No such todo for the caller", body = ApiError)
    )
)]
pub async fn get_todo(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthContext>,
    Path(todo_id): Path<String>,
) -> ApiResult<Json<TodoItemResponse>> {
    let item = state
        .todo_service
        .get_todo(auth.user_id(), &todo_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo", &todo_id))?;

    Ok(Json(TodoItemResponse { item: item.into() }))
}

// ============================================================================
// MUTATIONS
// ============================================================================

/// POST /v1/todos
#[utoipa::path(
    post,
    path = "/v1/todos",
    tag = "Todos",
    security(("bearer_auth" = [])),
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = TodoItemResponse),
        (status = 400, description = "Invalid request body", body = ApiError)
    )
)]
pub async fn post_todo(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthContext>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TodoItemResponse>)> {
    let request = validated(payload)?;

    let item = state
        .todo_service
        .create_todo(auth.user_id(), request.into())
        .await?;

    Ok((StatusCode::CREATED, Json(TodoItemResponse { item: item.into() })))
}

/// PATCH /v1/todos/{todo_id}
#[utoipa::path(
    patch,
    path = "/v1/todos/{todo_id}",
    tag = "Todos",
    security(("bearer_auth" = [])),
    params(("todo_id" = String, Path, description = "Todo ID")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = EmptyResponse),
        (status = 400, description = "Invalid request body", body = ApiError),
        (status = 404, description = "No such todo for the caller", body = ApiError)
    )
)]
pub async fn patch_todo(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthContext>,
    Path(todo_id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> ApiResult<Json<EmptyResponse>> {
    let request = validated(payload)?;

    state
        .todo_service
        .update_todo(auth.user_id(), &todo_id, request.into())
        .await?;

    Ok(Json(EmptyResponse::new()))
}

/// DELETE /v1/todos/{todo_id}
#[utoipa::path(
    delete,
    path = "/v1/todos/{todo_id}",
    tag = "Todos",
    security(("bearer_auth" = [])),
    params(("todo_id" = String, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Todo deleted", body = EmptyResponse),
        (status = 404, description = "No such todo for the caller", body = ApiError)
    )
)]
pub async fn delete_todo(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthContext>,
    Path(todo_id): Path<String>,
) -> ApiResult<Json<EmptyResponse>> {
    state
        .todo_service
        .delete_todo(auth.user_id(), &todo_id)
        .await?;

    Ok(Json(EmptyResponse::new()))
}

/// POST /v1/todos/{todo_id}/attachment
///
/// Returns a presigned PUT URL; the client uploads the file directly to
/// object storage.
#[utoipa::path(
    post,
    path = "/v1/todos/{todo_id}/attachment",
    tag = "Todos",
    security(("bearer_auth" = [])),
    params(("todo_id" = String, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Presigned upload URL", body = UploadUrlResponse),
        (status = 404, description = "No such todo for the caller", body = ApiError)
    )
)]
pub async fn post_attachment(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthContext>,
    Path(todo_id): Path<String>,
) -> ApiResult<Json<UploadUrlResponse>> {
    state
        .todo_service
        .get_todo(auth.user_id(), &todo_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo", &todo_id))?;

    let upload_url = state.todo_service.generate_upload_url(&todo_id)?;

    Ok(Json(UploadUrlResponse { upload_url }))
}
