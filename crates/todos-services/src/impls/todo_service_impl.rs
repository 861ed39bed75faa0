// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

/*!
Todo service implementation.

Each operation is a thin pass-through to the table and, for attachments,
the object storage signer. Updates and deletes resolve the todo id through
the index first, then write under the table key.

Creation timestamps double as the table's sort key. When a user's key is
already taken the timestamp moves forward by a millisecond and the insert is
retried.
*/

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, SecondsFormat, Utc};
use tracing::{debug, info};

use crate::traits::{TodoService, TodoStore, UploadUrlSigner};
use crate::types::*;

/// Upper bound on sort key collisions tolerated by a single create
const MAX_CREATE_ATTEMPTS: u32 = 1024;

/// Default implementation of TodoService
pub struct TodoServiceImpl {
    store: Arc<dyn TodoStore>,
    signer: Arc<dyn UploadUrlSigner>,
}

impl TodoServiceImpl {
    pub fn new(store: Arc<dyn TodoStore>, signer: Arc<dyn UploadUrlSigner>) -> Self {
        Self { store, signer }
    }

    async fn find_owned(&self, user_id: &str, todo_id: &str) -> ServiceResult<TodoItem> {
        self.store
            .query_by_todo_id(user_id, todo_id)
            .await?
            .ok_or_else(|| ServiceError::todo_not_found(todo_id))
    }
}

#[async_trait]
impl TodoService for TodoServiceImpl {
    async fn create_todo(&self, user_id: &str, params: CreateTodoParams) -> ServiceResult<TodoItem> {
        if params.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("Todo name must not be empty".to_string()));
        }

        let todo_id = uuid::Uuid::new_v4().to_string();
        let mut item = TodoItem {
            user_id: user_id.to_string(),
            attachment_url: Some(self.signer.object_url(&todo_id)),
            todo_id,
            created_at: String::new(),
            name: params.name,
            due_date: params.due_date,
            done: false,
        };

        let mut created_at = Utc::now();
        for _ in 0..MAX_CREATE_ATTEMPTS {
            item.created_at = created_at.to_rfc3339_opts(SecondsFormat::Millis, true);
            match self.store.put(item.clone()).await {
                Ok(()) => {
                    info!(target: "todos-services", "Created todo {} for {}", item.todo_id, user_id);
                    return Ok(item);
                }
                Err(StoreError::ItemExists { .. }) => {
                    debug!(target: "todos-services", "Sort key {} taken for {}", item.created_at, user_id);
                    created_at = (created_at + Duration::milliseconds(1)).max(Utc::now());
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ServiceError::Backend(format!(
            "No free creation timestamp for {} after {} attempts",
            user_id, MAX_CREATE_ATTEMPTS
        )))
    }

    async fn list_todos(&self, user_id: &str) -> ServiceResult<Vec<TodoItem>> {
        let items = self.store.query_by_user(user_id).await?;
        debug!(target: "todos-services", "Listed {} todos for {}", items.len(), user_id);
        Ok(items)
    }

    async fn get_todo(&self, user_id: &str, todo_id: &str) -> ServiceResult<Option<TodoItem>> {
        Ok(self.store.query_by_todo_id(user_id, todo_id).await?)
    }

    async fn update_todo(
        &self,
        user_id: &str,
        todo_id: &str,
        params: UpdateTodoParams,
    ) -> ServiceResult<()> {
        let existing = self.find_owned(user_id, todo_id).await?;

        self.store
            .update(user_id, &existing.created_at, TodoUpdate::from(params))
            .await?;

        info!(target: "todos-services", "Updated todo {} for {}", todo_id, user_id);
        Ok(())
    }

    async fn delete_todo(&self, user_id: &str, todo_id: &str) -> ServiceResult<()> {
        let existing = self.find_owned(user_id, todo_id).await?;

        self.store.delete(user_id, &existing.created_at).await?;

        info!(target: "todos-services", "Deleted todo {} for {}", todo_id, user_id);
        Ok(())
    }

    fn generate_upload_url(&self, todo_id: &str) -> ServiceResult<String> {
        Ok(self.signer.presign_put(todo_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{InMemoryTodoStore, S3Presigner};
    use todos_config::AttachmentsConfig;

    fn service() -> (TodoServiceImpl, Arc<InMemoryTodoStore>) {
        let store = Arc::new(InMemoryTodoStore::default());
        let config = AttachmentsConfig {
            bucket: "todos-files".to_string(),
            region: Some("us-east-1".to_string()),
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            ..AttachmentsConfig::default()
        };
        let signer = Arc::new(S3Presigner::from_config(&config).unwrap());
        (TodoServiceImpl::new(store.clone(), signer), store)
    }

    fn create_params(name: &str) -> CreateTodoParams {
        CreateTodoParams {
            name: name.to_string(),
            due_date: "2025-06-01".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_sets_defaults() {
        let (service, store) = service();

        let item = service.create_todo("user123", create_params("Buy milk")).await.unwrap();

        assert_eq!(item.user_id, "user123");
        assert_eq!(item.name, "Buy milk");
        assert!(!item.done);
        assert!(uuid::Uuid::parse_str(&item.todo_id).is_ok());
        assert!(chrono::DateTime::parse_from_rfc3339(&item.created_at).is_ok());
        assert_eq!(
            item.attachment_url.as_deref(),
            Some(format!("https://todos-files.s3.us-east-1.amazonaws.com/{}", item.todo_id).as_str())
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_rapid_creates_are_all_kept() {
        let (service, store) = service();

        let mut created = Vec::new();
        for i in 0..200 {
            let item = service
                .create_todo("user123", create_params(&format!("todo {}", i)))
                .await
                .unwrap();
            created.push(item);
        }

        assert_eq!(store.len(), 200);
        let listed = service.list_todos("user123").await.unwrap();
        assert_eq!(listed.len(), 200);
        for item in &created {
            let found = service.get_todo("user123", &item.todo_id).await.unwrap();
            assert_eq!(found.as_ref(), Some(item));
        }
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let (service, store) = service();

        let err = service.create_todo("user123", create_params("  ")).await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_update_then_get() {
        let (service, _) = service();
        let item = service.create_todo("user123", create_params("Draft")).await.unwrap();

        service
            .update_todo(
                "user123",
                &item.todo_id,
                UpdateTodoParams {
                    name: "Final".to_string(),
                    due_date: "2025-07-01".to_string(),
                    done: true,
                },
            )
            .await
            .unwrap();

        let updated = service.get_todo("user123", &item.todo_id).await.unwrap().unwrap();
        assert_eq!(updated.name, "Final");
        assert_eq!(updated.due_date, "2025-07-01");
        assert!(updated.done);
        assert_eq!(updated.created_at, item.created_at);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_todo_is_not_found() {
        let (service, _) = service();
        let params = UpdateTodoParams {
            name: "x".to_string(),
            due_date: "y".to_string(),
            done: false,
        };

        let err = service.update_todo("user123", "missing", params).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));

        let err = service.delete_todo("user123", "missing").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_other_users_todo_is_invisible() {
        let (service, store) = service();
        let item = service.create_todo("alice", create_params("Secret")).await.unwrap();

        assert!(service.get_todo("bob", &item.todo_id).await.unwrap().is_none());
        assert!(service.delete_todo("bob", &item.todo_id).await.is_err());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let (service, _) = service();
        let item = service.create_todo("user123", create_params("Temp")).await.unwrap();

        service.delete_todo("user123", &item.todo_id).await.unwrap();

        assert!(service.list_todos("user123").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_url_targets_todo_object() {
        let (service, _) = service();

        let url = service.generate_upload_url("todo-42").unwrap();

        assert!(url.starts_with("https://todos-files.s3.us-east-1.amazonaws.com/todo-42?"));
        assert!(url.contains("X-Amz-Expires=300"));
        assert!(url.contains("X-Amz-Signature="));
    }
}
