// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

/*!
In-process todos table.

Mirrors the key layout of the managed table: primary key
`(user_id, created_at)` and an id index. Used for local runs and tests.
*/

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use todos_config::StorageConfig;

use crate::traits::TodoStore;
use crate::types::{StoreError, TodoItem, TodoUpdate};

type TableKey = (String, String);

/// `TodoStore` backed by an ordered map
pub struct InMemoryTodoStore {
    table_name: String,
    index_name: String,
    items: RwLock<BTreeMap<TableKey, TodoItem>>,
}

impl InMemoryTodoStore {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self::with_index(table_name, StorageConfig::default().todos_id_index)
    }

    pub fn with_index(table_name: impl Into<String>, index_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            index_name: index_name.into(),
            items: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::with_index(config.todos_table.clone(), config.todos_id_index.clone())
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    fn key(user_id: &str, created_at: &str) -> TableKey {
        (user_id.to_string(), created_at.to_string())
    }
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::from_config(&StorageConfig::default())
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn put(&self, item: TodoItem) -> Result<(), StoreError> {
        debug!(target: "todos-services", "put {} into {}", item.todo_id, self.table_name);
        let key = Self::key(&item.user_id, &item.created_at);
        match self.items.write().entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(item);
                Ok(())
            }
            Entry::Occupied(slot) => Err(StoreError::ItemExists {
                table: self.table_name.clone(),
                user_id: slot.key().0.clone(),
                created_at: slot.key().1.clone(),
            }),
        }
    }

    async fn update(
        &self,
        user_id: &str,
        created_at: &str,
        update: TodoUpdate,
    ) -> Result<(), StoreError> {
        let mut items = self.items.write();
        let item = items
            .get_mut(&Self::key(user_id, created_at))
            .ok_or_else(|| StoreError::MissingItem {
                table: self.table_name.clone(),
                user_id: user_id.to_string(),
                created_at: created_at.to_string(),
            })?;

        item.name = update.name;
        item.due_date = update.due_date;
        item.done = update.done;
        Ok(())
    }

    async fn delete(&self, user_id: &str, created_at: &str) -> Result<(), StoreError> {
        self.items.write().remove(&Self::key(user_id, created_at));
        Ok(())
    }

    async fn query_by_user(&self, user_id: &str) -> Result<Vec<TodoItem>, StoreError> {
        let items = self.items.read();
        let mut result: Vec<TodoItem> = items
            .range((user_id.to_string(), String::new())..)
            .take_while(|((owner, _), _)| owner == user_id)
            .map(|(_, item)| item.clone())
            .collect();
        result.reverse();
        Ok(result)
    }

    async fn query_by_todo_id(
        &self,
        user_id: &str,
        todo_id: &str,
    ) -> Result<Option<TodoItem>, StoreError> {
        debug!(target: "todos-services", "query {} on {}.{}", todo_id, self.table_name, self.index_name);
        Ok(self
            .query_by_user(user_id)
            .await?
            .into_iter()
            .find(|item| item.todo_id == todo_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(user_id: &str, todo_id: &str, created_at: &str) -> TodoItem {
        TodoItem {
            user_id: user_id.to_string(),
            todo_id: todo_id.to_string(),
            created_at: created_at.to_string(),
            name: format!("todo {}", todo_id),
            due_date: "2025-12-31".to_string(),
            done: false,
            attachment_url: None,
        }
    }

    #[tokio::test]
    async fn test_query_by_user_newest_first_and_scoped() {
        let store = InMemoryTodoStore::default();
        store.put(item("alice", "a1", "2025-01-01T00:00:00.000Z")).await.unwrap();
        store.put(item("alice", "a2", "2025-01-02T00:00:00.000Z")).await.unwrap();
        store.put(item("alicia", "x1", "2025-01-03T00:00:00.000Z")).await.unwrap();
        store.put(item("bob", "b1", "2025-01-03T00:00:00.000Z")).await.unwrap();

        let ids: Vec<String> = store
            .query_by_user("alice")
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.todo_id)
            .collect();
        assert_eq!(ids, vec!["a2", "a1"]);
        assert!(store.query_by_user("carol").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_index_lookup_does_not_cross_users() {
        let store = InMemoryTodoStore::default();
        store.put(item("alice", "shared-id", "2025-01-01T00:00:00.000Z")).await.unwrap();

        assert!(store.query_by_todo_id("alice", "shared-id").await.unwrap().is_some());
        assert!(store.query_by_todo_id("bob", "shared-id").await.unwrap().is_none());
    }

    #[test]
    fn test_names_from_config() {
        let config = StorageConfig {
            todos_table: "Todos-dev".to_string(),
            todos_id_index: "TodosIdIndex-dev".to_string(),
        };
        let store = InMemoryTodoStore::from_config(&config);
        assert_eq!(store.table_name(), "Todos-dev");
        assert_eq!(store.index_name(), "TodosIdIndex-dev");
        assert_eq!(InMemoryTodoStore::default().table_name(), "Todos");
    }

    #[tokio::test]
    async fn test_update_missing_key_fails() {
        let store = InMemoryTodoStore::new("Todos-test");
        let update = TodoUpdate {
            name: "n".to_string(),
            due_date: "d".to_string(),
            done: true,
        };

        let err = store.update("alice", "nope", update).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingItem { .. }));
    }

    #[tokio::test]
    async fn test_put_never_replaces_existing_key() {
        let store = InMemoryTodoStore::default();
        store.put(item("alice", "first", "2025-01-01T00:00:00.000Z")).await.unwrap();

        let err = store
            .put(item("alice", "second", "2025-01-01T00:00:00.000Z"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::ItemExists { .. }));
        let kept = store.query_by_user("alice").await.unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].todo_id, "first");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryTodoStore::default();
        store.put(item("alice", "a1", "2025-01-01T00:00:00.000Z")).await.unwrap();

        store.delete("alice", "2025-01-01T00:00:00.000Z").await.unwrap();
        store.delete("alice", "2025-01-01T00:00:00.000Z").await.unwrap();
        assert!(store.is_empty());
    }
}
