// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

/*!
# Todos Service Layer

The stable application boundary of the todos backend: transport-agnostic
service interfaces used by the HTTP adapter.

## Architecture

```text
┌──────────────────────────────────────────────────────────┐
│               TRANSPORT ADAPTERS (todos-api)              │
└────────────────────────────┬─────────────────────────────┘
                             ↓
┌──────────────────────────────────────────────────────────┐
│              SERVICE LAYER (This Crate)                   │
│  • TodoService     - create / list / get / update /       │
│                      delete / upload URL                  │
└──────────────┬─────────────────────────────┬─────────────┘
               ↓                             ↓
┌──────────────────────────┐   ┌───────────────────────────┐
│ TodoStore (key-value      │   │ UploadUrlSigner (object   │
│ table + id index)         │   │ storage presigned URLs)   │
└──────────────────────────┘   └───────────────────────────┘
```

Every item is owned by the user that created it; all reads and writes are
scoped by user id, which the transport takes from the verified token.
*/

pub mod impls;
pub mod traits;
pub mod types;

// Re-export main API
pub use traits::{TodoService, TodoStore, UploadUrlSigner};

pub use types::{
    CreateTodoParams, ServiceError, ServiceResult, SignerError, StoreError, TodoItem, TodoUpdate,
    UpdateTodoParams,
};

pub use impls::{InMemoryTodoStore, S3Presigner, TodoServiceImpl};
