// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

/*!
Service trait definitions.

These traits define the boundary between the transport adapter, the
service logic and the managed backends (table and object storage).
*/

pub mod todo_service;
pub mod todo_store;
pub mod upload_url_signer;

pub use todo_service::TodoService;
pub use todo_store::TodoStore;
pub use upload_url_signer::UploadUrlSigner;
