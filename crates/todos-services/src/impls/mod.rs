// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

/*!
Service implementations.
*/

pub mod in_memory_store;
pub mod s3_presigner;
pub mod todo_service_impl;

pub use in_memory_store::InMemoryTodoStore;
pub use s3_presigner::S3Presigner;
pub use todo_service_impl::TodoServiceImpl;
