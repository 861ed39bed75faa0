// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

// API Version 1 - DTOs and mappings

pub mod auth_dtos;
pub mod dtos;
pub mod todo_dtos;

pub use auth_dtos::*;
pub use dtos::*;
pub use todo_dtos::*;
