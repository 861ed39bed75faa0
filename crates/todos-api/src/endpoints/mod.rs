// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

// Endpoint implementations, grouped by resource

pub mod auth;
pub mod health;
pub mod todos;
