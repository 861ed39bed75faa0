// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

pub mod server;

pub use server::{create_http_server, serve, ApiState};
