// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

// Transport adapters

pub mod http;
