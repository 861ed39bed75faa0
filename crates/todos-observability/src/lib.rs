// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! # todos-observability
//!
//! Logging setup shared by every crate of the todos backend, with per-crate
//! debug flag support.
//!
//! ## Features
//! - `file-logging`: JSON log files in a per-run folder with retention

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Crate names that accept `--debug-<name>` flags
pub const KNOWN_CRATES: &[&str] = &[
    "todos-api",
    "todos-services",
    "todos-config",
    "todos-server",
];
