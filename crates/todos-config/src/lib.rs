// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! # Todos Configuration System
//!
//! Type-safe configuration loader for the todos backend with support for:
//! - TOML file parsing
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todos_config::load_config_or_default;
//!
//! let config = load_config_or_default(None, None).expect("Failed to load config");
//!
//! println!("API Host: {}", config.api.host);
//! println!("Todos table: {}", config.storage.todos_table);
//! ```
//!
//! The identity-token trust anchor is not part of this crate: it is
//! compiled into `todos-api` and cannot be swapped through configuration.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{
    apply_cli_overrides, apply_environment_overrides, find_config_file, load_config,
    load_config_or_default,
};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
