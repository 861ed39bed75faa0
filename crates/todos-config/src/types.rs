// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `todos_configuration.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TodosConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub attachments: AttachmentsConfig,
    pub logging: LoggingConfig,
}

/// REST API server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Value of `Access-Control-Allow-Origin`; `*` allows any origin
    pub cors_allow_origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_allow_origin: "*".to_string(),
        }
    }
}

/// Extra claim checks applied after the signature check.
///
/// Both are off unless set. The verification key is not part of this section.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    pub audience: Option<String>,
    pub issuer: Option<String>,
}

/// Key-value table settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub todos_table: String,
    /// Secondary index used to look items up by todo id
    pub todos_id_index: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            todos_table: "Todos".to_string(),
            todos_id_index: "TodosIdIndex".to_string(),
        }
    }
}

/// Object storage settings for todo attachments
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AttachmentsConfig {
    pub bucket: String,
    pub region: Option<String>,
    pub url_expiration_secs: u64,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Custom S3-compatible endpoint (path-style URLs); AWS virtual-hosted URLs when unset
    pub endpoint: Option<String>,
}

impl Default for AttachmentsConfig {
    fn default() -> Self {
        Self {
            bucket: "todos-files".to_string(),
            region: None,
            url_expiration_secs: 300,
            access_key_id: String::new(),
            secret_access_key: String::new(),
            endpoint: None,
        }
    }
}

impl AttachmentsConfig {
    /// Region used for request signing (`us-east-1` when unset)
    pub fn signing_region(&self) -> &str {
        self.region.as_deref().unwrap_or("us-east-1")
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}
