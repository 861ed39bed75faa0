// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Three tiers, later tiers win:
//! 1. TOML file (base values)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{validate_config, ConfigError, ConfigResult, TodosConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "todos_configuration.toml";

/// Find the todos configuration file
///
/// Search order:
/// 1. `TODOS_CONFIG_PATH` environment variable
/// 2. Current working directory: `./todos_configuration.toml`
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("TODOS_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by TODOS_CONFIG_PATH not found: {}",
                path.display()
            )));
        }
    }

    let mut search_paths = Vec::new();

    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd.clone();
        for _ in 0..5 {
            if let Some(parent) = current.parent() {
                search_paths.push(parent.join(CONFIG_FILE_NAME));
                current = parent.to_path_buf();
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "Configuration file '{}' not found in any of these locations:\n{}\n\nSet TODOS_CONFIG_PATH environment variable to specify custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from a TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if config file is not found, contains invalid TOML, or fails validation
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<TodosConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let config: TodosConfig = toml::from_str(&content)?;

    finish(config, cli_args)
}

/// Like [`load_config`], but starts from built-in defaults when no file can be found.
///
/// An explicit `config_path` that does not exist is still an error.
pub fn load_config_or_default(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<TodosConfig> {
    if config_path.is_some() {
        return load_config(config_path, cli_args);
    }
    match find_config_file() {
        Ok(path) => load_config(Some(&path), cli_args),
        Err(ConfigError::FileNotFound(_)) if env::var("TODOS_CONFIG_PATH").is_err() => {
            finish(TodosConfig::default(), cli_args)
        }
        Err(err) => Err(err),
    }
}

fn finish(
    mut config: TodosConfig,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<TodosConfig> {
    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    validate_config(&config)?;
    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `TODOS_API_HOST` -> `api.host`
/// - `TODOS_API_PORT` -> `api.port`
/// - `TODOS_TABLE` -> `storage.todos_table`
/// - `TODOS_ID_INDEX` -> `storage.todos_id_index`
/// - `TODOS_FILES_S3_BUCKET` -> `attachments.bucket`
/// - `SIGNED_URL_EXPIRATION` -> `attachments.url_expiration_secs`
/// - `REGION` -> `attachments.region`
/// - `AWS_ACCESS_KEY_ID` -> `attachments.access_key_id`
/// - `AWS_SECRET_ACCESS_KEY` -> `attachments.secret_access_key`
/// - `TODOS_LOG_LEVEL` -> `logging.level`
pub fn apply_environment_overrides(config: &mut TodosConfig) {
    if let Ok(value) = env::var("TODOS_API_HOST") {
        config.api.host = value;
    }
    if let Ok(value) = env::var("TODOS_API_PORT") {
        if let Ok(port) = value.parse::<u16>() {
            config.api.port = port;
        }
    }

    if let Ok(value) = env::var("TODOS_TABLE") {
        config.storage.todos_table = value;
    }
    if let Ok(value) = env::var("TODOS_ID_INDEX") {
        config.storage.todos_id_index = value;
    }

    if let Ok(value) = env::var("TODOS_FILES_S3_BUCKET") {
        config.attachments.bucket = value;
    }
    if let Ok(value) = env::var("SIGNED_URL_EXPIRATION") {
        if let Ok(secs) = value.parse::<u64>() {
            config.attachments.url_expiration_secs = secs;
        }
    }
    if let Ok(value) = env::var("REGION") {
        config.attachments.region = if value.is_empty() { None } else { Some(value) };
    }
    if let Ok(value) = env::var("AWS_ACCESS_KEY_ID") {
        config.attachments.access_key_id = value;
    }
    if let Ok(value) = env::var("AWS_SECRET_ACCESS_KEY") {
        config.attachments.secret_access_key = value;
    }

    if let Ok(value) = env::var("TODOS_LOG_LEVEL") {
        config.logging.level = value;
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"api_host": "192.168.1.1", "api_port": "9000"}`)
pub fn apply_cli_overrides(config: &mut TodosConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("api_host") {
        config.api.host = value.clone();
    }
    if let Some(value) = cli_args.get("api_port") {
        if let Ok(port) = value.parse::<u16>() {
            config.api.port = port;
        }
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
}
