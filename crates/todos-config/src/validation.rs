// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Ensures configuration values are within valid ranges before the server
//! wires anything up.

use crate::{ConfigError, ConfigResult, TodosConfig};

/// Longest lifetime AWS accepts for a SigV4 presigned URL (7 days)
pub const MAX_URL_EXPIRATION_SECS: u64 = 604_800;

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    InvalidPortRange { port_name: String, port: u16 },
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPortRange { port_name, port } => {
                write!(
                    f,
                    "Port {} = {} is outside valid range (1024-65535)",
                    port_name, port
                )
            }
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &TodosConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    if config.api.port < 1024 {
        errors.push(ConfigValidationError::InvalidPortRange {
            port_name: "api.port".to_string(),
            port: config.api.port,
        });
    }

    validate_required_fields(config, &mut errors);
    validate_value_ranges(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_required_fields(config: &TodosConfig, errors: &mut Vec<ConfigValidationError>) {
    let required = [
        ("api.host", &config.api.host),
        ("storage.todos_table", &config.storage.todos_table),
        ("storage.todos_id_index", &config.storage.todos_id_index),
        ("attachments.bucket", &config.attachments.bucket),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(ConfigValidationError::MissingRequired {
                field: field.to_string(),
            });
        }
    }
}

fn validate_value_ranges(config: &TodosConfig, errors: &mut Vec<ConfigValidationError>) {
    let expiration = config.attachments.url_expiration_secs;
    if expiration == 0 || expiration > MAX_URL_EXPIRATION_SECS {
        errors.push(ConfigValidationError::InvalidValue {
            field: "attachments.url_expiration_secs".to_string(),
            reason: format!("must be between 1 and {} seconds", MAX_URL_EXPIRATION_SECS),
        });
    }

    // Bucket names become DNS labels in virtual-hosted URLs
    let bucket = &config.attachments.bucket;
    if !bucket.is_empty()
        && !bucket
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.')
    {
        errors.push(ConfigValidationError::InvalidValue {
            field: "attachments.bucket".to_string(),
            reason: "only lowercase letters, digits, '-' and '.' are allowed".to_string(),
        });
    }

    let level = config.logging.level.to_lowercase();
    if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("unknown level '{}'", config.logging.level),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privileged_port_rejected() {
        let mut config = TodosConfig::default();
        config.api.port = 80;

        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("api.port"));
    }

    #[test]
    fn test_empty_bucket_rejected() {
        let mut config = TodosConfig::default();
        config.attachments.bucket = String::new();

        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("attachments.bucket"));
    }

    #[test]
    fn test_expiration_bounds() {
        let mut config = TodosConfig::default();
        config.attachments.url_expiration_secs = MAX_URL_EXPIRATION_SECS;
        assert!(validate_config(&config).is_ok());

        config.attachments.url_expiration_secs = MAX_URL_EXPIRATION_SECS + 1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_all_errors_reported_together() {
        let mut config = TodosConfig::default();
        config.api.port = 22;
        config.storage.todos_table = " ".to_string();
        config.logging.level = "verbose".to_string();

        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("api.port"));
        assert!(err.contains("storage.todos_table"));
        assert!(err.contains("logging.level"));
    }
}
