// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

/*!
Todos API server

Usage:
  cargo run --bin todos-server -- [--config <path>] [--host <host>] [--port <port>]
                                  [--log-level <level>] [--debug-<crate>|--debug-all]

Configuration is read from `todos_configuration.toml` (see `TODOS_CONFIG_PATH`)
when present, then overridden by environment variables and these flags.
*/

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use todos::api::{create_http_server, serve, ApiState, Authorizer, TokenVerifier, TrustAnchor};
use todos::config::{load_config_or_default, TodosConfig};
use todos::observability::{debug_flags_help, init_logging, parse_debug_flags_from};
use todos::services::{InMemoryTodoStore, S3Presigner, TodoServiceImpl};

/// Todos API server - per-user todo lists behind an RS256 bearer token authorizer
#[derive(Parser, Debug)]
#[command(name = "todos-server", version, long_about = None, after_help = debug_flags_help())]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind (overrides `api.host`)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides `api.port`)
    #[arg(long)]
    port: Option<u16>,

    /// Base log level: error, warn, info, debug or trace (overrides `logging.level`)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    /// Overrides in the form accepted by `todos_config::apply_cli_overrides`
    fn overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        if let Some(host) = &self.host {
            overrides.insert("api_host".to_string(), host.clone());
        }
        if let Some(port) = self.port {
            overrides.insert("api_port".to_string(), port.to_string());
        }
        if let Some(level) = &self.log_level {
            overrides.insert("log_level".to_string(), level.clone());
        }
        overrides
    }
}

/// Split `--debug-*` flags from the arguments clap parses
fn split_debug_flags<I>(args: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = String>,
{
    args.into_iter().partition(|arg| arg.starts_with("--debug-"))
}

fn build_state(config: &TodosConfig) -> Result<ApiState> {
    let anchor = Arc::new(TrustAnchor::embedded().context("Failed to load trust anchor")?);
    if let Some(subject) = anchor.subject() {
        info!(target: "todos-server", "Trusting tokens signed by {}", subject);
    }
    let authorizer = Arc::new(Authorizer::new(TokenVerifier::from_config(anchor, &config.auth)));

    if config.attachments.access_key_id.is_empty() || config.attachments.secret_access_key.is_empty() {
        warn!(
            target: "todos-server",
            "No object storage credentials configured; object storage will refuse uploads"
        );
    }
    let signer = Arc::new(
        S3Presigner::from_config(&config.attachments).context("Invalid attachments configuration")?,
    );

    let store = Arc::new(InMemoryTodoStore::from_config(&config.storage));

    let service = Arc::new(TodoServiceImpl::new(store, signer));
    Ok(ApiState::new(service, authorizer))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(target: "todos-server", "Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!(target: "todos-server", "Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    let (debug_args, args) = split_debug_flags(env::args());
    let args = Args::parse_from(args);

    let config = load_config_or_default(args.config.as_deref(), Some(&args.overrides()))
        .context("Failed to load configuration")?;

    let debug_flags = parse_debug_flags_from(debug_args);
    let _logging = init_logging(&debug_flags, &config.logging.level, config.logging.log_dir.clone())?;

    info!(target: "todos-server", "Todos server v{}", todos::VERSION);

    let state = build_state(&config)?;
    let app = create_http_server(state, &config.api);

    serve(app, &config.api.host, config.api.port, shutdown_signal())
        .await
        .with_context(|| format!("Failed to serve on {}:{}", config.api.host, config.api.port))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_overrides_from_flags() {
        let parsed = Args::try_parse_from(args(&[
            "todos-server",
            "--config",
            "/etc/todos.toml",
            "--host",
            "localhost",
            "--port",
            "9000",
            "--log-level",
            "debug",
        ]))
        .unwrap();

        assert_eq!(parsed.config, Some(PathBuf::from("/etc/todos.toml")));
        let overrides = parsed.overrides();
        assert_eq!(overrides["api_host"], "localhost");
        assert_eq!(overrides["api_port"], "9000");
        assert_eq!(overrides["log_level"], "debug");
    }

    #[test]
    fn test_no_flags_no_overrides() {
        let parsed = Args::try_parse_from(args(&["todos-server"])).unwrap();
        assert!(parsed.config.is_none());
        assert!(parsed.overrides().is_empty());
    }

    #[test]
    fn test_debug_flags_are_split_off() {
        let (debug, rest) = split_debug_flags(args(&[
            "todos-server",
            "--debug-todos-api",
            "--port",
            "9000",
            "--debug-all",
        ]));

        assert_eq!(debug, args(&["--debug-todos-api", "--debug-all"]));
        let parsed = Args::try_parse_from(rest).unwrap();
        assert_eq!(parsed.port, Some(9000));
    }

    #[test]
    fn test_rejects_unknown_and_invalid_flags() {
        assert!(Args::try_parse_from(args(&["todos-server", "--verbose"])).is_err());
        assert!(Args::try_parse_from(args(&["todos-server", "--port", "http"])).is_err());
        assert!(Args::try_parse_from(args(&["todos-server", "--port"])).is_err());
    }
}
