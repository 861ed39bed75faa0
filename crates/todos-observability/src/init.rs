// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output is always installed. With the `file-logging` feature and a
//! log directory, a combined JSON log file is also written to a timestamped
//! run folder:
//! ```text
//! ./logs/
//!   └── run_20250101_120000/
//!       └── todos.log
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::CrateDebugFlags;

/// Number of run folders kept when file logging is enabled
pub const DEFAULT_RETENTION_RUNS: usize = 10;

/// Keeps background log writers alive; dropping it flushes them
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// Run folder that receives log files, if file logging is active
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Initialize the global tracing subscriber
///
/// # Arguments
/// * `debug_flags` - Per-crate debug flags
/// * `base_level` - Level for everything not covered by a flag (`info`, `warn`, ...)
/// * `log_dir` - Base directory for file logs (ignored without `file-logging`)
///
/// # Errors
///
/// Fails if the log directory cannot be created or a global subscriber is
/// already installed.
pub fn init_logging(
    debug_flags: &CrateDebugFlags,
    base_level: &str,
    log_dir: Option<PathBuf>,
) -> Result<LoggingGuard> {
    let filter = debug_flags.to_filter_string(base_level);

    let mut layers = Vec::new();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_filter(EnvFilter::try_new(&filter).context("Invalid log filter")?)
        .boxed();
    layers.push(console_layer);

    #[cfg(feature = "file-logging")]
    let mut file_guards = Vec::new();

    #[cfg(feature = "file-logging")]
    let run_folder = match log_dir {
        Some(base_log_dir) => {
            let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
            let run_folder = base_log_dir.join(format!("run_{}", timestamp));
            std::fs::create_dir_all(&run_folder).with_context(|| {
                format!("Failed to create log directory: {}", run_folder.display())
            })?;

            cleanup_old_runs(&base_log_dir, DEFAULT_RETENTION_RUNS)?;

            let appender = tracing_appender::rolling::daily(&run_folder, "todos.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            file_guards.push(guard);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_filter(EnvFilter::try_new(&filter).context("Invalid log filter")?)
                .boxed();
            layers.push(file_layer);

            Some(run_folder)
        }
        None => None,
    };

    #[cfg(not(feature = "file-logging"))]
    let run_folder: Option<PathBuf> = {
        let _ = log_dir;
        None
    };

    Registry::default()
        .with(layers)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    Ok(LoggingGuard {
        #[cfg(feature = "file-logging")]
        _file_guards: file_guards,
        log_dir: run_folder,
    })
}

/// Initialize console logging with default settings
pub fn init_logging_default(debug_flags: &CrateDebugFlags) -> Result<LoggingGuard> {
    init_logging(debug_flags, "info", None)
}

/// Names of `run_YYYYmmdd_HHMMSS` folders under `base_log_dir`, oldest first
pub fn list_runs(base_log_dir: &Path) -> Result<Vec<PathBuf>> {
    if !base_log_dir.exists() {
        return Ok(Vec::new());
    }

    let mut runs = Vec::new();
    for entry in std::fs::read_dir(base_log_dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let is_run = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_prefix("run_"))
            .map(|ts| chrono::NaiveDateTime::parse_from_str(ts, "%Y%m%d_%H%M%S").is_ok())
            .unwrap_or(false);
        if is_run {
            runs.push(path);
        }
    }

    // The timestamp format sorts lexicographically
    runs.sort();
    Ok(runs)
}

/// Delete the oldest run folders so that at most `retention_runs` remain
pub fn cleanup_old_runs(base_log_dir: &Path, retention_runs: usize) -> Result<()> {
    let runs = list_runs(base_log_dir)?;
    if runs.len() <= retention_runs {
        return Ok(());
    }

    let to_remove = runs.len() - retention_runs;
    for path in runs.iter().take(to_remove) {
        if let Err(e) = std::fs::remove_dir_all(path) {
            tracing::warn!(
                target: "todos-observability",
                "Failed to remove old log directory {}: {}",
                path.display(),
                e
            );
        }
    }

    Ok(())
}
