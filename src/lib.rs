// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! # todos
//!
//! Backend for per-user todo lists. Every request carries an RS256 bearer
//! token; an authorizer verifies it against an embedded trust anchor and
//! allows or denies the call before any data is touched.
//!
//! ## Crates
//!
//! - [`config`] (`todos-config`): TOML configuration with environment and CLI overrides
//! - [`observability`] (`todos-observability`): logging setup and per-crate debug flags
//! - [`services`] (`todos-services`): CRUD facade, table access, attachment URL signing
//! - [`api`] (`todos-api`): token verifier, authorization decision, HTTP routes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use todos::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = todos::config::load_config_or_default(None, None)?;
//!
//! let store = Arc::new(InMemoryTodoStore::from_config(&config.storage));
//! let signer = Arc::new(S3Presigner::from_config(&config.attachments)?);
//! let service = Arc::new(TodoServiceImpl::new(store, signer));
//!
//! let anchor = Arc::new(TrustAnchor::embedded()?);
//! let authorizer = Arc::new(Authorizer::new(TokenVerifier::from_config(anchor, &config.auth)));
//!
//! let decision = authorizer.authorize(Some("Bearer eyJ..."));
//! assert!(!decision.is_allowed());
//!
//! let app = create_http_server(ApiState::new(service, authorizer), &config.api);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use todos_api as api;
pub use todos_config as config;
pub use todos_observability as observability;
pub use todos_services as services;

/// Commonly used types
pub mod prelude {
    pub use todos_api::{
        create_http_server, ApiState, AuthError, AuthorizationDecision, Authorizer, Effect,
        TokenVerifier, TrustAnchor,
    };
    pub use todos_config::TodosConfig;
    pub use todos_services::{
        InMemoryTodoStore, S3Presigner, TodoItem, TodoService, TodoServiceImpl, TodoStore,
        UploadUrlSigner,
    };
}
