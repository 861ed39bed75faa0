// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Authorization decision maker
//!
//! Turns the outcome of bearer token verification into an allow/deny policy.
//! `authorize` never fails: every verification error becomes a deny.

use tracing::{info, warn};

use super::policy::{AuthorizationDecision, Permission};
use crate::security::auth::TokenVerifier;

/// Gate in front of all protected routes
#[derive(Clone)]
pub struct Authorizer {
    verifier: TokenVerifier,
    permission: Permission,
}

impl Authorizer {
    pub fn new(verifier: TokenVerifier) -> Self {
        Self {
            verifier,
            permission: Permission::InvokeApi,
        }
    }

    /// Decide on a raw `Authorization` header value
    pub fn authorize(&self, header: Option<&str>) -> AuthorizationDecision {
        match self.verifier.verify(header) {
            Ok(claims) => {
                info!(target: "todos-api", "User was authorized: {}", claims.sub);
                AuthorizationDecision::allow(claims.sub, self.permission)
            }
            Err(err) => {
                warn!(
                    target: "todos-api",
                    reason = err.category(),
                    "User not authorized: {}",
                    err.summary()
                );
                AuthorizationDecision::deny(self.permission)
            }
        }
    }
}
