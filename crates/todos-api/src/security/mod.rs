// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

// Bearer token verification and the allow/deny decision built on it

pub mod auth;
pub mod authz;

pub use auth::{AuthContext, AuthError, TokenVerifier, TrustAnchor, VerifiedClaims};
pub use authz::{
    AuthorizationDecision, Authorizer, Effect, Permission, PolicyDocument, PolicyStatement,
    DENIED_PRINCIPAL,
};
