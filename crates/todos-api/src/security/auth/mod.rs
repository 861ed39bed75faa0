// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

pub mod context;
pub mod trust_anchor;
pub mod verifier;

pub use context::AuthContext;
pub use trust_anchor::{TrustAnchor, TrustAnchorError};
pub use verifier::{extract_bearer_token, AuthError, TokenVerifier, VerifiedClaims};
