// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Bearer token verification
//!
//! Only RS256 signatures from the trust anchor are accepted. The `alg` field
//! of the token header is never used to pick the algorithm: a token whose
//! header names anything other than RS256 (including `none` and HS256) fails
//! verification. `exp` and `nbf` are enforced when present, without leeway.

use std::collections::HashSet;
use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, Validation};
use serde_json::Value;
use thiserror::Error;
use todos_config::AuthConfig;

use super::trust_anchor::TrustAnchor;

const BEARER_PREFIX: &str = "bearer ";

/// Why a bearer credential was refused
///
/// Messages carry the failure category only, never token or claim contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("No authentication header")]
    MissingHeader,

    #[error("Invalid authentication header")]
    InvalidScheme,

    /// Structural decoding or RS256 signature check failed
    #[error("Invalid token: {0}")]
    InvalidSignature(String),

    /// Signature is valid but `exp`, `nbf`, `iss` or `aud` rule it out
    #[error("Token rejected: {0}")]
    RejectedClaims(String),

    #[error("Malformed token claims: {0}")]
    MalformedClaims(String),
}

impl AuthError {
    /// Short name for logs and metrics
    pub fn category(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "missing_header",
            AuthError::InvalidScheme => "invalid_scheme",
            AuthError::InvalidSignature(_) => "invalid_signature",
            AuthError::RejectedClaims(_) => "rejected_claims",
            AuthError::MalformedClaims(_) => "malformed_claims",
        }
    }

    /// Fixed description that never includes token-derived text
    pub fn summary(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "No authentication header",
            AuthError::InvalidScheme => "Invalid authentication header",
            AuthError::InvalidSignature(_) => "Token signature or header could not be verified",
            AuthError::RejectedClaims(_) => "Token claims were rejected",
            AuthError::MalformedClaims(_) => "Token claims are malformed",
        }
    }
}

/// Claims of a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedClaims {
    /// Subject, the principal the request acts for
    pub sub: String,
    pub iss: Option<String>,
    pub iat: Option<u64>,
    pub exp: Option<u64>,
}

impl VerifiedClaims {
    fn from_payload(payload: &Value) -> Result<Self, AuthError> {
        let sub = match payload.get("sub") {
            Some(Value::String(sub)) if !sub.is_empty() => sub.clone(),
            Some(_) => return Err(AuthError::MalformedClaims("subject is not a non-empty string".to_string())),
            None => return Err(AuthError::MalformedClaims("missing subject".to_string())),
        };

        Ok(Self {
            sub,
            iss: payload.get("iss").and_then(Value::as_str).map(str::to_string),
            iat: payload.get("iat").and_then(Value::as_u64),
            exp: payload.get("exp").and_then(Value::as_u64),
        })
    }
}

/// Take the token out of an `Authorization` header value
///
/// The scheme is matched case-insensitively against `bearer`. The header must
/// hold exactly the scheme and one token, separated by whitespace.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = match header {
        Some(h) if !h.is_empty() => h,
        _ => return Err(AuthError::MissingHeader),
    };

    let has_prefix = header
        .get(..BEARER_PREFIX.len())
        .map(|prefix| prefix.eq_ignore_ascii_case(BEARER_PREFIX))
        .unwrap_or(false);
    if !has_prefix {
        return Err(AuthError::InvalidScheme);
    }

    let mut parts = header.split_whitespace().skip(1);
    match (parts.next(), parts.next()) {
        (Some(token), None) => Ok(token),
        (None, _) => Err(AuthError::InvalidSignature("empty token".to_string())),
        (Some(_), Some(_)) => Err(AuthError::InvalidSignature(
            "unexpected data after token".to_string(),
        )),
    }
}

/// Verifies bearer credentials against a [`TrustAnchor`]
///
/// Holds no mutable state; one instance serves all requests.
#[derive(Clone)]
pub struct TokenVerifier {
    anchor: Arc<TrustAnchor>,
    validation: Validation,
}

impl TokenVerifier {
    /// Verifier checking the signature, `exp` and `nbf` only
    pub fn new(anchor: Arc<TrustAnchor>) -> Self {
        Self::with_claim_checks(anchor, None, None)
    }

    /// Verifier with the optional audience/issuer checks from configuration
    pub fn from_config(anchor: Arc<TrustAnchor>, config: &AuthConfig) -> Self {
        Self::with_claim_checks(anchor, config.audience.as_deref(), config.issuer.as_deref())
    }

    fn with_claim_checks(
        anchor: Arc<TrustAnchor>,
        audience: Option<&str>,
        issuer: Option<&str>,
    ) -> Self {
        // Validation::new pins the accepted algorithms to exactly RS256
        let mut validation = Validation::new(Algorithm::RS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.required_spec_claims = HashSet::new();

        match audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }
        if let Some(iss) = issuer {
            validation.set_issuer(&[iss]);
        }

        Self { anchor, validation }
    }

    /// Verify an `Authorization` header value
    ///
    /// # Errors
    /// * `AuthError::MissingHeader` - header absent or empty
    /// * `AuthError::InvalidScheme` - not a `Bearer` credential
    /// * `AuthError::InvalidSignature` - undecodable token, wrong algorithm or bad signature
    /// * `AuthError::RejectedClaims` - expired, not yet valid, or wrong issuer/audience
    /// * `AuthError::MalformedClaims` - no usable subject
    pub fn verify(&self, header: Option<&str>) -> Result<VerifiedClaims, AuthError> {
        let token = extract_bearer_token(header)?;
        self.verify_token(token)
    }

    /// Verify a bare compact token
    pub fn verify_token(&self, token: &str) -> Result<VerifiedClaims, AuthError> {
        let data = jsonwebtoken::decode::<Value>(token, self.anchor.decoding_key(), &self.validation)
            .map_err(classify)?;
        VerifiedClaims::from_payload(&data.claims)
    }
}

fn classify(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::RejectedClaims("token expired".to_string()),
        ErrorKind::ImmatureSignature => AuthError::RejectedClaims("token not yet valid".to_string()),
        ErrorKind::InvalidAudience => AuthError::RejectedClaims("audience mismatch".to_string()),
        ErrorKind::InvalidIssuer => AuthError::RejectedClaims("issuer mismatch".to_string()),
        ErrorKind::MissingRequiredClaim(claim) => {
            AuthError::RejectedClaims(format!("missing {} claim", claim))
        }
        _ => AuthError::InvalidSignature(err.to_string()),
    }
}
