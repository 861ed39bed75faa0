// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures: a test issuer certificate with its private key, and a
//! second unrelated key that must never be trusted.

#![allow(dead_code)]

use std::sync::Arc;

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use todos_api::{ApiState, Authorizer, TokenVerifier, TrustAnchor};
use todos_config::{ApiConfig, AttachmentsConfig, AuthConfig};
use todos_services::{InMemoryTodoStore, S3Presigner, TodoServiceImpl};

pub const ISSUER_CERT: &str = include_str!("../fixtures/issuer_cert.pem");
pub const ISSUER_PUBLIC_KEY: &str = include_str!("../fixtures/issuer_public_key.pem");
pub const ISSUER_KEY: &str = include_str!("../fixtures/issuer_key.pem");
pub const ROGUE_KEY: &str = include_str!("../fixtures/rogue_key.pem");

pub fn now() -> u64 {
    chrono::Utc::now().timestamp() as u64
}

pub fn claims_for(sub: &str) -> Value {
    json!({
        "sub": sub,
        "iss": "https://todos-test-issuer/",
        "iat": now(),
        "exp": now() + 3600,
    })
}

/// RS256 token over `claims`, signed with `private_key_pem`
pub fn sign_with(private_key_pem: &str, claims: &Value) -> String {
    let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes()).unwrap();
    encode(&Header::new(Algorithm::RS256), claims, &key).unwrap()
}

/// RS256 token from the trusted test issuer
pub fn issue(claims: &Value) -> String {
    sign_with(ISSUER_KEY, claims)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn anchor() -> Arc<TrustAnchor> {
    Arc::new(TrustAnchor::from_pem(ISSUER_CERT).unwrap())
}

pub fn authorizer() -> Authorizer {
    Authorizer::new(TokenVerifier::new(anchor()))
}

pub fn authorizer_with(config: &AuthConfig) -> Authorizer {
    Authorizer::new(TokenVerifier::from_config(anchor(), config))
}

pub fn attachments_config() -> AttachmentsConfig {
    AttachmentsConfig {
        bucket: "todos-files-test".to_string(),
        region: Some("us-east-1".to_string()),
        access_key_id: "AKIDEXAMPLE".to_string(),
        secret_access_key: "secret".to_string(),
        ..AttachmentsConfig::default()
    }
}

pub fn app() -> axum::Router {
    let store = Arc::new(InMemoryTodoStore::default());
    let signer = Arc::new(S3Presigner::from_config(&attachments_config()).unwrap());
    let service = Arc::new(TodoServiceImpl::new(store, signer));
    let state = ApiState::new(service, Arc::new(authorizer()));

    todos_api::create_http_server(state, &ApiConfig::default())
}
