// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Authorizer behaviour against real RS256 signatures

mod common;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use common::*;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;
use todos_api::security::DENIED_PRINCIPAL;
use todos_api::{AuthError, Effect, TokenVerifier, TrustAnchor};
use todos_config::AuthConfig;

fn assert_denied(header: Option<&str>) {
    let decision = authorizer().authorize(header);
    assert_eq!(decision.effect(), Effect::Deny, "header {:?} should be denied", header);
    assert_eq!(decision.principal_id, DENIED_PRINCIPAL);
}

#[test]
fn test_valid_token_is_allowed_with_subject_as_principal() {
    let token = issue(&claims_for("user123"));

    let decision = authorizer().authorize(Some(bearer(&token).as_str()));

    assert_eq!(decision.effect(), Effect::Allow);
    assert_eq!(decision.principal_id, "user123");
    assert_eq!(
        serde_json::to_value(&decision).unwrap(),
        json!({
            "principalId": "user123",
            "policyDocument": {
                "Version": "2012-10-17",
                "Statement": [
                    {"Action": "execute-api:Invoke", "Effect": "Allow", "Resource": "*"}
                ]
            }
        })
    );
}

#[test]
fn test_scheme_casing_does_not_matter() {
    let token = issue(&claims_for("user123"));
    let authorizer = authorizer();

    for scheme in ["Bearer", "bearer", "BEARER", "BeArEr"] {
        let decision = authorizer.authorize(Some(format!("{} {}", scheme, token).as_str()));
        assert!(decision.is_allowed(), "scheme {} should be accepted", scheme);
    }
}

#[test]
fn test_missing_and_malformed_headers_are_denied() {
    let token = issue(&claims_for("user123"));

    assert_denied(None);
    assert_denied(Some(""));
    assert_denied(Some("Basic abc123"));
    assert_denied(Some(token.as_str()));
    assert_denied(Some("Bearer"));
    assert_denied(Some("Bearer "));
    assert_denied(Some(format!("Token {}", token).as_str()));
    assert_denied(Some(format!("Bearer {} trailing", token).as_str()));
}

#[test]
fn test_token_from_another_key_is_denied() {
    let token = sign_with(ROGUE_KEY, &claims_for("user123"));
    assert_denied(Some(bearer(&token).as_str()));
}

#[test]
fn test_tampered_payload_is_denied() {
    let token = issue(&claims_for("user123"));
    let parts: Vec<&str> = token.split('.').collect();
    let forged_payload = URL_SAFE_NO_PAD.encode(claims_for("admin").to_string());
    let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

    assert_denied(Some(bearer(&forged).as_str()));
}

#[test]
fn test_hs256_signed_with_public_key_is_denied() {
    // Key confusion: HMAC keyed with the public key the server trusts
    let key = EncodingKey::from_secret(ISSUER_PUBLIC_KEY.as_bytes());
    let token = encode(&Header::new(Algorithm::HS256), &claims_for("user123"), &key).unwrap();

    assert_denied(Some(bearer(&token).as_str()));
}

#[test]
fn test_unsigned_token_is_denied() {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims_for("user123").to_string());

    assert_denied(Some(bearer(&format!("{}.{}.", header, payload)).as_str()));
    assert_denied(Some(bearer(&format!("{}.{}", header, payload)).as_str()));
}

#[test]
fn test_expired_token_is_denied() {
    let mut claims = claims_for("user123");
    claims["exp"] = json!(now() - 60);

    assert_denied(Some(bearer(&issue(&claims)).as_str()));
}

#[test]
fn test_not_yet_valid_token_is_denied() {
    let mut claims = claims_for("user123");
    claims["nbf"] = json!(now() + 3600);

    assert_denied(Some(bearer(&issue(&claims)).as_str()));
}

#[test]
fn test_token_without_exp_is_allowed() {
    let token = issue(&json!({"sub": "user123"}));
    assert!(authorizer().authorize(Some(bearer(&token).as_str())).is_allowed());
}

#[test]
fn test_missing_subject_is_denied() {
    let token = issue(&json!({"iss": "https://todos-test-issuer/", "exp": now() + 3600}));
    assert_denied(Some(bearer(&token).as_str()));

    let err = TokenVerifier::new(anchor())
        .verify(Some(bearer(&token).as_str()))
        .unwrap_err();
    assert!(matches!(err, AuthError::MalformedClaims(_)));
}

#[test]
fn test_verifier_error_categories() {
    let verifier = TokenVerifier::new(anchor());

    assert_eq!(verifier.verify(None).unwrap_err(), AuthError::MissingHeader);
    assert_eq!(verifier.verify(Some("Basic abc123")).unwrap_err(), AuthError::InvalidScheme);

    let rogue = sign_with(ROGUE_KEY, &claims_for("user123"));
    assert_eq!(
        verifier.verify(Some(bearer(&rogue).as_str())).unwrap_err().category(),
        "invalid_signature"
    );

    let mut claims = claims_for("user123");
    claims["exp"] = json!(now() - 60);
    assert_eq!(
        verifier.verify(Some(bearer(&issue(&claims)).as_str())).unwrap_err().category(),
        "rejected_claims"
    );
}

#[test]
fn test_error_summary_omits_token_text() {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"XS999-injected","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims_for("user123").to_string());
    let token = format!("{}.{}.c2ln", header, payload);

    let err = TokenVerifier::new(anchor())
        .verify(Some(bearer(&token).as_str()))
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidSignature(_)));
    assert!(!err.summary().contains("injected"));
    assert!(!authorizer().authorize(Some(bearer(&token).as_str())).is_allowed());
}

#[test]
fn test_decision_is_idempotent() {
    let authorizer = authorizer();
    let good = bearer(&issue(&claims_for("user123")));
    let bad = bearer(&sign_with(ROGUE_KEY, &claims_for("user123")));

    for header in [Some(good.as_str()), Some(bad.as_str()), None] {
        let first = authorizer.authorize(header);
        let second = authorizer.authorize(header);
        assert_eq!(first, second);
    }
}

#[test]
fn test_public_key_pem_anchor_verifies_same_tokens() {
    let anchor = TrustAnchor::from_pem(ISSUER_PUBLIC_KEY).unwrap();
    assert!(anchor.subject().is_none());

    let verifier = TokenVerifier::new(std::sync::Arc::new(anchor));
    let claims = verifier
        .verify(Some(bearer(&issue(&claims_for("user123"))).as_str()))
        .unwrap();
    assert_eq!(claims.sub, "user123");
}

#[test]
fn test_embedded_anchor_rejects_test_issuer() {
    let verifier = TokenVerifier::new(std::sync::Arc::new(TrustAnchor::embedded().unwrap()));
    let token = issue(&claims_for("user123"));

    assert!(matches!(
        verifier.verify(Some(bearer(&token).as_str())),
        Err(AuthError::InvalidSignature(_))
    ));
}

#[test]
fn test_configured_audience_and_issuer() {
    let config = AuthConfig {
        audience: Some("https://todos-api".to_string()),
        issuer: Some("https://todos-test-issuer/".to_string()),
    };
    let authorizer = authorizer_with(&config);

    let mut claims = claims_for("user123");
    claims["aud"] = json!("https://todos-api");
    assert!(authorizer.authorize(Some(bearer(&issue(&claims)).as_str())).is_allowed());

    claims["aud"] = json!("https://someone-else");
    assert!(!authorizer.authorize(Some(bearer(&issue(&claims)).as_str())).is_allowed());

    claims["aud"] = json!("https://todos-api");
    claims["iss"] = json!("https://evil-issuer/");
    assert!(!authorizer.authorize(Some(bearer(&issue(&claims)).as_str())).is_allowed());
}
