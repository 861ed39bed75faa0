// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Trust anchor for bearer token signatures
//!
//! The identity provider's signing certificate is compiled into the binary.
//! It is parsed once at startup and shared read-only with every verifier.

use jsonwebtoken::DecodingKey;
use thiserror::Error;
use x509_cert::der::DecodePem;
use x509_cert::spki::ObjectIdentifier;
use x509_cert::Certificate;

/// `rsaEncryption` (RFC 8017)
const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// Signing certificate of the identity provider tenant
pub const EMBEDDED_CERTIFICATE_PEM: &str = "-----BEGIN CERTIFICATE-----
MIIDBzCCAe+gAwIBAgIJXhAoIbMwGPRJMA0GCSqGSIb3DQEBCwUAMCExHzAdBgNV
BAMTFmRldi1icW81Y3l1Yy5hdXRoMC5jb20wHhcNMjAwNTEyMjM1ODQ3WhcNMzQw
MTE5MjM1ODQ3WjAhMR8wHQYDVQQDExZkZXYtYnFvNWN5dWMuYXV0aDAuY29tMIIB
IjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAq7aADxwgVEKsm82Jk2fw62eZ
IgOIEJ37VXiU35oHTveyfMvaQQU30qZXWZXe1BhYzyhUAXljhdbCI3Tme41OjGLX
29msy9aM4I2+cP3Lf6sLLxqR6zKLxxgB6OL0Q8o2P3aqmy0N0z6ITkcH3VHoUsgR
L9HRRGOpf3gSjfLfbZ7nP2j7pcRxGmR3Wo6fwZEcW19mLnOAwES8Vzf9WWgAzXfT
M8BhUe+XcKvRJYyEPC0s4AbReZKoRmTmdt+pi6WDtKRYd8NvrYsRg/OY2yVSfIyb
7S5wBfNCYEadzPeMtuKEOQYD7/JnmZRFlxaxTLpl6yGOweuqvnjDyEAE/MbCIQID
AQABo0IwQDAPBgNVHRMBAf8EBTADAQH/MB0GA1UdDgQWBBSW7UNWIdZJel5tpJKP
a8eVXyRXzjAOBgNVHQ8BAf8EBAMCAoQwDQYJKoZIhvcNAQELBQADggEBAF35uVgH
RLZ5o1g2JCE+d8VjEkRxFi/SPH/itAum8beOGvemqSSx6Jqwhn25wvERKLy9TlJo
yjvLEwnC6l/rGVEMKXN/Ik4ffwAMm5Uth/CF+YoCgXQXR3Z49qzkgJs0gJspvR25
kHHvF12QploSVi5/dVJUuSn9LmT0qLamL7flfNvb3OINQalhNiLAniEgFXkCWURk
+zOfbH06FAs1FK6UguIjB6AatRwoSK+bFL9DZDKF6hMyY7rAQfHJcY7DdDHBTTEM
25BDNbkFc9ChIyGFUz3U71iLrcWKpO2b0ZhPMTblOM+sUS+BYW4/C7S/+XRlSnyO
NmYx3805kmoasVY=
-----END CERTIFICATE-----
";

/// Errors raised while loading a trust anchor
#[derive(Debug, Error)]
pub enum TrustAnchorError {
    #[error("Invalid certificate: {0}")]
    Certificate(String),

    #[error("Unsupported public key algorithm {0}, expected rsaEncryption")]
    UnsupportedAlgorithm(String),

    #[error("Invalid public key: {0}")]
    PublicKey(#[from] jsonwebtoken::errors::Error),
}

/// RSA public key that bearer tokens must be signed with
#[derive(Clone)]
pub struct TrustAnchor {
    key: DecodingKey,
    subject: Option<String>,
}

impl std::fmt::Debug for TrustAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustAnchor")
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

impl TrustAnchor {
    /// Load the certificate compiled into the binary
    pub fn embedded() -> Result<Self, TrustAnchorError> {
        Self::from_pem(EMBEDDED_CERTIFICATE_PEM)
    }

    /// Load a trust anchor from PEM
    ///
    /// Accepts an X.509 `CERTIFICATE` carrying an RSA key, or a bare
    /// `PUBLIC KEY` / `RSA PUBLIC KEY`.
    pub fn from_pem(pem: &str) -> Result<Self, TrustAnchorError> {
        let pem = pem.trim();

        if !pem.starts_with("-----BEGIN CERTIFICATE-----") {
            return Ok(Self {
                key: DecodingKey::from_rsa_pem(pem.as_bytes())?,
                subject: None,
            });
        }

        let cert = Certificate::from_pem(pem.as_bytes())
            .map_err(|e| TrustAnchorError::Certificate(e.to_string()))?;
        let spki = &cert.tbs_certificate.subject_public_key_info;

        if spki.algorithm.oid != RSA_ENCRYPTION {
            return Err(TrustAnchorError::UnsupportedAlgorithm(
                spki.algorithm.oid.to_string(),
            ));
        }

        let key_der = spki.subject_public_key.raw_bytes();
        if key_der.is_empty() {
            return Err(TrustAnchorError::Certificate("empty public key".to_string()));
        }

        Ok(Self {
            key: DecodingKey::from_rsa_der(key_der),
            subject: Some(cert.tbs_certificate.subject.to_string()),
        })
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.key
    }

    /// Certificate subject, `None` for bare public keys
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }
}
