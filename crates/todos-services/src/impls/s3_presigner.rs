// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

/*!
AWS SigV4 presigned URLs for attachment uploads.

Query-string authentication as described in the S3 documentation: the
signature covers the method, the object path, the `X-Amz-*` query parameters
and the `host` header. The payload is not signed (`UNSIGNED-PAYLOAD`).
*/

use std::fmt::Write;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use todos_config::AttachmentsConfig;
use tracing::debug;
use url::Url;

use crate::traits::UploadUrlSigner;
use crate::types::SignerError;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SERVICE: &str = "s3";

/// Presigns object storage requests with static credentials
#[derive(Clone)]
pub struct S3Presigner {
    bucket: String,
    region: String,
    /// Region as configured; `None` produces region-less AWS hostnames
    configured_region: Option<String>,
    access_key_id: String,
    secret_access_key: String,
    expires_secs: u64,
    /// Custom endpoint, addressed path-style
    endpoint: Option<Url>,
}

impl std::fmt::Debug for S3Presigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Presigner")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("expires_secs", &self.expires_secs)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl S3Presigner {
    /// Build a presigner from the attachments configuration
    ///
    /// # Errors
    /// * `SignerError::InvalidEndpoint` - `endpoint` is set but is not an http(s) URL with a host
    pub fn from_config(config: &AttachmentsConfig) -> Result<Self, SignerError> {
        let endpoint = match &config.endpoint {
            Some(raw) => {
                let url = Url::parse(raw)
                    .map_err(|e| SignerError::InvalidEndpoint(format!("{}: {}", raw, e)))?;
                if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
                    return Err(SignerError::InvalidEndpoint(raw.clone()));
                }
                Some(url)
            }
            None => None,
        };

        Ok(Self {
            bucket: config.bucket.clone(),
            region: config.signing_region().to_string(),
            configured_region: config.region.clone(),
            access_key_id: config.access_key_id.clone(),
            secret_access_key: config.secret_access_key.clone(),
            expires_secs: config.url_expiration_secs,
            endpoint,
        })
    }

    /// Scheme, host (with non-default port) and path of the object `key`
    fn object_location(&self, key: &str) -> (String, String, String) {
        let encoded_key = percent_encode_path(key);
        match &self.endpoint {
            Some(endpoint) => {
                let host = match endpoint.port() {
                    Some(port) => format!("{}:{}", endpoint.host_str().unwrap_or_default(), port),
                    None => endpoint.host_str().unwrap_or_default().to_string(),
                };
                let base = endpoint.path().trim_end_matches('/');
                (
                    endpoint.scheme().to_string(),
                    host,
                    format!("{}/{}/{}", base, self.bucket, encoded_key),
                )
            }
            None => {
                let host = match &self.configured_region {
                    Some(region) => format!("{}.s3.{}.amazonaws.com", self.bucket, region),
                    None => format!("{}.s3.amazonaws.com", self.bucket),
                };
                ("https".to_string(), host, format!("/{}", encoded_key))
            }
        }
    }

    /// Presign `method` on `key` as of `time`
    pub fn presign(
        &self,
        method: &str,
        key: &str,
        time: DateTime<Utc>,
    ) -> Result<String, SignerError> {
        if key.is_empty() {
            return Err(SignerError::InvalidKey("object key must not be empty".to_string()));
        }

        let timestamp = time.format("%Y%m%dT%H%M%SZ").to_string();
        let date = &timestamp[0..8];
        let scope = format!("{}/{}/{}/aws4_request", date, self.region, SERVICE);

        let (scheme, host, path) = self.object_location(key);

        let mut query_params: Vec<(String, String)> = vec![
            ("X-Amz-Algorithm".into(), ALGORITHM.into()),
            (
                "X-Amz-Credential".into(),
                format!("{}/{}", self.access_key_id, scope),
            ),
            ("X-Amz-Date".into(), timestamp.clone()),
            ("X-Amz-Expires".into(), self.expires_secs.to_string()),
            ("X-Amz-SignedHeaders".into(), "host".into()),
        ];
        query_params.sort_by(|a, b| a.0.cmp(&b.0));

        let canonical_query: String = query_params
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let canonical_request = format!(
            "{}\n{}\n{}\nhost:{}\n\nhost\nUNSIGNED-PAYLOAD",
            method, path, canonical_query, host
        );

        let digest = Sha256::digest(canonical_request.as_bytes());
        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            ALGORITHM,
            timestamp,
            scope,
            hex::encode(digest)
        );

        let key = SigningKey::derive(&self.secret_access_key, date, &self.region, SERVICE);
        let signature = hex::encode(key.sign(string_to_sign.as_bytes()));

        Ok(format!(
            "{}://{}{}?{}&X-Amz-Signature={}",
            scheme, host, path, canonical_query, signature
        ))
    }
}

impl UploadUrlSigner for S3Presigner {
    fn presign_put(&self, key: &str) -> Result<String, SignerError> {
        let url = self.presign("PUT", key, Utc::now())?;
        debug!(target: "todos-services", "Presigned upload for {} (expires in {}s)", key, self.expires_secs);
        Ok(url)
    }

    fn object_url(&self, key: &str) -> String {
        let (scheme, host, path) = self.object_location(key);
        format!("{}://{}{}", scheme, host, path)
    }
}

/// AWS SigV4 signing key
///
/// `HMAC(HMAC(HMAC(HMAC("AWS4" + secret, date), region), service), "aws4_request")`
struct SigningKey(Vec<u8>);

impl SigningKey {
    fn derive(secret: &str, date: &str, region: &str, service: &str) -> Self {
        let secret = format!("AWS4{}", secret);
        let k_date = Self::hmac(secret.as_bytes(), date.as_bytes());
        let k_region = Self::hmac(&k_date, region.as_bytes());
        let k_service = Self::hmac(&k_region, service.as_bytes());
        Self(Self::hmac(&k_service, b"aws4_request"))
    }

    fn hmac(key: &[u8], data: &[u8]) -> Vec<u8> {
        // new_from_slice only fails for fixed-size-key MACs; HMAC takes any length
        let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(key)
            .unwrap_or_else(|_| unreachable!("HMAC-SHA256 accepts keys of any size"));
        mac.update(data);
        mac.finalize().into_bytes().to_vec()
    }

    fn sign(&self, data: &[u8]) -> Vec<u8> {
        Self::hmac(&self.0, data)
    }
}

/// Percent-encode according to RFC 3986 (unreserved characters pass through)
fn percent_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char);
            }
            _ => {
                let _ = write!(result, "%{:02X}", byte);
            }
        }
    }
    result
}

/// Like [`percent_encode`], but keeps `/` so keys may contain path segments
fn percent_encode_path(path: &str) -> String {
    percent_encode(path).replace("%2F", "/")
}
