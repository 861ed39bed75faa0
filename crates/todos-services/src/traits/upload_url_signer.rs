// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

use crate::types::SignerError;

/// Issues presigned object storage URLs
///
/// Signing is local computation; implementations must not perform I/O.
pub trait UploadUrlSigner: Send + Sync {
    /// URL authorizing a single `PUT` of the object `key`
    fn presign_put(&self, key: &str) -> Result<String, SignerError>;

    /// Public (unsigned) URL of the object `key`
    fn object_url(&self, key: &str) -> String;
}
