// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

/*!
Transport-agnostic types for the service layer.
*/

pub mod dtos;
pub mod errors;

pub use dtos::*;
pub use errors::{ServiceError, ServiceResult, SignerError, StoreError};
