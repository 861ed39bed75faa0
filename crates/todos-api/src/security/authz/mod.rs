// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

pub mod authorizer;
pub mod policy;

pub use authorizer::Authorizer;
pub use policy::{
    AuthorizationDecision, Effect, Permission, PolicyDocument, PolicyStatement, DENIED_PRINCIPAL,
    POLICY_VERSION,
};
