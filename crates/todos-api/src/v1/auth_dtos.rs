// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Custom authorizer DTOs
//!
//! The response is [`crate::security::AuthorizationDecision`] itself.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Token authorizer event as sent by the API gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerEventRequest {
    /// Event type, `TOKEN` for bearer token authorizers
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    /// Raw `Authorization` header value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_token: Option<String>,

    /// ARN of the invoked method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_arn: Option<String>,
}
