// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

//! Policy documents returned by the authorizer
//!
//! Field names follow the API gateway custom-authorizer response format:
//! ```json
//! {
//!   "principalId": "user123",
//!   "policyDocument": {
//!     "Version": "2012-10-17",
//!     "Statement": [
//!       { "Action": "execute-api:Invoke", "Effect": "Allow", "Resource": "*" }
//!     ]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Policy language version understood by the gateway
pub const POLICY_VERSION: &str = "2012-10-17";

/// Principal reported on every denied request
pub const DENIED_PRINCIPAL: &str = "user";

/// Actions a policy statement can cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Invoke any API route
    InvokeApi,
}

impl Permission {
    pub fn action(&self) -> &'static str {
        match self {
            Permission::InvokeApi => "execute-api:Invoke",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub action: String,
    pub effect: Effect,
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<PolicyStatement>,
}

/// Allow or deny for one request, with the principal it applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationDecision {
    pub principal_id: String,
    pub policy_document: PolicyDocument,
}

impl AuthorizationDecision {
    /// Allow `permission` on all resources for `principal_id`
    pub fn allow(principal_id: impl Into<String>, permission: Permission) -> Self {
        Self::single_statement(principal_id.into(), permission, Effect::Allow)
    }

    /// Deny `permission`; the principal is always [`DENIED_PRINCIPAL`]
    pub fn deny(permission: Permission) -> Self {
        Self::single_statement(DENIED_PRINCIPAL.to_string(), permission, Effect::Deny)
    }

    fn single_statement(principal_id: String, permission: Permission, effect: Effect) -> Self {
        Self {
            principal_id,
            policy_document: PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![PolicyStatement {
                    action: permission.action().to_string(),
                    effect,
                    resource: "*".to_string(),
                }],
            },
        }
    }

    /// Effect of the decision; `Deny` unless every statement allows
    pub fn effect(&self) -> Effect {
        let statements = &self.policy_document.statement;
        if !statements.is_empty() && statements.iter().all(|s| s.effect == Effect::Allow) {
            Effect::Allow
        } else {
            Effect::Deny
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.effect() == Effect::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_allow_wire_format() {
        let decision = AuthorizationDecision::allow("user123", Permission::InvokeApi);

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
        assert!(decision.is_allowed());
    }

    #[test]
    fn test_deny_uses_placeholder_principal() {
        let decision = AuthorizationDecision::deny(Permission::InvokeApi);

        assert_eq!(decision.principal_id, "user");
        assert_eq!(decision.effect(), Effect::Deny);
        assert_eq!(decision.policy_document.statement[0].effect, Effect::Deny);
    }

    #[test]
    fn test_empty_policy_is_deny() {
        let mut decision = AuthorizationDecision::allow("user123", Permission::InvokeApi);
        decision.policy_document.statement.clear();
        assert!(!decision.is_allowed());
    }
}
