// Copyright 2025 The Todos Authors.
// SPDX-License-Identifier: Apache-2.0

/// Authentication context attached to authorized requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Principal ID (the subject of the verified bearer token)
    pub principal_id: String,
}

impl AuthContext {
    /// Context for a principal allowed by the authorizer
    pub fn authenticated(principal_id: impl Into<String>) -> Self {
        Self {
            principal_id: principal_id.into(),
        }
    }

    /// Principal to scope data access to
    pub fn user_id(&self) -> &str {
        &self.principal_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_context_scopes_to_principal() {
        let user = AuthContext::authenticated("auth0|user123");
        assert_eq!(user.user_id(), "auth0|user123");
    }
}
