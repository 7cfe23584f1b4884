//! Identity types
//!
//! A caller identity as asserted by the upstream gateway. Produced per
//! request and never persisted.

use serde::{Deserialize, Serialize};

/// Role whose members bypass permission bit checks entirely
pub const ADMIN_ROLE: &str = "admin";

/// Caller identity extracted from trust-asserted request headers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User identifier; empty when the gateway asserted none
    #[serde(default)]
    pub user: String,

    /// Role memberships in gateway order; may be empty
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Identity {
    pub fn new(user: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            user: user.into(),
            roles,
        }
    }

    /// An identity with no user and no roles (unauthenticated traffic)
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Whether any role grants the admin override (case-insensitive)
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(ADMIN_ROLE))
    }

    /// Whether this identity carries the given role (exact match)
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// The first role in the gateway-asserted order, if any
    ///
    /// This is the role stamped as owning group on resource creation.
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin_case_insensitive() {
        let identity = Identity::new("alice", vec!["Admin".into()]);
        assert!(identity.is_admin());

        let identity = Identity::new("alice", vec!["ADMIN".into()]);
        assert!(identity.is_admin());

        let identity = Identity::new("alice", vec!["administrator".into()]);
        assert!(!identity.is_admin());
    }

    #[test]
    fn test_anonymous_has_nothing() {
        let identity = Identity::anonymous();
        assert!(identity.user.is_empty());
        assert!(identity.roles.is_empty());
        assert!(!identity.is_admin());
        assert_eq!(identity.primary_role(), None);
    }

    #[test]
    fn test_primary_role_is_first() {
        let identity = Identity::new("bob", vec!["eng".into(), "ops".into()]);
        assert_eq!(identity.primary_role(), Some("eng"));
    }

    #[test]
    fn test_has_role_is_exact() {
        let identity = Identity::new("bob", vec!["eng".into()]);
        assert!(identity.has_role("eng"));
        assert!(!identity.has_role("Eng"));
    }
}
