//! Access gate
//!
//! Thin per-mode entry points in front of the evaluator. The gate owns the
//! deployment bypass flags: with auth open, or with multi-tenancy disabled,
//! every check short-circuits to allowed and the evaluator is never
//! consulted. Flags are explicit configuration fixed at construction; the
//! gate holds no ambient server state.

use crate::authz::bits::AccessMode;
use crate::authz::evaluator::{Decision, PermissionEvaluator};
use crate::config::AuthzConfig;
use crate::error::{AuthzError, PermissionDeniedError, Result};
use crate::identity::Identity;
use crate::metadata::MetadataStore;
use tracing::debug;

/// Per-mode authorization entry points with deployment bypass flags
pub struct AccessGate<S> {
    auth_open: bool,
    multi_tenancy: bool,
    evaluator: PermissionEvaluator<S>,
}

impl<S: MetadataStore> AccessGate<S> {
    pub fn new(config: &AuthzConfig, evaluator: PermissionEvaluator<S>) -> Self {
        Self {
            auth_open: config.auth_open,
            multi_tenancy: config.multi_tenancy,
            evaluator,
        }
    }

    /// Check read access to a resource
    pub async fn check_read(&self, identity: &Identity, resource_id: &str) -> Result<Decision> {
        self.check(identity, resource_id, AccessMode::Read).await
    }

    /// Check write access to a resource
    pub async fn check_write(&self, identity: &Identity, resource_id: &str) -> Result<Decision> {
        self.check(identity, resource_id, AccessMode::Write).await
    }

    /// Check link (reference) access to a resource
    pub async fn check_link(&self, identity: &Identity, resource_id: &str) -> Result<Decision> {
        self.check(identity, resource_id, AccessMode::Link).await
    }

    async fn check(
        &self,
        identity: &Identity,
        resource_id: &str,
        mode: AccessMode,
    ) -> Result<Decision> {
        if self.auth_open {
            debug!(resource = resource_id, mode = %mode, "Auth open, skipping check");
            return Ok(Decision::Allowed);
        }
        if !self.multi_tenancy {
            debug!(resource = resource_id, mode = %mode, "Single tenant, skipping check");
            return Ok(Decision::Allowed);
        }
        self.evaluator.authorize(identity, resource_id, mode).await
    }

    /// Check access, returning an error if denied
    pub async fn require(
        &self,
        identity: &Identity,
        resource_id: &str,
        mode: AccessMode,
    ) -> Result<()> {
        match self.check(identity, resource_id, mode).await? {
            Decision::Allowed => Ok(()),
            Decision::Denied { .. } => Err(AuthzError::PermissionDenied(
                PermissionDeniedError::forbidden(resource_id),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::NullAuditSink;
    use crate::metadata::{MemoryMetadataStore, ResourceMetadata, ResourcePermissions};
    use std::sync::Arc;

    async fn gate_with(config: AuthzConfig) -> AccessGate<MemoryMetadataStore> {
        let store = Arc::new(MemoryMetadataStore::new());
        store
            .insert(
                "res-1",
                ResourceMetadata::new(ResourcePermissions::new("bob", "eng", 6, 4, 0)),
            )
            .await;
        let evaluator = PermissionEvaluator::with_audit_sink(store, Arc::new(NullAuditSink));
        AccessGate::new(&config, evaluator)
    }

    #[tokio::test]
    async fn test_auth_open_bypasses_evaluator() {
        let gate = gate_with(AuthzConfig {
            auth_open: true,
            multi_tenancy: true,
        })
        .await;
        let stranger = Identity::new("dave", vec![]);
        assert!(gate
            .check_write(&stranger, "res-1")
            .await
            .unwrap()
            .is_allowed());
    }

    #[tokio::test]
    async fn test_single_tenant_bypasses_evaluator() {
        let gate = gate_with(AuthzConfig {
            auth_open: false,
            multi_tenancy: false,
        })
        .await;
        let stranger = Identity::new("dave", vec![]);
        assert!(gate
            .check_write(&stranger, "res-1")
            .await
            .unwrap()
            .is_allowed());
    }

    #[tokio::test]
    async fn test_multi_tenant_delegates() {
        let gate = gate_with(AuthzConfig::default()).await;

        let owner = Identity::new("bob", vec![]);
        assert!(gate.check_write(&owner, "res-1").await.unwrap().is_allowed());

        let stranger = Identity::new("dave", vec![]);
        assert!(gate
            .check_write(&stranger, "res-1")
            .await
            .unwrap()
            .is_denied());
    }

    #[tokio::test]
    async fn test_modes_map_to_their_bits() {
        let gate = gate_with(AuthzConfig::default()).await;
        // group_access=4: eng members can read but not write or link
        let member = Identity::new("carol", vec!["eng".into()]);

        assert!(gate.check_read(&member, "res-1").await.unwrap().is_allowed());
        assert!(gate.check_write(&member, "res-1").await.unwrap().is_denied());
        assert!(gate.check_link(&member, "res-1").await.unwrap().is_denied());
    }

    #[tokio::test]
    async fn test_require_surfaces_denial_as_error() {
        let gate = gate_with(AuthzConfig::default()).await;
        let stranger = Identity::new("dave", vec![]);

        let err = gate
            .require(&stranger, "res-1", AccessMode::Write)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthzError::PermissionDenied(_)));

        let owner = Identity::new("bob", vec![]);
        assert!(gate.require(&owner, "res-1", AccessMode::Write).await.is_ok());
    }
}
