//! Permission evaluator
//!
//! The decision core. Given a caller identity and a resource's stored
//! permission attributes, decides allow/deny for a requested access mode:
//!
//! 1. Match the identity against ownership to build the category mask:
//!    owner match enables the 0o700 bits, group match the 0o070 bits, both
//!    can apply at once; no match falls back to the 0o007 "other" bits.
//! 2. Pack the three stored triples into one nine-bit value.
//! 3. Expand the requested mode bit into all three category positions.
//! 4. Allowed iff the caller is admin, or the AND of the three values is
//!    non-zero.
//!
//! The evaluator is stateless beyond its collaborators and safe to share
//! across request tasks.

use crate::audit::{AuditRecord, AuditSink, TracingAuditSink};
use crate::authz::bits::{AccessMode, GROUP_MASK, OTHER_MASK, OWNER_MASK};
use crate::error::{MetadataError, PermissionDeniedError, Result};
use crate::identity::Identity;
use crate::metadata::{MetadataStore, ResourcePermissions};
use http::StatusCode;
use std::sync::Arc;
use tracing::debug;

/// Outcome of a single evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Access is allowed
    Allowed,
    /// Access is denied with a status and a fixed user-facing message
    Denied { status: StatusCode, message: String },
}

impl Decision {
    /// The standard denial: HTTP 403 with the fixed message
    pub fn forbidden() -> Self {
        Decision::Denied {
            status: StatusCode::FORBIDDEN,
            message: PermissionDeniedError::MESSAGE.to_string(),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Decision::Denied { .. })
    }
}

/// Category triples an identity is evaluated against
///
/// Owner and group are additive; the "other" bits apply only when neither
/// matched, narrowing an unrecognized caller to the last triple.
pub fn category_mask(identity: &Identity, perms: &ResourcePermissions) -> u32 {
    let mut mask = 0;
    if identity.user == perms.owner {
        mask |= OWNER_MASK;
    }
    if identity.has_role(&perms.group) {
        mask |= GROUP_MASK;
    }
    if mask == 0 {
        mask = OTHER_MASK;
    }
    mask
}

/// The permission decision core
pub struct PermissionEvaluator<S> {
    store: Arc<S>,
    audit: Arc<dyn AuditSink>,
}

impl<S: MetadataStore> PermissionEvaluator<S> {
    /// Create an evaluator auditing through the default tracing sink
    pub fn new(store: Arc<S>) -> Self {
        Self::with_audit_sink(store, Arc::new(TracingAuditSink))
    }

    /// Create an evaluator with an injected audit sink
    pub fn with_audit_sink(store: Arc<S>, audit: Arc<dyn AuditSink>) -> Self {
        Self { store, audit }
    }

    /// Decide access for an identity against stored permissions
    ///
    /// Pure apart from the audit record, which is advisory and never feeds
    /// back into the decision.
    pub fn evaluate(
        &self,
        identity: &Identity,
        perms: &ResourcePermissions,
        resource_id: &str,
        mode: AccessMode,
        is_admin: bool,
    ) -> Decision {
        let mask = category_mask(identity, perms);
        let combined = perms.combined();
        let mode_mask = mode.mode_mask();

        let allowed = is_admin || (mask & combined & mode_mask) != 0;

        self.audit.record(&AuditRecord {
            allowed,
            mode,
            resource_id,
            is_admin,
            mode_mask,
            category_mask: mask,
            user: &identity.user,
            roles: &identity.roles,
            perms: combined,
            owner: &perms.owner,
            group: &perms.group,
        });

        if allowed {
            Decision::Allowed
        } else {
            Decision::forbidden()
        }
    }

    /// Resolve a resource's stored permissions and decide access
    ///
    /// A store "no such id" is not a denial: authorization is not the layer
    /// that reports missing resources, so the decision is Allowed and the
    /// caller's own not-found handling takes over. Any other store failure
    /// propagates.
    pub async fn authorize(
        &self,
        identity: &Identity,
        resource_id: &str,
        mode: AccessMode,
    ) -> Result<Decision> {
        let metadata = match self.store.resource_metadata(resource_id).await {
            Ok(metadata) => metadata,
            Err(MetadataError::NotFound { .. }) => {
                debug!(resource = resource_id, "Resource not found, deferring to caller");
                return Ok(Decision::Allowed);
            }
            Err(e) => return Err(e.into()),
        };

        metadata.permissions.validate()?;

        Ok(self.evaluate(
            identity,
            &metadata.permissions,
            resource_id,
            mode,
            identity.is_admin(),
        ))
    }
}
