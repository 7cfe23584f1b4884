//! Creation-time permission assignment
//!
//! Runs once on the create path, before the resource is persisted. It stamps
//! the creating identity onto the new resource's permission attributes and
//! never corrects permissions afterward.

use crate::identity::Identity;
use crate::metadata::ResourceMetadata;
use tracing::trace;

/// Stamp owner and owning group from the creating identity
///
/// A non-empty user becomes the owner; the first role in the creator's role
/// list becomes the owning group. An absent user or empty role list leaves
/// the corresponding attribute at its existing value.
pub fn assign_on_create(identity: &Identity, metadata: &mut ResourceMetadata) {
    if !identity.user.is_empty() {
        metadata.permissions.owner = identity.user.clone();
    }
    if let Some(role) = identity.primary_role() {
        metadata.permissions.group = role.to_string();
    }
    trace!(
        owner = %metadata.permissions.owner,
        group = %metadata.permissions.group,
        "Assigned creation-time ownership"
    );
}
