//! Resource metadata types
//!
//! The slice of a stored object document the evaluator consumes. The field
//! layout matches the object store's wire contract (`permissions.owner`,
//! `permissions.owner_access`, ...); access fields are nine Unix-style bits
//! split across three triples.

use crate::authz::bits::ACCESS_MAX;
use crate::error::MetadataError;
use serde::{Deserialize, Serialize};

/// Stored permission attributes of a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePermissions {
    /// Owning user, stamped at creation
    pub owner: String,

    /// Owning group, stamped at creation from the creator's primary role
    pub group: String,

    /// Owner category triple, 0-7
    pub owner_access: u8,

    /// Group category triple, 0-7
    pub group_access: u8,

    /// Other category triple, 0-7
    pub other_access: u8,
}

impl Default for ResourcePermissions {
    fn default() -> Self {
        // Full triples until creation-time assignment narrows them
        Self {
            owner: String::new(),
            group: String::new(),
            owner_access: ACCESS_MAX,
            group_access: ACCESS_MAX,
            other_access: ACCESS_MAX,
        }
    }
}

impl ResourcePermissions {
    pub fn new(
        owner: impl Into<String>,
        group: impl Into<String>,
        owner_access: u8,
        group_access: u8,
        other_access: u8,
    ) -> Self {
        Self {
            owner: owner.into(),
            group: group.into(),
            owner_access,
            group_access,
            other_access,
        }
    }

    /// Check that every access triple is within [0,7]
    pub fn validate(&self) -> Result<(), MetadataError> {
        for (field, value) in [
            ("owner_access", self.owner_access),
            ("group_access", self.group_access),
            ("other_access", self.other_access),
        ] {
            if value > ACCESS_MAX {
                return Err(MetadataError::InvalidAccessBits { field, value });
            }
        }
        Ok(())
    }

    /// The three triples packed into one nine-bit value
    pub fn combined(&self) -> u32 {
        (self.owner_access as u32) << 6 | (self.group_access as u32) << 3 | self.other_access as u32
    }
}

/// Resource metadata as resolved from the object store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMetadata {
    pub permissions: ResourcePermissions,
}

impl ResourceMetadata {
    pub fn new(permissions: ResourcePermissions) -> Self {
        Self { permissions }
    }
}
