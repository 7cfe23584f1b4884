//! Permission evaluation for multi-tenant object APIs
//!
//! Decides, per resource access attempt, whether a caller may read, write,
//! or link a resource, from Unix-style owner/group/other permission bits
//! stored with the resource and the caller's gateway-asserted identity.
//!
//! ## Permission Model
//!
//! ```text
//! identity ──┐
//!            ├─ category mask (owner 0o700 | group 0o070, else other 0o007)
//! resource ──┘
//! allowed = admin || (mask & packed_bits & mode_mask) != 0
//! ```
//!
//! - Owner and group categories are additive; an unrecognized caller is
//!   evaluated against the "other" triple alone
//! - The requested mode bit is replicated across all three category
//!   positions, so one AND covers whichever category matched
//! - The `admin` role bypasses bit checks unconditionally
//! - A resource the store cannot find is *allowed* through: the caller's
//!   own not-found handling reports it, not the authorization layer
//!
//! ## Example Configuration
//!
//! ```toml
//! [authz]
//! auth_open = false        # never bypass
//! multi_tenancy = true     # evaluate per-tenant bits
//!
//! [identity]
//! user_header = "x-user"   # gateway-asserted identity headers
//! role_header = "x-role"
//! ```
//!
//! ## Example
//!
//! ```
//! use permgate::authz::{AccessGate, PermissionEvaluator, assign_on_create};
//! use permgate::config::AuthzConfig;
//! use permgate::identity::Identity;
//! use permgate::metadata::{MemoryMetadataStore, ResourceMetadata};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> permgate::Result<()> {
//! let store = Arc::new(MemoryMetadataStore::new());
//!
//! // create path: stamp ownership from the creating identity
//! let creator = Identity::new("bob", vec!["eng".into()]);
//! let mut metadata = ResourceMetadata::default();
//! metadata.permissions.owner_access = 6;
//! metadata.permissions.group_access = 4;
//! metadata.permissions.other_access = 0;
//! assign_on_create(&creator, &mut metadata);
//! store.insert("vm-1", metadata).await;
//!
//! // read path: gate -> evaluator -> decision
//! let gate = AccessGate::new(&AuthzConfig::default(), PermissionEvaluator::new(store));
//! assert!(gate.check_write(&creator, "vm-1").await?.is_allowed());
//!
//! let outsider = Identity::new("mallory", vec![]);
//! assert!(gate.check_read(&outsider, "vm-1").await?.is_denied());
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod authz;
pub mod config;
pub mod error;
pub mod identity;
pub mod metadata;

// Re-export main types
pub use authz::{AccessGate, AccessMode, Decision, PermissionEvaluator, assign_on_create};
pub use config::{AppConfig, load_config};
pub use error::{AuthzError, Result};
pub use identity::{Identity, IdentityResolver};
pub use metadata::{MetadataStore, ResourceMetadata, ResourcePermissions};
