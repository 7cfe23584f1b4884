//! Object metadata
//!
//! Stored permission attributes and the store contract used to resolve a
//! resource id to them. The store itself is owned by the embedding server;
//! this crate only reads.

pub mod store;
pub mod types;

pub use store::{MemoryMetadataStore, MetadataStore};
pub use types::{ResourceMetadata, ResourcePermissions};
