//! Metadata store contract
//!
//! The evaluator's one external collaborator: resolving a resource id to its
//! stored metadata. Real deployments implement [`MetadataStore`] over their
//! object database; [`MemoryMetadataStore`] serves tests and embedded use.
//!
//! Retry and timeout policy belongs to the implementation, not to the
//! evaluator; errors other than [`MetadataError::NotFound`] propagate to the
//! caller untouched.

use crate::error::MetadataError;
use crate::metadata::types::ResourceMetadata;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Resolves resource ids to stored metadata
///
/// Implementations must be shareable across request tasks.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Fetch the metadata for a resource id
    ///
    /// Returns [`MetadataError::NotFound`] when no such id exists and
    /// [`MetadataError::Backend`] (or another hard variant) when the lookup
    /// itself failed.
    async fn resource_metadata(&self, id: &str) -> Result<ResourceMetadata, MetadataError>;
}

/// In-memory metadata store keyed by resource id
#[derive(Default)]
pub struct MemoryMetadataStore {
    entries: RwLock<HashMap<String, ResourceMetadata>>,
}

impl MemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a resource's metadata
    pub async fn insert(&self, id: impl Into<String>, metadata: ResourceMetadata) {
        self.entries.write().await.insert(id.into(), metadata);
    }

    /// Remove a resource, returning its metadata if it was present
    pub async fn remove(&self, id: &str) -> Option<ResourceMetadata> {
        self.entries.write().await.remove(id)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl MetadataStore for MemoryMetadataStore {
    async fn resource_metadata(&self, id: &str) -> Result<ResourceMetadata, MetadataError> {
        self.entries
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| MetadataError::NotFound { id: id.to_string() })
    }
}
