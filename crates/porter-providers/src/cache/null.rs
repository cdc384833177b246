//! Null cache region provider for testing
//!
//! A region manager that stores nothing. Useful for testing and for
//! disabling caching through configuration.

use async_trait::async_trait;
use porter_domain::error::Result;
use porter_domain::ports::cache::{CacheRegion, CacheRegionManager};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// Region handle that never stores anything
///
/// Every get is a miss, every put is accepted and discarded.
#[derive(Debug)]
pub struct NullRegion {
    name: String,
    created_at: Instant,
}

#[async_trait]
impl CacheRegion for NullRegion {
    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> Instant {
        self.created_at
    }

    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        // Always a miss
        Ok(None)
    }

    async fn put_json(&self, _key: &str, _value: &str) -> Result<()> {
        // Accept and discard
        Ok(())
    }

    async fn evict(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    async fn size(&self) -> Result<usize> {
        Ok(0)
    }
}

/// Region manager that doesn't cache anything
///
/// Hands out fresh empty [`NullRegion`]s and tracks no state. Useful for
/// testing and for disabling caching.
#[derive(Debug, Clone, Default)]
pub struct NullRegionManager;

impl NullRegionManager {
    /// Create a new null region manager
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheRegionManager for NullRegionManager {
    async fn get_region(&self, name: &str) -> Result<Arc<dyn CacheRegion>> {
        Ok(Arc::new(NullRegion {
            name: name.to_string(),
            created_at: Instant::now(),
        }))
    }

    async fn list_region_names(&self) -> Result<HashSet<String>> {
        // Nothing is ever retained
        Ok(HashSet::new())
    }

    async fn clear_all(&self) -> Result<bool> {
        Ok(true)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
