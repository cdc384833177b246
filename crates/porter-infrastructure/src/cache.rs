//! Typed access to cache regions
//!
//! The region ports move opaque JSON strings; this wrapper gives
//! consumers typed `get`/`put` through serde without widening the port
//! surface.

use porter_domain::error::{Error, Result};
use porter_domain::ports::cache::{CacheRegion, CacheRegionManager};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Shareable typed view over a region manager
#[derive(Clone)]
pub struct SharedRegionCache {
    manager: Arc<dyn CacheRegionManager>,
}

impl SharedRegionCache {
    /// Wrap a region manager
    pub fn new(manager: Arc<dyn CacheRegionManager>) -> Self {
        Self { manager }
    }

    /// The underlying manager
    pub fn manager(&self) -> &Arc<dyn CacheRegionManager> {
        &self.manager
    }

    /// Live typed region for `name`
    pub async fn region(&self, name: &str) -> Result<TypedRegion> {
        let region = self.manager.get_region(name).await?;
        Ok(TypedRegion { region })
    }
}

/// Typed handle over one region
pub struct TypedRegion {
    region: Arc<dyn CacheRegion>,
}

impl TypedRegion {
    /// Region name
    pub fn name(&self) -> &str {
        self.region.name()
    }

    /// Look up and deserialize an entry
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.region.get_json(key).await? {
            Some(json) => serde_json::from_str(&json).map(Some).map_err(|e| {
                Error::cache(format!("failed to deserialize cached value for '{key}': {e}"))
            }),
            None => Ok(None),
        }
    }

    /// Serialize and store an entry
    pub async fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).map_err(|e| {
            Error::cache(format!("failed to serialize value for cache key '{key}': {e}"))
        })?;
        self.region.put_json(key, &json).await
    }

    /// Remove an entry if present
    pub async fn evict(&self, key: &str) -> Result<()> {
        self.region.evict(key).await
    }

    /// Number of entries in the region
    pub async fn size(&self) -> Result<usize> {
        self.region.size().await
    }
}
