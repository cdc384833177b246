//! Cache administration use case
//!
//! Thin surface over the region manager for administrative callers.
//! Authorization is not decided here; the server layer gates access
//! before these methods run.

use porter_domain::error::Result;
use porter_domain::ports::cache::CacheRegionManager;
use std::collections::HashSet;
use std::sync::Arc;

/// Message returned when every region was discarded
pub const CACHES_CLEARED_MESSAGE: &str = "All caches cleared successfully.";

/// Message returned when the manager reported a failed clear
pub const CACHES_CLEAR_FAILED_MESSAGE: &str = "Failed to clear caches.";

/// Administrative operations over the region registry
pub struct CacheAdminService {
    regions: Arc<dyn CacheRegionManager>,
}

impl CacheAdminService {
    /// Create a cache admin service over the given manager
    pub fn new(regions: Arc<dyn CacheRegionManager>) -> Self {
        Self { regions }
    }

    /// Discard every region and report the outcome as a user-facing
    /// message
    pub async fn clear_all(&self) -> Result<String> {
        let cleared = self.regions.clear_all().await?;
        let message = if cleared {
            CACHES_CLEARED_MESSAGE
        } else {
            CACHES_CLEAR_FAILED_MESSAGE
        };
        Ok(message.to_string())
    }

    /// Names of the currently-live regions
    pub async fn region_names(&self) -> Result<HashSet<String>> {
        self.regions.list_region_names().await
    }
}
