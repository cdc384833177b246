//! Cache region configuration

use porter_domain::constants::DEFAULT_REGION_TTL_SECS;
use serde::{Deserialize, Serialize};

/// Cache region backends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// In-memory region registry
    Memory,
    /// No-op registry (caching disabled)
    Null,
}

/// Cache region settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Backend implementation
    pub provider: CacheBackend,

    /// Whole-region TTL in seconds; a region older than this is replaced
    /// on next access
    pub region_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: CacheBackend::Memory,
            region_ttl_secs: DEFAULT_REGION_TTL_SECS,
        }
    }
}
