//! Cache region ports
//!
//! A region is a named, independently-expiring bucket of key/value
//! entries; the manager owns the registry of regions. Freshness is
//! enforced at region granularity only: there is no per-entry TTL, and a
//! stale region is replaced wholesale (all entries vanish together) the
//! next time its name is requested. Staleness is detected lazily by a
//! full sweep on every public call, which costs O(total regions) per call
//! but needs no background timer.

use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// A named bucket of opaque string entries sharing one creation instant
///
/// Values are opaque to the region (JSON strings by convention). A region
/// never expires individual entries; it is live as a whole while
/// `now - created_at() <= TTL` and is swapped out by its manager once
/// stale.
#[async_trait]
pub trait CacheRegion: Send + Sync + std::fmt::Debug {
    /// Region name
    fn name(&self) -> &str;

    /// Instant this region object was created; fixed for its lifetime
    fn created_at(&self) -> Instant;

    /// Look up an entry. A miss is `Ok(None)`, never an error.
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Store an entry; last write wins under concurrent puts
    async fn put_json(&self, key: &str, value: &str) -> Result<()>;

    /// Remove an entry if present
    async fn evict(&self, key: &str) -> Result<()>;

    /// Number of entries currently stored
    async fn size(&self) -> Result<usize>;
}

/// Registry of cache regions keyed by name
///
/// The manager creates regions on first access, sweeps stale ones, and
/// supports an administrative clear-all. Implementations must guarantee
/// that exactly one live region per name is visible to concurrent callers
/// at any instant: get-or-create is atomic, never check-then-create.
#[async_trait]
pub trait CacheRegionManager: Send + Sync + std::fmt::Debug {
    /// Return the live region for `name`
    ///
    /// Creates a fresh empty region (with `created_at` = now) when the
    /// name is unknown or the existing region is stale. Sweeps all
    /// regions first, so the returned region is never past its TTL at the
    /// moment of return.
    async fn get_region(&self, name: &str) -> Result<Arc<dyn CacheRegion>>;

    /// Sweep, then snapshot the names of currently-live regions
    async fn list_region_names(&self) -> Result<HashSet<String>>;

    /// Discard every region
    ///
    /// Returns whether the clear took effect; in-memory implementations
    /// always succeed.
    async fn clear_all(&self) -> Result<bool>;

    /// Implementation name for configuration and diagnostics
    fn provider_name(&self) -> &str;
}
