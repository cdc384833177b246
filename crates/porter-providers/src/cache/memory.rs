//! In-memory cache region provider
//!
//! Regions live in a concurrent registry keyed by name. Expiry is
//! whole-region: a region is live while `now - created_at <= ttl`, and
//! once stale it is replaced with a fresh empty one on next access (all
//! entries vanish together). Staleness is detected lazily by a full sweep
//! on every public call; there is no background reaper thread, so an
//! expired-but-unaccessed region sits in memory until the next call. The
//! sweep costs O(total regions) per call.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use porter_domain::clock::Clock;
use porter_domain::error::{Error, Result};
use porter_domain::ports::cache::{CacheRegion, CacheRegionManager};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// A named in-memory bucket of entries sharing one creation instant
///
/// Entries have no individual TTL; the manager swaps the whole region
/// once it goes stale.
#[derive(Debug)]
pub struct MemoryRegion {
    name: String,
    created_at: Instant,
    entries: DashMap<String, String>,
}

impl MemoryRegion {
    fn new(name: &str, created_at: Instant) -> Self {
        Self {
            name: name.to_string(),
            created_at,
            entries: DashMap::new(),
        }
    }

    /// Stale strictly past the TTL; a region exactly at the boundary is
    /// still live
    fn is_stale(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.created_at) > ttl
    }
}

#[async_trait]
impl CacheRegion for MemoryRegion {
    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> Instant {
        self.created_at
    }

    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn put_json(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn evict(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn size(&self) -> Result<usize> {
        Ok(self.entries.len())
    }
}

/// In-memory region registry with whole-region TTL expiry
///
/// Get-or-create goes through the map's entry API, which holds the shard
/// lock for the whole decision: concurrent callers racing on the same
/// name observe exactly one live region object.
#[derive(Debug)]
pub struct InMemoryRegionManager {
    regions: DashMap<String, Arc<MemoryRegion>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl InMemoryRegionManager {
    /// Create a manager with the given region TTL
    ///
    /// Fails fast on a zero TTL, which would expire every region at
    /// creation.
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Result<Self> {
        if ttl.is_zero() {
            return Err(Error::config("cache region TTL must be positive"));
        }
        Ok(Self {
            regions: DashMap::new(),
            ttl,
            clock,
        })
    }

    /// Drop every stale region; runs on every public call
    fn sweep(&self, now: Instant) {
        self.regions.retain(|name, region| {
            let live = !region.is_stale(now, self.ttl);
            if !live {
                info!(region = %name, "removed expired cache region");
            }
            live
        });
    }
}

#[async_trait]
impl CacheRegionManager for InMemoryRegionManager {
    async fn get_region(&self, name: &str) -> Result<Arc<dyn CacheRegion>> {
        let now = self.clock.now();
        self.sweep(now);

        // The sweep runs without the entry lock, so staleness is checked
        // again under it before the region is handed out.
        let region: Arc<MemoryRegion> = match self.regions.entry(name.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_stale(now, self.ttl) {
                    let fresh = Arc::new(MemoryRegion::new(name, now));
                    occupied.insert(Arc::clone(&fresh));
                    info!(region = %name, "replaced stale cache region");
                    fresh
                } else {
                    Arc::clone(occupied.get())
                }
            }
            Entry::Vacant(vacant) => {
                let fresh = Arc::new(MemoryRegion::new(name, now));
                vacant.insert(Arc::clone(&fresh));
                info!(region = %name, "created cache region");
                fresh
            }
        };

        Ok(region)
    }

    async fn list_region_names(&self) -> Result<HashSet<String>> {
        self.sweep(self.clock.now());
        Ok(self
            .regions
            .iter()
            .map(|entry| entry.key().clone())
            .collect())
    }

    async fn clear_all(&self) -> Result<bool> {
        self.regions.clear();
        info!("cleared all cache regions");
        Ok(true)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
