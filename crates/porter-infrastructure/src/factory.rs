//! Provider construction from configuration
//!
//! The one place that names concrete providers; everything downstream
//! sees `Arc<dyn Port>`.

use crate::config::types::{CacheBackend, CacheConfig, ThrottleBackend, ThrottleConfig};
use porter_domain::clock::Clock;
use porter_domain::error::Result;
use porter_domain::ports::cache::CacheRegionManager;
use porter_domain::ports::throttle::LoginAttemptGuard;
use porter_providers::cache::{InMemoryRegionManager, NullRegionManager};
use porter_providers::throttle::{NullLoginGuard, SlidingWindowGuard};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Build the configured region manager
pub fn build_region_manager(
    config: &CacheConfig,
    clock: Arc<dyn Clock>,
) -> Result<Arc<dyn CacheRegionManager>> {
    let manager: Arc<dyn CacheRegionManager> = match config.provider {
        CacheBackend::Memory => Arc::new(InMemoryRegionManager::new(
            Duration::from_secs(config.region_ttl_secs),
            clock,
        )?),
        CacheBackend::Null => Arc::new(NullRegionManager::new()),
    };
    debug!(
        provider = manager.provider_name(),
        ttl_secs = config.region_ttl_secs,
        "cache region manager ready"
    );
    Ok(manager)
}

/// Build the configured login admission guard
pub fn build_login_guard(config: &ThrottleConfig) -> Result<Arc<dyn LoginAttemptGuard>> {
    let guard: Arc<dyn LoginAttemptGuard> = match config.provider {
        ThrottleBackend::SlidingWindow => Arc::new(SlidingWindowGuard::new(
            Duration::from_secs(config.window_secs),
            config.max_attempts,
        )?),
        ThrottleBackend::Null => Arc::new(NullLoginGuard::new()),
    };
    debug!(
        provider = guard.provider_name(),
        window_secs = config.window_secs,
        max_attempts = config.max_attempts,
        "login admission guard ready"
    );
    Ok(guard)
}
