//! Tests for the in-memory cache region provider
//!
//! TTL boundaries are driven through a manual clock; no test sleeps.

use porter_domain::clock::{Clock, ManualClock};
use porter_domain::ports::cache::CacheRegionManager;
use porter_providers::cache::{InMemoryRegionManager, NullRegionManager};
use std::sync::Arc;
use std::time::Duration;

const TTL: Duration = Duration::from_secs(300);

fn manager_with_clock() -> (InMemoryRegionManager, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let shared: Arc<dyn Clock> = clock.clone();
    let manager = InMemoryRegionManager::new(TTL, shared).expect("valid TTL");
    (manager, clock)
}

#[tokio::test]
async fn test_put_get_round_trip() {
    let (manager, _clock) = manager_with_clock();

    let region = manager.get_region("users").await.unwrap();
    region.put_json("42", "{\"name\":\"ada\"}").await.unwrap();

    assert_eq!(
        region.get_json("42").await.unwrap(),
        Some("{\"name\":\"ada\"}".to_string())
    );
    assert_eq!(region.get_json("missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_get_region_returns_same_live_region() {
    let (manager, _clock) = manager_with_clock();

    let first = manager.get_region("users").await.unwrap();
    first.put_json("k", "1").await.unwrap();

    let second = manager.get_region("users").await.unwrap();
    assert_eq!(second.get_json("k").await.unwrap(), Some("1".to_string()));
    assert_eq!(first.created_at(), second.created_at());
}

#[tokio::test]
async fn test_last_write_wins() {
    let (manager, _clock) = manager_with_clock();

    let region = manager.get_region("users").await.unwrap();
    region.put_json("k", "1").await.unwrap();
    region.put_json("k", "2").await.unwrap();

    assert_eq!(region.get_json("k").await.unwrap(), Some("2".to_string()));
}

#[tokio::test]
async fn test_evict_and_size() {
    let (manager, _clock) = manager_with_clock();

    let region = manager.get_region("users").await.unwrap();
    region.put_json("a", "1").await.unwrap();
    region.put_json("b", "2").await.unwrap();
    assert_eq!(region.size().await.unwrap(), 2);

    region.evict("a").await.unwrap();
    assert_eq!(region.size().await.unwrap(), 1);
    assert_eq!(region.get_json("a").await.unwrap(), None);

    // Evicting an absent key is a no-op
    region.evict("a").await.unwrap();
    assert_eq!(region.size().await.unwrap(), 1);
}

/// TTL = 5 min: an entry written at t=0 is readable at 4:59 and gone at
/// 5:01, when the whole region has been replaced
#[tokio::test]
async fn test_region_expires_as_a_whole() {
    let (manager, clock) = manager_with_clock();

    let region = manager.get_region("recipes").await.unwrap();
    region.put_json("a", "1").await.unwrap();
    let original_created = region.created_at();

    clock.advance(Duration::from_secs(299));
    let region = manager.get_region("recipes").await.unwrap();
    assert_eq!(region.get_json("a").await.unwrap(), Some("1".to_string()));

    clock.advance(Duration::from_secs(2));
    let region = manager.get_region("recipes").await.unwrap();
    assert_eq!(region.get_json("a").await.unwrap(), None);
    assert_ne!(region.created_at(), original_created);
    assert_eq!(region.size().await.unwrap(), 0);
}

#[tokio::test]
async fn test_region_still_live_at_exact_ttl() {
    let (manager, clock) = manager_with_clock();

    let region = manager.get_region("recipes").await.unwrap();
    region.put_json("a", "1").await.unwrap();

    // Age == TTL is the boundary: still live
    clock.advance(TTL);
    let region = manager.get_region("recipes").await.unwrap();
    assert_eq!(region.get_json("a").await.unwrap(), Some("1".to_string()));
}

/// A stale region is replaced, never mutated: handles obtained before
/// expiry keep their entries but are detached from the registry
#[tokio::test]
async fn test_stale_region_replaced_not_mutated() {
    let (manager, clock) = manager_with_clock();

    let old = manager.get_region("recipes").await.unwrap();
    old.put_json("a", "1").await.unwrap();

    clock.advance(Duration::from_secs(301));
    let fresh = manager.get_region("recipes").await.unwrap();

    assert_eq!(old.get_json("a").await.unwrap(), Some("1".to_string()));
    assert_eq!(fresh.get_json("a").await.unwrap(), None);
}

#[tokio::test]
async fn test_returned_region_never_older_than_ttl() {
    let (manager, clock) = manager_with_clock();

    manager.get_region("r").await.unwrap();
    clock.advance(Duration::from_secs(900));

    let region = manager.get_region("r").await.unwrap();
    assert_eq!(region.created_at(), clock.now());
}

#[tokio::test]
async fn test_sweep_removes_expired_siblings() {
    let (manager, clock) = manager_with_clock();

    manager.get_region("x").await.unwrap();
    manager.get_region("y").await.unwrap();

    clock.advance(Duration::from_secs(301));

    // Any call sweeps the whole registry, not just the requested name
    manager.get_region("z").await.unwrap();
    let names = manager.list_region_names().await.unwrap();
    assert_eq!(names.len(), 1);
    assert!(names.contains("z"));
}

#[tokio::test]
async fn test_list_region_names_snapshots_live_regions() {
    let (manager, _clock) = manager_with_clock();

    assert!(manager.list_region_names().await.unwrap().is_empty());

    manager.get_region("x").await.unwrap();
    manager.get_region("y").await.unwrap();

    let names = manager.list_region_names().await.unwrap();
    assert_eq!(names.len(), 2);
    assert!(names.contains("x"));
    assert!(names.contains("y"));
}

/// Regions "x" and "y" exist with entries; after clear_all the registry
/// is empty and re-requesting a name yields a fresh empty region
#[tokio::test]
async fn test_clear_all_discards_every_region() {
    let (manager, clock) = manager_with_clock();

    let x = manager.get_region("x").await.unwrap();
    x.put_json("k", "1").await.unwrap();
    let y = manager.get_region("y").await.unwrap();
    y.put_json("k", "2").await.unwrap();
    let before = x.created_at();

    clock.advance(Duration::from_secs(1));
    assert!(manager.clear_all().await.unwrap());
    assert!(manager.list_region_names().await.unwrap().is_empty());

    let x = manager.get_region("x").await.unwrap();
    assert_eq!(x.size().await.unwrap(), 0);
    assert_ne!(x.created_at(), before);
}

#[tokio::test]
async fn test_zero_ttl_fails_construction() {
    let clock: Arc<dyn Clock> = Arc::new(ManualClock::new());
    let result = InMemoryRegionManager::new(Duration::ZERO, clock);
    assert!(matches!(
        result,
        Err(porter_domain::Error::Config { .. })
    ));
}

/// Racing get-or-create on one name must produce exactly one live region:
/// every task's put lands in the same entry map
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_get_region_single_instance() {
    let clock: Arc<dyn Clock> = Arc::new(ManualClock::new());
    let manager = Arc::new(InMemoryRegionManager::new(TTL, clock).expect("valid TTL"));

    let mut handles = Vec::new();
    for i in 0..32 {
        let manager = Arc::clone(&manager);
        handles.push(tokio::spawn(async move {
            let region = manager.get_region("shared").await.unwrap();
            region
                .put_json(&format!("key-{i}"), &i.to_string())
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let region = manager.get_region("shared").await.unwrap();
    assert_eq!(region.size().await.unwrap(), 32);
    assert_eq!(manager.list_region_names().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_null_manager_stores_nothing() {
    let manager = NullRegionManager::new();

    let region = manager.get_region("users").await.unwrap();
    region.put_json("k", "1").await.unwrap();

    assert_eq!(region.get_json("k").await.unwrap(), None);
    assert_eq!(region.size().await.unwrap(), 0);
    assert_eq!(region.name(), "users");
    assert!(manager.list_region_names().await.unwrap().is_empty());
    assert!(manager.clear_all().await.unwrap());
}
