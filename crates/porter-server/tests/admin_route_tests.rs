//! Admin and health route tests
//!
//! Covers the admin-key guard states (disabled, enabled with key,
//! enabled without key) and the cache admin response bodies.

use porter_application::{CacheAdminService, LoginService};
use porter_domain::clock::{Clock, SystemClock};
use porter_domain::ports::cache::CacheRegionManager;
use porter_domain::ports::throttle::LoginAttemptGuard;
use porter_providers::auth::NullAuthenticationBackend;
use porter_providers::cache::InMemoryRegionManager;
use porter_providers::throttle::NullLoginGuard;
use porter_server::{AdminKeyPolicy, ServerState, build_rocket};
use rocket::http::{ContentType, Header, Status};
use rocket::local::asynchronous::Client;
use std::sync::Arc;
use std::time::Duration;

async fn client_with_policy(policy: AdminKeyPolicy) -> (Client, Arc<dyn CacheRegionManager>) {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let regions: Arc<dyn CacheRegionManager> = Arc::new(
        InMemoryRegionManager::new(Duration::from_secs(300), clock.clone()).expect("valid TTL"),
    );
    let guard: Arc<dyn LoginAttemptGuard> = Arc::new(NullLoginGuard::new());

    let login = Arc::new(LoginService::new(
        guard,
        Arc::new(NullAuthenticationBackend::new()),
        clock,
    ));
    let cache_admin = Arc::new(CacheAdminService::new(Arc::clone(&regions)));

    let rocket = build_rocket(ServerState::new(login, cache_admin), policy);
    let client = Client::tracked(rocket).await.expect("valid rocket instance");
    (client, regions)
}

#[rocket::async_test]
async fn test_clear_allowed_when_admin_key_disabled() {
    let (client, regions) = client_with_policy(AdminKeyPolicy::default()).await;
    regions.get_region("recipes").await.expect("region");

    let response = client.get("/cache/clear").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    let body = response.into_string().await.expect("body");
    assert_eq!(body, r#"{"status":"All caches cleared successfully."}"#);

    let names = regions.list_region_names().await.expect("names");
    assert!(names.is_empty());
}

#[rocket::async_test]
async fn test_regions_listed_sorted() {
    let (client, regions) = client_with_policy(AdminKeyPolicy::default()).await;
    regions.get_region("users").await.expect("region");
    regions.get_region("recipes").await.expect("region");

    let response = client.get("/cache/regions").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().await.expect("body");
    assert_eq!(body, r#"{"count":2,"regions":["recipes","users"]}"#);
}

#[rocket::async_test]
async fn test_admin_routes_reject_missing_key() {
    let policy = AdminKeyPolicy::new(true, "X-Admin-Key".to_string(), Some("sekrit".to_string()));
    let (client, _regions) = client_with_policy(policy).await;

    let response = client.get("/cache/clear").dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);

    let response = client.get("/cache/regions").dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn test_admin_routes_reject_wrong_key() {
    let policy = AdminKeyPolicy::new(true, "X-Admin-Key".to_string(), Some("sekrit".to_string()));
    let (client, _regions) = client_with_policy(policy).await;

    let response = client
        .get("/cache/clear")
        .header(Header::new("X-Admin-Key", "guess"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn test_admin_routes_accept_correct_key() {
    let policy = AdminKeyPolicy::new(true, "X-Admin-Key".to_string(), Some("sekrit".to_string()));
    let (client, _regions) = client_with_policy(policy).await;

    let response = client
        .get("/cache/clear")
        .header(Header::new("X-Admin-Key", "sekrit"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
}

/// Enabled without a configured key is a deployment mistake; the guard
/// answers 503 rather than silently allowing or denying
#[rocket::async_test]
async fn test_enabled_without_key_is_unavailable() {
    let policy = AdminKeyPolicy::new(true, "X-Admin-Key".to_string(), None);
    let (client, _regions) = client_with_policy(policy).await;

    let response = client.get("/cache/clear").dispatch().await;
    assert_eq!(response.status(), Status::ServiceUnavailable);
}

#[rocket::async_test]
async fn test_health_is_unguarded() {
    let policy = AdminKeyPolicy::new(true, "X-Admin-Key".to_string(), Some("sekrit".to_string()));
    let (client, _regions) = client_with_policy(policy).await;

    let response = client.get("/health").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().await.expect("body");
    assert!(body.contains(r#""status":"healthy""#));
    assert!(body.contains(r#""service":"porter""#));
}
