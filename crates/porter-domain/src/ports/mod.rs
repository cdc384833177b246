//! Port traits implemented by the provider layer
//!
//! Outer layers hold these as `Arc<dyn Trait>` and never name a concrete
//! implementation.

pub mod auth;
pub mod cache;
pub mod throttle;

pub use auth::AuthenticationBackend;
pub use cache::{CacheRegion, CacheRegionManager};
pub use throttle::LoginAttemptGuard;
