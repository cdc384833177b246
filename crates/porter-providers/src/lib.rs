//! Provider implementations for porter
//!
//! Concrete implementations of the domain ports:
//!
//! - [`cache`] - the in-memory region registry with whole-region TTL
//!   expiry, plus a null manager for disabling caching
//! - [`throttle`] - the sliding-window login guard, plus a null guard
//!   that admits everything
//! - [`auth`] - the null authentication backend; real backends are
//!   injected by the host application
//!
//! All providers are selected through configuration and constructed by
//! the infrastructure factory; null providers are public so tests and
//! hosts can wire them directly.

pub mod auth;
pub mod cache;
pub mod throttle;

pub use auth::NullAuthenticationBackend;
pub use cache::{InMemoryRegionManager, NullRegionManager};
pub use throttle::{NullLoginGuard, SlidingWindowGuard};
