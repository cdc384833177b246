//! # Porter
//!
//! Named cache regions with whole-region TTL expiry, plus a
//! sliding-window admission guard for login attempts, served over HTTP.
//!
//! This crate is the public facade: it re-exports the layer crates and
//! the server entry point so hosts depend on a single package.
//!
//! ## Features
//!
//! - **Cache regions**: named key/value regions that expire as a whole
//!   once their TTL elapses, swept lazily on access
//! - **Login admission**: per-client sliding-window attempt ceiling in
//!   front of the authentication backend
//! - **Admin surface**: clear-all and region listing behind an optional
//!   shared-key header
//! - **Clean Architecture**: ports in the domain crate, providers and
//!   transport wired through configuration
//!
//! ## Example
//!
//! ```ignore
//! use porter::domain::clock::SystemClock;
//! use porter::providers::cache::InMemoryRegionManager;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let manager = InMemoryRegionManager::new(
//!     Duration::from_secs(300),
//!     Arc::new(SystemClock::new()),
//! )?;
//! let recipes = manager.get_region("recipes").await?;
//! recipes.put_json("favorites", "[1,2,3]").await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - ports, errors, the clock abstraction
//! - `application` - login and cache-admin use-case services
//! - `infrastructure` - configuration, logging, provider factory
//! - `providers` - in-memory cache regions, sliding-window guard
//! - `server` - Rocket routes and request guards

/// Domain layer - ports, errors, clock
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use porter_domain::*;
}

/// Application layer - use-case services
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use porter_application::*;
}

/// Infrastructure layer - config, logging, factory
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use porter_infrastructure::*;
}

/// Provider layer - concrete port implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use porter_providers::*;
}

/// Server layer - Rocket routes and guards
///
/// Re-exports from the server crate for convenience
pub mod server {
    pub use porter_server::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the server entry points at the crate root
pub use server::{ServerState, build_rocket, build_state, run};
