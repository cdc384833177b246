//! Configuration types, one module per section

pub mod app;
pub mod auth;
pub mod cache;
pub mod logging;
pub mod server;
pub mod throttle;

pub use app::AppConfig;
pub use auth::{AdminKeyConfig, AuthConfig};
pub use cache::{CacheBackend, CacheConfig};
pub use logging::LoggingConfig;
pub use server::ServerConfig;
pub use throttle::{ThrottleBackend, ThrottleConfig};
