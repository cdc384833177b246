//! Configuration loading and types

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, load_config};
pub use types::{
    AdminKeyConfig, AppConfig, AuthConfig, CacheBackend, CacheConfig, LoggingConfig, ServerConfig,
    ThrottleBackend, ThrottleConfig,
};
