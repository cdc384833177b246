//! Top-level application configuration

use super::auth::AuthConfig;
use super::cache::CacheConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::throttle::ThrottleConfig;
use serde::{Deserialize, Serialize};

/// Complete porter configuration
///
/// Every section has usable defaults; a missing `porter.toml` yields a
/// working local configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Cache region settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Login admission settings
    #[serde(default)]
    pub throttle: ThrottleConfig,

    /// Authorization settings for the admin surface
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}
