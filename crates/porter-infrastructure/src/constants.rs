//! Infrastructure constants

/// Environment variable prefix for configuration overrides
///
/// Nested keys use a double underscore, e.g.
/// `PORTER__CACHE__REGION_TTL_SECS`, so snake_case field names survive
/// the split.
pub const CONFIG_ENV_PREFIX: &str = "PORTER";

/// Configuration file probed in the working directory when no path is
/// given
pub const DEFAULT_CONFIG_FILENAME: &str = "porter.toml";

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default header carrying the admin API key
pub const DEFAULT_ADMIN_KEY_HEADER: &str = "X-Admin-Key";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
