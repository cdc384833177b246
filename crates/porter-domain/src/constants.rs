//! Policy defaults shared between the domain and the configuration layer

/// Service name used in logs and health payloads
pub const SERVICE_NAME: &str = "porter";

/// Default whole-region TTL in seconds (5 minutes)
pub const DEFAULT_REGION_TTL_SECS: u64 = 300;

/// Default sliding window for login attempts in seconds (1 minute)
pub const DEFAULT_ATTEMPT_WINDOW_SECS: u64 = 60;

/// Default maximum login attempts per client within one window
pub const DEFAULT_MAX_ATTEMPTS_PER_WINDOW: u32 = 200;
