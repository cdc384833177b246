//! Login admission configuration

use porter_domain::constants::{DEFAULT_ATTEMPT_WINDOW_SECS, DEFAULT_MAX_ATTEMPTS_PER_WINDOW};
use serde::{Deserialize, Serialize};

/// Admission guard backends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThrottleBackend {
    /// Exact sliding-window log
    SlidingWindow,
    /// Admit everything (throttling disabled)
    Null,
}

/// Login admission settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrottleConfig {
    /// Backend implementation
    pub provider: ThrottleBackend,

    /// Sliding window length in seconds
    pub window_secs: u64,

    /// Maximum attempts per client within one window
    pub max_attempts: u32,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            provider: ThrottleBackend::SlidingWindow,
            window_secs: DEFAULT_ATTEMPT_WINDOW_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS_PER_WINDOW,
        }
    }
}
