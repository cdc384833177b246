//! Authorization configuration for the admin surface
//!
//! porter performs no user authentication itself; this section only
//! covers the optional shared-key check in front of the administrative
//! endpoints.

use crate::constants::DEFAULT_ADMIN_KEY_HEADER;
use serde::{Deserialize, Serialize};

/// Shared-key check for administrative endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminKeyConfig {
    /// Whether the key check is enforced
    pub enabled: bool,

    /// Header carrying the key
    pub header: String,

    /// Expected key value; required when enabled
    pub key: Option<String>,
}

impl Default for AdminKeyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            header: DEFAULT_ADMIN_KEY_HEADER.to_string(),
            key: None,
        }
    }
}

/// Authorization settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Admin surface key check
    #[serde(default)]
    pub admin: AdminKeyConfig,
}
