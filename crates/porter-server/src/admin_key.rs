//! Admin surface authorization
//!
//! Shared-key check in front of the administrative cache routes, using
//! the `X-Admin-Key` header by default (configurable). Disabled policies
//! admit every request; an enabled policy without a configured key
//! answers 503 rather than silently opening the surface.
//!
//! Rocket does not attach a body to guard failures, so these errors
//! surface as bare status codes.

use porter_infrastructure::config::AdminKeyConfig;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use std::sync::Arc;

/// Admin key policy evaluated by the request guard
#[derive(Clone)]
pub struct AdminKeyPolicy {
    /// Whether the key check is enforced
    pub enabled: bool,
    /// Header carrying the key
    pub header: String,
    /// Expected key value
    pub key: Option<String>,
}

impl AdminKeyPolicy {
    /// Create a policy
    pub fn new(enabled: bool, header: String, key: Option<String>) -> Self {
        Self {
            enabled,
            header,
            key,
        }
    }

    /// Build the policy from its configuration section
    pub fn from_config(config: &AdminKeyConfig) -> Self {
        Self {
            enabled: config.enabled,
            header: config.header.clone(),
            key: config.key.clone(),
        }
    }

    /// Whether the provided key matches the configured one
    ///
    /// A policy without a configured key matches nothing.
    pub fn validate_key(&self, provided: &str) -> bool {
        match &self.key {
            Some(expected) => expected == provided,
            None => false,
        }
    }

    /// Enabled and holding a key to compare against
    pub fn is_configured(&self) -> bool {
        self.enabled && self.key.is_some()
    }
}

impl Default for AdminKeyPolicy {
    fn default() -> Self {
        Self::from_config(&AdminKeyConfig::default())
    }
}

/// Request guard for the administrative routes
pub struct AdminKey;

/// Admin key check failures
#[derive(Debug)]
pub enum AdminKeyError {
    /// Check enabled but no key configured
    NotConfigured,
    /// Provided key didn't match
    InvalidKey,
    /// Header absent
    MissingKey(String),
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminKey {
    type Error = AdminKeyError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        // No managed policy means the check is disabled
        let Some(policy) = request.rocket().state::<Arc<AdminKeyPolicy>>() else {
            return Outcome::Success(AdminKey);
        };

        if !policy.enabled {
            return Outcome::Success(AdminKey);
        }

        if !policy.is_configured() {
            return Outcome::Error((Status::ServiceUnavailable, AdminKeyError::NotConfigured));
        }

        match request.headers().get_one(&policy.header) {
            Some(key) if policy.validate_key(key) => Outcome::Success(AdminKey),
            Some(_) => Outcome::Error((Status::Unauthorized, AdminKeyError::InvalidKey)),
            None => Outcome::Error((
                Status::Unauthorized,
                AdminKeyError::MissingKey(policy.header.clone()),
            )),
        }
    }
}
