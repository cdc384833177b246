//! Null admission guard for testing
//!
//! Admits every attempt and records nothing. Useful for testing and for
//! disabling login throttling through configuration.

use async_trait::async_trait;
use porter_domain::error::Result;
use porter_domain::ports::throttle::LoginAttemptGuard;
use porter_domain::value_objects::AdmissionDecision;
use std::time::Instant;

/// Admission guard that always allows
#[derive(Debug, Clone, Default)]
pub struct NullLoginGuard;

impl NullLoginGuard {
    /// Create a new null guard
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LoginAttemptGuard for NullLoginGuard {
    async fn check_and_record(&self, _client_id: &str, _now: Instant) -> Result<AdmissionDecision> {
        Ok(AdmissionDecision::Allow)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
