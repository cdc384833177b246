//! Login admission port
//!
//! An exact sliding-window log: individual attempt timestamps are kept
//! per client and the trailing window is recomputed on every call. The
//! window slides continuously; it never resets at wall-clock boundaries,
//! and there is no token-bucket smoothing.

use crate::error::Result;
use crate::value_objects::AdmissionDecision;
use async_trait::async_trait;
use std::time::Instant;

/// Decides whether a login attempt may proceed
#[async_trait]
pub trait LoginAttemptGuard: Send + Sync + std::fmt::Debug {
    /// Check the client's recent attempts and record this one if admitted
    ///
    /// Prunes timestamps that have aged out of the window, then compares
    /// the client's remaining count against the configured ceiling. On
    /// [`AdmissionDecision::Reject`] the attempt is **not** recorded. The
    /// check and the record happen in one critical section, so two
    /// concurrent calls at the boundary can never both slip past the
    /// ceiling.
    ///
    /// Callers that cannot resolve a client identity must skip the guard
    /// entirely (fail open) rather than invent a bucket.
    async fn check_and_record(&self, client_id: &str, now: Instant) -> Result<AdmissionDecision>;

    /// Implementation name for configuration and diagnostics
    fn provider_name(&self) -> &str;
}
