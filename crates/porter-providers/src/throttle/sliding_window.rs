//! Sliding-window log admission guard
//!
//! Keeps the individual timestamps of each client's recent attempts and
//! recomputes the trailing window on every call. Admission is exact: the
//! in-window count for a client never exceeds the ceiling, and the window
//! slides continuously instead of resetting at fixed boundaries.
//!
//! One mutex guards the whole ledger. That makes check-then-record a
//! single critical section (two concurrent calls at the ceiling can never
//! both be admitted) and lets every call prune every client, which bounds
//! ledger memory at the cost of O(total tracked clients) work per call.

use async_trait::async_trait;
use porter_domain::error::{Error, Result};
use porter_domain::ports::throttle::LoginAttemptGuard;
use porter_domain::value_objects::AdmissionDecision;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Exact sliding-window log over login attempts per client
#[derive(Debug)]
pub struct SlidingWindowGuard {
    window: Duration,
    max_attempts: u32,
    ledger: Mutex<HashMap<String, Vec<Instant>>>,
}

impl SlidingWindowGuard {
    /// Create a guard with the given window and per-window ceiling
    ///
    /// Fails fast on a zero window or ceiling, either of which would
    /// reject or admit everything unconditionally.
    pub fn new(window: Duration, max_attempts: u32) -> Result<Self> {
        if window.is_zero() {
            return Err(Error::config("attempt window must be positive"));
        }
        if max_attempts == 0 {
            return Err(Error::config("max attempts per window must be positive"));
        }
        Ok(Self {
            window,
            max_attempts,
            ledger: Mutex::new(HashMap::new()),
        })
    }

    /// Number of clients currently holding in-window attempts
    ///
    /// Diagnostic accessor; clients whose attempts all aged out are
    /// removed by the prune, not kept as empty entries.
    pub fn tracked_clients(&self) -> Result<usize> {
        Ok(self.lock_ledger()?.len())
    }

    /// A poisoned ledger means a panic mid-update; every accessor
    /// surfaces that as an internal error.
    fn lock_ledger(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<Instant>>>> {
        self.ledger
            .lock()
            .map_err(|_| Error::internal("login attempt ledger lock poisoned"))
    }

    /// A timestamp is inside the window while its age is strictly less
    /// than the window length
    fn in_window(&self, stamp: Instant, now: Instant) -> bool {
        now.duration_since(stamp) < self.window
    }
}

#[async_trait]
impl LoginAttemptGuard for SlidingWindowGuard {
    async fn check_and_record(&self, client_id: &str, now: Instant) -> Result<AdmissionDecision> {
        let mut ledger = self.lock_ledger()?;

        // Full-ledger prune: every client's aged-out stamps go, and
        // clients left with none are dropped entirely.
        ledger.retain(|_, stamps| {
            stamps.retain(|stamp| self.in_window(*stamp, now));
            !stamps.is_empty()
        });

        let stamps = ledger.entry(client_id.to_string()).or_default();
        if stamps.len() >= self.max_attempts as usize {
            // Rejected attempts are not recorded
            warn!(
                client = %client_id,
                attempts = stamps.len(),
                "login attempt rejected: window ceiling reached"
            );
            return Ok(AdmissionDecision::Reject);
        }

        stamps.push(now);
        debug!(client = %client_id, attempts = stamps.len(), "login attempt recorded");
        Ok(AdmissionDecision::Allow)
    }

    fn provider_name(&self) -> &str {
        "sliding_window"
    }
}
