//! Login use case: admission control around the downstream backend
//!
//! Order matters here: the guard runs before the backend, a rejection
//! short-circuits (the backend is never invoked), and an unresolvable
//! client identity bypasses the guard entirely (fail open) because there
//! is no bucket to attribute the attempt to.

use porter_domain::clock::Clock;
use porter_domain::error::Result;
use porter_domain::ports::auth::AuthenticationBackend;
use porter_domain::ports::throttle::LoginAttemptGuard;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of an admitted or throttled login attempt
///
/// Backend refusals are not outcomes; they surface as
/// [`porter_domain::Error::Authentication`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Backend accepted the credentials
    Granted {
        /// Opaque session token issued by the backend
        token: String,
    },
    /// Admission guard rejected the attempt; the backend was not invoked
    Throttled,
}

/// Orchestrates identity-checked, throttled login attempts
pub struct LoginService {
    guard: Arc<dyn LoginAttemptGuard>,
    backend: Arc<dyn AuthenticationBackend>,
    clock: Arc<dyn Clock>,
}

impl LoginService {
    /// Create a login service from its collaborators
    pub fn new(
        guard: Arc<dyn LoginAttemptGuard>,
        backend: Arc<dyn AuthenticationBackend>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            guard,
            backend,
            clock,
        }
    }

    /// Run one login attempt for the given client identity
    ///
    /// `client_id` is `None` when the caller could not resolve an
    /// identity; the attempt then proceeds unguarded.
    pub async fn attempt_login(
        &self,
        client_id: Option<&str>,
        username_or_email: &str,
        password: &str,
    ) -> Result<LoginOutcome> {
        match client_id {
            Some(client) => {
                let decision = self.guard.check_and_record(client, self.clock.now()).await?;
                if decision.is_reject() {
                    warn!(client = %client, "login attempt throttled");
                    return Ok(LoginOutcome::Throttled);
                }
            }
            None => {
                debug!("client identity unresolved; admission guard bypassed");
            }
        }

        let token = self.backend.authenticate(username_or_email, password).await?;
        info!(user = %username_or_email, "login granted");
        Ok(LoginOutcome::Granted { token })
    }
}
