//! Managed server state

use porter_application::{CacheAdminService, LoginService};
use std::sync::Arc;
use std::time::Instant;

/// Services shared with every route handler
///
/// Public fields so embedding hosts can assemble the state with their
/// own backend wiring.
pub struct ServerState {
    /// Login use case
    pub login: Arc<LoginService>,
    /// Cache administration use case
    pub cache_admin: Arc<CacheAdminService>,
    /// Server start instant, reported by the health route
    pub started_at: Instant,
}

impl ServerState {
    /// Create server state over the given services
    pub fn new(login: Arc<LoginService>, cache_admin: Arc<CacheAdminService>) -> Self {
        Self {
            login,
            cache_admin,
            started_at: Instant::now(),
        }
    }
}
