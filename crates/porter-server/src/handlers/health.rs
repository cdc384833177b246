//! Health route

use crate::state::ServerState;
use porter_domain::constants::SERVICE_NAME;
use rocket::serde::json::Json;
use rocket::{State, get};
use serde::Serialize;

/// Liveness payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Fixed status marker
    pub status: &'static str,
    /// Service name
    pub service: &'static str,
    /// Seconds since the server state was built
    pub uptime_secs: u64,
}

/// Report liveness; never guarded
#[get("/health")]
pub async fn health(state: &State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}
