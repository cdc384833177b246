//! Administrative cache routes
//!
//! Authorization happens in the [`AdminKey`] guard before these handlers
//! run; the handlers themselves only translate service results to JSON.
//! `/cache/clear` is a GET for compatibility with existing callers.

use super::ErrorBody;
use crate::admin_key::AdminKey;
use crate::state::ServerState;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get};
use serde::Serialize;
use tracing::error;

/// Clear-all outcome body
#[derive(Debug, Serialize)]
pub struct CacheClearResponse {
    /// Human-readable outcome message
    pub status: String,
}

/// Region listing body
#[derive(Debug, Serialize)]
pub struct RegionListResponse {
    /// Number of live regions
    pub count: usize,
    /// Live region names, sorted
    pub regions: Vec<String>,
}

/// Discard every cache region
#[get("/cache/clear")]
pub async fn clear_caches(
    _auth: AdminKey,
    state: &State<ServerState>,
) -> Result<Json<CacheClearResponse>, (Status, Json<ErrorBody>)> {
    match state.cache_admin.clear_all().await {
        Ok(status) => Ok(Json(CacheClearResponse { status })),
        Err(err) => {
            error!(error = %err, "cache clear failed");
            Err((
                Status::InternalServerError,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            ))
        }
    }
}

/// List the currently-live cache regions
#[get("/cache/regions")]
pub async fn list_regions(
    _auth: AdminKey,
    state: &State<ServerState>,
) -> Result<Json<RegionListResponse>, (Status, Json<ErrorBody>)> {
    match state.cache_admin.region_names().await {
        Ok(names) => {
            let mut regions: Vec<String> = names.into_iter().collect();
            regions.sort();
            Ok(Json(RegionListResponse {
                count: regions.len(),
                regions,
            }))
        }
        Err(err) => {
            error!(error = %err, "region listing failed");
            Err((
                Status::InternalServerError,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            ))
        }
    }
}
