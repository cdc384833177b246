//! Route handlers

pub mod cache_admin;
pub mod health;
pub mod login;

use serde::Serialize;

/// Generic JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error message
    pub error: String,
}
