//! HTTP server for porter
//!
//! Rocket surface over the application services:
//!
//! - `POST /auth/login` - throttled login, guarded by the sliding-window
//!   admission check keyed on the resolved client identity
//! - `GET /cache/clear` - administrative clear-all (optional admin key)
//! - `GET /cache/regions` - administrative region listing (optional
//!   admin key)
//! - `GET /health` - liveness payload
//!
//! [`init::run`] is the full lifecycle: load configuration, initialize
//! logging, build providers and services, launch. Hosts embedding porter
//! construct a [`state::ServerState`] themselves (with their own
//! authentication backend) and hand it to [`init::build_rocket`].

pub mod admin_key;
pub mod constants;
pub mod handlers;
pub mod identity;
pub mod init;
pub mod state;

pub use admin_key::{AdminKey, AdminKeyPolicy};
pub use identity::ClientIp;
pub use init::{build_rocket, build_state, run};
pub use state::ServerState;
