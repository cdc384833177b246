//! Infrastructure layer for porter
//!
//! Everything that wires the domain to the outside world without being a
//! transport:
//!
//! - [`config`] - layered configuration (defaults, `porter.toml`,
//!   `PORTER__*` environment variables) with fail-fast validation
//! - [`logging`] - tracing subscriber initialization from configuration
//! - [`factory`] - provider construction from configuration
//! - [`cache`] - typed serde view over the region ports
//! - [`constants`] - infrastructure defaults

pub mod cache;
pub mod config;
pub mod constants;
pub mod factory;
pub mod logging;

pub use cache::{SharedRegionCache, TypedRegion};
pub use config::loader::{ConfigLoader, load_config};
pub use config::types::AppConfig;
