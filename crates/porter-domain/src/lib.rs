//! Domain layer for porter
//!
//! Core business contracts for the two stateful components porter exists
//! for: named cache regions with whole-region TTL expiry, and a
//! sliding-window admission guard for login attempts. This crate holds no
//! I/O and no framework types; it defines:
//!
//! - [`error`] - the domain error enum and `Result` alias
//! - [`clock`] - the time source abstraction the expiry logic depends on
//! - [`value_objects`] - admission decisions
//! - [`ports`] - async traits implemented by the provider layer
//! - [`constants`] - policy defaults shared with the configuration layer
//!
//! # Architecture
//!
//! Following Clean Architecture, everything here is a contract consumed by
//! outer layers (application services, providers, the HTTP server). Outer
//! layers depend on this crate; this crate depends on nothing above it.

pub mod clock;
pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use value_objects::AdmissionDecision;
