//! Authentication backend providers
//!
//! Only the null backend lives here; real backends belong to the host
//! application and are injected through the
//! [`porter_domain::ports::auth::AuthenticationBackend`] port.

pub mod null;

pub use null::NullAuthenticationBackend;
