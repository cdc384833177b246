//! Null authentication backend
//!
//! Refuses every credential pair with a clear message. Wired by default
//! so the server runs standalone; hosts replace it with their own
//! backend.

use async_trait::async_trait;
use porter_domain::error::{Error, Result};
use porter_domain::ports::auth::AuthenticationBackend;

/// Authentication backend that refuses everything
#[derive(Debug, Clone, Default)]
pub struct NullAuthenticationBackend;

impl NullAuthenticationBackend {
    /// Create a new null backend
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuthenticationBackend for NullAuthenticationBackend {
    async fn authenticate(&self, _username_or_email: &str, _password: &str) -> Result<String> {
        Err(Error::authentication(
            "no authentication backend configured",
        ))
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
