//! Downstream authentication port
//!
//! The admission guard wraps exactly one downstream operation: attempting
//! a login. Credential storage, token issuance, and user management all
//! live behind this trait in the host application; porter only decides
//! whether the attempt may reach it.

use crate::error::Result;
use async_trait::async_trait;

/// The downstream login operation guarded by admission control
#[async_trait]
pub trait AuthenticationBackend: Send + Sync + std::fmt::Debug {
    /// Authenticate the credentials and return an opaque session token
    ///
    /// Refused credentials surface as [`crate::Error::Authentication`];
    /// admission rejections never reach this method.
    async fn authenticate(&self, username_or_email: &str, password: &str) -> Result<String>;

    /// Implementation name for configuration and diagnostics
    fn provider_name(&self) -> &str;
}
