//! Application layer for porter
//!
//! Use-case services orchestrating the domain ports. Services hold their
//! collaborators as `Arc<dyn Port>` and contain no framework or transport
//! types; the server layer adapts HTTP onto them.

pub mod use_cases;

pub use use_cases::cache_admin_service::CacheAdminService;
pub use use_cases::login_service::{LoginOutcome, LoginService};
