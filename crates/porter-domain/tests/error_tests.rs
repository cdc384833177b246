//! Tests for the domain error type

use porter_domain::error::{Error, Result};

#[test]
fn test_config_error_display() {
    let err = Error::config("ttl must be positive");
    assert_eq!(err.to_string(), "Configuration error: ttl must be positive");
}

#[test]
fn test_config_error_with_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let err = Error::config_with_source("failed to read porter.toml", io_err);
    assert_eq!(
        err.to_string(),
        "Configuration error: failed to read porter.toml"
    );
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_cache_error_display() {
    let err = Error::cache("region registry unavailable");
    assert_eq!(err.to_string(), "Cache error: region registry unavailable");
}

#[test]
fn test_throttle_error_display() {
    let err = Error::throttle("attempt ledger lock poisoned");
    assert_eq!(err.to_string(), "Throttle error: attempt ledger lock poisoned");
}

#[test]
fn test_authentication_error_display() {
    let err = Error::authentication("invalid password");
    assert_eq!(err.to_string(), "Authentication error: invalid password");
}

#[test]
fn test_internal_error_display() {
    let err = Error::internal("registry corrupted");
    assert_eq!(err.to_string(), "Internal error: registry corrupted");
}

#[test]
fn test_error_from_string() {
    let err: Error = String::from("plain failure").into();
    assert_eq!(err.to_string(), "plain failure");
}

#[test]
fn test_error_from_str() {
    let err: Error = "plain failure".into();
    assert_eq!(err.to_string(), "plain failure");
}

#[test]
fn test_result_alias() {
    fn produces() -> Result<u32> {
        Ok(7)
    }
    assert_eq!(produces().ok(), Some(7));
}

#[test]
fn test_errors_without_source() {
    let err = Error::cache("no source attached");
    assert!(std::error::Error::source(&err).is_none());
}
