//! Server constants

/// Header consulted first when resolving a client identity
pub const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";

/// Literal body of the throttled-login response
///
/// The exact bytes, including the space after the colon, are part of the
/// wire contract; a serializer would emit different spacing.
pub const LOGIN_THROTTLED_BODY: &str =
    r#"{"error": "Too many login attempts from this IP address. Please try again later."}"#;
