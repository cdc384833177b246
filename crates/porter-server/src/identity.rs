//! Client identity resolution
//!
//! Derives the string identity the admission guard buckets by: the raw
//! `X-Forwarded-For` value when present, otherwise the peer IP address.
//! The guard never fails the request; an unresolvable identity becomes
//! `None`, and the login service then fails open.

use crate::constants::FORWARDED_FOR_HEADER;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use std::convert::Infallible;

/// Resolved client identity for admission bucketing
///
/// The forwarded-for value is used verbatim; it is a bucketing key, not
/// an address to connect to.
#[derive(Debug, Clone)]
pub struct ClientIp(Option<String>);

impl ClientIp {
    /// Identity as a borrowed string, if resolved
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ClientIp {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let identity = request
            .headers()
            .get_one(FORWARDED_FOR_HEADER)
            .map(str::to_owned)
            .or_else(|| request.remote().map(|addr| addr.ip().to_string()));

        Outcome::Success(ClientIp(identity))
    }
}
