//! Login route
//!
//! The order of concerns is fixed: resolve the client identity, consult
//! the admission guard, and only then touch the authentication backend.
//! A throttled attempt answers with the literal 429 body and never
//! reaches the backend.

use super::ErrorBody;
use crate::constants::LOGIN_THROTTLED_BODY;
use crate::identity::ClientIp;
use crate::state::ServerState;
use porter_application::LoginOutcome;
use porter_domain::Error;
use rocket::serde::json::Json;
use rocket::{Responder, State, post};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username or email identifying the account
    pub username_or_email: String,
    /// Password to check
    pub password: String,
}

/// Successful login body
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Opaque session token issued by the backend
    pub token: String,
}

/// Login route responses
#[derive(Responder)]
pub enum LoginResponse {
    /// Backend accepted the credentials
    #[response(status = 200, content_type = "json")]
    Granted(Json<TokenResponse>),
    /// Admission guard rejected the attempt; fixed wire body
    #[response(status = 429, content_type = "json")]
    Throttled(&'static str),
    /// Backend refused the credentials
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<ErrorBody>),
    /// Unexpected failure
    #[response(status = 500, content_type = "json")]
    Internal(Json<ErrorBody>),
}

/// Attempt a login for the resolved client identity
#[post("/auth/login", format = "json", data = "<request>")]
pub async fn login(
    client: ClientIp,
    state: &State<ServerState>,
    request: Json<LoginRequest>,
) -> LoginResponse {
    let result = state
        .login
        .attempt_login(
            client.as_deref(),
            &request.username_or_email,
            &request.password,
        )
        .await;

    match result {
        Ok(LoginOutcome::Granted { token }) => LoginResponse::Granted(Json(TokenResponse { token })),
        Ok(LoginOutcome::Throttled) => LoginResponse::Throttled(LOGIN_THROTTLED_BODY),
        Err(Error::Authentication { message }) => {
            LoginResponse::Unauthorized(Json(ErrorBody { error: message }))
        }
        Err(err) => {
            error!(error = %err, "login attempt failed unexpectedly");
            LoginResponse::Internal(Json(ErrorBody {
                error: "internal server error".to_string(),
            }))
        }
    }
}
