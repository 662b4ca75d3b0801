//! Client wrappers for the auth endpoints. Session state lives in `HttpOnly`
//! cookies; these helpers only move non-sensitive session metadata.

use crate::app_lib::{AppError, get_optional_json, post_empty, post_json_response};
use crate::features::auth::types::{LoginRequest, UserSession};

/// Fetches the current session, if any. 204/401 mean "signed out", not error.
pub async fn fetch_session() -> Result<Option<UserSession>, AppError> {
    get_optional_json("/v1/auth/session").await
}

/// Exchanges credentials for a session cookie and returns the session.
pub async fn login(request: &LoginRequest) -> Result<UserSession, AppError> {
    post_json_response("/v1/auth/login", request).await
}

/// Clears the server-side session and its cookie.
pub async fn logout() -> Result<(), AppError> {
    post_empty("/v1/auth/logout").await
}
