use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::app::AppState;
use crate::auth;
use crate::error::ApiError;

/// Every authentication failure (missing header, malformed header, expired
/// or forged token) produces this same 401 body, so callers cannot tell
/// which check failed.
const AUTH_REQUIRED: &str = "Authentication required";

/// Authenticated caller context extracted from a bearer JWT. Using this as a
/// handler argument is the `Start -> Authenticated` step of the guard chain;
/// extraction failure short-circuits the request with 401.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> Result<Self, Self::Rejection> {
        let token = extract_bearer(&parts.headers)
            .ok_or_else(|| ApiError::unauthorized(AUTH_REQUIRED))?;

        let claims =
            auth::verify_jwt(&token).map_err(|_| ApiError::unauthorized(AUTH_REQUIRED))?;

        Ok(AuthUser {
            email: claims.email,
        })
    }
}

/// Ownership guard: when a request names an email, it must be the
/// authenticated caller's email, regardless of admin status.
pub fn require_owner(auth: &AuthUser, email: &str) -> Result<(), ApiError> {
    if auth.email != email {
        tracing::warn!(
            "Ownership check failed: token for {} requested resources of {}",
            auth.email,
            email
        );
        return Err(ApiError::forbidden("Unauthorized access"));
    }
    Ok(())
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers.get("authorization")?.to_str().ok()?;
    let token = auth_header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
