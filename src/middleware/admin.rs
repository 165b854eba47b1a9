use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::app::AppState;
use crate::error::ApiError;

use super::auth::AuthUser;

/// Admin guard: authenticates the caller, then requires that the store holds
/// an admin role record for the token's email. The `Authenticated ->
/// AuthorizedAdmin` step of the guard chain; a missing user or a non-admin
/// role short-circuits with 403.
pub struct AdminUser(pub AuthUser);

#[axum::async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        let user = state.store.find_user_by_email(&auth.email).await?;

        match user {
            Some(user) if user.is_admin() => Ok(AdminUser(auth)),
            _ => {
                tracing::warn!("Admin check failed for {}", auth.email);
                Err(ApiError::forbidden("Admin access required"))
            }
        }
    }
}
