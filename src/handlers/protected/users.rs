use axum::extract::{Path, State};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::middleware::{require_owner, ApiResponse, ApiResult, AuthUser};

/// GET /users/:email - admin status for an email.
///
/// Callers may only query their own email; the answer is `{ "admin": bool }`
/// with an unknown email reading as a regular user.
pub async fn role_get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Value> {
    require_owner(&auth, &email)?;

    let user = state.store.find_user_by_email(&email).await?;
    let admin = user.map(|u| u.is_admin()).unwrap_or(false);

    Ok(ApiResponse::success(json!({ "admin": admin })))
}
