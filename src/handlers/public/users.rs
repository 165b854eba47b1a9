use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::NewUser;

/// POST /users - create a user record on first sign-in.
///
/// Idempotent on email: a repeat call is a no-op with a message rather than a
/// duplicate record or an error.
pub async fn register(State(state): State<AppState>, Json(payload): Json<NewUser>) -> ApiResult<Value> {
    if state
        .store
        .find_user_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Ok(ApiResponse::success(
            json!({ "message": "User already exists" }),
        ));
    }

    let user = state.store.insert_user(payload).await?;
    Ok(ApiResponse::created(json!(user)))
}
