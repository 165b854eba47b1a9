use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{generate_jwt, Claims};
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
}

/// POST /jwt - issue a session token for the posted email.
///
/// There is deliberately no credential check here: the caller's payload is
/// trusted as-is and signed into a short-lived token. Identity is established
/// by the upstream sign-in provider on the client side.
pub async fn token_post(Json(payload): Json<TokenRequest>) -> ApiResult<Value> {
    let claims = Claims::new(payload.email);
    let token = generate_jwt(&claims)?;

    Ok(ApiResponse::success(json!({ "token": token })))
}
