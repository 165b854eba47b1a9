use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;

/// Success envelope: every successful handler answer is wrapped as
/// `{ "success": true, "data": ... }` with a status of 200 unless overridden.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    data: T,
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::with_status(data, StatusCode::OK)
    }

    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }

    pub fn with_status(data: T, status: StatusCode) -> Self {
        Self { data, status }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match serde_json::to_value(&self.data) {
            Ok(data) => (
                self.status,
                Json(json!({ "success": true, "data": data })),
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Response serialization failed: {}", e);
                ApiError::internal_server_error("Failed to serialize response").into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;
