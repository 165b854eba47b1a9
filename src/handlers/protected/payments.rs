use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{require_owner, ApiResponse, ApiResult, AuthUser};
use crate::models::{NewPayment, Payment, PaymentReceipt};

#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    pub price: f64,
}

/// POST /create-payment-intent - stage a card payment with the processor.
///
/// Nothing is persisted here; a processor failure has no side effect.
pub async fn create_intent(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(payload): Json<CreateIntentRequest>,
) -> ApiResult<Value> {
    if !payload.price.is_finite() || payload.price <= 0.0 {
        return Err(ApiError::bad_request("Invalid price"));
    }

    let amount_minor = (payload.price * 100.0).round() as i64;
    let intent = state.payments.create_intent(amount_minor).await?;

    Ok(ApiResponse::success(
        json!({ "clientSecret": intent.client_secret }),
    ))
}

/// POST /payments - record a completed payment and clear the paid-for cart
/// items. Both halves are reported through one receipt.
pub async fn record(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(payload): Json<NewPayment>,
) -> ApiResult<PaymentReceipt> {
    let receipt = state.store.record_payment(payload).await?;
    Ok(ApiResponse::created(receipt))
}

/// GET /payments/:email - payment history, owner only
pub async fn history(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Vec<Payment>> {
    require_owner(&auth, &email)?;

    let payments = state.store.list_payments(&email).await?;
    Ok(ApiResponse::success(payments))
}
