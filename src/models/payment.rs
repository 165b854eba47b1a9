use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: Uuid,
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    pub status: String,
    /// Cart items consumed by this payment; deleted when the payment is recorded
    pub cart_ids: Vec<Uuid>,
    /// Menu items ordered, referenced by the category revenue report
    pub menu_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(new: NewPayment) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: new.email,
            price: new.price,
            transaction_id: new.transaction_id,
            status: new.status,
            cart_ids: new.cart_ids,
            menu_ids: new.menu_ids,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPayment {
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub cart_ids: Vec<Uuid>,
    pub menu_ids: Vec<Uuid>,
}

fn default_status() -> String {
    "paid".to_string()
}

/// Single result covering both halves of payment recording (the insert and
/// the cart cleanup), so callers never observe the intermediate state.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
    pub payment_id: Uuid,
    pub carts_removed: u64,
}
