pub mod mock;
pub mod stripe;

use async_trait::async_trait;
use thiserror::Error;

pub use mock::MockProcessor;
pub use stripe::StripeProcessor;

/// Errors from the payment processor
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Payment processor rejected the request: {0}")]
    Rejected(String),

    #[error("Payment processor unreachable: {0}")]
    Transport(String),

    #[error("Unexpected payment processor response: {0}")]
    Malformed(String),
}

/// Processor-side staged transaction, returned before funds are captured.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub client_secret: String,
}

/// External payment processor. Creating an intent has no local side effect;
/// a failure here leaves nothing to clean up.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Stage a card payment for `amount_minor` minor currency units.
    async fn create_intent(&self, amount_minor: i64) -> Result<PaymentIntent, PaymentError>;
}
