use async_trait::async_trait;

use super::{PaymentError, PaymentIntent, PaymentProcessor};

/// Offline stand-in for Stripe, used by the test suite and for local
/// development when no STRIPE_SECRET_KEY is configured. Never fails.
#[derive(Debug, Default)]
pub struct MockProcessor;

#[async_trait]
impl PaymentProcessor for MockProcessor {
    async fn create_intent(&self, amount_minor: i64) -> Result<PaymentIntent, PaymentError> {
        Ok(PaymentIntent {
            client_secret: format!("pi_mock_secret_{}", amount_minor),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_secret_encodes_amount() {
        let intent = MockProcessor.create_intent(1250).await.unwrap();
        assert_eq!(intent.client_secret, "pi_mock_secret_1250");
    }
}
