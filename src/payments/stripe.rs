use async_trait::async_trait;
use serde_json::Value;

use super::{PaymentError, PaymentIntent, PaymentProcessor};

const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

/// Stripe PaymentIntents client over the form-encoded REST API.
pub struct StripeProcessor {
    client: reqwest::Client,
    secret_key: String,
    currency: String,
}

impl StripeProcessor {
    pub fn new(secret_key: String, currency: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key,
            currency,
        }
    }
}

#[async_trait]
impl PaymentProcessor for StripeProcessor {
    async fn create_intent(&self, amount_minor: i64) -> Result<PaymentIntent, PaymentError> {
        let response = self
            .client
            .post(PAYMENT_INTENTS_URL)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&[
                ("amount", amount_minor.to_string()),
                ("currency", self.currency.clone()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::Rejected(format!("{}: {}", status, body)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| PaymentError::Malformed(e.to_string()))?;

        let client_secret = body
            .get("client_secret")
            .and_then(Value::as_str)
            .ok_or_else(|| PaymentError::Malformed("missing client_secret".to_string()))?;

        Ok(PaymentIntent {
            client_secret: client_secret.to_string(),
        })
    }
}
