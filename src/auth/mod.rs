use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config;

/// Session token payload. The email is the only identity claim; the admin
/// role is looked up in the store on every admin-guarded request rather than
/// being baked into the token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(email: String) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            email,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug)]
pub enum JwtError {
    TokenGeneration(String),
    InvalidToken(String),
    InvalidSecret,
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            JwtError::InvalidToken(msg) => write!(f, "Invalid JWT token: {}", msg),
            JwtError::InvalidSecret => write!(f, "Invalid JWT secret"),
        }
    }
}

impl std::error::Error for JwtError {}

pub fn generate_jwt(claims: &Claims) -> Result<String, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Decode and validate a token. Expired, malformed, and wrongly-signed tokens
/// are all reported through the same error variant so callers cannot leak
/// which failure occurred.
pub fn verify_jwt(token: &str) -> Result<Claims, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| JwtError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_claims() {
        let claims = Claims::new("alice@example.com".to_string());
        let token = generate_jwt(&claims).expect("token");
        let decoded = verify_jwt(&token).expect("claims");
        assert_eq!(decoded.email, "alice@example.com");
        assert!(decoded.exp > decoded.iat);
    }

    #[test]
    fn rejects_garbage_tokens() {
        assert!(verify_jwt("not-a-token").is_err());
        assert!(verify_jwt("").is_err());
    }

    #[test]
    fn rejects_tampered_tokens() {
        let claims = Claims::new("alice@example.com".to_string());
        let token = generate_jwt(&claims).expect("token");
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(verify_jwt(&tampered).is_err());
    }
}
