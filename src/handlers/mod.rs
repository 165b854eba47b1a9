pub mod admin;
pub mod protected;
pub mod public;

use uuid::Uuid;

use crate::error::ApiError;

/// Validate a path identifier before touching the store; a malformed id is a
/// 400, never a query.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request(format!("Invalid {} ID format", what)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_uuids_only() {
        assert!(parse_id("0f8fad5b-d9cb-469f-a165-70867728950e", "user").is_ok());
        let err = parse_id("not-an-id", "user").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
