pub mod bookings;
pub mod carts;
pub mod payments;
pub mod users;

use serde::Deserialize;

/// Optional owner filter used by cart and booking listings. When present it
/// is checked against the authenticated email; when absent the caller's own
/// email applies.
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}
