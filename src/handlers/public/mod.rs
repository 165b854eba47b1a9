pub mod auth;
pub mod bookings;
pub mod menu;
pub mod reviews;
pub mod users;
