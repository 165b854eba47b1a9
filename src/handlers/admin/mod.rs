pub mod menu;
pub mod stats;
pub mod users;
