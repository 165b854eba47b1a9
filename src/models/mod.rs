pub mod booking;
pub mod cart;
pub mod menu;
pub mod payment;
pub mod review;
pub mod user;

pub use booking::{Booking, NewBooking};
pub use cart::{CartItem, NewCartItem};
pub use menu::{MenuItem, NewMenuItem};
pub use payment::{NewPayment, Payment, PaymentReceipt};
pub use review::{NewReview, Review};
pub use user::{NewUser, User};
