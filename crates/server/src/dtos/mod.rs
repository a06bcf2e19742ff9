pub mod booking;
pub mod payment;
pub mod room;
pub mod user;
