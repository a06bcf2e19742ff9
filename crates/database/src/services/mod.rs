pub mod booking;
pub mod payment;
pub mod query_room;
pub mod room;
pub mod user;
