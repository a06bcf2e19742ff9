pub mod amenities;
pub mod booking;
pub mod gallery;
pub mod payment;
pub mod room;
pub mod stay;
pub mod user;
