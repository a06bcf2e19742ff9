pub mod booking;
pub mod payment;
pub mod room;
pub mod user;

pub use booking as bookings;
pub use payment as payments;
pub use room as rooms;
pub use user as users;
