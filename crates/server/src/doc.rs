use crate::routes::{booking, health, payment, room, root, user};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        room::get_rooms,
        room::get_room_availability,
        room::get_rooms_by_amenities,
        room::get_room_by_id,
        room::create_room,
        room::update_room,
        room::delete_room,
        user::get_users,
        user::get_user_by_id,
        user::create_user,
        user::update_user,
        user::delete_user,
        booking::get_bookings,
        booking::get_booking_by_id,
        booking::create_booking,
        booking::update_booking,
        booking::delete_booking,
        payment::get_payments,
        payment::get_payment_by_id,
        payment::create_payment,
        payment::update_payment,
        payment::delete_payment,
        payment::process_payment
    ),
    tags(
        (name = "Health", description = "Service health endpoints"),
        (name = "Rooms", description = "Room catalog, filtering and availability endpoints"),
        (name = "Users", description = "User management endpoints"),
        (name = "Bookings", description = "Booking management endpoints"),
        (name = "Payments", description = "Payment management and processing endpoints"),
    ),
    info(
        title = "Hotel Booking API",
        version = "1.0.0",
        description = "Hotel room booking and availability API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
