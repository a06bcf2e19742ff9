mod doc;
mod dtos;
mod error;
mod payments;
mod routes;
mod state;
mod utils;

use crate::doc::ApiDoc;
use crate::payments::SandboxGateway;
use crate::routes::{booking, health, payment, room, root, user};
use crate::state::AppState;
use crate::utils::shutdown::shutdown_signal;
use axum::Router;
use axum::routing::{get, post};
use log::info;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/rooms", get(room::get_rooms).post(room::create_room))
        .route("/rooms/availability", get(room::get_room_availability))
        .route("/rooms/amenities", get(room::get_rooms_by_amenities))
        .route(
            "/rooms/{id}",
            get(room::get_room_by_id)
                .put(room::update_room)
                .delete(room::delete_room),
        )
        .route("/users", get(user::get_users).post(user::create_user))
        .route(
            "/users/{id}",
            get(user::get_user_by_id)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/bookings",
            get(booking::get_bookings).post(booking::create_booking),
        )
        .route(
            "/bookings/{id}",
            get(booking::get_booking_by_id)
                .put(booking::update_booking)
                .delete(booking::delete_booking),
        )
        .route(
            "/payments",
            get(payment::get_payments).post(payment::create_payment),
        )
        .route(
            "/payments/{id}",
            get(payment::get_payment_by_id)
                .put(payment::update_payment)
                .delete(payment::delete_payment),
        )
        .route("/payments/{id}/process", post(payment::process_payment))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let db = database::db::create_connection()
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        payments: Arc::new(SandboxGateway),
    };

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Running axum on http://{addr}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
