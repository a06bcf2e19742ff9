use crate::dtos::booking::{BookingResponse, CreateBookingRequest, UpdateBookingRequest};
use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use database::services::booking::{BookingPatch, BookingService};
use database::services::room::RoomService;
use database::services::user::UserService;
use uuid::Uuid;

/// List all bookings
#[utoipa::path(
    get,
    path = "/bookings",
    responses(
        (status = 200, description = "All bookings", body = [BookingResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookings"
)]
pub async fn get_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = BookingService::find_all(&state.db).await?;

    Ok(Json(
        bookings.into_iter().map(BookingResponse::from).collect(),
    ))
}

/// Get a specific booking by ID
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking found", body = BookingResponse),
        (status = 404, description = "Booking not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookings"
)]
pub async fn get_booking_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, ApiError> {
    let booking = BookingService::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Booking"))?;

    Ok(Json(booking.into()))
}

/// Create a booking for an existing user and room
#[utoipa::path(
    post,
    path = "/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = BookingResponse),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Referenced user or room not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let new_booking = payload.into_new_booking()?;

    UserService::find_by_id(&state.db, new_booking.user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    RoomService::find_by_id(&state.db, new_booking.room_id)
        .await?
        .ok_or(ApiError::NotFound("Room"))?;

    let booking = BookingService::create(&state.db, new_booking).await?;

    Ok((StatusCode::CREATED, Json(booking.into())))
}

/// Update a booking, re-validating the date order when either date moves
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    params(("id" = Uuid, Path, description = "Booking ID")),
    request_body = UpdateBookingRequest,
    responses(
        (status = 200, description = "Booking updated", body = BookingResponse),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Booking not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookings"
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    let existing = BookingService::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Booking"))?;

    let patch = BookingPatch {
        stay: payload.effective_stay(&existing)?,
        status: payload.status,
    };

    let booking = BookingService::update(&state.db, id, patch)
        .await?
        .ok_or(ApiError::NotFound("Booking"))?;

    Ok(Json(booking.into()))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookings"
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if BookingService::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Booking"))
    }
}
