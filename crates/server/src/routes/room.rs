use crate::dtos::room::{
    AmenitySearchParams, AmenitySearchResponse, AvailabilityParams, AvailabilityResponse,
    CreateRoomRequest, RoomListParams, RoomResponse, UpdateRoomRequest,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use database::services::query_room::{RoomFilter, RoomQueryService};
use database::services::room::RoomService;
use models::amenities::parse_amenity_list;
use uuid::Uuid;
use validator::Validate;

/// List rooms matching the conjunction of the supplied filters
#[utoipa::path(
    get,
    path = "/rooms",
    params(RoomListParams),
    responses(
        (status = 200, description = "Rooms matching the filters", body = [RoomResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    Query(params): Query<RoomListParams>,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    let rooms = RoomQueryService::filter_rooms(&state.db, &params.filter()).await?;

    let rooms = match params.amenity_list() {
        Some(requested) => RoomQueryService::filter_by_amenities(rooms, &requested),
        None => rooms,
    };

    Ok(Json(rooms.into_iter().map(RoomResponse::from).collect()))
}

/// Rooms free for a requested stay
#[utoipa::path(
    get,
    path = "/rooms/availability",
    params(AvailabilityParams),
    responses(
        (status = 200, description = "Rooms available for the stay", body = AvailabilityResponse),
        (status = 400, description = "Missing or invalid dates"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn get_room_availability(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let stay = params.stay()?;

    let rooms =
        RoomQueryService::find_available(&state.db, stay, params.room_type, params.min_guests())
            .await?;

    let available_rooms: Vec<RoomResponse> = rooms.into_iter().map(RoomResponse::from).collect();

    Ok(Json(AvailabilityResponse {
        total_available: available_rooms.len(),
        available_rooms,
    }))
}

/// Rooms offering every requested amenity
#[utoipa::path(
    get,
    path = "/rooms/amenities",
    params(AmenitySearchParams),
    responses(
        (status = 200, description = "Rooms offering all requested amenities", body = AmenitySearchResponse),
        (status = 400, description = "Missing amenities parameter"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn get_rooms_by_amenities(
    State(state): State<AppState>,
    Query(params): Query<AmenitySearchParams>,
) -> Result<Json<AmenitySearchResponse>, ApiError> {
    let requested = params
        .amenities
        .as_deref()
        .map(parse_amenity_list)
        .filter(|tokens| !tokens.is_empty())
        .ok_or_else(|| {
            ApiError::MissingParameter("amenities query parameter is required".to_string())
        })?;

    let filter = RoomFilter {
        room_type: params.room_type,
        ..Default::default()
    };
    let rooms = RoomQueryService::filter_rooms(&state.db, &filter).await?;
    let rooms = RoomQueryService::filter_by_amenities(rooms, &requested);

    Ok(Json(AmenitySearchResponse {
        total_rooms: rooms.len(),
        rooms: rooms.into_iter().map(RoomResponse::from).collect(),
        requested_amenities: requested,
    }))
}

/// Get a specific room by ID
#[utoipa::path(
    get,
    path = "/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room found", body = RoomResponse),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn get_room_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoomResponse>, ApiError> {
    let room = RoomService::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Room"))?;

    Ok(Json(room.into()))
}

/// Create a room
#[utoipa::path(
    post,
    path = "/rooms",
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created", body = RoomResponse),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn create_room(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), ApiError> {
    payload.validate()?;

    let room = RoomService::create(&state.db, payload.into_new_room()).await?;

    Ok((StatusCode::CREATED, Json(room.into())))
}

/// Update a room
#[utoipa::path(
    put,
    path = "/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room ID")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Room updated", body = RoomResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRoomRequest>,
) -> Result<Json<RoomResponse>, ApiError> {
    payload.validate()?;

    let room = RoomService::update(&state.db, id, payload.into_patch())
        .await?
        .ok_or(ApiError::NotFound("Room"))?;

    Ok(Json(room.into()))
}

/// Delete a room
#[utoipa::path(
    delete,
    path = "/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if RoomService::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Room"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::payments::SandboxGateway;
    use axum::Router;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use chrono::NaiveDate;
    use database::entities::{bookings, rooms};
    use http_body_util::BodyExt;
    use models::amenities::Amenities;
    use models::booking::BookingStatus;
    use models::room::{AvailabilityStatus, RoomType};
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(db: DatabaseConnection) -> Router {
        let state = AppState {
            db,
            payments: Arc::new(SandboxGateway),
        };

        Router::new()
            .route("/rooms", get(get_rooms))
            .route("/rooms/availability", get(get_room_availability))
            .route("/rooms/amenities", get(get_rooms_by_amenities))
            .with_state(state)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room(id: u128) -> rooms::Model {
        rooms::Model {
            id: uuid::Uuid::from_u128(id),
            room_number: format!("{id}"),
            room_type: RoomType::Double,
            price_per_night: Decimal::new(9900, 2),
            max_guests: 2,
            description: None,
            availability_status: AvailabilityStatus::Available,
            amenities: None,
            photos: None,
            created_at: date(2023, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
            updated_at: date(2023, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
        }
    }

    fn confirmed_booking(room_id: u128, check_in: NaiveDate, check_out: NaiveDate) -> bookings::Model {
        bookings::Model {
            id: uuid::Uuid::new_v4(),
            user_id: uuid::Uuid::new_v4(),
            room_id: uuid::Uuid::from_u128(room_id),
            check_in_date: check_in,
            check_out_date: check_out,
            status: BookingStatus::Confirmed,
            created_at: date(2023, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
            updated_at: date(2023, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
        }
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap();

        (status, body)
    }

    #[tokio::test]
    async fn test_availability_requires_both_dates() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let (status, body) =
            get_json(app(db), "/rooms/availability?checkOutDate=2023-06-05").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Both checkInDate and checkOutDate are required"
        );
    }

    #[tokio::test]
    async fn test_availability_rejects_out_of_order_dates() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let (status, body) = get_json(
            app(db),
            "/rooms/availability?checkInDate=2023-06-10&checkOutDate=2023-06-05",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "checkOutDate must be after checkInDate");
    }

    #[tokio::test]
    async fn test_availability_excludes_room_with_overlapping_booking() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![room(1)]])
            .append_query_results([vec![confirmed_booking(
                1,
                date(2023, 6, 1),
                date(2023, 6, 5),
            )]])
            .into_connection();

        let (status, body) = get_json(
            app(db),
            "/rooms/availability?checkInDate=2023-06-02&checkOutDate=2023-06-04",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalAvailable"], 0);
        assert_eq!(body["availableRooms"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_availability_includes_back_to_back_stay() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![room(1)]])
            .append_query_results([vec![confirmed_booking(
                1,
                date(2023, 6, 1),
                date(2023, 6, 5),
            )]])
            .into_connection();

        let (status, body) = get_json(
            app(db),
            "/rooms/availability?checkInDate=2023-06-05&checkOutDate=2023-06-10",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalAvailable"], 1);
    }

    #[tokio::test]
    async fn test_amenity_search_requires_amenities() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let (status, body) = get_json(app(db), "/rooms/amenities?roomType=Double").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "amenities query parameter is required");
    }

    #[tokio::test]
    async fn test_amenity_search_matches_all_requested_names() {
        let mut matching = room(1);
        matching.amenities = Some(Amenities::List(vec![
            "wifi".to_string(),
            "tv".to_string(),
        ]));
        let missing_one = room(2);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![matching, missing_one]])
            .into_connection();

        let (status, body) = get_json(app(db), "/rooms/amenities?amenities=wifi,%20tv").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalRooms"], 1);
        assert_eq!(body["requestedAmenities"], serde_json::json!(["wifi", "tv"]));
    }
}
