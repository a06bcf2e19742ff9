use crate::dtos::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use database::services::user::UserService;
use sea_orm::{DbErr, SqlErr};
use uuid::Uuid;
use validator::Validate;

/// Translate a unique-violation on the email column into its domain error
fn map_user_db_err(err: DbErr) -> ApiError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::DuplicateEmail,
        _ => ApiError::Database(err),
    }
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserService::find_all(&state.db).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserService::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(user.into()))
}

/// Register a user; the password is hashed before it is stored
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation failed or email already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    payload.validate()?;

    let user = UserService::create(&state.db, payload.into_new_user())
        .await
        .map_err(map_user_db_err)?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation failed or email already exists"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    payload.validate()?;

    let user = UserService::update(&state.db, id, payload.into_patch())
        .await
        .map_err(map_user_db_err)?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(user.into()))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if UserService::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("User"))
    }
}
