use chrono::NaiveDateTime;
use database::entities::users;
use database::services::user::{NewUser, UserPatch};
use models::user::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "fullName must not be empty"))]
    pub full_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[schema(value_type = Option<String>)]
    pub role: Option<UserRole>,
    pub phone: Option<String>,
}

impl CreateUserRequest {
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            full_name: self.full_name,
            email: self.email,
            password: self.password,
            role: self.role.unwrap_or_default(),
            phone: self.phone,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "fullName must not be empty"))]
    pub full_name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: Option<String>,
    #[schema(value_type = Option<String>)]
    pub role: Option<UserRole>,
    pub phone: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            full_name: self.full_name,
            email: self.email,
            password: self.password,
            role: self.role,
            phone: self.phone,
        }
    }
}

/// User representation returned by the API; the password hash never leaves
/// the database layer
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[schema(value_type = String)]
    pub role: UserRole,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<users::Model> for UserResponse {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id.to_string(),
            full_name: user.full_name,
            email: user.email,
            role: user.role,
            phone: user.phone,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
