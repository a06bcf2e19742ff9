use crate::entities::users;
use chrono::Utc;
use models::user::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
};
use uuid::Uuid;

/// Attributes for a new user; the plaintext password is hashed before it
/// reaches the database
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub phone: Option<String>,
}

/// Partial user update; a supplied password is re-hashed
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub phone: Option<String>,
}

pub struct UserService;

impl UserService {
    /// Hash a password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<users::Model>, DbErr> {
        users::Entity::find().all(db).await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id).one(db).await
    }

    pub async fn create(db: &DatabaseConnection, new_user: NewUser) -> Result<users::Model, DbErr> {
        let password_hash = Self::hash_password(&new_user.password)
            .map_err(|e| DbErr::Custom(format!("failed to hash password: {e}")))?;
        let now = Utc::now().naive_utc();

        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(new_user.full_name),
            email: Set(new_user.email),
            password_hash: Set(password_hash),
            role: Set(new_user.role),
            phone: Set(new_user.phone),
            created_at: Set(now),
            updated_at: Set(now),
        };

        user.insert(db).await
    }

    /// Apply a partial update; returns `None` when the user does not exist
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        patch: UserPatch,
    ) -> Result<Option<users::Model>, DbErr> {
        let Some(existing) = users::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut user = existing.into_active_model();

        if let Some(full_name) = patch.full_name {
            user.full_name = Set(full_name);
        }
        if let Some(email) = patch.email {
            user.email = Set(email);
        }
        if let Some(password) = patch.password {
            let password_hash = Self::hash_password(&password)
                .map_err(|e| DbErr::Custom(format!("failed to hash password: {e}")))?;
            user.password_hash = Set(password_hash);
        }
        if let Some(role) = patch.role {
            user.role = Set(role);
        }
        if let Some(phone) = patch.phone {
            user.phone = Set(Some(phone));
        }
        user.updated_at = Set(Utc::now().naive_utc());

        user.update(db).await.map(Some)
    }

    /// Returns `false` when the user does not exist
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        let result = users::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
