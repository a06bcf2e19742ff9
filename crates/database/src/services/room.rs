use crate::entities::rooms;
use chrono::Utc;
use models::amenities::Amenities;
use models::gallery::Gallery;
use models::room::{AvailabilityStatus, RoomType};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
};
use uuid::Uuid;

/// Attributes for a new room
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub room_number: String,
    pub room_type: RoomType,
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub description: Option<String>,
    pub availability_status: AvailabilityStatus,
    pub amenities: Option<Amenities>,
    pub photos: Option<Gallery>,
}

/// Partial room update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct RoomPatch {
    pub room_number: Option<String>,
    pub room_type: Option<RoomType>,
    pub price_per_night: Option<Decimal>,
    pub max_guests: Option<i32>,
    pub description: Option<String>,
    pub availability_status: Option<AvailabilityStatus>,
    pub amenities: Option<Amenities>,
    pub photos: Option<Gallery>,
}

pub struct RoomService;

impl RoomService {
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<rooms::Model>, DbErr> {
        rooms::Entity::find_by_id(id).one(db).await
    }

    pub async fn create(db: &DatabaseConnection, new_room: NewRoom) -> Result<rooms::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let room = rooms::ActiveModel {
            id: Set(Uuid::new_v4()),
            room_number: Set(new_room.room_number),
            room_type: Set(new_room.room_type),
            price_per_night: Set(new_room.price_per_night),
            max_guests: Set(new_room.max_guests),
            description: Set(new_room.description),
            availability_status: Set(new_room.availability_status),
            amenities: Set(new_room.amenities),
            photos: Set(new_room.photos),
            created_at: Set(now),
            updated_at: Set(now),
        };

        room.insert(db).await
    }

    /// Apply a partial update; returns `None` when the room does not exist
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        patch: RoomPatch,
    ) -> Result<Option<rooms::Model>, DbErr> {
        let Some(existing) = rooms::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut room = existing.into_active_model();

        if let Some(room_number) = patch.room_number {
            room.room_number = Set(room_number);
        }
        if let Some(room_type) = patch.room_type {
            room.room_type = Set(room_type);
        }
        if let Some(price_per_night) = patch.price_per_night {
            room.price_per_night = Set(price_per_night);
        }
        if let Some(max_guests) = patch.max_guests {
            room.max_guests = Set(max_guests);
        }
        if let Some(description) = patch.description {
            room.description = Set(Some(description));
        }
        if let Some(availability_status) = patch.availability_status {
            room.availability_status = Set(availability_status);
        }
        if let Some(amenities) = patch.amenities {
            room.amenities = Set(Some(amenities));
        }
        if let Some(photos) = patch.photos {
            room.photos = Set(Some(photos));
        }
        room.updated_at = Set(Utc::now().naive_utc());

        room.update(db).await.map(Some)
    }

    /// Returns `false` when the room does not exist
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        let result = rooms::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
