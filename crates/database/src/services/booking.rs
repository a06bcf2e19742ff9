use crate::entities::bookings;
use chrono::Utc;
use models::booking::BookingStatus;
use models::stay::StayRange;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
};
use uuid::Uuid;

/// Attributes for a new booking. Carrying a [`StayRange`] means the date
/// order was already validated at the API boundary.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub stay: StayRange,
    pub status: BookingStatus,
}

/// Partial booking update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct BookingPatch {
    pub stay: Option<StayRange>,
    pub status: Option<BookingStatus>,
}

pub struct BookingService;

impl BookingService {
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<bookings::Model>, DbErr> {
        bookings::Entity::find().all(db).await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<bookings::Model>, DbErr> {
        bookings::Entity::find_by_id(id).one(db).await
    }

    pub async fn create(
        db: &DatabaseConnection,
        new_booking: NewBooking,
    ) -> Result<bookings::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let booking = bookings::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(new_booking.user_id),
            room_id: Set(new_booking.room_id),
            check_in_date: Set(new_booking.stay.check_in),
            check_out_date: Set(new_booking.stay.check_out),
            status: Set(new_booking.status),
            created_at: Set(now),
            updated_at: Set(now),
        };

        booking.insert(db).await
    }

    /// Apply a partial update; returns `None` when the booking does not exist
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        patch: BookingPatch,
    ) -> Result<Option<bookings::Model>, DbErr> {
        let Some(existing) = bookings::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut booking = existing.into_active_model();

        if let Some(stay) = patch.stay {
            booking.check_in_date = Set(stay.check_in);
            booking.check_out_date = Set(stay.check_out);
        }
        if let Some(status) = patch.status {
            booking.status = Set(status);
        }
        booking.updated_at = Set(Utc::now().naive_utc());

        booking.update(db).await.map(Some)
    }

    /// Returns `false` when the booking does not exist
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        let result = bookings::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
