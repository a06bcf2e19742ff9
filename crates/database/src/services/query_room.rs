use crate::entities::{bookings, rooms};
use log::debug;
use models::booking::BookingStatus;
use models::room::{AvailabilityStatus, RoomType};
use models::stay::StayRange;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use std::collections::HashSet;
use uuid::Uuid;

/// Optional room-listing criteria; absent fields impose no constraint
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub room_type: Option<RoomType>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Minimum guest capacity the room must support
    pub min_guests: Option<i32>,
    /// Compared as a raw string so that an out-of-set status matches zero
    /// rows instead of failing the request
    pub status: Option<String>,
}

pub struct RoomQueryService;

impl RoomQueryService {
    /// Query rooms matching the conjunction of all supplied criteria
    pub async fn filter_rooms(
        db: &DatabaseConnection,
        filter: &RoomFilter,
    ) -> Result<Vec<rooms::Model>, DbErr> {
        let mut condition = Condition::all();

        if let Some(room_type) = filter.room_type {
            condition = condition.add(rooms::Column::RoomType.eq(room_type));
        }

        if let Some(min_price) = filter.min_price {
            condition = condition.add(rooms::Column::PricePerNight.gte(min_price));
        }

        if let Some(max_price) = filter.max_price {
            condition = condition.add(rooms::Column::PricePerNight.lte(max_price));
        }

        if let Some(min_guests) = filter.min_guests {
            condition = condition.add(rooms::Column::MaxGuests.gte(min_guests));
        }

        if let Some(status) = &filter.status {
            condition = condition.add(rooms::Column::AvailabilityStatus.eq(status.clone()));
        }

        rooms::Entity::find().filter(condition).all(db).await
    }

    /// Rooms free for the requested stay: administratively `Available` and
    /// with no `Confirmed` booking overlapping the half-open interval.
    ///
    /// The administrative status is an independent veto: a room flagged
    /// `Booked` stays excluded even when no stored booking conflicts.
    pub async fn find_available(
        db: &DatabaseConnection,
        stay: StayRange,
        room_type: Option<RoomType>,
        min_guests: Option<i32>,
    ) -> Result<Vec<rooms::Model>, DbErr> {
        let mut condition = Condition::all()
            .add(rooms::Column::AvailabilityStatus.ne(AvailabilityStatus::Maintenance));

        if let Some(room_type) = room_type {
            condition = condition.add(rooms::Column::RoomType.eq(room_type));
        }

        if let Some(min_guests) = min_guests {
            condition = condition.add(rooms::Column::MaxGuests.gte(min_guests));
        }

        let candidates = rooms::Entity::find().filter(condition).all(db).await?;

        let overlapping = bookings::Entity::find()
            .filter(
                Condition::all()
                    .add(bookings::Column::Status.eq(BookingStatus::Confirmed))
                    .add(bookings::Column::CheckOutDate.gt(stay.check_in))
                    .add(bookings::Column::CheckInDate.lt(stay.check_out)),
            )
            .all(db)
            .await?;

        let busy = Self::conflicting_room_ids(stay, &overlapping);

        debug!(
            "availability check: {} candidate rooms, {} rooms with conflicting bookings",
            candidates.len(),
            busy.len()
        );

        Ok(candidates
            .into_iter()
            .filter(|room| {
                !busy.contains(&room.id)
                    && room.availability_status == AvailabilityStatus::Available
            })
            .collect())
    }

    /// Ids of rooms whose confirmed bookings overlap the requested stay
    fn conflicting_room_ids(stay: StayRange, bookings: &[bookings::Model]) -> HashSet<Uuid> {
        bookings
            .iter()
            .filter(|booking| {
                booking.status == BookingStatus::Confirmed
                    && stay.overlaps(booking.check_in_date, booking.check_out_date)
            })
            .map(|booking| booking.room_id)
            .collect()
    }

    /// Reduce a room collection to those whose amenity data satisfies every
    /// requested name. Rooms without amenity data never match.
    pub fn filter_by_amenities(
        rooms: Vec<rooms::Model>,
        requested: &[String],
    ) -> Vec<rooms::Model> {
        rooms
            .into_iter()
            .filter(|room| {
                room.amenities
                    .as_ref()
                    .is_some_and(|amenities| amenities.has_all(requested))
            })
            .collect()
    }
}
