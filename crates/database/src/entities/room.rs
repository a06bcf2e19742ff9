use models::amenities::Amenities;
use models::gallery::Gallery;
use models::room::{AvailabilityStatus, RoomType};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub room_number: String,
    pub room_type: RoomType,
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub description: Option<String>,
    pub availability_status: AvailabilityStatus,
    pub amenities: Option<Amenities>,
    pub photos: Option<Gallery>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
