use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Room categories offered by the property
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum RoomType {
    #[sea_orm(string_value = "Single")]
    Single,
    #[sea_orm(string_value = "Double")]
    Double,
    #[sea_orm(string_value = "Suite")]
    Suite,
}

/// Administrative availability flag, set by staff independently of any
/// booking state. A room under maintenance stays out of availability
/// results even with zero bookings on file.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AvailabilityStatus {
    #[default]
    #[sea_orm(string_value = "Available")]
    Available,
    #[sea_orm(string_value = "Booked")]
    Booked,
    #[sea_orm(string_value = "Maintenance")]
    Maintenance,
}
