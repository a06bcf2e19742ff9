use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum UserRole {
    #[default]
    #[sea_orm(string_value = "Guest")]
    Guest,
    #[sea_orm(string_value = "Customer")]
    Customer,
    #[sea_orm(string_value = "Admin")]
    Admin,
}
