use crate::error::ApiError;
use chrono::{NaiveDate, NaiveDateTime};
use database::entities::rooms;
use database::services::query_room::RoomFilter;
use database::services::room::{NewRoom, RoomPatch};
use models::amenities::{Amenities, parse_amenity_list};
use models::gallery::Gallery;
use models::room::{AvailabilityStatus, RoomType};
use models::stay::StayRange;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Room-listing filters. The numeric bounds arrive as raw strings and are
/// parsed leniently: `"0"` is a real bound, while an unparseable value
/// disables that bound instead of failing the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RoomListParams {
    #[param(value_type = Option<String>)]
    pub room_type: Option<RoomType>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    /// Minimum guest capacity the room must support
    pub max_guests: Option<String>,
    /// Compared verbatim; an out-of-set value matches zero rooms
    pub availability_status: Option<String>,
    /// Comma-separated amenity names; every one must be present (ALL-match)
    pub amenities: Option<String>,
}

impl RoomListParams {
    pub fn filter(&self) -> RoomFilter {
        RoomFilter {
            room_type: self.room_type,
            min_price: self.min_price.as_deref().and_then(parse_decimal),
            max_price: self.max_price.as_deref().and_then(parse_decimal),
            min_guests: self.max_guests.as_deref().and_then(parse_int),
            status: self.availability_status.clone(),
        }
    }

    /// Requested amenity tokens, `None` when the parameter is absent or
    /// contains no usable token
    pub fn amenity_list(&self) -> Option<Vec<String>> {
        let tokens = parse_amenity_list(self.amenities.as_deref()?);
        (!tokens.is_empty()).then_some(tokens)
    }
}

/// Availability-check parameters; both dates are required
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityParams {
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    #[param(value_type = Option<String>)]
    pub room_type: Option<RoomType>,
    /// Minimum guest capacity the room must support
    pub max_guests: Option<String>,
}

impl AvailabilityParams {
    /// Resolve the requested stay, failing before any query runs when a date
    /// is missing, malformed, or out of order
    pub fn stay(&self) -> Result<StayRange, ApiError> {
        let (Some(check_in), Some(check_out)) = (&self.check_in_date, &self.check_out_date) else {
            return Err(ApiError::MissingParameter(
                "Both checkInDate and checkOutDate are required".to_string(),
            ));
        };

        let check_in = parse_date("checkInDate", check_in)?;
        let check_out = parse_date("checkOutDate", check_out)?;

        StayRange::new(check_in, check_out).ok_or_else(|| {
            ApiError::InvalidDateRange("checkOutDate must be after checkInDate".to_string())
        })
    }

    pub fn min_guests(&self) -> Option<i32> {
        self.max_guests.as_deref().and_then(parse_int)
    }
}

/// Amenity-search parameters; the amenities list is required
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AmenitySearchParams {
    /// Comma-separated amenity names
    pub amenities: Option<String>,
    #[param(value_type = Option<String>)]
    pub room_type: Option<RoomType>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, message = "roomNumber must not be empty"))]
    pub room_number: String,
    #[schema(value_type = String)]
    pub room_type: RoomType,
    pub price_per_night: Decimal,
    #[validate(range(min = 1, message = "maxGuests must be at least 1"))]
    pub max_guests: i32,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub availability_status: Option<AvailabilityStatus>,
    #[schema(value_type = Option<Object>)]
    pub amenities: Option<Amenities>,
    #[schema(value_type = Option<Object>)]
    pub photos: Option<Gallery>,
}

impl CreateRoomRequest {
    pub fn into_new_room(self) -> NewRoom {
        NewRoom {
            room_number: self.room_number,
            room_type: self.room_type,
            price_per_night: self.price_per_night,
            max_guests: self.max_guests,
            description: self.description,
            availability_status: self.availability_status.unwrap_or_default(),
            amenities: self.amenities,
            photos: self.photos,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[validate(length(min = 1, message = "roomNumber must not be empty"))]
    pub room_number: Option<String>,
    #[schema(value_type = Option<String>)]
    pub room_type: Option<RoomType>,
    pub price_per_night: Option<Decimal>,
    #[validate(range(min = 1, message = "maxGuests must be at least 1"))]
    pub max_guests: Option<i32>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub availability_status: Option<AvailabilityStatus>,
    #[schema(value_type = Option<Object>)]
    pub amenities: Option<Amenities>,
    #[schema(value_type = Option<Object>)]
    pub photos: Option<Gallery>,
}

impl UpdateRoomRequest {
    pub fn into_patch(self) -> RoomPatch {
        RoomPatch {
            room_number: self.room_number,
            room_type: self.room_type,
            price_per_night: self.price_per_night,
            max_guests: self.max_guests,
            description: self.description,
            availability_status: self.availability_status,
            amenities: self.amenities,
            photos: self.photos,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: String,
    pub room_number: String,
    #[schema(value_type = String)]
    pub room_type: RoomType,
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub availability_status: AvailabilityStatus,
    #[schema(value_type = Option<Object>)]
    pub amenities: Option<Amenities>,
    #[schema(value_type = Option<Object>)]
    pub photos: Option<Gallery>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<rooms::Model> for RoomResponse {
    fn from(room: rooms::Model) -> Self {
        Self {
            id: room.id.to_string(),
            room_number: room.room_number,
            room_type: room.room_type,
            price_per_night: room.price_per_night,
            max_guests: room.max_guests,
            description: room.description,
            availability_status: room.availability_status,
            amenities: room.amenities,
            photos: room.photos,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub available_rooms: Vec<RoomResponse>,
    pub total_available: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AmenitySearchResponse {
    pub rooms: Vec<RoomResponse>,
    pub total_rooms: usize,
    pub requested_amenities: Vec<String>,
}

/// Lenient numeric-string parsing for filter bounds: present-but-falsy
/// values like `"0"` are honored, garbage disables the bound
fn parse_decimal(raw: &str) -> Option<Decimal> {
    raw.trim().parse().ok()
}

fn parse_int(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

fn parse_date(name: &str, raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        ApiError::InvalidDateRange(format!("{name} must be a valid date (YYYY-MM-DD)"))
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zero_price_bound_is_kept() {
        let params = RoomListParams {
            min_price: Some("0".to_string()),
            ..Default::default()
        };

        assert_eq!(params.filter().min_price, Some(Decimal::ZERO));
    }

    #[test]
    fn test_unparseable_bounds_disable_the_filter() {
        let params = RoomListParams {
            min_price: Some("cheap".to_string()),
            max_price: Some("".to_string()),
            max_guests: Some("many".to_string()),
            ..Default::default()
        };

        let filter = params.filter();
        assert_eq!(filter.min_price, None);
        assert_eq!(filter.max_price, None);
        assert_eq!(filter.min_guests, None);
    }

    #[test]
    fn test_amenity_list_requires_usable_tokens() {
        let params = RoomListParams {
            amenities: Some("wifi, tv".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.amenity_list(),
            Some(vec!["wifi".to_string(), "tv".to_string()])
        );

        let params = RoomListParams {
            amenities: Some(" , ".to_string()),
            ..Default::default()
        };
        assert_eq!(params.amenity_list(), None);

        assert_eq!(RoomListParams::default().amenity_list(), None);
    }

    #[test]
    fn test_stay_requires_both_dates() {
        let params = AvailabilityParams {
            check_out_date: Some("2023-06-05".to_string()),
            ..Default::default()
        };

        let err = params.stay().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Both checkInDate and checkOutDate are required"
        );
    }

    #[test]
    fn test_stay_rejects_out_of_order_dates() {
        let params = AvailabilityParams {
            check_in_date: Some("2023-06-05".to_string()),
            check_out_date: Some("2023-06-05".to_string()),
            ..Default::default()
        };

        let err = params.stay().unwrap_err();
        assert_eq!(err.to_string(), "checkOutDate must be after checkInDate");
    }

    #[test]
    fn test_stay_rejects_malformed_dates() {
        let params = AvailabilityParams {
            check_in_date: Some("June 1st".to_string()),
            check_out_date: Some("2023-06-05".to_string()),
            ..Default::default()
        };

        assert!(params.stay().is_err());
    }

    #[test]
    fn test_stay_parses_valid_range() {
        let params = AvailabilityParams {
            check_in_date: Some("2023-06-02".to_string()),
            check_out_date: Some("2023-06-04".to_string()),
            ..Default::default()
        };

        let stay = params.stay().unwrap();
        assert_eq!(stay.nights(), 2);
    }
}
