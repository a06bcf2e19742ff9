use crate::error::ApiError;
use chrono::{NaiveDate, NaiveDateTime};
use database::entities::bookings;
use database::services::booking::NewBooking;
use models::booking::BookingStatus;
use models::stay::StayRange;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[schema(value_type = Option<String>)]
    pub status: Option<BookingStatus>,
}

impl CreateBookingRequest {
    /// Validate the date order and build the service-level attributes
    pub fn into_new_booking(self) -> Result<NewBooking, ApiError> {
        let stay = StayRange::new(self.check_in_date, self.check_out_date).ok_or_else(|| {
            ApiError::InvalidDateRange("checkOutDate must be after checkInDate".to_string())
        })?;

        Ok(NewBooking {
            user_id: self.user_id,
            room_id: self.room_id,
            stay,
            status: self.status.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub status: Option<BookingStatus>,
}

impl UpdateBookingRequest {
    /// Resolve the stay that would result from applying this update to the
    /// stored booking, re-validating the date order when either end moves
    pub fn effective_stay(&self, existing: &bookings::Model) -> Result<Option<StayRange>, ApiError> {
        if self.check_in_date.is_none() && self.check_out_date.is_none() {
            return Ok(None);
        }

        let check_in = self.check_in_date.unwrap_or(existing.check_in_date);
        let check_out = self.check_out_date.unwrap_or(existing.check_out_date);

        StayRange::new(check_in, check_out).map(Some).ok_or_else(|| {
            ApiError::InvalidDateRange("checkOutDate must be after checkInDate".to_string())
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub user_id: String,
    pub room_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[schema(value_type = String)]
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<bookings::Model> for BookingResponse {
    fn from(booking: bookings::Model) -> Self {
        Self {
            id: booking.id.to_string(),
            user_id: booking.user_id.to_string(),
            room_id: booking.room_id.to_string(),
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            status: booking.status,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stored_booking() -> bookings::Model {
        bookings::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            check_in_date: date(2023, 6, 1),
            check_out_date: date(2023, 6, 5),
            status: BookingStatus::Confirmed,
            created_at: date(2023, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
            updated_at: date(2023, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_effective_stay_merges_with_stored_dates() {
        let update = UpdateBookingRequest {
            check_out_date: Some(date(2023, 6, 8)),
            ..Default::default()
        };

        let stay = update.effective_stay(&stored_booking()).unwrap().unwrap();
        assert_eq!(stay.check_in, date(2023, 6, 1));
        assert_eq!(stay.check_out, date(2023, 6, 8));
    }

    #[test]
    fn test_effective_stay_rejects_inverted_result() {
        // Moving check-in past the stored check-out must fail
        let update = UpdateBookingRequest {
            check_in_date: Some(date(2023, 6, 9)),
            ..Default::default()
        };

        assert!(update.effective_stay(&stored_booking()).is_err());
    }

    #[test]
    fn test_effective_stay_untouched_dates_need_no_revalidation() {
        let update = UpdateBookingRequest {
            status: Some(BookingStatus::Cancelled),
            ..Default::default()
        };

        assert!(update.effective_stay(&stored_booking()).unwrap().is_none());
    }
}
