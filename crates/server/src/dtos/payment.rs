use chrono::NaiveDateTime;
use database::entities::payments;
use database::services::payment::{NewPayment, PaymentPatch};
use models::payment::{PaymentMethod, PaymentStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub booking_id: Uuid,
    pub amount: Decimal,
    #[schema(value_type = String)]
    pub method: PaymentMethod,
    #[schema(value_type = Option<String>)]
    pub status: Option<PaymentStatus>,
}

impl CreatePaymentRequest {
    pub fn into_new_payment(self) -> NewPayment {
        NewPayment {
            booking_id: self.booking_id,
            amount: self.amount,
            method: self.method,
            status: self.status.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    pub amount: Option<Decimal>,
    #[schema(value_type = Option<String>)]
    pub method: Option<PaymentMethod>,
    #[schema(value_type = Option<String>)]
    pub status: Option<PaymentStatus>,
}

impl UpdatePaymentRequest {
    pub fn into_patch(self) -> PaymentPatch {
        PaymentPatch {
            amount: self.amount,
            method: self.method,
            status: self.status,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: String,
    pub booking_id: String,
    pub amount: Decimal,
    #[schema(value_type = String)]
    pub method: PaymentMethod,
    #[schema(value_type = String)]
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub processed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<payments::Model> for PaymentResponse {
    fn from(payment: payments::Model) -> Self {
        Self {
            id: payment.id.to_string(),
            booking_id: payment.booking_id.to_string(),
            amount: payment.amount,
            method: payment.method,
            status: payment.status,
            transaction_id: payment.transaction_id,
            processed_at: payment.processed_at,
            created_at: payment.created_at,
            updated_at: payment.updated_at,
        }
    }
}
