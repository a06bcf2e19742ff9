use crate::entities::payments;
use chrono::Utc;
use models::payment::{PaymentMethod, PaymentStatus};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
};
use uuid::Uuid;

/// Attributes for a new payment
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub booking_id: Uuid,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
}

/// Partial payment update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct PaymentPatch {
    pub amount: Option<Decimal>,
    pub method: Option<PaymentMethod>,
    pub status: Option<PaymentStatus>,
}

pub struct PaymentService;

impl PaymentService {
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<payments::Model>, DbErr> {
        payments::Entity::find().all(db).await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<payments::Model>, DbErr> {
        payments::Entity::find_by_id(id).one(db).await
    }

    pub async fn create(
        db: &DatabaseConnection,
        new_payment: NewPayment,
    ) -> Result<payments::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let payment = payments::ActiveModel {
            id: Set(Uuid::new_v4()),
            booking_id: Set(new_payment.booking_id),
            amount: Set(new_payment.amount),
            method: Set(new_payment.method),
            status: Set(new_payment.status),
            transaction_id: Set(None),
            processed_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        payment.insert(db).await
    }

    /// Apply a partial update; returns `None` when the payment does not exist
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        patch: PaymentPatch,
    ) -> Result<Option<payments::Model>, DbErr> {
        let Some(existing) = payments::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut payment = existing.into_active_model();

        if let Some(amount) = patch.amount {
            payment.amount = Set(amount);
        }
        if let Some(method) = patch.method {
            payment.method = Set(method);
        }
        if let Some(status) = patch.status {
            payment.status = Set(status);
        }
        payment.updated_at = Set(Utc::now().naive_utc());

        payment.update(db).await.map(Some)
    }

    /// Persist the outcome reported by the payment system for a processed
    /// payment; returns `None` when the payment does not exist
    pub async fn record_outcome(
        db: &DatabaseConnection,
        id: Uuid,
        status: PaymentStatus,
        transaction_id: Option<String>,
    ) -> Result<Option<payments::Model>, DbErr> {
        let Some(existing) = payments::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let now = Utc::now().naive_utc();
        let mut payment = existing.into_active_model();
        payment.status = Set(status);
        payment.transaction_id = Set(transaction_id);
        payment.processed_at = Set(Some(now));
        payment.updated_at = Set(now);

        payment.update(db).await.map(Some)
    }

    /// Returns `false` when the payment does not exist
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        let result = payments::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
