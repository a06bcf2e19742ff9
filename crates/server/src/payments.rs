use async_trait::async_trait;
use log::info;
use models::payment::{PaymentMethod, PaymentStatus};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Outcome reported by the external payment system
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    pub success: bool,
    pub transaction_id: Option<String>,
    pub status: Option<PaymentStatus>,
    pub error: Option<String>,
}

/// External payment-processing collaborator, injected at the composition
/// root. Integration with a real gateway lives behind this seam.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn process_payment(
        &self,
        amount: Decimal,
        method: PaymentMethod,
        booking_id: Uuid,
    ) -> PaymentOutcome;
}

/// Development gateway that approves every charge with a synthetic
/// transaction id
pub struct SandboxGateway;

#[async_trait]
impl PaymentGateway for SandboxGateway {
    async fn process_payment(
        &self,
        amount: Decimal,
        method: PaymentMethod,
        booking_id: Uuid,
    ) -> PaymentOutcome {
        info!("sandbox charge of {amount} via {method} for booking {booking_id}");

        PaymentOutcome {
            success: true,
            transaction_id: Some(format!("txn_{}", Uuid::new_v4().simple())),
            status: Some(PaymentStatus::Completed),
            error: None,
        }
    }
}
