use crate::dtos::payment::{CreatePaymentRequest, PaymentResponse, UpdatePaymentRequest};
use crate::error::{ApiError, FieldError};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use database::services::booking::BookingService;
use database::services::payment::PaymentService;
use models::payment::PaymentStatus;
use rust_decimal::Decimal;
use uuid::Uuid;

fn validate_amount(amount: Decimal) -> Result<(), ApiError> {
    if amount <= Decimal::ZERO {
        return Err(ApiError::Validation(vec![FieldError {
            field: "amount".to_string(),
            message: "amount must be greater than zero".to_string(),
        }]));
    }

    Ok(())
}

/// List all payments
#[utoipa::path(
    get,
    path = "/payments",
    responses(
        (status = 200, description = "All payments", body = [PaymentResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payments"
)]
pub async fn get_payments(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentResponse>>, ApiError> {
    let payments = PaymentService::find_all(&state.db).await?;

    Ok(Json(
        payments.into_iter().map(PaymentResponse::from).collect(),
    ))
}

/// Get a specific payment by ID
#[utoipa::path(
    get,
    path = "/payments/{id}",
    params(("id" = Uuid, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment found", body = PaymentResponse),
        (status = 404, description = "Payment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payments"
)]
pub async fn get_payment_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaymentResponse>, ApiError> {
    let payment = PaymentService::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Payment"))?;

    Ok(Json(payment.into()))
}

/// Create a payment for an existing booking
#[utoipa::path(
    post,
    path = "/payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment created", body = PaymentResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Referenced booking not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payments"
)]
pub async fn create_payment(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<PaymentResponse>), ApiError> {
    validate_amount(payload.amount)?;

    BookingService::find_by_id(&state.db, payload.booking_id)
        .await?
        .ok_or(ApiError::NotFound("Booking"))?;

    let payment = PaymentService::create(&state.db, payload.into_new_payment()).await?;

    Ok((StatusCode::CREATED, Json(payment.into())))
}

/// Update a payment
#[utoipa::path(
    put,
    path = "/payments/{id}",
    params(("id" = Uuid, Path, description = "Payment ID")),
    request_body = UpdatePaymentRequest,
    responses(
        (status = 200, description = "Payment updated", body = PaymentResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Payment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payments"
)]
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePaymentRequest>,
) -> Result<Json<PaymentResponse>, ApiError> {
    if let Some(amount) = payload.amount {
        validate_amount(amount)?;
    }

    let payment = PaymentService::update(&state.db, id, payload.into_patch())
        .await?
        .ok_or(ApiError::NotFound("Payment"))?;

    Ok(Json(payment.into()))
}

/// Delete a payment
#[utoipa::path(
    delete,
    path = "/payments/{id}",
    params(("id" = Uuid, Path, description = "Payment ID")),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 404, description = "Payment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payments"
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if PaymentService::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Payment"))
    }
}

/// Run a payment through the external payment system. A gateway-reported
/// failure surfaces as a 400 carrying the gateway's message; only a
/// successful outcome is persisted.
#[utoipa::path(
    post,
    path = "/payments/{id}/process",
    params(("id" = Uuid, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment processed", body = PaymentResponse),
        (status = 400, description = "The payment system declined the payment"),
        (status = 404, description = "Payment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payments"
)]
pub async fn process_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaymentResponse>, ApiError> {
    let payment = PaymentService::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Payment"))?;

    let outcome = state
        .payments
        .process_payment(payment.amount, payment.method, payment.booking_id)
        .await;

    if !outcome.success {
        return Err(ApiError::Upstream(
            outcome
                .error
                .unwrap_or_else(|| "Payment processing failed".to_string()),
        ));
    }

    let status = outcome.status.unwrap_or(PaymentStatus::Completed);
    let payment = PaymentService::record_outcome(&state.db, id, status, outcome.transaction_id)
        .await?
        .ok_or(ApiError::NotFound("Payment"))?;

    Ok(Json(payment.into()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::payments::{PaymentGateway, PaymentOutcome};
    use async_trait::async_trait;
    use axum::Router;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use chrono::NaiveDate;
    use database::entities::payments;
    use http_body_util::BodyExt;
    use models::payment::PaymentMethod;
    use sea_orm::{DatabaseConnection, DatabaseBackend, MockDatabase};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct DecliningGateway;

    #[async_trait]
    impl PaymentGateway for DecliningGateway {
        async fn process_payment(
            &self,
            _amount: Decimal,
            _method: PaymentMethod,
            _booking_id: Uuid,
        ) -> PaymentOutcome {
            PaymentOutcome {
                success: false,
                transaction_id: None,
                status: Some(PaymentStatus::Failed),
                error: Some("Card declined".to_string()),
            }
        }
    }

    fn app(db: DatabaseConnection, gateway: Arc<dyn PaymentGateway>) -> Router {
        let state = AppState {
            db,
            payments: gateway,
        };

        Router::new()
            .route("/payments/{id}/process", post(process_payment))
            .with_state(state)
    }

    fn pending_payment(id: Uuid) -> payments::Model {
        let timestamp = NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        payments::Model {
            id,
            booking_id: Uuid::new_v4(),
            amount: Decimal::new(19900, 2),
            method: PaymentMethod::CreditCard,
            status: PaymentStatus::Pending,
            transaction_id: None,
            processed_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    async fn post_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap();

        (status, body)
    }

    #[tokio::test]
    async fn test_declined_payment_surfaces_gateway_error_as_400() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![pending_payment(id)]])
            .into_connection();

        let (status, body) = post_json(
            app(db, Arc::new(DecliningGateway)),
            &format!("/payments/{id}/process"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Card declined");
    }

    #[tokio::test]
    async fn test_successful_payment_persists_the_outcome() {
        let id = Uuid::new_v4();
        let mut processed = pending_payment(id);
        processed.status = PaymentStatus::Completed;
        processed.transaction_id = Some("txn_test".to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // process_payment lookup, record_outcome lookup, update result
            .append_query_results([vec![pending_payment(id)]])
            .append_query_results([vec![pending_payment(id)]])
            .append_query_results([vec![processed]])
            .into_connection();

        let (status, body) = post_json(
            app(db, Arc::new(crate::payments::SandboxGateway)),
            &format!("/payments/{id}/process"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Completed");
        assert_eq!(body["transactionId"], "txn_test");
    }
}
