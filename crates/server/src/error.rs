use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// A single field-level validation failure
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Request-terminal error taxonomy. Every handler translates failures into
/// one of these at its own boundary; nothing propagates uncaught to the
/// transport layer, and no failure is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    MissingParameter(String),
    #[error("{0}")]
    InvalidDateRange(String),
    #[error("Email already exists")]
    DuplicateEmail,
    /// The external payment system reported a failure; its message is
    /// surfaced as a 400, not a 500
    #[error("{0}")]
    Upstream(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::MissingParameter(_)
            | Self::InvalidDateRange(_)
            | Self::DuplicateEmail
            | Self::Upstream(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("request failed: {self}");
        }

        let body = match &self {
            Self::Validation(errors) => json!({ "errors": errors }),
            other => json!({ "message": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();

        Self::Validation(fields)
    }
}
