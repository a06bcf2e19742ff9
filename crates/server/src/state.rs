use crate::payments::PaymentGateway;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared application state, assembled once at startup. Collaborators are
/// injected here rather than constructed inside handlers so tests can
/// substitute them.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub payments: Arc<dyn PaymentGateway>,
}
