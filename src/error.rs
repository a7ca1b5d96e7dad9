use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::common::MessageResponse;
use crate::services::store::StoreError;

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input")]
    InvalidInput(String),
    #[error("Event not found")]
    EventNotFound,
    #[error("Participant not found")]
    ParticipantNotFound,
    #[error("Participant or event not found")]
    AvailabilityNotFound,
    #[error("This availability has already been recorded")]
    AvailabilityExists,
    #[error("Internal server error")]
    Store(#[source] StoreError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::EventNotFound
            | AppError::ParticipantNotFound
            | AppError::AvailabilityNotFound => StatusCode::NOT_FOUND,
            AppError::AvailabilityExists => StatusCode::CONFLICT,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EventNotFound(_) => AppError::EventNotFound,
            StoreError::AvailabilityNotFound { .. } => AppError::AvailabilityNotFound,
            StoreError::AvailabilityExists { .. } => AppError::AvailabilityExists,
            StoreError::LockPoisoned => AppError::Store(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::InvalidInput(detail) => warn!("Rejected request: {}", detail),
            AppError::Store(source) => error!("Store failure: {}", source),
            other => warn!("Request failed: {}", other),
        }

        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
