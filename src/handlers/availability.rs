use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use std::sync::Arc;
use tracing::info;

use crate::error::AppError;
use crate::handlers::{validate_slots, AppState};
use crate::models::common::MessageResponse;
use crate::models::participant::{
    CreateAvailabilityRequest, ParticipantAvailability, UpdateAvailabilityRequest,
};

// Record a participant's availability for an event
pub async fn create_availability(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAvailabilityRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload?;
    validate_slots(&request.slots)?;

    info!(
        "Received availability from participant {} for event {} ({} slots)",
        request.participant_id,
        request.event_id,
        request.slots.len()
    );

    state.store.create_availability(ParticipantAvailability {
        participant_id: request.participant_id,
        event_id: request.event_id,
        slots: request.slots,
    })?;

    Ok(Json(MessageResponse::new("Availability created successfully")))
}

// List every availability record of a participant
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Path(participant_id): Path<String>,
) -> Result<Json<Vec<ParticipantAvailability>>, AppError> {
    info!(
        "Received request to get availability of participant {}",
        participant_id
    );

    let records = state.store.participant_availability(&participant_id)?;
    if records.is_empty() {
        return Err(AppError::ParticipantNotFound);
    }

    Ok(Json(records))
}

// Replace a participant's availability for an event
pub async fn update_availability(
    State(state): State<Arc<AppState>>,
    Path(participant_id): Path<String>,
    payload: Result<Json<UpdateAvailabilityRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload?;
    validate_slots(&request.slots)?;

    info!(
        "Received request to update availability of participant {} for event {}",
        participant_id, request.event_id
    );

    state
        .store
        .update_availability(&participant_id, &request.event_id, request.slots)?;

    Ok(Json(MessageResponse::new("Availability updated successfully")))
}

// Remove a participant's availability and drop them from the event roster
pub async fn delete_availability(
    State(state): State<Arc<AppState>>,
    Path((participant_id, event_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    info!(
        "Received request to delete availability of participant {} for event {}",
        participant_id, event_id
    );

    state.store.delete_availability(&participant_id, &event_id)?;

    Ok(Json(MessageResponse::new(
        "All slots for this event deleted successfully",
    )))
}
