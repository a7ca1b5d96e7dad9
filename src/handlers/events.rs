use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::info;

use crate::error::AppError;
use crate::handlers::{validate_slots, AppState};
use crate::models::common::MessageResponse;
use crate::models::event::{
    dedup_roster, CreateEventRequest, CreateEventResponse, Event, UpdateEventRequest,
};
use crate::models::recommendation::AvailabilityResponse;
use crate::services::matcher::recommend;
use crate::services::store::EventDraft;

fn validate_estimated_time(estimated_time: &chrono::Duration) -> Result<(), AppError> {
    if *estimated_time < chrono::Duration::zero() {
        return Err(AppError::InvalidInput(
            "estimatedTime must not be negative".to_string(),
        ));
    }
    Ok(())
}

// Create event endpoint
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateEventResponse>), AppError> {
    let Json(request) = payload?;
    validate_slots(&request.slots)?;
    validate_estimated_time(&request.estimated_time)?;

    info!(
        "Received request to create event '{}' with {} slots",
        request.title,
        request.slots.len()
    );

    let event = state.store.create_event(EventDraft {
        title: request.title,
        slots: request.slots,
        estimated_time: request.estimated_time,
        participants: dedup_roster(request.participants),
    })?;

    info!("Successfully created event {}", event.id);
    Ok((
        StatusCode::CREATED,
        Json(CreateEventResponse {
            message: format!("Event created successfully with ID: {}", event.id),
            id: event.id,
        }),
    ))
}

// Get event endpoint
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<Event>, AppError> {
    info!("Received request to get event {}", event_id);

    state
        .store
        .get_event(&event_id)?
        .map(Json)
        .ok_or(AppError::EventNotFound)
}

// Update event endpoint
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    payload: Result<Json<UpdateEventRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload?;
    validate_slots(&request.slots)?;
    validate_estimated_time(&request.estimated_time)?;

    info!("Received request to update event {}", event_id);

    state.store.update_event(
        &event_id,
        request.title,
        request.slots,
        request.estimated_time,
    )?;

    info!("Successfully updated event {}", event_id);
    Ok(Json(MessageResponse::new("Event updated successfully")))
}

// Delete event endpoint
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<StatusCode, AppError> {
    info!("Received request to delete event {}", event_id);

    state.store.delete_event(&event_id)?;

    info!("Successfully deleted event {}", event_id);
    Ok(StatusCode::NO_CONTENT)
}

// Recommend the candidate slots that work for the most participants
pub async fn find_common_slots(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    info!("Received request to find common slots for event {}", event_id);

    let (event, availability) = state
        .store
        .matching_snapshot(&event_id)?
        .ok_or(AppError::EventNotFound)?;

    let recommended_time_slots = recommend(&event, &availability);

    info!(
        "Recommending {} of {} slots for event {}",
        recommended_time_slots.len(),
        event.slots.len(),
        event_id
    );
    Ok(Json(AvailabilityResponse {
        recommended_time_slots,
    }))
}
