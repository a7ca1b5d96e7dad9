use serde::{Deserialize, Serialize};

use crate::models::slot::TimeSlot;

/// When one participant is free for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantAvailability {
    pub participant_id: String,
    pub event_id: String,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAvailabilityRequest {
    pub participant_id: String,
    pub event_id: String,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub event_id: String,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}
