use serde::{Deserialize, Serialize};

use crate::models::slot::TimeSlot;

/// A recommended candidate slot and the roster members who cannot make it.
/// An empty list means the slot works for everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecommendation {
    pub slot: TimeSlot,
    #[serde(rename = "unavailableParticipants")]
    pub unavailable_participants: Vec<String>,
}

// Response structure for the find-common-slots endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(rename = "recommendedTimeSlots")]
    pub recommended_time_slots: Vec<SlotRecommendation>,
}
