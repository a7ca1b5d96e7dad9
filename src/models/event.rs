use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::models::slot::TimeSlot;

/// Event being scheduled: its candidate slots and the roster whose
/// availability is checked against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub slots: Vec<TimeSlot>,
    // Informational only, never used for matching
    #[serde(rename = "estimatedTime", with = "duration_secs")]
    pub estimated_time: Duration,
    pub participants: Vec<String>,
}

// Request body for creating an event. The id is always assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
    #[serde(rename = "estimatedTime", default = "zero_duration", with = "duration_secs")]
    pub estimated_time: Duration,
    #[serde(default)]
    pub participants: Vec<String>,
}

// Request body for updating an event. The roster is not replaced by updates.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
    #[serde(rename = "estimatedTime", default = "zero_duration", with = "duration_secs")]
    pub estimated_time: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub id: String,
    pub message: String,
}

fn zero_duration() -> Duration {
    Duration::zero()
}

/// Removes repeated participant ids, keeping the first occurrence of each.
pub fn dedup_roster(participants: Vec<String>) -> Vec<String> {
    let mut roster: Vec<String> = Vec::with_capacity(participants.len());
    for participant in participants {
        if !roster.contains(&participant) {
            roster.push(participant);
        }
    }
    roster
}

/// Serializes a `chrono::Duration` as a whole number of seconds.
pub mod duration_secs {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(duration.num_seconds())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = i64::deserialize(deserializer)?;
        Duration::try_seconds(seconds)
            .ok_or_else(|| serde::de::Error::custom("estimatedTime is out of range"))
    }
}
