use chrono::Duration;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::event::Event;
use crate::models::participant::ParticipantAvailability;
use crate::models::slot::TimeSlot;
use crate::services::matcher::AvailabilityByParticipant;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("event {0} not found")]
    EventNotFound(String),
    #[error("no availability recorded for participant {participant_id} on event {event_id}")]
    AvailabilityNotFound {
        participant_id: String,
        event_id: String,
    },
    #[error("availability already recorded for participant {participant_id} on event {event_id}")]
    AvailabilityExists {
        participant_id: String,
        event_id: String,
    },
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Fields of an event supplied by a caller; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub slots: Vec<TimeSlot>,
    pub estimated_time: Duration,
    pub participants: Vec<String>,
}

/// Storage capabilities the HTTP handlers depend on.
#[cfg_attr(test, mockall::automock)]
pub trait AvailabilityStore: Send + Sync {
    fn create_event(&self, draft: EventDraft) -> Result<Event, StoreError>;

    fn get_event(&self, event_id: &str) -> Result<Option<Event>, StoreError>;

    /// Replaces title, slots and estimated time. The roster is left as is.
    fn update_event(
        &self,
        event_id: &str,
        title: String,
        slots: Vec<TimeSlot>,
        estimated_time: Duration,
    ) -> Result<Event, StoreError>;

    /// Deletes the event together with every availability record for it.
    fn delete_event(&self, event_id: &str) -> Result<(), StoreError>;

    fn create_availability(&self, record: ParticipantAvailability) -> Result<(), StoreError>;

    /// All availability records of one participant, ordered by event id.
    fn participant_availability(
        &self,
        participant_id: &str,
    ) -> Result<Vec<ParticipantAvailability>, StoreError>;

    fn update_availability(
        &self,
        participant_id: &str,
        event_id: &str,
        slots: Vec<TimeSlot>,
    ) -> Result<(), StoreError>;

    /// Removes the record and drops the participant from the event roster.
    fn delete_availability(&self, participant_id: &str, event_id: &str)
        -> Result<(), StoreError>;

    /// Event plus the availability of each roster member, read under one lock.
    fn matching_snapshot(
        &self,
        event_id: &str,
    ) -> Result<Option<(Event, AvailabilityByParticipant)>, StoreError>;
}

// Availability records are keyed by (participant_id, event_id)
type AvailabilityKey = (String, String);

#[derive(Default)]
struct StoreState {
    next_event_id: u64,
    events: HashMap<String, Event>,
    availability: BTreeMap<AvailabilityKey, Vec<TimeSlot>>,
}

// In-memory store shared by all request handlers
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, StoreError> {
        self.state.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, StoreError> {
        self.state.write().map_err(|_| StoreError::LockPoisoned)
    }
}

fn key(participant_id: &str, event_id: &str) -> AvailabilityKey {
    (participant_id.to_string(), event_id.to_string())
}

impl AvailabilityStore for InMemoryStore {
    fn create_event(&self, draft: EventDraft) -> Result<Event, StoreError> {
        let mut state = self.write()?;

        // Ids are never reused, even after the event is deleted
        state.next_event_id += 1;
        let event = Event {
            id: state.next_event_id.to_string(),
            title: draft.title,
            slots: draft.slots,
            estimated_time: draft.estimated_time,
            participants: draft.participants,
        };
        state.events.insert(event.id.clone(), event.clone());

        info!(
            "Stored event {} with {} slots and {} participants",
            event.id,
            event.slots.len(),
            event.participants.len()
        );
        Ok(event)
    }

    fn get_event(&self, event_id: &str) -> Result<Option<Event>, StoreError> {
        Ok(self.read()?.events.get(event_id).cloned())
    }

    fn update_event(
        &self,
        event_id: &str,
        title: String,
        slots: Vec<TimeSlot>,
        estimated_time: Duration,
    ) -> Result<Event, StoreError> {
        let mut state = self.write()?;
        let event = state
            .events
            .get_mut(event_id)
            .ok_or_else(|| StoreError::EventNotFound(event_id.to_string()))?;

        event.title = title;
        event.slots = slots;
        event.estimated_time = estimated_time;
        Ok(event.clone())
    }

    fn delete_event(&self, event_id: &str) -> Result<(), StoreError> {
        let mut state = self.write()?;
        if state.events.remove(event_id).is_none() {
            return Err(StoreError::EventNotFound(event_id.to_string()));
        }

        let before = state.availability.len();
        state
            .availability
            .retain(|(_, record_event_id), _| record_event_id != event_id);
        info!(
            "Deleted event {} and {} availability records",
            event_id,
            before - state.availability.len()
        );
        Ok(())
    }

    fn create_availability(&self, record: ParticipantAvailability) -> Result<(), StoreError> {
        let mut state = self.write()?;
        if !state.events.contains_key(&record.event_id) {
            return Err(StoreError::EventNotFound(record.event_id));
        }

        let key = (record.participant_id, record.event_id);
        if state.availability.contains_key(&key) {
            let (participant_id, event_id) = key;
            warn!(
                "Availability for participant {} on event {} already exists",
                participant_id, event_id
            );
            return Err(StoreError::AvailabilityExists {
                participant_id,
                event_id,
            });
        }

        state.availability.insert(key, record.slots);
        Ok(())
    }

    fn participant_availability(
        &self,
        participant_id: &str,
    ) -> Result<Vec<ParticipantAvailability>, StoreError> {
        let state = self.read()?;

        // Keys sort by participant first, so one participant's records are contiguous
        let records = state
            .availability
            .range(key(participant_id, "")..)
            .take_while(|((record_participant, _), _)| record_participant == participant_id)
            .map(|((participant_id, event_id), slots)| ParticipantAvailability {
                participant_id: participant_id.clone(),
                event_id: event_id.clone(),
                slots: slots.clone(),
            })
            .collect();
        Ok(records)
    }

    fn update_availability(
        &self,
        participant_id: &str,
        event_id: &str,
        slots: Vec<TimeSlot>,
    ) -> Result<(), StoreError> {
        let mut state = self.write()?;
        if !state.events.contains_key(event_id) {
            return Err(StoreError::EventNotFound(event_id.to_string()));
        }

        match state.availability.get_mut(&key(participant_id, event_id)) {
            Some(existing) => {
                *existing = slots;
                Ok(())
            }
            None => Err(StoreError::AvailabilityNotFound {
                participant_id: participant_id.to_string(),
                event_id: event_id.to_string(),
            }),
        }
    }

    fn delete_availability(
        &self,
        participant_id: &str,
        event_id: &str,
    ) -> Result<(), StoreError> {
        let mut state = self.write()?;
        let StoreState {
            events,
            availability,
            ..
        } = &mut *state;

        let event = events
            .get_mut(event_id)
            .ok_or_else(|| StoreError::EventNotFound(event_id.to_string()))?;

        if availability.remove(&key(participant_id, event_id)).is_none() {
            return Err(StoreError::AvailabilityNotFound {
                participant_id: participant_id.to_string(),
                event_id: event_id.to_string(),
            });
        }

        event.participants.retain(|id| id != participant_id);
        info!(
            "Removed participant {} and their availability from event {}",
            participant_id, event_id
        );
        Ok(())
    }

    fn matching_snapshot(
        &self,
        event_id: &str,
    ) -> Result<Option<(Event, AvailabilityByParticipant)>, StoreError> {
        let state = self.read()?;
        let Some(event) = state.events.get(event_id) else {
            return Ok(None);
        };

        let availability: AvailabilityByParticipant = event
            .participants
            .iter()
            .filter_map(|participant_id| {
                state
                    .availability
                    .get(&key(participant_id, event_id))
                    .map(|slots| (participant_id.clone(), slots.clone()))
            })
            .collect();

        Ok(Some((event.clone(), availability)))
    }
}

// Create the shared store used by the server
pub fn create_store() -> Arc<dyn AvailabilityStore> {
    Arc::new(InMemoryStore::new())
}
