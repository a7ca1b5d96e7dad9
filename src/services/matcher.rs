use std::collections::HashMap;
use tracing::debug;

use crate::models::event::Event;
use crate::models::recommendation::SlotRecommendation;
use crate::models::slot::TimeSlot;

/// Availability of each roster member for a single event, keyed by participant id.
/// Roster members without an entry have declared no availability.
pub type AvailabilityByParticipant = HashMap<String, Vec<TimeSlot>>;

// Checks if any of the participant's free windows overlaps the candidate slot
pub fn is_available(candidate: &TimeSlot, availability: &[TimeSlot]) -> bool {
    availability.iter().any(|free| candidate.overlaps(free))
}

/// Recommend candidate slots for an event.
///
/// Slots that work for the whole roster are returned on their own, with empty
/// unavailable lists, and every other slot is dropped. When no such slot
/// exists, all slots tied for the highest number of available participants
/// are returned together with the participants who cannot attend. Output
/// follows the event's slot order, and unavailable participants follow roster
/// order.
pub fn recommend(
    event: &Event,
    availability: &AvailabilityByParticipant,
) -> Vec<SlotRecommendation> {
    if event.slots.is_empty() {
        debug!("Event {} has no candidate slots", event.id);
        return Vec::new();
    }

    let no_availability: &[TimeSlot] = &[];

    // Unavailable roster members per candidate slot, computed once so the
    // counting and the attribution below cannot disagree
    let coverage: Vec<(&TimeSlot, Vec<&String>)> = event
        .slots
        .iter()
        .map(|slot| {
            let unavailable = event
                .participants
                .iter()
                .filter(|participant| {
                    let free = availability
                        .get(participant.as_str())
                        .map_or(no_availability, Vec::as_slice);
                    !is_available(slot, free)
                })
                .collect();
            (slot, unavailable)
        })
        .collect();

    let universal: Vec<SlotRecommendation> = coverage
        .iter()
        .filter(|(_, unavailable)| unavailable.is_empty())
        .map(|(slot, _)| SlotRecommendation {
            slot: **slot,
            unavailable_participants: Vec::new(),
        })
        .collect();

    if !universal.is_empty() {
        debug!(
            "Event {}: {} of {} slots work for all {} participants",
            event.id,
            universal.len(),
            event.slots.len(),
            event.participants.len()
        );
        return universal;
    }

    // Fewest unavailable is the same as most available, the roster is fixed
    let fewest_unavailable = coverage
        .iter()
        .map(|(_, unavailable)| unavailable.len())
        .min()
        .unwrap_or_default();

    debug!(
        "Event {}: no slot works for everyone, best slots reach {} of {} participants",
        event.id,
        event.participants.len() - fewest_unavailable,
        event.participants.len()
    );

    coverage
        .into_iter()
        .filter(|(_, unavailable)| unavailable.len() == fewest_unavailable)
        .map(|(slot, unavailable)| SlotRecommendation {
            slot: *slot,
            unavailable_participants: unavailable.into_iter().cloned().collect(),
        })
        .collect()
}
