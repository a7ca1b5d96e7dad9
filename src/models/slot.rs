use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Half-open interval `[start_time, end_time)` used both for candidate event
/// slots and for participant availability windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(alias = "start")]
    pub start_time: DateTime<Utc>,
    #[serde(alias = "end")]
    pub end_time: DateTime<Utc>,
}

impl TimeSlot {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Two slots overlap when their intersection is non-empty.
    /// Slots that only touch (`a.end_time == b.start_time`) do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start_time < other.end_time && self.end_time > other.start_time
    }

    pub fn is_well_formed(&self) -> bool {
        self.start_time < self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_overlap_partial_and_contained() {
        let slot = TimeSlot::new(at(10, 0), at(11, 0));

        assert!(slot.overlaps(&TimeSlot::new(at(10, 30), at(11, 30))));
        assert!(slot.overlaps(&TimeSlot::new(at(10, 15), at(10, 45))));
        assert!(slot.overlaps(&TimeSlot::new(at(9, 0), at(12, 0))));
    }

    #[test]
    fn test_touching_slots_do_not_overlap() {
        let slot = TimeSlot::new(at(10, 0), at(11, 0));

        assert!(!slot.overlaps(&TimeSlot::new(at(9, 0), at(10, 0))));
        assert!(!slot.overlaps(&TimeSlot::new(at(11, 0), at(12, 0))));
    }

    #[test]
    fn test_well_formed() {
        assert!(TimeSlot::new(at(10, 0), at(11, 0)).is_well_formed());
        assert!(!TimeSlot::new(at(10, 0), at(10, 0)).is_well_formed());
        assert!(!TimeSlot::new(at(11, 0), at(10, 0)).is_well_formed());
    }

    #[test]
    fn test_deserialize_accepts_short_field_names() {
        let slot: TimeSlot = serde_json::from_str(
            r#"{"start": "2025-04-01T10:00:00Z", "end": "2025-04-01T11:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(slot, TimeSlot::new(at(10, 0), at(11, 0)));
    }
}
