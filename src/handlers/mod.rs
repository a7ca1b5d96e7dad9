use std::sync::Arc;

use crate::error::AppError;
use crate::models::slot::TimeSlot;
use crate::services::store::AvailabilityStore;

pub mod availability;
pub mod events;
pub mod health;

// AppState struct containing shared resources
pub struct AppState {
    pub store: Arc<dyn AvailabilityStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AvailabilityStore>) -> Self {
        Self { store }
    }
}

// Rejects slots whose start is not strictly before their end
pub(crate) fn validate_slots(slots: &[TimeSlot]) -> Result<(), AppError> {
    match slots.iter().position(|slot| !slot.is_well_formed()) {
        Some(index) => Err(AppError::InvalidInput(format!(
            "slot {} must start before it ends",
            index
        ))),
        None => Ok(()),
    }
}
