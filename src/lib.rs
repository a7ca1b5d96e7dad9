//! Meeting Slot Service
//!
//! Helps a group pick a meeting time. Events carry candidate time slots and a
//! roster of participants, participants declare when they are free, and the
//! service recommends the candidate slots that work for everyone or, failing
//! that, for as many participants as possible.
//!
//! # Modules
//!
//! - `services::matcher`: the availability matcher (overlap test and ranking)
//! - `services::store`: lock-guarded in-memory storage behind a trait
//! - `handlers` / `routes`: the axum HTTP API around the two
//! - `config`: server settings read from the environment

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


// Re-export the main API types for ease of use
pub use config::ServerConfig;
pub use handlers::AppState;
pub use models::recommendation::SlotRecommendation;
pub use models::slot::TimeSlot;
pub use routes::create_router;
pub use services::matcher::{is_available, recommend};
pub use services::store::{AvailabilityStore, InMemoryStore};
