use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::handlers::availability::{
    create_availability, delete_availability, get_availability, update_availability,
};
use crate::handlers::events::{
    create_event, delete_event, find_common_slots, get_event, update_event,
};
use crate::handlers::health::health_check;
use crate::handlers::AppState;

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let event_routes = Router::new()
        .route("/event", post(create_event))
        .route("/events/:id", get(get_event))
        .route("/event/:id", put(update_event).delete(delete_event))
        .route("/event/:id/find-common-slots", get(find_common_slots));

    let availability_routes = Router::new()
        .route("/participant", post(create_availability))
        .route(
            "/participant/:participant_id",
            get(get_availability).put(update_availability),
        )
        .route(
            "/participant/:participant_id/event/:event_id",
            delete(delete_availability),
        );

    Router::new()
        .route("/health", get(health_check))
        .merge(event_routes)
        .merge(availability_routes)
        .with_state(app_state)
}
