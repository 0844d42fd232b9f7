use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::handlers::{cancel, create_registration, list_for_event};

/// Event-scoped entry routes, merged under /events.
pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/registrations", post(create_registration))
        .route("/:id/registrations", get(list_for_event))
}

/// Top-level registration routes.
pub fn registration_routes() -> Router<AppState> {
    Router::new().route("/:id", delete(cancel))
}
