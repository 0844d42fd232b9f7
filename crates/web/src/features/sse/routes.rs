use axum::{Router, routing::get};

use crate::state::AppState;

use super::handlers::event_stream;

/// Event-scoped live-update route, merged under /events.
pub fn routes() -> Router<AppState> {
    Router::new().route("/:id/sse", get(event_stream))
}
