use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::handlers::{export_start_list, get_start_list};

/// Event-scoped start-list routes, merged under /events.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/:id/startlist", get(get_start_list))
        .route("/:id/startlist/export", post(export_start_list))
}
