use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::handlers::{check_in_summary, list_check_ins, record_check_in};

/// Event-scoped check-in routes, merged under /events.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/:id/check-ins", post(record_check_in))
        .route("/:id/check-ins", get(list_check_ins))
        .route("/:id/check-ins/summary", get(check_in_summary))
}
