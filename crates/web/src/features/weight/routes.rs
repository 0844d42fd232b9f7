use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::handlers::{list_weight_limits, record_weight, replace_weight_limits, weight_board};

/// Event-scoped weight-control routes, merged under /events.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/:id/weight-control", get(weight_board))
        .route("/:id/weight-control", post(record_weight))
        .route("/:id/weight-limits", get(list_weight_limits))
        .route("/:id/weight-limits", put(replace_weight_limits))
}
