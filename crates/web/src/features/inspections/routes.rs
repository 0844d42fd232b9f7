use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::handlers::{inspection_history, list_inspections, record_inspection};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inspections))
        .route("/", post(record_inspection))
        .route("/history", get(inspection_history))
}
