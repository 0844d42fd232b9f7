use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::handlers::{create_club_class, list_club_classes, list_global_classes};

/// Routes nested under /classes.
pub fn global_routes() -> Router<AppState> {
    Router::new().route("/", get(list_global_classes))
}

/// Routes nested under /clubs.
pub fn club_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/classes", get(list_club_classes))
        .route("/:id/classes", post(create_club_class))
}
