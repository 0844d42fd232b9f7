use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

use super::handlers::{create_vehicle, delete_vehicle, list_vehicles, update_vehicle};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/", post(create_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
}
