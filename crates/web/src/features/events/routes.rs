use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::features::{check_in, registrations, sse, start_list, weight};
use crate::state::AppState;

use super::handlers::{
    create_event, delete_event, get_event, list_classes, list_events, publish_event,
    replace_classes, review_event, submit_event, update_event,
};

/// Event routes plus the event-scoped processing sub-resources.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events))
        .route("/", post(create_event))
        .route("/:id", get(get_event))
        .route("/:id", put(update_event))
        .route("/:id", delete(delete_event))
        .route("/:id/approval", post(submit_event))
        .route("/:id/approval", put(review_event))
        .route("/:id/publish", post(publish_event))
        .route("/:id/classes", get(list_classes))
        .route("/:id/classes", put(replace_classes))
        .merge(registrations::routes::event_routes())
        .merge(check_in::routes::routes())
        .merge(weight::routes::routes())
        .merge(start_list::routes::routes())
        .merge(sse::routes::routes())
}
