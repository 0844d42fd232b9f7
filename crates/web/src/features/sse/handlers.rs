use axum::{
    extract::{Path, State},
    response::sse::{Event as SseEvent, KeepAlive, Sse},
};
use futures::Stream;
use std::convert::Infallible;
use tokio_stream::{StreamExt, wrappers::BroadcastStream};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::WebError;
use crate::features::events;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/events/{id}/sse",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "text/event-stream of processing updates for the event"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn event_stream(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Sse<impl Stream<Item = Result<SseEvent, Infallible>>>, WebError> {
    // Subscribing follows the event's visibility.
    events::services::get_event(&state, &user, id).await?;

    let receiver = state.notifier.subscribe();
    let stream = BroadcastStream::new(receiver).filter_map(move |message| match message {
        Ok(update) if update.event_id == id => {
            let data = serde_json::to_string(&update).unwrap_or_default();
            Some(Ok(SseEvent::default().event(update.kind.clone()).data(data)))
        }
        // Other events' updates are skipped; a lagging subscriber just
        // misses frames.
        _ => None,
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
