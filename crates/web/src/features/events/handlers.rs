use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::dto::class::{EventClassResponse, ReplaceEventClassesRequest};
use storage::dto::event::{
    CreateEventRequest, EventResponse, ReviewRequest, UpdateEventRequest,
};
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
pub struct EventListQuery {
    /// Restrict to events awaiting federation review.
    #[serde(default)]
    pub pending_review: bool,
}

#[utoipa::path(
    get,
    path = "/api/events",
    params(EventListQuery),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Events visible to the caller", body = Vec<EventResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<EventListQuery>,
) -> Result<Json<Vec<EventResponse>>, WebError> {
    let events = services::list_events(&state, &user, query.pending_review).await?;

    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::get_event(&state, &user, id).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(("session_token" = [])),
    responses(
        (status = 201, description = "Event created as DRAFT", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not a club admin")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_dates()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let event = services::create_event(&state, &user, &req).await?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(event))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = UpdateEventRequest,
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 403, description = "Not the owning club's admin"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Event is not editable in its current status")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::update_event(&state, &user, id, &req).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("session_token" = [])),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Only DRAFT or REJECTED events can be deleted")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_event(&state, &user, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/approval",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Event submitted for review", body = EventResponse),
        (status = 409, description = "Event is not in a submittable status")
    ),
    tag = "events"
)]
pub async fn submit_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::submit_event(&state, &user, id).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{id}/approval",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = ReviewRequest,
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Review recorded", body = EventResponse),
        (status = 400, description = "Missing rejection reason"),
        (status = 403, description = "Not a federation reviewer"),
        (status = 409, description = "Event is not awaiting review")
    ),
    tag = "events"
)]
pub async fn review_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::review_event(&state, &user, id, &req).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/publish",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Event published, registration open", body = EventResponse),
        (status = 409, description = "Only APPROVED events can be published")
    ),
    tag = "events"
)]
pub async fn publish_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::publish_event(&state, &user, id).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/classes",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Classes attached to the event", body = Vec<EventClassResponse>),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn list_classes(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<EventClassResponse>>, WebError> {
    let classes = services::list_classes(&state, &user, id).await?;

    Ok(Json(classes.into_iter().map(EventClassResponse::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}/classes",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = ReplaceEventClassesRequest,
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Class set replaced", body = Vec<EventClassResponse>),
        (status = 409, description = "Duplicate class name or class still in use")
    ),
    tag = "events"
)]
pub async fn replace_classes(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ReplaceEventClassesRequest>,
) -> Result<Json<Vec<EventClassResponse>>, WebError> {
    req.validate()?;

    let classes = services::replace_classes(&state, &user, id, &req).await?;

    Ok(Json(classes.into_iter().map(EventClassResponse::from).collect()))
}
