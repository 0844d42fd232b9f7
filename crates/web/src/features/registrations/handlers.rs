use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::registration::{
    CreateRegistrationRequest, EventRegistrationResponse, RegistrationResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/events/{id}/registrations",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = CreateRegistrationRequest,
    security(("session_token" = [])),
    responses(
        (status = 201, description = "Registration created", body = RegistrationResponse),
        (status = 400, description = "Invalid class or missing required vehicle"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Not open, window closed, full, duplicate entry or start number taken")
    ),
    tag = "registrations"
)]
pub async fn create_registration(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let registration = services::register(&state, &user, id, &req).await?;

    Ok((StatusCode::CREATED, Json(registration)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/registrations",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Active entries for the event", body = Vec<EventRegistrationResponse>),
        (status = 403, description = "Requires a staff role")
    ),
    tag = "registrations"
)]
pub async fn list_for_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<EventRegistrationResponse>>, WebError> {
    let entries = services::list_for_event(&state, &user, id).await?;

    Ok(Json(entries))
}

#[utoipa::path(
    delete,
    path = "/api/registrations/{id}",
    params(("id" = Uuid, Path, description = "Registration id")),
    security(("session_token" = [])),
    responses(
        (status = 204, description = "Registration cancelled"),
        (status = 403, description = "Not the owner or club admin"),
        (status = 404, description = "Registration not found"),
        (status = 409, description = "Already cancelled")
    ),
    tag = "registrations"
)]
pub async fn cancel(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::cancel(&state, &user, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
