use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::check_in::{CheckInRequest, CheckInResponse, CheckInSummaryResponse};
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/events/{id}/check-ins",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = CheckInRequest,
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Check-in recorded", body = CheckInResponse),
        (status = 403, description = "Not a check-in writer"),
        (status = 404, description = "Event or active registration not found")
    ),
    tag = "check-ins"
)]
pub async fn record_check_in(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CheckInRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let check_in = services::record(&state, &user, id, &req).await?;

    Ok((StatusCode::OK, Json(CheckInResponse::from(check_in))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/check-ins",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Check-ins recorded for the event", body = Vec<CheckInResponse>),
        (status = 403, description = "Requires a staff role")
    ),
    tag = "check-ins"
)]
pub async fn list_check_ins(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CheckInResponse>>, WebError> {
    let check_ins = services::list_for_event(&state, &user, id).await?;

    Ok(Json(check_ins.into_iter().map(CheckInResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/check-ins/summary",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Check-in progress buckets", body = CheckInSummaryResponse),
        (status = 403, description = "Requires a staff role")
    ),
    tag = "check-ins"
)]
pub async fn check_in_summary(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<CheckInSummaryResponse>, WebError> {
    let summary = services::summary(&state, &user, id).await?;

    Ok(Json(CheckInSummaryResponse::from(summary)))
}
