use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::weight::{
    ReplaceWeightLimitsRequest, WeightBoardEntryResponse, WeightControlRequest,
    WeightControlResponse, WeightLimitResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events/{id}/weight-control",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Scale-eligible participants with readings", body = Vec<WeightBoardEntryResponse>),
        (status = 403, description = "Requires a staff role")
    ),
    tag = "weight-control"
)]
pub async fn weight_board(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<WeightBoardEntryResponse>>, WebError> {
    let board = services::board(&state, &user, id).await?;

    Ok(Json(board))
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/weight-control",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = WeightControlRequest,
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Reading recorded", body = WeightControlResponse),
        (status = 403, description = "Only weight controllers may record readings"),
        (status = 409, description = "Participant is not cleared for the scale")
    ),
    tag = "weight-control"
)]
pub async fn record_weight(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<WeightControlRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let control = services::record(&state, &user, id, &req).await?;

    Ok((StatusCode::OK, Json(WeightControlResponse::from(control))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/weight-limits",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Weight bands per class", body = Vec<WeightLimitResponse>),
        (status = 403, description = "Requires a staff role")
    ),
    tag = "weight-control"
)]
pub async fn list_weight_limits(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<WeightLimitResponse>>, WebError> {
    let limits = services::list_limits(&state, &user, id).await?;

    Ok(Json(limits.into_iter().map(WeightLimitResponse::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}/weight-limits",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = ReplaceWeightLimitsRequest,
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Weight bands replaced", body = Vec<WeightLimitResponse>),
        (status = 400, description = "A class does not belong to this event")
    ),
    tag = "weight-control"
)]
pub async fn replace_weight_limits(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ReplaceWeightLimitsRequest>,
) -> Result<Json<Vec<WeightLimitResponse>>, WebError> {
    req.validate()?;

    let limits = services::replace_limits(&state, &user, id, &req).await?;

    Ok(Json(limits.into_iter().map(WeightLimitResponse::from).collect()))
}
