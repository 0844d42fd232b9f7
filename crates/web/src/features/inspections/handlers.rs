use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::inspection::{
    InspectionHistoryQuery, InspectionHistoryResponse, InspectionListQuery, InspectionRequest,
    InspectionResponse,
};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/technical-inspections",
    request_body = InspectionRequest,
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Inspection recorded", body = InspectionResponse),
        (status = 403, description = "Only technical inspectors may record inspections"),
        (status = 404, description = "Event not found")
    ),
    tag = "technical-inspections"
)]
pub async fn record_inspection(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<InspectionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let inspection = services::record(&state, &user, &req).await?;

    Ok((StatusCode::OK, Json(InspectionResponse::from(inspection))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/technical-inspections",
    params(InspectionListQuery),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Inspections for the event", body = Vec<InspectionResponse>),
        (status = 403, description = "Requires a staff role")
    ),
    tag = "technical-inspections"
)]
pub async fn list_inspections(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<InspectionListQuery>,
) -> Result<Json<Vec<InspectionResponse>>, WebError> {
    let inspections = services::list_for_event(&state, &user, query.event_id).await?;

    Ok(Json(
        inspections.into_iter().map(InspectionResponse::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/technical-inspections/history",
    params(InspectionHistoryQuery),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Cross-event history for the vehicle", body = InspectionHistoryResponse),
        (status = 400, description = "Neither chassis nor plate given")
    ),
    tag = "technical-inspections"
)]
pub async fn inspection_history(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<InspectionHistoryQuery>,
) -> Result<Json<InspectionHistoryResponse>, WebError> {
    let history = services::history(&state, &user, &query).await?;

    Ok(Json(InspectionHistoryResponse::from(history)))
}
