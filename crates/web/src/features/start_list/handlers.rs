use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use storage::dto::start_list::{ExportRequest, StartListResponse};
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events/{id}/startlist",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Start list with readiness stats", body = StartListResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "start-list"
)]
pub async fn get_start_list(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<StartListResponse>, WebError> {
    let start_list = services::build(&state, &user, id).await?;

    Ok(Json(start_list))
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/startlist/export",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = ExportRequest,
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Rendered start list (csv or html)"),
        (status = 400, description = "Unknown export format")
    ),
    tag = "start-list"
)]
pub async fn export_start_list(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ExportRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let start_list = services::build(&state, &user, id).await?;

    let response = match req.format.as_str() {
        "csv" => {
            let body = services::render_csv(&start_list)?;
            (
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"startlist-{id}.csv\""),
                    ),
                ],
                body,
            )
                .into_response()
        }
        _ => {
            let body = services::render_html(&start_list);
            (
                [(header::CONTENT_TYPE, "text/html; charset=utf-8".to_string())],
                body,
            )
                .into_response()
        }
    };

    Ok(response)
}
