use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::class::{ClassSpec, ClubClassResponse, GlobalClassResponse};
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/classes",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "System-wide class templates", body = Vec<GlobalClassResponse>)
    ),
    tag = "classes"
)]
pub async fn list_global_classes(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<Vec<GlobalClassResponse>>, WebError> {
    let classes = services::list_global(&state).await?;

    Ok(Json(classes.into_iter().map(GlobalClassResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/clubs/{id}/classes",
    params(("id" = Uuid, Path, description = "Club id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "The club's class templates", body = Vec<ClubClassResponse>),
        (status = 404, description = "Club not found")
    ),
    tag = "classes"
)]
pub async fn list_club_classes(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ClubClassResponse>>, WebError> {
    let classes = services::list_for_club(&state, id).await?;

    Ok(Json(classes.into_iter().map(ClubClassResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/clubs/{id}/classes",
    params(("id" = Uuid, Path, description = "Club id")),
    request_body = ClassSpec,
    security(("session_token" = [])),
    responses(
        (status = 201, description = "Class template created", body = ClubClassResponse),
        (status = 403, description = "Not the club's admin"),
        (status = 409, description = "Class name already exists in this club")
    ),
    tag = "classes"
)]
pub async fn create_club_class(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(spec): Json<ClassSpec>,
) -> Result<Response, WebError> {
    spec.validate()?;

    let class = services::create_club_class(&state, &user, id, &spec).await?;

    Ok((StatusCode::CREATED, Json(ClubClassResponse::from(class))).into_response())
}
