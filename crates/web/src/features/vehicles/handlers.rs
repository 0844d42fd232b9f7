use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/vehicles",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "The caller's garage", body = Vec<VehicleResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "vehicles"
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<VehicleResponse>>, WebError> {
    let vehicles = services::list(&state, &user).await?;

    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/vehicles",
    request_body = CreateVehicleRequest,
    security(("session_token" = [])),
    responses(
        (status = 201, description = "Vehicle added", body = VehicleResponse),
        (status = 409, description = "Start number already used in the garage")
    ),
    tag = "vehicles"
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateVehicleRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let vehicle = services::create(&state, &user, &req).await?;

    Ok((StatusCode::CREATED, Json(VehicleResponse::from(vehicle))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/vehicles/{id}",
    params(("id" = Uuid, Path, description = "Vehicle id")),
    request_body = UpdateVehicleRequest,
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleResponse),
        (status = 404, description = "Vehicle not found")
    ),
    tag = "vehicles"
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateVehicleRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let vehicle = services::update(&state, &user, id, &req).await?;

    Ok(Json(VehicleResponse::from(vehicle)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}",
    params(("id" = Uuid, Path, description = "Vehicle id")),
    security(("session_token" = [])),
    responses(
        (status = 204, description = "Vehicle removed"),
        (status = 404, description = "Vehicle not found")
    ),
    tag = "vehicles"
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete(&state, &user, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
