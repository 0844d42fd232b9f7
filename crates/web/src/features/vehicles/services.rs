use storage::dto::vehicle::{CreateVehicleRequest, UpdateVehicleRequest};
use storage::models::UserVehicle;
use storage::repository::vehicle::VehicleRepository;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::{WebError, WebResult};
use crate::state::AppState;

pub async fn list(state: &AppState, actor: &CurrentUser) -> WebResult<Vec<UserVehicle>> {
    let repo = VehicleRepository::new(state.db.pool());
    Ok(repo.list_for_user(actor.user_id).await?)
}

pub async fn create(
    state: &AppState,
    actor: &CurrentUser,
    req: &CreateVehicleRequest,
) -> WebResult<UserVehicle> {
    let repo = VehicleRepository::new(state.db.pool());
    Ok(repo.create(actor.user_id, req).await?)
}

pub async fn update(
    state: &AppState,
    actor: &CurrentUser,
    vehicle_id: Uuid,
    req: &UpdateVehicleRequest,
) -> WebResult<UserVehicle> {
    let repo = VehicleRepository::new(state.db.pool());
    let vehicle = owned_vehicle(&repo, actor, vehicle_id).await?;

    Ok(repo.update(vehicle_id, &vehicle, req).await?)
}

pub async fn delete(state: &AppState, actor: &CurrentUser, vehicle_id: Uuid) -> WebResult<()> {
    let repo = VehicleRepository::new(state.db.pool());
    owned_vehicle(&repo, actor, vehicle_id).await?;

    repo.delete(vehicle_id).await?;
    Ok(())
}

/// Garage entries are private: someone else's vehicle id reads as absent.
async fn owned_vehicle(
    repo: &VehicleRepository<'_>,
    actor: &CurrentUser,
    vehicle_id: Uuid,
) -> WebResult<UserVehicle> {
    let vehicle = repo.find_by_id(vehicle_id).await?;

    if vehicle.user_id != actor.user_id {
        return Err(WebError::NotFound);
    }

    Ok(vehicle)
}
