use storage::dto::class::ClassSpec;
use storage::models::{ClubClass, GlobalClass};
use storage::repository::class::ClassRepository;
use storage::repository::club::ClubRepository;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::WebResult;
use crate::state::AppState;

pub async fn list_global(state: &AppState) -> WebResult<Vec<GlobalClass>> {
    let repo = ClassRepository::new(state.db.pool());
    Ok(repo.list_global().await?)
}

pub async fn list_for_club(state: &AppState, club_id: Uuid) -> WebResult<Vec<ClubClass>> {
    // Listing is open to any authenticated user; the club must exist.
    ClubRepository::new(state.db.pool()).find_by_id(club_id).await?;

    let repo = ClassRepository::new(state.db.pool());
    Ok(repo.list_for_club(club_id).await?)
}

pub async fn create_club_class(
    state: &AppState,
    actor: &CurrentUser,
    club_id: Uuid,
    spec: &ClassSpec,
) -> WebResult<ClubClass> {
    actor.require_club_admin_of(club_id)?;
    ClubRepository::new(state.db.pool()).find_by_id(club_id).await?;

    let repo = ClassRepository::new(state.db.pool());
    Ok(repo.create_club_class(club_id, spec).await?)
}
