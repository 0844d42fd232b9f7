use chrono::Utc;
use storage::dto::inspection::{InspectionHistoryQuery, InspectionRequest};
use storage::models::{Role, TechnicalInspection};
use storage::repository::event::EventRepository;
use storage::repository::inspection::InspectionRepository;
use storage::services::inspection_history::{self, InspectionHistory};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::{WebError, WebResult};
use crate::notify::ProcessingEvent;
use crate::state::AppState;

/// Records (or re-records) the inspection for one car in one event.
/// Inspectors only; everyone else is read-only.
pub async fn record(
    state: &AppState,
    actor: &CurrentUser,
    req: &InspectionRequest,
) -> WebResult<TechnicalInspection> {
    actor.require_role(&[Role::TechnicalInspector])?;

    let events = EventRepository::new(state.db.pool());
    let event = events.find_by_id(req.event_id).await?;

    let repo = InspectionRepository::new(state.db.pool());
    let inspection = repo.upsert(event.club_id, actor.user_id, req).await?;

    state.notifier.publish(ProcessingEvent::inspection(
        inspection.event_id,
        inspection.start_number,
        &inspection.status,
    ));

    Ok(inspection)
}

pub async fn list_for_event(
    state: &AppState,
    actor: &CurrentUser,
    event_id: Uuid,
) -> WebResult<Vec<TechnicalInspection>> {
    let events = EventRepository::new(state.db.pool());
    let event = events.find_by_id(event_id).await?;

    actor.require_staff_for(event.club_id)?;

    let repo = InspectionRepository::new(state.db.pool());
    Ok(repo.list_for_event(event_id).await?)
}

/// Cross-event history for a vehicle identity, matched by chassis number
/// or license plate over all clubs.
pub async fn history(
    state: &AppState,
    actor: &CurrentUser,
    query: &InspectionHistoryQuery,
) -> WebResult<InspectionHistory> {
    actor.require_role(&[
        Role::TechnicalInspector,
        Role::ClubAdmin,
        Role::Superadmin,
        Role::FederationAdmin,
    ])?;

    let repo = InspectionRepository::new(state.db.pool());

    let records = match (&query.chassis, &query.plate) {
        (Some(chassis), _) if !chassis.is_empty() => repo.history_by_chassis(chassis).await?,
        (_, Some(plate)) if !plate.is_empty() => repo.history_by_plate(plate).await?,
        _ => {
            return Err(WebError::BadRequest(
                "Provide a chassis number or a license plate".to_string(),
            ));
        }
    };

    Ok(inspection_history::summarize(&records, Utc::now()))
}
