use storage::dto::weight::{
    ReplaceWeightLimitsRequest, WeightBoardEntryResponse, WeightControlRequest,
    WeightControlResponse, WeightLimitResponse,
};
use storage::error::StorageError;
use storage::models::{Role, WeightControl, WeightLimit};
use storage::repository::class::ClassRepository;
use storage::repository::event::EventRepository;
use storage::repository::weight::WeightRepository;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::{WebError, WebResult};
use crate::notify::ProcessingEvent;
use crate::state::AppState;

/// The scale board: every participant cleared for weight control (OK
/// check-in and approved inspection, resolved by join on every request)
/// with their readings so far and the class band for display.
pub async fn board(
    state: &AppState,
    actor: &CurrentUser,
    event_id: Uuid,
) -> WebResult<Vec<WeightBoardEntryResponse>> {
    let events = EventRepository::new(state.db.pool());
    let event = events.find_by_id(event_id).await?;

    actor.require_staff_for(event.club_id)?;

    let repo = WeightRepository::new(state.db.pool());
    let entries = repo.eligible_entries(event_id).await?;
    let controls = repo.list_controls(event_id).await?;
    let limits = repo.list_limits(event_id).await?;

    let board = entries
        .into_iter()
        .map(|entry| {
            let limit = limits
                .iter()
                .find(|l| l.class_id == entry.class_id)
                .cloned()
                .map(WeightLimitResponse::from);
            let readings = controls
                .iter()
                .filter(|c| c.start_number == entry.start_number)
                .cloned()
                .map(WeightControlResponse::from)
                .collect();

            WeightBoardEntryResponse {
                start_number: entry.start_number,
                user_id: entry.user_id,
                first_name: entry.first_name,
                last_name: entry.last_name,
                class_id: entry.class_id,
                class_name: entry.class_name,
                limit,
                readings,
            }
        })
        .collect();

    Ok(board)
}

/// Records a reading for one car in one heat. The participant must be
/// cleared for the scale; the result is the controller's verdict and is
/// stored as given.
pub async fn record(
    state: &AppState,
    actor: &CurrentUser,
    event_id: Uuid,
    req: &WeightControlRequest,
) -> WebResult<WeightControl> {
    actor.require_role(&[Role::WeightController, Role::Superadmin])?;

    let events = EventRepository::new(state.db.pool());
    events.find_by_id(event_id).await?;

    let classes = ClassRepository::new(state.db.pool());
    if classes
        .find_for_event(event_id, req.class_id)
        .await?
        .is_none()
    {
        return Err(StorageError::InvalidClass.into());
    }

    let repo = WeightRepository::new(state.db.pool());
    if !repo.is_eligible(event_id, req.start_number).await? {
        return Err(StorageError::InvalidState(
            "Participant is not cleared for weight control".to_string(),
        )
        .into());
    }

    let control = repo.upsert_control(event_id, actor.user_id, req).await?;

    state.notifier.publish(ProcessingEvent::weight_control(
        event_id,
        control.start_number,
        &control.result,
    ));

    Ok(control)
}

pub async fn list_limits(
    state: &AppState,
    actor: &CurrentUser,
    event_id: Uuid,
) -> WebResult<Vec<WeightLimit>> {
    let events = EventRepository::new(state.db.pool());
    let event = events.find_by_id(event_id).await?;

    actor.require_staff_for(event.club_id)?;

    let repo = WeightRepository::new(state.db.pool());
    Ok(repo.list_limits(event_id).await?)
}

/// Replaces the event's weight bands wholesale. Every class must belong
/// to the event; the swap itself is one transaction.
pub async fn replace_limits(
    state: &AppState,
    actor: &CurrentUser,
    event_id: Uuid,
    req: &ReplaceWeightLimitsRequest,
) -> WebResult<Vec<WeightLimit>> {
    let events = EventRepository::new(state.db.pool());
    let event = events.find_by_id(event_id).await?;

    require_limit_writer(actor, event.club_id)?;

    let classes = ClassRepository::new(state.db.pool());
    for spec in &req.limits {
        if classes
            .find_for_event(event_id, spec.class_id)
            .await?
            .is_none()
        {
            return Err(StorageError::InvalidClass.into());
        }
    }

    let repo = WeightRepository::new(state.db.pool());
    Ok(repo.replace_limits(event_id, &req.limits).await?)
}

fn require_limit_writer(actor: &CurrentUser, club_id: Uuid) -> Result<(), WebError> {
    match actor.role {
        Role::Superadmin | Role::WeightController => Ok(()),
        Role::ClubAdmin if actor.club_id == Some(club_id) => Ok(()),
        _ => Err(WebError::Forbidden(
            "Weight limits are managed by weight controllers or the owning club's admin"
                .to_string(),
        )),
    }
}
